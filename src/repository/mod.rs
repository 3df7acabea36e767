//! In-memory record store.
//!
//! The [`Repository`] owns every shift, department, employee and analytic
//! account. It checks that referenced records exist, answers reverse-relation
//! queries by foreign-key equality and recomputes derived values on demand.
//! Every operation validates before it writes, so a failed call leaves the
//! store unchanged.

mod accounts;
mod departments;
mod employees;
mod shifts;

use std::collections::HashMap;

use crate::error::{ShiftError, ShiftResult};
use crate::locale::Locale;
use crate::models::{
    AccountId, AnalyticAccount, Department, DepartmentId, Employee, EmployeeId, Shift, ShiftId,
};

pub use shifts::ShiftQuery;

/// Store for all scheduling records.
#[derive(Debug, Default)]
pub struct Repository {
    locale: Locale,
    shifts: HashMap<ShiftId, Shift>,
    departments: HashMap<DepartmentId, Department>,
    employees: HashMap<EmployeeId, Employee>,
    accounts: HashMap<AccountId, AnalyticAccount>,
}

impl Repository {
    /// Creates an empty repository deriving shift names in `locale`.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Self::default()
        }
    }

    /// The locale used for derived shift names.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    fn ensure_account(&self, id: AccountId) -> ShiftResult<()> {
        if self.accounts.contains_key(&id) {
            Ok(())
        } else {
            Err(ShiftError::AccountNotFound { id })
        }
    }

    fn ensure_department(&self, id: DepartmentId) -> ShiftResult<()> {
        if self.departments.contains_key(&id) {
            Ok(())
        } else {
            Err(ShiftError::DepartmentNotFound { id })
        }
    }

    fn ensure_employees<'a, I>(&self, ids: I) -> ShiftResult<()>
    where
        I: IntoIterator<Item = &'a EmployeeId>,
    {
        for id in ids {
            if !self.employees.contains_key(id) {
                return Err(ShiftError::EmployeeNotFound { id: *id });
            }
        }
        Ok(())
    }
}
