//! Analytic account operations.

use tracing::info;
use uuid::Uuid;

use crate::error::{ShiftError, ShiftResult};
use crate::models::{AccountId, AccountSummary, AnalyticAccount, Employee, NewAccount, Shift};

use super::Repository;
use super::shifts::sort_shifts;

impl Repository {
    /// Registers an analytic account.
    pub fn create_account(&mut self, input: NewAccount) -> ShiftResult<AnalyticAccount> {
        let account = AnalyticAccount::create(Uuid::new_v4(), input)?;
        info!(account_id = %account.id, "Analytic account created");
        self.accounts.insert(account.id, account.clone());
        Ok(account)
    }

    /// Returns an account by id.
    pub fn account(&self, id: AccountId) -> ShiftResult<AnalyticAccount> {
        self.accounts
            .get(&id)
            .cloned()
            .ok_or(ShiftError::AccountNotFound { id })
    }

    /// Returns an account with its linked staff and shift counts.
    pub fn account_summary(&self, id: AccountId) -> ShiftResult<AccountSummary> {
        Ok(AccountSummary {
            account: self.account(id)?,
            employee_count: self.account_employee_count(id)?,
            shift_count: self.account_shift_count(id)?,
        })
    }

    /// Number of staff booked against the account.
    pub fn account_employee_count(&self, id: AccountId) -> ShiftResult<usize> {
        self.ensure_account(id)?;
        Ok(self
            .employees
            .values()
            .filter(|e| e.analytic_account_id == Some(id))
            .count())
    }

    /// Number of shifts booked against the account.
    pub fn account_shift_count(&self, id: AccountId) -> ShiftResult<usize> {
        self.ensure_account(id)?;
        Ok(self
            .shifts
            .values()
            .filter(|s| s.analytic_account_id == id)
            .count())
    }

    /// Staff booked against the account, ordered by name.
    pub fn account_employees(&self, id: AccountId) -> ShiftResult<Vec<Employee>> {
        self.ensure_account(id)?;
        let mut employees: Vec<Employee> = self
            .employees
            .values()
            .filter(|e| e.analytic_account_id == Some(id))
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(employees)
    }

    /// Shifts booked against the account, ordered by date then start time.
    pub fn account_shifts(&self, id: AccountId) -> ShiftResult<Vec<Shift>> {
        self.ensure_account(id)?;
        let mut shifts: Vec<Shift> = self
            .shifts
            .values()
            .filter(|s| s.analytic_account_id == id)
            .cloned()
            .collect();
        sort_shifts(&mut shifts);
        Ok(shifts)
    }
}
