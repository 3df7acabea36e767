//! Core data models for shift management.
//!
//! This module contains the record types managed by the crate: shifts,
//! departments, employees and analytic accounts, along with the inputs used
//! to create and update them.

mod account;
mod department;
mod employee;
mod shift;

use uuid::Uuid;

/// Identifier of a [`Shift`].
pub type ShiftId = Uuid;
/// Identifier of a [`Department`].
pub type DepartmentId = Uuid;
/// Identifier of an [`Employee`].
pub type EmployeeId = Uuid;
/// Identifier of an [`AnalyticAccount`].
pub type AccountId = Uuid;
/// Identifier of the company owning a shift.
pub type CompanyId = Uuid;

pub use account::{AccountSummary, AnalyticAccount, NewAccount};
pub use department::{Department, DepartmentSummary, NewDepartment, derive_code};
pub use employee::{
    DEFAULT_MAX_HOURS_PER_WEEK, Employee, EmployeeSummary, NewEmployee, PreferredShiftType,
};
pub use shift::{NewShift, Shift, ShiftAction, ShiftState, ShiftType, ShiftUpdate};
