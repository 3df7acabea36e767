//! Employee model and related types.
//!
//! Staff records are owned by the wider HR system; this crate keeps the
//! attributes it needs for scheduling: the analytic account and department
//! links, the preferred shift type and the weekly hour cap.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AccountId, DepartmentId, EmployeeId, Shift, ShiftId};

/// Default weekly hour cap.
pub const DEFAULT_MAX_HOURS_PER_WEEK: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// The shift type an employee prefers to work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredShiftType {
    /// Prefers morning shifts.
    Morning,
    /// Prefers afternoon shifts.
    Afternoon,
    /// Prefers night shifts.
    Night,
    /// No preference.
    #[default]
    Any,
}

/// Input for registering an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Optional analytic account the employee is booked against.
    #[serde(default)]
    pub analytic_account_id: Option<AccountId>,
    /// Optional scheduling department.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// Preferred shift type.
    #[serde(default)]
    pub preferred_shift_type: PreferredShiftType,
    /// Weekly hour cap.
    #[serde(default = "default_max_hours_per_week")]
    pub max_hours_per_week: Decimal,
}

fn default_max_hours_per_week() -> Decimal {
    DEFAULT_MAX_HOURS_PER_WEEK
}

impl Default for NewEmployee {
    fn default() -> Self {
        Self {
            name: String::new(),
            analytic_account_id: None,
            department_id: None,
            preferred_shift_type: PreferredShiftType::Any,
            max_hours_per_week: DEFAULT_MAX_HOURS_PER_WEEK,
        }
    }
}

/// A staff member with scheduling attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Optional analytic account the employee is booked against.
    pub analytic_account_id: Option<AccountId>,
    /// Optional scheduling department.
    pub department_id: Option<DepartmentId>,
    /// Preferred shift type.
    pub preferred_shift_type: PreferredShiftType,
    /// Weekly hour cap.
    pub max_hours_per_week: Decimal,
}

impl Employee {
    /// Builds an employee record from its input.
    pub fn new(id: EmployeeId, input: NewEmployee) -> Self {
        Self {
            id,
            name: input.name,
            analytic_account_id: input.analytic_account_id,
            department_id: input.department_id,
            preferred_shift_type: input.preferred_shift_type,
            max_hours_per_week: input.max_hours_per_week,
        }
    }
}

/// An employee together with its derived scheduling values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    /// The employee record.
    #[serde(flatten)]
    pub employee: Employee,
    /// Shifts assigned to the employee, in schedule order.
    pub shift_ids: Vec<ShiftId>,
    /// Hours in active states within the current week.
    pub current_week_hours: Decimal,
    /// The date the current week was computed from.
    pub as_of: NaiveDate,
}

impl EmployeeSummary {
    /// Builds a summary from an employee and its assigned shifts.
    pub fn new(
        employee: Employee,
        shifts: &[Shift],
        current_week_hours: Decimal,
        as_of: NaiveDate,
    ) -> Self {
        Self {
            employee,
            shift_ids: shifts.iter().map(|s| s.id).collect(),
            current_week_hours,
            as_of,
        }
    }
}
