//! Request types for the shift management API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! endpoints, and their conversion into domain inputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AccountId, DepartmentId, EmployeeId, NewShift, ShiftId, ShiftType};

/// Request body for `POST /shifts`.
///
/// Same as [`NewShift`] except that the date may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShiftRequest {
    /// Explicit name.
    #[serde(default)]
    pub name: Option<String>,
    /// Shift date. Defaults to today.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Start as fractional hour of day.
    pub start_time: Decimal,
    /// End as fractional hour of day.
    pub end_time: Decimal,
    /// The kind of shift.
    #[serde(default)]
    pub shift_type: ShiftType,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// The owning analytic account.
    pub analytic_account_id: AccountId,
    /// Optional department.
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    /// Staff assigned to the shift.
    #[serde(default)]
    pub employee_ids: Vec<EmployeeId>,
}

impl CreateShiftRequest {
    /// Converts into a domain input, dating the shift `today` when unset.
    pub fn into_new_shift(self, today: NaiveDate) -> NewShift {
        NewShift {
            name: self.name,
            date: self.date.unwrap_or(today),
            start_time: self.start_time,
            end_time: self.end_time,
            shift_type: self.shift_type,
            notes: self.notes,
            analytic_account_id: self.analytic_account_id,
            department_id: self.department_id,
            employee_ids: self.employee_ids,
        }
    }
}

/// Request body for batch lifecycle actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchActionRequest {
    /// Shifts to transition.
    pub ids: Vec<ShiftId>,
}

/// Query string for `GET /employees/{id}/schedule`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleParams {
    /// First date included. Defaults to today.
    pub start_date: Option<NaiveDate>,
    /// Last date included. Defaults to seven days after the start.
    pub end_date: Option<NaiveDate>,
}

/// Query string for `GET /departments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentListParams {
    /// Include archived departments.
    pub include_archived: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_shift_request_date_defaults_to_today() {
        let json = r#"{
            "start_time": 9,
            "end_time": 17,
            "analytic_account_id": "6f1c2f0e-8d1a-4c55-9a0e-2b8a1d8c1f10"
        }"#;

        let request: CreateShiftRequest = serde_json::from_str(json).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let input = request.into_new_shift(today);
        assert_eq!(input.date, today);
        assert_eq!(input.shift_type, ShiftType::Morning);
    }

    #[test]
    fn test_create_shift_request_keeps_explicit_date() {
        let json = r#"{
            "date": "2026-02-01",
            "start_time": 22,
            "end_time": 6,
            "shift_type": "night",
            "analytic_account_id": "6f1c2f0e-8d1a-4c55-9a0e-2b8a1d8c1f10"
        }"#;

        let request: CreateShiftRequest = serde_json::from_str(json).unwrap();
        let input = request.into_new_shift(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
        assert_eq!(input.date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(input.shift_type, ShiftType::Night);
    }

    #[test]
    fn test_create_shift_request_missing_account_rejected() {
        let json = r#"{ "start_time": 9, "end_time": 17 }"#;
        let result: Result<CreateShiftRequest, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("analytic_account_id"));
    }
}
