//! Department model.
//!
//! Departments group staff for scheduling and are booked against an
//! analytic account.

use serde::{Deserialize, Serialize};

use crate::error::{ShiftError, ShiftResult};

use super::{AccountId, DepartmentId};

/// Input for creating a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDepartment {
    /// Display name.
    pub name: String,
    /// Short code. Derived from the name when absent or empty.
    #[serde(default)]
    pub code: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the department is active.
    #[serde(default = "default_active")]
    pub active: bool,
    /// The owning analytic account.
    pub analytic_account_id: AccountId,
}

fn default_active() -> bool {
    true
}

/// A named grouping of staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: DepartmentId,
    /// Display name.
    pub name: String,
    /// Short code. Not guaranteed unique.
    pub code: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether the department is active. Inactive departments are archived.
    pub active: bool,
    /// The owning analytic account.
    pub analytic_account_id: AccountId,
}

impl Department {
    /// Builds a department, deriving the code from the name when needed.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftError::MissingField`] when the name is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_management::models::{Department, NewDepartment};
    /// use uuid::Uuid;
    ///
    /// let department = Department::create(
    ///     Uuid::new_v4(),
    ///     NewDepartment {
    ///         name: "Kitchen Staff".to_string(),
    ///         code: None,
    ///         description: None,
    ///         active: true,
    ///         analytic_account_id: Uuid::new_v4(),
    ///     },
    /// )
    /// .unwrap();
    /// assert_eq!(department.code, "KITCHEN_STAFF");
    /// ```
    pub fn create(id: DepartmentId, input: NewDepartment) -> ShiftResult<Self> {
        if input.name.is_empty() {
            return Err(ShiftError::MissingField {
                field: "name".to_string(),
            });
        }

        let code = match input.code {
            Some(code) if !code.is_empty() => code,
            _ => derive_code(&input.name),
        };

        Ok(Self {
            id,
            name: input.name,
            code,
            description: input.description,
            active: input.active,
            analytic_account_id: input.analytic_account_id,
        })
    }
}

/// Derives a department code from its name: uppercase, spaces to underscores.
pub fn derive_code(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// A department together with its member count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentSummary {
    /// The department record.
    #[serde(flatten)]
    pub department: Department,
    /// Number of staff in the department.
    pub employee_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn new_department(name: &str, code: Option<&str>) -> NewDepartment {
        NewDepartment {
            name: name.to_string(),
            code: code.map(str::to_string),
            description: None,
            active: true,
            analytic_account_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn test_code_derived_from_name() {
        let department =
            Department::create(Uuid::new_v4(), new_department("Kitchen Staff", None)).unwrap();
        assert_eq!(department.code, "KITCHEN_STAFF");
    }

    #[test]
    fn test_empty_code_is_derived() {
        let department =
            Department::create(Uuid::new_v4(), new_department("front desk", Some(""))).unwrap();
        assert_eq!(department.code, "FRONT_DESK");
    }

    #[test]
    fn test_explicit_code_kept() {
        let department =
            Department::create(Uuid::new_v4(), new_department("Kitchen Staff", Some("KS")))
                .unwrap();
        assert_eq!(department.code, "KS");
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Department::create(Uuid::new_v4(), new_department("", None));
        assert!(matches!(
            result,
            Err(ShiftError::MissingField { ref field }) if field == "name"
        ));
    }

    #[test]
    fn test_derive_code_handles_unicode() {
        assert_eq!(derive_code("Gece Ekibi"), "GECE_EKIBI");
        assert_eq!(derive_code("çağrı merkezi"), "ÇAĞRI_MERKEZI");
    }

    #[test]
    fn test_deserialize_defaults_active() {
        let json = r#"{
            "name": "Kitchen Staff",
            "analytic_account_id": "6f1c2f0e-8d1a-4c55-9a0e-2b8a1d8c1f10"
        }"#;
        let input: NewDepartment = serde_json::from_str(json).unwrap();
        assert!(input.active);
        assert!(input.code.is_none());
    }
}
