//! Department operations.

use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{ShiftError, ShiftResult};
use crate::models::{Department, DepartmentId, DepartmentSummary, Employee, NewDepartment};

use super::Repository;

impl Repository {
    /// Creates a department, deriving its code from the name when absent.
    ///
    /// Codes are not required to be unique; a duplicate is logged and kept.
    pub fn create_department(&mut self, input: NewDepartment) -> ShiftResult<Department> {
        self.ensure_account(input.analytic_account_id)?;

        let department = Department::create(Uuid::new_v4(), input)?;
        if self
            .departments
            .values()
            .any(|d| d.code == department.code)
        {
            warn!(code = %department.code, "Department code already in use");
        }
        info!(
            department_id = %department.id,
            code = %department.code,
            "Department created"
        );
        self.departments.insert(department.id, department.clone());
        Ok(department)
    }

    /// Returns a department by id.
    pub fn department(&self, id: DepartmentId) -> ShiftResult<Department> {
        self.departments
            .get(&id)
            .cloned()
            .ok_or(ShiftError::DepartmentNotFound { id })
    }

    /// Returns a department with its member count.
    pub fn department_summary(&self, id: DepartmentId) -> ShiftResult<DepartmentSummary> {
        let department = self.department(id)?;
        let employee_count = self.department_employee_count(id)?;
        Ok(DepartmentSummary {
            department,
            employee_count,
        })
    }

    /// Number of staff whose department is `id`.
    pub fn department_employee_count(&self, id: DepartmentId) -> ShiftResult<usize> {
        self.ensure_department(id)?;
        Ok(self
            .employees
            .values()
            .filter(|e| e.department_id == Some(id))
            .count())
    }

    /// Staff whose department is `id`, ordered by name.
    pub fn department_employees(&self, id: DepartmentId) -> ShiftResult<Vec<Employee>> {
        self.ensure_department(id)?;
        let mut employees: Vec<Employee> = self
            .employees
            .values()
            .filter(|e| e.department_id == Some(id))
            .cloned()
            .collect();
        employees.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(employees)
    }

    /// Lists departments ordered by name. Archived ones are skipped unless
    /// `include_archived` is set.
    pub fn list_departments(&self, include_archived: bool) -> Vec<Department> {
        let mut departments: Vec<Department> = self
            .departments
            .values()
            .filter(|d| include_archived || d.active)
            .cloned()
            .collect();
        departments.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        departments
    }

    /// Archives or restores a department.
    pub fn set_department_active(
        &mut self,
        id: DepartmentId,
        active: bool,
    ) -> ShiftResult<Department> {
        let department = self
            .departments
            .get_mut(&id)
            .ok_or(ShiftError::DepartmentNotFound { id })?;
        department.active = active;
        info!(department_id = %id, active, "Department active flag changed");
        Ok(department.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::fixtures::*;

    #[test]
    fn test_create_department_derives_code() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let id = add_department(&mut repo, "Kitchen Staff", account);
        assert_eq!(repo.department(id).unwrap().code, "KITCHEN_STAFF");
    }

    #[test]
    fn test_create_department_requires_account() {
        let mut repo = Repository::default();
        let result = repo.create_department(NewDepartment {
            name: "Kitchen Staff".to_string(),
            code: None,
            description: None,
            active: true,
            analytic_account_id: Uuid::new_v4(),
        });
        assert!(matches!(result, Err(ShiftError::AccountNotFound { .. })));
    }

    #[test]
    fn test_duplicate_codes_allowed() {
        crate::logging::init_test();
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let a = add_department(&mut repo, "Kitchen Staff", account);
        let b = add_department(&mut repo, "Kitchen Staff", account);
        assert_ne!(a, b);
        assert_eq!(
            repo.department(a).unwrap().code,
            repo.department(b).unwrap().code
        );
    }

    #[test]
    fn test_employee_count_and_members() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let kitchen = add_department(&mut repo, "Kitchen", account);
        let bar = add_department(&mut repo, "Bar", account);
        add_employee(&mut repo, "Zeynep", None, Some(kitchen));
        add_employee(&mut repo, "Ali", None, Some(kitchen));
        add_employee(&mut repo, "Deniz", None, Some(bar));

        assert_eq!(repo.department_employee_count(kitchen).unwrap(), 2);
        let summary = repo.department_summary(bar).unwrap();
        assert_eq!(summary.employee_count, 1);

        let names: Vec<String> = repo
            .department_employees(kitchen)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Ali", "Zeynep"]);
    }

    #[test]
    fn test_unknown_department_count_fails() {
        let repo = Repository::default();
        assert!(matches!(
            repo.department_employee_count(Uuid::new_v4()),
            Err(ShiftError::DepartmentNotFound { .. })
        ));
    }

    #[test]
    fn test_archived_departments_hidden_by_default() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let kitchen = add_department(&mut repo, "Kitchen", account);
        add_department(&mut repo, "Bar", account);

        repo.set_department_active(kitchen, false).unwrap();

        let names: Vec<String> = repo
            .list_departments(false)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Bar"]);

        let names: Vec<String> = repo
            .list_departments(true)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Bar", "Kitchen"]);

        assert!(repo.set_department_active(kitchen, true).unwrap().active);
    }
}
