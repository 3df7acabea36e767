//! Employee operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ShiftError, ShiftResult};
use crate::models::{Employee, EmployeeId, EmployeeSummary, NewEmployee, Shift, ShiftId};
use crate::scheduling::{ScheduleWindow, current_week_hours, shift_schedule};

use super::Repository;
use super::shifts::sort_shifts;

impl Repository {
    /// Registers an employee.
    ///
    /// # Errors
    ///
    /// Fails if the name is empty or a referenced account or department does
    /// not exist.
    pub fn create_employee(&mut self, input: NewEmployee) -> ShiftResult<Employee> {
        if input.name.is_empty() {
            return Err(ShiftError::MissingField {
                field: "name".to_string(),
            });
        }
        if let Some(account_id) = input.analytic_account_id {
            self.ensure_account(account_id)?;
        }
        if let Some(department_id) = input.department_id {
            self.ensure_department(department_id)?;
        }

        let employee = Employee::new(Uuid::new_v4(), input);
        info!(employee_id = %employee.id, "Employee created");
        self.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    /// Returns an employee by id.
    pub fn employee(&self, id: EmployeeId) -> ShiftResult<Employee> {
        self.employees
            .get(&id)
            .cloned()
            .ok_or(ShiftError::EmployeeNotFound { id })
    }

    fn assigned_shifts(&self, id: EmployeeId) -> impl Iterator<Item = &Shift> {
        self.shifts.values().filter(move |s| s.is_assigned(id))
    }

    /// Shifts the employee is assigned to, ordered by date then start time.
    pub fn employee_shifts(&self, id: EmployeeId) -> ShiftResult<Vec<Shift>> {
        self.employee(id)?;
        let mut shifts: Vec<Shift> = self.assigned_shifts(id).cloned().collect();
        sort_shifts(&mut shifts);
        Ok(shifts)
    }

    /// Hours of active shifts assigned to the employee in the week of `today`.
    pub fn current_week_hours(&self, id: EmployeeId, today: NaiveDate) -> ShiftResult<Decimal> {
        self.employee(id)?;
        let hours = current_week_hours(self.assigned_shifts(id), today);
        debug!(employee_id = %id, hours = %hours, "Computed current week hours");
        Ok(hours)
    }

    /// Returns an employee with its assigned shifts and current-week hours.
    pub fn employee_summary(
        &self,
        id: EmployeeId,
        today: NaiveDate,
    ) -> ShiftResult<EmployeeSummary> {
        let employee = self.employee(id)?;
        let shifts = self.employee_shifts(id)?;
        let hours = current_week_hours(&shifts, today);
        Ok(EmployeeSummary::new(employee, &shifts, hours, today))
    }

    /// Assigned shifts dated within `[start, end]`, ordered by date.
    ///
    /// `start` defaults to `today` and `end` to seven days after `start`.
    pub fn shift_schedule(
        &self,
        id: EmployeeId,
        today: NaiveDate,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ShiftResult<Vec<Shift>> {
        self.employee(id)?;
        let window = ScheduleWindow::resolve(today, start, end);
        Ok(shift_schedule(self.assigned_shifts(id), window)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Assigns the employee to a shift. Assigning twice is a no-op.
    pub fn assign_shift(
        &mut self,
        employee_id: EmployeeId,
        shift_id: ShiftId,
    ) -> ShiftResult<Shift> {
        self.employee(employee_id)?;
        let shift = self
            .shifts
            .get_mut(&shift_id)
            .ok_or(ShiftError::ShiftNotFound { id: shift_id })?;
        shift.employee_ids.insert(employee_id);
        info!(employee_id = %employee_id, shift_id = %shift_id, "Employee assigned to shift");
        Ok(shift.clone())
    }

    /// Removes the employee from a shift. Removing an absent assignment is a no-op.
    pub fn unassign_shift(
        &mut self,
        employee_id: EmployeeId,
        shift_id: ShiftId,
    ) -> ShiftResult<Shift> {
        self.employee(employee_id)?;
        let shift = self
            .shifts
            .get_mut(&shift_id)
            .ok_or(ShiftError::ShiftNotFound { id: shift_id })?;
        shift.employee_ids.remove(&employee_id);
        info!(employee_id = %employee_id, shift_id = %shift_id, "Employee removed from shift");
        Ok(shift.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PreferredShiftType, ShiftState};
    use crate::repository::fixtures::*;

    fn assigned_shift(
        repo: &mut Repository,
        account: Uuid,
        employee: EmployeeId,
        date: &str,
        start: i64,
        end: i64,
    ) -> ShiftId {
        let mut input = new_shift(account, date, start, end);
        input.employee_ids = vec![employee];
        repo.create_shift(input, company()).unwrap().id
    }

    #[test]
    fn test_create_employee_checks_references() {
        let mut repo = Repository::default();
        let result = repo.create_employee(NewEmployee {
            name: "Ayşe".to_string(),
            analytic_account_id: Some(Uuid::new_v4()),
            department_id: None,
            preferred_shift_type: PreferredShiftType::Any,
            max_hours_per_week: Decimal::new(40, 0),
        });
        assert!(matches!(result, Err(ShiftError::AccountNotFound { .. })));

        let result = repo.create_employee(NewEmployee {
            name: String::new(),
            analytic_account_id: None,
            department_id: None,
            preferred_shift_type: PreferredShiftType::Any,
            max_hours_per_week: Decimal::new(40, 0),
        });
        assert!(matches!(result, Err(ShiftError::MissingField { .. })));
    }

    #[test]
    fn test_current_week_hours_sums_confirmed_and_skips_draft() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);

        let a = assigned_shift(&mut repo, account, employee, "2026-01-12", 9, 17);
        let b = assigned_shift(&mut repo, account, employee, "2026-01-14", 8, 14);
        assigned_shift(&mut repo, account, employee, "2026-01-15", 9, 17);
        repo.confirm_shift(a).unwrap();
        repo.confirm_shift(b).unwrap();

        let hours = repo
            .current_week_hours(employee, make_date("2026-01-15"))
            .unwrap();
        assert_eq!(hours, Decimal::new(14, 0));
    }

    #[test]
    fn test_current_week_hours_ignores_unassigned_shifts() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);
        let other = repo
            .create_shift(new_shift(account, "2026-01-13", 9, 17), company())
            .unwrap();
        repo.confirm_shift(other.id).unwrap();

        let hours = repo
            .current_week_hours(employee, make_date("2026-01-15"))
            .unwrap();
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_week_hours_follow_state_and_duration_changes() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);
        let shift = assigned_shift(&mut repo, account, employee, "2026-01-13", 9, 17);
        let today = make_date("2026-01-15");

        repo.start_shift(shift).unwrap();
        assert_eq!(repo.current_week_hours(employee, today).unwrap(), Decimal::new(8, 0));

        repo.update_shift(
            shift,
            crate::models::ShiftUpdate {
                end_time: Some(Decimal::new(13, 0)),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(repo.current_week_hours(employee, today).unwrap(), Decimal::new(4, 0));

        repo.cancel_shift(shift).unwrap();
        assert_eq!(repo.current_week_hours(employee, today).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_employee_summary() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);
        let late = assigned_shift(&mut repo, account, employee, "2026-01-14", 22, 6);
        let early = assigned_shift(&mut repo, account, employee, "2026-01-13", 9, 17);
        repo.complete_shift(late).unwrap();

        let summary = repo
            .employee_summary(employee, make_date("2026-01-15"))
            .unwrap();
        assert_eq!(summary.shift_ids, vec![early, late]);
        assert_eq!(summary.current_week_hours, Decimal::new(8, 0));
        assert_eq!(summary.employee.max_hours_per_week, Decimal::new(40, 0));
    }

    #[test]
    fn test_shift_schedule_default_window() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);
        let before = assigned_shift(&mut repo, account, employee, "2026-01-14", 9, 17);
        let last = assigned_shift(&mut repo, account, employee, "2026-01-22", 9, 17);
        let first = assigned_shift(&mut repo, account, employee, "2026-01-15", 9, 17);
        let after = assigned_shift(&mut repo, account, employee, "2026-01-23", 9, 17);

        let schedule = repo
            .shift_schedule(employee, make_date("2026-01-15"), None, None)
            .unwrap();
        let ids: Vec<ShiftId> = schedule.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first, last]);
        assert!(!ids.contains(&before));
        assert!(!ids.contains(&after));
        assert!(schedule.iter().all(|s| s.state() == ShiftState::Draft));
    }

    #[test]
    fn test_shift_schedule_explicit_window() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);
        let shift = assigned_shift(&mut repo, account, employee, "2026-03-02", 9, 17);

        let schedule = repo
            .shift_schedule(
                employee,
                make_date("2026-01-15"),
                Some(make_date("2026-03-01")),
                Some(make_date("2026-03-31")),
            )
            .unwrap();
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule[0].id, shift);
    }

    #[test]
    fn test_assign_and_unassign() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);
        let shift = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap();

        let assigned = repo.assign_shift(employee, shift.id).unwrap();
        assert!(assigned.is_assigned(employee));
        repo.assign_shift(employee, shift.id).unwrap();
        assert_eq!(repo.employee_shifts(employee).unwrap().len(), 1);

        let removed = repo.unassign_shift(employee, shift.id).unwrap();
        assert!(!removed.is_assigned(employee));
        assert!(repo.employee_shifts(employee).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_employee() {
        let repo = Repository::default();
        assert!(matches!(
            repo.current_week_hours(Uuid::new_v4(), make_date("2026-01-15")),
            Err(ShiftError::EmployeeNotFound { .. })
        ));
    }
}
