//! Shift operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::{ShiftError, ShiftResult};
use crate::models::{
    AccountId, CompanyId, DepartmentId, EmployeeId, NewShift, Shift, ShiftAction, ShiftId,
    ShiftState, ShiftUpdate,
};

use super::Repository;

/// Filters for listing shifts. Absent filters match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftQuery {
    /// Only shifts booked against this account.
    pub analytic_account_id: Option<AccountId>,
    /// Only shifts of this department.
    pub department_id: Option<DepartmentId>,
    /// Only shifts this employee is assigned to.
    pub employee_id: Option<EmployeeId>,
    /// Only shifts in this state.
    pub state: Option<ShiftState>,
    /// Only shifts dated on or after this date.
    pub from_date: Option<NaiveDate>,
    /// Only shifts dated on or before this date.
    pub to_date: Option<NaiveDate>,
}

impl ShiftQuery {
    /// Returns true if the shift passes every filter.
    pub fn matches(&self, shift: &Shift) -> bool {
        self.analytic_account_id
            .is_none_or(|id| shift.analytic_account_id == id)
            && self
                .department_id
                .is_none_or(|id| shift.department_id == Some(id))
            && self.employee_id.is_none_or(|id| shift.is_assigned(id))
            && self.state.is_none_or(|state| shift.state() == state)
            && self.from_date.is_none_or(|from| shift.date >= from)
            && self.to_date.is_none_or(|to| shift.date <= to)
    }
}

pub(super) fn sort_shifts(shifts: &mut [Shift]) {
    shifts.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time().cmp(&b.start_time()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl Repository {
    /// Creates a draft shift owned by `company_id`.
    ///
    /// # Errors
    ///
    /// Fails if the times are invalid for the shift type, or if the account,
    /// department or any assigned employee does not exist.
    pub fn create_shift(&mut self, input: NewShift, company_id: CompanyId) -> ShiftResult<Shift> {
        self.ensure_account(input.analytic_account_id)?;
        if let Some(department_id) = input.department_id {
            self.ensure_department(department_id)?;
        }
        self.ensure_employees(&input.employee_ids)?;

        let shift = Shift::create(Uuid::new_v4(), input, company_id, self.locale)?;
        info!(
            shift_id = %shift.id,
            date = %shift.date,
            duration = %shift.duration(),
            "Shift created"
        );
        self.shifts.insert(shift.id, shift.clone());
        Ok(shift)
    }

    /// Returns a shift by id.
    pub fn shift(&self, id: ShiftId) -> ShiftResult<Shift> {
        self.shifts
            .get(&id)
            .cloned()
            .ok_or(ShiftError::ShiftNotFound { id })
    }

    /// Lists shifts matching `query`, ordered by date then start time.
    pub fn list_shifts(&self, query: &ShiftQuery) -> Vec<Shift> {
        let mut shifts: Vec<Shift> = self
            .shifts
            .values()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        sort_shifts(&mut shifts);
        shifts
    }

    /// Applies a partial update to a shift.
    ///
    /// # Errors
    ///
    /// Fails without writing if the shift or a newly referenced record does
    /// not exist, or if the resulting times are invalid.
    pub fn update_shift(&mut self, id: ShiftId, update: ShiftUpdate) -> ShiftResult<Shift> {
        if let Some(account_id) = update.analytic_account_id {
            self.ensure_account(account_id)?;
        }
        if let Some(department_id) = update.department_id {
            self.ensure_department(department_id)?;
        }
        if let Some(employee_ids) = &update.employee_ids {
            self.ensure_employees(employee_ids)?;
        }

        let shift = self
            .shifts
            .get_mut(&id)
            .ok_or(ShiftError::ShiftNotFound { id })?;
        shift.apply(update)?;
        info!(shift_id = %id, duration = %shift.duration(), "Shift updated");
        Ok(shift.clone())
    }

    /// Deletes a shift, returning the removed record.
    pub fn delete_shift(&mut self, id: ShiftId) -> ShiftResult<Shift> {
        let shift = self
            .shifts
            .remove(&id)
            .ok_or(ShiftError::ShiftNotFound { id })?;
        info!(shift_id = %id, "Shift deleted");
        Ok(shift)
    }

    /// Applies a lifecycle action to one shift.
    pub fn apply_action(&mut self, id: ShiftId, action: ShiftAction) -> ShiftResult<Shift> {
        let shift = self
            .shifts
            .get_mut(&id)
            .ok_or(ShiftError::ShiftNotFound { id })?;
        shift.apply_action(action);
        info!(shift_id = %id, state = %shift.state(), "Shift state changed");
        Ok(shift.clone())
    }

    /// Applies a lifecycle action to a batch of shifts.
    ///
    /// # Errors
    ///
    /// Fails without changing any shift if one of the ids is unknown.
    pub fn apply_action_many(
        &mut self,
        ids: &[ShiftId],
        action: ShiftAction,
    ) -> ShiftResult<Vec<Shift>> {
        if let Some(id) = ids.iter().copied().find(|id| !self.shifts.contains_key(id)) {
            return Err(ShiftError::ShiftNotFound { id });
        }
        ids.iter().map(|id| self.apply_action(*id, action)).collect()
    }

    /// Marks a shift confirmed.
    pub fn confirm_shift(&mut self, id: ShiftId) -> ShiftResult<Shift> {
        self.apply_action(id, ShiftAction::Confirm)
    }

    /// Marks a shift in progress.
    pub fn start_shift(&mut self, id: ShiftId) -> ShiftResult<Shift> {
        self.apply_action(id, ShiftAction::Start)
    }

    /// Marks a shift completed.
    pub fn complete_shift(&mut self, id: ShiftId) -> ShiftResult<Shift> {
        self.apply_action(id, ShiftAction::Complete)
    }

    /// Marks a shift cancelled.
    pub fn cancel_shift(&mut self, id: ShiftId) -> ShiftResult<Shift> {
        self.apply_action(id, ShiftAction::Cancel)
    }

    /// Puts a shift back into draft.
    pub fn reset_shift_to_draft(&mut self, id: ShiftId) -> ShiftResult<Shift> {
        self.apply_action(id, ShiftAction::ResetToDraft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShiftType;
    use crate::repository::fixtures::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_create_shift_requires_account() {
        crate::logging::init_test();
        let mut repo = Repository::default();
        let result = repo.create_shift(new_shift(Uuid::new_v4(), "2026-01-15", 9, 17), company());
        assert!(matches!(result, Err(ShiftError::AccountNotFound { .. })));
    }

    #[test]
    fn test_create_shift_requires_known_department_and_employees() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");

        let mut input = new_shift(account, "2026-01-15", 9, 17);
        input.department_id = Some(Uuid::new_v4());
        let result = repo.create_shift(input, company());
        assert!(matches!(result, Err(ShiftError::DepartmentNotFound { .. })));

        let mut input = new_shift(account, "2026-01-15", 9, 17);
        input.employee_ids = vec![Uuid::new_v4()];
        let result = repo.create_shift(input, company());
        assert!(matches!(result, Err(ShiftError::EmployeeNotFound { .. })));

        assert!(repo.list_shifts(&ShiftQuery::default()).is_empty());
    }

    #[test]
    fn test_create_shift_stamps_company_and_draft_state() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let company_id = Uuid::new_v4();

        let shift = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company_id)
            .unwrap();
        assert_eq!(shift.company_id, company_id);
        assert_eq!(shift.state(), ShiftState::Draft);
        assert_eq!(shift.duration(), Decimal::new(8, 0));
        assert_eq!(repo.shift(shift.id).unwrap(), shift);
    }

    #[test]
    fn test_invalid_times_not_stored() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let mut input = new_shift(account, "2026-01-15", 10, 9);
        input.shift_type = ShiftType::Custom;

        let result = repo.create_shift(input, company());
        assert!(matches!(result, Err(ShiftError::Validation { .. })));
        assert!(repo.list_shifts(&ShiftQuery::default()).is_empty());
    }

    #[test]
    fn test_list_shifts_ordered_and_filtered() {
        let mut repo = Repository::default();
        let store = add_account(&mut repo, "Store");
        let warehouse = add_account(&mut repo, "Warehouse");

        let late = repo
            .create_shift(new_shift(store, "2026-01-16", 14, 22), company())
            .unwrap();
        let early = repo
            .create_shift(new_shift(store, "2026-01-16", 6, 14), company())
            .unwrap();
        let first = repo
            .create_shift(new_shift(store, "2026-01-15", 9, 17), company())
            .unwrap();
        repo.create_shift(new_shift(warehouse, "2026-01-15", 9, 17), company())
            .unwrap();

        let listed = repo.list_shifts(&ShiftQuery {
            analytic_account_id: Some(store),
            ..Default::default()
        });
        let ids: Vec<ShiftId> = listed.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![first.id, early.id, late.id]);

        let listed = repo.list_shifts(&ShiftQuery {
            from_date: Some(make_date("2026-01-16")),
            to_date: Some(make_date("2026-01-16")),
            ..Default::default()
        });
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn test_list_shifts_by_state_and_employee() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let employee = add_employee(&mut repo, "Ayşe", Some(account), None);

        let mut input = new_shift(account, "2026-01-15", 9, 17);
        input.employee_ids = vec![employee];
        let assigned = repo.create_shift(input, company()).unwrap();
        let other = repo
            .create_shift(new_shift(account, "2026-01-15", 17, 23), company())
            .unwrap();
        repo.confirm_shift(other.id).unwrap();

        let by_employee = repo.list_shifts(&ShiftQuery {
            employee_id: Some(employee),
            ..Default::default()
        });
        assert_eq!(by_employee.len(), 1);
        assert_eq!(by_employee[0].id, assigned.id);

        let confirmed = repo.list_shifts(&ShiftQuery {
            state: Some(ShiftState::Confirmed),
            ..Default::default()
        });
        assert_eq!(confirmed.len(), 1);
        assert_eq!(confirmed[0].id, other.id);
    }

    #[test]
    fn test_update_shift_checks_references_first() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let shift = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap();

        let result = repo.update_shift(
            shift.id,
            ShiftUpdate {
                name: Some("Renamed".to_string()),
                employee_ids: Some(vec![Uuid::new_v4()]),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ShiftError::EmployeeNotFound { .. })));
        assert_eq!(repo.shift(shift.id).unwrap().name, shift.name);
    }

    #[test]
    fn test_update_shift_validates_times() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let shift = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap();

        let result = repo.update_shift(
            shift.id,
            ShiftUpdate {
                start_time: Some(Decimal::new(18, 0)),
                ..Default::default()
            },
        );
        assert!(matches!(result, Err(ShiftError::Validation { .. })));

        let updated = repo
            .update_shift(
                shift.id,
                ShiftUpdate {
                    start_time: Some(Decimal::new(12, 0)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.duration(), Decimal::new(5, 0));
    }

    #[test]
    fn test_delete_shift() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let shift = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap();

        repo.delete_shift(shift.id).unwrap();
        assert!(matches!(
            repo.shift(shift.id),
            Err(ShiftError::ShiftNotFound { .. })
        ));
        assert!(matches!(
            repo.delete_shift(shift.id),
            Err(ShiftError::ShiftNotFound { .. })
        ));
    }

    #[test]
    fn test_confirm_twice_is_noop() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let shift = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap();

        repo.confirm_shift(shift.id).unwrap();
        let again = repo.confirm_shift(shift.id).unwrap();
        assert_eq!(again.state(), ShiftState::Confirmed);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let id = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap()
            .id;

        assert_eq!(repo.confirm_shift(id).unwrap().state(), ShiftState::Confirmed);
        assert_eq!(repo.start_shift(id).unwrap().state(), ShiftState::InProgress);
        assert_eq!(repo.complete_shift(id).unwrap().state(), ShiftState::Completed);
        assert_eq!(repo.cancel_shift(id).unwrap().state(), ShiftState::Cancelled);
        assert_eq!(repo.reset_shift_to_draft(id).unwrap().state(), ShiftState::Draft);
    }

    #[test]
    fn test_apply_action_many_is_all_or_nothing() {
        let mut repo = Repository::default();
        let account = add_account(&mut repo, "Store");
        let a = repo
            .create_shift(new_shift(account, "2026-01-15", 9, 17), company())
            .unwrap()
            .id;
        let b = repo
            .create_shift(new_shift(account, "2026-01-16", 9, 17), company())
            .unwrap()
            .id;

        let result = repo.apply_action_many(&[a, Uuid::new_v4(), b], ShiftAction::Confirm);
        assert!(matches!(result, Err(ShiftError::ShiftNotFound { .. })));
        assert_eq!(repo.shift(a).unwrap().state(), ShiftState::Draft);

        let confirmed = repo.apply_action_many(&[a, b], ShiftAction::Confirm).unwrap();
        assert_eq!(confirmed.len(), 2);
        assert!(confirmed.iter().all(|s| s.state() == ShiftState::Confirmed));
    }
}
