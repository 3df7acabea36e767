//! Shift model and related types.
//!
//! This module defines the [`Shift`] record, its type and lifecycle enums,
//! and the inputs used to create and update shifts.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ShiftError, ShiftResult};
use crate::locale::Locale;
use crate::scheduling::{DURATION_OUT_OF_RANGE_MESSAGE, compute_duration, validate_times};

use super::{AccountId, CompanyId, DepartmentId, EmployeeId, ShiftId};

/// The kind of shift being worked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Morning shift.
    #[default]
    Morning,
    /// Afternoon shift.
    Afternoon,
    /// Night shift. The only type allowed to end at or before its start.
    Night,
    /// Any other arrangement.
    Custom,
}

/// Lifecycle state of a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftState {
    /// Planned but not yet confirmed.
    #[default]
    Draft,
    /// Confirmed with the assigned staff.
    Confirmed,
    /// Currently being worked.
    InProgress,
    /// Finished.
    Completed,
    /// Called off.
    Cancelled,
}

impl ShiftState {
    /// Returns true if hours in this state count toward an employee's week.
    pub fn counts_toward_hours(self) -> bool {
        matches!(
            self,
            ShiftState::Confirmed | ShiftState::InProgress | ShiftState::Completed
        )
    }
}

impl fmt::Display for ShiftState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftState::Draft => write!(f, "draft"),
            ShiftState::Confirmed => write!(f, "confirmed"),
            ShiftState::InProgress => write!(f, "in_progress"),
            ShiftState::Completed => write!(f, "completed"),
            ShiftState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An explicit lifecycle action.
///
/// Actions carry no guards: every action is valid from every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftAction {
    /// Move to [`ShiftState::Confirmed`].
    Confirm,
    /// Move to [`ShiftState::InProgress`].
    Start,
    /// Move to [`ShiftState::Completed`].
    Complete,
    /// Move to [`ShiftState::Cancelled`].
    Cancel,
    /// Move back to [`ShiftState::Draft`].
    ResetToDraft,
}

impl ShiftAction {
    /// The state a shift ends up in after this action.
    pub fn target_state(self) -> ShiftState {
        match self {
            ShiftAction::Confirm => ShiftState::Confirmed,
            ShiftAction::Start => ShiftState::InProgress,
            ShiftAction::Complete => ShiftState::Completed,
            ShiftAction::Cancel => ShiftState::Cancelled,
            ShiftAction::ResetToDraft => ShiftState::Draft,
        }
    }
}

/// Input for creating a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewShift {
    /// Explicit name. Derived from date and type when absent or empty.
    #[serde(default)]
    pub name: Option<String>,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Start as fractional hour of day (e.g. 9.5 for 09:30).
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

/// Partial update of a shift. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftUpdate {
    /// New name.
    pub name: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New start time.
    pub start_time: Option<Decimal>,
    /// New end time.
    pub end_time: Option<Decimal>,
    /// New shift type.
    pub shift_type: Option<ShiftType>,
    /// New notes.
    pub notes: Option<String>,
    /// Remove the notes. Ignored when `notes` is set.
    pub clear_notes: bool,
    /// New owning analytic account.
    pub analytic_account_id: Option<AccountId>,
    /// New department.
    pub department_id: Option<DepartmentId>,
    /// Detach the shift from its department. Ignored when `department_id` is set.
    pub clear_department: bool,
    /// Replacement set of assigned staff.
    pub employee_ids: Option<Vec<EmployeeId>>,
}

impl ShiftUpdate {
    /// Returns true if the update writes either time field.
    pub fn touches_times(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }
}

/// A scheduled work period.
///
/// Times and duration are private: the duration is derived from the times
/// and is recomputed on every write to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: ShiftId,
    /// Display name.
    pub name: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    start_time: Decimal,
    end_time: Decimal,
    duration: Decimal,
    /// The kind of shift.
    pub shift_type: ShiftType,
    state: ShiftState,
    /// Free-form notes.
    pub notes: Option<String>,
    /// The owning analytic account.
    pub analytic_account_id: AccountId,
    /// Optional department.
    pub department_id: Option<DepartmentId>,
    /// Staff assigned to the shift.
    pub employee_ids: BTreeSet<EmployeeId>,
    /// The owning company.
    pub company_id: CompanyId,
}

impl Shift {
    /// Builds a new draft shift, validating its times.
    ///
    /// When no name is given the name is derived as `"{date} - {label}"`,
    /// using the shift type label of `locale`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the start is not before the end and the
    /// shift is not a night shift.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_management::locale::Locale;
    /// use shift_management::models::{NewShift, Shift, ShiftState, ShiftType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let input = NewShift {
    ///     name: None,
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: Decimal::new(220, 1),
    ///     end_time: Decimal::new(60, 1),
    ///     shift_type: ShiftType::Night,
    ///     notes: None,
    ///     analytic_account_id: Uuid::new_v4(),
    ///     department_id: None,
    ///     employee_ids: vec![],
    /// };
    ///
    /// let shift = Shift::create(Uuid::new_v4(), input, Uuid::nil(), Locale::En).unwrap();
    /// assert_eq!(shift.duration(), Decimal::new(80, 1));
    /// assert_eq!(shift.state(), ShiftState::Draft);
    /// assert_eq!(shift.name, "2026-01-15 - Night Shift");
    /// ```
    pub fn create(
        id: ShiftId,
        input: NewShift,
        company_id: CompanyId,
        locale: Locale,
    ) -> ShiftResult<Self> {
        validate_times(input.start_time, input.end_time, input.shift_type)?;
        let duration = duration_of(input.start_time, input.end_time)?;

        let name = match input.name {
            Some(name) if !name.is_empty() => name,
            _ => default_name(input.date, input.shift_type, locale),
        };

        Ok(Self {
            id,
            name,
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            duration,
            shift_type: input.shift_type,
            state: ShiftState::Draft,
            notes: input.notes,
            analytic_account_id: input.analytic_account_id,
            department_id: input.department_id,
            employee_ids: input.employee_ids.into_iter().collect(),
            company_id,
        })
    }

    /// Start as fractional hour of day.
    pub fn start_time(&self) -> Decimal {
        self.start_time
    }

    /// End as fractional hour of day.
    pub fn end_time(&self) -> Decimal {
        self.end_time
    }

    /// Worked hours, wrapping past midnight when the end is not after the start.
    pub fn duration(&self) -> Decimal {
        self.duration
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ShiftState {
        self.state
    }

    /// Applies a partial update.
    ///
    /// The time rule is only checked when the update writes a time field.
    /// Nothing is written if the check fails.
    pub fn apply(&mut self, update: ShiftUpdate) -> ShiftResult<()> {
        let start_time = update.start_time.unwrap_or(self.start_time);
        let end_time = update.end_time.unwrap_or(self.end_time);
        let shift_type = update.shift_type.unwrap_or(self.shift_type);

        if update.touches_times() {
            validate_times(start_time, end_time, shift_type)?;
        }
        let duration = duration_of(start_time, end_time)?;

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        match update.notes {
            Some(notes) => self.notes = Some(notes),
            None if update.clear_notes => self.notes = None,
            None => {}
        }
        if let Some(account_id) = update.analytic_account_id {
            self.analytic_account_id = account_id;
        }
        match update.department_id {
            Some(department_id) => self.department_id = Some(department_id),
            None if update.clear_department => self.department_id = None,
            None => {}
        }
        if let Some(employee_ids) = update.employee_ids {
            self.employee_ids = employee_ids.into_iter().collect();
        }

        self.shift_type = shift_type;
        self.start_time = start_time;
        self.end_time = end_time;
        self.duration = duration;
        Ok(())
    }

    /// Sets the state targeted by `action`.
    pub fn apply_action(&mut self, action: ShiftAction) {
        self.state = action.target_state();
    }

    /// Marks the shift confirmed.
    pub fn confirm(&mut self) {
        self.apply_action(ShiftAction::Confirm);
    }

    /// Marks the shift in progress.
    pub fn start(&mut self) {
        self.apply_action(ShiftAction::Start);
    }

    /// Marks the shift completed.
    pub fn complete(&mut self) {
        self.apply_action(ShiftAction::Complete);
    }

    /// Marks the shift cancelled.
    pub fn cancel(&mut self) {
        self.apply_action(ShiftAction::Cancel);
    }

    /// Puts the shift back into draft.
    pub fn reset_to_draft(&mut self) {
        self.apply_action(ShiftAction::ResetToDraft);
    }

    /// Returns true if the given employee is assigned to this shift.
    pub fn is_assigned(&self, employee_id: EmployeeId) -> bool {
        self.employee_ids.contains(&employee_id)
    }
}

fn duration_of(start_time: Decimal, end_time: Decimal) -> ShiftResult<Decimal> {
    compute_duration(start_time, end_time).ok_or_else(|| ShiftError::Validation {
        message: DURATION_OUT_OF_RANGE_MESSAGE.to_string(),
    })
}

fn default_name(date: NaiveDate, shift_type: ShiftType, locale: Locale) -> String {
    format!(
        "{} - {}",
        date.format("%Y-%m-%d"),
        locale.shift_type_label(shift_type)
    )
}
