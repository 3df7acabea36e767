//! Date-window schedule queries.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// Default length of a schedule window, in days after its start.
pub const DEFAULT_SCHEDULE_DAYS: i64 = 7;

/// An inclusive date range for schedule queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    /// First date included.
    pub start: NaiveDate,
    /// Last date included.
    pub end: NaiveDate,
}

impl ScheduleWindow {
    /// Resolves a window from optional bounds.
    ///
    /// The start defaults to `today`; the end defaults to the start plus
    /// [`DEFAULT_SCHEDULE_DAYS`], clamped to the last representable date.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_management::scheduling::ScheduleWindow;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let window = ScheduleWindow::resolve(today, None, None);
    /// assert_eq!(window.start, today);
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2026, 1, 22).unwrap());
    /// ```
    pub fn resolve(today: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        let start = start.unwrap_or(today);
        let end = end.unwrap_or_else(|| {
            start
                .checked_add_signed(Duration::days(DEFAULT_SCHEDULE_DAYS))
                .unwrap_or(NaiveDate::MAX)
        });
        Self { start, end }
    }

    /// Returns true if `date` falls within the window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Returns the shifts dated within `window`, ordered by date then start time.
pub fn shift_schedule<'a, I>(shifts: I, window: ScheduleWindow) -> Vec<&'a Shift>
where
    I: IntoIterator<Item = &'a Shift>,
{
    let mut scheduled: Vec<&Shift> = shifts
        .into_iter()
        .filter(|s| window.contains(s.date))
        .collect();
    scheduled.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time().cmp(&b.start_time()))
    });
    scheduled
}
