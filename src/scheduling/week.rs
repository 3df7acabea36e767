//! Current-week hour totals.

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// An inclusive Monday-to-Sunday calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBounds {
    /// The Monday of the week.
    pub start: NaiveDate,
    /// The Sunday of the week.
    pub end: NaiveDate,
}

impl WeekBounds {
    /// Returns the week containing `date`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_management::scheduling::WeekBounds;
    /// use chrono::NaiveDate;
    ///
    /// // 2026-01-15 is a Thursday
    /// let week = WeekBounds::containing(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
    /// assert_eq!(week.start, NaiveDate::from_ymd_opt(2026, 1, 12).unwrap());
    /// assert_eq!(week.end, NaiveDate::from_ymd_opt(2026, 1, 18).unwrap());
    /// ```
    pub fn containing(date: NaiveDate) -> Self {
        let offset = Duration::days(i64::from(date.weekday().num_days_from_monday()));
        let start = date.checked_sub_signed(offset).unwrap_or(NaiveDate::MIN);
        Self {
            start,
            end: start
                .checked_add_signed(Duration::days(6))
                .unwrap_or(NaiveDate::MAX),
        }
    }

    /// Returns true if `date` falls within the week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Sums the duration of shifts in the week of `today` that count toward hours.
///
/// Only shifts in confirmed, in-progress or completed state are included.
/// The total saturates at the bounds of [`Decimal`].
pub fn current_week_hours<'a, I>(shifts: I, today: NaiveDate) -> Decimal
where
    I: IntoIterator<Item = &'a Shift>,
{
    let week = WeekBounds::containing(today);
    shifts
        .into_iter()
        .filter(|s| week.contains(s.date) && s.state().counts_toward_hours())
        .fold(Decimal::ZERO, |total, s| total.saturating_add(s.duration()))
}
