//! Shift duration.

use rust_decimal::Decimal;

/// Hours in a day, used to wrap overnight shifts.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Message reported when a duration cannot be represented.
pub const DURATION_OUT_OF_RANGE_MESSAGE: &str = "Shift duration is out of range.";

/// Returns true if a shift with these times runs past midnight.
///
/// Equal start and end count as overnight: the shift covers a full day.
pub fn is_overnight(start_time: Decimal, end_time: Decimal) -> bool {
    end_time <= start_time
}

/// Computes the worked hours between two hour-of-day values.
///
/// When the end is after the start the duration is the difference;
/// otherwise the shift wraps past midnight and the duration is
/// `(24 - start) + end`.
///
/// Returns `None` when the result does not fit in a [`Decimal`]. Hour
/// values are not range-checked, so extreme inputs can get here.
///
/// # Example
///
/// ```
/// use shift_management::scheduling::compute_duration;
/// use rust_decimal::Decimal;
///
/// // 09:00 - 17:00
/// assert_eq!(
///     compute_duration(Decimal::new(90, 1), Decimal::new(170, 1)),
///     Some(Decimal::new(80, 1))
/// );
/// // 22:00 - 06:00
/// assert_eq!(
///     compute_duration(Decimal::new(220, 1), Decimal::new(60, 1)),
///     Some(Decimal::new(80, 1))
/// );
/// assert_eq!(compute_duration(Decimal::MIN, Decimal::MAX), None);
/// ```
pub fn compute_duration(start_time: Decimal, end_time: Decimal) -> Option<Decimal> {
    if is_overnight(start_time, end_time) {
        HOURS_PER_DAY
            .checked_sub(start_time)?
            .checked_add(end_time)
    } else {
        end_time.checked_sub(start_time)
    }
}
