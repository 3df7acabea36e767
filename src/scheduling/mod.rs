//! Derived scheduling values.
//!
//! This module contains the pure functions behind the derived fields and the
//! single validation rule: shift duration, time ordering, current-week hours
//! and the date-window schedule query.

mod duration;
mod schedule;
mod validation;
mod week;

pub use duration::{DURATION_OUT_OF_RANGE_MESSAGE, HOURS_PER_DAY, compute_duration, is_overnight};
pub use schedule::{DEFAULT_SCHEDULE_DAYS, ScheduleWindow, shift_schedule};
pub use validation::{INVALID_TIMES_MESSAGE, validate_times};
pub use week::{WeekBounds, current_week_hours};
