//! Shift time validation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{ShiftError, ShiftResult};
use crate::models::ShiftType;

/// Message reported when a non-night shift does not start before it ends.
pub const INVALID_TIMES_MESSAGE: &str = "Start time must be earlier than end time.";

/// Checks the ordering of a shift's times.
///
/// Only night shifts may start at or after their end time. The exemption is
/// keyed on the shift type alone: a night shift with an ordinary daytime span
/// passes, and a custom shift crossing midnight fails.
///
/// # Errors
///
/// Returns [`ShiftError::Validation`] when `start_time >= end_time` and the
/// shift type is not [`ShiftType::Night`].
///
/// # Example
///
/// ```
/// use shift_management::models::ShiftType;
/// use shift_management::scheduling::validate_times;
/// use rust_decimal::Decimal;
///
/// assert!(validate_times(Decimal::new(22, 0), Decimal::new(6, 0), ShiftType::Night).is_ok());
/// assert!(validate_times(Decimal::new(10, 0), Decimal::new(9, 0), ShiftType::Custom).is_err());
/// ```
pub fn validate_times(
    start_time: Decimal,
    end_time: Decimal,
    shift_type: ShiftType,
) -> ShiftResult<()> {
    if start_time >= end_time && shift_type != ShiftType::Night {
        debug!(
            start_time = %start_time,
            end_time = %end_time,
            shift_type = ?shift_type,
            "Rejected shift times"
        );
        return Err(ShiftError::Validation {
            message: INVALID_TIMES_MESSAGE.to_string(),
        });
    }
    Ok(())
}
