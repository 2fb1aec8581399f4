//! Decimal rounding of metric values.

use crate::constants::MAX_ROUNDING_DIGITS;

/// Round `value` to `digits` decimal places, resolving ties to even.
///
/// Beyond [`MAX_ROUNDING_DIGITS`] the value is returned unchanged since the
/// scale factor no longer fits the mantissa.
///
/// # Examples
///
/// ```
/// use repute_core::precision::round_to;
/// assert_eq!(round_to(0.74999, 3), 0.75);
/// assert_eq!(round_to(0.3333333, 2), 0.33);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if digits > MAX_ROUNDING_DIGITS || !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    (value * factor).round_ties_even() / factor
}

/// Smallest positive value that survives rounding to `digits` places.
///
/// Zero when `digits` exceeds [`MAX_ROUNDING_DIGITS`] and rounding is the
/// identity.
///
/// ```
/// use repute_core::precision::resolution;
/// assert_eq!(resolution(3), 0.001);
/// assert_eq!(resolution(0), 1.0);
/// ```
pub fn resolution(digits: u32) -> f64 {
    if digits > MAX_ROUNDING_DIGITS {
        return 0.0;
    }
    1.0 / 10f64.powi(digits as i32)
}
