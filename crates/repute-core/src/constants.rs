//! Metric constants shared across the workspace.

/// Default number of decimal digits kept in rounded coefficients.
///
/// # Examples
///
/// ```
/// use repute_core::constants::DEFAULT_PRECISION;
/// assert_eq!(DEFAULT_PRECISION, 3);
/// ```
pub const DEFAULT_PRECISION: u32 = 3;

/// Largest precision at which rounding still changes an `f64`.
///
/// An `f64` carries 15 to 17 significant decimal digits, so rounding to more
/// digits than this is treated as the identity.
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// Numerator of the control threshold used by the Nakamoto score (1/2).
pub const MAJORITY_NUMERATOR: f64 = 1.0;

/// Denominator of the control threshold used by the Nakamoto score (1/2).
pub const MAJORITY_DENOMINATOR: f64 = 2.0;

/// Input file read by the CLI when none is given.
pub const DEFAULT_INPUT_FILE: &str = "reps.txt";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn majority_threshold_is_one_half() {
        assert_eq!(MAJORITY_NUMERATOR / MAJORITY_DENOMINATOR, 0.5);
    }

    #[test]
    fn default_precision_within_rounding_range() {
        assert!(DEFAULT_PRECISION <= MAX_ROUNDING_DIGITS);
    }
}
