//! Nakamoto score: how many of the largest holders it takes to control the majority.
//!
//! Holders are taken largest-first while `2 * cumsum < total`; the score is
//! one past the last prefix that stays below the threshold. A top-k share of
//! exactly one half therefore counts as crossing.
//!
//! The coefficient is rounded but never to zero: it is floored at one unit of
//! the last kept digit, so it stays in `(0, 1]` at any precision.

use repute_core::constants::{MAJORITY_DENOMINATOR, MAJORITY_NUMERATOR};
use repute_core::error::MetricsError;
use repute_core::precision::{resolution, round_to};
use repute_core::types::{NakamotoResult, ReputationDistribution};

/// Nakamoto coefficient and score of raw reputation values.
///
/// ```
/// use repute_metrics::nakamoto;
/// let result = nakamoto(&[10.0, 0.0, 0.0, 0.0], 3).unwrap();
/// assert_eq!(result.score, 1);
/// assert_eq!(result.coefficient, 0.25);
/// ```
pub fn nakamoto(values: &[f64], precision: u32) -> Result<NakamotoResult, MetricsError> {
    let dist = ReputationDistribution::new(values)?;
    Ok(nakamoto_of(&dist, precision))
}

/// Nakamoto coefficient and score of a validated distribution.
pub fn nakamoto_of(dist: &ReputationDistribution, precision: u32) -> NakamotoResult {
    let total = dist.total();

    // Prefixes below the threshold, scanned from the top. The full prefix sums
    // to the total up to rounding and twice that exceeds the total, so it never
    // qualifies and the count is at most n - 1.
    let below = dist
        .sorted()
        .iter()
        .rev()
        .scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .take_while(|&cumsum| MAJORITY_DENOMINATOR * cumsum < MAJORITY_NUMERATOR * total)
        .count();

    let score = below + 1;
    let coefficient = round_to(score as f64 / dist.len() as f64, precision);
    NakamotoResult {
        coefficient: coefficient.max(resolution(precision)),
        score,
    }
}
