//! Gini coefficient via the area under the discrete Lorenz curve.

use repute_core::error::MetricsError;
use repute_core::precision::round_to;
use repute_core::types::ReputationDistribution;

/// Gini coefficient of raw reputation values, rounded to `precision` digits.
///
/// 0 is perfect equality; a single holder among `n` gives `1 - 1/n`.
///
/// ```
/// use repute_metrics::gini;
/// assert_eq!(gini(&[5.0, 5.0, 5.0, 5.0], 3).unwrap(), 0.0);
/// assert_eq!(gini(&[10.0, 0.0, 0.0, 0.0], 3).unwrap(), 0.75);
/// ```
pub fn gini(values: &[f64], precision: u32) -> Result<f64, MetricsError> {
    let dist = ReputationDistribution::new(values)?;
    Ok(gini_of(&dist, precision))
}

/// Gini coefficient of a validated distribution.
pub fn gini_of(dist: &ReputationDistribution, precision: u32) -> f64 {
    let total = dist.total();
    let height = (dist.len() as f64).recip();

    // Lorenz ordinates B[i] = C[i] / total; the last one is exactly 1.
    let (sum_bases, last_base) = dist
        .cumulative()
        .map(|c| c / total)
        .fold((0.0, 0.0), |(sum, _), b| (sum + b, b));

    let area = height * (sum_bases - last_base / 2.0);
    round_to((1.0 - 2.0 * area).clamp(0.0, 1.0), precision)
}
