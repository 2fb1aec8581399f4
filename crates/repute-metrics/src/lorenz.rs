//! Lorenz curve sample points for plotting.

use repute_core::error::MetricsError;
use repute_core::types::{LorenzCurve, ReputationDistribution};

/// Lorenz curve of raw reputation values.
///
/// ```
/// use repute_metrics::lorenz_curve;
/// let curve = lorenz_curve(&[3.0, 1.0]).unwrap();
/// assert_eq!(curve.x, vec![0.0, 0.5, 1.0]);
/// assert_eq!(curve.y, vec![0.0, 0.25, 1.0]);
/// ```
pub fn lorenz_curve(values: &[f64]) -> Result<LorenzCurve, MetricsError> {
    let dist = ReputationDistribution::new(values)?;
    Ok(lorenz_curve_of(&dist))
}

/// Lorenz curve of a validated distribution.
pub fn lorenz_curve_of(dist: &ReputationDistribution) -> LorenzCurve {
    let n = dist.len();
    let total = dist.total();

    let x = (0..=n).map(|i| i as f64 / n as f64).collect();
    let y = std::iter::once(0.0)
        .chain(dist.cumulative().map(|c| c / total))
        .collect();

    LorenzCurve { x, y }
}
