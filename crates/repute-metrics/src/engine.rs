//! Metrics engine implementing the [`DecentralizationMetrics`] trait.

use repute_core::error::MetricsError;
use repute_core::traits::DecentralizationMetrics;
use repute_core::types::{LorenzCurve, MetricsReport, NakamotoResult, ReputationDistribution};
use tracing::debug;

use crate::gini::gini_of;
use crate::lorenz::lorenz_curve_of;
use crate::nakamoto::nakamoto_of;

/// The production metrics calculator.
///
/// Stateless. The distribution already holds the ascending working copy,
/// so each metric is a single linear pass.
#[derive(Debug, Clone, Default)]
pub struct MetricsEngine;

impl MetricsEngine {
    /// Create a new MetricsEngine.
    pub fn new() -> Self {
        Self
    }
}

impl DecentralizationMetrics for MetricsEngine {
    fn gini(&self, dist: &ReputationDistribution, precision: u32) -> f64 {
        let gini = gini_of(dist, precision);
        debug!(participants = dist.len(), gini, "computed gini coefficient");
        gini
    }

    fn nakamoto(&self, dist: &ReputationDistribution, precision: u32) -> NakamotoResult {
        let result = nakamoto_of(dist, precision);
        debug!(
            participants = dist.len(),
            score = result.score,
            coefficient = result.coefficient,
            "computed nakamoto score"
        );
        result
    }

    fn lorenz_curve(&self, dist: &ReputationDistribution) -> LorenzCurve {
        lorenz_curve_of(dist)
    }
}

/// Validate raw values and compute the full [`MetricsReport`].
///
/// ```
/// use repute_metrics::report;
/// let r = report(&[10.0, 0.0, 0.0, 0.0], 3).unwrap();
/// assert_eq!(r.gini, 0.75);
/// assert_eq!(r.nakamoto.score, 1);
/// ```
pub fn report(values: &[f64], precision: u32) -> Result<MetricsReport, MetricsError> {
    let dist = ReputationDistribution::new(values)?;
    Ok(MetricsEngine::new().report(&dist, precision))
}
