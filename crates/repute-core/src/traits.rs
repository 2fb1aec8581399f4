//! Trait interfaces for Repute.
//!
//! - [`DecentralizationMetrics`]: metric math over a validated distribution
//!   (repute-metrics implements)

use crate::types::{LorenzCurve, MetricsReport, NakamotoResult, ReputationDistribution};

/// Pure computation of decentralization metrics.
///
/// Inputs are already validated by [`ReputationDistribution`], so every
/// operation is infallible. Implementations hold no mutable state.
pub trait DecentralizationMetrics: Send + Sync {
    /// Gini coefficient in `[0, 1]`, rounded to `precision` digits.
    fn gini(&self, dist: &ReputationDistribution, precision: u32) -> f64;

    /// Nakamoto score and coefficient, the coefficient rounded to `precision` digits.
    fn nakamoto(&self, dist: &ReputationDistribution, precision: u32) -> NakamotoResult;

    /// Lorenz curve sample points (`n + 1` of each).
    fn lorenz_curve(&self, dist: &ReputationDistribution) -> LorenzCurve;

    /// All scalar metrics of `dist` in one report.
    fn report(&self, dist: &ReputationDistribution, precision: u32) -> MetricsReport {
        MetricsReport {
            participants: dist.len(),
            total: dist.total(),
            precision,
            gini: self.gini(dist, precision),
            nakamoto: self.nakamoto(dist, precision),
        }
    }
}
