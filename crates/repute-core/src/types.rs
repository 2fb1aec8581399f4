//! Value types for reputation distributions and their metrics.

use std::fmt;

use num_traits::ToPrimitive;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;

/// A validated reputation (or stake) distribution, one value per participant.
///
/// Keeps a working copy sorted ascending and the total amount. Every value is
/// finite and non-negative, there is at least one participant, and the total
/// is finite and strictly positive.
///
/// # Examples
///
/// ```
/// use repute_core::types::ReputationDistribution;
/// let dist = ReputationDistribution::new(vec![3.0, 1.0, 2.0]).unwrap();
/// assert_eq!(dist.sorted(), &[1.0, 2.0, 3.0]);
/// assert_eq!(dist.total(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReputationDistribution {
    sorted: Vec<f64>,
    total: f64,
}

impl ReputationDistribution {
    /// Validate `values` and build the distribution.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, MetricsError> {
        let mut sorted = values.into();
        if sorted.is_empty() {
            return Err(MetricsError::EmptyDistribution);
        }
        for (index, &value) in sorted.iter().enumerate() {
            if !value.is_finite() {
                return Err(MetricsError::NonFiniteValue { index });
            }
            if value < 0.0 {
                return Err(MetricsError::NegativeValue { index, value });
            }
        }

        sorted.sort_unstable_by_key(|&v| OrderedFloat(v));

        // Summed in ascending order so the total equals the last cumulative sum.
        let total: f64 = sorted.iter().sum();
        if !total.is_finite() {
            return Err(MetricsError::NonFiniteTotal);
        }
        if total == 0.0 {
            return Err(MetricsError::DivisionByZero);
        }

        Ok(Self { sorted, total })
    }

    /// Build a distribution from integer (or any numeric) balances.
    ///
    /// ```
    /// use repute_core::types::ReputationDistribution;
    /// let dist = ReputationDistribution::from_amounts(&[10u64, 0, 0, 0]).unwrap();
    /// assert_eq!(dist.total(), 10.0);
    /// ```
    pub fn from_amounts<T: ToPrimitive>(amounts: &[T]) -> Result<Self, MetricsError> {
        let values = amounts
            .iter()
            .enumerate()
            .map(|(index, a)| a.to_f64().ok_or(MetricsError::NonFiniteValue { index }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(values)
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// Always false: a distribution has at least one participant.
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Values sorted ascending.
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    /// Total reputation amount.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Running sums over the ascending values; the last item equals [`total`](Self::total).
    pub fn cumulative(&self) -> impl Iterator<Item = f64> + '_ {
        self.sorted.iter().scan(0.0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
    }
}

/// Nakamoto score and coefficient of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakamotoResult {
    /// `score / participants`, rounded.
    pub coefficient: f64,
    /// Minimum number of largest holders that together reach the majority threshold.
    pub score: usize,
}

/// Sample points of a Lorenz curve, `n + 1` of each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LorenzCurve {
    /// Cumulative population fraction, `i / n`.
    pub x: Vec<f64>,
    /// Cumulative share of the total held by the `i` smallest holders.
    pub y: Vec<f64>,
}

impl LorenzCurve {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// All metrics computed over one distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub participants: usize,
    pub total: f64,
    pub precision: u32,
    pub gini: f64,
    pub nakamoto: NakamotoResult,
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nakamoto coefficient is {}", self.nakamoto.coefficient)?;
        writeln!(f, "Nakamoto score is {}", self.nakamoto.score)?;
        write!(f, "Gini coefficient is {}", self.gini)
    }
}
