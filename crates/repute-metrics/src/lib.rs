//! # repute-metrics: Decentralization metrics engine.
//!
//! Pure, synchronous computations over a reputation distribution:
//! - **Gini coefficient**: `1 - 2 * area` under the discrete Lorenz curve,
//!   with the area taken as `(sum(B) - B[last] / 2) / n`.
//! - **Nakamoto score**: the number of largest holders needed before their
//!   doubled cumulative sum reaches the total, and its population fraction.
//! - **Lorenz curve**: `n + 1` points of cumulative population vs.
//!   cumulative share.
//!
//! The free functions validate raw `&[f64]` input and fail with
//! [`MetricsError`](repute_core::error::MetricsError) on empty, negative,
//! non-finite or zero-total distributions. [`MetricsEngine`] works on an
//! already-validated [`ReputationDistribution`](repute_core::types::ReputationDistribution).

pub mod engine;
pub mod gini;
pub mod lorenz;
pub mod nakamoto;

pub use engine::{report, MetricsEngine};
pub use gini::gini;
pub use lorenz::lorenz_curve;
pub use nakamoto::nakamoto;
