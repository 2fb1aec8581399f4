//! Error types for Repute.
use thiserror::Error;

/// Rejections raised by the metrics engine before any computation starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    #[error("empty distribution")] EmptyDistribution,
    #[error("non-finite value at index {index}")] NonFiniteValue { index: usize },
    #[error("negative value {value} at index {index}")] NegativeValue { index: usize, value: f64 },
    #[error("total reputation is not finite")] NonFiniteTotal,
    #[error("division by zero: total reputation is zero")] DivisionByZero,
}

impl MetricsError {
    /// Whether the error belongs to the invalid-input family.
    ///
    /// Everything except [`MetricsError::DivisionByZero`] describes a
    /// distribution outside the documented domain.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::DivisionByZero)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("cannot read {path}: {message}")] Io { path: String, message: String },
    #[error("line {line}: not a number: {content:?}")] Parse { line: usize, content: String },
}
