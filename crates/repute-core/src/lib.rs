//! # repute-core
//! Foundation types and traits for Repute decentralization metrics.

pub mod constants;
pub mod error;
pub mod loader;
pub mod precision;
pub mod traits;
pub mod types;
