//! Cross-crate test suite for Repute.
//!
//! Integration tests drive the loader, metrics engine and renderer together
//! and check the metric invariants under generated and hostile inputs.

pub mod helpers;
