//! # repute-viz: Analysis chart rendering.
//!
//! Renders a two-panel SVG: the Lorenz curve against the equality line with
//! the majority-control marker, and a bar chart of the Gini and Nakamoto
//! coefficients. All styling comes from an explicit [`RenderConfig`]; there
//! is no global theme state.

pub mod chart;
pub mod config;
pub mod error;
pub mod svg;

pub use chart::{render_analysis, write_analysis};
pub use config::{RenderConfig, Theme};
pub use error::RenderError;
