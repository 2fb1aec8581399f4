//! Rendering errors.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("canvas {width}x{height} smaller than {min_width}x{min_height}")] InvalidDimensions { width: u32, height: u32, min_width: u32, min_height: u32 },
    #[error("invalid color for {field}: {value:?}")] InvalidColor { field: &'static str, value: String },
    #[error("lorenz curve needs matching x/y with at least 2 points, got {x_len}/{y_len}")] CurveMismatch { x_len: usize, y_len: usize },
    #[error("cannot write {path}: {message}")] Io { path: String, message: String },
}
