// File: crates/tufte-core/src/error.rs
// Summary: Error taxonomy shared by spine limiting, styling and rendering.

use thiserror::Error;

pub type GraphResult<T> = Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// No series, or only series without finite samples.
    #[error("no series data to bound")]
    EmptyInput,

    #[error("tick positions are not ascending at index {index}: {previous} > {current}")]
    InvalidTickOrder { index: usize, previous: f64, current: f64 },

    #[error("series length mismatch: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("invalid colour: {0}")]
    InvalidColour(String),

    #[error("invalid margin: {0} (must be finite and non-negative)")]
    InvalidMargin(f64),

    #[error("invalid figure size: width={width}, height={height}")]
    InvalidFigureSize { width: i32, height: i32 },

    #[error("{operation} is not supported by {kind} graphs")]
    Unsupported { operation: &'static str, kind: &'static str },

    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
