//! Extraction Error Types

use thiserror::Error;

/// Errors for malformed extraction input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    /// Window contains no samples
    #[error("signal window is empty")]
    EmptyWindow,

    /// Axis slices have different lengths
    #[error("axis lengths differ: x={x}, y={y}, z={z}")]
    AxisLengthMismatch { x: usize, y: usize, z: usize },

    /// A reading is NaN or infinite
    #[error("non-finite reading at sample {sample}, axis {axis}")]
    NonFinite { sample: usize, axis: &'static str },

    /// Sampling rate must be a positive, finite Hz value
    #[error("invalid sampling rate: {0} Hz")]
    InvalidSampleRate(f64),
}
