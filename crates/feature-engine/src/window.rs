//! Tri-axial Signal Window

use crate::error::InvalidInputError;
use serde::{Deserialize, Serialize};

/// A fixed-length segment of a 3-axis sensor recording.
///
/// Each sample holds one (x, y, z) reading; the window is the unit of
/// feature extraction and is consumed read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalWindow {
    samples: Vec<[f64; 3]>,
}

impl SignalWindow {
    /// Create a window from per-sample (x, y, z) readings
    pub fn from_samples(samples: Vec<[f64; 3]>) -> Result<Self, InvalidInputError> {
        if samples.is_empty() {
            return Err(InvalidInputError::EmptyWindow);
        }
        Ok(Self { samples })
    }

    /// Create a window from three separate axis slices of equal length
    pub fn from_axes(x: &[f64], y: &[f64], z: &[f64]) -> Result<Self, InvalidInputError> {
        if x.len() != y.len() || y.len() != z.len() {
            return Err(InvalidInputError::AxisLengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }
        let samples: Vec<[f64; 3]> = x
            .iter()
            .zip(y)
            .zip(z)
            .map(|((&x, &y), &z)| [x, y, z])
            .collect();
        Self::from_samples(samples)
    }

    /// Number of samples in the window
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the window holds no samples (unreachable via constructors)
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Raw (x, y, z) samples
    pub fn samples(&self) -> &[[f64; 3]] {
        &self.samples
    }

    /// Reject NaN or infinite readings
    pub fn validate_finite(&self) -> Result<(), InvalidInputError> {
        for (i, sample) in self.samples.iter().enumerate() {
            for (axis, &value) in ["x", "y", "z"].into_iter().zip(sample) {
                if !value.is_finite() {
                    return Err(InvalidInputError::NonFinite { sample: i, axis });
                }
            }
        }
        Ok(())
    }

    /// Per-sample Euclidean norm across the three axes
    pub fn magnitude(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|[x, y, z]| (x * x + y * y + z * z).sqrt())
            .collect()
    }
}
