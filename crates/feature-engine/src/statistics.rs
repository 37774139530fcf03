//! Time-Domain Statistics

/// Amplitude statistics of a magnitude signal
#[derive(Debug, Clone, Default)]
pub struct TimeDomainStats {
    /// Mean value
    pub mean: f64,
    /// Population standard deviation (divide by N)
    pub std_dev: f64,
    /// Population variance
    pub variance: f64,
    /// Root mean square
    pub rms: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
    /// Max minus min
    pub maxmin_diff: f64,
}

impl TimeDomainStats {
    /// Compute statistics from a slice of values.
    ///
    /// Callers guarantee a non-empty slice; an empty one yields the
    /// all-zero default.
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;

        let mean = values.iter().sum::<f64>() / n;

        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);

        let mut m2 = 0.0;
        let mut sq_sum = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
            sq_sum += v * v;
        }

        let variance = m2 / n;
        let std_dev = variance.sqrt();
        let rms = (sq_sum / n).sqrt();

        Self {
            mean,
            std_dev,
            variance,
            rms,
            min,
            max,
            maxmin_diff: max - min,
        }
    }
}
