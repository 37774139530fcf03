//! FFT-based Spectral Analysis

use rustfft::{num_complex::Complex, FftPlanner};

/// Numeric floor for flatness; avoids log(0) and division by zero
const FLATNESS_EPSILON: f64 = 1e-12;

/// One-sided power spectrum computation for real-valued signals
pub struct SpectrumAnalyzer {
    /// FFT planner, cached across calls
    planner: FftPlanner<f64>,
    /// Sampling frequency (Hz)
    sample_rate: f64,
}

impl SpectrumAnalyzer {
    /// Create a new analyzer for signals sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Self {
        Self {
            planner: FftPlanner::new(),
            sample_rate,
        }
    }

    /// Compute the one-sided power spectrum of a signal.
    ///
    /// Returns the squared magnitudes of the first floor(N/2) DFT bins.
    /// No window function and no 1/N normalization are applied, so spectral
    /// sums scale with the square of the signal amplitude. A single-sample
    /// signal yields an empty spectrum.
    pub fn power_spectrum(&mut self, signal: &[f64]) -> Vec<f64> {
        let n = signal.len();
        if n < 2 {
            return Vec::new();
        }

        let mut buffer: Vec<Complex<f64>> =
            signal.iter().map(|&v| Complex::new(v, 0.0)).collect();

        let fft = self.planner.plan_fft_forward(n);
        fft.process(&mut buffer);

        buffer.iter().take(n / 2).map(|c| c.norm_sqr()).collect()
    }

    /// Center frequency (Hz) of spectral bin `k` for a length-`n` window.
    ///
    /// Not consumed by the current feature set; kept so a dominant-frequency
    /// feature can be added without reshaping the analyzer.
    pub fn bin_frequency(&self, k: usize, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        k as f64 * self.sample_rate / n as f64
    }

    /// Sampling frequency (Hz)
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }
}

/// Scalar descriptors of a power spectrum
#[derive(Debug, Clone, Default)]
pub struct SpectralStats {
    /// Total spectral power (sum over bins)
    pub total_power: f64,
    /// Shannon entropy of the normalized spectrum, natural log
    pub entropy: f64,
    /// Geometric over arithmetic mean, in (0, 1]; 0.0 for an empty spectrum
    pub flatness: f64,
}

impl SpectralStats {
    /// Compute descriptors from a one-sided power spectrum.
    ///
    /// A zero-sum spectrum has entropy 0 by policy (0·ln 0 = 0 throughout),
    /// and an all-zero spectrum has flatness exactly 1.0 (uniform). The
    /// empty spectrum yields flatness 0.0 by convention, since neither mean
    /// is defined there.
    pub fn from_power_spectrum(power: &[f64]) -> Self {
        let total_power: f64 = power.iter().sum();

        let entropy = if total_power > 0.0 {
            power
                .iter()
                .filter(|&&p| p > 0.0)
                .map(|&p| {
                    let pk = p / total_power;
                    -pk * pk.ln()
                })
                .sum()
        } else {
            0.0
        };

        let flatness = if power.is_empty() {
            0.0
        } else {
            let n = power.len() as f64;
            let log_mean = power
                .iter()
                .map(|&p| (p + FLATNESS_EPSILON).ln())
                .sum::<f64>()
                / n;
            let arith_mean = total_power / n;
            log_mean.exp() / (arith_mean + FLATNESS_EPSILON)
        };

        Self {
            total_power,
            entropy,
            flatness,
        }
    }
}
