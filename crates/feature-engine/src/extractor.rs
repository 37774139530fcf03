//! Magnitude Feature Extraction

use crate::error::InvalidInputError;
use crate::spectrum::{SpectralStats, SpectrumAnalyzer};
use crate::statistics::TimeDomainStats;
use crate::window::SignalWindow;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features produced per extraction call
pub const FEATURE_COUNT: usize = 9;

/// The feature set computed from one signal window.
///
/// Serialized field names match the selection catalog byte-for-byte. Either
/// all nine features are populated or the extraction call fails; there is no
/// partial result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MagnitudeFeatures {
    /// Mean of the magnitude signal
    #[serde(rename = "Magnitude_mean")]
    pub mean: f64,
    /// Population standard deviation of the magnitude signal
    #[serde(rename = "Magnitude_std_dev")]
    pub std_dev: f64,
    /// Population variance of the magnitude signal
    #[serde(rename = "Magnitude_var")]
    pub var: f64,
    /// Root mean square of the magnitude signal
    #[serde(rename = "Magnitude_rms")]
    pub rms: f64,
    /// Max minus min of the magnitude signal
    #[serde(rename = "Magnitude_maxmin_diff")]
    pub maxmin_diff: f64,
    /// Total spectral energy; always equal to `fft_tot_power`
    #[serde(rename = "Magnitude_fft_energy")]
    pub fft_energy: f64,
    /// Shannon entropy of the normalized power spectrum
    #[serde(rename = "Magnitude_fft_entropy")]
    pub fft_entropy: f64,
    /// Total power of the one-sided spectrum
    #[serde(rename = "Magnitude_fft_tot_power")]
    pub fft_tot_power: f64,
    /// Spectral flatness, in (0, 1] (0.0 for the empty spectrum)
    #[serde(rename = "Magnitude_fft_flatness")]
    pub fft_flatness: f64,
}

impl MagnitudeFeatures {
    /// Look up a feature value by its catalog name
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "Magnitude_mean" => Some(self.mean),
            "Magnitude_std_dev" => Some(self.std_dev),
            "Magnitude_var" => Some(self.var),
            "Magnitude_rms" => Some(self.rms),
            "Magnitude_maxmin_diff" => Some(self.maxmin_diff),
            "Magnitude_fft_energy" => Some(self.fft_energy),
            "Magnitude_fft_entropy" => Some(self.fft_entropy),
            "Magnitude_fft_tot_power" => Some(self.fft_tot_power),
            "Magnitude_fft_flatness" => Some(self.fft_flatness),
            _ => None,
        }
    }

    /// Iterate over (name, value) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("Magnitude_mean", self.mean),
            ("Magnitude_std_dev", self.std_dev),
            ("Magnitude_var", self.var),
            ("Magnitude_rms", self.rms),
            ("Magnitude_maxmin_diff", self.maxmin_diff),
            ("Magnitude_fft_energy", self.fft_energy),
            ("Magnitude_fft_entropy", self.fft_entropy),
            ("Magnitude_fft_tot_power", self.fft_tot_power),
            ("Magnitude_fft_flatness", self.fft_flatness),
        ]
        .into_iter()
    }
}

/// Extractor that turns signal windows into magnitude feature sets
pub struct MagnitudeExtractor {
    /// Spectrum analyzer with cached FFT planner
    analyzer: SpectrumAnalyzer,
}

impl std::fmt::Debug for MagnitudeExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // SpectrumAnalyzer holds an FftPlanner, which has no Debug impl
        f.debug_struct("MagnitudeExtractor").finish_non_exhaustive()
    }
}


impl MagnitudeExtractor {
    /// Create a new extractor for windows sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Result<Self, InvalidInputError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(InvalidInputError::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            analyzer: SpectrumAnalyzer::new(sample_rate),
        })
    }

    /// Extract all nine magnitude features from a window.
    ///
    /// Pure apart from tracing: no I/O, no shared state, each call
    /// independent. Readings must be finite; NaN or infinite inputs fail
    /// the whole call rather than flow through the statistics.
    pub fn extract(
        &mut self,
        window: &SignalWindow,
    ) -> Result<MagnitudeFeatures, InvalidInputError> {
        window.validate_finite()?;

        let magnitude = window.magnitude();
        debug!(samples = magnitude.len(), "extracting magnitude features");

        let time = TimeDomainStats::compute(&magnitude);

        let power = self.analyzer.power_spectrum(&magnitude);
        let spectral = SpectralStats::from_power_spectrum(&power);

        Ok(MagnitudeFeatures {
            mean: time.mean,
            std_dev: time.std_dev,
            var: time.variance,
            rms: time.rms,
            maxmin_diff: time.maxmin_diff,
            fft_energy: spectral.total_power,
            fft_entropy: spectral.entropy,
            fft_tot_power: spectral.total_power,
            fft_flatness: spectral.flatness,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn extract(samples: Vec<[f64; 3]>) -> MagnitudeFeatures {
        let window = SignalWindow::from_samples(samples).unwrap();
        MagnitudeExtractor::new(100.0).unwrap().extract(&window).unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!(
            (a - b).abs() <= 1e-9 + 1e-6 * a.abs().max(b.abs()),
            "{a} != {b}"
        );
    }

    #[test]
    fn test_reference_window() {
        // magnitude [3, 4, 3, 4], two spectral bins
        let features = extract(vec![
            [3.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [3.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
        ]);
        assert_close(features.mean, 3.5);
        assert_close(features.var, 0.25);
        assert_close(features.std_dev, 0.5);
        assert_close(features.rms, 12.5_f64.sqrt());
        assert_close(features.maxmin_diff, 1.0);
        assert_eq!(features.fft_energy, features.fft_tot_power);
        assert!(features.fft_entropy.is_finite() && features.fft_entropy >= 0.0);
        assert!(features.fft_flatness.is_finite());
        assert!(features.fft_flatness > 0.0 && features.fft_flatness <= 1.0 + 1e-9);
    }

    #[test]
    fn test_constant_window() {
        let c = 2.0;
        let features = extract(vec![[c, c, c]; 8]);
        assert_close(features.mean, c * 3.0_f64.sqrt());
        assert_close(features.rms, c * 3.0_f64.sqrt());
        assert_eq!(features.std_dev, 0.0);
        assert_eq!(features.var, 0.0);
        assert_eq!(features.maxmin_diff, 0.0);
    }

    #[test]
    fn test_all_zero_window() {
        let features = extract(vec![[0.0, 0.0, 0.0]; 16]);
        assert_eq!(features.mean, 0.0);
        assert_eq!(features.std_dev, 0.0);
        assert_eq!(features.var, 0.0);
        assert_eq!(features.rms, 0.0);
        assert_eq!(features.maxmin_diff, 0.0);
        assert_eq!(features.fft_energy, 0.0);
        assert_eq!(features.fft_tot_power, 0.0);
        assert_eq!(features.fft_entropy, 0.0);
        assert!((features.fft_flatness - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_sample_window() {
        let features = extract(vec![[1.0, 2.0, 2.0]]);
        assert_close(features.mean, 3.0);
        assert_eq!(features.std_dev, 0.0);
        assert_eq!(features.var, 0.0);
        assert_eq!(features.maxmin_diff, 0.0);
        // empty one-sided spectrum
        assert_eq!(features.fft_energy, 0.0);
        assert_eq!(features.fft_tot_power, 0.0);
        assert_eq!(features.fft_entropy, 0.0);
        assert_eq!(features.fft_flatness, 0.0);
    }

    #[test]
    fn test_nan_input_fails() {
        let window =
            SignalWindow::from_samples(vec![[1.0, 2.0, 3.0], [f64::INFINITY, 0.0, 0.0]]).unwrap();
        let mut extractor = MagnitudeExtractor::new(100.0).unwrap();
        assert_eq!(
            extractor.extract(&window).unwrap_err(),
            InvalidInputError::NonFinite { sample: 1, axis: "x" }
        );
    }

    #[test]
    fn test_invalid_sample_rate() {
        assert_eq!(
            MagnitudeExtractor::new(0.0).unwrap_err(),
            InvalidInputError::InvalidSampleRate(0.0)
        );
        assert!(MagnitudeExtractor::new(-5.0).is_err());
        assert!(MagnitudeExtractor::new(f64::NAN).is_err());
    }

    #[test]
    fn test_get_and_iter_cover_all_names() {
        let features = extract(vec![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        for name in crate::catalog::EXTRACTED_FEATURES {
            assert!(features.get(name).is_some(), "{name} missing");
        }
        assert!(features.get("Magnitude_zero_cross_rt").is_none());
        assert_eq!(features.iter().count(), FEATURE_COUNT);
    }

    #[test]
    fn test_serialized_names_match_catalog() {
        let features = extract(vec![[1.0, 1.0, 1.0], [2.0, 0.0, 1.0]]);
        let json = serde_json::to_value(&features).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), FEATURE_COUNT);
        for name in crate::catalog::EXTRACTED_FEATURES {
            assert!(object.contains_key(name), "{name} missing from JSON");
        }
    }

    proptest! {
        #[test]
        fn prop_energy_equals_tot_power(
            samples in prop::collection::vec(prop::array::uniform3(-50.0..50.0f64), 1..64)
        ) {
            let features = extract(samples);
            prop_assert_eq!(features.fft_energy, features.fft_tot_power);
            prop_assert!(features.fft_entropy >= 0.0);
            prop_assert!(features.fft_flatness >= 0.0);
            prop_assert!(features.fft_flatness <= 1.0 + 1e-9);
        }

        #[test]
        fn prop_scale_invariance(
            samples in prop::collection::vec(prop::array::uniform3(0.5..50.0f64), 2..48),
            k in 0.1..10.0f64
        ) {
            let scaled: Vec<[f64; 3]> = samples
                .iter()
                .map(|[x, y, z]| [x * k, y * k, z * k])
                .collect();
            let base = extract(samples);
            let big = extract(scaled);

            let rel = |a: f64, b: f64| (a - b).abs() <= 1e-9 + 1e-6 * a.abs().max(b.abs());
            prop_assert!(rel(big.mean, base.mean * k));
            prop_assert!(rel(big.std_dev, base.std_dev * k));
            prop_assert!(rel(big.rms, base.rms * k));
            prop_assert!(rel(big.maxmin_diff, base.maxmin_diff * k));
            prop_assert!(rel(big.fft_tot_power, base.fft_tot_power * k * k));
            prop_assert!(rel(big.fft_energy, base.fft_energy * k * k));
            // shape descriptors are scale-invariant
            prop_assert!((big.fft_entropy - base.fft_entropy).abs() < 1e-6);
            prop_assert!((big.fft_flatness - base.fft_flatness).abs() < 1e-6);
        }
    }
}
