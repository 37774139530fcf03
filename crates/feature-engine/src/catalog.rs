//! Feature Name Catalogs
//!
//! Fixed, immutable name sets shared with downstream selection. The catalog
//! is wider than what the extractor produces: `Magnitude_zero_cross_rt`,
//! `Magnitude_fft_dom_freq` and `Magnitude_fft_pw_ar_dom_freq` are legacy
//! catalog entries that remain selectable from already-computed tables but
//! are not computed by [`MagnitudeExtractor`](crate::MagnitudeExtractor) —
//! compare [`ALL_FEATURES`] against [`EXTRACTED_FEATURES`].

/// Time-domain feature names
pub const TIME_DOMAIN_FEATURES: [&str; 6] = [
    "Magnitude_mean",
    "Magnitude_std_dev",
    "Magnitude_var",
    "Magnitude_rms",
    "Magnitude_maxmin_diff",
    "Magnitude_zero_cross_rt",
];

/// Frequency-domain feature names
pub const FREQ_DOMAIN_FEATURES: [&str; 6] = [
    "Magnitude_fft_energy",
    "Magnitude_fft_entropy",
    "Magnitude_fft_dom_freq",
    "Magnitude_fft_tot_power",
    "Magnitude_fft_pw_ar_dom_freq",
    "Magnitude_fft_flatness",
];

/// Clinical assessment scores; present in downstream tables, never produced
/// by the extractor
pub const CLINICAL_FEATURES: [&str; 4] = [
    "Constancy_of_rest",
    "Kinetic_tremor",
    "Postural_tremor",
    "Rest_tremor",
];

/// The full selection catalog, in catalog order
pub const ALL_FEATURES: [&str; 16] = [
    "Magnitude_mean",
    "Magnitude_std_dev",
    "Magnitude_var",
    "Magnitude_rms",
    "Magnitude_maxmin_diff",
    "Magnitude_zero_cross_rt",
    "Magnitude_fft_energy",
    "Magnitude_fft_entropy",
    "Magnitude_fft_dom_freq",
    "Magnitude_fft_tot_power",
    "Magnitude_fft_pw_ar_dom_freq",
    "Magnitude_fft_flatness",
    "Constancy_of_rest",
    "Kinetic_tremor",
    "Postural_tremor",
    "Rest_tremor",
];

/// The names actually produced by a single extraction call
pub const EXTRACTED_FEATURES: [&str; 9] = [
    "Magnitude_mean",
    "Magnitude_std_dev",
    "Magnitude_var",
    "Magnitude_rms",
    "Magnitude_maxmin_diff",
    "Magnitude_fft_energy",
    "Magnitude_fft_entropy",
    "Magnitude_fft_tot_power",
    "Magnitude_fft_flatness",
];

/// Whether `name` belongs to the selection catalog
pub fn is_known_feature(name: &str) -> bool {
    ALL_FEATURES.contains(&name)
}
