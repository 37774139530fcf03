//! Magnitude Feature Engine
//!
//! Computes time-domain and frequency-domain descriptors from tri-axial
//! motion-sensor windows for tremor characterization.

mod catalog;
mod error;
mod extractor;
mod spectrum;
mod statistics;
mod window;

pub use catalog::{
    is_known_feature, ALL_FEATURES, CLINICAL_FEATURES, EXTRACTED_FEATURES, FREQ_DOMAIN_FEATURES,
    TIME_DOMAIN_FEATURES,
};
pub use error::InvalidInputError;
pub use extractor::{MagnitudeExtractor, MagnitudeFeatures, FEATURE_COUNT};
pub use spectrum::{SpectralStats, SpectrumAnalyzer};
pub use statistics::TimeDomainStats;
pub use window::SignalWindow;
