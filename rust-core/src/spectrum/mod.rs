//! Spectrum views derived from transform coefficients

pub mod views;
pub mod analysis;

pub use views::{amplitude, phase, power_from_amplitude, power_spectrum};
pub use analysis::{amplitude_to_db, bin_frequencies, power_to_db};
