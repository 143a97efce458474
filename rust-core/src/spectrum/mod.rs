//! Spectral diagnostics for raw and filtered series

pub mod fft;
pub mod analysis;

pub use fft::FftEngine;
pub use analysis::{amplitude_ratio, sinusoid_amplitude};
