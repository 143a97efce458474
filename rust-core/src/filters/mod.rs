//! Lanczos low-pass design and FFT-based application

pub mod weights;
pub mod window;
pub mod spectral;
pub mod lanczos;

pub use weights::{low_pass_weights, FilterWeights};
pub use window::{spectral_window, spectral_window_with_policy, SpectralWindow, ZeroFrequencyGain};
pub use spectral::{spectral_filtering, SpectralFilter};
pub use lanczos::{apply_lanczos_filter, FilterReport, LanczosConfig, LanczosFilter};
