//! Mooring Filter - Lanczos low-pass core for oceanographic time series
//!
//! Smooths hourly instrument records with a 121-point Lanczos filter applied
//! in the frequency domain, ahead of analysis and EPIC archive export.

pub mod error;
pub mod filters;
pub mod series;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::FilterError;
pub use filters::{apply_lanczos_filter, LanczosConfig, LanczosFilter};
pub use series::ChannelSet;
