//! Lanczos low-pass filter for hourly series
//!
//! Standard 121-point (double-sided 242) filter with a 35 hour cutoff,
//! used to strip tidal and inertial energy from mooring records.

use super::spectral::SpectralFilter;
use super::weights::{low_pass_weights, FilterWeights};
use super::window::{spectral_window_with_policy, ZeroFrequencyGain};
use crate::error::FilterError;
use crate::series::missing::check_complete;
use num_complex::Complex64;

/// Requested double-sided window size of the standard filter
pub const STANDARD_WINDOW_LENGTH: usize = 242;

/// Default cutoff period in hours
pub const DEFAULT_CUTOFF_PERIOD_HOURS: f64 = 35.0;

const HOURS_PER_DAY: f64 = 24.0;

/// Lanczos filter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LanczosConfig {
    /// Requested double-sided window size; also the minimum series length
    pub window_length: usize,

    /// Cutoff period in hours (the design cutoff is its inverse, taken as
    /// cycles per sample)
    pub cutoff_period_hours: f64,

    /// Zero-frequency gain of the spectral window
    pub zero_frequency_gain: ZeroFrequencyGain,
}

impl Default for LanczosConfig {
    fn default() -> Self {
        Self {
            window_length: STANDARD_WINDOW_LENGTH,
            cutoff_period_hours: DEFAULT_CUTOFF_PERIOD_HOURS,
            zero_frequency_gain: ZeroFrequencyGain::Unity,
        }
    }
}

/// Filtered series plus the spectral geometry it was produced with
#[derive(Debug, Clone)]
pub struct FilterReport {
    /// Smoothed series, same length as the input
    pub filtered: Vec<f64>,

    /// Gain applied to each non-negative frequency bin
    pub gains: Vec<f64>,

    /// Bin frequencies in cycles per hour
    pub frequencies_cph: Vec<f64>,

    /// Sampling Nyquist frequency in cycles per hour
    pub nyquist_cph: f64,

    /// Cutoff frequency as a fraction of Nyquist
    pub normalized_cutoff: f64,

    /// Unfiltered half-spectrum of the input
    pub spectrum: Vec<Complex64>,
}

/// Sampling Nyquist frequency in cycles per hour for a step of `dt_days`
pub fn nyquist_cph(dt_days: f64) -> f64 {
    1.0 / (2.0 * dt_days * HOURS_PER_DAY)
}

/// Configured Lanczos filter with its weights generated once
#[derive(Debug, Clone)]
pub struct LanczosFilter {
    config: LanczosConfig,
    weights: FilterWeights,
}

impl LanczosFilter {
    /// Validate `config` and generate the filter weights
    pub fn new(config: LanczosConfig) -> Result<Self, FilterError> {
        let period = config.cutoff_period_hours;
        if !(period.is_finite() && period > 0.0) {
            return Err(FilterError::invalid(
                "cutoff_period_hours",
                period,
                "must be a positive number of hours",
            ));
        }

        let weights = low_pass_weights(config.window_length, 1.0 / period)?;
        log::debug!(
            "lanczos filter: {} taps, cutoff period {} h",
            weights.len(),
            period
        );

        Ok(Self { config, weights })
    }

    /// 242-point window, 35 hour cutoff, unity DC gain
    pub fn standard() -> Result<Self, FilterError> {
        Self::new(LanczosConfig::default())
    }

    pub fn config(&self) -> &LanczosConfig {
        &self.config
    }

    pub fn weights(&self) -> &FilterWeights {
        &self.weights
    }

    /// Filter `series`, sampled every `dt_days`
    ///
    /// # Returns
    /// Smoothed series of exactly `series.len()` samples
    pub fn apply(&self, series: &[f64], dt_days: f64) -> Result<Vec<f64>, FilterError> {
        self.apply_with_report(series, dt_days)
            .map(|report| report.filtered)
    }

    /// Filter `series` and report the spectral window that was applied
    pub fn apply_with_report(
        &self,
        series: &[f64],
        dt_days: f64,
    ) -> Result<FilterReport, FilterError> {
        self.validate(series, dt_days)?;
        let plan = SpectralFilter::new(series.len())?;
        self.run(&plan, series, dt_days)
    }

    /// Check the timestep, completeness and length of `series`
    pub fn validate(&self, series: &[f64], dt_days: f64) -> Result<(), FilterError> {
        if !(dt_days.is_finite() && dt_days > 0.0) {
            return Err(FilterError::invalid("dt_days", dt_days, "timestep must be positive"));
        }
        check_complete(series)?;
        if series.len() < self.config.window_length {
            return Err(FilterError::invalid(
                "series_len",
                series.len() as f64,
                "series is shorter than the filter window",
            ));
        }
        Ok(())
    }

    /// Run the pipeline on a validated series with a pre-built plan
    pub(crate) fn run(
        &self,
        plan: &SpectralFilter,
        series: &[f64],
        dt_days: f64,
    ) -> Result<FilterReport, FilterError> {
        let nyquist = nyquist_cph(dt_days);
        if (dt_days * HOURS_PER_DAY - 1.0).abs() > 1e-9 {
            log::warn!(
                "timestep of {} h is not hourly; cutoff of {} h assumes hourly samples",
                dt_days * HOURS_PER_DAY,
                self.config.cutoff_period_hours
            );
        }
        let normalized_cutoff = (1.0 / self.config.cutoff_period_hours) / nyquist;

        let window = spectral_window_with_policy(
            self.weights.half_window(),
            series.len(),
            self.config.zero_frequency_gain,
        )?;

        let (mut filtered, spectrum) = plan.filter_with_spectrum(series, &window.gains)?;
        if filtered.len() > series.len() {
            filtered.truncate(series.len());
        }

        log::debug!(
            "filtered {} samples over {} bins, nyquist {:.4} cph, normalized cutoff {:.4}",
            series.len(),
            window.len(),
            nyquist,
            normalized_cutoff
        );

        let (gains, frequencies) = window.into_parts();
        let frequencies_cph = frequencies.iter().map(|f| f * nyquist).collect();

        Ok(FilterReport {
            filtered,
            gains,
            frequencies_cph,
            nyquist_cph: nyquist,
            normalized_cutoff,
            spectrum,
        })
    }
}

/// Low-pass `series` (sampled every `dt_days`) with the standard 242-point
/// Lanczos window and a cutoff of `cutoff_period_hours`
pub fn apply_lanczos_filter(
    series: &[f64],
    dt_days: f64,
    cutoff_period_hours: f64,
) -> Result<Vec<f64>, FilterError> {
    let filter = LanczosFilter::new(LanczosConfig {
        cutoff_period_hours,
        ..LanczosConfig::default()
    })?;
    filter.apply(series, dt_days)
}
