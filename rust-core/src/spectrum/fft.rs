//! FFT engine using realfft for real-valued series
//!
//! Diagnostic spectra of raw and filtered records

use crate::error::FilterError;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

/// FFT engine for real-valued series
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (complex spectrum)
    output_buffer: Vec<num_complex::Complex<f64>>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples, any length ≥ 1)
    pub fn new(fft_size: usize) -> Result<Self, FilterError> {
        if fft_size == 0 {
            return Err(FilterError::invalid("fft_size", 0.0, "must be at least 1"));
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    fn transform(&mut self, signal: &[f64]) -> Result<(), FilterError> {
        // Zero-pad short signals, truncate long ones
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| FilterError::Transform(e.to_string()))
    }

    /// One-sided amplitude spectrum
    ///
    /// A sinusoid of amplitude `A` centered on bin `k` reads `A` at `k`.
    /// DC (and Nyquist, for even sizes) are not doubled.
    pub fn amplitude_spectrum(&mut self, signal: &[f64]) -> Result<Vec<f64>, FilterError> {
        self.transform(signal)?;

        let n = self.fft_size as f64;
        let nyquist_bin = if self.fft_size % 2 == 0 {
            Some(self.fft_size / 2)
        } else {
            None
        };

        Ok(self
            .output_buffer
            .iter()
            .enumerate()
            .map(|(k, c)| {
                if k == 0 || Some(k) == nyquist_bin {
                    c.norm() / n
                } else {
                    2.0 * c.norm() / n
                }
            })
            .collect())
    }

    /// Compute power spectrum (amplitude squared)
    pub fn power_spectrum(&mut self, signal: &[f64]) -> Result<Vec<f64>, FilterError> {
        Ok(self
            .amplitude_spectrum(signal)?
            .iter()
            .map(|&a| a * a)
            .collect())
    }

    /// Total power in bins whose normalized frequency lies in `[low, high]`
    pub fn band_energy(&mut self, signal: &[f64], low: f64, high: f64) -> Result<f64, FilterError> {
        let power = self.power_spectrum(signal)?;
        Ok(power
            .iter()
            .enumerate()
            .filter(|&(k, _)| {
                let f = self.bin_to_frequency(k);
                f >= low && f <= high
            })
            .map(|(_, p)| p)
            .sum())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of frequency bins (fft_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Convert bin index to normalized frequency (fraction of Nyquist)
    pub fn bin_to_frequency(&self, bin: usize) -> f64 {
        2.0 * bin as f64 / self.fft_size as f64
    }

    /// Get frequency axis in normalized units (0 to 1, where 1 = Nyquist)
    pub fn frequency_axis(&self) -> Vec<f64> {
        (0..self.num_bins())
            .map(|bin| self.bin_to_frequency(bin))
            .collect()
    }
}
