//! Lanczos low-pass weight generation
//!
//! Windowed-sinc coefficients tapered by the Lanczos sigma factor.

use crate::error::FilterError;
use std::f64::consts::PI;

/// Smallest requested double-sided window that still yields a center tap
/// plus one neighbour on each side.
pub const MIN_WINDOW_LENGTH: usize = 3;

/// Symmetric, odd-length impulse response of a low-pass filter
#[derive(Debug, Clone, PartialEq)]
pub struct FilterWeights {
    coefficients: Vec<f64>,
}

impl FilterWeights {
    /// All coefficients, boundary taps already removed
    pub fn as_slice(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Index of the center tap
    pub fn center_index(&self) -> usize {
        self.coefficients.len() / 2
    }

    /// Center tap, `2 * cutoff`
    pub fn center(&self) -> f64 {
        self.coefficients[self.center_index()]
    }

    /// Weights from the center tap up to, but not including, the last tap.
    ///
    /// This is the half-window fed to the spectral window builder: for the
    /// standard 241-tap filter it holds the center plus offsets 1..=119.
    pub fn half_window(&self) -> &[f64] {
        let end = self.coefficients.len().saturating_sub(1);
        &self.coefficients[self.center_index()..end]
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.coefficients
    }
}

/// Reject cutoffs outside the open interval (0, 0.5) cycles per sample.
pub fn validate_cutoff(cutoff: f64) -> Result<(), FilterError> {
    if !(cutoff > 0.0 && cutoff < 0.5) {
        return Err(FilterError::invalid(
            "cutoff",
            cutoff,
            "must lie strictly inside (0, 0.5) cycles per sample",
        ));
    }
    Ok(())
}

/// Calculate the weights of a Lanczos low-pass filter
///
/// # Algorithm
/// 1. `order = (window_length - 1) / 2 + 1`, candidate length `2 * order + 1`
/// 2. Center tap is `2 * cutoff`
/// 3. Tap at offset `±k` is `sin(2π·cutoff·k) / (πk) * sin(πk/order) * order / (πk)`
///    for `k = 1..order`
/// 4. The two outermost candidate taps are dropped
///
/// # Arguments
/// * `window_length` - Requested double-sided window size (≥ 3)
/// * `cutoff` - Cutoff frequency in cycles per sample, `0 < cutoff < 0.5`
///
/// # Returns
/// `2 * order - 1` symmetric coefficients
pub fn low_pass_weights(window_length: usize, cutoff: f64) -> Result<FilterWeights, FilterError> {
    if window_length < MIN_WINDOW_LENGTH {
        return Err(FilterError::invalid(
            "window_length",
            window_length as f64,
            "must be at least 3",
        ));
    }
    validate_cutoff(cutoff)?;

    let order = (window_length - 1) / 2 + 1;
    let mut candidate = vec![0.0; 2 * order + 1];
    let center = order;
    candidate[center] = 2.0 * cutoff;

    let n = order as f64;
    for k in 1..order {
        let kf = k as f64;
        let sigma = (PI * kf / n).sin() * n / (PI * kf);
        let sinc = (2.0 * PI * cutoff * kf).sin() / (PI * kf);
        let tap = sinc * sigma;
        candidate[center - k] = tap;
        candidate[center + k] = tap;
    }

    // Offsets ±order are never assigned.
    candidate.pop();
    candidate.remove(0);

    Ok(FilterWeights {
        coefficients: candidate,
    })
}
