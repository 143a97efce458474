//! Frequency-domain gain of a symmetric filter
//!
//! Evaluates the zero-phase response of a half-window of weights on the
//! frequency grid of an `N`-point real FFT.

use crate::error::FilterError;
use std::f64::consts::PI;

/// How the zero-frequency bin of a spectral window is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroFrequencyGain {
    /// Gain of exactly 1: the series mean passes through untouched
    #[default]
    Unity,

    /// Same cosine sum as every other bin, evaluated at f = 0
    Computed,

    /// Bin left at 0.0, which removes the mean
    Unset,
}

/// Gains and the normalized frequencies they were sampled at
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralWindow {
    /// One gain per frequency bin
    pub gains: Vec<f64>,

    /// Frequencies as a fraction of Nyquist (0 to 1)
    pub frequencies: Vec<f64>,
}

impl SpectralWindow {
    pub fn len(&self) -> usize {
        self.gains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty()
    }

    /// Split into `(gains, frequencies)`
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.gains, self.frequencies)
    }
}

/// Normalized frequency axis `0, 2/N, 4/N, ...` below 1.0, with the Nyquist
/// bin (1.0) appended once when `N` is even.
///
/// Always `N / 2 + 1` entries long.
pub fn frequency_axis(sequence_length: usize) -> Vec<f64> {
    let n = sequence_length as f64;
    let mut axis: Vec<f64> = (0..)
        .map(|i| i * 2)
        .take_while(|&twice| twice < sequence_length)
        .map(|twice| twice as f64 / n)
        .collect();

    let reaches_nyquist = axis
        .last()
        .map_or(false, |&last| (last - 1.0).abs() < 1e-8);
    if sequence_length % 2 == 0 && !reaches_nyquist {
        axis.push(1.0);
    }

    axis
}

/// Zero-phase response `w[0] + 2 * Σ_{k=1..M} w[k] cos(kπf)` with
/// `M = len(half_weights) - 2`.
///
/// The last entry of the half-window is not summed; it is the tap the
/// standard 241-point design treats as its outer edge.
pub fn zero_phase_response(half_weights: &[f64], frequency: f64) -> f64 {
    if half_weights.is_empty() {
        return 0.0;
    }
    let taps = half_weights.len().saturating_sub(2);
    let tail: f64 = half_weights[1..=taps]
        .iter()
        .enumerate()
        .map(|(i, &w)| w * ((i + 1) as f64 * PI * frequency).cos())
        .sum();
    half_weights[0] + 2.0 * tail
}

/// Build the spectral window for a series of `sequence_length` samples
/// using the default zero-frequency policy ([`ZeroFrequencyGain::Unity`]).
pub fn spectral_window(
    half_weights: &[f64],
    sequence_length: usize,
) -> Result<SpectralWindow, FilterError> {
    spectral_window_with_policy(half_weights, sequence_length, ZeroFrequencyGain::default())
}

/// Build the spectral window for a series of `sequence_length` samples
///
/// # Arguments
/// * `half_weights` - Center weight followed by the weights at offsets 1, 2, ...
/// * `sequence_length` - Length `N` of the series the window will filter
/// * `dc` - How to fill the zero-frequency bin
///
/// # Returns
/// `N / 2 + 1` gains and the matching normalized frequency axis
pub fn spectral_window_with_policy(
    half_weights: &[f64],
    sequence_length: usize,
    dc: ZeroFrequencyGain,
) -> Result<SpectralWindow, FilterError> {
    if half_weights.len() < 2 {
        return Err(FilterError::invalid(
            "half_weights",
            half_weights.len() as f64,
            "need the center weight and at least one neighbour",
        ));
    }
    if sequence_length < 1 {
        return Err(FilterError::invalid(
            "sequence_length",
            sequence_length as f64,
            "must be at least 1",
        ));
    }

    let frequencies = frequency_axis(sequence_length);
    let mut gains = vec![0.0; frequencies.len()];

    for (gain, &f) in gains.iter_mut().zip(frequencies.iter()).skip(1) {
        *gain = zero_phase_response(half_weights, f);
    }

    gains[0] = match dc {
        ZeroFrequencyGain::Unity => 1.0,
        ZeroFrequencyGain::Computed => zero_phase_response(half_weights, 0.0),
        ZeroFrequencyGain::Unset => 0.0,
    };

    Ok(SpectralWindow { gains, frequencies })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::weights::low_pass_weights;

    fn standard_half() -> Vec<f64> {
        low_pass_weights(242, 1.0 / 35.0)
            .unwrap()
            .half_window()
            .to_vec()
    }

    #[test]
    fn test_frequency_axis_even() {
        let axis = frequency_axis(8);
        assert_eq!(axis, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_frequency_axis_odd() {
        let axis = frequency_axis(7);
        assert_eq!(axis.len(), 4);
        assert!((axis[3] - 6.0 / 7.0).abs() < 1e-15);
        assert!(axis.iter().all(|&f| f < 1.0));
    }

    #[test]
    fn test_axis_shape_properties() {
        for n in 1..600 {
            let window = spectral_window(&[0.5, 0.25, 0.1], n).unwrap();
            assert_eq!(window.gains.len(), window.frequencies.len());
            assert_eq!(window.len(), n / 2 + 1);
            assert!(window.frequencies.windows(2).all(|p| p[0] <= p[1]));

            let nyquist = window.frequencies.iter().filter(|&&f| f == 1.0).count();
            assert_eq!(nyquist, if n % 2 == 0 { 1 } else { 0 }, "n = {}", n);
        }
    }

    #[test]
    fn test_cosine_sum_skips_last_weight() {
        // M = 1: only w[1] contributes, w[2] is ignored
        let half = [0.4, 0.2, 99.0];
        let window = spectral_window(&half, 4).unwrap();
        // axis = [0, 0.5, 1]
        assert!((window.gains[1] - (0.4 + 2.0 * 0.2 * (0.5 * PI).cos())).abs() < 1e-12);
        assert!((window.gains[2] - (0.4 - 0.4)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_frequency_policies() {
        let half = standard_half();

        let unity = spectral_window_with_policy(&half, 500, ZeroFrequencyGain::Unity).unwrap();
        let computed = spectral_window_with_policy(&half, 500, ZeroFrequencyGain::Computed).unwrap();
        let unset = spectral_window_with_policy(&half, 500, ZeroFrequencyGain::Unset).unwrap();

        assert_eq!(unity.gains[0], 1.0);
        assert!((computed.gains[0] - 0.999336595112937).abs() < 1e-9);
        assert_eq!(unset.gains[0], 0.0);
        assert_eq!(unity.gains[1..], unset.gains[1..]);
    }

    #[test]
    fn test_standard_response() {
        let half = standard_half();

        // periods in hours at hourly sampling, f normalized to Nyquist (0.5 cph)
        let gain_at = |period: f64| zero_phase_response(&half, (1.0 / period) / 0.5);

        assert!((gain_at(100.0) - 0.9987407078005552).abs() < 1e-9);
        assert!((gain_at(35.0) - 0.500160384167154).abs() < 1e-9);
        assert!(gain_at(24.0).abs() < 1e-3);
        assert!(gain_at(12.42).abs() < 1e-3);
        assert!(gain_at(10.0).abs() < 1e-3);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            spectral_window(&[1.0], 10),
            Err(FilterError::InvalidParameter { name: "half_weights", .. })
        ));
        assert!(matches!(
            spectral_window(&[1.0, 0.5], 0),
            Err(FilterError::InvalidParameter { name: "sequence_length", .. })
        ));
    }
}
