//! Frequency-domain filtering of real series
//!
//! Forward real FFT → multiply the non-negative half-spectrum by a gain
//! window → rebuild the conjugate-symmetric full spectrum → inverse FFT.
//! The transform treats the series as periodic, so the first and last
//! half-filter-width of samples wrap around into each other.

use crate::error::FilterError;
use crate::series::missing::check_complete;
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

/// Planned spectral filter for series of one fixed length
///
/// Plans are shared behind `Arc`, so one instance can serve many channels
/// from many threads.
pub struct SpectralFilter {
    /// Series length `N`
    len: usize,

    /// Forward real FFT of size `N`
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Inverse complex FFT of size `N`
    inverse: Arc<dyn Fft<f64>>,
}

impl SpectralFilter {
    /// Plan transforms for series of `series_len` samples
    pub fn new(series_len: usize) -> Result<Self, FilterError> {
        if series_len == 0 {
            return Err(FilterError::degenerate("series is empty"));
        }

        let r2c = RealFftPlanner::<f64>::new().plan_fft_forward(series_len);
        let inverse = FftPlanner::<f64>::new().plan_fft_inverse(series_len);

        Ok(Self {
            len: series_len,
            r2c,
            inverse,
        })
    }

    pub fn series_len(&self) -> usize {
        self.len
    }

    /// Number of non-negative frequency bins, `N / 2 + 1`
    pub fn num_bins(&self) -> usize {
        self.len / 2 + 1
    }

    /// Filter `series` through the gain `window`
    pub fn filter(&self, series: &[f64], window: &[f64]) -> Result<Vec<f64>, FilterError> {
        self.filter_with_spectrum(series, window)
            .map(|(filtered, _)| filtered)
    }

    /// Filter `series` and also return its unfiltered half-spectrum
    ///
    /// # Returns
    /// `(filtered, spectrum)` where `spectrum` holds the `N / 2 + 1` raw
    /// FFT coefficients before the window was applied
    pub fn filter_with_spectrum(
        &self,
        series: &[f64],
        window: &[f64],
    ) -> Result<(Vec<f64>, Vec<Complex64>), FilterError> {
        if series.len() != self.len {
            return Err(FilterError::DimensionMismatch {
                what: "series",
                expected: self.len,
                actual: series.len(),
            });
        }
        if window.len() != self.num_bins() {
            return Err(FilterError::DimensionMismatch {
                what: "frequency window",
                expected: self.num_bins(),
                actual: window.len(),
            });
        }
        check_complete(series)?;
        if let Some(bin) = window.iter().position(|g| !g.is_finite()) {
            return Err(FilterError::degenerate(format!(
                "frequency window gain at bin {} is {}",
                bin, window[bin]
            )));
        }

        // 1. Forward FFT, non-negative half only
        let mut input = series.to_vec();
        let mut spectrum = self.r2c.make_output_vec();
        self.r2c
            .process(&mut input, &mut spectrum)
            .map_err(|e| FilterError::Transform(e.to_string()))?;

        // 2. Apply gains
        let weighted: Vec<Complex64> = spectrum
            .iter()
            .zip(window.iter())
            .map(|(&c, &g)| c * g)
            .collect();

        // 3. Restore Hermitian symmetry
        let mut full = hermitian_extend(&weighted, self.len)?;

        // 4. Inverse FFT, scaled by 1/N
        self.inverse.process(&mut full);
        let scale = 1.0 / self.len as f64;
        let filtered = full.iter().map(|c| c.re * scale).collect();

        Ok((filtered, spectrum))
    }
}

/// Rebuild the full spectrum of a real `full_len`-point signal from its
/// non-negative half.
///
/// Appends `conj(half[j])` for `j = full_len - half.len(), ..., 1`, which
/// skips the DC coefficient and, for even lengths, the Nyquist coefficient.
/// `half` must hold exactly `full_len / 2 + 1` coefficients.
pub fn hermitian_extend(
    half: &[Complex64],
    full_len: usize,
) -> Result<Vec<Complex64>, FilterError> {
    if half.len() != full_len / 2 + 1 {
        return Err(FilterError::DimensionMismatch {
            what: "half-spectrum",
            expected: full_len / 2 + 1,
            actual: half.len(),
        });
    }

    let mirrored = full_len.saturating_sub(half.len());
    let mut full = Vec::with_capacity(full_len);
    full.extend_from_slice(half);
    full.extend((1..=mirrored).rev().map(|j| half[j].conj()));
    Ok(full)
}

/// One-shot spectral filtering of `series` through `window`
///
/// `window` must have exactly `series.len() / 2 + 1` gains.
pub fn spectral_filtering(series: &[f64], window: &[f64]) -> Result<Vec<f64>, FilterError> {
    SpectralFilter::new(series.len())?.filter(series, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn test_signal(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                3.0 + (2.0 * PI * t / 17.0).sin() + 0.5 * (2.0 * PI * t / 3.0).cos() + 0.01 * t
            })
            .collect()
    }

    #[test]
    fn test_unity_window_identity() {
        for &n in &[2usize, 3, 5, 64, 241, 242, 1000, 1001] {
            let x = test_signal(n);
            let y = spectral_filtering(&x, &vec![1.0; n / 2 + 1]).unwrap();

            assert_eq!(y.len(), n);
            for (i, (a, b)) in x.iter().zip(y.iter()).enumerate() {
                assert!((a - b).abs() < 1e-8, "n {} idx {}: {} vs {}", n, i, a, b);
            }
        }
    }

    #[test]
    fn test_zero_window_zeroes() {
        let x = test_signal(100);
        let y = spectral_filtering(&x, &vec![0.0; 51]).unwrap();
        assert!(y.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_dc_only_window_returns_mean() {
        let x = test_signal(99);
        let mean = x.iter().sum::<f64>() / x.len() as f64;
        let mut window = vec![0.0; 50];
        window[0] = 1.0;

        let y = spectral_filtering(&x, &window).unwrap();
        assert!(y.iter().all(|v| (v - mean).abs() < 1e-10));
    }

    #[test]
    fn test_hermitian_extend_lengths() {
        let half_even = vec![Complex64::new(1.0, 0.0); 5];
        assert_eq!(hermitian_extend(&half_even, 8).unwrap().len(), 8);

        let half_odd = vec![Complex64::new(1.0, 0.0); 4];
        let full = hermitian_extend(&half_odd, 7).unwrap();
        assert_eq!(full.len(), 7);

        let half = [
            Complex64::new(0.0, 0.0),
            Complex64::new(1.0, 2.0),
            Complex64::new(3.0, 4.0),
        ];
        let full = hermitian_extend(&half, 4).unwrap();
        assert_eq!(full[3], Complex64::new(1.0, -2.0));
    }

    #[test]
    fn test_hermitian_extend_short_half() {
        let half = vec![Complex64::new(1.0, 0.0); 2];
        match hermitian_extend(&half, 10) {
            Err(FilterError::DimensionMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(hermitian_extend(&vec![Complex64::new(1.0, 0.0); 7], 10).is_err());
    }

    #[test]
    fn test_returns_raw_spectrum() {
        let x = vec![2.0; 16];
        let filter = SpectralFilter::new(16).unwrap();
        let (_, spectrum) = filter.filter_with_spectrum(&x, &vec![0.5; 9]).unwrap();

        assert_eq!(spectrum.len(), 9);
        assert!((spectrum[0].re - 32.0).abs() < 1e-10);
        assert!(spectrum[1..].iter().all(|c| c.norm() < 1e-10));
    }

    #[test]
    fn test_window_length_mismatch() {
        let x = test_signal(100);
        match spectral_filtering(&x, &vec![1.0; 50]) {
            Err(FilterError::DimensionMismatch { expected, actual, .. }) => {
                assert_eq!(expected, 51);
                assert_eq!(actual, 50);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_series() {
        assert!(matches!(
            spectral_filtering(&[], &[1.0]),
            Err(FilterError::NumericDegenerate { .. })
        ));

        let mut x = test_signal(10);
        x[4] = f64::NAN;
        assert!(matches!(
            spectral_filtering(&x, &vec![1.0; 6]),
            Err(FilterError::NumericDegenerate { .. })
        ));
    }

    #[test]
    fn test_non_finite_window() {
        let x: Vec<f64> = (0..16).map(|i| i as f64).collect();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut window = vec![1.0; 9];
            window[3] = bad;
            match spectral_filtering(&x, &window) {
                Err(FilterError::NumericDegenerate { reason }) => {
                    assert!(reason.contains("bin 3"), "{}", reason);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
