//! Amplitude of individual periodic components
//!
//! Used to check how strongly a filter attenuates a tidal or synoptic band
//! away from the wrap-around edges of an FFT-filtered record.

use crate::error::FilterError;
use std::f64::consts::PI;

/// Amplitude of the sinusoid with period `period_samples` in `series`
///
/// Quadrature projection after removing the mean. Exact when the series
/// spans an integer number of periods; otherwise leakage is of order
/// `1 / (π · cycles)`.
pub fn sinusoid_amplitude(series: &[f64], period_samples: f64) -> f64 {
    if series.is_empty() {
        return 0.0;
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let omega = 2.0 * PI / period_samples;

    let (c, s) = series
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(c, s), (i, &x)| {
            let phase = omega * i as f64;
            let v = x - mean;
            (c + v * phase.cos(), s + v * phase.sin())
        });

    2.0 * (c * c + s * s).sqrt() / n
}

/// Output/input amplitude ratio of one periodic component over the
/// interior `[edge, len - edge)`
///
/// # Arguments
/// * `input` - Unfiltered series
/// * `output` - Filtered series, index-aligned with `input`
/// * `period_samples` - Period of the component in samples
/// * `edge` - Samples excluded at each end
pub fn amplitude_ratio(
    input: &[f64],
    output: &[f64],
    period_samples: f64,
    edge: usize,
) -> Result<f64, FilterError> {
    if input.len() != output.len() {
        return Err(FilterError::DimensionMismatch {
            what: "filtered series",
            expected: input.len(),
            actual: output.len(),
        });
    }
    if 2 * edge >= input.len() {
        return Err(FilterError::invalid(
            "edge",
            edge as f64,
            "leaves no interior samples",
        ));
    }
    if !(period_samples.is_finite() && period_samples > 0.0) {
        return Err(FilterError::invalid(
            "period_samples",
            period_samples,
            "must be positive",
        ));
    }

    let interior = edge..input.len() - edge;
    let before = sinusoid_amplitude(&input[interior.clone()], period_samples);
    let after = sinusoid_amplitude(&output[interior], period_samples);

    if before == 0.0 {
        return Err(FilterError::degenerate(format!(
            "input has no energy at period {}",
            period_samples
        )));
    }

    Ok(after / before)
}
