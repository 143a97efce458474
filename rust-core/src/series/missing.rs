//! Missing-value sentinels and gap resolution
//!
//! EPIC archives and the spreadsheets feeding them mark missing samples with
//! `1e35`. The filter never interprets that value, so series must be checked
//! (or repaired) before they reach it.

use crate::error::FilterError;

/// EPIC missing-data marker
pub const EPIC_FILL_VALUE: f64 = 1e35;

/// Relative tolerance when matching the fill value, wide enough for values
/// that went through `f32`.
const FILL_TOLERANCE: f64 = 1e-6;

/// What to do with missing samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Fail on the first missing sample
    #[default]
    Reject,

    /// Linear interpolation across interior gaps; leading and trailing
    /// gaps take the nearest valid sample
    Interpolate,
}

/// True for NaN, ±inf, and anything matching `±1e35`
#[inline]
pub fn is_missing(value: f64) -> bool {
    !value.is_finite() || (value.abs() - EPIC_FILL_VALUE).abs() <= EPIC_FILL_VALUE * FILL_TOLERANCE
}

/// Ensure a series is non-empty and fully numeric
pub fn check_complete(series: &[f64]) -> Result<(), FilterError> {
    if series.is_empty() {
        return Err(FilterError::degenerate("series is empty"));
    }
    if let Some(index) = series.iter().position(|&v| is_missing(v)) {
        return Err(FilterError::degenerate(format!(
            "missing sample ({}) at index {}",
            series[index], index
        )));
    }
    Ok(())
}

/// Return a gap-free copy of `series` according to `policy`
pub fn resolve_missing(series: &[f64], policy: GapPolicy) -> Result<Vec<f64>, FilterError> {
    match policy {
        GapPolicy::Reject => {
            check_complete(series)?;
            Ok(series.to_vec())
        }
        GapPolicy::Interpolate => interpolate_gaps(series),
    }
}

fn interpolate_gaps(series: &[f64]) -> Result<Vec<f64>, FilterError> {
    let valid: Vec<usize> = series
        .iter()
        .enumerate()
        .filter(|(_, &v)| !is_missing(v))
        .map(|(i, _)| i)
        .collect();

    let (first, last) = match (valid.first(), valid.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            return Err(FilterError::degenerate(format!(
                "no valid samples among {}",
                series.len()
            )))
        }
    };

    let mut out = series.to_vec();
    out[..first].fill(series[first]);
    out[last + 1..].fill(series[last]);

    for pair in valid.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b - a < 2 {
            continue;
        }
        let (ya, yb) = (series[a], series[b]);
        let span = (b - a) as f64;
        for (offset, slot) in out[a + 1..b].iter_mut().enumerate() {
            let t = (offset + 1) as f64 / span;
            *slot = ya + (yb - ya) * t;
        }
    }

    let filled = series.len() - valid.len();
    if filled > 0 {
        log::debug!("filled {} of {} missing samples", filled, series.len());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing() {
        assert!(is_missing(1e35));
        assert!(is_missing(-1e35));
        assert!(is_missing(1e35_f32 as f64));
        assert!(is_missing(f64::NAN));
        assert!(is_missing(f64::INFINITY));
        assert!(!is_missing(0.0));
        assert!(!is_missing(1e30));
        assert!(!is_missing(-9999.0));
    }

    #[test]
    fn test_check_complete() {
        assert!(check_complete(&[1.0, 2.0, 3.0]).is_ok());

        match check_complete(&[1.0, 1e35, 3.0]) {
            Err(FilterError::NumericDegenerate { reason }) => assert!(reason.contains("index 1")),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            check_complete(&[]),
            Err(FilterError::NumericDegenerate { .. })
        ));
    }

    #[test]
    fn test_interpolate_interior_gap() {
        let series = [0.0, 1e35, 1e35, 3.0, 4.0];
        let out = resolve_missing(&series, GapPolicy::Interpolate).unwrap();
        let expected = [0.0, 1.0, 2.0, 3.0, 4.0];
        for (got, want) in out.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_interpolate_edges_hold_nearest() {
        let series = [f64::NAN, 2.0, 1e35, 6.0, 1e35];
        let out = resolve_missing(&series, GapPolicy::Interpolate).unwrap();
        assert_eq!(out, vec![2.0, 2.0, 4.0, 6.0, 6.0]);
    }

    #[test]
    fn test_all_missing_is_degenerate() {
        assert!(matches!(
            resolve_missing(&[1e35, 1e35], GapPolicy::Interpolate),
            Err(FilterError::NumericDegenerate { .. })
        ));
        assert!(matches!(
            resolve_missing(&[], GapPolicy::Interpolate),
            Err(FilterError::NumericDegenerate { .. })
        ));
    }

    #[test]
    fn test_reject_policy() {
        assert!(resolve_missing(&[1.0, 1e35], GapPolicy::Reject).is_err());
        assert_eq!(resolve_missing(&[1.0, 2.0], GapPolicy::Reject).unwrap(), vec![1.0, 2.0]);
    }
}
