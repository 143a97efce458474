//! Python bindings for Lanczos filter operations

use crate::error::FilterError;
use crate::filters::{
    apply_lanczos_filter, low_pass_weights, spectral_filtering, spectral_window, LanczosConfig,
    LanczosFilter,
};
use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn contiguous<'a>(array: &'a PyReadonlyArray1<'_, f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Calculate weights for a low pass Lanczos filter
///
/// Args:
///     window: Requested double-sided window length
///     cutoff: Cutoff frequency in cycles per sample
///
/// Returns:
///     Filter weights as numpy array
#[pyfunction]
#[pyo3(name = "low_pass_weights")]
pub fn py_low_pass_weights(
    py: Python<'_>,
    window: usize,
    cutoff: f64,
) -> PyResult<Bound<'_, PyArray1<f64>>> {
    let weights = low_pass_weights(window, cutoff)?;
    Ok(weights.into_vec().into_pyarray(py))
}

/// Spectral window for a series of length n
///
/// Args:
///     half_weights: Center weight followed by one side of the filter
///     n: Length of the series to be filtered
///
/// Returns:
///     (window, Ff) gains and normalized frequencies as numpy arrays
#[pyfunction]
#[pyo3(name = "spectral_window")]
pub fn py_spectral_window<'py>(
    py: Python<'py>,
    half_weights: PyReadonlyArray1<'py, f64>,
    n: usize,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>)> {
    let window = spectral_window(contiguous(&half_weights)?, n)?;
    let (gains, frequencies) = window.into_parts();
    Ok((gains.into_pyarray(py), frequencies.into_pyarray(py)))
}

/// Apply a frequency window to a series
///
/// Args:
///     x: Input series as numpy array
///     window: Gains, one per non-negative frequency bin
///
/// Returns:
///     Filtered series as numpy array
#[pyfunction]
#[pyo3(name = "spectral_filtering")]
pub fn py_spectral_filtering<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    window: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let filtered = spectral_filtering(contiguous(&x)?, contiguous(&window)?)?;
    Ok(filtered.into_pyarray(py))
}

/// 35 hour (by default) low pass of hourly data
///
/// The zero-frequency gain is 1, so the series mean is kept. Older
/// `lanczos35` implementations left that bin at 0 and returned the
/// low-passed anomaly instead; subtracting `data.mean()` from this output
/// gives the same result.
///
/// Args:
///     data: Input series as numpy array
///     dt: Timestep in days
///     cf: Cutoff period in hours (default: 35.0)
///
/// Returns:
///     Filtered series as numpy array
#[pyfunction]
#[pyo3(name = "lanczos35", signature = (data, dt, cf=35.0))]
pub fn py_lanczos35<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<'py, f64>,
    dt: f64,
    cf: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let filtered = apply_lanczos_filter(contiguous(&data)?, dt, cf)?;
    Ok(filtered.into_pyarray(py))
}

/// Lanczos filter exposed to Python
#[pyclass(name = "LanczosFilter")]
pub struct PyLanczosFilter {
    filter: LanczosFilter,
}

#[pymethods]
impl PyLanczosFilter {
    /// Create a new Lanczos filter
    ///
    /// Args:
    ///     cutoff_period_hours: Cutoff period in hours
    ///     window_length: Requested double-sided window length
    #[new]
    #[pyo3(signature = (cutoff_period_hours=35.0, window_length=242))]
    fn new(cutoff_period_hours: f64, window_length: usize) -> PyResult<Self> {
        let filter = LanczosFilter::new(LanczosConfig {
            cutoff_period_hours,
            window_length,
            ..LanczosConfig::default()
        })?;

        Ok(Self { filter })
    }

    /// Filter a series
    ///
    /// Args:
    ///     data: Input series as numpy array
    ///     dt: Timestep in days
    ///
    /// Returns:
    ///     Filtered series as numpy array
    fn apply<'py>(
        &self,
        py: Python<'py>,
        data: PyReadonlyArray1<'py, f64>,
        dt: f64,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        let filtered = self.filter.apply(contiguous(&data)?, dt)?;
        Ok(filtered.into_pyarray(py))
    }

    /// Get filter weights
    fn weights<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.filter.weights().as_slice().to_vec().into_pyarray(py)
    }

    /// Get cutoff period in hours
    #[getter]
    fn cutoff_period_hours(&self) -> f64 {
        self.filter.config().cutoff_period_hours
    }

    /// Get requested window length
    #[getter]
    fn window_length(&self) -> usize {
        self.filter.config().window_length
    }
}
