//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod filter_bindings;

/// Python module definition
#[pymodule]
fn mooring_filter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(filter_bindings::py_low_pass_weights, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::py_spectral_window, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::py_spectral_filtering, m)?)?;
    m.add_function(wrap_pyfunction!(filter_bindings::py_lanczos35, m)?)?;
    m.add_class::<filter_bindings::PyLanczosFilter>()?;

    Ok(())
}
