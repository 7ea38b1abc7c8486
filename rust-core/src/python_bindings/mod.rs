//! PyO3 bindings for Python integration

use pyo3::prelude::*;
use pyo3::exceptions::PyValueError;
use crate::error::DspError;

mod signal_bindings;
mod spectrum_bindings;

impl From<DspError> for PyErr {
    fn from(err: DspError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn dspmini(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(signal_bindings::signal_from_pairs, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::rect_centered, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::apply_window, m)?)?;
    m.add_function(wrap_pyfunction!(signal_bindings::conv_discrete, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::tftd_numeric, m)?)?;
    m.add_function(wrap_pyfunction!(spectrum_bindings::unwrap_phase, m)?)?;

    m.add_class::<spectrum_bindings::PyDtftEvaluator>()?;

    Ok(())
}
