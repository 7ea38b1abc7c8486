//! Python bindings for DTFT evaluation

#![allow(non_snake_case)]

use pyo3::prelude::*;
use num_complex::Complex64;
use numpy::PyArray1;
use crate::spectrum::{self, DtftConfig, DtftEvaluator, Spectrum};
use super::signal_bindings::{coerce_array, signal_from_arrays};

/// `(s, X)` arrays handed back to Python
pub type SpectrumArrays<'py> = (&'py PyArray1<f64>, &'py PyArray1<Complex64>);

fn spectrum_to_arrays<'py>(py: Python<'py>, spectrum: Spectrum) -> SpectrumArrays<'py> {
    let (frequencies, values) = spectrum.into_parts();
    (PyArray1::from_vec(py, frequencies), PyArray1::from_vec(py, values))
}

fn grid_to_vec(s: Option<&PyAny>) -> PyResult<Option<Vec<f64>>> {
    s.map(|grid| Ok(coerce_array::<f64>(grid, "float64")?.as_array().to_vec()))
        .transpose()
}

/// X(e^{j2πs}) = Σ x[n]·w[n]·e^{-j2πsn}
///
/// Args:
///     n, x: Support and amplitudes of the signal
///     s: Normalized frequencies (any real array-like); None uses 2048 points
///        over [-0.5, 0.5)
///     N_window: Odd rectangular window width; None disables windowing
///
/// Returns:
///     Tuple (s, X) with complex X
#[pyfunction]
#[pyo3(signature = (n, x, s=None, N_window=None))]
pub fn tftd_numeric<'py>(
    py: Python<'py>,
    n: &'py PyAny,
    x: &'py PyAny,
    s: Option<&'py PyAny>,
    N_window: Option<i64>,
) -> PyResult<SpectrumArrays<'py>> {
    let signal = signal_from_arrays(n, x)?;
    let grid = grid_to_vec(s)?;
    let spectrum = spectrum::tftd_numeric(&signal, grid.as_deref(), N_window)?;
    Ok(spectrum_to_arrays(py, spectrum))
}

/// Unwrap a phase curve (numpy.unwrap semantics)
#[pyfunction]
pub fn unwrap_phase<'py>(py: Python<'py>, phase: &'py PyAny) -> PyResult<&'py PyArray1<f64>> {
    let phase = coerce_array::<f64>(phase, "float64")?.as_array().to_vec();
    Ok(PyArray1::from_vec(py, spectrum::unwrap_phase(&phase)))
}

/// DTFT evaluator exposed to Python
#[pyclass(name = "DtftEvaluator")]
pub struct PyDtftEvaluator {
    evaluator: DtftEvaluator,
}

#[pymethods]
impl PyDtftEvaluator {
    /// Create a new evaluator
    ///
    /// Args:
    ///     grid_len: Points in the default grid over [-0.5, 0.5)
    ///     chunk_len: Frequencies per parallel work item
    ///     min_parallel_work: Minimum len(s) * len(n) before using threads
    #[new]
    #[pyo3(signature = (grid_len=2048, chunk_len=256, min_parallel_work=65536))]
    fn new(grid_len: usize, chunk_len: usize, min_parallel_work: usize) -> Self {
        let config = DtftConfig {
            grid_len,
            chunk_len,
            min_parallel_work,
        };

        Self {
            evaluator: DtftEvaluator::new(config),
        }
    }

    /// Evaluate the DTFT of (n, x)
    ///
    /// Returns:
    ///     Tuple (s, X)
    #[pyo3(signature = (n, x, s=None, N_window=None))]
    fn evaluate<'py>(
        &self,
        py: Python<'py>,
        n: &'py PyAny,
        x: &'py PyAny,
        s: Option<&'py PyAny>,
        N_window: Option<i64>,
    ) -> PyResult<SpectrumArrays<'py>> {
        let signal = signal_from_arrays(n, x)?;
        let grid = grid_to_vec(s)?;
        let spectrum = py.allow_threads(|| {
            self.evaluator.evaluate(&signal, grid.as_deref(), N_window)
        })?;
        Ok(spectrum_to_arrays(py, spectrum))
    }

    /// Default frequency grid
    fn default_grid<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        PyArray1::from_vec(py, self.evaluator.default_grid())
    }

    /// Get default grid length
    fn get_grid_len(&self) -> usize {
        self.evaluator.config().grid_len
    }
}
