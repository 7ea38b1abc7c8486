//! Python bindings for signal construction, windowing and convolution
//!
//! Signals cross the boundary as `(n, x)` numpy array pairs. Inputs may be
//! any array-like whose dtype casts safely to int64 (`n`) or float64 (`x`).

#![allow(non_snake_case)]

use pyo3::prelude::*;
use pyo3::types::IntoPyDict;
use numpy::{Element, PyArray1, PyReadonlyArray1};
use crate::filters::{self, conv_discrete as conv, rect_centered as rect};
use crate::signal::{self, DiscreteSignal};

/// `(n, x)` arrays handed back to Python
pub type SignalArrays<'py> = (&'py PyArray1<i64>, &'py PyArray1<f64>);

/// Convert an array-like to a 1-D array of `dtype` under numpy's "safe" casting
///
/// Integer inputs of any width become int64/float64; lossy casts such as
/// float indices raise `TypeError`.
pub(crate) fn coerce_array<'py, T: Element>(
    values: &'py PyAny,
    dtype: &str,
) -> PyResult<PyReadonlyArray1<'py, T>> {
    let py = values.py();
    let array = py.import("numpy")?.call_method1("asarray", (values,))?;
    let kwargs = [("casting", "safe")].into_py_dict(py);
    array.call_method("astype", (dtype,), Some(kwargs))?.extract()
}

/// Validate array-like `(n, x)` into a signal
pub(crate) fn signal_from_arrays(n: &PyAny, x: &PyAny) -> PyResult<DiscreteSignal> {
    let n = coerce_array::<i64>(n, "int64")?.as_array().to_vec();
    let x = coerce_array::<f64>(x, "float64")?.as_array().to_vec();
    Ok(DiscreteSignal::from_parts(&n, &x)?)
}

pub(crate) fn signal_to_arrays<'py>(py: Python<'py>, signal: &DiscreteSignal) -> SignalArrays<'py> {
    (
        PyArray1::from_vec(py, signal.indices()),
        PyArray1::from_slice(py, signal.values()),
    )
}

/// Build a discrete signal from (n, value) pairs
///
/// Args:
///     pairs: Iterable of (int, float) tuples, unsorted, duplicates allowed
///
/// Returns:
///     Tuple (n, x) with contiguous integer support
#[pyfunction]
pub fn signal_from_pairs<'py>(py: Python<'py>, pairs: Vec<(i64, f64)>) -> SignalArrays<'py> {
    let signal = signal::signal_from_pairs(pairs);
    signal_to_arrays(py, &signal)
}

/// Centered rectangular window of odd width N
///
/// Returns:
///     Tuple (n, w) with n = -N//2 .. N//2 and w = 1
///
/// Raises:
///     ValueError: if N is even
#[pyfunction]
pub fn rect_centered<'py>(py: Python<'py>, N: i64) -> PyResult<SignalArrays<'py>> {
    let window = rect(N)?.into_signal();
    Ok(signal_to_arrays(py, &window))
}

/// Multiply x[n] by a centered rectangular window of width N
///
/// Args:
///     n: Integer support
///     x: Amplitudes
///     N: Odd window width, or None for no windowing
///
/// Returns:
///     Tuple (n_eff, x_eff) with zero edges trimmed
#[pyfunction]
#[pyo3(signature = (n, x, N=None))]
pub fn apply_window<'py>(
    py: Python<'py>,
    n: &'py PyAny,
    x: &'py PyAny,
    N: Option<i64>,
) -> PyResult<SignalArrays<'py>> {
    let signal = signal_from_arrays(n, x)?;
    let windowed = filters::apply_window(&signal, N)?;
    Ok(signal_to_arrays(py, &windowed))
}

/// Full linear convolution of (nx, x) and (nh, h)
///
/// Returns:
///     Tuple (ny, y) with ny[0] = nx[0] + nh[0]
///
/// Raises:
///     ValueError: if the output support does not fit in int64
#[pyfunction]
pub fn conv_discrete<'py>(
    py: Python<'py>,
    nx: &'py PyAny,
    x: &'py PyAny,
    nh: &'py PyAny,
    h: &'py PyAny,
) -> PyResult<SignalArrays<'py>> {
    let x = signal_from_arrays(nx, x)?;
    let h = signal_from_arrays(nh, h)?;
    let y = conv(&x, &h)?;
    Ok(signal_to_arrays(py, &y))
}
