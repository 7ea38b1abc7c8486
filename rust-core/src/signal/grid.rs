//! Alignment of two signals on a common integer grid

use super::discrete::DiscreteSignal;
use crate::error::{DspError, DspResult};
use ndarray::{s, Array1, ArrayView1};

/// Two signals zero-padded onto the same contiguous grid
#[derive(Debug, Clone)]
pub struct AlignedGrid {
    /// First grid index
    pub start: i64,

    /// Amplitudes of the first signal on the grid
    pub first: Array1<f64>,

    /// Amplitudes of the second signal on the grid
    pub second: Array1<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl AlignedGrid {
    /// Number of grid points (always >= 1)
    pub fn len(&self) -> usize {
        self.first.len()
    }

    /// Grid indices
    pub fn indices(&self) -> Vec<i64> {
        (0..self.len()).map(|k| self.start + k as i64).collect()
    }
}

/// Align two signals on the grid `[min(first), max(last)]`
///
/// Each output vector is zero everywhere except over the original support of
/// its signal, where the original amplitudes are copied unchanged.
///
/// # Errors
/// `IndexOverflow` if the grid has more points than fit in a `usize`
pub fn align(a: &DiscreteSignal, b: &DiscreteSignal) -> DspResult<AlignedGrid> {
    let gmin = a.first_index().min(b.first_index());
    let gmax = a.last_index().max(b.last_index());
    let len = grid_len(gmin, gmax).ok_or_else(|| {
        DspError::IndexOverflow(format!("grid [{gmin}, {gmax}] has too many points"))
    })?;

    Ok(AlignedGrid {
        start: gmin,
        first: place_on_grid(a, gmin, len),
        second: place_on_grid(b, gmin, len),
    })
}

/// Number of points in `[gmin, gmax]`, computed without i64 overflow
fn grid_len(gmin: i64, gmax: i64) -> Option<usize> {
    let span = (gmax as i128) - (gmin as i128);
    usize::try_from(span).ok()?.checked_add(1)
}

fn place_on_grid(signal: &DiscreteSignal, gmin: i64, len: usize) -> Array1<f64> {
    let mut grid = Array1::zeros(len);
    let offset = (signal.first_index() as i128 - gmin as i128) as usize;

    grid.slice_mut(s![offset..offset + signal.len()])
        .assign(&ArrayView1::from(signal.values()));

    grid
}
