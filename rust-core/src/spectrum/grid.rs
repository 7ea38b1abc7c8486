//! Normalized frequency grids

/// Number of points in the default frequency grid
pub const DEFAULT_GRID_LEN: usize = 2048;

/// Evenly spaced points from `start` to `stop`
///
/// Matches numpy's `linspace`: with `endpoint` the last point is `stop` and
/// the step is `(stop - start) / (len - 1)`; without it the step is
/// `(stop - start) / len` and `stop` is excluded.
pub fn uniform_grid(start: f64, stop: f64, len: usize, endpoint: bool) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let divisions = if endpoint { len - 1 } else { len };
            let step = (stop - start) / divisions as f64;
            let mut grid: Vec<f64> = (0..len).map(|k| start + k as f64 * step).collect();
            if endpoint {
                grid[len - 1] = stop;
            }
            grid
        }
    }
}

/// `len` points covering `[-0.5, 0.5)` with the right endpoint excluded
pub fn normalized_frequency_grid(len: usize) -> Vec<f64> {
    uniform_grid(-0.5, 0.5, len, false)
}

/// The 2048-point grid over `[-0.5, 0.5)`
pub fn default_frequency_grid() -> Vec<f64> {
    normalized_frequency_grid(DEFAULT_GRID_LEN)
}
