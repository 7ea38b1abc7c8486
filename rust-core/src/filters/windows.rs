//! Centered rectangular window and its application to discrete signals

use crate::error::{DspError, DspResult};
use crate::signal::{align, DiscreteSignal};

/// Rectangular window of odd width N centered on n = 0
///
/// Support is `-half..=half` with `half = N / 2`, weight 1 everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Window {
    signal: DiscreteSignal,
}

impl Window {
    /// Window width N (number of samples)
    pub fn width(&self) -> usize {
        self.signal.len()
    }

    /// Half width, N / 2
    pub fn half(&self) -> i64 {
        self.signal.last_index()
    }

    /// Window weights w[n]
    pub fn weights(&self) -> &[f64] {
        self.signal.values()
    }

    pub fn as_signal(&self) -> &DiscreteSignal {
        &self.signal
    }

    pub fn into_signal(self) -> DiscreteSignal {
        self.signal
    }
}

/// Generate a rectangular window of width `width` centered on zero
///
/// # Errors
/// `InvalidArgument` if `width` is even (including zero and negative even
/// values) or negative
pub fn rect_centered(width: i64) -> DspResult<Window> {
    if width % 2 == 0 {
        return Err(DspError::InvalidArgument(format!(
            "window width must be odd to center on zero, got {width}"
        )));
    }
    if width < 1 {
        return Err(DspError::InvalidArgument(format!(
            "window width must be positive, got {width}"
        )));
    }

    let half = width / 2;
    let signal = DiscreteSignal::new(-half, vec![1.0; width as usize])?;

    Ok(Window { signal })
}

/// Multiply a signal by a centered rectangular window and trim zero edges
///
/// # Arguments
/// * `signal` - Input signal
/// * `width` - Window width N (odd); `None` leaves the signal untouched
///
/// # Returns
/// The product restricted to `[first nonzero, last nonzero]`; interior zeros
/// are kept. An all-zero product yields the degenerate signal.
pub fn apply_window(signal: &DiscreteSignal, width: Option<i64>) -> DspResult<DiscreteSignal> {
    let width = match width {
        Some(width) => width,
        None => return Ok(signal.clone()),
    };

    let window = rect_centered(width)?;

    // Disjoint supports multiply to all zeros without building the grid
    let overlaps =
        signal.first_index() <= window.half() && signal.last_index() >= -window.half();
    let product = if overlaps {
        let grid = align(signal, window.as_signal())?;
        Some((grid.start, (&grid.first * &grid.second).to_vec()))
    } else {
        None
    };

    let is_nonzero = |v: &f64| v.abs() > 0.0;
    let trimmed = product.and_then(|(start, product)| {
        let lo = product.iter().position(is_nonzero)?;
        let hi = product.iter().rposition(is_nonzero)?;
        Some((start + lo as i64, product[lo..=hi].to_vec()))
    });

    match trimmed {
        Some((first, values)) => Ok(DiscreteSignal::from_dense(first, values)),
        None => {
            log::debug!(
                "apply_window: width {} leaves no nonzero samples of [{}, {}]",
                width,
                signal.first_index(),
                signal.last_index()
            );
            Ok(DiscreteSignal::degenerate())
        }
    }
}
