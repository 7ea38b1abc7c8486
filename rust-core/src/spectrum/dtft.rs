//! Numeric DTFT by direct summation over a finite support
//!
//! X(e^{j2πs}) = Σ_n x[n] · e^{-j2πsn}, evaluated at arbitrary (possibly
//! non-uniform) normalized frequencies s. The sum is exact for finite
//! support; no FFT is involved, so any grid length or spacing is allowed.

use super::analysis::Spectrum;
use super::grid::{normalized_frequency_grid, DEFAULT_GRID_LEN};
use crate::error::DspResult;
use crate::filters::windows::apply_window;
use crate::signal::DiscreteSignal;
use num_complex::Complex64;
use rayon::prelude::*;
use std::f64::consts::TAU;

/// DTFT evaluator configuration
#[derive(Debug, Clone)]
pub struct DtftConfig {
    /// Number of points in the default grid over [-0.5, 0.5)
    pub grid_len: usize,

    /// Frequency samples per parallel work item
    pub chunk_len: usize,

    /// Minimum |grid| * |signal| before evaluation is split across threads
    pub min_parallel_work: usize,
}

impl Default for DtftConfig {
    fn default() -> Self {
        Self {
            grid_len: DEFAULT_GRID_LEN,
            chunk_len: 256,
            min_parallel_work: 1 << 16,
        }
    }
}

/// Direct-summation DTFT evaluator
#[derive(Debug, Clone, Default)]
pub struct DtftEvaluator {
    config: DtftConfig,
}

impl DtftEvaluator {
    /// Create new evaluator
    pub fn new(config: DtftConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &DtftConfig {
        &self.config
    }

    /// Default frequency grid for this configuration
    pub fn default_grid(&self) -> Vec<f64> {
        normalized_frequency_grid(self.config.grid_len)
    }

    /// Window the signal (if requested) and evaluate its DTFT
    ///
    /// # Arguments
    /// * `signal` - Input signal
    /// * `frequencies` - Normalized frequencies; `None` uses the default grid
    /// * `window_width` - Odd rectangular window width; `None` disables windowing
    ///
    /// # Errors
    /// `InvalidArgument` if `window_width` is even
    pub fn evaluate(
        &self,
        signal: &DiscreteSignal,
        frequencies: Option<&[f64]>,
        window_width: Option<i64>,
    ) -> DspResult<Spectrum> {
        let windowed = apply_window(signal, window_width)?;

        let frequencies = match frequencies {
            Some(grid) => grid.to_vec(),
            None => self.default_grid(),
        };

        let values = self.sum_over_support(&windowed, &frequencies);
        Spectrum::new(frequencies, values)
    }

    /// X_k = Σ_i x[i] · exp(-j 2π s_k n[i]) for every s_k
    fn sum_over_support(&self, signal: &DiscreteSignal, frequencies: &[f64]) -> Vec<Complex64> {
        let mut values = vec![Complex64::new(0.0, 0.0); frequencies.len()];
        let work = frequencies.len().saturating_mul(signal.len());
        let chunk_len = self.config.chunk_len.max(1);

        if work >= self.config.min_parallel_work && frequencies.len() > chunk_len {
            log::debug!(
                "dtft: {} frequencies x {} samples in chunks of {}",
                frequencies.len(),
                signal.len(),
                chunk_len
            );
            values
                .par_chunks_mut(chunk_len)
                .zip(frequencies.par_chunks(chunk_len))
                .for_each(|(out, freqs)| evaluate_chunk(signal, freqs, out));
        } else {
            evaluate_chunk(signal, frequencies, &mut values);
        }

        values
    }
}

/// Evaluate one block of frequencies into its own output slice
fn evaluate_chunk(signal: &DiscreteSignal, frequencies: &[f64], out: &mut [Complex64]) {
    for (slot, &s) in out.iter_mut().zip(frequencies) {
        *slot = dtft_at(signal, s);
    }
}

/// DTFT of `signal` at a single normalized frequency `s`
pub fn dtft_at(signal: &DiscreteSignal, s: f64) -> Complex64 {
    signal
        .iter()
        .map(|(n, x)| Complex64::from_polar(x, -TAU * (s * n as f64)))
        .sum()
}

/// Numeric DTFT with the default configuration
///
/// # Arguments
/// * `signal` - Input signal
/// * `frequencies` - Normalized frequencies; `None` uses 2048 points over [-0.5, 0.5)
/// * `window_width` - Odd rectangular window width; `None` disables windowing
pub fn tftd_numeric(
    signal: &DiscreteSignal,
    frequencies: Option<&[f64]>,
    window_width: Option<i64>,
) -> DspResult<Spectrum> {
    DtftEvaluator::default().evaluate(signal, frequencies, window_width)
}
