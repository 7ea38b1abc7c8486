//! Full linear convolution of discrete signals with exact output support
//!
//! Direct summation is the reference method: every output sample is the plain
//! sum of products, so sums that cancel exactly come out as exact zeros. The
//! FFT path (zero-padded to the next power of two) is an approximation for long
//! inputs. Its rounding error scales with the largest sample magnitude, so
//! small outputs next to large ones lose relative precision and exact zeros
//! come back as residuals around 1e-16 times that magnitude.

use crate::error::{DspError, DspResult};
use crate::signal::DiscreteSignal;
use rustfft::{num_complex::Complex, FftPlanner};

/// Convolution algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvolutionMethod {
    /// Direct double summation, O(N*M), exact up to per-term rounding
    #[default]
    Direct,

    /// Zero-padded FFT product, O((N+M) log(N+M)), approximate
    Fft,
}

/// Full linear convolution y = x * h by direct summation
///
/// # Returns
/// Signal of length `len(x) + len(h) - 1` whose first index is exactly
/// `first(x) + first(h)`
///
/// # Errors
/// `IndexOverflow` if the output support does not fit in i64 indices
pub fn conv_discrete(x: &DiscreteSignal, h: &DiscreteSignal) -> DspResult<DiscreteSignal> {
    conv_discrete_with(x, h, ConvolutionMethod::Direct)
}

/// Full linear convolution with an explicit algorithm choice
pub fn conv_discrete_with(
    x: &DiscreteSignal,
    h: &DiscreteSignal,
    method: ConvolutionMethod,
) -> DspResult<DiscreteSignal> {
    let start = x.first_index().checked_add(h.first_index()).ok_or_else(|| {
        DspError::IndexOverflow(format!(
            "output start {} + {} is out of range",
            x.first_index(),
            h.first_index()
        ))
    })?;

    let use_fft = method == ConvolutionMethod::Fft;
    log::trace!(
        "conv_discrete: {} x {} samples via {}",
        x.len(),
        h.len(),
        if use_fft { "fft" } else { "direct" }
    );

    let y = if use_fft {
        fft_convolve(x.values(), h.values())
    } else {
        direct_convolve(x.values(), h.values())
    };

    DiscreteSignal::new(start, y)
}

/// Direct full convolution: y[k] = Σ_i x[i] * h[k - i]
///
/// Returns an empty vector if either input is empty.
pub fn direct_convolve(x: &[f64], h: &[f64]) -> Vec<f64> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }

    let mut y = vec![0.0; x.len() + h.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (j, &hj) in h.iter().enumerate() {
            y[i + j] += xi * hj;
        }
    }

    y
}

/// FFT full convolution
///
/// Approximates [`direct_convolve`]: the absolute error of every output is on
/// the order of machine epsilon times the largest input magnitudes, not times
/// the output sample itself.
///
/// Returns an empty vector if either input is empty.
pub fn fft_convolve(x: &[f64], h: &[f64]) -> Vec<f64> {
    if x.is_empty() || h.is_empty() {
        return Vec::new();
    }

    let out_len = x.len() + h.len() - 1;
    let fft_size = out_len.next_power_of_two();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(fft_size);
    let ifft = planner.plan_fft_inverse(fft_size);

    let zero_padded = |samples: &[f64]| {
        let mut buffer = vec![Complex::new(0.0, 0.0); fft_size];
        for (slot, &s) in buffer.iter_mut().zip(samples) {
            *slot = Complex::new(s, 0.0);
        }
        buffer
    };

    let mut x_fft = zero_padded(x);
    let mut h_fft = zero_padded(h);
    fft.process(&mut x_fft);
    fft.process(&mut h_fft);

    // Multiply in frequency domain (convolution in time domain)
    for (xk, hk) in x_fft.iter_mut().zip(&h_fft) {
        *xk *= hk;
    }

    ifft.process(&mut x_fft);

    // IFFT normalization
    let scale = 1.0 / fft_size as f64;
    x_fft[..out_len].iter().map(|c| c.re * scale).collect()
}
