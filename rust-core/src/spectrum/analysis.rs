//! Complex spectrum and the real-valued curves derived from it
//!
//! Magnitude and unwrapped phase are what a frequency-domain plot draws; they
//! are computed here so renderers only consume plain (s, value) pairs.

use crate::error::{DspError, DspResult};
use num_complex::Complex64;
use std::f64::consts::{PI, TAU};

/// DTFT samples X[k] at normalized frequencies s[k]
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    frequencies: Vec<f64>,
    values: Vec<Complex64>,
}

impl Spectrum {
    /// Pair a frequency grid with its complex values
    ///
    /// # Errors
    /// `LengthMismatch` if the two sequences differ in length
    pub fn new(frequencies: Vec<f64>, values: Vec<Complex64>) -> DspResult<Self> {
        if frequencies.len() != values.len() {
            return Err(DspError::LengthMismatch {
                expected: frequencies.len(),
                actual: values.len(),
            });
        }
        Ok(Self { frequencies, values })
    }

    /// Normalized frequencies s
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    /// Complex DTFT values X
    pub fn values(&self) -> &[Complex64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over (s, X(s)) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, Complex64)> + '_ {
        self.frequencies.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at s = 0, if the grid contains zero frequency
    pub fn value_at_dc(&self) -> Option<Complex64> {
        self.iter().find(|&(s, _)| s == 0.0).map(|(_, x)| x)
    }

    /// Re X(s)
    pub fn real(&self) -> Vec<f64> {
        self.values.iter().map(|x| x.re).collect()
    }

    /// Im X(s)
    pub fn imag(&self) -> Vec<f64> {
        self.values.iter().map(|x| x.im).collect()
    }

    /// |X(s)|
    pub fn magnitude(&self) -> Vec<f64> {
        self.values.iter().map(|x| x.norm()).collect()
    }

    /// Principal phase ∠X(s) in (-π, π]
    pub fn phase(&self) -> Vec<f64> {
        self.values.iter().map(|x| x.arg()).collect()
    }

    /// Phase with 2π jumps removed along the grid
    pub fn unwrapped_phase(&self) -> Vec<f64> {
        unwrap_phase(&self.phase())
    }

    /// Split into (frequencies, values)
    pub fn into_parts(self) -> (Vec<f64>, Vec<Complex64>) {
        (self.frequencies, self.values)
    }
}

/// Unwrap a phase sequence
///
/// Whenever consecutive samples differ by more than π, the difference is
/// replaced by its 2π complement in (-π, π]; a difference of exactly -π
/// becomes +π when the original step was positive. Corrections accumulate.
pub fn unwrap_phase(phase: &[f64]) -> Vec<f64> {
    let mut unwrapped = Vec::with_capacity(phase.len());
    let mut correction = 0.0;

    for (i, &p) in phase.iter().enumerate() {
        if i > 0 {
            let step = p - phase[i - 1];
            if step.abs() >= PI {
                let mut wrapped = (step + PI).rem_euclid(TAU) - PI;
                if wrapped == -PI && step > 0.0 {
                    wrapped = PI;
                }
                correction += wrapped - step;
            }
        }
        unwrapped.push(p + correction);
    }

    unwrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        let err = Spectrum::new(vec![0.0, 0.1], vec![Complex64::new(1.0, 0.0)]);
        assert_eq!(err, Err(DspError::LengthMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_derived_curves() {
        let spectrum = Spectrum::new(
            vec![-0.25, 0.0, 0.25],
            vec![
                Complex64::new(0.0, -2.0),
                Complex64::new(3.0, 0.0),
                Complex64::new(3.0, 4.0),
            ],
        )
        .unwrap();

        assert_eq!(spectrum.real(), vec![0.0, 3.0, 3.0]);
        assert_eq!(spectrum.imag(), vec![-2.0, 0.0, 4.0]);

        let mag = spectrum.magnitude();
        assert!((mag[0] - 2.0).abs() < 1e-12);
        assert!((mag[2] - 5.0).abs() < 1e-12);

        let phase = spectrum.phase();
        assert!((phase[0] + PI / 2.0).abs() < 1e-12);
        assert_eq!(phase[1], 0.0);

        assert_eq!(spectrum.value_at_dc(), Some(Complex64::new(3.0, 0.0)));
    }

    #[test]
    fn test_value_at_dc_missing() {
        let spectrum = Spectrum::new(vec![0.1], vec![Complex64::new(1.0, 0.0)]).unwrap();
        assert_eq!(spectrum.value_at_dc(), None);
    }

    #[test]
    fn test_unwrap_removes_jumps() {
        // Linear phase -0.8·k wrapped into (-π, π]
        let true_phase: Vec<f64> = (0..20).map(|k| -0.8 * k as f64).collect();
        let wrapped: Vec<f64> = true_phase
            .iter()
            .map(|&p| Complex64::from_polar(1.0, p).arg())
            .collect();

        let unwrapped = unwrap_phase(&wrapped);

        for (u, t) in unwrapped.iter().zip(&true_phase) {
            assert!((u - t).abs() < 1e-9, "{} vs {}", u, t);
        }
    }

    #[test]
    fn test_unwrap_leaves_small_steps() {
        let phase = vec![0.0, 0.5, 1.0, 2.0, 3.0];
        assert_eq!(unwrap_phase(&phase), phase);
    }

    #[test]
    fn test_unwrap_empty() {
        assert!(unwrap_phase(&[]).is_empty());
    }
}
