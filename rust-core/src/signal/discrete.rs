//! Discrete-time signal on a contiguous integer support
//!
//! A signal is stored as its first index plus a dense amplitude vector, so the
//! support `n = first..=first + len - 1` is contiguous by construction.

use crate::error::{DspError, DspResult};
use std::ops::RangeInclusive;

/// Immutable discrete signal `x[n]` over a contiguous integer support
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteSignal {
    /// Index of the first sample
    first: i64,

    /// Amplitudes x[first], x[first + 1], ... (never empty)
    values: Vec<f64>,
}

#[allow(clippy::len_without_is_empty)]
impl DiscreteSignal {
    /// Create a signal whose first sample sits at index `first`
    ///
    /// # Errors
    /// `EmptySignal` if `values` is empty, `IndexOverflow` if the last index
    /// would exceed `i64::MAX`
    pub fn new(first: i64, values: Vec<f64>) -> DspResult<Self> {
        if values.is_empty() {
            return Err(DspError::EmptySignal);
        }
        last_index_of(first, values.len())?;
        Ok(Self { first, values })
    }

    /// Build from a support already known to be non-empty and in range
    pub(crate) fn from_dense(first: i64, values: Vec<f64>) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(last_index_of(first, values.len()).is_ok());
        Self { first, values }
    }

    /// Single sample of value 0 at index 0, used when no support can be derived
    pub fn degenerate() -> Self {
        Self {
            first: 0,
            values: vec![0.0],
        }
    }

    /// Build a signal from raw index/amplitude arrays
    ///
    /// # Arguments
    /// * `n` - Support indices, must be strictly ascending with unit step
    /// * `x` - Amplitudes, same length as `n`
    pub fn from_parts(n: &[i64], x: &[f64]) -> DspResult<Self> {
        if n.len() != x.len() {
            return Err(DspError::LengthMismatch {
                expected: n.len(),
                actual: x.len(),
            });
        }
        let first = *n.first().ok_or(DspError::EmptySignal)?;
        last_index_of(first, n.len())?;

        for (position, &found) in n.iter().enumerate() {
            let expected = first + position as i64;
            if found != expected {
                return Err(DspError::NonContiguousSupport {
                    position,
                    expected,
                    found,
                });
            }
        }

        Ok(Self {
            first,
            values: x.to_vec(),
        })
    }

    /// Index of the first sample
    pub fn first_index(&self) -> i64 {
        self.first
    }

    /// Index of the last sample
    pub fn last_index(&self) -> i64 {
        self.first + (self.values.len() - 1) as i64
    }

    /// Support as an inclusive index range
    pub fn support(&self) -> RangeInclusive<i64> {
        self.first..=self.last_index()
    }

    /// Support indices n[i]
    pub fn indices(&self) -> Vec<i64> {
        self.support().collect()
    }

    /// Amplitudes x[i]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of samples (always >= 1)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Amplitude at index `n`, zero outside the support
    pub fn value_at(&self, n: i64) -> f64 {
        if !self.support().contains(&n) {
            return 0.0;
        }
        self.values[(n - self.first) as usize]
    }

    /// Iterate over (n, x[n]) pairs
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.support().zip(self.values.iter().copied())
    }

    /// Sum of amplitudes (the DTFT at zero frequency)
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Energy Σ|x[n]|²
    pub fn energy(&self) -> f64 {
        self.values.iter().map(|&v| v * v).sum()
    }
}

/// Last index of a support of `len >= 1` samples starting at `first`
fn last_index_of(first: i64, len: usize) -> DspResult<i64> {
    i64::try_from(len - 1)
        .ok()
        .and_then(|span| first.checked_add(span))
        .ok_or_else(|| {
            DspError::IndexOverflow(format!("{len} samples starting at {first} pass i64::MAX"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(DiscreteSignal::new(3, vec![]), Err(DspError::EmptySignal));
    }

    #[test]
    fn test_support_bookkeeping() {
        let signal = DiscreteSignal::new(-2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(signal.first_index(), -2);
        assert_eq!(signal.last_index(), 1);
        assert_eq!(signal.indices(), vec![-2, -1, 0, 1]);
        assert_eq!(signal.len(), 4);

        assert_eq!(signal.value_at(-2), 1.0);
        assert_eq!(signal.value_at(1), 4.0);
        assert_eq!(signal.value_at(2), 0.0);
        assert_eq!(signal.value_at(-3), 0.0);
    }

    #[test]
    fn test_from_parts_validation() {
        let ok = DiscreteSignal::from_parts(&[3, 4, 5], &[1.0, 0.0, -1.0]).unwrap();
        assert_eq!(ok.first_index(), 3);

        assert_eq!(
            DiscreteSignal::from_parts(&[0, 1], &[1.0]),
            Err(DspError::LengthMismatch { expected: 2, actual: 1 })
        );
        assert_eq!(DiscreteSignal::from_parts(&[], &[]), Err(DspError::EmptySignal));
        assert_eq!(
            DiscreteSignal::from_parts(&[0, 1, 3], &[1.0, 1.0, 1.0]),
            Err(DspError::NonContiguousSupport { position: 2, expected: 2, found: 3 })
        );
        // Duplicates and descending order are gaps too
        assert!(DiscreteSignal::from_parts(&[0, 0], &[1.0, 1.0]).is_err());
        assert!(DiscreteSignal::from_parts(&[1, 0], &[1.0, 1.0]).is_err());
    }

    #[test]
    fn test_sum_and_energy() {
        let signal = DiscreteSignal::new(0, vec![1.0, -2.0, 3.0]).unwrap();
        assert!((signal.sum() - 2.0).abs() < 1e-12);
        assert!((signal.energy() - 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_support_at_index_limits() {
        let top = DiscreteSignal::new(i64::MAX, vec![1.0]).unwrap();
        assert_eq!(top.last_index(), i64::MAX);
        assert_eq!(top.indices(), vec![i64::MAX]);
        assert_eq!(top.value_at(i64::MAX), 1.0);

        let bottom = DiscreteSignal::new(i64::MIN, vec![1.0, 2.0]).unwrap();
        assert_eq!(bottom.last_index(), i64::MIN + 1);

        let edge = DiscreteSignal::from_parts(&[i64::MAX - 1, i64::MAX], &[1.0, 2.0]).unwrap();
        assert_eq!(edge.last_index(), i64::MAX);
    }

    #[test]
    fn test_support_past_i64_max_is_rejected() {
        assert!(matches!(
            DiscreteSignal::new(i64::MAX, vec![1.0, 2.0]),
            Err(DspError::IndexOverflow(_))
        ));
        assert!(matches!(
            DiscreteSignal::new(i64::MAX - 1, vec![0.0; 3]),
            Err(DspError::IndexOverflow(_))
        ));
    }

    #[test]
    fn test_degenerate() {
        let signal = DiscreteSignal::degenerate();
        assert_eq!(signal.indices(), vec![0]);
        assert_eq!(signal.values(), &[0.0]);
    }
}
