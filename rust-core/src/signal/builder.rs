//! Dense signal construction from sparse (index, value) samples

use super::discrete::DiscreteSignal;
use std::collections::BTreeMap;

/// Build a contiguous discrete signal from sparse samples
///
/// Pairs may be unsorted, have gaps, or repeat an index. Pairs are sorted by
/// index (stable) and written into an ordered map in that order, so for equal
/// indices the pair encountered last wins. Missing indices are filled with 0.
///
/// # Arguments
/// * `pairs` - (n, x[n]) samples
///
/// # Returns
/// Signal over `[min(n), max(n)]`, or the degenerate signal for empty input
pub fn signal_from_pairs<I>(pairs: I) -> DiscreteSignal
where
    I: IntoIterator<Item = (i64, f64)>,
{
    let mut pairs: Vec<(i64, f64)> = pairs.into_iter().collect();
    if pairs.is_empty() {
        return DiscreteSignal::degenerate();
    }

    pairs.sort_by_key(|&(n, _)| n);

    let mut samples = BTreeMap::new();
    for (n, value) in pairs {
        samples.insert(n, value);
    }

    // Map is non-empty and ordered, so first/last are the support bounds
    let (n_min, n_max) = match (samples.keys().next(), samples.keys().next_back()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => return DiscreteSignal::degenerate(),
    };

    let values: Vec<f64> = (n_min..=n_max)
        .map(|n| samples.get(&n).copied().unwrap_or(0.0))
        .collect();

    log::trace!(
        "signal_from_pairs: {} distinct samples over [{}, {}]",
        samples.len(),
        n_min,
        n_max
    );

    // Bounds are sample indices, so the support is representable
    DiscreteSignal::from_dense(n_min, values)
}
