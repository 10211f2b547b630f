//! Overtone (multiple) and undertone (subdivision) series.

use std::collections::BTreeSet;

use crate::primitives::ExactRatio;

/// `[base·1, base·2, …, base·count]`.
///
/// Empty for zero count.
pub fn multiples(base: &ExactRatio, count: usize) -> Vec<ExactRatio> {
    (1..=count as u64)
        .map(|factor| base * &ExactRatio::from(factor))
        .collect()
}

/// Fundamental and `count` overtones above it: `count + 1` values of
/// arithmetic series.
///
/// # Example
///
/// ```
/// # use toneplot::{overtones::overtones, primitives::ExactRatio};
/// let fifth = ExactRatio::new(3, 2);
/// assert_eq!(
///     overtones(&fifth, 2),
///     vec![ExactRatio::new(3, 2), ExactRatio::new(3, 1), ExactRatio::new(9, 2)]
/// );
/// ```
pub fn overtones(fundamental: &ExactRatio, count: usize) -> Vec<ExactRatio> {
    multiples(fundamental, count + 1)
}

/// Union of [overtones] of every fundamental.
pub fn overtones_of_many(
    count: usize,
    fundamentals: &[ExactRatio],
) -> BTreeSet<ExactRatio> {
    fundamentals
        .iter()
        .flat_map(|fundamental| overtones(fundamental, count))
        .collect()
}

/// `[harmonic/1, harmonic/2, …, harmonic/subdivisions]`.
///
/// Empty for zero subdivisions.
pub fn undertones(harmonic: &ExactRatio, subdivisions: u64) -> Vec<ExactRatio> {
    (1..=subdivisions)
        .map(|divisor| harmonic / &ExactRatio::from(divisor))
        .collect()
}
