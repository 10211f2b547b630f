//! Ratios reachable under a dissonance budget.
//!
//! Dissonance level `d` holds every fraction `j/(d-j)` for `j` in
//! `1..d`, so its numerator and denominator sum up to `d` before
//! reduction. The same reduced ratio appears on several levels (1/1 is on
//! every even one), the enumeration keeps each only once.

use std::collections::{BTreeMap, BTreeSet};

use fraction::BigUint;

use crate::primitives::ExactRatio;

/// Per-level buckets up to `max_dissonance` (inclusive).
///
/// Inside a bucket duplicates are suppressed and ratios are sorted
/// ascending. Levels start at 2, so `max_dissonance < 2` gives empty map.
pub fn levels(max_dissonance: u64) -> BTreeMap<u64, Vec<ExactRatio>> {
    let mut levels = BTreeMap::new();
    for dissonance in 2..=max_dissonance {
        let mut bucket: Vec<ExactRatio> = Vec::new();
        for j in 1..dissonance {
            let ratio = ExactRatio::new(j, dissonance - j);
            if !bucket.contains(&ratio) {
                bucket.push(ratio);
            }
        }
        bucket.sort();
        log::trace!("dissonance level {}: {} ratios", dissonance, bucket.len());
        levels.insert(dissonance, bucket);
    }
    levels
}

/// Unique ratios over all levels up to `max_dissonance`, ascending.
///
/// # Example
///
/// ```
/// # use toneplot::{dissonance::enumerate, primitives::ExactRatio};
/// assert_eq!(
///     enumerate(3),
///     vec![ExactRatio::new(1, 2), ExactRatio::new(1, 1), ExactRatio::new(2, 1)]
/// );
/// assert!(enumerate(1).is_empty());
/// ```
pub fn enumerate(max_dissonance: u64) -> Vec<ExactRatio> {
    let unique: BTreeSet<ExactRatio> =
        levels(max_dissonance).into_values().flatten().collect();
    unique.into_iter().collect()
}

/// One bar of the dissonance chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DissonanceEntry {
    pub ratio: ExactRatio,
    /// see [ExactRatio::dissonance_score]
    pub score: BigUint,
    /// the smaller, the more consonant
    pub denominator: BigUint,
}
impl DissonanceEntry {
    /// Shading weight, see [ExactRatio::consonance].
    pub fn consonance(&self) -> f64 {
        self.ratio.consonance()
    }
}
impl From<ExactRatio> for DissonanceEntry {
    fn from(ratio: ExactRatio) -> Self {
        Self {
            score: ratio.dissonance_score(),
            denominator: ratio.denom().clone(),
            ratio,
        }
    }
}

/// [enumerate], scored.
pub fn entries(max_dissonance: u64) -> Vec<DissonanceEntry> {
    enumerate(max_dissonance)
        .into_iter()
        .map(DissonanceEntry::from)
        .collect()
}

/// Split ascending ratios at unison.
///
/// Both halves include 1/1. None, if there is no unison.
pub fn split_at_unison(
    ratios: &[ExactRatio],
) -> Option<(&[ExactRatio], &[ExactRatio])> {
    let unison = ratios.binary_search(&ExactRatio::one()).ok()?;
    Some((&ratios[..=unison], &ratios[unison..]))
}
