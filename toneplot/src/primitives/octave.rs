//! Octave equivalence.
//!
//! Ratio is folded into band `[1, base)` by repeated multiplication or
//! division by the octave base. Base 2 is the usual octave, 3 is the
//! tritave.

use std::collections::BTreeSet;

use super::ExactRatio;
use crate::error::{DomainError, DomainResult};

pub const OCTAVE: u64 = 2;
pub const TRITAVE: u64 = 3;

fn check(ratio: &ExactRatio, octave_base: u64) -> DomainResult<()> {
    if octave_base < 2 {
        return Err(DomainError::InvalidOctaveBase(octave_base));
    }
    if !ratio.is_positive() {
        return Err(DomainError::NonPositiveRatio(ratio.clone()));
    }
    Ok(())
}

/// Fold ratio into `[1, octave_base)`.
///
/// # Example
///
/// ```
/// # use toneplot::primitives::{ExactRatio, octave::fold};
/// assert_eq!(fold(&ExactRatio::new(3, 1), 2).unwrap(), ExactRatio::new(3, 2));
/// assert_eq!(fold(&ExactRatio::new(1, 3), 2).unwrap(), ExactRatio::new(4, 3));
/// assert_eq!(fold(&ExactRatio::new(5, 1), 3).unwrap(), ExactRatio::new(5, 3));
/// ```
pub fn fold(ratio: &ExactRatio, octave_base: u64) -> DomainResult<ExactRatio> {
    check(ratio, octave_base)?;
    let base = ExactRatio::from(octave_base);
    let one = ExactRatio::one();
    let mut folded = ratio.clone();
    while folded >= base {
        folded = &folded / &base;
    }
    while folded < one {
        folded = &folded * &base;
    }
    Ok(folded)
}

/// Folded ratio and its folded inversion.
///
/// Inversion is taken from the *folded* ratio, so 3/1 gives
/// `(3/2, 4/3)`.
pub fn octave_pair(
    ratio: &ExactRatio,
    octave_base: u64,
) -> DomainResult<(ExactRatio, ExactRatio)> {
    let folded = fold(ratio, octave_base)?;
    let inverted = fold(&folded.recip()?, octave_base)?;
    Ok((folded, inverted))
}

/// Union of [octave_pair] over several octave bases.
///
/// Empty `octave_bases` gives an empty set.
pub fn extended_octave_pair(
    ratio: &ExactRatio,
    octave_bases: &[u64],
) -> DomainResult<BTreeSet<ExactRatio>> {
    let mut pairs = BTreeSet::new();
    for base in octave_bases {
        let (folded, inverted) = octave_pair(ratio, *base)?;
        pairs.insert(folded);
        pairs.insert(inverted);
    }
    Ok(pairs)
}
