//! LCM and GCD of fractions.
//!
//! Integer LCM is generalized to ratios as
//! `LCM(numerators) / GCD(denominators)`: the smallest ratio every input
//! divides into an integer. With wavelengths as input, that is the point
//! where all of them meet in phase.

use std::collections::BTreeSet;

use fraction::Integer;
use itertools::Itertools;

use super::ExactRatio;
use crate::error::{DomainError, DomainResult};

/// Combination enumeration grows as `2^n`, chords above this size are
/// reported in log.
pub const MAX_PRACTICAL_CHORD_SIZE: usize = 12;

/// Generalized least common multiple.
///
/// Works on magnitudes, so result is never negative.
///
/// # Example
///
/// ```
/// # use toneplot::primitives::{ExactRatio, fraction_tools::lcm};
/// let wavelengths = [ExactRatio::new(1, 1), ExactRatio::new(2, 3)];
/// assert_eq!(lcm(&wavelengths).unwrap(), ExactRatio::new(2, 1));
/// assert_eq!(
///     lcm(&[ExactRatio::new(3, 1), ExactRatio::new(4, 1)]).unwrap(),
///     ExactRatio::new(12, 1)
/// );
/// ```
pub fn lcm(ratios: &[ExactRatio]) -> DomainResult<ExactRatio> {
    let (first, rest) = ratios.split_first().ok_or(DomainError::EmptyInput)?;
    let mut numer = first.numer().clone();
    let mut denom = first.denom().clone();
    for ratio in rest {
        numer = numer.lcm(ratio.numer());
        denom = denom.gcd(ratio.denom());
    }
    ExactRatio::from_parts(numer, denom)
}

/// Generalized greatest common divisor:
/// `GCD(numerators) / LCM(denominators)`.
pub fn gcd(ratios: &[ExactRatio]) -> DomainResult<ExactRatio> {
    let (first, rest) = ratios.split_first().ok_or(DomainError::EmptyInput)?;
    let mut numer = first.numer().clone();
    let mut denom = first.denom().clone();
    for ratio in rest {
        numer = numer.gcd(ratio.numer());
        denom = denom.lcm(ratio.denom());
    }
    ExactRatio::from_parts(numer, denom)
}

/// [lcm] of every sub-set of `ratios`, having at least `size_at_least`
/// members.
///
/// Input is de-duplicated first. `size_at_least` of 0 is the same as 1.
/// Number of sub-sets is `2^n - n - 1` for the default of 2, so chord
/// size should be kept small (see [MAX_PRACTICAL_CHORD_SIZE]).
///
/// # Returns
///
/// Ascending vector without duplicates. Empty if there are fewer
/// unique ratios, than `size_at_least`.
pub fn lcm_of_all_combinations(
    ratios: &[ExactRatio],
    size_at_least: usize,
) -> DomainResult<Vec<ExactRatio>> {
    let unique: Vec<ExactRatio> =
        ratios.iter().cloned().sorted().dedup().collect();
    if unique.len() > MAX_PRACTICAL_CHORD_SIZE {
        log::warn!(
            "enumerating combinations of {} ratios, expect 2^{} subsets",
            unique.len(),
            unique.len()
        );
    }
    let mut result = BTreeSet::new();
    for size in size_at_least.max(1)..=unique.len() {
        for combination in unique.iter().cloned().combinations(size) {
            result.insert(lcm(&combination)?);
        }
    }
    log::trace!(
        "{} combination lcm values from {} ratios",
        result.len(),
        unique.len()
    );
    Ok(result.into_iter().collect())
}

/// True if `ratio` is an integer multiple of `base`.
pub fn is_multiple_of(ratio: &ExactRatio, base: &ExactRatio) -> bool {
    match ratio.checked_div(base) {
        Ok(quotient) => quotient.is_integer(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{gcd, is_multiple_of, lcm, lcm_of_all_combinations};
    use crate::{error::DomainError, primitives::ExactRatio};

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(&[]), Err(DomainError::EmptyInput));
        let a = ExactRatio::new(2, 3);
        let b = ExactRatio::new(3, 4);
        assert_eq!(lcm(&[a.clone()]).unwrap(), a);
        assert_eq!(lcm(&[a.clone(), b.clone()]).unwrap(), ExactRatio::new(6, 1));
        assert_eq!(
            lcm(&[a.clone(), b.clone()]).unwrap(),
            lcm(&[b.clone(), a.clone()]).unwrap()
        );
        let integers = [ExactRatio::from(4u64), ExactRatio::from(6u64)];
        assert_eq!(lcm(&integers).unwrap(), ExactRatio::from(12u64));
        assert_eq!(
            lcm(&[ExactRatio::new(1, 4), ExactRatio::new(1, 6)]).unwrap(),
            ExactRatio::new(1, 2)
        );
    }

    #[test]
    fn test_lcm_is_multiple_of_every_input() {
        let ratios = [
            ExactRatio::new(1, 1),
            ExactRatio::new(4, 5),
            ExactRatio::new(2, 3),
        ];
        let common = lcm(&ratios).unwrap();
        assert_eq!(common, ExactRatio::from(4u64));
        for ratio in ratios.iter() {
            assert!(is_multiple_of(&common, ratio));
        }
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&[]), Err(DomainError::EmptyInput));
        assert_eq!(
            gcd(&[ExactRatio::new(2, 3), ExactRatio::new(4, 5)]).unwrap(),
            ExactRatio::new(2, 15)
        );
        assert_eq!(
            gcd(&[ExactRatio::from(12u64), ExactRatio::from(18u64)]).unwrap(),
            ExactRatio::from(6u64)
        );
    }

    #[test]
    fn test_combinations() {
        let ratios = [
            ExactRatio::new(1, 1),
            ExactRatio::new(2, 3),
            ExactRatio::new(1, 2),
        ];
        // pairs: {1, 2/3} -> 2, {1, 1/2} -> 1, {2/3, 1/2} -> 2, all -> 2
        assert_eq!(
            lcm_of_all_combinations(&ratios, 2).unwrap(),
            vec![ExactRatio::from(1u64), ExactRatio::from(2u64)]
        );
        assert_eq!(
            lcm_of_all_combinations(&ratios, 1).unwrap(),
            vec![
                ExactRatio::new(1, 2),
                ExactRatio::new(2, 3),
                ExactRatio::from(1u64),
                ExactRatio::from(2u64)
            ]
        );
        assert_eq!(
            lcm_of_all_combinations(&ratios, 0).unwrap(),
            lcm_of_all_combinations(&ratios, 1).unwrap()
        );
        assert!(lcm_of_all_combinations(&ratios[..1], 2).unwrap().is_empty());
        let doubled = [ratios[0].clone(), ratios[0].clone()];
        assert!(lcm_of_all_combinations(&doubled, 2).unwrap().is_empty());
    }
}
