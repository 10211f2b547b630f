//! Wavelength view of a chord.
//!
//! Frequencies of a chord do not add up, but periods do: every member
//! repeats at integer multiples of its wavelength (reciprocal of the
//! frequency ratio). The chord as a whole repeats at the generalized LCM
//! of the wavelengths.
//!
//! [expand] builds, for each member, the series of its wavelength
//! multiples, and optionally drops the series, which are fully implied by
//! another (compaction). Axis ticks are derived from the result, see
//! [Expansion::ticks].
//!
//! # Examples
//!
//! ```
//! use toneplot::primitives::ExactRatio;
//! use toneplot::wavelength::{expand, ExpandSettings};
//!
//! let chord = [ExactRatio::new(1, 1), ExactRatio::new(3, 2)];
//! let expansion = expand(&chord, &ExpandSettings::default()).unwrap();
//! assert_eq!(expansion.global_lcm(), &ExactRatio::new(2, 1));
//! assert_eq!(
//!     expansion.get(&ExactRatio::new(2, 3)).unwrap(),
//!     &[ExactRatio::new(2, 3), ExactRatio::new(4, 3), ExactRatio::new(2, 1)]
//! );
//! ```

pub mod ticks;

use std::collections::{BTreeSet, VecDeque};

use fraction::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{
    error::{DomainError, DomainResult},
    overtones::multiples,
    primitives::{lcm, ExactRatio},
};

pub use ticks::{annotate, LabelStyle, TickLabel};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandSettings {
    /// End every series at the global LCM. Otherwise series of wavelength
    /// `n/d` has `d` members.
    pub align_to_global_lcm: bool,
    /// Drop series, implied by a series of smaller wavelength.
    pub compact: bool,
}
impl Default for ExpandSettings {
    fn default() -> Self {
        Self {
            align_to_global_lcm: true,
            compact: false,
        }
    }
}

/// Wavelength of a frequency ratio.
pub fn wavelength(ratio: &ExactRatio) -> DomainResult<ExactRatio> {
    if !ratio.is_positive() {
        return Err(DomainError::NonPositiveRatio(ratio.clone()));
    }
    ratio.recip()
}

#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthSeries {
    pub wavelength: ExactRatio,
    /// `[wavelength·1, wavelength·2, …]`
    pub multiples: Vec<ExactRatio>,
}
impl WavelengthSeries {
    pub fn new(wavelength: ExactRatio, count: usize) -> Self {
        Self {
            multiples: multiples(&wavelength, count),
            wavelength,
        }
    }
    pub fn last(&self) -> Option<&ExactRatio> {
        self.multiples.last()
    }
}

/// One rectangle of the chart: spans from `position` to
/// `position + width` (width is negative, so bars extend towards zero).
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub position: ExactRatio,
    pub width: ExactRatio,
}

/// Result of [expand].
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// every wavelength of the chord, descending
    wavelengths: Vec<ExactRatio>,
    global_lcm: ExactRatio,
    /// retained series, descending by wavelength
    series: Vec<WavelengthSeries>,
}
impl Expansion {
    pub fn wavelengths(&self) -> &[ExactRatio] {
        &self.wavelengths
    }
    pub fn global_lcm(&self) -> &ExactRatio {
        &self.global_lcm
    }
    pub fn series(&self) -> &[WavelengthSeries] {
        &self.series
    }
    /// Multiples of the retained wavelength.
    pub fn get(&self, wavelength: &ExactRatio) -> Option<&[ExactRatio]> {
        self.series
            .iter()
            .find(|series| &series.wavelength == wavelength)
            .map(|series| series.multiples.as_slice())
    }
    pub fn bars(&self) -> Vec<Bar> {
        self.series
            .iter()
            .flat_map(|series| {
                let width = -series.wavelength.clone();
                series.multiples.iter().map(move |position| Bar {
                    position: position.clone(),
                    width: width.clone(),
                })
            })
            .collect()
    }
}

/// Number of multiples of `wavelength`.
///
/// Aligned count is `global_lcm / wavelength`, so the last multiple is
/// exactly the global LCM.
pub(crate) fn multiple_count(
    wavelength: &ExactRatio,
    global_lcm: &ExactRatio,
    aligned: bool,
) -> DomainResult<usize> {
    let count = match aligned {
        true => global_lcm.checked_div(wavelength)?.to_integer(),
        false => wavelength.denom().clone(),
    };
    count
        .to_usize()
        .ok_or_else(|| DomainError::TooManyMultiples(count.clone()))
}

/// Expand chord (frequency ratios) into wavelength multiples.
///
/// Duplicate ratios are merged.
///
/// # Errors
/// - [DomainError::EmptyInput] for empty chord;
/// - [DomainError::NonPositiveRatio] if any ratio is not positive.
pub fn expand(
    chord: &[ExactRatio],
    settings: &ExpandSettings,
) -> DomainResult<Expansion> {
    if chord.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    let unique = chord
        .iter()
        .map(wavelength)
        .collect::<DomainResult<BTreeSet<ExactRatio>>>()?;
    let wavelengths: Vec<ExactRatio> = unique.into_iter().rev().collect();
    let global_lcm = lcm(&wavelengths)?;

    let mut series = Vec::with_capacity(wavelengths.len());
    for wavelength in wavelengths.iter() {
        let count = multiple_count(
            wavelength,
            &global_lcm,
            settings.align_to_global_lcm,
        )?;
        series.push(WavelengthSeries::new(wavelength.clone(), count));
    }
    if settings.compact {
        series = compact(series);
    }
    log::debug!(
        "expanded {} wavelengths, global lcm: {}, retained: {}",
        wavelengths.len(),
        global_lcm,
        series.len()
    );
    Ok(Expansion {
        wavelengths,
        global_lcm,
        series,
    })
}

/// Drop series, whose multiples are all present in another series.
///
/// Series are visited from the largest wavelength down. Each visited
/// series is compared only with those not visited yet, so from two equal
/// series the later (smaller wavelength) is kept.
pub fn compact(mut series: Vec<WavelengthSeries>) -> Vec<WavelengthSeries> {
    series.sort_by(|a, b| b.wavelength.cmp(&a.wavelength));
    let mut remaining: VecDeque<(ExactRatio, BTreeSet<ExactRatio>)> = series
        .iter()
        .map(|s| (s.wavelength.clone(), s.multiples.iter().cloned().collect()))
        .collect();
    let mut retained = Vec::new();
    for current in series {
        let (_, multiples) = match remaining.pop_front() {
            Some(visited) => visited,
            None => break,
        };
        match remaining
            .iter()
            .find(|(_, other)| multiples.is_subset(other))
        {
            Some((implied_by, _)) => log::debug!(
                "dropping wavelength {}: multiples implied by {}",
                current.wavelength,
                implied_by
            ),
            None => retained.push(current),
        }
    }
    retained
}
