//! Axis ticks of the wavelength chart.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{multiple_count, Expansion};
use crate::{
    error::DomainResult,
    overtones::multiples,
    primitives::{lcm_of_all_combinations, ExactRatio, PitchLabel, PitchNamer},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelStyle {
    /// Every multiple of every retained series.
    #[default]
    AllMultiples,
    /// Multiples of LCM of every sub-chord (two or more members), aligned
    /// to the global LCM.
    LcmAlignment,
}

impl Expansion {
    /// Tick set for the given style. Zero is always included.
    pub fn ticks(&self, style: LabelStyle) -> DomainResult<BTreeSet<ExactRatio>> {
        let mut ticks = BTreeSet::from([ExactRatio::zero()]);
        match style {
            LabelStyle::AllMultiples => {
                for series in self.series.iter() {
                    ticks.extend(series.multiples.iter().cloned());
                }
            }
            LabelStyle::LcmAlignment => {
                for common in lcm_of_all_combinations(&self.wavelengths, 2)? {
                    let count = multiple_count(&common, &self.global_lcm, true)?;
                    ticks.extend(multiples(&common, count));
                }
            }
        }
        Ok(ticks)
    }
}

/// Tick with the name of the pitch it is wavelength of.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub tick: ExactRatio,
    /// None for zero
    pub pitch: Option<PitchLabel>,
}

/// Name every non-zero tick by the pitch of frequency ratio `1/tick`.
pub fn annotate<'a>(
    ticks: impl IntoIterator<Item = &'a ExactRatio>,
    namer: &PitchNamer,
) -> DomainResult<Vec<TickLabel>> {
    let mut labels = Vec::new();
    for tick in ticks {
        let pitch = match tick.is_zero() {
            true => None,
            false => Some(namer.nearest_pitch(&tick.recip()?)?),
        };
        labels.push(TickLabel {
            tick: tick.clone(),
            pitch,
        });
    }
    Ok(labels)
}
