//! Naming of arbitrary ratios by the nearest 12-TET pitch.

use std::{fmt, ops::Range};

use serde::{Deserialize, Serialize};

use super::ExactRatio;
use crate::error::{DomainError, DomainResult};

pub const CHROMATIC_NAMES: [&str; 12] =
    ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// C4 in 12-TET with A4 = 440 Hz.
pub const MIDDLE_C_HZ: f64 = 261.6256;

/// Semitone offsets searched around the fundamental: 4 octaves below up
/// to (not including) 5 octaves above.
pub const SEARCH_WINDOW: Range<i32> = -48..60;

/// What "nearest" means when looking for the pitch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PitchMetric {
    /// Smallest absolute difference in Hz. Leans to lower pitches for the
    /// same cents error.
    #[default]
    Hertz,
    /// Smallest absolute deviation in cents.
    Cents,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitchSettings {
    /// Frequency of the ratio 1/1.
    pub fundamental_hz: f64,
    /// Index of the fundamental in [CHROMATIC_NAMES].
    pub anchor: usize,
    /// Octave number of the fundamental.
    pub base_octave: i32,
    pub metric: PitchMetric,
}
impl Default for PitchSettings {
    fn default() -> Self {
        Self {
            fundamental_hz: MIDDLE_C_HZ,
            anchor: 0,
            base_octave: 4,
            metric: PitchMetric::default(),
        }
    }
}

/// Result of [PitchNamer::nearest_pitch].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchLabel {
    pub ratio: ExactRatio,
    /// e.g. "G4"
    pub name: String,
    /// positive, if ratio is sharper than the named pitch
    pub cents: f64,
    /// `|Hz difference| / named pitch frequency`
    pub relative_error: f64,
    pub absolute_error_hz: f64,
}
impl fmt::Display for PitchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+.1}c)", self.name, self.cents)
    }
}

/// Maps ratios to pitch names, relative to configured fundamental.
///
/// # Example
///
/// ```
/// # use toneplot::primitives::{ExactRatio, pitch::PitchNamer};
/// let namer = PitchNamer::default();
/// let fifth = namer.nearest_pitch(&ExactRatio::new(3, 2)).unwrap();
/// assert_eq!(fifth.name, "G4");
/// assert!(fifth.cents > 1.9 && fifth.cents < 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PitchNamer {
    settings: PitchSettings,
}
impl PitchNamer {
    pub fn new(settings: PitchSettings) -> DomainResult<Self> {
        let hz = settings.fundamental_hz;
        if !(hz > 0.0 && hz.is_finite()) {
            return Err(DomainError::NonPositiveFrequency(hz));
        }
        Ok(Self { settings })
    }
    pub fn settings(&self) -> &PitchSettings {
        &self.settings
    }

    /// Name of the pitch `offset` semitones from the fundamental.
    pub fn pitch_name(&self, offset: i32) -> String {
        let index = (self.settings.anchor % 12) as i32 + offset;
        format!(
            "{}{}",
            CHROMATIC_NAMES[index.rem_euclid(12) as usize],
            self.settings.base_octave + index.div_euclid(12)
        )
    }
    pub fn equal_tempered_hz(&self, offset: i32) -> f64 {
        self.settings.fundamental_hz * 2f64.powf(offset as f64 / 12.0)
    }
    fn distance(&self, frequency: f64, tempered: f64) -> f64 {
        match self.settings.metric {
            PitchMetric::Hertz => (frequency - tempered).abs(),
            PitchMetric::Cents => cents(frequency, tempered).abs(),
        }
    }

    /// Nearest pitch in [SEARCH_WINDOW]. Ties resolve to the lower pitch.
    pub fn nearest_pitch(&self, ratio: &ExactRatio) -> DomainResult<PitchLabel> {
        if !ratio.is_positive() {
            return Err(DomainError::NonPositiveRatio(ratio.clone()));
        }
        let frequency = ratio.to_f64() * self.settings.fundamental_hz;
        let mut best_offset = SEARCH_WINDOW.start;
        let mut best_hz = self.equal_tempered_hz(best_offset);
        for offset in SEARCH_WINDOW {
            let tempered = self.equal_tempered_hz(offset);
            if self.distance(frequency, tempered)
                < self.distance(frequency, best_hz)
            {
                best_offset = offset;
                best_hz = tempered;
            }
        }
        let error = (frequency - best_hz).abs();
        Ok(PitchLabel {
            ratio: ratio.clone(),
            name: self.pitch_name(best_offset),
            cents: cents(frequency, best_hz),
            relative_error: error / best_hz,
            absolute_error_hz: error,
        })
    }
}

/// Nearest pitch for C-anchored fundamental in the 4th octave.
pub fn nearest_pitch(
    ratio: &ExactRatio,
    fundamental_hz: f64,
) -> DomainResult<PitchLabel> {
    PitchNamer::new(PitchSettings {
        fundamental_hz,
        ..Default::default()
    })?
    .nearest_pitch(ratio)
}

fn cents(frequency: f64, reference: f64) -> f64 {
    1200.0 * (frequency / reference).log2()
}
