//! Exact ratios and the operations on them, from which everything else
//! is built.
//!
//! Frequency ratio is relation of a tone to the fundamental (1/1).
//! Wavelength is its reciprocal. Ratios are folded into octaves, combined
//! through generalized LCM/GCD, and named by the nearest tempered pitch.

pub mod fraction_tools;
pub mod octave;
pub mod pitch;
pub mod ratio;

pub use fraction_tools::{gcd, lcm, lcm_of_all_combinations};
pub use octave::{extended_octave_pair, fold, octave_pair, OCTAVE, TRITAVE};
pub use pitch::{
    nearest_pitch, PitchLabel, PitchMetric, PitchNamer, PitchSettings,
};
pub use ratio::ExactRatio;
