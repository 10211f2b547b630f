//! Analysis of musical pitch relations, expressed as exact frequency
//! ratios.
//!
//! - [dissonance]: which ratios are simple enough under a dissonance
//!   budget;
//! - [wavelength]: which periodic structure a chord produces, as integer
//!   multiples of common wavelength;
//! - [primitives::pitch]: how a ratio maps to the nearest tempered pitch.
//!
//! Everything is pure: no state survives between calls. Results are
//! plain data, drawing them is up to the caller.

pub mod dissonance;
pub mod error;
pub mod overtones;
pub mod primitives;
pub mod wavelength;

pub use error::{DomainError, DomainResult};
pub use primitives::ExactRatio;
