use fraction::BigUint;
use thiserror;

use crate::primitives::ExactRatio;

/// Violated mathematical precondition of one of the tone operations.
///
/// Every operation either succeeds completely or returns one of these,
/// there are no partial results.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("At least one ratio is required")]
    EmptyInput,
    #[error("Ratio should be strictly positive, got: {0}")]
    NonPositiveRatio(ExactRatio),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Octave base should be at least 2, got: {0}")]
    InvalidOctaveBase(u64),
    #[error("Fundamental frequency should be positive and finite, got: {0}")]
    NonPositiveFrequency(f64),
    #[error("Multiple count does not fit into memory: {0}")]
    TooManyMultiples(BigUint),
    #[error("Can not parse ratio from `{0}`")]
    ParseRatio(String),
}
pub type DomainResult<T> = Result<T, DomainError>;
