//! Exact frequency ratio, the value every other part of the crate works with.
//!
//! Magnitude is kept as reduced `Ratio<BigUint>`, sign is kept separately,
//! so arithmetic is delegated to [fraction::BigFraction] and the result
//! is brought back to canonical form.
//!
//! # Examples
//!
//! ```
//! use toneplot::primitives::ExactRatio;
//!
//! let fifth = ExactRatio::new(6, 4);
//! assert_eq!(fifth, ExactRatio::new(3, 2));
//! assert_eq!(fifth.to_string(), "3/2");
//! let fourth = ExactRatio::new(2, 1) / fifth.clone();
//! assert_eq!(fourth, ExactRatio::new(4, 3));
//! assert_eq!(fourth * fifth, ExactRatio::from(2u64));
//! ```

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use fraction::{
    BigFraction, BigUint, GenericFraction, One, Ratio, Sign, ToPrimitive,
    Zero,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};

/// Bit length below which a `BigUint` converts to a finite `f64`.
const F64_SAFE_BITS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactRatio {
    /// never true for zero
    negative: bool,
    magnitude: Ratio<BigUint>,
}
impl ExactRatio {
    /// # Panics
    /// If denominator is zero. See [ExactRatio::try_new].
    pub fn new(numer: u64, denom: u64) -> Self {
        Self::try_new(numer, denom).expect("denominator should not be zero")
    }
    pub fn try_new(numer: u64, denom: u64) -> DomainResult<Self> {
        Self::from_parts(BigUint::from(numer), BigUint::from(denom))
    }
    /// Negative ratio `-numer/denom`.
    ///
    /// # Panics
    /// If denominator is zero.
    pub fn new_neg(numer: u64, denom: u64) -> Self {
        -Self::new(numer, denom)
    }
    /// Build from unbounded parts, reducing them.
    pub fn from_parts(numer: BigUint, denom: BigUint) -> DomainResult<Self> {
        if denom.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok(Self {
            negative: false,
            magnitude: Ratio::new(numer, denom),
        })
    }
    pub fn from_integer(value: impl Into<BigUint>) -> Self {
        Self {
            negative: false,
            magnitude: Ratio::from_integer(value.into()),
        }
    }
    pub fn zero() -> Self {
        Self::from_integer(BigUint::zero())
    }
    pub fn one() -> Self {
        Self::from_integer(BigUint::one())
    }

    /// Numerator of the magnitude (sign is not included).
    pub fn numer(&self) -> &BigUint {
        self.magnitude.numer()
    }
    pub fn denom(&self) -> &BigUint {
        self.magnitude.denom()
    }
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    /// Strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }
    pub fn is_integer(&self) -> bool {
        self.magnitude.is_integer()
    }
    /// Integer part of the magnitude.
    pub fn to_integer(&self) -> BigUint {
        self.magnitude.to_integer()
    }
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            magnitude: self.magnitude.clone(),
        }
    }
    /// Nearest `f64`. Parts too long for `f64` are scaled down together,
    /// so only the quotient may overflow.
    pub fn to_f64(&self) -> f64 {
        let bits = self.numer().bits().max(self.denom().bits());
        let shift = bits.saturating_sub(F64_SAFE_BITS) as usize;
        let numer = (self.numer() >> shift).to_f64().unwrap_or(f64::INFINITY);
        let denom = (self.denom() >> shift).to_f64().unwrap_or(f64::INFINITY);
        match self.negative {
            true => -numer / denom,
            false => numer / denom,
        }
    }

    /// Swap numerator and denominator.
    pub fn recip(&self) -> DomainResult<Self> {
        if self.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok(Self {
            negative: self.negative,
            magnitude: self.magnitude.recip(),
        })
    }
    pub fn checked_div(&self, rhs: &Self) -> DomainResult<Self> {
        if rhs.is_zero() {
            return Err(DomainError::DivisionByZero);
        }
        Self::from_fraction(self.to_fraction() / rhs.to_fraction())
    }

    /// `numerator + denominator - 1` of the reduced ratio.
    ///
    /// Unison has score 1, the higher the score, the more dissonant.
    pub fn dissonance_score(&self) -> BigUint {
        self.numer() + self.denom() - 1u32
    }
    /// Shading weight in `[0, 1)`: 0 for integer ratios, growing with
    /// the denominator.
    pub fn consonance(&self) -> f64 {
        1.0 - 1.0 / self.denom().to_f64().unwrap_or(f64::INFINITY)
    }

    pub fn to_fraction(&self) -> BigFraction {
        let sign = match self.negative {
            true => Sign::Minus,
            false => Sign::Plus,
        };
        GenericFraction::Rational(sign, self.magnitude.clone())
    }
    /// Fails on infinity and NaN.
    pub fn from_fraction(fraction: BigFraction) -> DomainResult<Self> {
        match fraction {
            GenericFraction::Rational(sign, magnitude) => Ok(Self {
                negative: matches!(sign, Sign::Minus) && !magnitude.is_zero(),
                magnitude,
            }),
            _ => Err(DomainError::DivisionByZero),
        }
    }
    fn finite(fraction: BigFraction) -> Self {
        Self::from_fraction(fraction)
            .expect("finite operands should give finite result")
    }
}

impl From<u64> for ExactRatio {
    fn from(value: u64) -> Self {
        Self::from_integer(value)
    }
}
impl TryFrom<BigFraction> for ExactRatio {
    type Error = DomainError;
    fn try_from(value: BigFraction) -> Result<Self, Self::Error> {
        Self::from_fraction(value)
    }
}

impl Add<&ExactRatio> for &ExactRatio {
    type Output = ExactRatio;
    fn add(self, rhs: &ExactRatio) -> Self::Output {
        ExactRatio::finite(self.to_fraction() + rhs.to_fraction())
    }
}
impl Add for ExactRatio {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}
impl Sub<&ExactRatio> for &ExactRatio {
    type Output = ExactRatio;
    fn sub(self, rhs: &ExactRatio) -> Self::Output {
        ExactRatio::finite(self.to_fraction() - rhs.to_fraction())
    }
}
impl Sub for ExactRatio {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}
impl Mul<&ExactRatio> for &ExactRatio {
    type Output = ExactRatio;
    fn mul(self, rhs: &ExactRatio) -> Self::Output {
        ExactRatio::finite(self.to_fraction() * rhs.to_fraction())
    }
}
impl Mul for ExactRatio {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
/// # Panics
/// On zero divisor. See [ExactRatio::checked_div].
impl Div<&ExactRatio> for &ExactRatio {
    type Output = ExactRatio;
    fn div(self, rhs: &ExactRatio) -> Self::Output {
        self.checked_div(rhs).expect("Division by zero")
    }
}
impl Div for ExactRatio {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}
impl Neg for ExactRatio {
    type Output = Self;
    fn neg(self) -> Self::Output {
        let negative = !self.negative && !self.is_zero();
        Self {
            negative,
            magnitude: self.magnitude,
        }
    }
}

impl Ord for ExactRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}
impl PartialOrd for ExactRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExactRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        match self.is_integer() {
            true => write!(f, "{}", self.numer()),
            false => write!(f, "{}/{}", self.numer(), self.denom()),
        }
    }
}

/// Accepts `n`, `n/d` and `-n/d`.
impl FromStr for ExactRatio {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || DomainError::ParseRatio(s.to_string());
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let (numer, denom) = body.split_once('/').unwrap_or((body, "1"));
        let numer = numer.trim().parse::<BigUint>().map_err(|_| error())?;
        let denom = denom.trim().parse::<BigUint>().map_err(|_| error())?;
        let ratio = Self::from_parts(numer, denom).map_err(|_| error())?;
        match negative {
            true => Ok(-ratio),
            false => Ok(ratio),
        }
    }
}

impl Serialize for ExactRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
impl<'de> Deserialize<'de> for ExactRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use fraction::{BigFraction, BigUint};
    use serde::{de::IntoDeserializer, Deserialize};

    use super::ExactRatio;
    use crate::error::DomainError;

    #[test]
    fn reduced_on_construction() {
        let a = ExactRatio::new(10, 4);
        assert_eq!(a.numer(), &BigUint::from(5u32));
        assert_eq!(a.denom(), &BigUint::from(2u32));
        assert_eq!(a, ExactRatio::new(5, 2));
        assert_eq!(ExactRatio::new(0, 7), ExactRatio::zero());
        assert_eq!(ExactRatio::try_new(1, 0), Err(DomainError::DivisionByZero));
    }

    #[test]
    fn arithmetic() {
        let a = ExactRatio::new(3, 2);
        let b = ExactRatio::new(4, 3);
        assert_eq!(&a + &b, ExactRatio::new(17, 6));
        assert_eq!(&a - &b, ExactRatio::new(1, 6));
        assert_eq!(&b - &a, ExactRatio::new_neg(1, 6));
        assert_eq!(&a * &b, ExactRatio::from(2u64));
        assert_eq!(&a / &b, ExactRatio::new(9, 8));
        assert_eq!((&a / &b) * b.clone(), a);
        assert_eq!(&a - &a, ExactRatio::zero());
        assert!(!(&a - &a).is_negative());
        assert_eq!(
            ExactRatio::new_neg(1, 2) * ExactRatio::new_neg(2, 3),
            ExactRatio::new(1, 3)
        );
    }

    #[test]
    fn round_trip_division() {
        let values = [
            ExactRatio::new(1, 1),
            ExactRatio::new(3, 2),
            ExactRatio::new(7, 12),
            ExactRatio::new_neg(5, 9),
            ExactRatio::new(1024, 81),
        ];
        for a in values.iter() {
            for b in values.iter() {
                assert_eq!(&(a / b) * b, *a);
            }
        }
    }

    #[test]
    fn reciprocal_and_zero_division() {
        assert_eq!(ExactRatio::new(3, 2).recip(), Ok(ExactRatio::new(2, 3)));
        assert_eq!(
            ExactRatio::new_neg(3, 2).recip(),
            Ok(ExactRatio::new_neg(2, 3))
        );
        assert_eq!(ExactRatio::zero().recip(), Err(DomainError::DivisionByZero));
        assert_eq!(
            ExactRatio::one().checked_div(&ExactRatio::zero()),
            Err(DomainError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic]
    fn operator_division_by_zero() {
        let _ = ExactRatio::one() / ExactRatio::zero();
    }

    #[test]
    fn ordering() {
        let mut values = vec![
            ExactRatio::new(3, 2),
            ExactRatio::new_neg(1, 2),
            ExactRatio::zero(),
            ExactRatio::new(2, 3),
            ExactRatio::new_neg(3, 1),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                ExactRatio::new_neg(3, 1),
                ExactRatio::new_neg(1, 2),
                ExactRatio::zero(),
                ExactRatio::new(2, 3),
                ExactRatio::new(3, 2),
            ]
        );
    }

    #[test]
    fn scores() {
        assert_eq!(ExactRatio::one().dissonance_score(), BigUint::from(1u32));
        assert_eq!(
            ExactRatio::new(3, 2).dissonance_score(),
            BigUint::from(4u32)
        );
        assert_eq!(ExactRatio::from(2u64).consonance(), 0.0);
        assert_eq!(ExactRatio::new(3, 2).consonance(), 0.5);
    }

    #[test]
    fn text() {
        assert_eq!(ExactRatio::new(3, 2).to_string(), "3/2");
        assert_eq!(ExactRatio::new(4, 2).to_string(), "2");
        assert_eq!(ExactRatio::new_neg(1, 3).to_string(), "-1/3");
        assert_eq!("6/4".parse::<ExactRatio>(), Ok(ExactRatio::new(3, 2)));
        assert_eq!(" 5 ".parse::<ExactRatio>(), Ok(ExactRatio::from(5u64)));
        assert_eq!("-2/6".parse::<ExactRatio>(), Ok(ExactRatio::new_neg(1, 3)));
        assert_eq!(
            "1/0".parse::<ExactRatio>(),
            Err(DomainError::ParseRatio("1/0".to_string()))
        );
        assert!("three halves".parse::<ExactRatio>().is_err());
    }

    #[test]
    fn deserialize_from_text() {
        let ratio: Result<ExactRatio, serde::de::value::Error> =
            ExactRatio::deserialize("9/8".into_deserializer());
        assert_eq!(ratio.unwrap(), ExactRatio::new(9, 8));
    }

    #[test]
    fn fraction_conversion() {
        let fraction = BigFraction::new(3u64, 2u64);
        assert_eq!(ExactRatio::try_from(fraction), Ok(ExactRatio::new(3, 2)));
        assert_eq!(ExactRatio::new(3, 2).to_fraction(), BigFraction::new(3u64, 2u64));
        assert_eq!(
            ExactRatio::try_from(BigFraction::infinity()),
            Err(DomainError::DivisionByZero)
        );
        assert_eq!(ExactRatio::new(7, 2).to_f64(), 3.5);
        assert_eq!(ExactRatio::new(7, 2).to_integer(), BigUint::from(3u32));
    }

    #[test]
    fn float_of_long_parts() {
        // 3^700 / 2^1109, both parts beyond f64::MAX
        let ratio = ExactRatio::from_parts(
            BigUint::from(3u32).pow(700),
            BigUint::from(1u32) << 1109usize,
        )
        .unwrap();
        let expected = 2f64.powf(700.0 * 3f64.log2() - 1109.0);
        assert!((ratio.to_f64() - expected).abs() < 1e-9);
        assert!(ExactRatio::from_parts(BigUint::from(1u32) << 2000usize, BigUint::from(1u32))
            .unwrap()
            .to_f64()
            .is_infinite());
        assert_eq!(
            ExactRatio::from_parts(BigUint::from(1u32), BigUint::from(1u32) << 2000usize)
                .unwrap()
                .to_f64(),
            0.0
        );
        assert!(((-ratio.recip().unwrap()).to_f64() + 1.0 / expected).abs() < 1e-9);
    }
}
