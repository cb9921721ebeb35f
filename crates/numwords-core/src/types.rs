//! Core data types for number spelling.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Grammatical form a number word must agree with.
///
/// The three genders select the matching inflection of digit words. `Plural`
/// is the fourth slot of ordinal tables; cardinal tables have no plural slot
/// and use the masculine form instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Form {
    /// Masculine gender.
    #[default]
    #[serde(alias = "m")]
    Masculine,
    /// Feminine gender.
    #[serde(alias = "f")]
    Feminine,
    /// Neuter gender.
    #[serde(alias = "n")]
    Neuter,
    /// Plural / indefinite.
    #[serde(alias = "p")]
    Plural,
}

impl Form {
    /// Slot index into a 4-form ordinal table.
    pub fn index(self) -> usize {
        match self {
            Form::Masculine => 0,
            Form::Feminine => 1,
            Form::Neuter => 2,
            Form::Plural => 3,
        }
    }

    /// Slot index into a 3-form (gendered) cardinal table.
    pub fn gender_index(self) -> usize {
        match self {
            Form::Plural => 0,
            other => other.index(),
        }
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Masculine => write!(f, "masculine"),
            Form::Feminine => write!(f, "feminine"),
            Form::Neuter => write!(f, "neuter"),
            Form::Plural => write!(f, "plural"),
        }
    }
}

impl FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "m" | "masculine" => Ok(Self::Masculine),
            "f" | "feminine" => Ok(Self::Feminine),
            "n" | "neuter" => Ok(Self::Neuter),
            "p" | "plural" => Ok(Self::Plural),
            _ => Err(Error::InvalidForm(s.to_string())),
        }
    }
}

/// A value to spell out: an integer or an exact decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// Whole number.
    Integer(i128),
    /// Exact decimal; the scale (trailing zeros) is preserved.
    Decimal(Decimal),
    /// Decimal with more digits than [`Decimal`] can hold.
    Long(LongDecimal),
}

/// A decimal kept as separate whole and fractional digit groups.
///
/// Covers values outside the 28 significant digits of [`Decimal`], e.g. a
/// 31-digit integer part or a 32-digit fraction. Each part must fit a `u128`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LongDecimal {
    /// Whether the value carries a minus sign.
    pub negative: bool,
    /// Digits before the point.
    pub whole: u128,
    /// Digits after the point, read as an integer.
    pub fraction: u128,
    /// Number of digits after the point, leading and trailing zeros included.
    pub scale: u32,
}

impl LongDecimal {
    fn is_zero(&self) -> bool {
        self.whole == 0 && self.fraction == 0
    }
}

impl std::fmt::Display for LongDecimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.whole)?;
        if self.scale > 0 {
            write!(f, ".{:0>width$}", self.fraction, width = self.scale as usize)?;
        }
        Ok(())
    }
}

impl FromStr for LongDecimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
            return Err(Error::invalid_number(s));
        }

        let parse_part = |part: &str| -> Result<u128> {
            if part.is_empty() {
                return Ok(0);
            }
            part.parse()
                .map_err(|e| Error::invalid_number(format!("{s}: {e}")))
        };
        let scale = u32::try_from(fraction.len()).map_err(|_| Error::invalid_number(s))?;

        Ok(Self {
            negative,
            whole: parse_part(whole)?,
            fraction: parse_part(fraction)?,
            scale,
        })
    }
}

impl Number {
    /// Check whether the value is below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(i) => *i < 0,
            Number::Decimal(d) => d.is_sign_negative() && !d.is_zero(),
            Number::Long(d) => d.negative && !d.is_zero(),
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Number {
        match self {
            Number::Integer(i) => Number::Integer(i.saturating_abs()),
            Number::Decimal(d) => Number::Decimal(d.abs()),
            Number::Long(d) => Number::Long(LongDecimal {
                negative: false,
                ..*d
            }),
        }
    }

    /// The value as an integer, if it has no fractional part.
    ///
    /// A decimal such as `5.00` counts as the integer 5.
    pub fn as_integer(&self) -> Option<i128> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Decimal(d) if d.fract().is_zero() => d.trunc().to_i128(),
            Number::Decimal(_) => None,
            Number::Long(d) if d.fraction == 0 => {
                let whole = i128::try_from(d.whole).ok()?;
                Some(if d.negative { -whole } else { whole })
            }
            Number::Long(_) => None,
        }
    }

    /// Check whether the value is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Decimal(d) => d.is_zero(),
            Number::Long(d) => d.is_zero(),
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{i}"),
            Number::Decimal(d) => write!(f, "{d}"),
            Number::Long(d) => write!(f, "{d}"),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    /// Parse an integer or decimal. A comma is accepted as the decimal separator.
    ///
    /// Digits are never rounded away: a decimal that [`Decimal`] cannot hold
    /// exactly is kept as a [`LongDecimal`].
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace(',', ".");
        if normalized.is_empty() {
            return Err(Error::invalid_number("empty input"));
        }

        if let Ok(i) = normalized.parse::<i128>() {
            return Ok(Number::Integer(i));
        }

        let fraction_len = normalized.split_once('.').map_or(0, |(_, f)| f.len());
        match Decimal::from_str_exact(&normalized) {
            Ok(d) if d.scale() as usize == fraction_len => Ok(Number::Decimal(d)),
            _ => normalized
                .parse::<LongDecimal>()
                .map(Number::Long)
                .map_err(|_| Error::invalid_number(s.trim())),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

impl TryFrom<f64> for Number {
    type Error = Error;

    /// Convert through the shortest round-trip representation, so `1.1`
    /// becomes the decimal `1.1` rather than its binary expansion.
    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid_number(format!("{value}")));
        }
        value.to_string().parse()
    }
}

impl TryFrom<&str> for Number {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}

/// Which conversion to run through [`crate::NumberToWords::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    /// Cardinal number ("twenty one").
    #[default]
    Cardinal,
    /// Ordinal number ("twenty first").
    Ordinal,
    /// Digits with an ordinal suffix ("21-ви").
    OrdinalNum,
    /// Year.
    Year,
    /// Currency amount.
    Currency,
}

impl std::fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionKind::Cardinal => write!(f, "cardinal"),
            ConversionKind::Ordinal => write!(f, "ordinal"),
            ConversionKind::OrdinalNum => write!(f, "ordinal_num"),
            ConversionKind::Year => write!(f, "year"),
            ConversionKind::Currency => write!(f, "currency"),
        }
    }
}
