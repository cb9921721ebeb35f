//! Currency amount helpers shared by language converters.

use crate::error::{Error, Result};
use crate::types::{Form, LongDecimal, Number};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Word forms of one currency unit (e.g. euro or cent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitForms {
    /// Singular noun.
    pub singular: &'static str,
    /// Plural noun.
    pub plural: &'static str,
    /// Grammatical gender the amount must agree with.
    pub gender: Form,
}

impl UnitForms {
    /// Create unit forms.
    pub const fn new(singular: &'static str, plural: &'static str, gender: Form) -> Self {
        Self {
            singular,
            plural,
            gender,
        }
    }

    /// Singular and plural nouns, in plural-class order.
    pub fn nouns(&self) -> [String; 2] {
        [self.singular.to_string(), self.plural.to_string()]
    }
}

/// Major and minor unit forms of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyForms {
    /// Whole units (euro, denar).
    pub major: UnitForms,
    /// Fractional units (cent, deni).
    pub minor: UnitForms,
}

/// An amount split into whole and fractional units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrencyParts {
    /// Whole units, without sign.
    pub major: u128,
    /// Hundredths, without sign.
    pub minor: u32,
    /// Whether the amount was below zero.
    pub negative: bool,
}

/// Split an amount into major and minor units.
///
/// Decimals are rounded half-up to two places. A bare integer counts whole
/// units, unless `int_with_cents` is set, in which case it counts hundredths.
pub fn parse_currency_parts(value: Number, int_with_cents: bool) -> Result<CurrencyParts> {
    match value {
        Number::Integer(i) => {
            let negative = i < 0;
            let amount = i.unsigned_abs();
            let (major, minor) = if int_with_cents {
                (amount / 100, (amount % 100) as u32)
            } else {
                (amount, 0)
            };
            Ok(CurrencyParts {
                major,
                minor,
                negative,
            })
        }
        Number::Decimal(d) => {
            let rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            let negative = rounded < Decimal::ZERO;
            let amount = rounded.abs();

            let major = amount
                .trunc()
                .to_u128()
                .ok_or_else(|| Error::invalid_number(format!("{d}")))?;
            let minor = (amount.fract() * Decimal::ONE_HUNDRED)
                .to_u32()
                .ok_or_else(|| Error::invalid_number(format!("{d}")))?;

            Ok(CurrencyParts {
                major,
                minor,
                negative,
            })
        }
        Number::Long(d) => {
            let (major, minor) =
                round_to_hundredths(&d).ok_or_else(|| Error::invalid_number(d.to_string()))?;
            Ok(CurrencyParts {
                major,
                minor,
                negative: d.negative && (major, minor) != (0, 0),
            })
        }
    }
}

/// Round the magnitude of a long decimal half-up to whole units and hundredths.
fn round_to_hundredths(d: &LongDecimal) -> Option<(u128, u32)> {
    let (cents, round_up) = match d.scale {
        0..=2 => (d.fraction * 10u128.pow(2 - d.scale), false),
        scale => match 10u128.checked_pow(scale - 2) {
            Some(divisor) => (d.fraction / divisor, d.fraction % divisor >= divisor / 2),
            // The fraction is below half of any divisor too large for u128.
            None => (0, false),
        },
    };
    let cents = cents + u128::from(round_up);
    let major = d.whole.checked_add(cents / 100)?;
    Some((major, (cents % 100) as u32))
}

/// Prefix both noun forms of a unit with an adjective.
pub fn prefix_currency(prefix: &str, unit: &UnitForms) -> [String; 2] {
    [
        format!("{prefix} {}", unit.singular),
        format!("{prefix} {}", unit.plural),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_integer_as_whole_units() {
        let parts = parse_currency_parts(Number::from(101), false).unwrap();
        assert_eq!(parts.major, 101);
        assert_eq!(parts.minor, 0);
        assert!(!parts.negative);
    }

    #[test]
    fn test_parse_integer_with_cents() {
        let parts = parse_currency_parts(Number::from(-101), true).unwrap();
        assert_eq!(parts.major, 1);
        assert_eq!(parts.minor, 1);
        assert!(parts.negative);
    }

    #[test]
    fn test_parse_decimal() {
        let parts = parse_currency_parts(dec("1.01"), false).unwrap();
        assert_eq!((parts.major, parts.minor), (1, 1));

        let parts = parse_currency_parts(dec("12.345"), false).unwrap();
        assert_eq!((parts.major, parts.minor), (12, 35));

        let parts = parse_currency_parts(dec("-0.5"), false).unwrap();
        assert_eq!((parts.major, parts.minor), (0, 50));
        assert!(parts.negative);
    }

    #[test]
    fn test_parse_rounds_tiny_negative_to_zero() {
        let parts = parse_currency_parts(dec("-0.001"), false).unwrap();
        assert_eq!((parts.major, parts.minor), (0, 0));
        assert!(!parts.negative);
    }

    #[test]
    fn test_parse_long_decimal() {
        let parts = parse_currency_parts(dec("2.00500000000000000000000000000001"), false).unwrap();
        assert_eq!((parts.major, parts.minor), (2, 1));

        let parts = parse_currency_parts(dec("-4.99500000000000000000000000000000"), false).unwrap();
        assert_eq!((parts.major, parts.minor), (5, 0));
        assert!(parts.negative);

        let parts = parse_currency_parts(dec("1000000000000000000000000000000.5"), false).unwrap();
        assert_eq!(parts.major, 10u128.pow(30));
        assert_eq!(parts.minor, 50);

        let tiny = format!("-0.{}1", "0".repeat(60));
        let parts = parse_currency_parts(dec(&tiny), false).unwrap();
        assert_eq!((parts.major, parts.minor), (0, 0));
        assert!(!parts.negative);
    }

    #[test]
    fn test_prefix_currency() {
        let unit = UnitForms::new("долар", "долари", Form::Masculine);
        let [one, many] = prefix_currency("американски", &unit);
        assert_eq!(one, "американски долар");
        assert_eq!(many, "американски долари");
    }
}
