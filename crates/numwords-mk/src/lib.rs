//! # numwords-mk
//!
//! Macedonian number spelling for the numwords converters.
//!
//! This crate provides table-driven conversion of numbers to Macedonian
//! words, handling:
//! - Cardinal numbers (integer and decimal), with gender agreement
//! - Ordinal numbers and digit-plus-suffix ordinals
//! - Years
//! - Currency amounts (MKD, EUR, USD)
//!
//! # Example
//!
//! ```
//! use numwords_core::{CurrencyOptions, Form, Number, NumberToWords};
//! use numwords_mk::Num2WordMk;
//!
//! let converter = Num2WordMk::new();
//! assert_eq!(converter.to_cardinal(Number::from(21), Form::Masculine).unwrap(), "дваесет и еден");
//! assert_eq!(converter.to_ordinal(Number::from(2), Form::Feminine).unwrap(), "втора");
//!
//! let amount: Number = "1.01".parse().unwrap();
//! let text = converter.to_currency(amount, "EUR", &CurrencyOptions::default()).unwrap();
//! assert_eq!(text, "едно евро, еден цент");
//! ```

mod cardinal;
mod currency;
mod ordinal;
pub mod tables;

use numwords_core::currency::{parse_currency_parts, prefix_currency};
use numwords_core::digits::chunks;
use numwords_core::{CurrencyOptions, Error, Form, Number, NumberToWords, Result};
use tracing::{debug, instrument};

pub use cardinal::{int_to_words, plural_class, pluralize};
pub use currency::{CURRENCY_CODES, currency_adjective, currency_forms};
pub use ordinal::chunk_to_ordinal;
pub use tables::MAX_VALUE;

use tables::{NEGWORD, ORDINAL_ZERO, POINTWORD, ZERO};

/// Macedonian number-to-words converter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Num2WordMk;

impl Num2WordMk {
    /// Create a new converter.
    pub fn new() -> Self {
        Self
    }

    /// Spell a whole magnitude, giving zero its own word.
    fn whole_to_words(n: u128, form: Form) -> Result<String> {
        if n == 0 {
            return Ok(ZERO.to_string());
        }
        int_to_words(n, form)
    }

    /// Spell a positive decimal with a fractional part.
    ///
    /// Leading zeros of the fraction are spoken, so `3.05` reads
    /// "три запирка нула пет".
    fn decimal_to_words(magnitude: Number, form: Form) -> Result<String> {
        let text = magnitude.to_string();
        let (left, right) = text
            .split_once('.')
            .ok_or_else(|| Error::invalid_number(text.clone()))?;

        let whole: u128 = left
            .parse()
            .map_err(|e| Error::invalid_number(format!("{text}: {e}")))?;
        if whole >= MAX_VALUE {
            debug!(%magnitude, max = %MAX_VALUE, "cardinal overflow");
            return Err(Error::overflow(magnitude, MAX_VALUE));
        }
        let fraction: u128 = right
            .parse()
            .map_err(|e| Error::invalid_number(format!("{text}: {e}")))?;
        let leading_zeros = right.len() - right.trim_start_matches('0').len();

        let mut words = vec![Self::whole_to_words(whole, form)?, POINTWORD.to_string()];
        words.extend(std::iter::repeat_n(ZERO.to_string(), leading_zeros));
        if fraction > 0 {
            words.push(int_to_words(fraction, form)?);
        }

        Ok(words.join(" "))
    }

    /// Check that `value` can take an ordinal form and return its magnitude.
    fn verify_ordinal(value: Number) -> Result<u128> {
        let Some(n) = value.as_integer() else {
            return Err(Error::FractionalOrdinal(value));
        };
        if n < 0 {
            return Err(Error::NegativeOrdinal(value));
        }

        let n = n.unsigned_abs();
        if n >= MAX_VALUE {
            return Err(Error::overflow(value, MAX_VALUE));
        }
        Ok(n)
    }
}

impl NumberToWords for Num2WordMk {
    fn name(&self) -> &'static str {
        "Num2WordMk"
    }

    #[instrument(level = "debug", skip(self))]
    fn to_cardinal(&self, value: Number, form: Form) -> Result<String> {
        let prefix = if value.is_negative() {
            format!("{NEGWORD} ")
        } else {
            String::new()
        };
        let magnitude = value.abs();

        let words = match magnitude.as_integer() {
            Some(n) => {
                let n = n.unsigned_abs();
                if n >= MAX_VALUE {
                    debug!(%magnitude, max = %MAX_VALUE, "cardinal overflow");
                    return Err(Error::overflow(magnitude, MAX_VALUE));
                }
                Self::whole_to_words(n, form)?
            }
            None => Self::decimal_to_words(magnitude, form)?,
        };

        Ok(prefix + &words)
    }

    #[instrument(level = "debug", skip(self))]
    fn to_ordinal(&self, value: Number, form: Form) -> Result<String> {
        let n = Self::verify_ordinal(value)?;
        if n == 0 {
            return Ok(ORDINAL_ZERO[form.index()].to_string());
        }

        let chunks = chunks(n);
        let last_idx = chunks.iter().rposition(|&c| c != 0).unwrap_or(0);
        let last_chunk = chunks[last_idx];
        let chunk_idx = chunks.len() - 1 - last_idx;
        debug!(?chunks, last_chunk, chunk_idx, "ordinal decomposition");

        let suffix = chunk_to_ordinal(last_chunk, chunk_idx, last_idx == 0, form).ok_or(
            Error::UnsupportedOrdinalScale {
                value,
                scale: chunk_idx,
            },
        )?;

        // Everything above the significant chunk reads as a masculine cardinal.
        let prefix_value = n - u128::from(last_chunk) * 1000u128.pow(chunk_idx as u32);
        if prefix_value == 0 {
            return Ok(suffix);
        }
        let prefix = int_to_words(prefix_value, Form::Masculine)?;

        Ok(format!("{prefix} {suffix}"))
    }

    #[instrument(level = "debug", skip(self))]
    fn to_year(&self, value: Number) -> Result<String> {
        self.to_ordinal(value, Form::Feminine)
    }

    #[instrument(level = "debug", skip(self, options))]
    fn to_currency(&self, value: Number, code: &str, options: &CurrencyOptions) -> Result<String> {
        let Some(forms) = currency_forms(code) else {
            debug!(code, "unsupported currency");
            return Err(Error::currency_not_implemented(code, self.name()));
        };
        let parts = parse_currency_parts(value, options.int_with_cents)?;

        let major_nouns = match currency_adjective(code) {
            Some(adjective) if options.adjective => prefix_currency(adjective, &forms.major),
            _ => forms.major.nouns(),
        };
        let minor_nouns = forms.minor.nouns();

        let major_words = Self::whole_to_words(parts.major, forms.major.gender)?;
        let minor_words = if options.cents_as_words {
            Self::whole_to_words(u128::from(parts.minor), forms.minor.gender)?
        } else {
            parts.minor.to_string()
        };
        let minus = if parts.negative {
            format!("{NEGWORD} ")
        } else {
            String::new()
        };

        Ok(format!(
            "{minus}{major_words} {}{} {minor_words} {}",
            pluralize(parts.major, &major_nouns),
            options.separator,
            pluralize(u128::from(parts.minor), &minor_nouns),
        ))
    }
}
