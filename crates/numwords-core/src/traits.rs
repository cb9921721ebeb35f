//! Trait definitions for number-to-words converters.

use crate::config::{ConvertOptions, CurrencyOptions};
use crate::error::Result;
use crate::types::{ConversionKind, Form, Number};

/// A number-to-words converter for one language.
///
/// Implementations are stateless over static tables, so one instance can be
/// shared freely between threads.
pub trait NumberToWords: Send + Sync {
    /// Converter name, used in error messages.
    fn name(&self) -> &'static str;

    /// Spell out a cardinal number.
    ///
    /// # Arguments
    /// * `value` - Integer or decimal value
    /// * `form` - Gender the number agrees with
    fn to_cardinal(&self, value: Number, form: Form) -> Result<String>;

    /// Spell out an ordinal number.
    fn to_ordinal(&self, value: Number, form: Form) -> Result<String>;

    /// Digits followed by a hyphen and the last two letters of the ordinal word.
    fn to_ordinal_num(&self, value: Number, form: Form) -> Result<String> {
        let words = self.to_ordinal(value, form)?;
        let suffix: String = {
            let mut tail: Vec<char> = words.chars().rev().take(2).collect();
            tail.reverse();
            tail.into_iter().collect()
        };
        Ok(format!("{value}-{suffix}"))
    }

    /// Spell out a year.
    fn to_year(&self, value: Number) -> Result<String>;

    /// Spell out a currency amount.
    ///
    /// # Arguments
    /// * `value` - Amount in major units (or minor units, see
    ///   [`CurrencyOptions::int_with_cents`])
    /// * `code` - ISO 4217 currency code
    /// * `options` - Rendering options
    fn to_currency(&self, value: Number, code: &str, options: &CurrencyOptions) -> Result<String>;

    /// Run the conversion selected by `kind`.
    fn convert(&self, value: Number, kind: ConversionKind, options: &ConvertOptions) -> Result<String> {
        match kind {
            ConversionKind::Cardinal => self.to_cardinal(value, options.form),
            ConversionKind::Ordinal => self.to_ordinal(value, options.form),
            ConversionKind::OrdinalNum => self.to_ordinal_num(value, options.form),
            ConversionKind::Year => self.to_year(value),
            ConversionKind::Currency => {
                self.to_currency(value, &options.currency_code, &options.currency)
            }
        }
    }
}
