//! Unified error types for number spelling.

use crate::types::Number;

/// Main error type for conversion operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Value is too large for the converter's scale table.
    #[error("abs({value}) must be less than {max}")]
    Overflow { value: String, max: u128 },

    /// Currency code has no forms in the converter.
    #[error("currency code \"{code}\" not implemented for \"{converter}\"")]
    CurrencyNotImplemented { code: String, converter: &'static str },

    /// The significant chunk of an ordinal sits on a scale with no ordinal form.
    #[error("ordinal of {value} is not supported: no ordinal form for scale 10^{}", .scale * 3)]
    UnsupportedOrdinalScale { value: Number, scale: usize },

    /// Negative numbers have no ordinal form.
    #[error("cannot treat negative num {0} as ordinal")]
    NegativeOrdinal(Number),

    /// Non-integers have no ordinal form.
    #[error("cannot treat float {0} as ordinal")]
    FractionalOrdinal(Number),

    /// Input could not be interpreted as an integer or decimal.
    #[error("invalid number: {0}")]
    InvalidNumber(String),

    /// Unknown grammatical form code.
    #[error("invalid form: {0}")]
    InvalidForm(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an overflow error for `value` against the limit `max`.
    pub fn overflow(value: impl std::fmt::Display, max: u128) -> Self {
        Self::Overflow {
            value: value.to_string(),
            max,
        }
    }

    /// Create an unsupported-currency error.
    pub fn currency_not_implemented(code: impl Into<String>, converter: &'static str) -> Self {
        Self::CurrencyNotImplemented {
            code: code.into(),
            converter,
        }
    }

    /// Create an invalid number error with message.
    pub fn invalid_number(msg: impl Into<String>) -> Self {
        Self::InvalidNumber(msg.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
