//! Configuration structures.

use crate::error::{Error, Result};
use crate::types::Form;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Currency rendering options.
    #[serde(default)]
    pub currency: CurrencyOptions,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loaded config file");
        Self::from_json_str(&content)
    }

    /// Check option values that serde cannot.
    ///
    /// An unknown `logging.format` is already rejected while deserializing.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(Error::config("logging level must not be empty"));
        }
        if self.currency.separator.contains(|c: char| c.is_ascii_digit()) {
            return Err(Error::config(format!(
                "currency separator must not contain digits: {:?}",
                self.currency.separator
            )));
        }
        Ok(())
    }
}

/// Options for currency conversion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CurrencyOptions {
    /// Spell minor units as words (otherwise digits).
    #[serde(default = "default_cents_as_words")]
    pub cents_as_words: bool,
    /// Text placed between the major and minor parts.
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Prefix the major unit with the currency adjective, when one exists.
    #[serde(default)]
    pub adjective: bool,
    /// Treat a bare integer amount as a count of minor units.
    #[serde(default)]
    pub int_with_cents: bool,
}

fn default_cents_as_words() -> bool {
    true
}

fn default_separator() -> String {
    ",".to_string()
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            cents_as_words: default_cents_as_words(),
            separator: default_separator(),
            adjective: false,
            int_with_cents: false,
        }
    }
}

/// Options for [`crate::NumberToWords::convert`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Grammatical form for cardinals and ordinals.
    #[serde(default)]
    pub form: Form,
    /// ISO 4217 code for currency conversion.
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
    /// Currency rendering options.
    #[serde(default)]
    pub currency: CurrencyOptions,
}

fn default_currency_code() -> String {
    "EUR".to_string()
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            form: Form::default(),
            currency_code: default_currency_code(),
            currency: CurrencyOptions::default(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text.
    #[default]
    #[serde(alias = "pretty")]
    Text,
    /// One JSON object per event.
    Json,
}
