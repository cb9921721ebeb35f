//! # numwords-core
//!
//! Core types, traits, and error definitions for the numwords converters.
//!
//! This crate provides the foundational abstractions used by the language
//! crates in the workspace, including:
//!
//! - Common data types (`Number`, `Form`, `ConversionKind`)
//! - The `NumberToWords` converter trait
//! - Unified error handling via `Error`
//! - Configuration structures
//! - Digit grouping and currency amount helpers

pub mod config;
pub mod currency;
pub mod digits;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{Config, ConvertOptions, CurrencyOptions, LogFormat, LoggingConfig};
pub use currency::{CurrencyForms, CurrencyParts, UnitForms};
pub use error::{Error, Result};
pub use traits::NumberToWords;
pub use types::{ConversionKind, Form, LongDecimal, Number};
