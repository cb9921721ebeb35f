//! Conversion command implementation.

use anyhow::{Context, Result};
use numwords_core::{ConversionKind, ConvertOptions, Number, NumberToWords};
use numwords_mk::Num2WordMk;
use tracing::debug;

/// Run one conversion and print the words.
pub fn run(input: &str, kind: ConversionKind, options: &ConvertOptions) -> Result<()> {
    let words = convert(input, kind, options)?;
    println!("{words}");
    Ok(())
}

/// Parse `input` and convert it.
pub fn convert(input: &str, kind: ConversionKind, options: &ConvertOptions) -> Result<String> {
    let value: Number = input
        .parse()
        .with_context(|| format!("cannot read {input:?} as a number"))?;
    debug!(%value, %kind, form = %options.form, "converting");

    let words = Num2WordMk::new()
        .convert(value, kind, options)
        .with_context(|| format!("{kind} conversion of {value} failed"))?;
    Ok(words)
}
