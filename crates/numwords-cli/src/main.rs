//! numwords command-line interface.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use numwords_core::{Config, ConversionKind, ConvertOptions, Form, LogFormat};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;

/// Spell numbers out as Macedonian words
#[derive(Debug, Parser)]
#[command(name = "numwords")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (defaults to the config file value, then "warn")
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Log format (json or text)
    #[arg(long, global = true)]
    log_format: Option<LogFormatArg>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Json,
    Text,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Text => LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormArg {
    #[value(alias = "m")]
    Masculine,
    #[value(alias = "f")]
    Feminine,
    #[value(alias = "n")]
    Neuter,
    #[value(alias = "p")]
    Plural,
}

impl From<FormArg> for Form {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Masculine => Form::Masculine,
            FormArg::Feminine => Form::Feminine,
            FormArg::Neuter => Form::Neuter,
            FormArg::Plural => Form::Plural,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Spell out a cardinal number (integer or decimal)
    Cardinal {
        /// Number to convert; a comma may be used as the decimal separator
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Grammatical gender
        #[arg(short, long, default_value = "masculine")]
        form: FormArg,
    },

    /// Spell out an ordinal number
    Ordinal {
        /// Non-negative integer
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Grammatical form
        #[arg(short, long, default_value = "masculine")]
        form: FormArg,
    },

    /// Print digits with the ordinal suffix (e.g. 21-рв)
    OrdinalNum {
        /// Non-negative integer
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Grammatical form
        #[arg(short, long, default_value = "masculine")]
        form: FormArg,
    },

    /// Spell out a year
    Year {
        /// Year number
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Spell out a currency amount
    Currency {
        /// Amount in whole units, e.g. 12.50
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// ISO 4217 currency code
        #[arg(long, default_value = "EUR")]
        code: String,

        /// Print minor units as digits
        #[arg(long)]
        terse_cents: bool,

        /// Text between the major and minor parts
        #[arg(long)]
        separator: Option<String>,

        /// Prefix the currency adjective
        #[arg(long)]
        adjective: bool,

        /// Read a bare integer amount as minor units
        #[arg(long)]
        int_with_cents: bool,
    },

    /// Show version and supported ranges
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let format = cli.log_format.map_or(config.logging.format, LogFormat::from);
    init_tracing(level, format);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting numwords CLI");

    let mut options = ConvertOptions {
        currency: config.currency.clone(),
        ..ConvertOptions::default()
    };

    let (value, kind) = match cli.command {
        Commands::Cardinal { value, form } => {
            options.form = form.into();
            (value, ConversionKind::Cardinal)
        }
        Commands::Ordinal { value, form } => {
            options.form = form.into();
            (value, ConversionKind::Ordinal)
        }
        Commands::OrdinalNum { value, form } => {
            options.form = form.into();
            (value, ConversionKind::OrdinalNum)
        }
        Commands::Year { value } => (value, ConversionKind::Year),
        Commands::Currency {
            value,
            code,
            terse_cents,
            separator,
            adjective,
            int_with_cents,
        } => {
            options.currency_code = code;
            options.currency.cents_as_words &= !terse_cents;
            options.currency.adjective |= adjective;
            options.currency.int_with_cents |= int_with_cents;
            if let Some(separator) = separator {
                options.currency.separator = separator;
            }
            (value, ConversionKind::Currency)
        }
        Commands::Info => {
            commands::info::run();
            return Ok(());
        }
    };

    commands::convert::run(&value, kind, &options).context("conversion failed")?;

    Ok(())
}

/// Install the global subscriber.
///
/// Logs go to stderr so that converted text on stdout stays clean.
/// `RUST_LOG` takes precedence over `level` when set.
fn init_tracing(level: &str, format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let _ = match format {
        LogFormat::Text => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
