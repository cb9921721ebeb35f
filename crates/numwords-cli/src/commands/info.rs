//! Info command implementation.

use numwords_mk::{CURRENCY_CODES, MAX_VALUE};

/// Run the info command.
pub fn run() {
    println!("numwords");
    println!("========");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Languages:");
    println!("  mk: Macedonian");
    println!();
    println!("Limits:");
    println!("  Cardinals: |n| < {MAX_VALUE}");
    println!("  Ordinals:  thousandths and millionths are the largest ordinal scales");
    println!();
    println!("Currencies: {}", CURRENCY_CODES.join(", "));
    println!();
    println!("Crates:");
    println!("  numwords-core: Core types, traits, and errors");
    println!("  numwords-mk: Macedonian tables and renderers");
    println!("  numwords-cli: This CLI tool");
}
