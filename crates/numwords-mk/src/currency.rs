//! Macedonian currency forms.

use numwords_core::{CurrencyForms, Form, UnitForms};

static MKD: CurrencyForms = CurrencyForms {
    major: UnitForms::new("денар", "денари", Form::Masculine),
    minor: UnitForms::new("ден", "дени", Form::Masculine),
};

static EUR: CurrencyForms = CurrencyForms {
    major: UnitForms::new("евро", "евра", Form::Neuter),
    minor: UnitForms::new("цент", "центи", Form::Masculine),
};

static USD: CurrencyForms = CurrencyForms {
    major: UnitForms::new("долар", "долари", Form::Masculine),
    minor: UnitForms::new("цент", "центи", Form::Masculine),
};

/// Supported currency codes.
pub const CURRENCY_CODES: [&str; 3] = ["MKD", "EUR", "USD"];

/// Look up the unit forms of a currency code.
pub fn currency_forms(code: &str) -> Option<&'static CurrencyForms> {
    match code {
        "MKD" => Some(&MKD),
        "EUR" => Some(&EUR),
        "USD" => Some(&USD),
        _ => None,
    }
}

/// Adjective naming the issuing country, where the major unit takes one.
pub fn currency_adjective(code: &str) -> Option<&'static str> {
    match code {
        "MKD" => Some("македонски"),
        "USD" => Some("американски"),
        _ => None,
    }
}
