//! Currency symbol layout rules
//!
//! A small built-in catalog covers the common wallet currencies. Config can
//! add or replace entries; anything still unknown gets a rule derived from
//! the currency code and the user's locale.

use std::collections::HashMap;
use tracing::debug;

use crate::types::LocaleSymbolRule;

/// Languages that write `1.234,56`
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "cs", "da", "de", "es", "fi", "fr", "id", "it", "nb", "nl", "pl", "pt", "ro", "ru", "sv",
    "tr", "uk", "vi",
];

// (code, symbol, space, rtl, separator_swap)
const BUILTIN_RULES: &[(&str, &str, bool, bool, bool)] = &[
    ("USD", "$", false, false, false),
    ("EUR", "€", true, true, true),
    ("GBP", "£", false, false, false),
    ("JPY", "¥", false, false, false),
    ("CNY", "¥", false, false, false),
    ("CAD", "CA$", false, false, false),
    ("AUD", "A$", false, false, false),
    ("NZD", "NZ$", false, false, false),
    ("HKD", "HK$", false, false, false),
    ("CHF", "CHF", true, false, false),
    ("INR", "₹", false, false, false),
    ("KRW", "₩", false, false, false),
    ("MXN", "MX$", false, false, false),
    ("BRL", "R$", true, false, true),
    ("ARS", "$", true, false, true),
    ("ZAR", "R", true, false, false),
    ("NGN", "₦", false, false, false),
    ("RUB", "₽", true, true, true),
    ("TRY", "₺", false, false, true),
    ("PLN", "zł", true, true, true),
    ("CZK", "Kč", true, true, true),
    ("SEK", "kr", true, true, true),
    ("NOK", "kr", true, true, true),
    ("DKK", "kr.", true, true, true),
    ("IDR", "Rp", true, false, true),
    ("VND", "₫", true, true, true),
];

/// Whether a BCP 47 locale tag (`de-DE`, `pt_BR`, `en`) uses a comma as its
/// decimal mark
pub fn locale_uses_decimal_comma(locale: &str) -> bool {
    let language = locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();
    COMMA_DECIMAL_LANGUAGES.contains(&language.as_str())
}

/// Rule for a currency the catalog does not know: the code itself as the
/// symbol, separated by a space, with separators following the locale.
pub fn fallback_rule(code: &str, locale: &str) -> LocaleSymbolRule {
    LocaleSymbolRule::new(code, code)
        .with_space(true)
        .with_separator_swap(locale_uses_decimal_comma(locale))
}

/// Symbol rules keyed by currency code
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    rules: HashMap<String, LocaleSymbolRule>,
}

impl SymbolCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|&(code, symbol, space, rtl, swap)| {
                let rule = LocaleSymbolRule::new(code, symbol)
                    .with_space(space)
                    .with_rtl(rtl)
                    .with_separator_swap(swap);
                (code.to_string(), rule)
            })
            .collect();
        Self { rules }
    }

    /// Add or replace rules; later rules for the same code replace earlier ones
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = LocaleSymbolRule>,
    {
        for rule in overrides {
            debug!("Symbol override for {}: '{}'", rule.currency_code, rule.symbol);
            self.rules.insert(rule.currency_code.clone(), rule);
        }
        self
    }

    pub fn get(&self, code: &str) -> Option<&LocaleSymbolRule> {
        self.rules.get(code)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
