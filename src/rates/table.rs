use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::types::FiatRateEntry;

/// Fiat rates keyed by currency code, built once per table load.
///
/// Rate feeds occasionally repeat a code; the first entry for a code is the
/// one kept and later duplicates are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, f64>,
    /// Codes in first-seen order, for listing
    order: Vec<String>,
}

/// TOML rate files wrap the entries in a `rates` array
#[derive(Deserialize)]
struct RateFile {
    rates: Vec<FiatRateEntry>,
}

impl RateTable {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = FiatRateEntry>,
    {
        let mut table = RateTable::default();
        for entry in entries {
            if table.rates.contains_key(&entry.currency_code) {
                warn!(
                    "Ignoring duplicate rate for {} ({}); keeping first entry",
                    entry.currency_code, entry.rate
                );
                continue;
            }
            table.order.push(entry.currency_code.clone());
            table.rates.insert(entry.currency_code, entry.rate);
        }
        debug!("Built rate table with {} currencies", table.len());
        table
    }

    /// Parse a JSON array of `{code, rate}` entries
    pub fn from_json(json: &str) -> AppResult<Self> {
        let entries: Vec<FiatRateEntry> = serde_json::from_str(json)
            .map_err(|e| AppError::RateTable(format!("JSON error: {}", e)))?;
        Ok(Self::from_entries(entries))
    }

    /// Parse a TOML document with a `[[rates]]` array
    pub fn from_toml(text: &str) -> AppResult<Self> {
        let file: RateFile = toml::from_str(text)?;
        Ok(Self::from_entries(file.rates))
    }

    /// Load a rate file, choosing the parser from the extension (`.toml`,
    /// anything else is read as JSON)
    pub fn load_file(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let table = if is_toml {
            Self::from_toml(&text)?
        } else {
            Self::from_json(&text)?
        };

        if table.is_empty() {
            return Err(AppError::RateTable(format!(
                "{} contains no rates",
                path.display()
            )));
        }
        Ok(table)
    }

    /// Fiat units per BTC for `code`
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> impl Iterator<Item = FiatRateEntry> + '_ {
        self.order
            .iter()
            .filter_map(|code| self.rate_for(code).map(|rate| FiatRateEntry::new(code, rate)))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
