//! Fiat rate and symbol lookups
//!
//! The engine never fetches or refreshes rates. It asks a [`RateProvider`]
//! for whatever table is currently loaded; a missing table means "not
//! available yet", which is different from a loaded table that lacks a code.

pub mod symbols;
pub mod table;

use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::types::LocaleSymbolRule;

pub use symbols::SymbolCatalog;
pub use table::RateTable;

/// Read-only access to the current rate table and symbol rules
pub trait RateProvider {
    /// The loaded table, or `None` when rates are unavailable
    fn rates(&self) -> Option<Arc<RateTable>>;

    /// Layout rule for `code`, or `None` when the provider has none
    fn symbol_rule_for(&self, code: &str) -> Option<LocaleSymbolRule>;
}

/// In-memory provider whose table can be swapped out by a refresher
#[derive(Debug, Default)]
pub struct StaticRates {
    table: RwLock<Option<Arc<RateTable>>>,
    symbols: SymbolCatalog,
}

impl StaticRates {
    /// Provider with no table loaded yet
    pub fn new(symbols: SymbolCatalog) -> Self {
        Self {
            table: RwLock::new(None),
            symbols,
        }
    }

    pub fn with_table(symbols: SymbolCatalog, table: RateTable) -> Self {
        Self {
            table: RwLock::new(Some(Arc::new(table))),
            symbols,
        }
    }

    /// Install a freshly loaded table; readers holding the old one keep it
    pub fn replace(&self, table: RateTable) {
        debug!("Replacing rate table ({} currencies)", table.len());
        let mut guard = self.table.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(Arc::new(table));
    }

    /// Mark rates as unavailable (e.g. after a failed fetch)
    pub fn clear(&self) {
        let mut guard = self.table.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    pub fn symbols(&self) -> &SymbolCatalog {
        &self.symbols
    }
}

impl RateProvider for StaticRates {
    fn rates(&self) -> Option<Arc<RateTable>> {
        self.table
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn symbol_rule_for(&self, code: &str) -> Option<LocaleSymbolRule> {
        self.symbols.get(code).cloned()
    }
}

impl<P: RateProvider + ?Sized> RateProvider for &P {
    fn rates(&self) -> Option<Arc<RateTable>> {
        (**self).rates()
    }

    fn symbol_rule_for(&self, code: &str) -> Option<LocaleSymbolRule> {
        (**self).symbol_rule_for(code)
    }
}

impl<P: RateProvider + ?Sized> RateProvider for Arc<P> {
    fn rates(&self) -> Option<Arc<RateTable>> {
        (**self).rates()
    }

    fn symbol_rule_for(&self, code: &str) -> Option<LocaleSymbolRule> {
        (**self).symbol_rule_for(code)
    }
}
