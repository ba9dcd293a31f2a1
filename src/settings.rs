//! User display settings
//!
//! Settings are persisted elsewhere; the engine reads a snapshot on every
//! call and never writes them back.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Snapshot of the settings that affect amount display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Include fiat in the unit cycle
    pub fiat_enabled: bool,
    /// Active fiat currency code (e.g. "USD")
    pub fiat_currency: Option<String>,
    /// Always render BTC with all 8 decimals
    pub show_all_decimal_places: bool,
    /// BCP 47 locale tag of the user interface
    pub locale: String,
    /// Group the whole-BTC part once it reaches 1,000
    pub group_btc_whole_part: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            fiat_enabled: false,
            fiat_currency: None,
            show_all_decimal_places: false,
            locale: "en-US".to_string(),
            group_btc_whole_part: true,
        }
    }
}

impl DisplaySettings {
    /// Settings with fiat enabled for `code`
    pub fn with_fiat(code: impl Into<String>) -> Self {
        Self {
            fiat_enabled: true,
            fiat_currency: Some(code.into()),
            ..Self::default()
        }
    }

    /// Active fiat code, treating an empty string as unset
    pub fn active_fiat(&self) -> Option<&str> {
        self.fiat_currency
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

/// Source of the current settings snapshot
pub trait SettingsProvider {
    fn settings(&self) -> DisplaySettings;
}

impl SettingsProvider for DisplaySettings {
    fn settings(&self) -> DisplaySettings {
        self.clone()
    }
}

/// Settings that another part of the app may change at runtime
impl SettingsProvider for RwLock<DisplaySettings> {
    fn settings(&self) -> DisplaySettings {
        self.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl<P: SettingsProvider + ?Sized> SettingsProvider for Arc<P> {
    fn settings(&self) -> DisplaySettings {
        (**self).settings()
    }
}
