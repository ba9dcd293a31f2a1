use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::rates::SymbolCatalog;
use crate::settings::DisplaySettings;
use crate::types::LocaleSymbolRule;

/// Config file looked up in the working directory (any format the `config`
/// crate recognises, e.g. `wallet-units.toml`)
pub const CONFIG_FILE_STEM: &str = "wallet-units";

/// Application configuration loaded from wallet-units.toml or environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub rates: RatesConfig,
    /// Symbol rules layered over the built-in catalog
    #[serde(default)]
    pub symbols: Vec<LocaleSymbolRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesConfig {
    /// JSON (or `.toml`) rate table to load at startup
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from wallet-units.toml (if present) and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`AppConfig::load`], but reading an explicit (required) file
    /// instead of the optional default one
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = DisplaySettings::default();
        let builder = Config::builder()
            .set_default("display.fiat_enabled", defaults.fiat_enabled)?
            .set_default(
                "display.show_all_decimal_places",
                defaults.show_all_decimal_places,
            )?
            .set_default("display.locale", defaults.locale)?
            .set_default(
                "display.group_btc_whole_part",
                defaults.group_btc_whole_part,
            )?;

        let builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(CONFIG_FILE_STEM).required(false)),
        };

        // UNITS_DISPLAY__FIAT_CURRENCY=EUR overrides display.fiat_currency
        let config = builder
            .add_source(
                Environment::with_prefix("UNITS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Get config values, falling back to defaults when nothing loads
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Built-in symbols with this config's overrides applied
    pub fn symbol_catalog(&self) -> SymbolCatalog {
        SymbolCatalog::builtin().with_overrides(self.symbols.iter().cloned())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.symbols {
            if rule.currency_code.trim().is_empty() || rule.symbol.is_empty() {
                return Err(ConfigError::Message(format!(
                    "Symbol rule needs both a code and a symbol (got code '{}', symbol '{}')",
                    rule.currency_code, rule.symbol
                )));
            }
        }

        if self.display.fiat_enabled && self.display.active_fiat().is_none() {
            warn!("Fiat display is enabled but display.fiat_currency is not set");
        }
        Ok(())
    }
}
