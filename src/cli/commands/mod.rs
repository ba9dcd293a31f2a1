pub mod rates;
pub mod show;

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::rates::{RateTable, StaticRates};
use crate::settings::DisplaySettings;
use crate::units::UnitsEngine;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Parse output format string to OutputFormat enum
pub fn parse_format(format_str: &str) -> OutputFormat {
    match format_str.to_lowercase().as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Console,
    }
}

/// Settings and rate sources shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Config file (defaults to ./wallet-units.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Rate table file, JSON array of {code, rate} or TOML [[rates]] (overrides config)
    #[arg(long)]
    pub rates: Option<PathBuf>,

    /// Fiat currency code; also enables fiat display (overrides config)
    #[arg(long)]
    pub fiat: Option<String>,

    /// Locale tag used for currencies without a symbol rule (overrides config)
    #[arg(long)]
    pub locale: Option<String>,

    /// Always show all 8 BTC decimal places
    #[arg(long)]
    pub show_all_decimals: bool,
}

impl EngineArgs {
    /// Load config and apply command-line overrides
    pub fn app_config(&self) -> AppResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(Some(path.as_path()))?,
            None => AppConfig::get_defaults(),
        };

        if let Some(code) = &self.fiat {
            config.display.fiat_enabled = true;
            config.display.fiat_currency = Some(code.to_uppercase());
        }
        if let Some(locale) = &self.locale {
            config.display.locale = locale.clone();
        }
        if self.show_all_decimals {
            config.display.show_all_decimal_places = true;
        }
        if let Some(rates) = &self.rates {
            config.rates.file = Some(rates.clone());
        }
        Ok(config)
    }

    /// Engine over the configured settings; without a rate file the rate
    /// table stays unavailable
    pub fn build_engine(&self) -> AppResult<UnitsEngine<DisplaySettings, StaticRates>> {
        let config = self.app_config()?;
        let provider = StaticRates::new(config.symbol_catalog());

        if let Some(path) = &config.rates.file {
            let table = RateTable::load_file(path)?;
            info!("Loaded {} rates from {}", table.len(), path.display());
            provider.replace(table);
        }

        Ok(UnitsEngine::new(config.display, provider))
    }
}
