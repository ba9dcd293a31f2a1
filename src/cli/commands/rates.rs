use clap::Args;
use serde_json::json;

use super::{parse_format, EngineArgs, OutputFormat};
use crate::errors::{AppError, AppResult};
use crate::rates::symbols::fallback_rule;
use crate::rates::RateProvider;
use crate::settings::DisplaySettings;
use crate::types::DisplayUnit;
use crate::units::UnitsEngine;
use crate::utils::currency::SATS_PER_BTC;

#[derive(Args)]
pub struct RatesCommand {
    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    format: String,

    #[command(flatten)]
    engine: EngineArgs,
}

impl RatesCommand {
    pub fn run(&self) -> AppResult<()> {
        let engine = self.engine.build_engine()?;
        let settings = engine.settings_provider().clone();
        let provider = engine.rate_provider();

        let table = provider.rates().ok_or_else(|| {
            AppError::Config(
                "No rate table loaded. Use --rates or configure rates.file in wallet-units.toml"
                    .to_string(),
            )
        })?;

        let mut rows = Vec::with_capacity(table.len());
        for entry in table.entries() {
            let rule = provider
                .symbol_rule_for(&entry.currency_code)
                .unwrap_or_else(|| fallback_rule(&entry.currency_code, &settings.locale));

            // Render one BTC through an engine pinned to this currency
            let pinned = UnitsEngine::new(
                DisplaySettings {
                    fiat_currency: Some(entry.currency_code.clone()),
                    ..settings.clone()
                },
                provider,
            );
            let one_btc = pinned.get_display_string(SATS_PER_BTC as i64, Some(DisplayUnit::Fiat));
            rows.push((entry, rule, one_btc));
        }

        match parse_format(&self.format) {
            OutputFormat::Console => {
                println!("{:<6} {:>18}  {:<6} 1 BTC", "Code", "Rate", "Symbol");
                for (entry, rule, one_btc) in &rows {
                    println!(
                        "{:<6} {:>18.2}  {:<6} {}",
                        entry.currency_code, entry.rate, rule.symbol, one_btc
                    );
                }
            }
            OutputFormat::Json => {
                let value: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|(entry, rule, one_btc)| {
                        json!({
                            "code": entry.currency_code,
                            "rate": entry.rate,
                            "symbol": rule,
                            "oneBtc": one_btc,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        Ok(())
    }
}
