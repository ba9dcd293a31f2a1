use clap::Args;
use serde_json::json;
use tracing::info;

use super::{parse_format, EngineArgs, OutputFormat};
use crate::errors::AppResult;
use crate::types::{DisplayDescriptor, DisplayUnit, Sats};

#[derive(Args)]
pub struct ShowCommand {
    /// Amount in whole satoshis (may be negative)
    #[arg(allow_hyphen_values = true)]
    amount: String,

    /// Force a unit (sats, btc, fiat) without changing the active one
    #[arg(long)]
    unit: Option<DisplayUnit>,

    /// Cycle the active unit this many times first, like tapping the amount
    #[arg(long, default_value_t = 0)]
    cycle: usize,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    format: String,

    #[command(flatten)]
    engine: EngineArgs,
}

impl ShowCommand {
    pub fn run(&self) -> AppResult<()> {
        let amount: Sats = self.amount.parse()?;
        let mut engine = self.engine.build_engine()?;

        for _ in 0..self.cycle {
            engine.cycle_unit();
        }
        info!(
            "Showing {} sats (active unit: {}, override: {:?})",
            amount,
            engine.active_unit(),
            self.unit
        );

        match parse_format(&self.format) {
            OutputFormat::Console => {
                println!("{}", engine.get_display_string(amount, self.unit));
            }
            OutputFormat::Json => {
                let descriptor = engine.get_display(amount, self.unit);
                println!("{}", serde_json::to_string_pretty(&descriptor_json(&descriptor))?);
            }
        }
        Ok(())
    }
}

/// JSON shape of a descriptor: the display fields, or `{"errorMessage": ...}`
pub fn descriptor_json(descriptor: &DisplayDescriptor) -> serde_json::Value {
    match descriptor {
        Ok(display) => {
            let mut value = json!(display);
            value["rendered"] = json!(display.render());
            value
        }
        Err(err) => json!({ "errorMessage": err.to_string() }),
    }
}
