//! Bitcoin wallet unit conversion and amount display
//!
//! Converts satoshi amounts into sats, BTC or fiat and renders them with the
//! grouping, decimal marks and symbol placement of the user's currency.

pub mod cli;
pub mod config;
pub mod errors;
pub mod rates;
pub mod settings;
pub mod types;
pub mod units;
pub mod utils;

pub use errors::{AppError, AppResult, DisplayError};
pub use settings::{DisplaySettings, SettingsProvider};
pub use types::{AmountDisplay, DisplayDescriptor, DisplayUnit, Sats};
pub use units::UnitsEngine;
