//! Display units
//!
//! A wallet shows every amount in exactly one of three units. Tapping an
//! amount walks the units in a fixed order; fiat only takes part in the
//! cycle when fiat display is enabled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::UnitParseError;

/// Unit an amount is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    /// Whole satoshis, grouped ("1,234 sats")
    #[default]
    Satoshis,
    /// Bitcoin with up to 8 decimal places ("₿0.00001234")
    Bitcoin,
    /// The configured fiat currency at the current rate
    Fiat,
}

impl DisplayUnit {
    /// Unit that follows `self` in the cycle.
    ///
    /// With fiat disabled the cycle is sats <-> BTC; a `Fiat` starting point
    /// (left over from before fiat was switched off) falls back to sats.
    pub fn next(self, fiat_enabled: bool) -> Self {
        match (self, fiat_enabled) {
            (DisplayUnit::Satoshis, _) => DisplayUnit::Bitcoin,
            (DisplayUnit::Bitcoin, true) => DisplayUnit::Fiat,
            (DisplayUnit::Bitcoin, false) => DisplayUnit::Satoshis,
            (DisplayUnit::Fiat, _) => DisplayUnit::Satoshis,
        }
    }

    /// Short lowercase name, also accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Satoshis => "sats",
            DisplayUnit::Bitcoin => "btc",
            DisplayUnit::Fiat => "fiat",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sats" | "sat" | "satoshis" => Ok(DisplayUnit::Satoshis),
            "btc" | "bitcoin" => Ok(DisplayUnit::Bitcoin),
            "fiat" => Ok(DisplayUnit::Fiat),
            _ => Err(UnitParseError(s.to_string())),
        }
    }
}
