//! Display descriptors
//!
//! The engine hands renderers a structured description of an amount rather
//! than a finished string, so a view can style the symbol, sign and unit
//! label separately. [`AmountDisplay::render`] produces the single-string form.

use serde::Serialize;
use std::fmt;

use super::DisplayUnit;
use crate::errors::DisplayError;

/// Symbol shown in front of BTC amounts
pub const BTC_SYMBOL: &str = "₿";

/// Rendered in place of a fiat amount that cannot be computed
pub const FIAT_PLACEHOLDER: &str = "$N/A";

/// A successfully formatted amount.
///
/// `amount_text` is always the unsigned magnitude; the sign lives only in
/// `is_negative` and is re-attached by [`AmountDisplay::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountDisplay {
    pub amount_text: String,
    pub unit: DisplayUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_symbol: Option<String>,
    pub is_negative: bool,
    /// Only meaningful for sats; always false for BTC and fiat
    pub is_plural: bool,
    pub is_rtl: bool,
    pub use_space_before_symbol: bool,
}

/// Outcome of a display request: a formatted amount or a recoverable error
pub type DisplayDescriptor = Result<AmountDisplay, DisplayError>;

impl AmountDisplay {
    /// Unit label appended to sats amounts
    pub fn unit_label(&self) -> Option<&'static str> {
        match self.unit {
            DisplayUnit::Satoshis if self.is_plural => Some("sats"),
            DisplayUnit::Satoshis => Some("sat"),
            _ => None,
        }
    }

    /// Render to a single string with one leading `-` for negative amounts.
    ///
    /// # Examples
    /// ```
    /// use wallet_units::types::{AmountDisplay, DisplayUnit};
    ///
    /// let display = AmountDisplay {
    ///     amount_text: "1,500".to_string(),
    ///     unit: DisplayUnit::Satoshis,
    ///     currency_symbol: None,
    ///     is_negative: true,
    ///     is_plural: true,
    ///     is_rtl: false,
    ///     use_space_before_symbol: false,
    /// };
    /// assert_eq!(display.render(), "-1,500 sats");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.is_negative {
            out.push('-');
        }

        let space = if self.use_space_before_symbol { " " } else { "" };
        match &self.currency_symbol {
            Some(symbol) if self.is_rtl => {
                out.push_str(&self.amount_text);
                out.push_str(space);
                out.push_str(symbol);
            }
            Some(symbol) => {
                out.push_str(symbol);
                out.push_str(space);
                out.push_str(&self.amount_text);
            }
            None => out.push_str(&self.amount_text),
        }

        if let Some(label) = self.unit_label() {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

impl fmt::Display for AmountDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
