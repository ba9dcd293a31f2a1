//! Rate table and locale symbol types
//!
//! Both are owned by the rate provider; the engine only reads them.

use serde::{Deserialize, Serialize};

/// One row of the fiat rate table: fiat units per 1 BTC
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiatRateEntry {
    #[serde(rename = "code")]
    pub currency_code: String,
    pub rate: f64,
}

impl FiatRateEntry {
    pub fn new(currency_code: impl Into<String>, rate: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            rate,
        }
    }
}

/// How a currency's symbol and separators are laid out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSymbolRule {
    #[serde(rename = "code")]
    pub currency_code: String,
    pub symbol: String,
    /// Insert a single space between symbol and amount
    #[serde(default, alias = "space")]
    pub space_before_symbol: bool,
    /// Place the symbol after the amount
    #[serde(default, alias = "rtl")]
    pub is_rtl: bool,
    /// Use `.` for grouping and `,` as the decimal mark
    #[serde(default)]
    pub separator_swap: bool,
}

impl LocaleSymbolRule {
    pub fn new(currency_code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into(),
            symbol: symbol.into(),
            space_before_symbol: false,
            is_rtl: false,
            separator_swap: false,
        }
    }

    pub fn with_space(mut self, space_before_symbol: bool) -> Self {
        self.space_before_symbol = space_before_symbol;
        self
    }

    pub fn with_rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    pub fn with_separator_swap(mut self, separator_swap: bool) -> Self {
        self.separator_swap = separator_swap;
        self
    }

    /// Attach the symbol to an already formatted, unsigned amount
    ///
    /// # Examples
    /// ```
    /// use wallet_units::types::LocaleSymbolRule;
    ///
    /// let pound = LocaleSymbolRule::new("XYZ", "£").with_rtl(true);
    /// assert_eq!(pound.attach("1,234.00"), "1,234.00£");
    ///
    /// let pound = LocaleSymbolRule::new("XYZ", "£").with_space(true);
    /// assert_eq!(pound.attach("1,234.00"), "£ 1,234.00");
    /// ```
    pub fn attach(&self, amount: &str) -> String {
        let space = if self.space_before_symbol { " " } else { "" };
        if self.is_rtl {
            format!("{}{}{}", amount, space, self.symbol)
        } else {
            format!("{}{}{}", self.symbol, space, amount)
        }
    }
}
