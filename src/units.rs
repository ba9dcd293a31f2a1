//! Unit conversion and display
//!
//! [`UnitsEngine`] owns the active display unit and turns satoshi amounts
//! into [`DisplayDescriptor`]s for whichever unit is active (or forced by the
//! caller). Settings and rates are read through their providers on every
//! call; formatting never changes the active unit.
//!
//! Mutating calls take `&mut self`. An engine shared between threads goes
//! behind a single `Mutex`; formatting through `&self` needs nothing more.

use tracing::{debug, warn};

use crate::errors::DisplayError;
use crate::rates::symbols::fallback_rule;
use crate::rates::RateProvider;
use crate::settings::{DisplaySettings, SettingsProvider};
use crate::types::{
    AmountDisplay, DisplayDescriptor, DisplayUnit, Sats, BTC_SYMBOL, FIAT_PLACEHOLDER,
};
use crate::utils::currency::{
    sats_to_btc_string, sats_to_fiat_string, BTC_DECIMALS, FIAT_DECIMALS, SATS_PER_BTC,
};
use crate::utils::grouping::{group, group_with, Separators};

/// Whole-BTC amounts from here on are digit-grouped (when enabled)
const BTC_GROUPING_THRESHOLD_SATS: u64 = 1_000 * SATS_PER_BTC;

/// Converts and formats amounts in the active display unit
#[derive(Debug)]
pub struct UnitsEngine<S, R> {
    settings: S,
    rates: R,
    active_unit: DisplayUnit,
}

impl<S, R> UnitsEngine<S, R>
where
    S: SettingsProvider,
    R: RateProvider,
{
    /// New engine starting in sats
    pub fn new(settings: S, rates: R) -> Self {
        Self {
            settings,
            rates,
            active_unit: DisplayUnit::Satoshis,
        }
    }

    pub fn active_unit(&self) -> DisplayUnit {
        self.active_unit
    }

    pub fn settings_provider(&self) -> &S {
        &self.settings
    }

    pub fn rate_provider(&self) -> &R {
        &self.rates
    }

    /// Advance to the next unit: sats -> BTC -> fiat -> sats, or
    /// sats <-> BTC when fiat is disabled. Returns the new unit.
    pub fn cycle_unit(&mut self) -> DisplayUnit {
        let fiat_enabled = self.settings.settings().fiat_enabled;
        let next = self.active_unit.next(fiat_enabled);
        debug!(
            "Display unit {} -> {} (fiat enabled: {})",
            self.active_unit, next, fiat_enabled
        );
        self.active_unit = next;
        next
    }

    /// Back to sats regardless of previous cycling
    pub fn reset_unit(&mut self) {
        debug!("Display unit reset to {}", DisplayUnit::Satoshis);
        self.active_unit = DisplayUnit::Satoshis;
    }

    /// Describe `amount` in `override_unit`, or the active unit when `None`.
    ///
    /// Rate problems come back as `Err(DisplayError)`; nothing here panics.
    pub fn get_display(
        &self,
        amount: impl Into<Sats>,
        override_unit: Option<DisplayUnit>,
    ) -> DisplayDescriptor {
        let amount = amount.into();
        let settings = self.settings.settings();
        let unit = override_unit.unwrap_or(self.active_unit);
        let magnitude = amount.unsigned_abs();

        match unit {
            DisplayUnit::Bitcoin => Ok(btc_display(amount, magnitude, &settings)),
            DisplayUnit::Satoshis => Ok(sats_display(amount, magnitude)),
            DisplayUnit::Fiat => self.fiat_display(amount, magnitude, &settings),
        }
    }

    /// Single-string rendering of [`Self::get_display`]; fiat errors become
    /// [`FIAT_PLACEHOLDER`].
    pub fn get_display_string(
        &self,
        amount: impl Into<Sats>,
        override_unit: Option<DisplayUnit>,
    ) -> String {
        match self.get_display(amount, override_unit) {
            Ok(display) => display.render(),
            Err(err) => {
                debug!("Rendering placeholder for unavailable amount: {}", err);
                FIAT_PLACEHOLDER.to_string()
            }
        }
    }

    fn fiat_display(
        &self,
        amount: Sats,
        magnitude: u64,
        settings: &DisplaySettings,
    ) -> DisplayDescriptor {
        let code = settings.active_fiat().ok_or(DisplayError::FiatDisabled)?;

        let table = self.rates.rates().ok_or_else(|| {
            warn!("Fiat rates not loaded; cannot display {} amount", code);
            DisplayError::RateUnavailable
        })?;

        // A zero or garbage rate is as good as no rate
        let rate = table
            .rate_for(code)
            .filter(|rate| rate.is_finite() && *rate > 0.0)
            .ok_or_else(|| DisplayError::CurrencyNotFound {
                code: code.to_string(),
            })?;

        let rule = self
            .rates
            .symbol_rule_for(code)
            .unwrap_or_else(|| fallback_rule(code, &settings.locale));

        let fiat_amount = sats_to_fiat_string(magnitude, rate);
        let amount_text = group_with(
            &fiat_amount,
            FIAT_DECIMALS,
            Separators::for_swap(rule.separator_swap),
        );

        Ok(AmountDisplay {
            amount_text,
            unit: DisplayUnit::Fiat,
            currency_symbol: Some(rule.symbol),
            is_negative: amount.is_negative(),
            is_plural: false,
            is_rtl: rule.is_rtl,
            use_space_before_symbol: rule.space_before_symbol,
        })
    }
}

fn btc_display(amount: Sats, magnitude: u64, settings: &DisplaySettings) -> AmountDisplay {
    let plain = sats_to_btc_string(magnitude, settings.show_all_decimal_places);
    let amount_text =
        if settings.group_btc_whole_part && magnitude >= BTC_GROUPING_THRESHOLD_SATS {
            group(&plain, BTC_DECIMALS)
        } else {
            plain
        };

    AmountDisplay {
        amount_text,
        unit: DisplayUnit::Bitcoin,
        currency_symbol: Some(BTC_SYMBOL.to_string()),
        is_negative: amount.is_negative(),
        is_plural: false,
        is_rtl: false,
        use_space_before_symbol: false,
    }
}

fn sats_display(amount: Sats, magnitude: u64) -> AmountDisplay {
    AmountDisplay {
        amount_text: group(&magnitude.to_string(), 0),
        unit: DisplayUnit::Satoshis,
        currency_symbol: None,
        is_negative: amount.is_negative(),
        is_plural: magnitude != 1,
        is_rtl: false,
        use_space_before_symbol: false,
    }
}
