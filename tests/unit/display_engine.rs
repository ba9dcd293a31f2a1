//! Display descriptors and rendered strings for all three units

use wallet_units::rates::{StaticRates, SymbolCatalog};
use wallet_units::types::{LocaleSymbolRule, FIAT_PLACEHOLDER};
use wallet_units::{DisplayError, DisplaySettings, DisplayUnit, Sats, UnitsEngine};

use crate::common::{engine_with, engine_without_rates, sample_rates};

/// Parse a BTC amount text back into satoshis without going through f64
fn btc_text_to_sats(text: &str) -> u64 {
    let plain: String = text.chars().filter(|c| *c != ',').collect();
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
    assert!(fraction.len() <= 8, "too many decimals in {}", text);
    let padded = format!("{:0<8}", fraction);
    whole.parse::<u64>().unwrap() * 100_000_000 + padded.parse::<u64>().unwrap()
}

#[test]
fn test_btc_round_trip() {
    let samples: [i64; 9] = [
        0,
        1,
        99,
        5_471,
        100_000_000,
        150_000_000,
        123_456_789_012,
        2_100_000_000_000_000,
        i64::MAX,
    ];
    for show_all in [false, true] {
        let engine = engine_with(DisplaySettings {
            show_all_decimal_places: show_all,
            ..DisplaySettings::default()
        });
        for sats in samples {
            let display = engine.get_display(sats, Some(DisplayUnit::Bitcoin)).unwrap();
            assert_eq!(
                btc_text_to_sats(&display.amount_text),
                sats as u64,
                "round trip of {} (show_all={})",
                sats,
                show_all
            );
        }
    }
}

#[test]
fn test_btc_decimal_places_setting() {
    let trimmed = engine_with(DisplaySettings::default());
    let full = engine_with(DisplaySettings {
        show_all_decimal_places: true,
        ..DisplaySettings::default()
    });

    let amount = 150_000_000i64;
    assert_eq!(
        trimmed.get_display(amount, Some(DisplayUnit::Bitcoin)).unwrap().amount_text,
        "1.5"
    );
    assert_eq!(
        full.get_display(amount, Some(DisplayUnit::Bitcoin)).unwrap().amount_text,
        "1.50000000"
    );
    assert_eq!(trimmed.get_display_string(0i64, Some(DisplayUnit::Bitcoin)), "₿0");
}

#[test]
fn test_btc_grouping_from_one_thousand() {
    let engine = engine_with(DisplaySettings::default());
    assert_eq!(
        engine.get_display_string(150_000_000_000i64, Some(DisplayUnit::Bitcoin)),
        "₿1,500"
    );
    assert_eq!(
        engine.get_display_string(99_950_000_000i64, Some(DisplayUnit::Bitcoin)),
        "₿999.5"
    );
}

#[test]
fn test_negative_btc_has_single_separate_sign() {
    let engine = engine_with(DisplaySettings::default());
    let display = engine
        .get_display(-150_000_000i64, Some(DisplayUnit::Bitcoin))
        .unwrap();
    assert!(display.is_negative);
    assert_eq!(display.amount_text, "1.5");
    assert!(!display.amount_text.contains('-'));

    let rendered = display.render();
    assert_eq!(rendered, "-₿1.5");
    assert_eq!(rendered.matches('-').count(), 1);
}

#[test]
fn test_sats_plurality() {
    let engine = engine_with(DisplaySettings::default());
    assert!(!engine.get_display(1i64, Some(DisplayUnit::Satoshis)).unwrap().is_plural);
    assert!(!engine.get_display(-1i64, Some(DisplayUnit::Satoshis)).unwrap().is_plural);
    assert!(engine.get_display(2i64, Some(DisplayUnit::Satoshis)).unwrap().is_plural);

    assert_eq!(engine.get_display_string(1i64, None), "1 sat");
    assert_eq!(engine.get_display_string(-1i64, None), "-1 sat");
    assert_eq!(engine.get_display_string(2i64, None), "2 sats");
}

#[test]
fn test_sats_grouping_and_sign() {
    let engine = engine_with(DisplaySettings::default());
    assert_eq!(engine.get_display_string(1_234_567i64, None), "1,234,567 sats");
    assert_eq!(engine.get_display_string(-1_500i64, None), "-1,500 sats");
    assert_eq!(
        engine.get_display(i64::MIN, None).unwrap().amount_text,
        "9,223,372,036,854,775,808"
    );
}

#[test]
fn test_string_amounts_are_accepted() {
    let engine = engine_with(DisplaySettings::default());
    let amount: Sats = "-2500".parse().unwrap();
    assert_eq!(engine.get_display_string(amount, None), "-2,500 sats");
    assert!("25.5".parse::<Sats>().is_err());
}

#[test]
fn test_fiat_standard_layout() {
    let engine = engine_with(DisplaySettings::with_fiat("USD"));
    let display = engine
        .get_display(150_000_000i64, Some(DisplayUnit::Fiat))
        .unwrap();
    assert_eq!(display.amount_text, "97,500.00");
    assert_eq!(display.currency_symbol.as_deref(), Some("$"));
    assert!(!display.is_plural);
    assert_eq!(display.render(), "$97,500.00");
}

#[test]
fn test_fiat_rounds_once_to_two_decimals() {
    let engine = engine_with(DisplaySettings::with_fiat("USD"));
    // 0.00012345 BTC * 65,000 = 8.02425
    assert_eq!(
        engine.get_display_string(12_345i64, Some(DisplayUnit::Fiat)),
        "$8.02"
    );
    assert_eq!(engine.get_display_string(1i64, Some(DisplayUnit::Fiat)), "$0.00");
}

#[test]
fn test_fiat_swapped_rtl_negative() {
    let engine = engine_with(DisplaySettings::with_fiat("EUR"));
    assert_eq!(
        engine.get_display_string(-200_000_000i64, Some(DisplayUnit::Fiat)),
        "-120.000,00 €"
    );
}

#[test]
fn test_fiat_rtl_without_space() {
    let engine = engine_with(DisplaySettings::with_fiat("XYZ"));
    let display = engine
        .get_display(100_000_000i64, Some(DisplayUnit::Fiat))
        .unwrap();
    assert_eq!(display.amount_text, "1,234.00");
    assert!(display.is_rtl);
    assert!(!display.use_space_before_symbol);
    assert_eq!(display.render(), "1,234.00£");
}

#[test]
fn test_fiat_left_symbol_with_space() {
    let catalog = SymbolCatalog::empty()
        .with_overrides(vec![LocaleSymbolRule::new("XYZ", "£").with_space(true)]);
    let engine = UnitsEngine::new(
        DisplaySettings::with_fiat("XYZ"),
        StaticRates::with_table(catalog, sample_rates()),
    );
    assert_eq!(
        engine.get_display_string(100_000_000i64, Some(DisplayUnit::Fiat)),
        "£ 1,234.00"
    );
}

#[test]
fn test_currency_not_found_is_data() {
    let engine = engine_with(DisplaySettings::with_fiat("JPY"));
    assert_eq!(
        engine.get_display(1_000i64, Some(DisplayUnit::Fiat)),
        Err(DisplayError::CurrencyNotFound {
            code: "JPY".to_string()
        })
    );
    assert_eq!(
        engine.get_display_string(1_000i64, Some(DisplayUnit::Fiat)),
        FIAT_PLACEHOLDER
    );
}

#[test]
fn test_missing_rate_table_is_unavailable_not_empty() {
    let engine = engine_without_rates(DisplaySettings::with_fiat("USD"));
    let result = engine.get_display(1_000i64, Some(DisplayUnit::Fiat));
    assert_eq!(result, Err(DisplayError::RateUnavailable));
    assert_eq!(
        result.unwrap_err().to_string(),
        "rate fetch failed"
    );
    assert_eq!(engine.get_display_string(1_000i64, Some(DisplayUnit::Fiat)), "$N/A");
}

#[test]
fn test_fiat_disabled_without_currency() {
    let engine = engine_with(DisplaySettings::default());
    assert_eq!(
        engine.get_display(1_000i64, Some(DisplayUnit::Fiat)),
        Err(DisplayError::FiatDisabled)
    );
}

#[test]
fn test_refreshed_table_is_picked_up() {
    let engine = engine_without_rates(DisplaySettings::with_fiat("USD"));
    assert!(engine.get_display(100_000_000i64, Some(DisplayUnit::Fiat)).is_err());

    engine.rate_provider().replace(sample_rates());
    assert_eq!(
        engine.get_display_string(100_000_000i64, Some(DisplayUnit::Fiat)),
        "$65,000.00"
    );
}

#[test]
fn test_active_unit_drives_default_display() {
    let mut engine = engine_with(DisplaySettings::with_fiat("USD"));
    let amount = 100_000_000i64;
    assert_eq!(engine.get_display_string(amount, None), "100,000,000 sats");
    engine.cycle_unit();
    assert_eq!(engine.get_display_string(amount, None), "₿1");
    engine.cycle_unit();
    assert_eq!(engine.get_display_string(amount, None), "$65,000.00");
    // A view that always wants sats
    assert_eq!(
        engine.get_display_string(amount, Some(DisplayUnit::Satoshis)),
        "100,000,000 sats"
    );
}
