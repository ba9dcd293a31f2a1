//! Active unit cycling

use std::sync::{Arc, RwLock};

use wallet_units::rates::{StaticRates, SymbolCatalog};
use wallet_units::{DisplaySettings, DisplayUnit, UnitsEngine};

use crate::common::engine_with;

#[test]
fn test_three_cycles_close_with_fiat_enabled() {
    let mut engine = engine_with(DisplaySettings::with_fiat("USD"));
    let start = engine.active_unit();
    let seen: Vec<DisplayUnit> = (0..3).map(|_| engine.cycle_unit()).collect();
    assert_eq!(
        seen,
        vec![DisplayUnit::Bitcoin, DisplayUnit::Fiat, DisplayUnit::Satoshis]
    );
    assert_eq!(engine.active_unit(), start);
}

#[test]
fn test_two_cycles_close_with_fiat_disabled() {
    let mut engine = engine_with(DisplaySettings::default());
    let start = engine.active_unit();
    assert_eq!(engine.cycle_unit(), DisplayUnit::Bitcoin);
    assert_eq!(engine.cycle_unit(), DisplayUnit::Satoshis);
    assert_eq!(engine.active_unit(), start);
}

#[test]
fn test_reset_from_any_unit() {
    let mut engine = engine_with(DisplaySettings::with_fiat("USD"));
    for cycles in 0..3 {
        for _ in 0..cycles {
            engine.cycle_unit();
        }
        engine.reset_unit();
        assert_eq!(engine.active_unit(), DisplayUnit::Satoshis);
    }
}

#[test]
fn test_reads_never_change_active_unit() {
    let mut engine = engine_with(DisplaySettings::with_fiat("USD"));
    engine.cycle_unit();
    for unit in [DisplayUnit::Satoshis, DisplayUnit::Fiat, DisplayUnit::Bitcoin] {
        let _ = engine.get_display(42i64, Some(unit));
        let _ = engine.get_display_string(42i64, Some(unit));
    }
    assert_eq!(engine.active_unit(), DisplayUnit::Bitcoin);
}

#[test]
fn test_cycle_follows_live_settings() {
    let settings = Arc::new(RwLock::new(DisplaySettings::default()));
    let mut engine = UnitsEngine::new(
        Arc::clone(&settings),
        StaticRates::new(SymbolCatalog::builtin()),
    );

    assert_eq!(engine.cycle_unit(), DisplayUnit::Bitcoin);
    settings.write().unwrap().fiat_enabled = true;
    assert_eq!(engine.cycle_unit(), DisplayUnit::Fiat);
    settings.write().unwrap().fiat_enabled = false;
    assert_eq!(engine.cycle_unit(), DisplayUnit::Satoshis);
}

#[test]
fn test_independent_engines() {
    let mut first = engine_with(DisplaySettings::default());
    let second = engine_with(DisplaySettings::default());
    first.cycle_unit();
    assert_eq!(first.active_unit(), DisplayUnit::Bitcoin);
    assert_eq!(second.active_unit(), DisplayUnit::Satoshis);
}
