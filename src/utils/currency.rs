//! Currency arithmetic for Bitcoin and fiat values
//!
//! BTC strings are built from integer division so they never pick up binary
//! floating-point error. Fiat values are necessarily floating point (rates
//! are `f64`) and are rounded to two decimals exactly once, at the end.

/// Satoshis per Bitcoin
pub const SATS_PER_BTC: u64 = 100_000_000;

/// Decimal places in a full-precision BTC amount
pub const BTC_DECIMALS: usize = 8;

/// Decimal places in a fiat amount
pub const FIAT_DECIMALS: usize = 2;

/// Render a satoshi magnitude as a plain BTC decimal string.
///
/// With `show_all_decimal_places` the result always carries 8 decimals;
/// otherwise trailing zeros (and a bare decimal point) are trimmed.
///
/// # Examples
/// ```
/// use wallet_units::utils::currency::sats_to_btc_string;
///
/// assert_eq!(sats_to_btc_string(150_000_000, false), "1.5");
/// assert_eq!(sats_to_btc_string(150_000_000, true), "1.50000000");
/// assert_eq!(sats_to_btc_string(5471, false), "0.00005471");
/// assert_eq!(sats_to_btc_string(0, false), "0");
/// ```
pub fn sats_to_btc_string(sats: u64, show_all_decimal_places: bool) -> String {
    let whole = sats / SATS_PER_BTC;
    let fraction = sats % SATS_PER_BTC;
    let full = format!("{}.{:0width$}", whole, fraction, width = BTC_DECIMALS);

    if show_all_decimal_places {
        full
    } else {
        full.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Satoshi magnitude as a floating-point BTC value
pub fn sats_to_btc(sats: u64) -> f64 {
    sats as f64 / SATS_PER_BTC as f64
}

/// Convert a satoshi magnitude to fiat at `rate` (fiat per BTC), rounded to
/// two decimals and rendered with `.` as the decimal point.
///
/// # Examples
/// ```
/// use wallet_units::utils::currency::sats_to_fiat_string;
///
/// assert_eq!(sats_to_fiat_string(150_000_000, 65_000.0), "97500.00");
/// assert_eq!(sats_to_fiat_string(100_000, 61_234.56), "61.23");
/// ```
pub fn sats_to_fiat_string(sats: u64, rate: f64) -> String {
    format!("{:.prec$}", sats_to_btc(sats) * rate, prec = FIAT_DECIMALS)
}
