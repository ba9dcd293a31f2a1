use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rate table files that cannot be parsed
    #[error("Invalid rate table: {0}")]
    RateTable(String),

    /// JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Amount arguments that are not whole satoshis
    #[error("Invalid amount: {0}")]
    Amount(#[from] AmountParseError),
}

/// Recoverable conditions reported by the display engine as data.
///
/// A wallet running offline hits these routinely, so they travel inside
/// [`crate::types::DisplayDescriptor`] instead of aborting the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The rate table has not been loaded (or the last fetch failed)
    #[error("rate fetch failed")]
    RateUnavailable,

    /// The table is loaded but carries no entry for the active currency
    #[error("rate unavailable for currency {code}")]
    CurrencyNotFound { code: String },

    /// No fiat currency is configured
    #[error("fiat disabled")]
    FiatDisabled,
}

/// Malformed satoshi amounts.
///
/// Well-formed callers never produce these; they are rejected when text is
/// turned into [`crate::types::Sats`], before the engine sees the value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("fractional satoshis are not allowed: {0}")]
    Fractional(String),

    #[error("not a whole number of satoshis: {0}")]
    NotNumeric(String),

    #[error("amount out of range: {0}")]
    OutOfRange(String),
}

/// Unknown display unit names
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown display unit '{0}' (expected sats, btc or fiat)")]
pub struct UnitParseError(pub String);

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::RateTable(format!("TOML error: {}", err))
    }
}
