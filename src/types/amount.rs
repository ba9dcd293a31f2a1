//! Signed satoshi amounts
//!
//! Amounts enter the engine as whole satoshis, either from native integers
//! or from decimal-free text. Fractional or non-numeric text is a caller bug
//! and is rejected here, so nothing downstream has to handle it.

use std::fmt;
use std::str::FromStr;

use crate::errors::AmountParseError;

/// A signed whole number of satoshis
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sats(i64);

impl Sats {
    pub const ZERO: Sats = Sats(0);

    pub fn new(sats: i64) -> Self {
        Sats(sats)
    }

    pub fn to_sat(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Magnitude without the sign (total, `i64::MIN` included)
    pub fn unsigned_abs(self) -> u64 {
        self.0.unsigned_abs()
    }
}

impl fmt::Display for Sats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Sats {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
        if digits.contains('.') {
            return Err(AmountParseError::Fractional(trimmed.to_string()));
        }
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::NotNumeric(trimmed.to_string()));
        }

        trimmed
            .parse::<i64>()
            .map(Sats)
            .map_err(|_| AmountParseError::OutOfRange(trimmed.to_string()))
    }
}

impl TryFrom<&str> for Sats {
    type Error = AmountParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<i64> for Sats {
    fn from(sats: i64) -> Self {
        Sats(sats)
    }
}

impl From<i32> for Sats {
    fn from(sats: i32) -> Self {
        Sats(i64::from(sats))
    }
}

impl From<u32> for Sats {
    fn from(sats: u32) -> Self {
        Sats(i64::from(sats))
    }
}

impl From<bitcoin::SignedAmount> for Sats {
    fn from(amount: bitcoin::SignedAmount) -> Self {
        Sats(amount.to_sat())
    }
}

impl TryFrom<bitcoin::Amount> for Sats {
    type Error = AmountParseError;

    fn try_from(amount: bitcoin::Amount) -> Result<Self, Self::Error> {
        i64::try_from(amount.to_sat())
            .map(Sats)
            .map_err(|_| AmountParseError::OutOfRange(amount.to_sat().to_string()))
    }
}
