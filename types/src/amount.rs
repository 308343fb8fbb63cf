//! Amount types for coins and coin hours.
//!
//! Coins are represented as fixed-point integers (droplets) to avoid
//! floating-point errors. One coin is [`DROPLETS_PER_COIN`] droplets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of droplets in one whole coin.
pub const DROPLETS_PER_COIN: u64 = 1_000_000;

/// Number of decimal places shown when rendering coins.
const COIN_DECIMALS: usize = 6;

const SECONDS_PER_HOUR: u128 = 3600;

/// A coin amount, stored as droplets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coins(u64);

impl Coins {
    pub const ZERO: Self = Self(0);

    pub fn from_droplets(droplets: u64) -> Self {
        Self(droplets)
    }

    pub fn droplets(&self) -> u64 {
        self.0
    }

    /// Coin hours accrued by holding this amount for `elapsed_secs` seconds.
    ///
    /// Fractional hours are truncated. Saturates at `u64::MAX`.
    pub fn accrued_hours(&self, elapsed_secs: u64) -> Hours {
        let coin_seconds = self.0 as u128 * elapsed_secs as u128;
        let hours = coin_seconds / DROPLETS_PER_COIN as u128 / SECONDS_PER_HOUR;
        Hours(u64::try_from(hours).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / DROPLETS_PER_COIN;
        let frac = self.0 % DROPLETS_PER_COIN;
        write!(f, "{whole}.{frac:0width$}", width = COIN_DECIMALS)
    }
}

/// Coin hours, the secondary unit that accrues on held coins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hours(u64);

impl Hours {
    pub const ZERO: Self = Self(0);

    pub fn new(hours: u64) -> Self {
        Self(hours)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
