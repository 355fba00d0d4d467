//! Monetary amounts in minor currency units.
//!
//! Orders carry integer minor units (cents for USD). Analytics payloads want
//! major units, so [`Amount::to_major`] performs a fixed divide-by-100
//! conversion into a [`Decimal`]. The conversion does not look at the
//! currency: zero- and three-decimal currencies are reported the same way.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of decimal places between minor and major units.
const MINOR_UNIT_SCALE: u32 = 2;

/// An amount in the smallest currency unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// A zero amount.
    pub const ZERO: Self = Self(0);

    /// Create an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// The raw minor-unit value.
    #[must_use]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// The amount in major units (`minor / 100`), exact.
    #[must_use]
    pub fn to_major(&self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }
}

impl From<i64> for Amount {
    fn from(minor: i64) -> Self {
        Self(minor)
    }
}
