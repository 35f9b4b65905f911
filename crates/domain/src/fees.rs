use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fee level of a concentrated-liquidity pool, in hundredths of a basis
/// point (`3000` is 0.30 %).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FeeTier(u32);

impl FeeTier {
    /// 0.01 %
    pub const LOWEST: Self = Self(100);
    /// 0.05 %
    pub const LOW: Self = Self(500);
    /// 0.30 %
    pub const MEDIUM: Self = Self(3000);
    /// 1.00 %
    pub const HIGH: Self = Self(10000);

    // The registry rejects fees of 100 % and above.
    const UPPER_BOUND: u32 = 1_000_000;

    /// Creates a fee tier, rejecting zero and anything at or above 100 %.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidFeeTier`] when out of range.
    pub fn new(fee: u32) -> Result<Self, DomainError> {
        if fee == 0 || fee >= Self::UPPER_BOUND {
            return Err(DomainError::InvalidFeeTier(fee));
        }
        Ok(Self(fee))
    }

    /// Raw value passed to the registry.
    #[must_use]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Fee as a percentage (`3000` -> `0.30`).
    #[must_use]
    pub fn as_percentage(self) -> Decimal {
        Decimal::from(self.0) / Decimal::from(10_000)
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FeeTier> for u32 {
    fn from(fee: FeeTier) -> Self {
        fee.0
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.as_percentage())
    }
}
