use crate::error::DomainError;
use crate::math::fixed_point::ratio_to_decimal;
use primitive_types::{U256, U512};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw on-chain integer together with the decimals it is scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Amount {
    pub raw: U256,
    pub decimals: u8,
}

impl Amount {
    pub fn new(raw: U256, decimals: u8) -> Self {
        Self { raw, decimals }
    }

    /// `raw / 10^decimals`, exact up to the 28 digits a decimal can hold.
    ///
    /// # Errors
    /// Returns [`DomainError::DecimalOverflow`] if the integer part is too large.
    pub fn to_decimal(&self) -> Result<Decimal, DomainError> {
        let divisor = U512::exp10(self.decimals as usize);
        ratio_to_decimal(U512::from(self.raw), divisor).ok_or(DomainError::DecimalOverflow("amount"))
    }
}
