use crate::address::same_address;
use crate::error::DomainError;
use crate::fees::FeeTier;
use crate::math::sqrt_price::price_from_sqrt_price_x96;
use crate::value_objects::amount::Amount;
use crate::value_objects::price::Price;
use primitive_types::U256;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimals assumed for both legs of every pool.
///
/// Inherited simplification: correct only when both tokens use 18 decimals.
pub const ASSUMED_TOKEN_DECIMALS: u8 = 18;

/// Registry lookup key: `(tokenA, tokenB, fee)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolKey {
    pub token_a: String,
    pub token_b: String,
    pub fee: FeeTier,
}

impl PoolKey {
    pub fn new(token_a: impl Into<String>, token_b: impl Into<String>, fee: FeeTier) -> Self {
        Self {
            token_a: token_a.into(),
            token_b: token_b.into(),
            fee,
        }
    }
}

/// Subset of the pool's `slot0` the engine reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot0 {
    pub sqrt_price_x96: U256,
    pub tick: i32,
}

/// Pool state read fresh on every sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStateSnapshot {
    pub pool_address: String,
    pub sqrt_price_x96: U256,
    pub tick: i32,
    pub liquidity: u128,
    pub token0: String,
}

impl PoolStateSnapshot {
    pub fn new(pool_address: impl Into<String>, slot0: Slot0, liquidity: u128, token0: impl Into<String>) -> Self {
        Self {
            pool_address: pool_address.into(),
            sqrt_price_x96: slot0.sqrt_price_x96,
            tick: slot0.tick,
            liquidity,
            token0: token0.into(),
        }
    }

    /// Price of `token_address` in units of the other pool token.
    ///
    /// The raw pool price is token1 per token0, so it is inverted when the
    /// queried token is token1.
    ///
    /// # Errors
    /// Fails when the price cannot be represented as a decimal.
    pub fn price_of(&self, token_address: &str) -> Result<Price, DomainError> {
        let invert = !same_address(token_address, &self.token0);
        price_from_sqrt_price_x96(self.sqrt_price_x96, invert)
    }

    /// Active liquidity scaled down by [`ASSUMED_TOKEN_DECIMALS`].
    ///
    /// # Errors
    /// Fails only if the scaled value overflows a decimal.
    pub fn normalized_liquidity(&self) -> Result<Decimal, DomainError> {
        Amount::new(U256::from(self.liquidity), ASSUMED_TOKEN_DECIMALS).to_decimal()
    }
}
