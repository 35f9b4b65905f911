use super::contracts::{IUniswapV3Factory, IUniswapV3Pool};
use crate::PoolDataSource;
use crate::error::{ProtocolError, Result};
use crate::rpc::RpcProvider;
use alloy::primitives::aliases::U24;
use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use market_trend_domain::entities::pool::{PoolKey, Slot0};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Reads a Uniswap V3 factory and its pools.
pub struct UniswapV3Client {
    rpc: Arc<RpcProvider>,
    factory: Address,
}

impl UniswapV3Client {
    /// Creates a client for the factory at `factory_address`.
    ///
    /// # Errors
    /// Fails when the factory address does not parse.
    pub fn new(rpc: Arc<RpcProvider>, factory_address: &str) -> Result<Self> {
        Ok(Self {
            rpc,
            factory: parse_address(factory_address)?,
        })
    }

    #[must_use]
    pub fn factory(&self) -> Address {
        self.factory
    }
}

#[async_trait]
impl PoolDataSource for UniswapV3Client {
    async fn pool_address(&self, key: &PoolKey) -> Result<String> {
        let token_a = parse_address(&key.token_a)?;
        let token_b = parse_address(&key.token_b)?;
        let fee = U24::from(key.fee.as_u32());

        let factory = IUniswapV3Factory::new(self.factory, self.rpc.provider());
        let pool = factory
            .getPool(token_a, token_b, fee)
            .call()
            .await
            .map_err(|e| ProtocolError::call("getPool", e))?;

        debug!(%token_a, %token_b, fee = key.fee.as_u32(), %pool, "Registry lookup");
        Ok(pool.to_checksum(None))
    }

    async fn slot0(&self, pool_address: &str) -> Result<Slot0> {
        let pool = IUniswapV3Pool::new(parse_address(pool_address)?, self.rpc.provider());
        let slot0 = pool
            .slot0()
            .call()
            .await
            .map_err(|e| ProtocolError::call("slot0", e))?;

        Ok(Slot0 {
            sqrt_price_x96: to_domain_u256(U256::from(slot0.sqrtPriceX96)),
            tick: slot0.tick.as_i32(),
        })
    }

    async fn liquidity(&self, pool_address: &str) -> Result<u128> {
        let pool = IUniswapV3Pool::new(parse_address(pool_address)?, self.rpc.provider());
        pool.liquidity()
            .call()
            .await
            .map_err(|e| ProtocolError::call("liquidity", e))
    }

    async fn token0(&self, pool_address: &str) -> Result<String> {
        let pool = IUniswapV3Pool::new(parse_address(pool_address)?, self.rpc.provider());
        let token0 = pool
            .token0()
            .call()
            .await
            .map_err(|e| ProtocolError::call("token0", e))?;
        Ok(token0.to_checksum(None))
    }
}

/// Parses a hex address, accepting any letter case.
pub(crate) fn parse_address(address: &str) -> Result<Address> {
    Address::from_str(address.trim()).map_err(|e| ProtocolError::InvalidAddress {
        address: address.to_string(),
        reason: e.to_string(),
    })
}

/// Moves an alloy integer into the domain's integer type.
fn to_domain_u256(value: U256) -> primitive_types::U256 {
    primitive_types::U256::from_big_endian(&value.to_be_bytes::<32>())
}
