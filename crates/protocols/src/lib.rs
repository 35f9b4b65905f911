//! Read-only access to concentrated-liquidity pools on an EVM chain.
//!
//! The ranking engine only ever talks to a [`PoolDataSource`]. Two
//! implementations ship here:
//! - [`uniswap_v3::UniswapV3Client`] reads a Uniswap V3 style factory and
//!   its pools over JSON-RPC
//! - [`fixture::FixturePoolSource`] serves canned pool state from memory or
//!   a JSON file

/// Error types.
pub mod error;
/// In-memory pool source.
pub mod fixture;
/// Prelude module for convenient imports.
pub mod prelude;
/// JSON-RPC provider.
pub mod rpc;
/// Uniswap V3 registry and pool adapter.
pub mod uniswap_v3;

use async_trait::async_trait;
use market_trend_domain::entities::pool::{PoolKey, Slot0};

pub use error::{ProtocolError, Result};

/// Read-only view of a pool registry and the pools it points to.
///
/// Every method is a single independent read; callers are free to issue
/// them concurrently.
#[async_trait]
pub trait PoolDataSource: Send + Sync {
    /// Looks up the pool for `key`. Returns the null address when the
    /// registry has no pool for that pair and fee.
    async fn pool_address(&self, key: &PoolKey) -> Result<String>;

    /// Current square-root price and tick.
    async fn slot0(&self, pool_address: &str) -> Result<Slot0>;

    /// Currently active liquidity.
    async fn liquidity(&self, pool_address: &str) -> Result<u128>;

    /// Address of the pool's token0.
    async fn token0(&self, pool_address: &str) -> Result<String>;
}
