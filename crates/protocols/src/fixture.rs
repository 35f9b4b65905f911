//! In-memory [`PoolDataSource`] backed by canned pool state.
//!
//! Serves the same four reads as the on-chain client from a map, so the
//! engine, the API and the CLI can run without a node. Fixtures are built
//! in code or loaded from JSON:
//!
//! ```json
//! {
//!   "pools": [{
//!     "token_a": "0x...", "token_b": "0x...", "fee": 3000,
//!     "pool_address": "0x...", "sqrt_price_x96": "79228162514264337593543950336",
//!     "tick": 0, "liquidity": "500000000000000000000", "token0": "0x..."
//!   }],
//!   "failing_tokens": ["0x..."]
//! }
//! ```

use crate::PoolDataSource;
use crate::error::{ProtocolError, Result};
use async_trait::async_trait;
use market_trend_domain::FeeTier;
use market_trend_domain::address::{NULL_ADDRESS, validate_address};
use market_trend_domain::entities::pool::{PoolKey, PoolStateSnapshot, Slot0};
use primitive_types::U256;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// One pool entry of a JSON fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolFixture {
    pub token_a: String,
    pub token_b: String,
    pub fee: FeeTier,
    pub pool_address: String,
    /// Decimal string; `uint160` does not fit a JSON number.
    pub sqrt_price_x96: String,
    #[serde(default)]
    pub tick: i32,
    /// Decimal string.
    pub liquidity: String,
    pub token0: String,
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    pools: Vec<PoolFixture>,
    #[serde(default)]
    failing_tokens: Vec<String>,
}

impl PoolFixture {
    fn into_parts(self) -> Result<(PoolKey, PoolStateSnapshot)> {
        validate_address(&self.pool_address)?;
        validate_address(&self.token0)?;

        let sqrt_price_x96 = U256::from_dec_str(&self.sqrt_price_x96).map_err(|e| {
            ProtocolError::Fixture(format!("sqrt_price_x96 {:?}: {:?}", self.sqrt_price_x96, e))
        })?;
        let liquidity: u128 = self
            .liquidity
            .parse()
            .map_err(|e| ProtocolError::Fixture(format!("liquidity {:?}: {}", self.liquidity, e)))?;

        let key = PoolKey::new(self.token_a, self.token_b, self.fee);
        let snapshot = PoolStateSnapshot::new(
            self.pool_address,
            Slot0 {
                sqrt_price_x96,
                tick: self.tick,
            },
            liquidity,
            self.token0,
        );
        Ok((key, snapshot))
    }
}

/// Registry key with the pair order and address case erased, matching the
/// factory's symmetric `getPool`.
fn registry_key(key: &PoolKey) -> (String, String, u32) {
    let a = key.token_a.to_ascii_lowercase();
    let b = key.token_b.to_ascii_lowercase();
    if a <= b {
        (a, b, key.fee.as_u32())
    } else {
        (b, a, key.fee.as_u32())
    }
}

/// Pool source answering from memory.
#[derive(Debug, Default)]
pub struct FixturePoolSource {
    registry: HashMap<(String, String, u32), String>,
    pools: HashMap<String, PoolStateSnapshot>,
    failing_tokens: HashSet<String>,
    failing_pools: HashSet<String>,
    calls: AtomicUsize,
}

impl FixturePoolSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pool under `key`.
    #[must_use]
    pub fn with_pool(mut self, key: PoolKey, snapshot: PoolStateSnapshot) -> Self {
        let address = snapshot.pool_address.to_ascii_lowercase();
        self.registry.insert(registry_key(&key), snapshot.pool_address.clone());
        self.pools.insert(address, snapshot);
        self
    }

    /// Makes every registry lookup involving `token` fail.
    #[must_use]
    pub fn with_failing_token(mut self, token: &str) -> Self {
        self.failing_tokens.insert(token.to_ascii_lowercase());
        self
    }

    /// Makes every state read of `pool` fail.
    #[must_use]
    pub fn with_failing_pool(mut self, pool: &str) -> Self {
        self.failing_pools.insert(pool.to_ascii_lowercase());
        self
    }

    /// Parses a JSON fixture.
    ///
    /// # Errors
    /// Fails on malformed JSON, addresses or integers.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: FixtureFile =
            serde_json::from_str(json).map_err(|e| ProtocolError::Fixture(e.to_string()))?;

        let mut source = Self::new();
        for pool in file.pools {
            let (key, snapshot) = pool.into_parts()?;
            source = source.with_pool(key, snapshot);
        }
        for token in &file.failing_tokens {
            source = source.with_failing_token(token);
        }
        Ok(source)
    }

    /// Loads a JSON fixture from disk.
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let source = Self::from_json_str(&json)?;
        debug!(path = %path.as_ref().display(), pools = source.pools.len(), "Loaded pool fixture");
        Ok(source)
    }

    /// Number of reads served so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn snapshot(&self, call: &'static str, pool_address: &str) -> Result<&PoolStateSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let address = pool_address.to_ascii_lowercase();
        if self.failing_pools.contains(&address) {
            return Err(ProtocolError::Call {
                call,
                message: format!("execution reverted for {pool_address}"),
            });
        }
        self.pools.get(&address).ok_or_else(|| ProtocolError::Call {
            call,
            message: format!("no contract code at {pool_address}"),
        })
    }
}

#[async_trait]
impl PoolDataSource for FixturePoolSource {
    async fn pool_address(&self, key: &PoolKey) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let failing = [&key.token_a, &key.token_b]
            .iter()
            .any(|t| self.failing_tokens.contains(&t.to_ascii_lowercase()));
        if failing {
            return Err(ProtocolError::Call {
                call: "getPool",
                message: "connection refused".to_string(),
            });
        }

        Ok(self
            .registry
            .get(&registry_key(key))
            .cloned()
            .unwrap_or_else(|| NULL_ADDRESS.to_string()))
    }

    async fn slot0(&self, pool_address: &str) -> Result<Slot0> {
        let snapshot = self.snapshot("slot0", pool_address)?;
        Ok(Slot0 {
            sqrt_price_x96: snapshot.sqrt_price_x96,
            tick: snapshot.tick,
        })
    }

    async fn liquidity(&self, pool_address: &str) -> Result<u128> {
        self.snapshot("liquidity", pool_address).map(|s| s.liquidity)
    }

    async fn token0(&self, pool_address: &str) -> Result<String> {
        self.snapshot("token0", pool_address).map(|s| s.token0.clone())
    }
}
