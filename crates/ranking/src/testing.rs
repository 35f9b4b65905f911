//! Shared test helpers.

use crate::config::RankingConfig;
use crate::engine::RankingEngine;
use market_trend_domain::{FeeTier, PoolKey, PoolStateSnapshot, Slot0, TokenDescriptor, TokenList};
use market_trend_protocols::fixture::FixturePoolSource;
use primitive_types::U256;
use std::sync::Arc;

pub const QUOTE: &str = "0x55d398326f99059fF775485246999027B3197955";

/// Deterministic address ending in `n`.
pub fn address(n: u8) -> String {
    format!("0x{:040x}", n)
}

/// Square-root price whose squared price is `root^2`.
pub fn sqrt_price(root: u64) -> U256 {
    U256::from(root) << 96
}

/// `amount` whole units at 18 decimals.
pub fn wei(amount: u128) -> u128 {
    amount * 10u128.pow(18)
}

pub fn quote_descriptor() -> TokenDescriptor {
    TokenDescriptor::new("USDT", "Tether USD", QUOTE, "usdt.svg")
}

pub fn tokens<S: AsRef<str>>(entries: &[(&str, S)]) -> TokenList {
    let descriptors = entries
        .iter()
        .map(|(symbol, address)| {
            let address: &str = address.as_ref();
            TokenDescriptor::new(*symbol, *symbol, address, format!("{symbol}.svg"))
        })
        .collect();
    TokenList::new(descriptors, QUOTE).unwrap()
}

pub fn build_engine(source: FixturePoolSource, tokens: TokenList, max_rows: usize) -> RankingEngine {
    RankingEngine::new(
        Arc::new(source),
        tokens,
        RankingConfig {
            quote: quote_descriptor(),
            fee_tier: FeeTier::MEDIUM,
            max_rows,
        },
    )
}

/// Source holding a single parity pool for `token`.
pub fn pool_fixture(token: &str, liquidity: u128) -> FixturePoolSource {
    FixturePoolSource::new().with_pool_fixture(token, address(0xee), sqrt_price(1), liquidity, QUOTE)
}

pub trait FixtureExt {
    /// Registers the `token`/quote pool at the medium tier.
    fn with_pool_fixture(
        self,
        token: &str,
        pool: String,
        sqrt_price_x96: U256,
        liquidity: u128,
        token0: &str,
    ) -> Self;
}

impl FixtureExt for FixturePoolSource {
    fn with_pool_fixture(
        self,
        token: &str,
        pool: String,
        sqrt_price_x96: U256,
        liquidity: u128,
        token0: &str,
    ) -> Self {
        let slot0 = Slot0 { sqrt_price_x96, tick: 0 };
        self.with_pool(
            PoolKey::new(token, QUOTE, FeeTier::MEDIUM),
            PoolStateSnapshot::new(pool, slot0, liquidity, token0),
        )
    }
}
