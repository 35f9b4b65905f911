//! Pool Ranking Engine.
//!
//! A sweep runs in two phases:
//! 1. [`RankingEngine::discover`] pairs every candidate with the quote
//!    asset, resolves the pools concurrently and reads their state
//! 2. [`RankingEngine::rank`] sorts the resolved pools by liquidity, keeps
//!    the top rows and formats them for display
//!
//! Only the first phase touches the network; the second takes the random
//! source for the placeholder 24h change as an argument.

use crate::config::RankingConfig;
use crate::error::{RankingError, Result};
use crate::report::RankingReport;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use market_trend_domain::address::is_null_address;
use market_trend_domain::math::fixed_point::format_fixed;
use market_trend_domain::{
    MockChange24h, PoolKey, PoolStateSnapshot, Price, RankedPoolRow, TokenDescriptor, TokenList,
};
use market_trend_protocols::PoolDataSource;
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Decimal places of the displayed price.
pub const PRICE_DECIMALS: u32 = 4;
/// Decimal places of the displayed liquidity.
pub const LIQUIDITY_DECIMALS: u32 = 2;

/// A candidate whose pool was found and read.
#[derive(Debug, Clone, PartialEq)]
pub struct PoolQuote {
    pub token: TokenDescriptor,
    pub pool_address: String,
    /// Candidate priced in the quote asset.
    pub price: Price,
    /// Active liquidity scaled by 10^18.
    pub liquidity: Decimal,
}

/// Result of the network phase, in candidate enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    pub quotes: Vec<PoolQuote>,
    pub candidates: usize,
    pub missing: usize,
    pub failed: usize,
    pub unpriced: usize,
    pub fetched_at: DateTime<Utc>,
}

/// Ranks the pools of a token list against one quote asset.
pub struct RankingEngine {
    source: Arc<dyn PoolDataSource>,
    tokens: TokenList,
    config: RankingConfig,
}

impl RankingEngine {
    pub fn new(source: Arc<dyn PoolDataSource>, tokens: TokenList, config: RankingConfig) -> Self {
        Self {
            source,
            tokens,
            config,
        }
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Resolves and reads every candidate pool.
    ///
    /// Never fails as a whole: a candidate whose reads fail is logged and
    /// counted in [`Discovery::failed`]. A pool that was read but whose
    /// state cannot be priced counts in [`Discovery::unpriced`] instead.
    pub async fn discover(&self) -> Discovery {
        let quote = &self.config.quote;
        let candidates: Vec<&TokenDescriptor> = self.tokens.candidates(&quote.address).collect();

        let outcomes = join_all(candidates.iter().map(|token| self.resolve(token))).await;

        let mut quotes = Vec::with_capacity(candidates.len());
        let mut missing = 0;
        let mut failed = 0;
        let mut unpriced = 0;
        for (token, outcome) in candidates.iter().zip(outcomes) {
            match outcome {
                Ok(Some(pool_quote)) => quotes.push(pool_quote),
                Ok(None) => {
                    debug!(symbol = %token.symbol, quote = %quote.symbol, "No pool for pair");
                    missing += 1;
                }
                Err(RankingError::Domain(e)) => {
                    warn!(symbol = %token.symbol, error = %e, "Pool state out of range; skipping candidate");
                    unpriced += 1;
                }
                Err(e) => {
                    warn!(symbol = %token.symbol, address = %token.address, error = %e, "Skipping candidate");
                    failed += 1;
                }
            }
        }

        info!(
            candidates = candidates.len(),
            resolved = quotes.len(),
            missing,
            failed,
            unpriced,
            "Pool discovery finished"
        );

        Discovery {
            quotes,
            candidates: candidates.len(),
            missing,
            failed,
            unpriced,
            fetched_at: Utc::now(),
        }
    }

    /// Sorts by descending liquidity, keeps the first `max_rows` and
    /// assigns ranks from 1.
    ///
    /// The sort is stable, so equal liquidity keeps enumeration order.
    pub fn rank<R: Rng>(&self, discovery: Discovery, rng: &mut R) -> RankingReport {
        let mut quotes = discovery.quotes;
        quotes.sort_by(|a, b| b.liquidity.cmp(&a.liquidity));
        quotes.truncate(self.config.max_rows);

        let range = MockChange24h::RANGE_PERCENT;
        let rows = quotes
            .into_iter()
            .enumerate()
            .map(|(i, q)| RankedPoolRow {
                rank: i + 1,
                pair: format!("{}/{}", q.token.symbol, self.config.quote.symbol),
                price: q.price.to_fixed(PRICE_DECIMALS),
                change_24h: MockChange24h::from_sample(rng.random_range(-range..=range)),
                liquidity: format_fixed(q.liquidity, LIQUIDITY_DECIMALS),
                liquidity_value: q.liquidity,
                symbol: q.token.symbol,
                icon: q.token.icon,
                token_address: q.token.address,
                pool_address: q.pool_address,
            })
            .collect();

        RankingReport {
            rows,
            candidates: discovery.candidates,
            missing: discovery.missing,
            failed: discovery.failed,
            unpriced: discovery.unpriced,
            fetched_at: discovery.fetched_at,
        }
    }

    /// Runs a full sweep with the thread-local random source.
    pub async fn discover_and_rank(&self) -> RankingReport {
        let discovery = self.discover().await;
        self.rank(discovery, &mut rand::rng())
    }

    /// Registry lookup then the three pool reads. `Ok(None)` means the
    /// registry has no pool for the pair.
    async fn resolve(&self, token: &TokenDescriptor) -> Result<Option<PoolQuote>> {
        let key = PoolKey::new(
            token.address.clone(),
            self.config.quote.address.clone(),
            self.config.fee_tier,
        );
        let pool_address = self.source.pool_address(&key).await?;
        if is_null_address(&pool_address) {
            return Ok(None);
        }

        let (slot0, liquidity, token0) = tokio::try_join!(
            self.source.slot0(&pool_address),
            self.source.liquidity(&pool_address),
            self.source.token0(&pool_address),
        )?;

        let snapshot = PoolStateSnapshot::new(pool_address, slot0, liquidity, token0);
        let price = snapshot.price_of(&token.address)?;
        let liquidity = snapshot.normalized_liquidity()?;

        debug!(
            symbol = %token.symbol,
            pool = %snapshot.pool_address,
            tick = snapshot.tick,
            price = %price.value,
            %liquidity,
            "Pool read"
        );

        Ok(Some(PoolQuote {
            token: token.clone(),
            pool_address: snapshot.pool_address,
            price,
            liquidity,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        FixtureExt, QUOTE, address, build_engine, pool_fixture, quote_descriptor, sqrt_price, tokens, wei,
    };
    use async_trait::async_trait;
    use market_trend_domain::FeeTier;
    use market_trend_domain::entities::pool::Slot0;
    use market_trend_protocols::fixture::FixturePoolSource;
    use primitive_types::U256;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rust_decimal_macros::dec;
    use std::time::Duration;
    use tokio::sync::Barrier;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_two_token_example() {
        let token_a = address(0xa1);
        let token_b = address(0xb1);
        let source = FixturePoolSource::new()
            .with_pool_fixture(&token_a, address(0x01), sqrt_price(1), wei(500), &token_a)
            .with_pool_fixture(&token_b, address(0x02), sqrt_price(1), wei(1000), QUOTE);
        let engine = build_engine(source, tokens(&[("TOKEN_A", &token_a), ("TOKEN_B", &token_b)]), 10);

        let report = engine.discover_and_rank().await;

        assert_eq!(report.rows.len(), 2);
        let first = &report.rows[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.symbol, "TOKEN_B");
        assert_eq!(first.pair, "TOKEN_B/USDT");
        assert_eq!(first.price, "1.0000");
        assert_eq!(first.liquidity, "1000.00");

        let second = &report.rows[1];
        assert_eq!(second.rank, 2);
        assert_eq!(second.symbol, "TOKEN_A");
        assert_eq!(second.price, "1.0000");
        assert_eq!(second.liquidity, "500.00");
        assert_eq!(second.pool_address, address(0x01));
    }

    #[tokio::test]
    async fn test_price_orientation() {
        // 2^97 squared over 2^192 is 4 token1 per token0.
        let sqrt = U256::one() << 97;
        let as_token0 = address(0x0a);
        let as_token1 = address(0xfa);
        let source = FixturePoolSource::new()
            .with_pool_fixture(&as_token0, address(0x01), sqrt, wei(2), &as_token0)
            .with_pool_fixture(&as_token1, address(0x02), sqrt, wei(1), QUOTE);
        let engine = build_engine(source, tokens(&[("ZERO", &as_token0), ("ONE", &as_token1)]), 10);

        let report = engine.discover_and_rank().await;
        assert_eq!(report.rows[0].symbol, "ZERO");
        assert_eq!(report.rows[0].price, "4.0000");
        assert_eq!(report.rows[1].symbol, "ONE");
        assert_eq!(report.rows[1].price, "0.2500");
    }

    #[tokio::test]
    async fn test_quote_is_never_a_candidate() {
        let token = address(0x11);
        let source = Arc::new(
            FixturePoolSource::new().with_pool_fixture(&token, address(0x01), sqrt_price(1), wei(1), QUOTE),
        );
        let list = tokens(&[("USDT", &QUOTE.to_uppercase().replacen("0X", "0x", 1)), ("TKN", &token)]);
        let engine = RankingEngine::new(
            source.clone(),
            list,
            RankingConfig {
                quote: quote_descriptor(),
                fee_tier: FeeTier::MEDIUM,
                max_rows: 10,
            },
        );

        let report = engine.discover_and_rank().await;
        assert_eq!(report.candidates, 1);
        assert_eq!(report.rows.len(), 1);
        assert!(report.rows.iter().all(|r| !r.token_address.eq_ignore_ascii_case(QUOTE)));
        // One registry lookup plus three pool reads.
        assert_eq!(source.call_count(), 4);
    }

    #[tokio::test]
    async fn test_rows_capped_sorted_and_ranked() {
        let mut source = FixturePoolSource::new();
        let mut entries = Vec::new();
        for i in 1..=14u8 {
            let token = address(0x20 + i);
            // Distinct liquidity 2..=15, out of enumeration order.
            let liquidity = u128::from(i) * 7 % 15 + 1;
            source = source.with_pool_fixture(&token, address(0x80 + i), sqrt_price(1), wei(liquidity), QUOTE);
            entries.push((format!("T{i}"), token));
        }
        let pairs: Vec<(&str, &str)> = entries.iter().map(|(s, a)| (s.as_str(), a.as_str())).collect();
        let engine = build_engine(source, tokens(&pairs), 10);

        let report = engine.discover_and_rank().await;
        assert_eq!(report.candidates, 14);
        assert_eq!(report.resolved(), 14);
        assert_eq!(report.rows.len(), 10);
        for (i, row) in report.rows.iter().enumerate() {
            assert_eq!(row.rank, i + 1);
        }
        assert!(
            report
                .rows
                .windows(2)
                .all(|w| w[0].liquidity_value >= w[1].liquidity_value)
        );
        assert_eq!(report.rows[0].liquidity_value, dec!(15));
    }

    #[tokio::test]
    async fn test_missing_pools_are_not_rows() {
        let engine = build_engine(
            FixturePoolSource::new(),
            tokens(&[("A", &address(0x31)), ("B", &address(0x32))]),
            10,
        );

        let report = engine.discover_and_rank().await;
        assert!(report.is_empty());
        assert_eq!(report.missing, 2);
        assert_eq!(report.failed, 0);
        assert!(!report.is_unavailable());
    }

    #[tokio::test]
    async fn test_failed_candidates_are_dropped() {
        let healthy = address(0x41);
        let broken_lookup = address(0x42);
        let broken_pool = address(0x43);
        let source = FixturePoolSource::new()
            .with_pool_fixture(&healthy, address(0x01), sqrt_price(1), wei(1), QUOTE)
            .with_pool_fixture(&broken_pool, address(0x02), sqrt_price(1), wei(9), QUOTE)
            .with_failing_token(&broken_lookup)
            .with_failing_pool(&address(0x02));
        let engine = build_engine(
            source,
            tokens(&[("OK", &healthy), ("LOOKUP", &broken_lookup), ("POOL", &broken_pool)]),
            10,
        );

        let report = engine.discover_and_rank().await;
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].symbol, "OK");
        assert_eq!(report.failed, 2);
        assert!(!report.is_unavailable());
    }

    #[tokio::test]
    async fn test_every_candidate_failing_is_unavailable() {
        let a = address(0x51);
        let b = address(0x52);
        let source = FixturePoolSource::new().with_failing_token(&a).with_failing_token(&b);
        let engine = build_engine(source, tokens(&[("A", &a), ("B", &b)]), 10);

        let report = engine.discover_and_rank().await;
        assert!(report.is_empty());
        assert!(report.is_unavailable());
    }

    #[tokio::test]
    async fn test_unrepresentable_price_drops_candidate() {
        // Minimum sqrt ratio: the inverted price overflows a decimal.
        let token = address(0x61);
        let source = FixturePoolSource::new().with_pool_fixture(
            &token,
            address(0x01),
            U256::from(4_295_128_739u64),
            wei(1),
            QUOTE,
        );
        let engine = build_engine(source, tokens(&[("TINY", &token)]), 10);

        let report = engine.discover_and_rank().await;
        assert!(report.is_empty());
        assert_eq!(report.unpriced, 1);
        assert_eq!(report.failed, 0);
        assert!(!report.is_unavailable());
    }

    #[tokio::test]
    async fn test_ties_keep_enumeration_order() {
        let first = address(0x71);
        let second = address(0x72);
        let third = address(0x73);
        let source = FixturePoolSource::new()
            .with_pool_fixture(&first, address(0x01), sqrt_price(1), wei(5), QUOTE)
            .with_pool_fixture(&second, address(0x02), sqrt_price(1), wei(5), QUOTE)
            .with_pool_fixture(&third, address(0x03), sqrt_price(1), wei(5), QUOTE);
        let engine = build_engine(source, tokens(&[("C", &first), ("A", &second), ("B", &third)]), 2);

        let report = engine.discover_and_rank().await;
        let symbols: Vec<&str> = report.rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, ["C", "A"]);
    }

    #[tokio::test]
    async fn test_rank_is_deterministic_under_seed() {
        let token = address(0x81);
        let source = pool_fixture(&token, wei(3));
        let engine = build_engine(source, tokens(&[("X", &token)]), 10);
        let discovery = engine.discover().await;

        let first = engine.rank(discovery.clone(), &mut StdRng::seed_from_u64(7));
        let second = engine.rank(discovery, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);

        let change = first.rows[0].change_24h;
        assert!(change.percent >= dec!(-5) && change.percent <= dec!(5));
    }

    /// Parks each registry lookup and each pool read at a barrier, so a
    /// sweep only finishes when those calls are in flight together.
    struct BarrierSource {
        inner: FixturePoolSource,
        lookups: Barrier,
        reads: Barrier,
    }

    #[async_trait]
    impl PoolDataSource for BarrierSource {
        async fn pool_address(&self, key: &PoolKey) -> market_trend_protocols::Result<String> {
            self.lookups.wait().await;
            self.inner.pool_address(key).await
        }

        async fn slot0(&self, pool_address: &str) -> market_trend_protocols::Result<Slot0> {
            self.reads.wait().await;
            self.inner.slot0(pool_address).await
        }

        async fn liquidity(&self, pool_address: &str) -> market_trend_protocols::Result<u128> {
            self.reads.wait().await;
            self.inner.liquidity(pool_address).await
        }

        async fn token0(&self, pool_address: &str) -> market_trend_protocols::Result<String> {
            self.reads.wait().await;
            self.inner.token0(pool_address).await
        }
    }

    async fn discover_with_barriers(
        inner: FixturePoolSource,
        list: TokenList,
        lookups: usize,
        reads: usize,
    ) -> Discovery {
        let source = BarrierSource {
            inner,
            lookups: Barrier::new(lookups),
            reads: Barrier::new(reads),
        };
        let engine = RankingEngine::new(
            Arc::new(source),
            list,
            RankingConfig {
                quote: quote_descriptor(),
                fee_tier: FeeTier::MEDIUM,
                max_rows: 10,
            },
        );
        timeout(Duration::from_secs(5), engine.discover())
            .await
            .expect("calls were issued one at a time")
    }

    #[tokio::test]
    async fn test_registry_lookups_run_concurrently() {
        let mut source = FixturePoolSource::new();
        let mut entries = Vec::new();
        for i in 1..=3u8 {
            let token = address(0x90 + i);
            source = source.with_pool_fixture(&token, address(0xa0 + i), sqrt_price(1), wei(1), QUOTE);
            entries.push((format!("C{i}"), token));
        }
        let pairs: Vec<(&str, &str)> = entries.iter().map(|(s, a)| (s.as_str(), a.as_str())).collect();

        let discovery = discover_with_barriers(source, tokens(&pairs), 3, 1).await;
        assert_eq!(discovery.quotes.len(), 3);
        assert_eq!(discovery.failed, 0);
    }

    #[tokio::test]
    async fn test_pool_reads_run_concurrently() {
        let token = address(0x99);
        let discovery = discover_with_barriers(pool_fixture(&token, wei(4)), tokens(&[("R", &token)]), 1, 3).await;
        assert_eq!(discovery.quotes.len(), 1);
        assert_eq!(discovery.quotes[0].liquidity, dec!(4));
    }
}
