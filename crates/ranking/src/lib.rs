//! Pool Ranking Engine and the Market Trend widget state built on it.
//!
//! The engine pairs every configured token with a quote asset, looks the
//! pools up in the on-chain registry, reads their price and liquidity and
//! returns the most liquid ones as display-ready rows.

/// Runtime configuration.
pub mod config;
/// Pool discovery and ranking.
pub mod engine;
/// Error types.
pub mod error;
/// Widget state and category tabs.
pub mod market_trend;
/// Prelude module for convenient imports.
pub mod prelude;
/// Sweep outcome.
pub mod report;

#[cfg(test)]
mod testing;

pub use error::{RankingError, Result};
