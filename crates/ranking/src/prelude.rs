//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use market_trend_ranking::prelude::*;
//! ```

// Configuration
pub use crate::config::{MarketTrendConfig, RankingConfig, default_tokens};

// Engine
pub use crate::engine::{Discovery, PoolQuote, RankingEngine};

// Errors
pub use crate::error::{RankingError, Result};

// Widget
pub use crate::market_trend::{MarketTrend, TrendState, TrendView};

// Report
pub use crate::report::RankingReport;
