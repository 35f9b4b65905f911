//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use market_trend_protocols::prelude::*;
//! ```

pub use crate::PoolDataSource;
pub use crate::error::{ProtocolError, Result};
pub use crate::fixture::{FixturePoolSource, PoolFixture};
pub use crate::rpc::{RpcConfig, RpcProvider};
pub use crate::uniswap_v3::{BSC_FACTORY_ADDRESS, UniswapV3Client};
