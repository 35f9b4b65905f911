//! Uniswap V3 style protocol adapter.
//!
//! Reads the factory's `getPool` registry and three pool getters:
//! `slot0`, `liquidity` and `token0`. Forks with the same ABI work by
//! pointing the client at their factory.

/// Read-only client implementing the pool data source.
pub mod client;
/// Solidity bindings.
pub mod contracts;

pub use client::UniswapV3Client;

/// Uniswap V3 factory deployed on BNB Chain.
pub const BSC_FACTORY_ADDRESS: &str = "0xdB1d10011AD0Ff90774D0C6Bb92e5C5c8b4461F7";
