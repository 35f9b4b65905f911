//! Domain model for the Market Trend widget.
//!
//! Token descriptors, pool registry keys, pool state snapshots and the
//! ranked rows shown in the table, plus the fixed-point math that turns a
//! Q64.96 square-root price into a human-readable decimal.

/// Textual EVM address helpers.
pub mod address;
/// Entities read from configuration or chain.
pub mod entities;
/// Enumerations shared across crates.
pub mod enums;
/// Domain error type.
pub mod error;
/// Fee tiers of the pool registry.
pub mod fees;
/// Fixed-point math.
pub mod math;
/// Value objects.
pub mod value_objects;

pub use entities::{PoolKey, PoolStateSnapshot, RankedPoolRow, Slot0, TokenDescriptor, TokenList};
pub use enums::Category;
pub use error::DomainError;
pub use fees::FeeTier;
pub use value_objects::{Amount, MockChange24h, Price};
