pub mod pool;
pub mod ranked_row;
pub mod token;

// Re-export for easier access
pub use pool::{PoolKey, PoolStateSnapshot, Slot0};
pub use ranked_row::RankedPoolRow;
pub use token::{TokenDescriptor, TokenList};
