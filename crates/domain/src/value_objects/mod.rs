pub mod amount;
pub mod change;
pub mod price;

pub use amount::Amount;
pub use change::MockChange24h;
pub use price::Price;
