use crate::value_objects::change::MockChange24h;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of the Market Trend table.
///
/// Built per sweep and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPoolRow {
    /// 1-based position after sorting by liquidity.
    pub rank: usize,
    /// `"{symbol}/{quote symbol}"`.
    pub pair: String,
    pub symbol: String,
    pub icon: String,
    /// Price with four decimal places.
    pub price: String,
    /// Synthetic 24h change, not market data.
    pub change_24h: MockChange24h,
    /// Normalized liquidity with two decimal places.
    pub liquidity: String,
    /// Numeric value `liquidity` was formatted from; the sort key.
    pub liquidity_value: Decimal,
    pub token_address: String,
    pub pool_address: String,
}
