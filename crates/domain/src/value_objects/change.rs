use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder 24-hour change shown next to each pool.
///
/// This is randomly generated mock data. There is no historical price feed
/// behind it and it must never be read as a market figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MockChange24h {
    /// Signed percentage, two decimal places.
    pub percent: Decimal,
    /// Whether the sampled value was `>= 0`.
    pub positive: bool,
}

impl MockChange24h {
    /// Half-width of the sampling interval, in percent.
    pub const RANGE_PERCENT: f64 = 5.0;

    /// Wraps a sampled percentage. The sign tag comes from the raw sample,
    /// so a tiny negative sample stays tagged negative after rounding.
    #[must_use]
    pub fn from_sample(sample: f64) -> Self {
        let percent = Decimal::from_f64(sample).unwrap_or_default().round_dp(2);
        Self {
            percent,
            positive: sample >= 0.0,
        }
    }
}

impl fmt::Display for MockChange24h {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{}{:.2}%", sign, self.percent.abs())
    }
}
