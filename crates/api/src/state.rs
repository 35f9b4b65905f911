use market_trend_ranking::market_trend::MarketTrend;
use std::sync::Arc;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub market_trend: Arc<MarketTrend>,
}

impl AppState {
    pub fn new(market_trend: Arc<MarketTrend>) -> Self {
        Self { market_trend }
    }
}
