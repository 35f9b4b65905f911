use market_trend_domain::{Category, TokenDescriptor};
use market_trend_ranking::market_trend::{TrendState, TrendView};
use market_trend_ranking::report::RankingReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokensResponse {
    pub quote: TokenDescriptor,
    pub fee_tier: u32,
    pub tokens: Vec<TokenDescriptor>,
}

/// Query string of `GET /market-trend`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketTrendQuery {
    /// Tab to load; absent means "return the current view".
    pub category: Option<String>,
}

/// One tab of the widget header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTab {
    pub category: Category,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketTrendResponse {
    pub category: Category,
    pub tabs: Vec<CategoryTab>,
    /// `idle`, `loading`, `populated`, `unavailable` or `coming_soon`.
    pub status: &'static str,
    /// Present once a sweep has finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<RankingReport>,
}

impl From<TrendView> for MarketTrendResponse {
    fn from(view: TrendView) -> Self {
        let tabs = Category::ALL
            .iter()
            .map(|&category| CategoryTab {
                category,
                label: category.label(),
                active: category == view.category,
            })
            .collect();
        let (status, report) = match view.state {
            TrendState::Idle => ("idle", None),
            TrendState::Loading => ("loading", None),
            TrendState::Populated(report) => ("populated", Some(report)),
            TrendState::Unavailable(report) => ("unavailable", Some(report)),
            TrendState::ComingSoon => ("coming_soon", None),
        };
        Self {
            category: view.category,
            tabs,
            status,
            report,
        }
    }
}
