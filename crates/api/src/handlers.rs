use crate::error::ApiError;
use crate::models::{HealthResponse, MarketTrendQuery, MarketTrendResponse, TokensResponse};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use market_trend_domain::Category;
use tracing::debug;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Configured tokens, quote asset included.
pub async fn list_tokens(State(state): State<AppState>) -> Json<TokensResponse> {
    let engine = state.market_trend.engine();
    Json(TokensResponse {
        quote: engine.config().quote.clone(),
        fee_tier: engine.config().fee_tier.as_u32(),
        tokens: engine.tokens().as_slice().to_vec(),
    })
}

/// Current widget view. With `?category=all` the request starts a sweep or
/// joins the one in flight; other tabs answer "coming soon" without
/// changing what the other visitors see.
pub async fn market_trend(
    State(state): State<AppState>,
    Query(query): Query<MarketTrendQuery>,
) -> Result<Json<MarketTrendResponse>, ApiError> {
    let view = match query.category.as_deref() {
        Some(raw) => {
            let category: Category = raw.parse()?;
            debug!(%category, "Category requested");
            state.market_trend.fetch(category).await
        }
        None => state.market_trend.view(),
    };
    Ok(Json(view.into()))
}
