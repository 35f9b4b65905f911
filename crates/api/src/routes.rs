use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builds the `/api/v1` router.
///
/// CORS is permissive because the landing page is served from another
/// origin and every endpoint is read-only.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/tokens", get(handlers::list_tokens))
        .route("/market-trend", get(handlers::market_trend));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use market_trend_domain::{FeeTier, PoolKey, PoolStateSnapshot, Slot0, TokenDescriptor, TokenList};
    use market_trend_protocols::fixture::FixturePoolSource;
    use market_trend_ranking::config::RankingConfig;
    use market_trend_ranking::engine::RankingEngine;
    use market_trend_ranking::market_trend::MarketTrend;
    use primitive_types::U256;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    const QUOTE: &str = "0x55d398326f99059fF775485246999027B3197955";
    const CAKE: &str = "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82";
    const POOL: &str = "0x7f51c8AaA6B0599aBd16674e2b17FEc7a9f674A1";

    fn app() -> Router {
        let quote = TokenDescriptor::new("USDT", "Tether USD", QUOTE, "usdt.svg");
        let tokens = TokenList::new(
            vec![quote.clone(), TokenDescriptor::new("CAKE", "PancakeSwap", CAKE, "cake.svg")],
            QUOTE,
        )
        .unwrap();
        let slot0 = Slot0 {
            sqrt_price_x96: U256::one() << 96,
            tick: 0,
        };
        let source = FixturePoolSource::new().with_pool(
            PoolKey::new(CAKE, QUOTE, FeeTier::MEDIUM),
            PoolStateSnapshot::new(POOL, slot0, 42 * 10u128.pow(18), CAKE),
        );
        let engine = RankingEngine::new(
            Arc::new(source),
            tokens,
            RankingConfig {
                quote,
                ..RankingConfig::default()
            },
        );
        create_router(AppState::new(Arc::new(MarketTrend::new(engine))))
    }

    async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json(&app(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_tokens() {
        let (status, body) = get_json(&app(), "/api/v1/tokens").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["quote"]["symbol"], "USDT");
        assert_eq!(body["fee_tier"], 3000);
        assert_eq!(body["tokens"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_market_trend_flow() {
        let app = app();

        let (_, idle) = get_json(&app, "/api/v1/market-trend").await;
        assert_eq!(idle["category"], "all");
        assert_eq!(idle["status"], "idle");
        assert_eq!(idle["tabs"].as_array().unwrap().len(), 4);

        let (status, all) = get_json(&app, "/api/v1/market-trend?category=all").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all["status"], "populated");
        let row = &all["report"]["rows"][0];
        assert_eq!(row["rank"], 1);
        assert_eq!(row["pair"], "CAKE/USDT");
        assert_eq!(row["price"], "1.0000");
        assert_eq!(row["liquidity"], "42.00");

        let (_, meme) = get_json(&app, "/api/v1/market-trend?category=meme").await;
        assert_eq!(meme["category"], "meme");
        assert_eq!(meme["status"], "coming_soon");
        assert_eq!(meme["tabs"][3]["active"], true);

        // Another visitor's tab does not leak into the shared view.
        let (_, current) = get_json(&app, "/api/v1/market-trend").await;
        assert_eq!(current["category"], "all");
        assert_eq!(current["status"], "populated");
        assert_eq!(current["report"]["rows"][0]["pair"], "CAKE/USDT");
    }

    #[tokio::test]
    async fn test_unknown_category_is_bad_request() {
        let (status, body) = get_json(&app(), "/api/v1/market-trend?category=nft").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
        assert!(body["error"].as_str().unwrap().contains("nft"));
    }
}
