//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use market_trend_api::prelude::*;
//! ```

pub use crate::error::{ApiError, ServerError};
pub use crate::models::{CategoryTab, HealthResponse, MarketTrendQuery, MarketTrendResponse, TokensResponse};
pub use crate::routes::create_router;
pub use crate::server::{ApiServer, ServerConfig};
pub use crate::state::AppState;
