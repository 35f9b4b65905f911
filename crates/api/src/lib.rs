//! JSON API behind the Market Trend widget.
//!
//! The landing page polls these endpoints instead of talking to the chain:
//! - `GET /api/v1/health`
//! - `GET /api/v1/tokens` lists the configured tokens and the quote asset
//! - `GET /api/v1/market-trend` returns the current table state, and with
//!   `?category=` loads that tab for the caller

/// Error types.
pub mod error;
/// Request handlers.
pub mod handlers;
/// API request/response models.
pub mod models;
/// Prelude module for convenient imports.
pub mod prelude;
/// Route definitions.
pub mod routes;
/// Server configuration and startup.
pub mod server;
/// Application state.
pub mod state;

pub use error::{ApiError, ServerError};
pub use routes::create_router;
pub use server::{ApiServer, ServerConfig};
pub use state::AppState;
