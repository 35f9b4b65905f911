use crate::error::ServerError;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use tokio::net::{TcpListener, lookup_host};
use tracing::{debug, info, warn};

pub const ENV_API_HOST: &str = "MARKET_TREND_API_HOST";
pub const ENV_API_PORT: &str = "MARKET_TREND_API_PORT";

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP literal or host name.
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Reads `MARKET_TREND_API_HOST` / `MARKET_TREND_API_PORT`.
    ///
    /// # Errors
    /// Fails when the port is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or blank keys
    /// keep their defaults.
    ///
    /// # Errors
    /// Fails when the port is set but is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();
        if let Some(host) = get(ENV_API_HOST) {
            config.host = host;
        }
        if let Some(port) = get(ENV_API_PORT) {
            config.port = port.parse().map_err(|e| ServerError::Config {
                key: ENV_API_PORT,
                reason: format!("{port:?}: {e}"),
            })?;
        }

        debug!(host = %config.host, port = config.port, "Loaded API server configuration");
        Ok(config)
    }

    /// Resolves host and port to the first socket address to bind.
    ///
    /// # Errors
    /// Fails when the host does not resolve.
    pub async fn resolve_addr(&self) -> std::io::Result<SocketAddr> {
        lookup_host((self.host.as_str(), self.port))
            .await?
            .next()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::AddrNotAvailable,
                    format!("{} resolved to no address", self.host),
                )
            })
    }
}

/// Serves the router until Ctrl-C.
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Binds and serves.
    ///
    /// # Errors
    /// Fails when the address does not resolve or cannot be bound.
    pub async fn run(self) -> Result<(), ServerError> {
        let addr = self.config.resolve_addr().await?;
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "Market trend API listening");

        axum::serve(listener, create_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down API server"),
        Err(e) => {
            warn!(error = %e, "Cannot listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
