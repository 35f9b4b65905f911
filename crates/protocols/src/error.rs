use market_trend_domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    #[error("{call} call failed: {message}")]
    Call { call: &'static str, message: String },

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProtocolError {
    pub(crate) fn call(call: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Call {
            call,
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
