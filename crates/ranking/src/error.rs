use market_trend_domain::DomainError;
use market_trend_protocols::ProtocolError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Invalid configuration {key}: {reason}")]
    Config { key: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RankingError>;
