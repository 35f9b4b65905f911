use thiserror::Error;

/// Errors raised while building or interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Token list is empty")]
    EmptyTokenList,

    #[error("Duplicate token address {address} ({symbol})")]
    DuplicateToken { symbol: String, address: String },

    #[error("Failed to parse token list: {0}")]
    TokenListParse(String),

    #[error("Invalid fee tier: {0}")]
    InvalidFeeTier(u32),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Value does not fit a decimal: {0}")]
    DecimalOverflow(&'static str),
}
