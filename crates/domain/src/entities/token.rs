use crate::address::{same_address, validate_address};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A token as configured for the Market Trend table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub symbol: String,
    pub name: String,
    pub address: String,
    pub icon: String,
}

impl TokenDescriptor {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            address: address.into(),
            icon: icon.into(),
        }
    }

    /// True when this token lives at `address`.
    #[must_use]
    pub fn is_at(&self, address: &str) -> bool {
        same_address(&self.address, address)
    }
}

/// Validated, immutable list of token descriptors.
///
/// The list may contain the quote asset itself; it is filtered out when
/// candidates are enumerated. Every other address must be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenList {
    tokens: Vec<TokenDescriptor>,
}

impl TokenList {
    /// Validates and wraps `tokens`.
    ///
    /// # Errors
    /// Fails on an empty list, a malformed address, or a duplicate address
    /// outside the quote asset.
    pub fn new(tokens: Vec<TokenDescriptor>, quote_address: &str) -> Result<Self, DomainError> {
        if tokens.is_empty() {
            return Err(DomainError::EmptyTokenList);
        }

        let mut seen = HashSet::new();
        for token in &tokens {
            validate_address(&token.address)?;
            if token.is_at(quote_address) {
                continue;
            }
            if !seen.insert(token.address.to_ascii_lowercase()) {
                return Err(DomainError::DuplicateToken {
                    symbol: token.symbol.clone(),
                    address: token.address.clone(),
                });
            }
        }

        Ok(Self { tokens })
    }

    /// Parses a JSON array of `{symbol, name, address, icon}` objects.
    ///
    /// # Errors
    /// Returns [`DomainError::TokenListParse`] on malformed JSON, or any
    /// validation error from [`TokenList::new`].
    pub fn from_json_str(json: &str, quote_address: &str) -> Result<Self, DomainError> {
        let tokens: Vec<TokenDescriptor> =
            serde_json::from_str(json).map_err(|e| DomainError::TokenListParse(e.to_string()))?;
        Self::new(tokens, quote_address)
    }

    /// Tokens that can be paired against the quote asset.
    pub fn candidates<'a>(
        &'a self,
        quote_address: &'a str,
    ) -> impl Iterator<Item = &'a TokenDescriptor> + 'a {
        self.tokens.iter().filter(move |t| !t.is_at(quote_address))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[TokenDescriptor] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
