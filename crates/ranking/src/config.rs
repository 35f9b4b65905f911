//! Runtime configuration.
//!
//! Values come from `MARKET_TREND_*` environment variables (a `.env` file
//! is loaded by the binary first) and fall back to Uniswap V3 on BNB Chain
//! quoted in BSC-USD at the 0.30% tier.

use crate::error::{RankingError, Result};
use market_trend_domain::address::validate_address;
use market_trend_domain::{FeeTier, TokenDescriptor, TokenList};
use market_trend_protocols::rpc::DEFAULT_RPC_URL;
use market_trend_protocols::uniswap_v3::BSC_FACTORY_ADDRESS;
use std::path::PathBuf;
use tracing::debug;

pub const ENV_RPC_URL: &str = "MARKET_TREND_RPC_URL";
pub const ENV_FACTORY_ADDRESS: &str = "MARKET_TREND_FACTORY_ADDRESS";
pub const ENV_QUOTE_SYMBOL: &str = "MARKET_TREND_QUOTE_SYMBOL";
pub const ENV_QUOTE_ADDRESS: &str = "MARKET_TREND_QUOTE_ADDRESS";
pub const ENV_FEE_TIER: &str = "MARKET_TREND_FEE_TIER";
pub const ENV_MAX_ROWS: &str = "MARKET_TREND_MAX_ROWS";
pub const ENV_TOKENS_FILE: &str = "MARKET_TREND_TOKENS_FILE";

/// Rows shown in the table.
pub const DEFAULT_MAX_ROWS: usize = 10;

/// BSC-USD, the quote asset every candidate is paired against by default.
pub const BSC_USD_ADDRESS: &str = "0x55d398326f99059fF775485246999027B3197955";

/// Parameters of a ranking sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingConfig {
    /// Asset every candidate is paired against.
    pub quote: TokenDescriptor,
    pub fee_tier: FeeTier,
    pub max_rows: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            quote: default_quote(),
            fee_tier: FeeTier::MEDIUM,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

fn default_quote() -> TokenDescriptor {
    TokenDescriptor::new("BSC-USD", "Binance-Peg BSC-USD", BSC_USD_ADDRESS, "/icons/usdt.svg")
}

/// Built-in token list. Includes the quote asset, which is filtered out
/// when candidates are enumerated.
#[must_use]
pub fn default_tokens() -> Vec<TokenDescriptor> {
    [
        ("USDT", "Tether USD", BSC_USD_ADDRESS),
        ("WBNB", "Wrapped BNB", "0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
        ("ETH", "Ethereum", "0x2170Ed0880ac9A755fd29B2688956BD959F933F8"),
        ("BTCB", "Bitcoin BEP2", "0x7130d2A12B9BCbFAe4f2634d864A1Ee1Ce3Ead9c"),
        ("CAKE", "PancakeSwap", "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82"),
        ("USDC", "USD Coin", "0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d"),
        ("XRP", "XRP", "0x1D2F0da169ceB9fC7B3144628dB156f3F6c60dBE"),
        ("ADA", "Cardano", "0x3EE2200Efb3400fAbB9AacF31297cBdD1d435D47"),
        ("DOGE", "Dogecoin", "0xbA2aE424d960c26247Dd6c32edC70B295c744C43"),
        ("DOT", "Polkadot", "0x7083609fCE4d1d8Dc0C979AAb8c869Ea2C873402"),
        ("LINK", "Chainlink", "0xF8A0BF9cF54Bb92F17374d9e9A321E6a111a51bD"),
    ]
    .into_iter()
    .map(|(symbol, name, address)| {
        let icon = format!("/icons/{}.svg", symbol.to_lowercase());
        TokenDescriptor::new(symbol, name, address, icon)
    })
    .collect()
}

/// Everything needed to build a ranking engine against a live node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketTrendConfig {
    pub rpc_url: String,
    pub factory_address: String,
    pub ranking: RankingConfig,
    /// JSON token list replacing [`default_tokens`].
    pub tokens_file: Option<PathBuf>,
}

impl Default for MarketTrendConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            factory_address: BSC_FACTORY_ADDRESS.to_string(),
            ranking: RankingConfig::default(),
            tokens_file: None,
        }
    }
}

impl MarketTrendConfig {
    /// Reads the process environment.
    ///
    /// # Errors
    /// Fails when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or blank keys
    /// keep their defaults.
    ///
    /// # Errors
    /// Fails when a value is set but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(url) = get(ENV_RPC_URL) {
            config.rpc_url = url;
        }
        if let Some(factory) = get(ENV_FACTORY_ADDRESS) {
            validate_address(&factory)?;
            config.factory_address = factory;
        }
        if let Some(symbol) = get(ENV_QUOTE_SYMBOL) {
            config.ranking.quote.symbol = symbol.clone();
            config.ranking.quote.name = symbol;
        }
        if let Some(address) = get(ENV_QUOTE_ADDRESS) {
            validate_address(&address)?;
            config.ranking.quote.address = address;
        }
        if let Some(fee) = get(ENV_FEE_TIER) {
            let fee: u32 = fee.parse().map_err(|e| RankingError::Config {
                key: ENV_FEE_TIER,
                reason: format!("{fee:?}: {e}"),
            })?;
            config.ranking.fee_tier = FeeTier::new(fee)?;
        }
        if let Some(rows) = get(ENV_MAX_ROWS) {
            config.ranking.max_rows = match rows.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(RankingError::Config {
                        key: ENV_MAX_ROWS,
                        reason: format!("{rows:?} is not a positive integer"),
                    });
                }
            };
        }
        config.tokens_file = get(ENV_TOKENS_FILE).map(PathBuf::from);

        debug!(
            rpc_url = %config.rpc_url,
            quote = %config.ranking.quote.symbol,
            fee = %config.ranking.fee_tier,
            max_rows = config.ranking.max_rows,
            "Loaded market trend configuration"
        );
        Ok(config)
    }

    /// Loads the token list from [`Self::tokens_file`] or the built-in list.
    ///
    /// # Errors
    /// Fails when the file cannot be read or the list does not validate.
    pub fn token_list(&self) -> Result<TokenList> {
        let quote = &self.ranking.quote.address;
        let list = match &self.tokens_file {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                TokenList::from_json_str(&json, quote)?
            }
            None => TokenList::new(default_tokens(), quote)?,
        };
        Ok(list)
    }
}
