use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Filter tabs of the Market Trend table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    DeFi,
    Layer1,
    Meme,
}

impl Category {
    /// Every tab, in display order.
    pub const ALL: [Category; 4] = [Category::All, Category::DeFi, Category::Layer1, Category::Meme];

    /// Label shown on the tab.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::DeFi => "DeFi",
            Self::Layer1 => "Layer 1",
            Self::Meme => "Meme",
        }
    }

    /// Only `All` is backed by the live pool sweep; the others are placeholders.
    #[must_use]
    pub fn has_data_source(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "all" => Ok(Self::All),
            "defi" => Ok(Self::DeFi),
            "layer1" => Ok(Self::Layer1),
            "meme" => Ok(Self::Meme),
            _ => Err(DomainError::UnknownCategory(s.to_string())),
        }
    }
}
