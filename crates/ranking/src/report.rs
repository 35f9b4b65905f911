use chrono::{DateTime, Utc};
use market_trend_domain::RankedPoolRow;
use serde::{Deserialize, Serialize};

/// Outcome of one ranking sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    /// Ranked rows, best first.
    pub rows: Vec<RankedPoolRow>,
    /// Tokens paired against the quote asset.
    pub candidates: usize,
    /// Candidates for which the registry has no pool.
    pub missing: usize,
    /// Candidates dropped because a read failed.
    pub failed: usize,
    /// Candidates whose pool was read but could not be priced.
    #[serde(default)]
    pub unpriced: usize,
    pub fetched_at: DateTime<Utc>,
}

impl RankingReport {
    /// True when no row survived, whatever the reason.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// True when every candidate failed, which in practice means the node
    /// could not be reached at all. Unpriced pools answered, so they never
    /// count towards this.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.candidates > 0 && self.failed == self.candidates
    }

    /// Candidates that produced a pool quote before truncation.
    #[must_use]
    pub fn resolved(&self) -> usize {
        self.candidates
            .saturating_sub(self.missing + self.failed + self.unpriced)
    }
}
