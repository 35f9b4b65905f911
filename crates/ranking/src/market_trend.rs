//! State behind the Market Trend widget.
//!
//! The widget shows one category tab at a time. Only [`Category::All`] is
//! backed by the pool sweep; the other tabs render a "coming soon"
//! placeholder without touching the network. Every state change is
//! published on a [`watch`] channel so any number of views can follow it.
//!
//! At most one sweep is in flight. It runs on its own task, so callers that
//! ask for `All` while it is loading wait for that sweep instead of starting
//! another one, and dropping a caller never leaves the view stuck loading.

use crate::engine::RankingEngine;
use crate::report::RankingReport;
use market_trend_domain::Category;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::{debug, info};

/// What the table currently shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "report", rename_all = "snake_case")]
pub enum TrendState {
    /// Nothing requested yet.
    Idle,
    /// A sweep is in flight.
    Loading,
    /// Sweep finished; the rows may be empty ("no pools found").
    Populated(RankingReport),
    /// Every candidate failed; the report is kept for its counters.
    Unavailable(RankingReport),
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendView {
    pub category: Category,
    pub state: TrendState,
}

impl Default for TrendView {
    fn default() -> Self {
        Self {
            category: Category::All,
            state: TrendState::Idle,
        }
    }
}

impl TrendView {
    fn coming_soon(category: Category) -> Self {
        Self {
            category,
            state: TrendState::ComingSoon,
        }
    }

    fn is_loading(&self) -> bool {
        self.state == TrendState::Loading
    }
}

/// Category selection plus the latest sweep result.
pub struct MarketTrend {
    shared: Arc<Shared>,
}

struct Shared {
    engine: RankingEngine,
    view: watch::Sender<TrendView>,
    // Bumped when a sweep starts or the tab changes; a sweep only publishes
    // while its generation is still current.
    generation: AtomicU64,
}

impl MarketTrend {
    pub fn new(engine: RankingEngine) -> Self {
        let (view, _) = watch::channel(TrendView::default());
        Self {
            shared: Arc::new(Shared {
                engine,
                view,
                generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn engine(&self) -> &RankingEngine {
        &self.shared.engine
    }

    /// Snapshot of the current view.
    pub fn view(&self) -> TrendView {
        self.shared.view.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrendView> {
        self.shared.view.subscribe()
    }

    /// Switches tab. Selecting `All` starts a sweep, or joins the one already
    /// loading, and resolves once a result is published; other tabs resolve
    /// immediately.
    ///
    /// Returns the view as it stands afterwards, which may already belong to
    /// a later selection.
    pub async fn select_category(&self, category: Category) -> TrendView {
        if !category.has_data_source() {
            self.shared.view.send_modify(|view| {
                self.shared.generation.fetch_add(1, Ordering::SeqCst);
                *view = TrendView::coming_soon(category);
            });
            debug!(%category, "Category has no data source");
            return self.view();
        }
        self.begin_sweep(Some(category));
        self.settled().await
    }

    /// Re-runs the sweep when `All` is active; otherwise a no-op. A sweep
    /// that is already loading is joined rather than restarted.
    pub async fn refresh(&self) -> TrendView {
        if self.begin_sweep(None) {
            self.settled().await
        } else {
            self.view()
        }
    }

    /// Answers a one-off request for `category` without moving the shared
    /// tab off `All`.
    ///
    /// `All` behaves like [`Self::select_category`]. Tabs without a data
    /// source get a "coming soon" view that is not published.
    pub async fn fetch(&self, category: Category) -> TrendView {
        if category.has_data_source() {
            self.select_category(category).await
        } else {
            TrendView::coming_soon(category)
        }
    }

    /// Puts the tab into `Loading` and spawns a sweep, unless that tab is
    /// already loading. `None` keeps the current tab.
    ///
    /// Returns false when the tab has no data source.
    fn begin_sweep(&self, target: Option<Category>) -> bool {
        let shared = &self.shared;
        let mut active = false;
        let mut started = None;
        shared.view.send_if_modified(|view| {
            let category = target.unwrap_or(view.category);
            if !category.has_data_source() {
                return false;
            }
            active = true;
            if view.category == category && view.is_loading() {
                return false;
            }
            started = Some(shared.generation.fetch_add(1, Ordering::SeqCst) + 1);
            view.category = category;
            view.state = TrendState::Loading;
            true
        });

        match started {
            Some(generation) => {
                let shared = Arc::clone(&self.shared);
                tokio::spawn(async move { shared.sweep(generation).await });
            }
            None if active => debug!("Joining sweep in flight"),
            None => {}
        }
        active
    }

    /// Waits until the view leaves `Loading`.
    async fn settled(&self) -> TrendView {
        let mut rx = self.shared.view.subscribe();
        match rx.wait_for(|view| !view.is_loading()).await {
            Ok(view) => view.clone(),
            Err(_) => self.view(),
        }
    }
}

impl Shared {
    async fn sweep(&self, generation: u64) {
        let report = self.engine.discover_and_rank().await;
        let rows = report.rows.len();
        let state = if report.is_unavailable() {
            TrendState::Unavailable(report)
        } else {
            TrendState::Populated(report)
        };

        let published = self.view.send_if_modified(|view| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            view.state = state;
            true
        });

        if published {
            info!(rows, "Market trend updated");
        } else {
            debug!(generation, "Discarding stale sweep");
        }
    }
}
