use std::fmt;
use std::sync::Arc;

use eframe::{egui, Frame};
use poll_promise::Promise;

use crate::data::{MarketDataSource, PrefsStore};
use crate::models::{CryptoCurrency, PriceHistory, UserPreferences};
use crate::ui::app_fetch::FetchOutcome;
use crate::ui::chart_view::PriceChartView;
use crate::ui::styles::apply_theme;

/// Error types for dashboard operations
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Any transport, status or response-shape failure from the data source
    FetchFailed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::FetchFailed(msg) => write!(f, "Failed to fetch data: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// The dashboard controller: owns all mutable UI state, schedules fetches
/// via stale flags resolved once per frame, and persists preferences through
/// the injected store on every relevant change.
pub struct DashboardApp {
    // Live copy of the persisted record
    pub(super) prefs: UserPreferences,
    pub(super) store: PrefsStore,
    pub(super) source: Arc<dyn MarketDataSource>,
    pub(super) rt: tokio::runtime::Handle,

    // Last-fetched data, discarded wholesale on re-fetch
    pub(super) markets: Vec<CryptoCurrency>,
    pub(super) history: Option<PriceHistory>,
    pub(super) last_error: Option<AppError>,

    // In-flight work. A stale flag with no promise in flight spawns a fetch
    // on the next frame; each spawn captures the current sequence so a
    // superseded response can be told apart from the newest one.
    pub(super) markets_promise: Option<Promise<FetchOutcome<Vec<CryptoCurrency>>>>,
    pub(super) history_promise: Option<Promise<FetchOutcome<PriceHistory>>>,
    pub(super) markets_stale: bool,
    pub(super) history_stale: bool,
    pub(super) markets_seq: u64,
    pub(super) history_seq: u64,

    pub(super) chart_view: PriceChartView,
}

impl DashboardApp {
    pub fn new(
        mut prefs: UserPreferences,
        store: PrefsStore,
        source: Arc<dyn MarketDataSource>,
        rt: tokio::runtime::Handle,
    ) -> Self {
        // Re-establish the tracked-set invariants in case the record on disk
        // predates them or was edited by hand.
        if prefs.selected_coins.is_empty() {
            log::warn!("Empty tracked-coin set on load, falling back to defaults");
            prefs.selected_coins = UserPreferences::default().selected_coins;
        }
        if !prefs.selected_coins.contains(&prefs.selected_coin) {
            log::info!(
                "Charted coin '{}' is not tracked, defaulting to first tracked coin",
                prefs.selected_coin
            );
            prefs.selected_coin = prefs.selected_coins[0].clone();
        }

        Self {
            prefs,
            store,
            source,
            rt,
            markets: Vec::new(),
            history: None,
            last_error: None,
            markets_promise: None,
            history_promise: None,
            // Both fetch kinds start stale: the mount transition
            markets_stale: true,
            history_stale: true,
            markets_seq: 0,
            history_seq: 0,
            chart_view: PriceChartView,
        }
    }

    /// Coin list is loading until the first page has arrived
    pub(super) fn is_list_loading(&self) -> bool {
        self.markets_promise.is_some() || self.markets_stale
    }

    pub(super) fn is_chart_loading(&self) -> bool {
        self.history_promise.is_some() || self.history_stale
    }

    /// Tracked coins present in the fetched list, in tracking order.
    pub(super) fn tracked_markets(&self) -> Vec<&CryptoCurrency> {
        self.prefs
            .selected_coins
            .iter()
            .filter_map(|id| self.markets.iter().find(|c| &c.id == id))
            .collect()
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        apply_theme(ctx, self.prefs.theme);

        self.poll_fetches(ctx);
        self.spawn_stale_fetches();

        self.render_header(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
    }
}
