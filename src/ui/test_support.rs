//! Shared fixtures for controller tests: a stub data source and an app
//! wired to a temp-dir preferences store.

use std::sync::Arc;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::data::{MarketDataSource, PrefsStore};
use crate::models::{CryptoCurrency, Currency, PriceHistory, UserPreferences};
use crate::ui::app::DashboardApp;

/// Scripted source: fixed payloads, optional failure, optional "hang
/// forever" mode for loading-state scenarios.
#[derive(Default)]
pub(super) struct StubSource {
    pub(super) markets: Vec<CryptoCurrency>,
    pub(super) history: PriceHistory,
    pub(super) fail: bool,
    pub(super) never_resolve: bool,
}

#[async_trait]
impl MarketDataSource for StubSource {
    fn signature(&self) -> &'static str {
        "stub"
    }

    async fn list_markets(&self, _currency: Currency) -> Result<Vec<CryptoCurrency>> {
        if self.never_resolve {
            std::future::pending::<()>().await;
        }
        if self.fail {
            bail!("stubbed transport failure");
        }
        Ok(self.markets.clone())
    }

    async fn price_history(
        &self,
        _coin_id: &str,
        _currency: Currency,
        _days: u32,
    ) -> Result<PriceHistory> {
        if self.never_resolve {
            std::future::pending::<()>().await;
        }
        if self.fail {
            bail!("stubbed transport failure");
        }
        Ok(self.history.clone())
    }
}

pub(super) fn coin(id: &str, name: &str, symbol: &str, rank: u32) -> CryptoCurrency {
    CryptoCurrency {
        id: id.into(),
        symbol: symbol.into(),
        name: name.into(),
        image: format!("https://example.com/{id}.png"),
        current_price: 100.0,
        market_cap: 2.0e9,
        market_cap_rank: rank,
        price_change_percentage_24h: 1.5,
        total_volume: 5.0e8,
        high_24h: 105.0,
        low_24h: 95.0,
    }
}

/// Keep the returned runtime and temp dir alive for the app's lifetime.
pub(super) fn test_app(
    prefs: UserPreferences,
    source: StubSource,
) -> (DashboardApp, tempfile::TempDir, tokio::runtime::Runtime) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PrefsStore::new(dir.path().join("prefs.json"));
    store.save(&prefs);
    let rt = tokio::runtime::Runtime::new().expect("runtime");
    let app = DashboardApp::new(prefs, store, Arc::new(source), rt.handle().clone());
    (app, dir, rt)
}

/// Polls the app until `done` holds or the timeout lapses.
pub(super) fn poll_until(
    app: &mut DashboardApp,
    ctx: &eframe::egui::Context,
    done: impl Fn(&DashboardApp) -> bool,
) -> bool {
    for _ in 0..500 {
        app.poll_fetches(ctx);
        if done(app) {
            return true;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    false
}
