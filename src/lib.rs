#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod chart;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use data::{MarketClient, MarketDataSource, PrefsStore};
pub use models::{CryptoCurrency, Currency, PriceHistory, Theme, TimeRange, UserPreferences};
pub use ui::DashboardApp;

use std::sync::Arc;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the persisted preferences record
    #[arg(long, default_value = config::PREFS_PATH)]
    pub prefs: std::path::PathBuf,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    _cc: &eframe::CreationContext,
    store: PrefsStore,
    source: Arc<dyn MarketDataSource>,
    rt: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let prefs = store.load();
    log::info!(
        "Starting with {} tracked coins, charting '{}'",
        prefs.selected_coins.len(),
        prefs.selected_coin
    );

    let app = DashboardApp::new(prefs, store, source, rt);
    Box::new(app)
}
