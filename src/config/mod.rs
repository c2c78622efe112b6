//! Configuration module for the dashboard application.

pub mod api;
pub mod persistence;
pub mod ui;

// Re-export commonly used items
pub use api::COINGECKO;
pub use persistence::{DEFAULT_COINS, FALLBACK_COIN, PREFS_PATH};
pub use ui::UI_CONFIG;
