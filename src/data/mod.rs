// Remote market data and local persistence
pub mod cache;
pub mod market_client;
pub mod prefs_store;

// Re-export commonly used types
pub use market_client::{MarketClient, MarketDataSource};
pub use prefs_store::PrefsStore;
