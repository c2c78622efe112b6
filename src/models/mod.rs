// Domain types shared across the data and UI layers
pub mod market;
pub mod prefs;

// Re-export commonly used types
pub use market::{CryptoCurrency, PriceHistory};
pub use prefs::{Currency, PrefsPatch, Theme, TimeRange, UserPreferences};
