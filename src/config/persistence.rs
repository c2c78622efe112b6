//! File persistence configuration

/// Default path for the persisted preferences record
pub const PREFS_PATH: &str = "crypto_dashboard_preferences.json";

/// Coin ids tracked by a fresh install, largest caps first
pub const DEFAULT_COINS: [&str; 5] =
    ["bitcoin", "ethereum", "binancecoin", "cardano", "solana"];

/// Coin charted by a fresh install, also the substitute when the
/// tracked set would otherwise be driven empty
pub const FALLBACK_COIN: &str = "bitcoin";
