//! CoinGecko-specific configuration constants and types.

/// Configuration for REST request shape and limits
pub struct RestLimits {
    /// Number of market entries requested per page
    pub markets_page_size: u32,
    /// Page index requested (the dashboard only ever needs page 1)
    pub markets_page: u32,
}

/// Default values for the Rest Client
pub struct ClientDefaults {
    pub timeout_ms: u64,
}

/// The Master Configuration Struct
pub struct CoinGeckoConfig {
    /// REST base URL for the CoinGecko v3 API
    pub base_url: &'static str,
    pub limits: RestLimits,
    pub client: ClientDefaults,
    /// Maximum age of a memoized response before a fresh request is issued (seconds)
    pub cache_ttl_secs: u64,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    limits: RestLimits {
        markets_page_size: 100,
        markets_page: 1,
    },
    client: ClientDefaults { timeout_ms: 10_000 },
    cache_ttl_secs: 60,
};
