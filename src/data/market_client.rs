use std::sync::Mutex;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::COINGECKO;
use crate::data::cache::TtlCache;
use crate::models::{CryptoCurrency, Currency, PriceHistory};

/// Source of market data for the dashboard controller.
///
/// A trait seam so tests can drive the controller with a stub instead of the
/// live API.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    fn signature(&self) -> &'static str;

    /// Up to one page of coins ordered by descending market cap, priced in
    /// `currency`.
    async fn list_markets(&self, currency: Currency) -> Result<Vec<CryptoCurrency>>;

    /// Historical series for one coin over `days`, denominated in `currency`.
    async fn price_history(
        &self,
        coin_id: &str,
        currency: Currency,
        days: u32,
    ) -> Result<PriceHistory>;
}

/// CoinGecko REST client with a per-endpoint TTL memo cache.
///
/// Each instance carries its own cache, so tests construct isolated clients
/// rather than sharing module-level state. Identical in-flight requests are
/// NOT deduplicated: a miss while a prior identical request is outstanding
/// issues a second call. Accepted simplification for this key space.
pub struct MarketClient {
    http: reqwest::Client,
    cache: Mutex<TtlCache>,
}

impl MarketClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(COINGECKO.client.timeout_ms))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            cache: Mutex::new(TtlCache::new(Duration::from_secs(COINGECKO.cache_ttl_secs))),
        })
    }

    /// Fetches `endpoint` (path + query, relative to the API base), serving
    /// a memoized body when one is still fresh.
    async fn get_json(&self, endpoint: &str) -> Result<Value> {
        if let Some(body) = self.lock_cache().get_fresh(endpoint) {
            log::debug!("cache hit for {}", endpoint);
            return Ok(body);
        }

        let url = format!("{}{}", COINGECKO.base_url, endpoint);
        let body: Value = self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .context("Failed to fetch cryptocurrency data")?
            .json()
            .await
            .context("Failed to fetch cryptocurrency data")?;

        self.lock_cache().insert(endpoint.to_string(), body.clone());
        Ok(body)
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, TtlCache> {
        // a poisoned cache lock only ever means a panic mid-insert; the map
        // itself is still usable
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl MarketDataSource for MarketClient {
    fn signature(&self) -> &'static str {
        "CoinGecko API"
    }

    async fn list_markets(&self, currency: Currency) -> Result<Vec<CryptoCurrency>> {
        let endpoint = format!(
            "/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false",
            currency, COINGECKO.limits.markets_page_size, COINGECKO.limits.markets_page,
        );

        let body = self.get_json(&endpoint).await?;
        serde_json::from_value(body).map_err(|e| {
            anyhow!(e).context("Failed to fetch cryptocurrency data")
        })
    }

    async fn price_history(
        &self,
        coin_id: &str,
        currency: Currency,
        days: u32,
    ) -> Result<PriceHistory> {
        let endpoint = format!(
            "/coins/{}/market_chart?vs_currency={}&days={}",
            coin_id, currency, days,
        );

        let body = self.get_json(&endpoint).await?;
        serde_json::from_value(body).map_err(|e| {
            anyhow!(e).context("Failed to fetch cryptocurrency data")
        })
    }
}
