use serde::{Deserialize, Deserializer, Serialize};

/// CoinGecko serializes missing numbers as explicit `null`; fold both the
/// absent and the null case into the type's default.
fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// One market entry as returned by `/coins/markets`.
///
/// Immutable snapshot of the upstream payload; the dashboard never mutates
/// these, it replaces the whole list on re-fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoCurrency {
    /// Upstream identifier (e.g. "bitcoin")
    pub id: String,
    /// Ticker symbol, lowercase on the wire (e.g. "btc")
    pub symbol: String,
    pub name: String,
    /// Icon URL. Carried for wire fidelity, not rendered.
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    // CoinGecko nulls rank and 24h change for stale listings. One odd entry
    // must not fail the whole page.
    #[serde(default, deserialize_with = "null_to_default")]
    pub market_cap_rank: u32,
    #[serde(default, deserialize_with = "null_to_default")]
    pub price_change_percentage_24h: f64,
    pub total_volume: f64,
    pub high_24h: f64,
    pub low_24h: f64,
}

/// Time series returned by `/coins/{id}/market_chart`.
///
/// Three parallel sequences of (epoch-ms, value) samples, ascending by
/// timestamp. Any of them may be empty for a thin window.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceHistory {
    pub prices: Vec<(f64, f64)>,
    pub market_caps: Vec<(f64, f64)>,
    pub total_volumes: Vec<(f64, f64)>,
}

impl PriceHistory {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_entry_deserializes_with_null_rank_and_change() {
        let raw = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 65000.5,
            "market_cap": 1.28e12,
            "market_cap_rank": null,
            "price_change_percentage_24h": null,
            "total_volume": 3.2e10,
            "high_24h": 66000.0,
            "low_24h": 64000.0
        }"#;

        let coin: CryptoCurrency = serde_json::from_str(raw).expect("valid entry");
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.market_cap_rank, 0);
        assert_eq!(coin.price_change_percentage_24h, 0.0);
    }

    #[test]
    fn history_deserializes_from_pair_arrays() {
        let raw = r#"{
            "prices": [[1700000000000, 42000.0], [1700003600000, 42100.0]],
            "market_caps": [[1700000000000, 8.2e11]],
            "total_volumes": []
        }"#;

        let history: PriceHistory = serde_json::from_str(raw).expect("valid history");
        assert_eq!(history.prices.len(), 2);
        assert_eq!(history.prices[1].1, 42100.0);
        assert!(history.total_volumes.is_empty());
        assert!(!history.is_empty());
    }
}
