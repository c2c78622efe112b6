use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

struct CacheEntry {
    body: Value,
    fetched_at: Instant,
}

/// Endpoint-keyed memoization of raw API responses.
///
/// An entry is served verbatim while younger than the TTL, else the caller
/// re-fetches and `insert` replaces it. Key space is small and bounded (a few
/// coins by a few currencies by a few windows), so there is no eviction.
pub struct TtlCache {
    entries: HashMap<String, CacheEntry>,
    ttl: Duration,
}

impl TtlCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the cached body for `key` if its age is still under the TTL.
    pub fn get_fresh(&self, key: &str) -> Option<Value> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() < self.ttl {
            Some(entry.body.clone())
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: String, body: Value) {
        self.entries.insert(
            key,
            CacheEntry {
                body,
                fetched_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
