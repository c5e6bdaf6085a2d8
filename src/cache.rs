//! Advisory caching for expensive per-team snapshots.
//!
//! The cache is an injected capability, not a process-wide static: components
//! that want caching take a `&dyn AnalysisCache` and default to [`NoopCache`].
//! Entries are stale-tolerant hints with a bounded expiry; recomputation from
//! the result store is always idempotent, so nothing ever needs coordinated
//! invalidation.

use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Key-value store with per-entry TTL used to memoize form and congestion
/// snapshots. Implementations must treat entries as advisory only.
pub trait AnalysisCache: Send + Sync {
    /// Fetch a cached value if present and not expired.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a value, valid for `ttl` at most.
    fn put(&self, key: &str, value: Value, ttl: Duration);
}

/// Default cache: stores nothing, every lookup recomputes.
#[derive(Debug, Default)]
pub struct NoopCache;

impl AnalysisCache for NoopCache {
    fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    fn put(&self, _key: &str, _value: Value, _ttl: Duration) {}
}

struct Entry {
    value: Value,
    expires_at: Instant,
}

/// Bounded in-memory LRU cache with per-entry expiry.
pub struct MemoryCache {
    entries: Mutex<LruCache<String, Entry>>,
}

impl MemoryCache {
    /// Create a cache holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).expect("cache capacity must be non-zero"),
            )),
        }
    }

    /// Number of live entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AnalysisCache for MemoryCache {
    fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.lock().unwrap();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.pop(key);
                None
            }
            None => None,
        }
    }

    fn put(&self, key: &str, value: Value, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.entries.lock().unwrap().put(key.to_string(), entry);
    }
}
