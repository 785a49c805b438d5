//! TTL-based cache for image search results.
//!
//! Gallery lookups for the same landmark repeat across sessions; results are
//! kept for a configurable time so repeat visits do not hit the network.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// Upper bound on stored entries before expired ones are swept on insert.
const SWEEP_THRESHOLD: usize = 256;

/// A thread-safe cache with time-to-live expiration.
///
/// Expired entries are never returned. They are dropped by
/// [`TtlCache::cleanup_expired`] or swept on insert once the cache grows
/// past a small threshold.
pub struct TtlCache<K, V> {
    entries: RwLock<HashMap<K, TtlEntry<V>>>,
    ttl: Duration,
}

struct TtlEntry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V> TtlEntry<V> {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.inserted_at.elapsed() < ttl
    }
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Insert a value, replacing any existing entry and resetting the TTL.
    pub async fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Instant::now()).await;
    }

    async fn insert_at(&self, key: K, value: V, inserted_at: Instant) {
        let ttl = self.ttl;
        let mut guard = self.entries.write().await;
        if guard.len() >= SWEEP_THRESHOLD {
            guard.retain(|_, entry| entry.is_fresh(ttl));
        }
        guard.insert(key, TtlEntry { value, inserted_at });
    }

    /// Get a value if it exists and hasn't expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let guard = self.entries.read().await;
        guard
            .get(key)
            .filter(|entry| entry.is_fresh(self.ttl))
            .map(|entry| entry.value.clone())
    }

    /// Remove all expired entries and return how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut guard = self.entries.write().await;
        let before = guard.len();
        guard.retain(|_, entry| entry.is_fresh(ttl));
        before - guard.len()
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
