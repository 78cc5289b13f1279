use std::collections::HashMap;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::key::QueryKey;

#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    stale: bool,
}

/// In-process cached-query store shared by every view subscribed to a key.
///
/// Entries are written only by the fetch path that owns the key; everything
/// else reads, and the single write-like operation is `invalidate`, which
/// marks entries stale so the next access refetches.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, CacheEntry>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Fresh value for the key, if any. Stale entries behave as misses.
    pub async fn get(&self, key: &QueryKey) -> Option<Value> {
        let entries = self.entries.read().await;
        entries.get(key).filter(|entry| !entry.stale).map(|entry| entry.value.clone())
    }

    pub async fn put(&self, key: QueryKey, value: Value) {
        let mut entries = self.entries.write().await;
        entries.insert(key, CacheEntry { value, stale: false });
    }

    /// Mark every entry under `prefix` stale and return how many were touched.
    pub async fn invalidate(&self, prefix: &QueryKey) -> usize {
        let mut entries = self.entries.write().await;
        let mut touched = 0;
        for (key, entry) in entries.iter_mut() {
            if key.starts_with(prefix) && !entry.stale {
                entry.stale = true;
                touched += 1;
            }
        }
        debug!("Invalidated {} cached entries under {}", touched, prefix);
        touched
    }

    /// Staleness of a specific entry; `None` when the key was never cached.
    pub async fn is_stale(&self, key: &QueryKey) -> Option<bool> {
        let entries = self.entries.read().await;
        entries.get(key).map(|entry| entry.stale)
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}
