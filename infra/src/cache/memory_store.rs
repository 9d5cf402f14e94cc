//! Process-local key-value store with per-key expiry

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

use bz_core::services::KeyValueStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// In-memory `KeyValueStore`
///
/// Expired entries read as missing. Every write sweeps out expired entries,
/// so keys for emails that never return do not accumulate.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().await.values().filter(|e| e.is_live(now)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Entries held in the map, expired or not
    #[cfg(test)]
    pub(crate) async fn stored(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Remaining lifetime of a key
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .lock()
            .await
            .get(key)
            .filter(|e| e.is_live(now))
            .map(|e| e.expires_at - now)
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        match entries.get(key) {
            Some(entry) if entry.is_live(now) => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now + Duration::from_secs(ttl_seconds),
        };
        let mut entries = self.entries.lock().await;
        entries.retain(|_, e| e.is_live(now));
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> Result<u64, String> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;
        let removed = keys
            .iter()
            .filter_map(|key| entries.remove(*key))
            .filter(|entry| entry.is_live(now))
            .count();
        Ok(removed as u64)
    }

    async fn incr_with_ttl(&self, key: &str, ttl_seconds: u64) -> Result<u64, String> {
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        let current = match entries.get(key) {
            Some(entry) if entry.is_live(now) => entry
                .value
                .parse::<u64>()
                .map_err(|_| format!("value at '{}' is not an integer", key))?,
            _ => 0,
        };
        let next = current + 1;
        entries.retain(|_, e| e.is_live(now));
        entries.insert(
            key.to_string(),
            Entry {
                value: next.to_string(),
                expires_at: now + Duration::from_secs(ttl_seconds),
            },
        );
        Ok(next)
    }
}
