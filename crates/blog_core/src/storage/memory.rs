//! Process-local key-value backend.

use super::{KeyValueStore, StoreError, StoreResult};
use std::collections::BTreeMap;

/// In-memory slots with an optional total byte quota.
///
/// The quota counts key and value bytes across all slots, so a full store
/// behaves like a browser storage area that refuses further writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store refusing writes that would exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total key and value bytes currently stored.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    /// Raw slot value, for inspection in tests and tooling.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if let Some(quota) = self.quota_bytes {
            let replaced = self
                .entries
                .get(key)
                .map_or(0, |previous| key.len() + previous.len());
            let requested = self.used_bytes() - replaced + key.len() + value.len();
            if requested > quota {
                return Err(StoreError::QuotaExceeded { requested, quota });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
