//! Storage backends: where serialized session buckets live.
//!
//! [`StorageBackend`] is a synchronous string key-value store (the shape of a browser's
//! session storage). [`MemoryBackend`] keeps data in-process; [`UnavailableBackend`]
//! stands in when no storage exists at all, so the engine runs unchanged during
//! non-interactive rendering.

use dashmap::DashMap;

use crate::error::StorageError;

/// Synchronous key-value store for serialized session buckets.
///
/// **Interaction**: Used as `Arc<dyn StorageBackend>` by [`StateManager`](super::StateManager),
/// which catches and logs every error.
pub trait StorageBackend: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// False when there is no backing store; reads are then empty and writes dropped.
    fn is_available(&self) -> bool {
        true
    }
}

/// In-process backend. Optionally enforces a byte quota over all keys and values.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    data: DashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that rejects writes once keys plus values would exceed `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            data: DashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.data
            .iter()
            .filter(|e| e.key() != key)
            .map(|e| e.key().len() + e.value().len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.get(key).map(|v| v.value().clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.quota {
            if self.used_bytes_excluding(key) + key.len() + value.len() > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.data.remove(key);
        Ok(())
    }
}

/// Backend for contexts without storage: reads nothing, drops writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

impl StorageBackend for UnavailableBackend {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn is_available(&self) -> bool {
        false
    }
}
