use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Whole-value snapshot slots keyed by name.
///
/// The app persists small state blobs (the timer history list) as one
/// serialized value per key, rewritten in full after every mutation. Keeping
/// the contract this narrow lets the backend be swapped for any durable
/// key-value store without touching the state machines.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing a missing key is fine.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Simple in-memory snapshot store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemorySnapshots {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySnapshots {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SnapshotRepository for InMemorySnapshots {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_put_get_delete() {
        let repo = InMemorySnapshots::new();
        assert_eq!(repo.get("history").await.unwrap(), None);

        repo.put("history", "[]").await.unwrap();
        assert_eq!(repo.get("history").await.unwrap().as_deref(), Some("[]"));

        repo.put("history", "[1]").await.unwrap();
        assert_eq!(repo.get("history").await.unwrap().as_deref(), Some("[1]"));

        repo.delete("history").await.unwrap();
        assert_eq!(repo.get("history").await.unwrap(), None);

        // Deleting again is not an error.
        repo.delete("history").await.unwrap();
    }
}
