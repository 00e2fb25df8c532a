//! Trait abstraction for the key-value backend to enable mocking in tests

use super::StorageError;
use async_trait::async_trait;

/// String key-value store holding serialized forms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if never written
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
