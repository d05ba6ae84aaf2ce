//! Session storage abstract Trait

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::DialogResult;

/// Session Store Trait
///
/// Opaque key/value store shared by all requests of one client session.
/// Only last-writer-wins per key is assumed; two tabs racing on the same key
/// simply overwrite each other.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key present
    /// * `Ok(None)` - key absent
    async fn get(&self, key: &str) -> DialogResult<Option<Value>>;

    /// Write a value, replacing any previous one
    async fn put(&self, key: &str, value: Value) -> DialogResult<()>;

    /// Remove a value (absent keys are not an error)
    async fn remove(&self, key: &str) -> DialogResult<()>;
}

/// In-memory session store
///
/// Default implementation, suitable for a single process and for tests.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    values: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> DialogResult<Option<Value>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, value: Value) -> DialogResult<()> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> DialogResult<()> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn put_get_remove() {
        let store = InMemorySessionStore::new();
        assert!(store.get("k").await.unwrap().is_none());

        store.put("k", json!({"a": 1})).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!({"a": 1})));

        store.remove("k").await.unwrap();
        assert!(store.is_empty().await);
        store.remove("k").await.unwrap();
    }

    #[tokio::test]
    async fn last_writer_wins() {
        let store = InMemorySessionStore::new();
        let other_tab = store.clone();

        store.put("k", json!(1)).await.unwrap();
        other_tab.put("k", json!(2)).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some(json!(2)));
        assert_eq!(store.len().await, 1);
    }
}
