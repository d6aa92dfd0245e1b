//! Typed JSON wrapper over a [`KvStore`].

use serde::{de::DeserializeOwned, Serialize};

use crate::{KvResult, KvStore};

/// Type-safe view of a key-value store.
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
///
/// # Example
///
/// ```rust,ignore
/// let store = JsonStore::new(MemoryStore::new());
/// store.set_json("cart:user123", &items).await?;
/// let items: Option<Vec<CartItem>> = store.get_json("cart:user123").await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonStore<S> {
    inner: S,
}

impl<S: KvStore> JsonStore<S> {
    /// Wrap a raw store.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Borrow the underlying raw store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap into the underlying raw store.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Get and decode the value under `key`.
    ///
    /// Returns `None` if the key doesn't exist or holds only whitespace; any
    /// other undecodable value is an error.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> KvResult<Option<T>> {
        match self.inner.get(key).await? {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Encode `value` and store it under `key`, replacing any previous value.
    pub async fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> KvResult<()> {
        let raw = serde_json::to_string(value)?;
        self.inner.set(key, raw).await
    }

    /// Remove `key`.
    pub async fn delete(&self, key: &str) -> KvResult<()> {
        self.inner.delete(key).await
    }

    /// Check if a key exists.
    pub async fn exists(&self, key: &str) -> KvResult<bool> {
        self.inner.exists(key).await
    }
}
