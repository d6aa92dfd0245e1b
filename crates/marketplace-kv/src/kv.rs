//! The key-value store contract.

use async_trait::async_trait;

use crate::KvResult;

/// Asynchronous string key-value storage.
///
/// Values are opaque strings; encoding is the caller's concern (see
/// [`JsonStore`](crate::JsonStore) for a typed wrapper). A `set` fully
/// replaces whatever was stored under the key.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// Returns `None` if the key doesn't exist.
    async fn get(&self, key: &str) -> KvResult<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: String) -> KvResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> KvResult<()>;

    /// Check if a key exists.
    async fn exists(&self, key: &str) -> KvResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// List all keys currently stored.
    async fn keys(&self) -> KvResult<Vec<String>>;
}

#[async_trait]
impl<S: KvStore + ?Sized> KvStore for std::sync::Arc<S> {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> KvResult<()> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> KvResult<()> {
        (**self).delete(key).await
    }

    async fn exists(&self, key: &str) -> KvResult<bool> {
        (**self).exists(key).await
    }

    async fn keys(&self) -> KvResult<Vec<String>> {
        (**self).keys().await
    }
}

#[async_trait]
impl<S: KvStore + ?Sized> KvStore for Box<S> {
    async fn get(&self, key: &str) -> KvResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> KvResult<()> {
        (**self).set(key, value).await
    }

    async fn delete(&self, key: &str) -> KvResult<()> {
        (**self).delete(key).await
    }

    async fn exists(&self, key: &str) -> KvResult<bool> {
        (**self).exists(key).await
    }

    async fn keys(&self) -> KvResult<Vec<String>> {
        (**self).keys().await
    }
}

/// Helper to build storage keys with namespacing.
///
/// # Example
///
/// ```rust
/// use marketplace_kv::storage_key;
///
/// let user_id = 42;
/// let key = storage_key!("cart", user_id);
/// assert_eq!(key, "cart:42");
/// ```
#[macro_export]
macro_rules! storage_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}
