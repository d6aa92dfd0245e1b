//! Shared cart state for UI components.

use std::sync::Arc;

use marketplace_kv::KvStore;
use tokio::sync::Mutex;

use crate::cart::{CartChange, CartItem, NewCartItem};
use crate::error::CartError;
use crate::ids::ProductId;
use crate::store::CartStore;

/// Cloneable handle to a loaded [`CartStore`].
///
/// Hand a clone to every component that reads or edits the cart. Each
/// mutation holds the lock across its storage write, so writes land in the
/// order the mutations were called.
#[derive(Debug)]
pub struct CartHandle<S> {
    inner: Arc<Mutex<CartStore<S>>>,
}

impl<S> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KvStore> CartHandle<S> {
    /// Wrap a store that has already been loaded.
    pub fn new(store: CartStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Load the store from `storage` and wrap it.
    pub async fn load(storage: S) -> Result<Self, CartError> {
        Ok(Self::new(CartStore::load(storage).await?))
    }

    /// See [`CartStore::add_to_cart`].
    pub async fn add_to_cart(&self, product: NewCartItem) -> Result<CartChange, CartError> {
        self.inner.lock().await.add_to_cart(product).await
    }

    /// See [`CartStore::increment`].
    pub async fn increment(&self, id: &ProductId) -> Result<CartChange, CartError> {
        self.inner.lock().await.increment(id).await
    }

    /// See [`CartStore::decrement`].
    pub async fn decrement(&self, id: &ProductId) -> Result<CartChange, CartError> {
        self.inner.lock().await.decrement(id).await
    }

    /// Snapshot of the current items.
    pub async fn items(&self) -> Vec<CartItem> {
        self.inner.lock().await.items().to_vec()
    }

    /// Total units across all items.
    pub async fn item_count(&self) -> u64 {
        self.inner.lock().await.item_count()
    }
}
