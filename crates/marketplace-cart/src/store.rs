//! Cart state mirrored to a key-value slot.

use marketplace_kv::{JsonStore, KvStore};
use tracing::{debug, info, instrument};

use crate::cart::{Cart, CartChange, CartItem, NewCartItem};
use crate::config::CartStoreConfig;
use crate::error::CartError;
use crate::ids::ProductId;

/// The cart store.
///
/// Owns the in-memory cart and rewrites the whole list to a single storage
/// key after every mutation. The only way to obtain one is
/// [`CartStore::load`], so a store is always initialized from storage before
/// it can be read or mutated.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::load(MemoryStore::new()).await?;
/// store.add_to_cart(NewCartItem::new("x", "Xbox", "https://...", price)).await?;
/// assert_eq!(store.items()[0].quantity(), 1);
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    storage: JsonStore<S>,
    config: CartStoreConfig,
    cart: Cart,
}

impl<S: KvStore> CartStore<S> {
    /// Load the cart persisted under the default key.
    pub async fn load(storage: S) -> Result<Self, CartError> {
        Self::load_with_config(storage, CartStoreConfig::default()).await
    }

    /// Load the cart persisted under `config.storage_key`.
    ///
    /// A missing or empty slot yields an empty cart. Any other slot that does
    /// not decode to a list of items with unique identifiers is an error.
    #[instrument(skip_all, fields(key = %config.storage_key))]
    pub async fn load_with_config(storage: S, config: CartStoreConfig) -> Result<Self, CartError> {
        let storage = JsonStore::new(storage);
        let cart = match storage
            .get_json::<Vec<CartItem>>(&config.storage_key)
            .await?
        {
            Some(items) => Cart::from_items(items)?,
            None => {
                debug!("no persisted cart, starting empty");
                Cart::new()
            }
        };

        info!(items = cart.len(), units = cart.item_count(), "cart loaded");
        Ok(Self {
            storage,
            config,
            cart,
        })
    }

    /// Add a product, or bump its quantity if already in the cart, then
    /// persist.
    #[instrument(skip_all, fields(product_id = %product.id))]
    pub async fn add_to_cart(&mut self, product: NewCartItem) -> Result<CartChange, CartError> {
        let change = self.cart.add(product)?;
        debug!(?change, "add to cart");
        self.persist().await?;
        Ok(change)
    }

    /// Increase the quantity of `id` by 1 (no-op if absent), then persist.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn increment(&mut self, id: &ProductId) -> Result<CartChange, CartError> {
        let change = self.cart.increment(id)?;
        debug!(?change, "increment");
        self.persist().await?;
        Ok(change)
    }

    /// Decrease the quantity of `id` by 1, removing it at zero (no-op if
    /// absent), then persist.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn decrement(&mut self, id: &ProductId) -> Result<CartChange, CartError> {
        let change = self.cart.decrement(id);
        debug!(?change, "decrement");
        self.persist().await?;
        Ok(change)
    }

    /// Current cart items, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    /// The in-memory cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get an item by identifier.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.cart.get(id)
    }

    /// Total units across all items.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Key of the persisted slot.
    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Borrow the underlying key-value store.
    pub fn storage(&self) -> &S {
        self.storage.inner()
    }

    /// Overwrite the persisted slot with the current list.
    ///
    /// The in-memory cart is not rolled back if the write fails.
    async fn persist(&self) -> Result<(), CartError> {
        self.storage
            .set_json(&self.config.storage_key, &self.cart)
            .await?;
        debug!(items = self.cart.len(), "cart persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketplace_kv::{KvError, MemoryStore};
    use rust_decimal::Decimal;

    fn product(id: &str, price: i64) -> NewCartItem {
        NewCartItem::new(
            id,
            format!("Product {id}"),
            format!("https://cdn.example.com/{id}.png"),
            Decimal::new(price, 0),
        )
    }

    async fn persisted(store: &CartStore<MemoryStore>) -> serde_json::Value {
        let raw = store
            .storage()
            .get(store.storage_key())
            .await
            .unwrap()
            .expect("slot written");
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_load_without_slot_is_empty() {
        let store = CartStore::load(MemoryStore::new()).await.unwrap();
        assert!(store.items().is_empty());
        assert_eq!(store.storage_key(), "@GoMarketPlaceProducts");
    }

    #[tokio::test]
    async fn test_load_reads_persisted_items() {
        let storage = MemoryStore::with_entries([(
            "@GoMarketPlaceProducts",
            r#"[{"id":"a","title":"A","image_url":"u","price":2.5,"quantity":2}]"#,
        )]);

        let store = CartStore::load(storage).await.unwrap();

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].id, "a");
        assert_eq!(store.items()[0].quantity(), 2);
        assert_eq!(store.items()[0].price, Decimal::new(25, 1));
    }

    #[tokio::test]
    async fn test_load_empty_slot_is_empty() {
        let storage = MemoryStore::with_entries([("@GoMarketPlaceProducts", "")]);

        let mut store = CartStore::load(storage).await.unwrap();
        assert!(store.items().is_empty());

        store.add_to_cart(product("x", 10)).await.unwrap();
        assert_eq!(persisted(&store).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_load_malformed_slot_fails() {
        let storage = MemoryStore::with_entries([("@GoMarketPlaceProducts", "not json")]);

        let result = CartStore::load(storage).await;
        assert!(matches!(
            result,
            Err(CartError::Storage(KvError::Serialization(_)))
        ));
    }

    #[tokio::test]
    async fn test_load_duplicate_ids_fails() {
        let storage = MemoryStore::with_entries([(
            "@GoMarketPlaceProducts",
            r#"[{"id":"a","title":"A","image_url":"u","price":1,"quantity":1},
                {"id":"a","title":"A","image_url":"u","price":1,"quantity":3}]"#,
        )]);

        let result = CartStore::load(storage).await;
        assert!(matches!(result, Err(CartError::DuplicateItem(_))));
    }

    #[tokio::test]
    async fn test_load_uses_configured_key() {
        let storage = MemoryStore::with_entries([
            ("@GoMarketPlaceProducts", "[]"),
            (
                "cart:guest",
                r#"[{"id":"g","title":"G","image_url":"u","price":1,"quantity":1}]"#,
            ),
        ]);
        let config = CartStoreConfig::default().with_storage_key("cart:guest");

        let store = CartStore::load_with_config(storage, config).await.unwrap();
        assert_eq!(store.items()[0].id, "g");
    }

    #[tokio::test]
    async fn test_add_persists_post_mutation_list() {
        let mut store = CartStore::load(MemoryStore::new()).await.unwrap();

        store.add_to_cart(product("x", 10)).await.unwrap();

        assert_eq!(
            persisted(&store).await,
            serde_json::json!([{
                "id": "x",
                "title": "Product x",
                "image_url": "https://cdn.example.com/x.png",
                "price": 10.0,
                "quantity": 1
            }])
        );
    }

    #[tokio::test]
    async fn test_add_existing_increments_and_persists() {
        let mut store = CartStore::load(MemoryStore::new()).await.unwrap();

        store.add_to_cart(product("x", 10)).await.unwrap();
        let change = store.add_to_cart(product("x", 10)).await.unwrap();

        assert_eq!(change, CartChange::Incremented(2));
        assert_eq!(persisted(&store).await[0]["quantity"], 2);
        assert_eq!(persisted(&store).await.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_increment_and_decrement_persist() {
        let mut store = CartStore::load(MemoryStore::new()).await.unwrap();
        let id = ProductId::new("a");
        store.add_to_cart(product("a", 3)).await.unwrap();

        store.increment(&id).await.unwrap();
        assert_eq!(persisted(&store).await[0]["quantity"], 2);

        store.decrement(&id).await.unwrap();
        assert_eq!(persisted(&store).await[0]["quantity"], 1);

        assert_eq!(store.decrement(&id).await.unwrap(), CartChange::Removed);
        assert_eq!(persisted(&store).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_noop_still_writes_slot() {
        let mut store = CartStore::load(MemoryStore::new()).await.unwrap();

        let change = store.increment(&ProductId::new("ghost")).await.unwrap();

        assert_eq!(change, CartChange::Unchanged);
        assert_eq!(persisted(&store).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_reload_round_trip() {
        let storage = std::sync::Arc::new(MemoryStore::new());
        let mut store = CartStore::load(storage.clone()).await.unwrap();
        store.add_to_cart(product("a", 1)).await.unwrap();
        store.add_to_cart(product("b", 2)).await.unwrap();
        store.add_to_cart(product("a", 1)).await.unwrap();

        let reloaded = CartStore::load(storage).await.unwrap();
        assert_eq!(reloaded.cart(), store.cart());
    }
}
