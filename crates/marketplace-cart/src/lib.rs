//! Persistent shopping cart state for the marketplace client.
//!
//! This crate keeps an ordered list of cart items in memory and mirrors the
//! full list to one slot of a key-value store after every change:
//!
//! - **Cart**: the item list and its add / increment / decrement rules
//! - **CartStore**: the cart loaded from, and written back to, storage
//! - **CartHandle**: a cloneable, lock-protected store to hand to UI code
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_cart::prelude::*;
//! use marketplace_kv::FileStore;
//! use rust_decimal::Decimal;
//!
//! let storage = FileStore::open("/var/lib/marketplace").await?;
//! let cart = CartHandle::load(storage).await?;
//!
//! cart.add_to_cart(NewCartItem::new(
//!     "1234",
//!     "Camiseta Rocketseat",
//!     "https://cdn.example.com/camiseta.png",
//!     Decimal::new(4990, 2),
//! ))
//! .await?;
//! cart.increment(&ProductId::new("1234")).await?;
//!
//! println!("{} units in cart", cart.item_count().await);
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod handle;
pub mod ids;
pub mod store;

pub use cart::{Cart, CartChange, CartItem, NewCartItem};
pub use config::{CartStoreConfig, DEFAULT_STORAGE_KEY};
pub use error::CartError;
pub use handle::CartHandle;
pub use ids::ProductId;
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartChange, CartItem, NewCartItem};
    pub use crate::config::{CartStoreConfig, DEFAULT_STORAGE_KEY};
    pub use crate::error::CartError;
    pub use crate::handle::CartHandle;
    pub use crate::ids::ProductId;
    pub use crate::store::CartStore;
}
