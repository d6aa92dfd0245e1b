//! Async key-value persistence for the marketplace cart.
//!
//! The cart keeps its whole state in a single string slot of a key-value
//! store. This crate defines that store contract and ships two backends:
//!
//! - [`MemoryStore`] - process memory, for tests and throwaway sessions
//! - [`FileStore`] - one file per key, the on-device store
//!
//! [`JsonStore`] layers JSON (de)serialization over any backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use marketplace_kv::{FileStore, JsonStore, KvStore};
//!
//! let store = FileStore::open("/var/lib/marketplace").await?;
//! store.set("@GoMarketPlaceProducts", "[]".to_string()).await?;
//!
//! let typed = JsonStore::new(store);
//! let items: Option<Vec<serde_json::Value>> = typed.get_json("@GoMarketPlaceProducts").await?;
//! ```

mod error;
mod file;
mod json;
mod kv;
mod memory;

pub use error::{KvError, KvResult};
pub use file::FileStore;
pub use json::JsonStore;
pub use kv::KvStore;
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FileStore, JsonStore, KvError, KvResult, KvStore, MemoryStore};
}
