//! Type-safe key-value persistence for the Vibe Store.
//!
//! Holds the blobs a browser would keep in local storage: the product
//! collection, the contact block, registered users and the admin session
//! flag. Values are JSON-encoded under the fixed names in [`keys`].
//!
//! # Example
//!
//! ```rust,ignore
//! use vibe_cache::{keys, Cache};
//!
//! let cache = Cache::open("./.vibe-data")?;
//! cache.set(keys::CONTACTS, &contacts)?;
//! let contacts: Option<ContactInfo> = cache.get(keys::CONTACTS)?;
//! ```

mod error;
mod kv;
mod store;

pub mod keys;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, Cache, CacheError, KeyValueStore};
}
