//! Storefront session state and catalog polling for the Vibe Store.
//!
//! - [`Storefront`]: the catalog a visitor sees, the sidebar filters and the cart
//! - [`ProductSource`]: where the catalog comes from (REST API or local cache)
//! - [`CatalogPoller`]: refreshes the catalog in the background
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tokio::sync::watch;
//! use vibe_storefront::{CatalogPoller, Storefront, DEFAULT_INTERVAL};
//!
//! let (tx, mut rx) = watch::channel(Vec::new());
//! let poller = CatalogPoller::spawn(Arc::new(api), DEFAULT_INTERVAL, tx);
//!
//! let mut store = Storefront::new();
//! while rx.changed().await.is_ok() {
//!     store.set_catalog(rx.borrow_and_update().clone());
//! }
//! ```

mod error;
mod poller;
mod source;
mod storefront;

pub use error::StorefrontError;
pub use poller::{CatalogPoller, DEFAULT_INTERVAL, MIN_INTERVAL};
pub use source::{LocalCatalog, ProductSource};
pub use storefront::Storefront;
