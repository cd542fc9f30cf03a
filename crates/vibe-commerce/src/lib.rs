//! Catalog, filtering and cart logic for the Vibe Store.
//!
//! - **Catalog**: products and the store's contact block
//! - **Search**: the catalog filter engine and sidebar facets
//! - **Cart**: line items keyed by product and size, totals
//!
//! Everything here is synchronous and free of I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use vibe_commerce::prelude::*;
//!
//! let criteria = FilterCriteria::new()
//!     .with_category(CategoryFilter::Trending)
//!     .with_sizes(["M"]);
//! let visible = filter_products(&catalog, &criteria);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&visible[0], "M");
//! println!("Total: {}", cart.calculate_pricing().total_price);
//! ```

pub mod error;
pub mod ids;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;

    // Catalog
    pub use crate::catalog::{discount_percent, ContactInfo, NewProduct, Product, ProductPatch};

    // Cart
    pub use crate::cart::{Cart, CartLineItem, CartPricing};

    // Search
    pub use crate::search::{filter_products, CategoryFilter, FilterCriteria, PriceRange};
}
