//! Storefront errors.

use thiserror::Error;
use vibe_commerce::ProductId;

/// Storefront error type.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// The remote catalog could not be fetched.
    #[error(transparent)]
    Fetch(#[from] vibe_data::FetchError),

    /// The local catalog could not be read.
    #[error(transparent)]
    Cache(#[from] vibe_cache::CacheError),

    /// Any other product source failure.
    #[error("product source failed: {0}")]
    Source(String),

    /// Product is not in the current catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product is not offered in the requested size.
    #[error("product {id} is not available in size {size}")]
    SizeUnavailable { id: ProductId, size: String },
}
