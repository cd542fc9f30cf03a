//! Where the storefront gets its catalog from.

use crate::StorefrontError;
use async_trait::async_trait;
use vibe_cache::{keys, Cache};
use vibe_commerce::catalog::Product;
use vibe_data::StoreApi;

/// Anything that can produce the current product list.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetch the full catalog, in source order.
    async fn list_products(&self) -> Result<Vec<Product>, StorefrontError>;
}

#[async_trait]
impl ProductSource for StoreApi {
    async fn list_products(&self) -> Result<Vec<Product>, StorefrontError> {
        Ok(StoreApi::list_products(self).await?)
    }
}

/// Reads the admin-maintained product collection from a [`Cache`].
///
/// An empty store yields an empty catalog.
#[derive(Debug, Clone)]
pub struct LocalCatalog {
    cache: Cache,
}

impl LocalCatalog {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl ProductSource for LocalCatalog {
    async fn list_products(&self) -> Result<Vec<Product>, StorefrontError> {
        Ok(self.cache.get(keys::PRODUCTS)?.unwrap_or_default())
    }
}
