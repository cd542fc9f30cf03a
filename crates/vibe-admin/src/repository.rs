//! Product and contact persistence.
//!
//! The admin panel talks to these traits only. Local implementations keep
//! everything in a [`Cache`] (one JSON blob per collection); remote ones go
//! through [`StoreApi`].

use crate::AdminError;
use async_trait::async_trait;
use tracing::info;
use vibe_cache::{keys, Cache};
use vibe_commerce::catalog::{ContactInfo, NewProduct, Product, ProductPatch};
use vibe_commerce::ProductId;
use vibe_data::StoreApi;
use vibe_storefront::{ProductSource, StorefrontError};

/// Storage for the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in storage order.
    async fn list(&self) -> Result<Vec<Product>, AdminError>;

    /// Store a new product and return it as saved.
    async fn create(&self, product: Product) -> Result<Product, AdminError>;

    /// Replace an existing product and return it as saved.
    async fn update(&self, product: Product) -> Result<Product, AdminError>;

    async fn delete(&self, id: ProductId) -> Result<(), AdminError>;
}

/// Storage for the store's contact block.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn load(&self) -> Result<ContactInfo, AdminError>;

    async fn save(&self, contacts: ContactInfo) -> Result<ContactInfo, AdminError>;
}

/// Products kept under the products key of a [`Cache`].
///
/// Every mutation rewrites the whole collection.
#[derive(Debug, Clone)]
pub struct LocalProductRepository {
    cache: Cache,
}

impl LocalProductRepository {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }

    fn save_all(&self, products: &[Product]) -> Result<(), AdminError> {
        self.cache.set(keys::PRODUCTS, products)?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for LocalProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AdminError> {
        Ok(self.cache.get(keys::PRODUCTS)?.unwrap_or_default())
    }

    async fn create(&self, product: Product) -> Result<Product, AdminError> {
        let mut products = self.list().await?;
        products.push(product.clone());
        self.save_all(&products)?;
        info!(id = %product.id, name = %product.name, "created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> Result<Product, AdminError> {
        let mut products = self.list().await?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(AdminError::ProductNotFound(product.id))?;
        *slot = product.clone();
        self.save_all(&products)?;
        info!(id = %product.id, "updated product");
        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> Result<(), AdminError> {
        let mut products = self.list().await?;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(AdminError::ProductNotFound(id));
        }
        self.save_all(&products)?;
        info!(id = %id, "deleted product");
        Ok(())
    }
}

/// Products managed by the remote products function.
///
/// The server assigns ids on create, so the id of the product passed to
/// [`ProductRepository::create`] is ignored.
#[derive(Debug, Clone)]
pub struct RemoteProductRepository {
    api: StoreApi,
}

impl RemoteProductRepository {
    pub fn new(api: StoreApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductRepository for RemoteProductRepository {
    async fn list(&self) -> Result<Vec<Product>, AdminError> {
        Ok(self.api.list_products().await?)
    }

    async fn create(&self, product: Product) -> Result<Product, AdminError> {
        let body = NewProduct::from(product);
        Ok(self.api.create_product(&body).await?)
    }

    async fn update(&self, product: Product) -> Result<Product, AdminError> {
        let id = product.id;
        let patch = ProductPatch::from(NewProduct::from(product));
        Ok(self.api.update_product(id, &patch).await?)
    }

    async fn delete(&self, id: ProductId) -> Result<(), AdminError> {
        Ok(self.api.delete_product(id).await?)
    }
}

/// Contacts kept under the contacts key of a [`Cache`].
#[derive(Debug, Clone)]
pub struct LocalContactRepository {
    cache: Cache,
}

impl LocalContactRepository {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl ContactRepository for LocalContactRepository {
    /// Falls back to the built-in contact block when nothing is stored.
    async fn load(&self) -> Result<ContactInfo, AdminError> {
        Ok(self.cache.get(keys::CONTACTS)?.unwrap_or_default())
    }

    async fn save(&self, contacts: ContactInfo) -> Result<ContactInfo, AdminError> {
        self.cache.set(keys::CONTACTS, &contacts)?;
        info!("saved contacts");
        Ok(contacts)
    }
}

/// Contacts managed by the remote contacts function.
#[derive(Debug, Clone)]
pub struct RemoteContactRepository {
    api: StoreApi,
}

impl RemoteContactRepository {
    pub fn new(api: StoreApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ContactRepository for RemoteContactRepository {
    async fn load(&self) -> Result<ContactInfo, AdminError> {
        Ok(self.api.get_contacts().await?)
    }

    async fn save(&self, contacts: ContactInfo) -> Result<ContactInfo, AdminError> {
        Ok(self.api.update_contacts(&contacts).await?)
    }
}

// The storefront can poll either repository directly.

#[async_trait]
impl ProductSource for LocalProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>, StorefrontError> {
        self.list().await.map_err(into_source_error)
    }
}

#[async_trait]
impl ProductSource for RemoteProductRepository {
    async fn list_products(&self) -> Result<Vec<Product>, StorefrontError> {
        self.list().await.map_err(into_source_error)
    }
}

fn into_source_error(e: AdminError) -> StorefrontError {
    match e {
        AdminError::Fetch(e) => StorefrontError::Fetch(e),
        AdminError::Cache(e) => StorefrontError::Cache(e),
        other => StorefrontError::Source(other.to_string()),
    }
}
