//! Bindings for the products and contacts functions.

use crate::{FetchClient, FetchError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use vibe_commerce::catalog::{ContactInfo, NewProduct, Product, ProductPatch};
use vibe_commerce::ProductId;

/// Where a product id goes in update and delete URLs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPlacement {
    /// `<base>/<id>`
    #[default]
    Path,
    /// `<base>?id=<id>`
    Query,
}

/// Endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Products function URL.
    pub products_url: String,
    /// Contacts function URL.
    pub contacts_url: String,
    /// How product ids are addressed.
    #[serde(default)]
    pub id_placement: IdPlacement,
}

impl ApiConfig {
    /// Create a config with path-style product URLs.
    pub fn new(products_url: impl Into<String>, contacts_url: impl Into<String>) -> Self {
        Self {
            products_url: products_url.into(),
            contacts_url: contacts_url.into(),
            id_placement: IdPlacement::Path,
        }
    }

    /// Set how product ids are addressed.
    pub fn with_id_placement(mut self, placement: IdPlacement) -> Self {
        self.id_placement = placement;
        self
    }

    /// URL of a single product.
    pub fn product_url(&self, id: ProductId) -> String {
        let base = self.products_url.trim_end_matches('/');
        match self.id_placement {
            IdPlacement::Path => format!("{}/{}", base, id),
            IdPlacement::Query => {
                let sep = if base.contains('?') { '&' } else { '?' };
                format!("{}{}id={}", base, sep, id)
            }
        }
    }
}

/// Client for the store's REST functions.
///
/// Each call is a single round trip: no retries, timeouts or caching.
#[derive(Debug, Clone)]
pub struct StoreApi {
    client: FetchClient,
    config: ApiConfig,
}

impl StoreApi {
    /// Create an API client that talks over `reqwest`.
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(FetchClient::new(), config)
    }

    /// Create an API client over an existing [`FetchClient`].
    pub fn with_client(client: FetchClient, config: ApiConfig) -> Self {
        Self {
            client: client.with_default_header("Content-Type", "application/json"),
            config,
        }
    }

    /// Get the endpoint configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch the full catalog, in server order.
    pub async fn list_products(&self) -> Result<Vec<Product>, FetchError> {
        let response = self.client.get(&self.config.products_url).send().await?;
        if !response.is_success() {
            return Err(FetchError::HttpError {
                status: response.status,
                message: "Failed to fetch products".to_string(),
            });
        }
        let products: Vec<Product> = response.json()?;
        debug!(count = products.len(), "fetched products");
        Ok(products)
    }

    /// Create a product; the server assigns its id.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, FetchError> {
        let created: Product = self
            .client
            .post(&self.config.products_url)
            .json(product)?
            .send()
            .await?
            .error_for_status("Failed to create product")?
            .json()?;
        info!(id = %created.id, name = %created.name, "created product");
        Ok(created)
    }

    /// Update some fields of a product.
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, FetchError> {
        let updated: Product = self
            .client
            .put(self.config.product_url(id))
            .json(patch)?
            .send()
            .await?
            .error_for_status("Failed to update product")?
            .json()?;
        info!(id = %id, "updated product");
        Ok(updated)
    }

    /// Delete a product.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), FetchError> {
        self.client
            .delete(self.config.product_url(id))
            .send()
            .await?
            .error_for_status("Failed to delete product")?;
        info!(id = %id, "deleted product");
        Ok(())
    }

    /// Fetch the store's contact block.
    pub async fn get_contacts(&self) -> Result<ContactInfo, FetchError> {
        self.client
            .get(&self.config.contacts_url)
            .send()
            .await?
            .error_for_status("Failed to fetch contacts")?
            .json()
    }

    /// Replace the store's contact block.
    pub async fn update_contacts(&self, contacts: &ContactInfo) -> Result<ContactInfo, FetchError> {
        let saved = self
            .client
            .put(&self.config.contacts_url)
            .json(contacts)?
            .send()
            .await?
            .error_for_status("Failed to update contacts")?
            .json()?;
        info!("updated contacts");
        Ok(saved)
    }
}
