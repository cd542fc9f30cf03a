//! Product types.

use crate::catalog::de;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price in currency units.
    #[serde(deserialize_with = "de::number")]
    pub price: f64,
    /// Price before the discount, if the product is on sale.
    #[serde(
        default,
        deserialize_with = "de::optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub old_price: Option<f64>,
    /// Category name.
    pub category: String,
    /// Image URL.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub image: String,
    /// Sizes on offer, in display order.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub sizes: Vec<String>,
    /// Colors on offer, in display order.
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub colors: Vec<String>,
    /// Average rating (0-5).
    #[serde(default, deserialize_with = "de::number")]
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: u32,
    /// Discount percentage derived from `old_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    /// Shown under the "New" category.
    #[serde(default)]
    pub is_new: bool,
    /// Shown under the "Trending" category.
    #[serde(default)]
    pub is_trending: bool,
    /// Long description (remote catalog only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updated_at", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Product {
    /// Attach an id to a new product.
    pub fn from_new(id: ProductId, product: NewProduct) -> Self {
        Self {
            id,
            name: product.name,
            price: product.price,
            old_price: product.old_price,
            category: product.category,
            image: product.image,
            sizes: product.sizes,
            colors: product.colors,
            rating: product.rating,
            reviews: product.reviews,
            discount: product.discount,
            is_new: product.is_new,
            is_trending: product.is_trending,
            description: product.description,
            created_at: None,
            updated_at: None,
        }
    }

    /// Check whether the product is offered in `size`.
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Amount saved per unit, if the product has a prior price.
    ///
    /// A prior price of zero counts as no prior price.
    pub fn savings(&self) -> Option<f64> {
        self.old_price
            .filter(|old| *old != 0.0)
            .map(|old| old - self.price)
    }
}

/// A product that has not been assigned an id yet.
///
/// This is the body of a create request and the output of the admin form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    pub category: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Product> for NewProduct {
    fn from(product: Product) -> Self {
        Self {
            name: product.name,
            price: product.price,
            old_price: product.old_price,
            category: product.category,
            image: product.image,
            sizes: product.sizes,
            colors: product.colors,
            rating: product.rating,
            reviews: product.reviews,
            discount: product.discount,
            is_new: product.is_new,
            is_trending: product.is_trending,
            description: product.description,
        }
    }
}

/// Partial product fields for an update request.
///
/// Absent fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_trending: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductPatch {
    /// Check if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewProduct> for ProductPatch {
    fn from(product: NewProduct) -> Self {
        Self {
            name: Some(product.name),
            price: Some(product.price),
            old_price: product.old_price,
            category: Some(product.category),
            image: Some(product.image),
            sizes: Some(product.sizes),
            colors: Some(product.colors),
            rating: Some(product.rating),
            reviews: Some(product.reviews),
            discount: product.discount,
            is_new: Some(product.is_new),
            is_trending: Some(product.is_trending),
            description: product.description,
        }
    }
}

/// Discount percentage of `price` relative to `old_price`.
///
/// Rounds half up, so `-2.5` becomes `-2`. Returns `None` when the old
/// price is zero or either price is not finite.
pub fn discount_percent(price: f64, old_price: f64) -> Option<i64> {
    if old_price == 0.0 || !old_price.is_finite() || !price.is_finite() {
        return None;
    }
    let percent = (old_price - price) / old_price * 100.0;
    Some((percent + 0.5).floor() as i64)
}
