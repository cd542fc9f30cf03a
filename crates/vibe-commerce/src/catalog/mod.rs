//! Product catalog module.
//!
//! Contains the product and contact types shared by the storefront, the
//! admin panel and the API client.

mod contact;
mod de;
mod product;

pub use contact::ContactInfo;
pub use product::{discount_percent, NewProduct, Product, ProductPatch};
