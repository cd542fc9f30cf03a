//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Price bounds could not be parsed or are inverted.
    #[error("Invalid price range: {0}")]
    InvalidPriceRange(String),

    /// Product id could not be parsed.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),
}
