//! Store contact information.

use serde::{Deserialize, Serialize};

/// Contact block shown on the storefront.
///
/// Free text, no format validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl ContactInfo {
    /// Create contact info from its three fields.
    pub fn new(
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether every field carries some text.
    pub fn is_complete(&self) -> bool {
        [&self.address, &self.phone, &self.email]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

impl Default for ContactInfo {
    /// The contact block used until the admin saves one.
    fn default() -> Self {
        Self::new(
            "Москва, ул. Модная, 123",
            "+7 (999) 123-45-67",
            "hello@vibestore.com",
        )
    }
}
