//! Back office for the Vibe Store.
//!
//! - [`ProductForm`]: the product form, its parsing and derived fields
//! - [`ProductRepository`] / [`ContactRepository`]: local (cache) and remote
//!   (REST) persistence
//! - [`AdminPanel`]: login, product CRUD and contact editing, each action
//!   reported as a [`Notice`]
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vibe_admin::prelude::*;
//!
//! let cache = Cache::open("./.vibe-data")?;
//! let panel = AdminPanel::new(
//!     Arc::new(LocalProductRepository::new(cache.clone())),
//!     Arc::new(LocalContactRepository::new(cache.clone())),
//!     Arc::new(PasswordCredentials::from_hash(hash)?),
//!     AdminSession::new(cache),
//! );
//!
//! panel.login(&password)?;
//! let mut form = ProductForm::new();
//! form.name = "Худи Rainbow".into();
//! panel.submit(&form, None).await?;
//! ```

pub mod error;
pub mod form;
pub mod notice;
pub mod panel;
pub mod repository;

pub use error::AdminError;
pub use form::ProductForm;
pub use notice::{Level, Notice};
pub use panel::{AdminPanel, NOTICE_LIMIT};
pub use repository::{
    ContactRepository, LocalContactRepository, LocalProductRepository, ProductRepository,
    RemoteContactRepository, RemoteProductRepository,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::AdminError;
    pub use crate::form::{ProductForm, AVAILABLE_SIZES, CATEGORIES};
    pub use crate::notice::{Level, Notice};
    pub use crate::panel::{AdminPanel, NOTICE_LIMIT};
    pub use crate::repository::*;

    pub use vibe_auth::{AdminSession, CredentialChecker, PasswordCredentials};
    pub use vibe_cache::Cache;
}
