//! Admin errors.

use crate::form::field_label;
use thiserror::Error;
use vibe_commerce::ProductId;

/// Admin error type.
#[derive(Error, Debug)]
pub enum AdminError {
    /// A required form field is blank.
    #[error("field `{0}` is required")]
    MissingField(&'static str),

    /// A numeric form field does not parse.
    #[error("field `{field}` is not a valid number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// The action needs an admin session.
    #[error("admin login required")]
    NotAuthenticated,

    /// No product with this id.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error(transparent)]
    Fetch(#[from] vibe_data::FetchError),

    #[error(transparent)]
    Cache(#[from] vibe_cache::CacheError),

    #[error(transparent)]
    Auth(#[from] vibe_auth::AuthError),
}

impl AdminError {
    /// Message suitable for a notice.
    pub fn user_message(&self) -> String {
        match self {
            AdminError::MissingField(field) => format!("Заполните поле «{}»", field_label(field)),
            AdminError::InvalidNumber { field, .. } => {
                format!("Поле «{}» должно быть числом", field_label(field))
            }
            AdminError::NotAuthenticated => "Требуется вход в админ-панель".to_string(),
            AdminError::ProductNotFound(_) => "Товар не найден".to_string(),
            AdminError::Fetch(e) => e.user_message(),
            AdminError::Auth(e) if e.is_auth_failure() => "Неверный пароль".to_string(),
            other => other.to_string(),
        }
    }
}
