//! The admin panel service.

use crate::form::ProductForm;
use crate::notice::Notice;
use crate::repository::{ContactRepository, ProductRepository};
use crate::AdminError;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};
use vibe_auth::{AdminSession, AuthError, CredentialChecker};
use vibe_commerce::catalog::{ContactInfo, Product};
use vibe_commerce::ProductId;

const ERROR_TITLE: &str = "Ошибка";

/// Most notices kept between drains; older ones are dropped first.
pub const NOTICE_LIMIT: usize = 64;

/// Admin actions over injected repositories.
///
/// Every action records a [`Notice`] describing its outcome, success or
/// failure; read them with [`AdminPanel::take_notices`]. Only the latest
/// [`NOTICE_LIMIT`] notices are kept. Product and contact mutations require
/// an active admin session.
pub struct AdminPanel {
    products: Arc<dyn ProductRepository>,
    contacts: Arc<dyn ContactRepository>,
    credentials: Arc<dyn CredentialChecker>,
    session: AdminSession,
    notices: Mutex<Vec<Notice>>,
}

impl std::fmt::Debug for AdminPanel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminPanel")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl AdminPanel {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        contacts: Arc<dyn ContactRepository>,
        credentials: Arc<dyn CredentialChecker>,
        session: AdminSession,
    ) -> Self {
        Self {
            products,
            contacts,
            credentials,
            session,
            notices: Mutex::new(Vec::new()),
        }
    }

    /// Check the password and start a session.
    pub fn login(&self, password: &str) -> Result<(), AdminError> {
        let result = match self.credentials.verify(password) {
            Ok(true) => self.session.start().map_err(AdminError::from),
            Ok(false) => Err(AdminError::Auth(AuthError::InvalidCredentials)),
            Err(e) => Err(e.into()),
        };
        match &result {
            Ok(()) => {
                info!("admin logged in");
                self.notify(Notice::success(
                    "Вход выполнен",
                    "Добро пожаловать в админ-панель",
                ));
            }
            Err(e) => {
                warn!(error = %e, "admin login failed");
                self.notify(Notice::error("Ошибка входа", e.user_message()));
            }
        }
        result
    }

    /// End the session.
    pub fn logout(&self) -> Result<(), AdminError> {
        self.session.end()?;
        info!("admin logged out");
        Ok(())
    }

    pub fn is_authenticated(&self) -> Result<bool, AdminError> {
        Ok(self.session.is_active()?)
    }

    /// All products, in storage order.
    pub async fn products(&self) -> Result<Vec<Product>, AdminError> {
        let result = self.products.list().await;
        self.record_failure(result)
    }

    /// Save the form as a new product, or over `editing` when set.
    ///
    /// Fields the form does not show (description, timestamps) are carried
    /// over from `editing`.
    pub async fn submit(
        &self,
        form: &ProductForm,
        editing: Option<&Product>,
    ) -> Result<Product, AdminError> {
        let result = self.save_form(form, editing).await;
        let result = self.record_failure(result)?;
        let notice = match editing {
            Some(_) => Notice::success(
                "Товар обновлён",
                format!("{} успешно обновлён", result.name),
            ),
            None => Notice::success(
                "Товар добавлен",
                format!("{} добавлен в каталог", result.name),
            ),
        };
        self.notify(notice);
        Ok(result)
    }

    async fn save_form(
        &self,
        form: &ProductForm,
        editing: Option<&Product>,
    ) -> Result<Product, AdminError> {
        self.require_session()?;
        let mut product = form.into_product(editing.map(|p| p.id))?;
        match editing {
            Some(existing) => {
                product.description = existing.description.clone();
                product.created_at = existing.created_at.clone();
                self.products.update(product).await
            }
            None => self.products.create(product).await,
        }
    }

    /// Remove a product.
    pub async fn delete(&self, id: ProductId) -> Result<(), AdminError> {
        let result = match self.require_session() {
            Ok(()) => self.products.delete(id).await,
            Err(e) => Err(e),
        };
        self.record_failure(result)?;
        self.notify(Notice::success(
            "Товар удалён",
            "Товар успешно удалён из каталога",
        ));
        Ok(())
    }

    /// The store's contact block.
    pub async fn contacts(&self) -> Result<ContactInfo, AdminError> {
        let result = self.contacts.load().await;
        self.record_failure(result)
    }

    /// Replace the store's contact block.
    pub async fn save_contacts(&self, contacts: ContactInfo) -> Result<ContactInfo, AdminError> {
        let result = match self.require_session() {
            Ok(()) => self.contacts.save(contacts).await,
            Err(e) => Err(e),
        };
        let saved = self.record_failure(result)?;
        self.notify(Notice::success(
            "Контакты сохранены",
            "Контактная информация успешно обновлена",
        ));
        Ok(saved)
    }

    /// Drain the notices recorded so far, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }

    fn require_session(&self) -> Result<(), AdminError> {
        if self.session.is_active()? {
            Ok(())
        } else {
            Err(AdminError::NotAuthenticated)
        }
    }

    fn record_failure<T>(&self, result: Result<T, AdminError>) -> Result<T, AdminError> {
        if let Err(e) = &result {
            warn!(error = %e, "admin action failed");
            self.notify(Notice::error(ERROR_TITLE, e.user_message()));
        }
        result
    }

    fn notify(&self, notice: Notice) {
        let mut notices = self.notices.lock();
        if notices.len() >= NOTICE_LIMIT {
            let excess = notices.len() + 1 - NOTICE_LIMIT;
            notices.drain(..excess);
        }
        notices.push(notice);
    }
}
