//! Registered storefront users.

use crate::password::PasswordHasher;
use crate::AuthError;
use serde::{Deserialize, Serialize};
use vibe_cache::{keys, Cache};

/// A shopper account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2 PHC hash.
    pub password_hash: String,
    /// Unix timestamp of registration.
    pub registered_at: i64,
}

/// The registered-user list, stored as one JSON blob.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    cache: Cache,
    hasher: PasswordHasher,
}

impl UserDirectory {
    pub fn new(cache: Cache) -> Self {
        Self {
            cache,
            hasher: PasswordHasher::new(),
        }
    }

    /// All users in registration order.
    pub fn list(&self) -> Result<Vec<RegisteredUser>, AuthError> {
        Ok(self.cache.get(keys::USERS)?.unwrap_or_default())
    }

    /// Find a user by email.
    pub fn find(&self, email: &str) -> Result<Option<RegisteredUser>, AuthError> {
        Ok(self
            .list()?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email.trim())))
    }

    /// Register a new user.
    pub fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<RegisteredUser, AuthError> {
        let email = email.trim();
        let mut users = self.list()?;
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(AuthError::UserAlreadyExists(email.to_string()));
        }

        let user = RegisteredUser {
            email: email.to_string(),
            name: name.trim().to_string(),
            password_hash: self.hasher.hash(password)?,
            registered_at: chrono::Utc::now().timestamp(),
        };
        users.push(user.clone());
        self.cache.set(keys::USERS, &users)?;
        tracing::info!(email = %user.email, "registered user");
        Ok(user)
    }

    /// Check a user's password.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<RegisteredUser, AuthError> {
        let user = self
            .find(email)?
            .ok_or_else(|| AuthError::UserNotFound(email.to_string()))?;
        if self.hasher.verify(password, &user.password_hash)? {
            Ok(user)
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_authenticate() {
        let users = UserDirectory::new(Cache::in_memory());
        let user = users.register("ann@example.com", "Ann", "hunter22").unwrap();
        assert_eq!(user.name, "Ann");
        assert_ne!(user.password_hash, "hunter22");

        let found = users.authenticate("ANN@example.com", "hunter22").unwrap();
        assert_eq!(found.email, "ann@example.com");
        assert!(matches!(
            users.authenticate("ann@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(matches!(
            users.authenticate("bob@example.com", "hunter22"),
            Err(AuthError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let users = UserDirectory::new(Cache::in_memory());
        users.register("ann@example.com", "Ann", "pw-one").unwrap();
        let err = users.register(" Ann@Example.com ", "Ann 2", "pw-two").unwrap_err();
        assert!(matches!(err, AuthError::UserAlreadyExists(_)));
        assert_eq!(users.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_persists_in_cache() {
        let cache = Cache::in_memory();
        UserDirectory::new(cache.clone())
            .register("ann@example.com", "Ann", "pw")
            .unwrap();
        let stored: Vec<RegisteredUser> = cache.get(keys::USERS).unwrap().unwrap();
        assert_eq!(stored[0].email, "ann@example.com");
    }
}
