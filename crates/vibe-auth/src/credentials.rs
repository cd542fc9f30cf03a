//! Admin credential checks.

use crate::password::{parse_hash, PasswordHasher};
use crate::AuthError;

/// Decides whether a secret grants admin access.
pub trait CredentialChecker: Send + Sync {
    /// Returns `Ok(false)` for a wrong secret.
    fn verify(&self, secret: &str) -> Result<bool, AuthError>;
}

/// Checks the admin password against a stored Argon2 hash.
#[derive(Debug, Clone)]
pub struct PasswordCredentials {
    hash: String,
    hasher: PasswordHasher,
}

impl PasswordCredentials {
    /// Use an existing PHC hash, typically read from configuration.
    pub fn from_hash(hash: impl Into<String>) -> Result<Self, AuthError> {
        let hash = hash.into();
        parse_hash(&hash)?;
        Ok(Self {
            hash,
            hasher: PasswordHasher::new(),
        })
    }

    /// Hash `password` and check against it.
    pub fn from_password(password: &str) -> Result<Self, AuthError> {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash(password)?;
        Ok(Self { hash, hasher })
    }

    /// Get the stored hash.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl CredentialChecker for PasswordCredentials {
    fn verify(&self, secret: &str) -> Result<bool, AuthError> {
        self.hasher.verify(secret, &self.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_credentials() {
        let creds = PasswordCredentials::from_password("s3cret-admin").unwrap();
        assert!(creds.verify("s3cret-admin").unwrap());
        assert!(!creds.verify("admin123").unwrap());
    }

    #[test]
    fn test_from_hash_round_trip() {
        let original = PasswordCredentials::from_password("s3cret-admin").unwrap();
        let loaded = PasswordCredentials::from_hash(original.hash()).unwrap();
        assert!(loaded.verify("s3cret-admin").unwrap());
    }

    #[test]
    fn test_from_hash_rejects_plaintext() {
        assert!(matches!(
            PasswordCredentials::from_hash("admin123"),
            Err(AuthError::InvalidHash(_))
        ));
    }
}
