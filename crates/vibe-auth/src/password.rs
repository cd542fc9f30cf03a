//! Argon2 password hashing.

use crate::AuthError;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hashes and verifies passwords as Argon2id PHC strings.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a password.
    ///
    /// Returns a string in PHC format: `$argon2id$v=19$m=...$salt$hash`.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::Internal(e.to_string()))
    }

    /// Verify a password against a hash.
    ///
    /// A wrong password is `Ok(false)`; a malformed hash is an error.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed = parse_hash(hash)?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

/// Check that `hash` is a well-formed PHC string.
pub(crate) fn parse_hash(hash: &str) -> Result<PasswordHash<'_>, AuthError> {
    PasswordHash::new(hash).map_err(|e| AuthError::InvalidHash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("SecurePass123!").unwrap();
        assert!(hash.starts_with("$argon2id$"));

        assert!(hasher.verify("SecurePass123!", &hash).unwrap());
        assert!(!hasher.verify("WrongPassword", &hash).unwrap());
    }

    #[test]
    fn test_different_hashes_for_same_password() {
        let hasher = PasswordHasher::new();
        let hash1 = hasher.hash("TestPassword1").unwrap();
        let hash2 = hasher.hash("TestPassword1").unwrap();

        // Salts differ
        assert_ne!(hash1, hash2);
        assert!(hasher.verify("TestPassword1", &hash1).unwrap());
        assert!(hasher.verify("TestPassword1", &hash2).unwrap());
    }

    #[test]
    fn test_malformed_hash() {
        let hasher = PasswordHasher::new();
        assert!(matches!(
            hasher.verify("admin123", "admin123"),
            Err(AuthError::InvalidHash(_))
        ));
    }
}
