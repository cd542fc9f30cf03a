//! Admin session flag.

use crate::AuthError;
use vibe_cache::{keys, Cache};

const ACTIVE: &str = "true";

/// Persists whether the admin is logged in.
///
/// Backed by whatever [`Cache`] the caller hands in, so an in-memory cache
/// gives a per-process session and a file cache survives restarts.
#[derive(Debug, Clone)]
pub struct AdminSession {
    cache: Cache,
}

impl AdminSession {
    pub fn new(cache: Cache) -> Self {
        Self { cache }
    }

    /// Mark the session as logged in.
    pub fn start(&self) -> Result<(), AuthError> {
        self.cache.set(keys::ADMIN_SESSION, ACTIVE)?;
        tracing::debug!("admin session started");
        Ok(())
    }

    /// Log out.
    pub fn end(&self) -> Result<(), AuthError> {
        self.cache.delete(keys::ADMIN_SESSION)?;
        tracing::debug!("admin session ended");
        Ok(())
    }

    /// Check whether the admin is logged in.
    pub fn is_active(&self) -> Result<bool, AuthError> {
        let flag: Option<String> = self.cache.get(keys::ADMIN_SESSION)?;
        Ok(flag.as_deref() == Some(ACTIVE))
    }
}
