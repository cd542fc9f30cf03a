//! Authentication for the Vibe Store.
//!
//! Provides the admin credential check, the admin session flag and the
//! registered-user directory.

mod credentials;
mod error;
mod password;
mod session;
mod user;

pub use credentials::{CredentialChecker, PasswordCredentials};
pub use error::AuthError;
pub use password::PasswordHasher;
pub use session::AdminSession;
pub use user::{RegisteredUser, UserDirectory};
