//! Numeric product identifiers.
//!
//! Ids are assigned by the server for remotely stored products and from the
//! current millisecond timestamp for locally stored ones.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Generate an id from the current time in milliseconds.
    ///
    /// Two calls inside the same millisecond get distinct ids.
    pub fn generate() -> Self {
        use std::sync::atomic::{AtomicI64, Ordering};

        static LAST: AtomicI64 = AtomicI64::new(0);

        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = LAST.load(Ordering::SeqCst);
        loop {
            let next = if now > prev { now } else { prev + 1 };
            match LAST.compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Self(next),
                Err(actual) => prev = actual,
            }
        }
    }

    /// Get the raw value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| CommerceError::InvalidProductId(s.to_string()))
    }
}
