//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vibe_data::{ApiConfig, IdPlacement};

/// Environment variable that overrides `[admin].password_hash`.
pub const ADMIN_HASH_ENV: &str = "VIBE_ADMIN_PASSWORD_HASH";

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// REST endpoints. Without them the local store is used.
    #[serde(default)]
    pub api: ApiSection,

    /// Local storage.
    #[serde(default)]
    pub storage: StorageSection,

    /// Catalog polling.
    #[serde(default)]
    pub poll: PollSection,

    /// Admin access.
    #[serde(default)]
    pub admin: AdminSection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// The admin password hash, preferring the environment.
    pub fn admin_password_hash(&self) -> Option<String> {
        std::env::var(ADMIN_HASH_ENV)
            .ok()
            .filter(|h| !h.trim().is_empty())
            .or_else(|| self.admin.password_hash.clone())
    }
}

/// REST endpoint configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    /// Products function URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products_url: Option<String>,

    /// Contacts function URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts_url: Option<String>,

    /// How a product id is appended to the products URL.
    #[serde(default)]
    pub id_placement: IdPlacement,
}

impl ApiSection {
    /// Endpoint config, if both URLs are set.
    pub fn to_api_config(&self) -> Option<ApiConfig> {
        match (&self.products_url, &self.contacts_url) {
            (Some(products), Some(contacts)) => Some(
                ApiConfig::new(products.as_str(), contacts.as_str())
                    .with_id_placement(self.id_placement),
            ),
            _ => None,
        }
    }
}

/// Where local data lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Gone when the process exits.
    Memory,
    /// One JSON file per key under `storage.dir`.
    #[default]
    File,
}

/// Local storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default)]
    pub backend: Backend,

    /// Data directory for the file backend, relative to the working directory.
    #[serde(default = "default_dir")]
    pub dir: PathBuf,
}

fn default_dir() -> PathBuf {
    PathBuf::from(".vibe-data")
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            dir: default_dir(),
        }
    }
}

/// Catalog polling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollSection {
    /// Seconds between catalog refreshes.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_interval_secs() -> u64 {
    3
}

impl Default for PollSection {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

/// Admin access configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminSection {
    /// Argon2 PHC hash of the admin password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

/// Generate a default vibe.toml config file.
pub fn generate_default_config() -> String {
    r#"# Vibe Store CLI configuration

[api]
# Leave both URLs unset to work against the local store.
# products_url = "https://functions.example.dev/products"
# contacts_url = "https://functions.example.dev/contacts"
# "path" sends <products_url>/<id>, "query" sends <products_url>?id=<id>
id_placement = "path"

[storage]
backend = "file"
dir = ".vibe-data"

[poll]
interval_secs = 3

[admin]
# Generate with `vibe config hash-password`.
# password_hash = "$argon2id$v=19$..."
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.api.to_api_config().is_none());
    }

    #[test]
    fn test_parse_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [api]
            products_url = "https://fn.example/products"
            contacts_url = "https://fn.example/contacts"
            id_placement = "query"

            [storage]
            backend = "memory"

            [poll]
            interval_secs = 10
            "#,
        )
        .unwrap();

        let api = config.api.to_api_config().unwrap();
        assert_eq!(api.id_placement, IdPlacement::Query);
        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.storage.dir, PathBuf::from(".vibe-data"));
        assert_eq!(config.poll.interval_secs, 10);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vibe.json");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.admin.password_hash = Some("$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string());
        std::fs::write(path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }

    #[test]
    fn test_half_configured_api_is_local() {
        let api = ApiSection {
            products_url: Some("https://fn.example/products".to_string()),
            ..ApiSection::default()
        };
        assert!(api.to_api_config().is_none());
    }
}
