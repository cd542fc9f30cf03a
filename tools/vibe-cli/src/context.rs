//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use vibe_admin::{
    AdminPanel, ContactRepository, LocalContactRepository, LocalProductRepository,
    ProductRepository, RemoteContactRepository, RemoteProductRepository,
};
use vibe_auth::{AdminSession, AuthError, CredentialChecker, PasswordCredentials, UserDirectory};
use vibe_cache::Cache;
use vibe_data::StoreApi;
use vibe_storefront::{LocalCatalog, ProductSource};

use crate::config::{Backend, CliConfig, ADMIN_HASH_ENV};
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["vibe.toml", ".vibe.toml", "vibe.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Local store shared by every command.
    pub cache: Cache,
    api: Option<StoreApi>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            find_config(&cwd)
                .map(|path| CliConfig::load(&path.to_string_lossy()))
                .transpose()?
                .unwrap_or_default()
        };

        let cache = match config.storage.backend {
            Backend::Memory => Cache::in_memory(),
            Backend::File => {
                let dir = resolve(&cwd, &config.storage.dir);
                Cache::open(&dir)
                    .with_context(|| format!("Failed to open data directory: {}", dir.display()))?
            }
        };
        let api = config.api.to_api_config().map(StoreApi::new);

        Ok(Self {
            config,
            output,
            cwd,
            cache,
            api,
        })
    }

    /// Short description of where data comes from.
    pub fn source_label(&self) -> String {
        match &self.api {
            Some(api) => api.config().products_url.clone(),
            None => format!("local store ({})", self.storage_label()),
        }
    }

    fn storage_label(&self) -> String {
        match self.config.storage.backend {
            Backend::Memory => "memory".to_string(),
            Backend::File => resolve(&self.cwd, &self.config.storage.dir)
                .display()
                .to_string(),
        }
    }

    /// Where the storefront reads its catalog.
    pub fn product_source(&self) -> Arc<dyn ProductSource> {
        match &self.api {
            Some(api) => Arc::new(api.clone()),
            None => Arc::new(LocalCatalog::new(self.cache.clone())),
        }
    }

    /// Refresh interval for `watch`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.config.poll.interval_secs.max(1))
    }

    /// Admin panel over the configured repositories.
    pub fn admin_panel(&self) -> Result<AdminPanel> {
        let (products, contacts): (Arc<dyn ProductRepository>, Arc<dyn ContactRepository>) =
            match &self.api {
                Some(api) => (
                    Arc::new(RemoteProductRepository::new(api.clone())),
                    Arc::new(RemoteContactRepository::new(api.clone())),
                ),
                None => (
                    Arc::new(LocalProductRepository::new(self.cache.clone())),
                    Arc::new(LocalContactRepository::new(self.cache.clone())),
                ),
            };

        let credentials: Arc<dyn CredentialChecker> = match self.config.admin_password_hash() {
            Some(hash) => Arc::new(
                PasswordCredentials::from_hash(hash)
                    .context("Invalid admin password hash in configuration")?,
            ),
            None => Arc::new(Unconfigured),
        };

        Ok(AdminPanel::new(
            products,
            contacts,
            credentials,
            AdminSession::new(self.cache.clone()),
        ))
    }

    /// Registered shoppers.
    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(self.cache.clone())
    }
}

/// Find a config file in the directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Rejects every login until a password hash is configured.
struct Unconfigured;

impl CredentialChecker for Unconfigured {
    fn verify(&self, _secret: &str) -> Result<bool, AuthError> {
        Err(AuthError::Internal(format!(
            "no admin password configured; set [admin].password_hash or {}",
            ADMIN_HASH_ENV
        )))
    }
}
