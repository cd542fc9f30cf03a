//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod contacts;
pub mod users;
pub mod watch;

use clap::{Args, Subcommand};

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Category: All, New, Trending or a category name.
    #[arg(short, long, default_value = "All")]
    pub category: String,

    /// Price range such as `1000..5000`, `1000..` or `..5000`.
    #[arg(short, long)]
    pub price: Option<String>,

    /// Only products offered in this size (repeatable).
    #[arg(short, long = "size")]
    pub sizes: Vec<String>,

    /// List the sidebar facets instead of products.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Script file with one cart operation per line (`-` for stdin).
    ///
    /// Operations: `add <id> <size>`, `remove <id> <size>`,
    /// `qty <id> <size> <quantity>`, `clear`. Sizes may contain spaces.
    pub script: String,
}

/// Arguments for the admin command.
#[derive(Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Start an admin session.
    Login,
    /// End the admin session.
    Logout,
    /// Show whether an admin session is active.
    Status,
    /// List products as stored.
    List,
    /// Add a product.
    Add(ProductFields),
    /// Edit a product; omitted fields keep their current value.
    Edit {
        /// Product id.
        id: i64,
        #[command(flatten)]
        fields: ProductFields,
    },
    /// Delete a product.
    Delete {
        /// Product id.
        id: i64,
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Product form fields as flags.
#[derive(Args, Default)]
pub struct ProductFields {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    /// Price before the discount; pass an empty string to clear.
    #[arg(long)]
    pub old_price: Option<String>,
    #[arg(long)]
    pub image: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Toggle a size checkbox (repeatable).
    #[arg(long = "size")]
    pub sizes: Vec<String>,
    /// Comma-separated colors.
    #[arg(long)]
    pub colors: Option<String>,
    #[arg(long)]
    pub rating: Option<String>,
    #[arg(long)]
    pub reviews: Option<String>,
    /// Show under "New".
    #[arg(long)]
    pub is_new: Option<bool>,
    /// Show under "Trending".
    #[arg(long)]
    pub trending: Option<bool>,
}

/// Arguments for the contacts command.
#[derive(Args)]
pub struct ContactsArgs {
    #[command(subcommand)]
    pub command: Option<ContactsCommand>,
}

#[derive(Subcommand)]
pub enum ContactsCommand {
    /// Show the contact block.
    Show,
    /// Change contact fields; omitted fields keep their current value.
    Set {
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
}

/// Arguments for the watch command.
#[derive(Args)]
pub struct WatchArgs {
    /// Refresh interval in seconds (default: from config).
    #[arg(short, long)]
    pub interval: Option<u64>,
}

/// Arguments for the users command.
#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// Register a shopper account.
    Register {
        email: String,
        #[arg(long)]
        name: String,
    },
    /// Check a shopper's password.
    Login { email: String },
    /// List registered shoppers.
    List,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Hash an admin password for `[admin].password_hash`.
    HashPassword,
}
