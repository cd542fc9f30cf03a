//! Vibe CLI - Command line tool for the Vibe Store.
//!
//! Commands:
//! - `vibe catalog` - Browse and filter the catalog
//! - `vibe cart` - Replay a cart session script
//! - `vibe admin` - Log in and manage products
//! - `vibe contacts` - Show or edit the contact block
//! - `vibe watch` - Follow the catalog as it changes
//! - `vibe users` - Register and check shopper accounts
//! - `vibe config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    AdminArgs, CartArgs, CatalogArgs, ConfigArgs, ContactsArgs, UsersArgs, WatchArgs,
};

/// Vibe CLI - Browse and administer the Vibe Store
#[derive(Parser)]
#[command(name = "vibe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and filter the catalog
    Catalog(CatalogArgs),

    /// Replay a cart session script and show the totals
    Cart(CartArgs),

    /// Log in and manage products
    Admin(AdminArgs),

    /// Show or edit the store's contact block
    Contacts(ContactsArgs),

    /// Follow the catalog as it changes
    Watch(WatchArgs),

    /// Register and check shopper accounts
    Users(UsersArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Admin(args) => commands::admin::run(args, &ctx).await,
        Commands::Contacts(args) => commands::contacts::run(args, &ctx).await,
        Commands::Watch(args) => commands::watch::run(args, &ctx).await,
        Commands::Users(args) => commands::users::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
