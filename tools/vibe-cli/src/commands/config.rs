//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use dialoguer::Password;
use vibe_auth::PasswordHasher;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, ADMIN_HASH_ENV};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::HashPassword => hash_password(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;
    if ctx.output.is_json() {
        ctx.output.json(config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");

    ctx.output.info("[api]");
    match config.api.to_api_config() {
        Some(api) => {
            ctx.output.kv("products_url", &api.products_url);
            ctx.output.kv("contacts_url", &api.contacts_url);
            ctx.output.kv("id_placement", &format!("{:?}", api.id_placement).to_lowercase());
        }
        None => ctx.output.kv("source", "local store"),
    }

    ctx.output.info("[storage]");
    ctx.output
        .kv("backend", &format!("{:?}", config.storage.backend).to_lowercase());
    ctx.output.kv("dir", &config.storage.dir.display().to_string());

    ctx.output.info("[poll]");
    ctx.output.kv("interval_secs", &config.poll.interval_secs.to_string());

    ctx.output.info("[admin]");
    let hash_source = if std::env::var_os(ADMIN_HASH_ENV).is_some() {
        ADMIN_HASH_ENV
    } else if config.admin.password_hash.is_some() {
        "config file"
    } else {
        "not set"
    };
    ctx.output.kv("password_hash", hash_source);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("vibe.toml");
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(&path)?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

fn write_config(path: &Path) -> Result<()> {
    std::fs::write(path, generate_default_config())
        .with_context(|| format!("Failed to write config file: {}", path.display()))
}

fn hash_password(ctx: &Context) -> Result<()> {
    let password = Password::new()
        .with_prompt("New admin password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()
        .context("Failed to read password")?;
    let hash = PasswordHasher::new().hash(&password)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "password_hash": hash }));
    } else {
        ctx.output.info("Add this to the [admin] section of vibe.toml:");
        println!("password_hash = \"{}\"", hash);
    }
    Ok(())
}
