//! Shopper accounts.

use anyhow::{bail, Context as _, Result};
use chrono::{Local, TimeZone};
use dialoguer::Password;

use super::{UsersArgs, UsersCommand};
use crate::context::Context;

/// Run the users command.
pub async fn run(args: UsersArgs, ctx: &Context) -> Result<()> {
    let users = ctx.users();

    match args.command {
        UsersCommand::Register { email, name } => {
            if !email.contains('@') {
                bail!("Invalid email: {}", email);
            }
            let password = Password::new()
                .with_prompt("Password")
                .with_confirmation("Repeat password", "Passwords do not match")
                .interact()
                .context("Failed to read password")?;
            let user = users.register(&email, &name, &password)?;
            ctx.output.success(&format!("Registered {} <{}>", user.name, user.email));
        }
        UsersCommand::Login { email } => {
            let password = Password::new()
                .with_prompt("Password")
                .interact()
                .context("Failed to read password")?;
            let user = users.authenticate(&email, &password)?;
            ctx.output.success(&format!("Welcome back, {}", user.name));
        }
        UsersCommand::List => {
            let list = users.list()?;
            if ctx.output.is_json() {
                let public: Vec<_> = list
                    .iter()
                    .map(|u| {
                        serde_json::json!({
                            "email": u.email,
                            "name": u.name,
                            "registeredAt": u.registered_at,
                        })
                    })
                    .collect();
                ctx.output.json(&public);
                return Ok(());
            }

            ctx.output.header(&format!("Users ({})", list.len()));
            for user in &list {
                let registered = Local
                    .timestamp_opt(user.registered_at, 0)
                    .single()
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default();
                ctx.output
                    .list_item(&format!("{} <{}>  {}", user.name, user.email, registered));
            }
        }
    }

    Ok(())
}
