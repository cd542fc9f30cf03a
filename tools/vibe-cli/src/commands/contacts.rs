//! Show and edit the store's contact block.

use anyhow::Result;
use dialoguer::Password;
use vibe_admin::AdminPanel;
use vibe_commerce::catalog::ContactInfo;

use super::{ContactsArgs, ContactsCommand};
use crate::context::Context;

/// Run the contacts command.
pub async fn run(args: ContactsArgs, ctx: &Context) -> Result<()> {
    let panel = ctx.admin_panel()?;

    let result: Result<()> = match args.command.unwrap_or(ContactsCommand::Show) {
        ContactsCommand::Show => panel
            .contacts()
            .await
            .map(|contacts| show(&contacts, ctx))
            .map_err(Into::into),
        ContactsCommand::Set {
            address,
            phone,
            email,
        } => set(&panel, address, phone, email, ctx).await,
    };

    for notice in panel.take_notices() {
        ctx.output.notice(&notice);
    }
    result
}

async fn set(
    panel: &AdminPanel,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let current = panel.contacts().await?;
    let updated = merge(current, address, phone, email);

    if !panel.is_authenticated()? {
        let password = Password::new().with_prompt("Пароль").interact()?;
        panel.login(&password)?;
    }
    let saved = panel.save_contacts(updated).await?;
    show(&saved, ctx);
    Ok(())
}

fn merge(
    current: ContactInfo,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
) -> ContactInfo {
    ContactInfo {
        address: address.unwrap_or(current.address),
        phone: phone.unwrap_or(current.phone),
        email: email.unwrap_or(current.email),
    }
}

fn show(contacts: &ContactInfo, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(contacts);
        return;
    }
    ctx.output.header("Контакты");
    ctx.output.kv("Адрес", &contacts.address);
    ctx.output.kv("Телефон", &contacts.phone);
    ctx.output.kv("Email", &contacts.email);
    if !contacts.is_complete() {
        ctx.output.warn("Contact block has empty fields");
    }
}
