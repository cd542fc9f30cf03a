//! Admin product management.

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Password};
use vibe_admin::{AdminPanel, ProductForm};
use vibe_commerce::ProductId;

use super::{AdminArgs, AdminCommand, ProductFields};
use crate::context::Context;

/// Run the admin command.
pub async fn run(args: AdminArgs, ctx: &Context) -> Result<()> {
    let panel = ctx.admin_panel()?;

    let result = match args.command {
        AdminCommand::Login => login(&panel, ctx),
        AdminCommand::Logout => {
            panel.logout()?;
            ctx.output.success("Logged out");
            Ok(())
        }
        AdminCommand::Status => status(&panel, ctx),
        AdminCommand::List => list(&panel, ctx).await,
        AdminCommand::Add(fields) => add(fields, &panel, ctx).await,
        AdminCommand::Edit { id, fields } => edit(ProductId::new(id), fields, &panel, ctx).await,
        AdminCommand::Delete { id, yes } => delete(ProductId::new(id), yes, &panel, ctx).await,
    };

    for notice in panel.take_notices() {
        ctx.output.notice(&notice);
    }
    result
}

fn login(panel: &AdminPanel, ctx: &Context) -> Result<()> {
    let password = Password::new()
        .with_prompt("Пароль")
        .interact()
        .context("Failed to read password")?;
    panel.login(&password)?;
    ctx.output.debug("Admin session stored");
    Ok(())
}

/// Prompt for the password unless a session is already active.
fn ensure_login(panel: &AdminPanel, ctx: &Context) -> Result<()> {
    if panel.is_authenticated()? {
        return Ok(());
    }
    login(panel, ctx)
}

fn status(panel: &AdminPanel, ctx: &Context) -> Result<()> {
    let active = panel.is_authenticated()?;
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "authenticated": active }));
    } else if active {
        ctx.output.success("Admin session active");
    } else {
        ctx.output.info("Not logged in");
    }
    Ok(())
}

async fn list(panel: &AdminPanel, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading products");
    let products = panel.products().await;
    spinner.finish_and_clear();
    let products = products?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }
    ctx.output.header(&format!("Products ({})", products.len()));
    super::catalog::print_products(&products, ctx);
    Ok(())
}

async fn add(fields: ProductFields, panel: &AdminPanel, ctx: &Context) -> Result<()> {
    ensure_login(panel, ctx)?;
    let mut form = ProductForm::new();
    fields.apply(&mut form);

    let spinner = ctx.output.spinner("Saving product");
    let result = panel.submit(&form, None).await;
    spinner.finish_and_clear();
    let product = result?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    }
    Ok(())
}

async fn edit(
    id: ProductId,
    fields: ProductFields,
    panel: &AdminPanel,
    ctx: &Context,
) -> Result<()> {
    ensure_login(panel, ctx)?;
    let existing = panel
        .products()
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .with_context(|| format!("Product not found: {}", id))?;

    let mut form = ProductForm::from_product(&existing);
    fields.apply(&mut form);

    let spinner = ctx.output.spinner("Saving product");
    let result = panel.submit(&form, Some(&existing)).await;
    spinner.finish_and_clear();
    let product = result?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
    }
    Ok(())
}

async fn delete(id: ProductId, yes: bool, panel: &AdminPanel, ctx: &Context) -> Result<()> {
    ensure_login(panel, ctx)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete product {}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Deletion cancelled");
            return Ok(());
        }
    }

    panel.delete(id).await?;
    Ok(())
}

impl ProductFields {
    /// Copy the given flags into the form.
    pub fn apply(self, form: &mut ProductForm) {
        let ProductFields {
            name,
            price,
            old_price,
            image,
            category,
            sizes,
            colors,
            rating,
            reviews,
            is_new,
            trending,
        } = self;

        let text_fields = [
            (&mut form.name, name),
            (&mut form.price, price),
            (&mut form.old_price, old_price),
            (&mut form.image, image),
            (&mut form.category, category),
            (&mut form.colors, colors),
            (&mut form.rating, rating),
            (&mut form.reviews, reviews),
        ];
        for (slot, value) in text_fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
        for size in &sizes {
            form.toggle_size(size);
        }
        if let Some(is_new) = is_new {
            form.is_new = is_new;
        }
        if let Some(trending) = trending {
            form.is_trending = trending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_fields_over_form() {
        let mut form = ProductForm::new();
        form.sizes = vec!["4-5 лет".to_string()];
        form.colors = "red".to_string();

        ProductFields {
            name: Some("Худи Rainbow".to_string()),
            price: Some("2490".to_string()),
            old_price: Some(String::new()),
            sizes: vec!["4-5 лет".to_string(), "6-7 лет".to_string()],
            trending: Some(true),
            ..ProductFields::default()
        }
        .apply(&mut form);

        assert_eq!(form.name, "Худи Rainbow");
        assert_eq!(form.price, "2490");
        assert_eq!(form.old_price, "");
        assert_eq!(form.colors, "red");
        assert_eq!(form.sizes, vec!["6-7 лет"]);
        assert!(form.is_trending);
        assert!(!form.is_new);
        assert_eq!(form.rating, "5.0");
    }
}
