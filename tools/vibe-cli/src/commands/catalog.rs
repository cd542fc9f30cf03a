//! Browse and filter the catalog.

use anyhow::{Context as _, Result};
use vibe_commerce::catalog::Product;
use vibe_commerce::search::PriceRange;
use vibe_storefront::Storefront;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::format_price;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut store = load_storefront(ctx).await?;

    if args.facets {
        return show_facets(&store, ctx);
    }

    store.select_category(args.category.as_str());
    if let Some(price) = &args.price {
        let range: PriceRange = price
            .parse()
            .with_context(|| format!("Invalid price range: {}", price))?;
        store.set_price_range(range);
    }
    store.select_sizes(&args.sizes);

    let visible = store.visible_products();
    if ctx.output.is_json() {
        ctx.output.json(&visible);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({} of {})",
        store.criteria().category,
        visible.len(),
        store.catalog().len()
    ));
    print_products(&visible, ctx);
    Ok(())
}

/// Fetch the catalog from the configured source.
pub async fn load_storefront(ctx: &Context) -> Result<Storefront> {
    let spinner = ctx.output.spinner(&format!("Loading catalog from {}", ctx.source_label()));
    let mut store = Storefront::new();
    let result = store.refresh(ctx.product_source().as_ref()).await;
    spinner.finish_and_clear();
    let count = result.context("Failed to load catalog")?;
    ctx.output.debug(&format!("Loaded {} products", count));
    Ok(store)
}

fn show_facets(store: &Storefront, ctx: &Context) -> Result<()> {
    let categories = store.categories();
    let sizes = store.size_options();
    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "categories": categories, "sizes": sizes }));
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in ["All", "New", "Trending"]
        .into_iter()
        .chain(categories.iter().map(String::as_str))
    {
        ctx.output.list_item(category);
    }
    ctx.output.header("Sizes");
    for size in &sizes {
        ctx.output.list_item(size);
    }
    Ok(())
}

/// Print products as a table.
pub fn print_products(products: &[Product], ctx: &Context) {
    if products.is_empty() {
        ctx.output.info("No products match");
        return;
    }

    let widths = [14, 32, 12, 10, 8];
    ctx.output
        .table_row(&["ID", "NAME", "CATEGORY", "PRICE", "BADGES"], &widths);
    for product in products {
        let id = product.id.to_string();
        let price = format_price(product.price);
        let badges = badges(product);
        ctx.output.table_row(
            &[&id, &product.name, &product.category, &price, &badges],
            &widths,
        );
        if !product.sizes.is_empty() {
            ctx.output.kv("sizes", &product.sizes.join(", "));
        }
    }
}

fn badges(product: &Product) -> String {
    let mut badges = Vec::new();
    if let Some(discount) = product.discount {
        badges.push(format!("-{}%", discount));
    }
    if product.is_new {
        badges.push("NEW".to_string());
    }
    if product.is_trending {
        badges.push("HIT".to_string());
    }
    badges.join(" ")
}
