//! Replay a cart session against the catalog.

use std::io::Read;

use anyhow::{bail, Context as _, Result};
use vibe_commerce::ProductId;
use vibe_storefront::Storefront;

use super::CartArgs;
use crate::context::Context;
use crate::output::format_price;

/// One line of a cart script.
#[derive(Debug, Clone, PartialEq)]
pub enum CartOp {
    Add { id: ProductId, size: String },
    Remove { id: ProductId, size: String },
    Quantity { id: ProductId, size: String, quantity: u32 },
    Clear,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let script = read_script(&args.script)?;
    let ops = parse_script(&script)?;
    let mut store = super::catalog::load_storefront(ctx).await?;

    for op in ops {
        apply(&mut store, op)?;
    }

    let pricing = store.pricing();
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "items": store.cart().items,
            "totalPrice": pricing.total_price,
            "totalDiscount": pricing.total_discount,
            "itemCount": pricing.item_count,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", pricing.item_count));
    if store.cart().is_empty() {
        ctx.output.info("Cart is empty");
        return Ok(());
    }
    for line in &store.cart().items {
        ctx.output.list_item(&format!(
            "{} [{}] × {} = {}",
            line.product.name,
            line.selected_size,
            line.quantity,
            format_price(line.line_total())
        ));
    }
    if pricing.has_discounts() {
        ctx.output.kv("Discount", &format_price(pricing.total_discount));
    }
    ctx.output.kv("Total", &format_price(pricing.total_price));
    Ok(())
}

fn read_script(path: &str) -> Result<String> {
    if path == "-" {
        let mut script = String::new();
        std::io::stdin()
            .read_to_string(&mut script)
            .context("Failed to read cart script from stdin")?;
        Ok(script)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read cart script: {}", path))
    }
}

fn apply(store: &mut Storefront, op: CartOp) -> Result<()> {
    match op {
        CartOp::Add { id, size } => store.add_to_cart(id, &size)?,
        CartOp::Remove { id, size } => store.remove_from_cart(id, &size),
        CartOp::Quantity { id, size, quantity } => store.update_quantity(id, &size, quantity),
        CartOp::Clear => store.clear_cart(),
    }
    Ok(())
}

/// Parse a cart script. Blank lines and `#` comments are skipped.
pub fn parse_script(script: &str) -> Result<Vec<CartOp>> {
    script
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(n, line)| parse_line(line).with_context(|| format!("line {}: {}", n, line)))
        .collect()
}

fn parse_line(line: &str) -> Result<CartOp> {
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "clear" if rest.is_empty() => Ok(CartOp::Clear),
        "add" | "remove" => {
            let (id, size) = id_and_rest(rest)?;
            Ok(if verb == "add" {
                CartOp::Add { id, size }
            } else {
                CartOp::Remove { id, size }
            })
        }
        "qty" => {
            let (id, rest) = id_and_rest(rest)?;
            let (size, quantity) = rest
                .rsplit_once(char::is_whitespace)
                .context("expected `qty <id> <size> <quantity>`")?;
            let quantity = quantity
                .parse()
                .with_context(|| format!("invalid quantity: {}", quantity))?;
            Ok(CartOp::Quantity {
                id,
                size: size.trim().to_string(),
                quantity,
            })
        }
        other => bail!("unknown cart operation: {}", other),
    }
}

fn id_and_rest(rest: &str) -> Result<(ProductId, String)> {
    let (id, size) = rest
        .split_once(char::is_whitespace)
        .context("expected `<id> <size>`")?;
    let id = id.parse::<ProductId>()?;
    let size = size.trim();
    if size.is_empty() {
        bail!("missing size");
    }
    Ok((id, size.to_string()))
}
