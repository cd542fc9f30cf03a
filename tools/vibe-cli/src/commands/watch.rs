//! Follow the catalog as it changes.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::watch;
use vibe_storefront::CatalogPoller;

use super::WatchArgs;
use crate::context::Context;

/// Run the watch command until Ctrl-C.
pub async fn run(args: WatchArgs, ctx: &Context) -> Result<()> {
    let interval = args
        .interval
        .map(|secs| Duration::from_secs(secs.max(1)))
        .unwrap_or_else(|| ctx.poll_interval());

    ctx.output.info(&format!(
        "Watching {} every {}s (Ctrl-C to stop)",
        ctx.source_label(),
        interval.as_secs()
    ));

    let (tx, mut rx) = watch::channel(Vec::new());
    let poller = CatalogPoller::spawn(ctx.product_source(), interval, tx);
    let mut last_count: Option<usize> = None;

    loop {
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let products = rx.borrow_and_update().clone();
                if ctx.output.is_json() {
                    ctx.output.json(&products);
                } else if last_count != Some(products.len()) {
                    ctx.output.header(&format!(
                        "{} products at {}",
                        products.len(),
                        chrono::Local::now().format("%H:%M:%S")
                    ));
                    super::catalog::print_products(&products, ctx);
                } else {
                    ctx.output.debug("Catalog refreshed");
                }
                last_count = Some(products.len());
            }
            _ = tokio::signal::ctrl_c() => {
                ctx.output.info("Stopping");
                break;
            }
        }
    }

    poller.shutdown();
    Ok(())
}
