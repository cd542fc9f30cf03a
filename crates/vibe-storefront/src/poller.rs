//! Background catalog refresh.
//!
//! [`CatalogPoller`] fetches the catalog on a fixed interval and publishes
//! every successful result on a `watch` channel. At most one request is in
//! flight: a tick that fires while the previous request is still pending is
//! skipped. Failed fetches are logged and the last published list stays.

use crate::source::ProductSource;
use crate::StorefrontError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};
use vibe_commerce::catalog::Product;

/// Default refresh interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

/// Shortest refresh interval; shorter ones, zero included, are raised to it.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

type PendingFetch = Pin<Box<dyn Future<Output = Result<Vec<Product>, StorefrontError>> + Send>>;

/// Handle to a running poll loop.
///
/// Dropping the handle stops the loop and cancels any pending request.
#[derive(Debug)]
pub struct CatalogPoller {
    task: JoinHandle<()>,
}

impl CatalogPoller {
    /// Start polling `source` every `interval`.
    ///
    /// The first fetch starts immediately. The loop also ends on its own once
    /// every receiver of `sink` is gone.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(
        source: Arc<dyn ProductSource>,
        interval: Duration,
        sink: watch::Sender<Vec<Product>>,
    ) -> Self {
        let task = tokio::spawn(run(source, interval.max(MIN_INTERVAL), sink));
        Self { task }
    }

    /// Stop polling and cancel a pending request.
    pub fn shutdown(self) {
        // Drop does the abort.
    }

    /// Check whether the loop has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CatalogPoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    source: Arc<dyn ProductSource>,
    interval: Duration,
    sink: watch::Sender<Vec<Product>>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut pending: Option<PendingFetch> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if pending.is_some() {
                    debug!("previous catalog fetch still pending, skipping tick");
                    continue;
                }
                let source = Arc::clone(&source);
                pending = Some(Box::pin(async move { source.list_products().await }));
            }
            result = wait(&mut pending) => {
                pending = None;
                match result {
                    Ok(products) => {
                        debug!(count = products.len(), "catalog refreshed");
                        if sink.send(products).is_err() {
                            debug!("no catalog subscribers left, stopping poller");
                            return;
                        }
                    }
                    Err(e) => warn!(error = %e, "catalog refresh failed"),
                }
            }
            _ = sink.closed() => {
                debug!("no catalog subscribers left, stopping poller");
                return;
            }
        }
    }
}

/// Resolve the pending fetch, or never if there is none.
async fn wait(pending: &mut Option<PendingFetch>) -> Result<Vec<Product>, StorefrontError> {
    match pending {
        Some(fetch) => fetch.await,
        None => std::future::pending().await,
    }
}
