//! Remote catalog service - disk memoization plus a process-wide aggregate.
//!
//! Wraps a [`PokemonCatalogPort`] and exposes the catalog as an
//! offset-addressable sequence. Single-entry fetches go through the
//! [`EntryDiskCache`] before touching the network. [`RemoteCatalog::fetch_all`]
//! materializes the whole catalog once and keeps it in memory until
//! [`RemoteCatalog::invalidate`] is called or the process exits.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use futures_util::future::BoxFuture;
use futures_util::{FutureExt, StreamExt, TryStreamExt, stream};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::domain::{Entry, PageWindow};
use crate::ports::catalog::CatalogResult;
use crate::ports::{CoreError, PokemonCatalogPort};

use super::disk_cache::EntryDiskCache;

/// Upper bound on entries materialized by [`RemoteCatalog::fetch_all`].
pub const DEFAULT_CATALOG_LIMIT: usize = 2000;

/// Concurrent single-entry fetches while populating.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 16;

/// Tuning for [`RemoteCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteCatalogConfig {
    pub catalog_limit: usize,
    pub fetch_concurrency: usize,
}

impl Default for RemoteCatalogConfig {
    fn default() -> Self {
        Self {
            catalog_limit: DEFAULT_CATALOG_LIMIT,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

/// One page of the remote catalog, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePage {
    /// Size of the whole remote catalog.
    pub total: usize,
    pub items: Vec<Entry>,
    pub next_offset: Option<usize>,
    pub previous_offset: Option<usize>,
}

type Aggregate = Arc<[Entry]>;

/// The remote catalog with per-entry disk memoization and a shared
/// in-memory aggregate.
pub struct RemoteCatalog {
    port: Arc<dyn PokemonCatalogPort>,
    disk: Option<EntryDiskCache>,
    config: RemoteCatalogConfig,
    // Swapped wholesale on invalidate so in-flight populations finish
    // against the cell they started with.
    aggregate: Mutex<Arc<OnceCell<Aggregate>>>,
}

impl RemoteCatalog {
    pub fn new(
        port: Arc<dyn PokemonCatalogPort>,
        disk: Option<EntryDiskCache>,
        config: RemoteCatalogConfig,
    ) -> Self {
        Self {
            port,
            disk,
            config,
            aggregate: Mutex::new(Arc::new(OnceCell::new())),
        }
    }

    pub const fn config(&self) -> RemoteCatalogConfig {
        self.config
    }

    /// Fetch a single entry, consulting the disk cache first.
    pub async fn resolve(&self, name: &str) -> CatalogResult<Entry> {
        if let Some(disk) = &self.disk {
            if let Some(entry) = disk.read(name).await {
                return Ok(entry);
            }
        }

        let entry = self.port.resolve(name).await?;

        if let Some(disk) = &self.disk {
            if let Err(e) = disk.write(name, &entry).await {
                warn!(target: "pokedex.cache", name, error = %e, "Failed to persist catalog entry");
            }
        }

        Ok(entry)
    }

    /// One page of the catalog using the source's own pagination.
    ///
    /// A zero `limit` resolves nothing but still reports the total.
    pub async fn list_page(&self, limit: usize, offset: usize) -> Result<RemotePage, CoreError> {
        let listing = self.port.list(limit.max(1), offset).await?;

        let items = if limit == 0 {
            Vec::new()
        } else {
            self.resolve_in_order(&listing.names)
                .await
                .map_err(|e| CoreError::ExternalService(e.to_string()))?
        };

        let window = PageWindow::new(offset, limit);
        Ok(RemotePage {
            total: listing.count,
            items,
            next_offset: window.next(listing.count).map(|w| w.offset),
            previous_offset: window.previous().map(|w| w.offset),
        })
    }

    /// The whole catalog, populated at most once per cache lifetime.
    ///
    /// Concurrent callers that find the aggregate empty share a single
    /// population. If it fails (any entry failing aborts the whole run),
    /// nothing is kept in memory and the next caller tries again; entries
    /// already written to disk stay there.
    pub async fn fetch_all(&self) -> Result<Aggregate, CoreError> {
        let cell = self.aggregate_cell();
        let entries = cell.get_or_try_init(|| self.populate()).await?;
        Ok(Arc::clone(entries))
    }

    /// Drop the in-memory aggregate. The disk cache is left untouched.
    pub fn invalidate(&self) {
        let mut guard = self.aggregate.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(OnceCell::new());
        info!(target: "pokedex.catalog", "Remote catalog aggregate invalidated");
    }

    /// Whether the aggregate is currently populated.
    pub fn is_populated(&self) -> bool {
        self.aggregate_cell().initialized()
    }

    fn aggregate_cell(&self) -> Arc<OnceCell<Aggregate>> {
        let guard = self.aggregate.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    async fn populate(&self) -> Result<Aggregate, CoreError> {
        let started = Instant::now();
        let listing = self
            .port
            .list(self.config.catalog_limit, 0)
            .await
            .map_err(|e| CoreError::ExternalService(format!("catalog listing failed: {e}")))?;

        let entries = self.resolve_in_order(&listing.names).await.map_err(|e| {
            warn!(target: "pokedex.catalog", error = %e, "Remote catalog population aborted");
            CoreError::ExternalService(format!("catalog population failed: {e}"))
        })?;

        info!(
            target: "pokedex.catalog",
            entries = entries.len(),
            remote_total = listing.count,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Remote catalog aggregate populated"
        );

        Ok(entries.into())
    }

    /// Resolve `names` with bounded concurrency, preserving their order.
    async fn resolve_in_order(&self, names: &[String]) -> CatalogResult<Vec<Entry>> {
        debug!(target: "pokedex.catalog", count = names.len(), "Resolving catalog entries");
        // Boxed so the future is `Send` for every borrow of `self`.
        let fetches: Vec<BoxFuture<'_, CatalogResult<Entry>>> = names
            .iter()
            .map(|name| self.resolve(name).boxed())
            .collect();
        stream::iter(fetches)
            .buffered(self.config.fetch_concurrency.max(1))
            .try_collect()
            .await
    }
}
