//! Pokémon service - the merged, paginated view over both sources.
//!
//! Listing materializes the namespace's local entries and the cached remote
//! catalog, concatenates them (local first), filters, then slices the
//! requested window.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Entry, LocalPokemon, NewPokemon, Page, PageWindow, filter_by_name, paginate};
use crate::ports::{CatalogError, CoreError, PokemonRepository};

use super::remote_catalog::RemoteCatalog;

/// Parameters of a listing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub window: PageWindow,
    /// Case-sensitive substring filter on name. Empty means no filter.
    pub search: Option<String>,
}

impl ListQuery {
    pub const fn new(window: PageWindow) -> Self {
        Self {
            window,
            search: None,
        }
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

/// Service over the local store and the remote catalog.
pub struct PokemonService {
    repo: Arc<dyn PokemonRepository>,
    catalog: Arc<RemoteCatalog>,
}

impl PokemonService {
    pub fn new(repo: Arc<dyn PokemonRepository>, catalog: Arc<RemoteCatalog>) -> Self {
        Self { repo, catalog }
    }

    pub fn catalog(&self) -> &Arc<RemoteCatalog> {
        &self.catalog
    }

    /// One page of the namespace's virtual collection.
    pub async fn list(&self, namespace: &str, query: &ListQuery) -> Result<Page<Entry>, CoreError> {
        let (local, remote) = tokio::try_join!(
            async {
                self.repo
                    .list_namespace(namespace)
                    .await
                    .map_err(CoreError::from)
            },
            self.catalog.fetch_all(),
        )?;

        let local: Vec<Entry> = local.into_iter().map(Entry::from).collect();
        let merged: Vec<&Entry> = local.iter().chain(remote.iter()).collect();
        let filtered = filter_by_name(merged, query.search.as_deref(), |entry| {
            entry.name.as_str()
        });
        let page = paginate(filtered, query.window);

        debug!(
            namespace,
            local = local.len(),
            remote = remote.len(),
            count = page.count,
            offset = query.window.offset,
            limit = query.window.limit,
            "Listed pokemons"
        );

        Ok(Page {
            count: page.count,
            next: page.next,
            previous: page.previous,
            results: page.results.into_iter().cloned().collect(),
        })
    }

    /// Look up a single entry, remote first, then the namespace's local store.
    ///
    /// A remote entry shadows a local entry with the same name.
    pub async fn get_one(&self, namespace: &str, name: &str) -> Result<Entry, CoreError> {
        match self.catalog.resolve(name).await {
            Ok(entry) => return Ok(entry),
            Err(CatalogError::NotFound { .. }) => {
                debug!(namespace, name, "Not in remote catalog, trying local store");
            }
            Err(e) => {
                warn!(namespace, name, error = %e, "Remote lookup failed, falling back to local store");
            }
        }

        self.repo
            .find_by_name(namespace, name)
            .await?
            .map(Entry::from)
            .ok_or_else(|| CoreError::NotFound(format!("Pokemon '{name}' in '{namespace}'")))
    }

    /// Create a local entry in `namespace`.
    pub async fn create(&self, namespace: &str, pokemon: NewPokemon) -> Result<Entry, CoreError> {
        if pokemon.name.trim().is_empty() {
            return Err(CoreError::Validation("name must not be empty".to_string()));
        }
        if pokemon.kind.trim().is_empty() {
            return Err(CoreError::Validation("type must not be empty".to_string()));
        }

        let stored = self.repo.create(namespace, &pokemon).await?;
        info!(namespace, name = %stored.name, id = stored.id, "Created local pokemon");
        Ok(Entry::from(stored))
    }

    /// Every local entry across namespaces, ordered by namespace.
    pub async fn list_all_local(&self) -> Result<Vec<LocalPokemon>, CoreError> {
        self.repo.list_all().await.map_err(CoreError::from)
    }
}
