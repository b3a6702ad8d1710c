//! In-memory port implementations for tests.
//!
//! Available to this crate's unit tests and, behind the `test-utils`
//! feature, to adapter test suites.

use std::collections::HashSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Entry, EntryId, LocalPokemon, NewPokemon, Stats};
use crate::ports::catalog::CatalogResult;
use crate::ports::{
    CatalogError, CatalogListing, PokemonCatalogPort, PokemonRepository, RepositoryError,
};

/// A remote-looking entry with plausible field values.
pub fn remote_entry(id: i64, name: &str) -> Entry {
    Entry {
        id: EntryId::Remote(id),
        name: name.to_string(),
        types: vec!["normal".to_string()],
        image: Some(format!(
            "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"
        )),
        weight: 100,
        height: 10,
        base_experience: 64,
        forms: vec![name.to_string()],
        abilities: vec!["run-away".to_string()],
        stats: Stats {
            hp: 40,
            attack: 45,
            defense: 40,
            special_attack: 35,
            special_defense: 35,
            speed: 56,
        },
    }
}

/// Vec-backed local store with store-level (namespace, name) uniqueness.
#[derive(Default)]
pub struct InMemoryPokemonRepository {
    rows: Mutex<Vec<LocalPokemon>>,
}

impl InMemoryPokemonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn namespace_rows(&self, namespace: &str) -> Vec<LocalPokemon> {
        let rows = self.rows.lock().unwrap();
        let mut matching: Vec<LocalPokemon> = rows
            .iter()
            .filter(|row| row.namespace == namespace)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.id.cmp(&a.id));
        matching
    }
}

#[async_trait]
impl PokemonRepository for InMemoryPokemonRepository {
    async fn count(&self, namespace: &str) -> Result<u64, RepositoryError> {
        Ok(self.namespace_rows(namespace).len() as u64)
    }

    async fn list_page(
        &self,
        namespace: &str,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<LocalPokemon>, RepositoryError> {
        Ok(self
            .namespace_rows(namespace)
            .into_iter()
            .skip(offset)
            .take(limit)
            .collect())
    }

    async fn list_namespace(&self, namespace: &str) -> Result<Vec<LocalPokemon>, RepositoryError> {
        Ok(self.namespace_rows(namespace))
    }

    async fn find_by_name(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<Option<LocalPokemon>, RepositoryError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|row| row.namespace == namespace && row.name == name)
            .cloned())
    }

    async fn create(
        &self,
        namespace: &str,
        pokemon: &NewPokemon,
    ) -> Result<LocalPokemon, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if rows
            .iter()
            .any(|row| row.namespace == namespace && row.name == pokemon.name)
        {
            return Err(RepositoryError::AlreadyExists(format!(
                "{namespace}/{}",
                pokemon.name
            )));
        }

        let row = LocalPokemon {
            id: rows.iter().map(|row| row.id).max().unwrap_or(0) + 1,
            namespace: namespace.to_string(),
            name: pokemon.name.clone(),
            kind: pokemon.kind.clone(),
            weight: pokemon.effective_weight(),
            height: pokemon.effective_height(),
            created_at: Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<LocalPokemon>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.namespace.cmp(&b.namespace).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}

/// Fixed remote catalog that counts the calls it receives.
pub struct FakeCatalog {
    entries: Vec<Entry>,
    failing: HashSet<String>,
    delay: Option<Duration>,
    list_calls: AtomicUsize,
    resolve_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            failing: HashSet::new(),
            delay: None,
            list_calls: AtomicUsize::new(0),
            resolve_calls: AtomicUsize::new(0),
        }
    }

    /// Catalog of `count` entries named `remote0`, `remote1`, ...
    pub fn numbered(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| remote_entry(i as i64 + 1, &format!("remote{i}")))
                .collect(),
        )
    }

    /// Make resolving `name` fail with a network error.
    #[must_use]
    pub fn failing_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Sleep before answering each call.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PokemonCatalogPort for FakeCatalog {
    async fn list(&self, limit: usize, offset: usize) -> CatalogResult<CatalogListing> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        Ok(CatalogListing {
            count: self.entries.len(),
            names: self
                .entries
                .iter()
                .skip(offset)
                .take(limit)
                .map(|entry| entry.name.clone())
                .collect(),
        })
    }

    async fn resolve(&self, name: &str) -> CatalogResult<Entry> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.failing.contains(name) {
            return Err(CatalogError::Network {
                message: format!("connection reset while fetching {name}"),
            });
        }
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound {
                name: name.to_string(),
            })
    }
}
