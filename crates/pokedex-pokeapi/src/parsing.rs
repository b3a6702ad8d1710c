//! Normalization of PokeAPI documents into core types.

use pokedex_core::{CatalogListing, Entry, EntryId, Stats};
use tracing::trace;

use crate::models::{PokemonDetail, PokemonListResponse};

/// Flatten a detail document into an `Entry`.
///
/// Stats are keyed by their PokeAPI name; unknown stat names are dropped and
/// missing ones stay at zero.
pub fn normalize_pokemon(detail: PokemonDetail) -> Entry {
    let mut stats = Stats::default();
    for slot in &detail.stats {
        if !stats.set_named(&slot.stat.name, slot.base_stat) {
            trace!(pokemon = %detail.name, stat = %slot.stat.name, "Ignoring unknown stat");
        }
    }

    Entry {
        id: EntryId::Remote(detail.id),
        name: detail.name,
        types: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
        image: detail.sprites.front_default,
        weight: detail.weight,
        height: detail.height,
        base_experience: detail.base_experience.unwrap_or(0),
        forms: detail.forms.into_iter().map(|form| form.name).collect(),
        abilities: detail
            .abilities
            .into_iter()
            .map(|slot| slot.ability.name)
            .collect(),
        stats,
    }
}

/// Names of a listing page, in source order.
pub fn listing_from_response(response: PokemonListResponse) -> CatalogListing {
    CatalogListing {
        count: response.count,
        names: response.results.into_iter().map(|r| r.name).collect(),
    }
}
