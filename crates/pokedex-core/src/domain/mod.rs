//! Domain types shared by every adapter.
//!
//! These types carry no storage or transport details.

mod entry;
mod pagination;

pub use entry::{
    DEFAULT_HEIGHT, DEFAULT_WEIGHT, Entry, EntryId, LOCAL_PLACEHOLDER_IMAGE, LocalPokemon,
    NewPokemon, Stats,
};
pub use pagination::{DEFAULT_LIMIT, Page, PageWindow, filter_by_name, paginate};
