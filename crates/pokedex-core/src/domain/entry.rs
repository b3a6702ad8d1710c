//! Normalized Pokémon entries and the locally stored records they come from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sprite shown for every locally created entry.
pub const LOCAL_PLACEHOLDER_IMAGE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png";

/// Weight applied when a creation request leaves it unset.
pub const DEFAULT_WEIGHT: i64 = 42;

/// Height applied when a creation request leaves it unset.
pub const DEFAULT_HEIGHT: i64 = 10;

/// Identifier of an [`Entry`], tagged with the id space it belongs to.
///
/// Local ids are database row ids, remote ids are catalog ids. The two
/// spaces overlap numerically, so they never compare equal to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryId {
    /// Row id in the local store.
    Local(i64),
    /// Id assigned by the remote catalog.
    Remote(i64),
}

impl EntryId {
    /// The raw numeric value, regardless of source.
    pub const fn value(self) -> i64 {
        match self {
            Self::Local(id) | Self::Remote(id) => id,
        }
    }

    pub const fn is_local(self) -> bool {
        matches!(self, Self::Local(_))
    }

    /// Deserialize a bare number as a remote id.
    ///
    /// Only remote entries are ever read back from JSON (the catalog disk
    /// cache), so the id space is known from context.
    pub fn deserialize_remote<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        i64::deserialize(deserializer).map(Self::Remote)
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value())
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local(id) => write!(f, "local:{id}"),
            Self::Remote(id) => write!(f, "remote:{id}"),
        }
    }
}

/// The six base stats every entry reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    #[serde(rename = "special-attack")]
    pub special_attack: i64,
    #[serde(rename = "special-defense")]
    pub special_defense: i64,
    pub speed: i64,
}

impl Stats {
    /// Set a stat by its catalog name. Unknown names are ignored.
    ///
    /// Returns `true` when the name matched one of the six stats.
    pub fn set_named(&mut self, name: &str, value: i64) -> bool {
        let slot = match name {
            "hp" => &mut self.hp,
            "attack" => &mut self.attack,
            "defense" => &mut self.defense,
            "special-attack" => &mut self.special_attack,
            "special-defense" => &mut self.special_defense,
            "speed" => &mut self.speed,
            _ => return false,
        };
        *slot = value;
        true
    }
}

/// A normalized Pokémon record, from either the local store or the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(deserialize_with = "EntryId::deserialize_remote")]
    pub id: EntryId,
    pub name: String,
    pub types: Vec<String>,
    pub image: Option<String>,
    pub weight: i64,
    pub height: i64,
    pub base_experience: i64,
    pub forms: Vec<String>,
    pub abilities: Vec<String>,
    pub stats: Stats,
}

impl From<LocalPokemon> for Entry {
    fn from(pokemon: LocalPokemon) -> Self {
        Self {
            id: EntryId::Local(pokemon.id),
            name: pokemon.name,
            types: vec![pokemon.kind],
            image: Some(LOCAL_PLACEHOLDER_IMAGE.to_string()),
            weight: pokemon.weight,
            height: pokemon.height,
            base_experience: 0,
            forms: Vec::new(),
            abilities: Vec::new(),
            stats: Stats::default(),
        }
    }
}

/// A user-created Pokémon as persisted in the local store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalPokemon {
    pub id: i64,
    pub namespace: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub weight: i64,
    pub height: i64,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a local Pokémon.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPokemon {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub weight: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
}

impl NewPokemon {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            weight: None,
            height: None,
        }
    }

    #[must_use]
    pub const fn with_weight(mut self, weight: i64) -> Self {
        self.weight = Some(weight);
        self
    }

    #[must_use]
    pub const fn with_height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    /// Weight to persist. Zero counts as unset.
    pub fn effective_weight(&self) -> i64 {
        self.weight.filter(|w| *w != 0).unwrap_or(DEFAULT_WEIGHT)
    }

    /// Height to persist. Zero counts as unset.
    pub fn effective_height(&self) -> i64 {
        self.height.filter(|h| *h != 0).unwrap_or(DEFAULT_HEIGHT)
    }
}
