//! Pokemon DTOs for the PokeAPI client
//!
//! Defines the slice of the pokemon detail response that `catch` and
//! `inspect` consume.

use serde::Deserialize;

use super::NamedResource;

/// Detail of a single pokemon (GET /pokemon/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Base experience yield; null for some forms, treated as zero
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stat values
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonType>,
}

/// One stat entry of a pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// The stat's base value
    pub base_stat: u32,
    /// Which stat this is (hp, attack, ...)
    pub stat: NamedResource,
}

/// One type slot of a pokemon
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// The type itself; `type` is reserved in Rust, hence the rename
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
