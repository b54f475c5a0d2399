//! Location DTOs for the PokeAPI client
//!
//! Defines the structure of location-area responses: the paginated
//! listing used by `map`/`mapb` and the area detail used by `explore`.

use serde::Deserialize;

/// A name/url pair, PokeAPI's standard way of pointing at a resource.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name, usable as a path segment
    pub name: String,
    /// Canonical URL of the resource
    pub url: String,
}

/// One page of the location-area listing (GET /location-area/)
///
/// `next` and `previous` are full URLs into the same listing, or null at
/// either end of it; they drive the `map`/`mapb` pagination cursors.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// URL of the following page, if any
    pub next: Option<String>,
    /// URL of the preceding page, if any
    pub previous: Option<String>,
    /// The areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail of a single location area (GET /location-area/{name})
///
/// Only the encounter list is decoded; the endpoint returns much more.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// Pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single encounter slot within a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The encountered pokemon
    pub pokemon: NamedResource,
}
