//! Response models for the PokeAPI client
//!
//! This module defines the DTOs (Data Transfer Objects) deserialized
//! from PokeAPI response bodies. Only the fields the REPL consumes are
//! declared; serde skips the rest of each payload.

pub mod locations;
pub mod pokemon;

// Re-export commonly used types
pub use locations::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
