//! API Module
//!
//! The PokeAPI access layer: a reqwest-backed client with the TTL
//! response cache in front of every request.
//!
//! # Endpoints used
//! - `GET /location-area/` - paginated location listing (`map`, `mapb`)
//! - `GET /location-area/{name}` - area detail (`explore`)
//! - `GET /pokemon/{name}` - pokemon detail (`catch`)

pub mod client;

pub use client::PokeApiClient;
