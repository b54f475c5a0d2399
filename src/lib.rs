//! Pokedex - An interactive pokedex for your terminal
//!
//! Browses locations and catches pokemon through PokeAPI, with every
//! response held in a TTL cache so repeated lookups stay off the network.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::TtlCache;
pub use config::Config;
pub use repl::AppState;
