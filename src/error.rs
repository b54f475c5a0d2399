//! Error types for the Pokedex REPL
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex REPL.
///
/// Command errors are printed by the prompt loop with their `Display`
/// message, so the wording here is user-facing.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache constructed with a zero interval
    #[error("cache interval must be a positive duration, got {0:?}")]
    InvalidInterval(Duration),

    /// HTTP request failed before a response was received
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("received {0} http status code")]
    UnexpectedStatus(u16),

    /// Response body did not decode into the expected shape
    #[error("failed to decode api response: {0}")]
    Json(#[from] serde_json::Error),

    /// Paged forward past the last location page
    #[error("no more locations to show")]
    NoMoreLocations,

    /// Paged backward with no previous page
    #[error("no previous locations to show")]
    NoPreviousLocations,

    /// Command invoked without its required argument
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Inspected a pokemon that is not in the pokedex
    #[error("you have not caught that pokemon")]
    NotCaught,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex REPL.
pub type Result<T> = std::result::Result<T, PokedexError>;
