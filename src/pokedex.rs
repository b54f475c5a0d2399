//! Pokedex Module
//!
//! The in-memory collection of caught pokemon. Process-scoped, like the
//! response cache: nothing survives a restart.

use std::collections::HashMap;

use crate::models::Pokemon;

// == Pokedex ==
/// Caught pokemon keyed by the name they were caught by.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: HashMap<String, Pokemon>,
}

impl Pokedex {
    // == Constructor ==
    /// Creates an empty pokedex.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Records a caught pokemon under the given name, replacing any
    /// earlier capture of that name.
    ///
    /// The key is the name the user threw the ball at, which may be an
    /// alias of the payload's canonical name (an id, for instance);
    /// `inspect` looks pokemon up by the same spelling.
    pub fn record(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.caught.insert(name.into(), pokemon);
    }

    // == Get ==
    /// Returns the caught pokemon with this name, if any.
    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    // == Names ==
    /// Names of all caught pokemon, sorted for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.caught.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // == Length ==
    /// Returns how many pokemon have been caught.
    pub fn len(&self) -> usize {
        self.caught.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
