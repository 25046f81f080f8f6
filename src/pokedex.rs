//! Caught-pokemon registry
//!
//! In-memory record of every pokemon the user has caught. Unlike the
//! response cache nothing here ever expires.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::PokemonDetails;

// == Caught Record ==
/// A pokemon in the registry along with when it was caught.
#[derive(Debug, Clone, PartialEq)]
pub struct CaughtPokemon {
    pub details: PokemonDetails,
    pub caught_at: DateTime<Utc>,
}

// == Pokedex ==
/// Registry of caught pokemon keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    pokemon: HashMap<String, CaughtPokemon>,
}

impl Pokedex {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Records `details` as caught now, replacing any earlier record.
    pub fn add(&mut self, details: PokemonDetails) -> &CaughtPokemon {
        let name = details.name.clone();
        let caught = CaughtPokemon {
            details,
            caught_at: Utc::now(),
        };
        self.pokemon.insert(name.clone(), caught);
        &self.pokemon[&name]
    }

    // == Lookup ==
    /// The record for `name`, if caught.
    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.pokemon.get(name)
    }

    /// Returns true if `name` has been caught.
    pub fn has(&self, name: &str) -> bool {
        self.pokemon.contains_key(name)
    }

    /// Every caught pokemon, sorted by name.
    pub fn all(&self) -> Vec<&CaughtPokemon> {
        let mut all: Vec<_> = self.pokemon.values().collect();
        all.sort_by(|a, b| a.details.name.cmp(&b.details.name));
        all
    }

    /// Number of distinct pokemon caught.
    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    /// Returns true if nothing has been caught yet.
    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }
}
