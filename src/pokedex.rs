//! Pokedex Module
//!
//! Name-keyed collection of caught pokemon. Owned by the REPL session, so no
//! synchronization is needed.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::error::{CommandError, Result};
use crate::models::Pokemon;

/// A pokemon together with the time it was caught.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

impl CaughtPokemon {
    pub fn name(&self) -> &str {
        &self.pokemon.name
    }
}

/// Caught pokemon, ordered by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `pokemon` as caught now. A pokemon caught again replaces the
    /// earlier record.
    pub fn add(&mut self, pokemon: Pokemon) -> &CaughtPokemon {
        let name = pokemon.name.clone();
        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.entries.insert(name.clone(), caught);
        &self.entries[&name]
    }

    /// Looks up a caught pokemon by name.
    pub fn get(&self, name: &str) -> Result<&CaughtPokemon> {
        self.entries
            .get(name)
            .ok_or_else(|| CommandError::NotFoundInCollection(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All caught pokemon in name order.
    pub fn list(&self) -> impl Iterator<Item = &CaughtPokemon> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
