//! PokeAPI response models
//!
//! Serde types for the JSON bodies returned by the location-area and pokemon
//! endpoints. Only the fields the client uses are declared; unknown fields
//! are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{Encounter, LocationAreaDetail, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
