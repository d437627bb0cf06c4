//! Pokedex CLI - an interactive PokeAPI explorer
//!
//! Browses location areas, explores encounters and catches pokemon, with API
//! responses held in an in-memory TTL cache.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::{Cache, ExpiryPolicy};
pub use commands::{dispatch, Reply, Session};
pub use config::Config;
pub use error::{CacheError, CommandError};
