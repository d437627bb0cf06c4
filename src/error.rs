//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors returned by the response cache.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The key is already cached; entries are never overwritten
    #[error("The key {0} already exists in the cache")]
    AlreadyExists(String),
}

// == Command Error Enum ==
/// Unified error type for REPL commands.
///
/// Every variant is recoverable: the REPL prints it and keeps reading input.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The HTTP request could not be completed
    #[error("Request to {url} failed with error: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code
    #[error("Request to {url} failed with status code: {status}")]
    Status { url: String, status: u16 },

    /// The response body did not match the expected JSON shape
    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Pokemon is not in the local collection
    #[error("{0} is not in your pokedex")]
    NotFoundInCollection(String),

    /// Pokemon cannot be encountered in the explored area
    #[error("{pokemon} is not present in {area}")]
    NotLocalToArea { pokemon: String, area: String },

    /// Pokemon is already in the local collection
    #[error("{0} has already been caught")]
    AlreadyCaught(String),

    /// `mapb` without a previous page
    #[error("There are no locations to go back to")]
    NoPreviousPage,

    /// `catch` before any `explore`
    #[error("You have to explore an area before catching pokemon")]
    NoAreaExplored,

    /// Command was called without its required argument
    #[error("Missing argument, usage: {0}")]
    MissingArgument(&'static str),

    /// Argument cannot name an API resource
    #[error("{0:?} is not a valid name")]
    InvalidArgument(String),

    /// A request URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Input does not name a known command
    #[error("{0} is not a valid command")]
    UnknownCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for command handlers.
pub type Result<T> = std::result::Result<T, CommandError>;
