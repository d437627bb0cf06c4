//! PokeAPI client
//!
//! HTTP fetch-and-decode with read-through caching keyed by request URL.

mod client;

pub use client::PokeApiClient;
