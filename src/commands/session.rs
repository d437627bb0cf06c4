//! Per-run REPL state passed explicitly to every handler.

use tracing::info;

use crate::api::PokeApiClient;
use crate::cache::Cache;
use crate::config::Config;
use crate::pokedex::Pokedex;

/// The area most recently explored, kept so `catch` can check locality
/// without another lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExploredArea {
    pub name: String,
    pub pokemon: Vec<String>,
}

impl ExploredArea {
    pub fn has_pokemon(&self, name: &str) -> bool {
        self.pokemon.iter().any(|p| p == name)
    }
}

/// Mutable context for one REPL run.
#[derive(Debug)]
pub struct Session {
    pub cache: Cache,
    pub client: PokeApiClient,
    pub pokedex: Pokedex,
    /// Page `map` will fetch next; `None` means start from the first page
    pub next_url: Option<String>,
    /// Page `mapb` will fetch
    pub prev_url: Option<String>,
    /// Page shown by the last `map`/`mapb`
    pub current_url: Option<String>,
    pub current_area: Option<ExploredArea>,
}

impl Session {
    pub fn new(cache: Cache, client: PokeApiClient) -> Self {
        Self {
            cache,
            client,
            pokedex: Pokedex::new(),
            next_url: None,
            prev_url: None,
            current_url: None,
            current_area: None,
        }
    }

    /// Builds the cache and client from configuration.
    ///
    /// Must be called inside a tokio runtime since the cache starts its reaper.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let client = PokeApiClient::from_config(config)?;
        let cache = Cache::with_policy(config.cache_ttl(), config.expiry_policy());
        Ok(Self::new(cache, client))
    }

    /// Logs cache activity for the run and stops the cache reaper.
    pub async fn shutdown(self) {
        let stats = self.cache.stats().await;
        info!("Cache summary: {}", stats);
        self.cache.stop().await;
    }
}
