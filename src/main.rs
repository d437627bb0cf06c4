//! Pokedex CLI - an interactive PokeAPI explorer
//!
//! # Startup Sequence
//! 1. Initialize tracing subscriber for logging (stderr)
//! 2. Load configuration from environment variables
//! 3. Create the session: HTTP client, cache and its reaper
//! 4. Run the REPL on stdin/stdout until `exit` or end of input
//! 5. Stop the reaper

use anyhow::Context;
use tokio::io::{self, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex_cli::{repl, Config, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with REPL output.
    // Defaults to "warn", can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex_cli=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}s, page_size={}, reject_stale={}",
        config.base_url, config.cache_ttl, config.page_size, config.reject_stale
    );

    let mut session = Session::from_config(&config).context("Failed to build HTTP client")?;

    let result = repl::run(&mut session, BufReader::new(io::stdin()), io::stdout()).await;

    session.shutdown().await;
    info!("Pokedex closed");
    result
}
