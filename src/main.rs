//! Pokedex - An interactive pokedex for your terminal
//!
//! Starts the REPL against PokeAPI with a TTL response cache behind it.

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::config::Config;
use pokedex::repl::{self, AppState};

/// Entry point for the pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the API client and the response cache behind it
/// 4. Run the prompt loop until the session ends
#[tokio::main]
async fn main() -> Result<()> {
    // Logs stay off the prompt unless RUST_LOG asks for them
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = Config::from_env();
    debug!(
        "Configuration loaded: cache_interval={}s, api_base_url={}",
        config.cache_interval, config.api_base_url
    );

    let mut state = AppState::new(&config)?;
    info!("Pokedex ready");

    repl::run(&mut state).await;

    info!("Session ended");
    Ok(())
}
