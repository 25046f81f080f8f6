//! Pokedex - a REPL client for PokeAPI
//!
//! Explore location areas, catch pokemon and inspect your catches.

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::{Config, PokeApiClient, Repl};

/// Main entry point for the Pokedex client.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables, then CLI flags
/// 3. Create the API client; this starts the cache sweep
/// 4. Run one command, or the interactive loop until `exit` or EOF
/// 5. Stop the cache sweep
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so the prompt stays readable; override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.apply(Config::from_env());
    info!(
        "Configuration loaded: api_url={}, cache_interval={}s, http_timeout={}s",
        config.api_url, config.cache_interval, config.http_timeout
    );

    let client = PokeApiClient::new(&config)?;
    let mut repl = Repl::new(client);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.one_shot() {
        Some(line) => {
            repl.execute(&line, &mut out).await?;
        }
        None => {
            let stdin = io::stdin();
            repl.run(stdin.lock(), &mut out).await?;
        }
    }

    repl.shutdown().await;
    info!("Pokedex closed");
    Ok(())
}
