//! `rpg` headless client binary.
//!
//! Loads content (bundled or from `RPG_*` paths), starts the runtime with a
//! stdin input provider, and prints every tick's narration and map to
//! stdout. Logs go to stderr; tune them with `RUST_LOG`.
//!
//! ```bash
//! RPG_LEVEL_PATH=levels/cave.map RUST_LOG=runtime=debug cargo run -p rpg-client
//! ```

use anyhow::{Context, Result};
use runtime::{Runtime, SessionEnd};
use tracing_subscriber::EnvFilter;

use rpg_client::{ClientConfig, StdinProvider, view};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Starting rpg client");
    tracing::debug!("Client config: {:?}", config);

    let state = config
        .content_factory()
        .build_state()
        .context("failed to load game content")?;
    println!("{}", view::render_snapshot(&state));

    let mut runtime = Runtime::builder()
        .config(config.runtime.clone())
        .initial_state(state)
        .provider(StdinProvider::stdin())
        .build()?;

    let printer = tokio::spawn(view::print_events(runtime.subscribe_events()));

    let end = runtime.run().await?;
    runtime.shutdown().await?;
    printer.await.context("event printer panicked")?;

    match end {
        SessionEnd::Quit { tick } => tracing::info!("Session ended by player at tick {}", tick),
        SessionEnd::GameOver { tick } => tracing::info!("Game over at tick {}", tick),
    }
    Ok(())
}
