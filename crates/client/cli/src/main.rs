//! Crafting demo entry point.
mod config;
mod demo;
mod logging;

use std::sync::Arc;

use alchemy_content::ContentFactory;
use alchemy_runtime::{
    InMemoryActorRepo, OracleManager, RngRollProvider, RollProvider, Runtime, RuntimeConfig,
};
use anyhow::{Context, Result};
use config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    let content = ContentFactory::new(&config.content_dir)
        .load_all()
        .with_context(|| format!("Failed to load content from {}", config.content_dir.display()))?;
    tracing::info!(
        items = content.items.items.len(),
        actors = content.actors.len(),
        "content loaded"
    );

    let actors = InMemoryActorRepo::from_fixtures(content.actors.clone())?;
    let rolls: Arc<dyn RollProvider> = match config.seed {
        Some(seed) => Arc::new(RngRollProvider::from_seed(seed)),
        None => Arc::new(RngRollProvider::from_entropy()),
    };

    let runtime = Runtime::builder()
        .config(RuntimeConfig {
            alchemy: content.config.clone(),
            event_buffer_size: config.event_buffer,
        })
        .oracles(OracleManager::from_content(&content))
        .actors(Arc::new(actors))
        .rolls(rolls)
        .build()?;

    let printers = demo::spawn_printers(&runtime);
    let outcome = demo::run(&runtime, config.actor).await;

    drop(runtime);
    for printer in printers {
        printer.await.context("Event printer panicked")?;
    }
    outcome
}
