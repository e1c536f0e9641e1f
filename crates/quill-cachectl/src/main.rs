//! # Quill Cache CLI
//!
//! Loads the application configuration, connects to the configured cache
//! store and runs a single command against it.

use clap::Parser;
use quill_cache::{build_store, metrics, CacheService};
use quill_cachectl::{execute, Cli};
use quill_config::ConfigLoader;
use quill_core::telemetry::{init_logging, with_bootstrap_logging};
use tracing::{debug, error};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let loader = with_bootstrap_logging(|| ConfigLoader::new(cli.config_dir.clone()))?;
    let config = loader.get().await;

    init_logging(&config.observability.log_settings())?;
    metrics::register_metrics();

    debug!(
        environment = %config.app.environment,
        prefix = %config.redis.prefix,
        enabled = config.redis.enabled,
        "Configuration loaded"
    );

    let store = build_store(&config.redis).await?;
    let service = CacheService::from_config(store, &config.redis, &config.server);

    let output = execute(&service, cli.command).await?;
    println!("{}", output);
    Ok(())
}
