//! Catalog service binary: loads configuration, starts the stores and serves HTTP until Ctrl-C.

use anyhow::{Context, Result};
use catalog_service::config::CatalogConfig;
use catalog_service::http::{self, AppState};
use catalog_service::lifecycle::{setup_tracing, CatalogSystem};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "catalog-service")]
#[command(about = "Serve the product catalog over HTTP")]
struct Cli {
    /// Optional configuration file (TOML, YAML or JSON).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Listen address, overrides the configured one.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CatalogConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(listen) = cli.listen {
        config.listen = listen;
        config.validate()?;
    }

    setup_tracing(&config.log_level);

    let system = CatalogSystem::new(&config);
    let router = http::router(AppState::from_system(&system), &config.api_prefix);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, prefix = %config.api_prefix, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Ctrl-C received");
        })
        .await?;

    // The router and its manager clones are gone once serve returns.
    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}
