use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paye_engine::api::{AppState, create_router};
use paye_engine::config::ConfigLoader;

/// Serve the PAYE calculator API.
///
/// The tax year configuration is loaded and validated before the server
/// starts; an invalid bracket table or contribution rate aborts startup.
#[derive(Parser, Debug)]
#[command(name = "paye-engine")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing tax_year.yaml and bands.yaml
    #[arg(short, long, default_value = "./config/zra_2026")]
    config: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = ConfigLoader::load(&args.config)
        .with_context(|| format!("Failed to load configuration: {}", args.config.display()))?;

    info!(
        tax_year = %config.tax_year().code,
        effective_date = %config.tax_year().effective_date,
        "Configuration ready"
    );

    let router = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    info!(address = %args.bind, "Listening");

    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")?;

    Ok(())
}
