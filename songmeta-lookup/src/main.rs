//! songmeta - Song metadata lookup service
//!
//! Serves `GET /songs/:title/:artist` from a local SQLite store, falling back
//! to a MusicBrainz recording search on a miss.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use songmeta_common::config::load_toml_config;
use songmeta_common::{ConfigOverrides, ServiceConfig};
use songmeta_lookup::services::{MusicBrainzClient, SearchConfig};
use songmeta_lookup::{build_router, AppState};

/// Command-line arguments for songmeta
#[derive(Parser, Debug)]
#[command(name = "songmeta")]
#[command(about = "Song metadata lookup service")]
#[command(version)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, env = "SONGMETA_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "SONGMETA_BIND")]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SONGMETA_PORT")]
    port: Option<u16>,

    /// SQLite database URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Recording search endpoint
    #[arg(long, env = "MUSIC_SERVICE_URL")]
    music_service_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bind: self.bind.clone(),
            port: self.port,
            database_url: self.database_url.clone(),
            music_service_url: self.music_service_url.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let toml_config = load_toml_config(args.config.as_deref())?;
    let config = ServiceConfig::resolve(args.overrides(), toml_config)?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&config.log_level))
                .context("Invalid log level")?,
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting songmeta v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Recording search: {}", config.music_service_url);

    let db_pool = songmeta_lookup::db::init_database_pool(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    info!("Database connection established");

    let client = MusicBrainzClient::new(SearchConfig::from(&config))
        .context("Failed to create search client")?;

    let state = AppState::new(db_pool, Arc::new(client));
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
