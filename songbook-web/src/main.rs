//! Songbook web frontend - main entry point
//!
//! Serves the record catalog: pages for adding, viewing, editing,
//! deleting and searching song records over a SQLite store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use songbook_web::{build_router, AppState};

/// Command-line arguments for songbook-web
#[derive(Parser, Debug)]
#[command(name = "songbook-web")]
#[command(about = "Web frontend for the Songbook record catalog")]
#[command(version)]
struct Args {
    /// SQLite database file (created on first run)
    #[arg(short, long, default_value = "songbook.db", env = "SONGBOOK_DATABASE")]
    database: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5750", env = "SONGBOOK_BIND")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songbook_web=info,songbook_common=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    info!("Starting Songbook v{}", env!("CARGO_PKG_VERSION"));
    info!("Database: {}", args.database.display());

    let db = songbook_common::db::init_database(&args.database)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(db);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", args.bind))?;

    info!("Listening on http://{}", args.bind);

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
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
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
