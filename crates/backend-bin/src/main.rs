// ============================
// crates/backend-bin/src/main.rs
// ============================
//! Tokio / Axum entry-point for the accounts service.
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use backend_lib::{
    auth::session_layer, config::Settings, router::create_router, store::FlatFileUserStore,
    AppState,
};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "accounts-backend", version, about = "Session-based account service")]
struct Cli {
    /// Path to the config file (defaults to accounts.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured listening port
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG wins
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Default log directive for the given `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| default_directive(cli.verbose).into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(port) = cli.port {
        settings.port = port;
    }

    // Create storage and application state
    let storage = FlatFileUserStore::new(&settings.data_dir)?;
    let sessions = session_layer(&settings)?;
    let state = AppState::new(Arc::new(storage), settings.clone());

    let app = create_router(state, sessions);

    // Run it
    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
