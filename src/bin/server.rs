//! Dashboard HTTP Server Binary
//!
//! This is the main entry point for the host location dashboard server.
//! It loads the location tables, sets up the HTTP router, and starts
//! serving the two dashboard pages and the REST API.
//!
//! # Usage
//!
//! ```bash
//! # Serve with the built-in tables
//! cargo run --bin hostmap-server
//!
//! # Serve the detailed dashboard from a CSV file
//! HOSTMAP_DATA=data/locations.csv cargo run --bin hostmap-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `HOSTMAP_DATA`: CSV file for the detailed dashboard (default: data/locations.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use hostmap::catalog::{self, Catalog};
use hostmap::config::ServerConfig;
use hostmap::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting host location dashboard server");

    let config = ServerConfig::load()?.with_env_overrides();

    // Build both tables once; they are immutable for the life of the process.
    // A data file with a broken header is a configuration error and aborts
    // startup here.
    let basic = Catalog::builtin_basic();
    let detailed = catalog::load_or_default(&config.dataset.file)?;
    info!(records = basic.len(), "Basic dashboard table ready");
    info!(
        records = detailed.len(),
        source = %detailed.source(),
        "Detailed dashboard table ready"
    );

    // Create application state
    let state = AppState::new(basic, detailed);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Dashboards: http://{}/ and http://{}/detailed", addr, addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
