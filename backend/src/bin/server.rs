//! Outage status server.
//!
//! Serves queue schedules over gRPC-Web and JSON from an in-memory provider.
//!
//! # Usage
//!
//! ```bash
//! STATUS_FILE=statuses.json cargo run --bin outage-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `STATUS_FILE`: JSON object of queue id -> 0/1 array (optional)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use outage_schedule::config::ServerConfig;
use outage_schedule::http::{create_router, AppState};
use outage_schedule::provider::InMemoryStatusProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    info!("Starting outage status server");

    let config = ServerConfig::from_env()?;

    let provider = match &config.status_file {
        Some(path) => {
            let provider = InMemoryStatusProvider::from_json_file(path)?;
            info!("Loaded {} queues from {}", provider.queue_count(), path.display());
            provider
        }
        None => {
            warn!("STATUS_FILE not set; every queue will report no data");
            InMemoryStatusProvider::new()
        }
    };

    let app = create_router(AppState::new(Arc::new(provider)));

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
