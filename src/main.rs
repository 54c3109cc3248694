//! Trade Checklist Journal — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the record store, routes, and the
//! static UI.

use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trade_checklist::api::{self, AppState};
use trade_checklist::config::AppConfig;
use trade_checklist::store::RecordStore;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("trade_checklist=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let cfg = AppConfig::load();
    let records_path = cfg.records_path();
    tracing::info!(path = %records_path.display(), "opening record store");

    let store = Arc::new(RecordStore::open(records_path));
    let state = AppState { store };
    let router = api::router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind).await?;
    tracing::info!(bind = %cfg.bind, "trade checklist journal listening");
    axum::serve(listener, router).await?;

    Ok(())
}
