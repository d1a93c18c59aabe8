mod config;
mod errors;
mod models;
mod responder;
mod routes;
mod service;

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::responder::clock::SystemClock;
use crate::responder::Responder;
use crate::service::chat_service::ChatService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "canned_chat=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let responder = Responder::new(Arc::new(SystemClock), config.time_format.clone());
    let chat_service = ChatService::new(responder);

    // ── Router ────────────────────────────────────────────────────────────────
    let app = routes::router(chat_service, &config);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
