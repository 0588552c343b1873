//! HTTP harness for the CBT exam converter.
//!
//! Accepts a `.docx` exam upload, hands the extracted paragraph texts to
//! cbt-core, and serves the generated table document back as a download.
//! The harness owns everything the core does not: container I/O,
//! file-type gatekeeping, and user-facing error reporting.

pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default cap for uploaded documents; override with MAX_UPLOAD_BYTES.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the application router. Shared with the integration tests.
pub fn app() -> Router {
    let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/convert", post(routes::convert::convert))
        .route("/api/analyze", post(routes::convert::analyze))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = app()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
