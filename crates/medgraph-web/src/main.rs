//! MedGraph web server.
//!
//! Run with: cargo run -p medgraph-web

use tracing::info;
use tracing_subscriber::EnvFilter;

use medgraph_web::config::ServerConfig;
use medgraph_web::router::build_router;
use medgraph_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = build_router(AppState::with_threshold(config.threshold));

    info!(
        threshold = config.threshold,
        "MedGraph listening on http://{}", config.addr
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
