//! Server configuration from the environment.

use medgraph_core::SIMILARITY_THRESHOLD;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Runtime configuration, read once at startup. `.env` files are honored via
/// `dotenvy` in `main`.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`MEDGRAPH_ADDR`, default `127.0.0.1:3000`).
    pub addr: SocketAddr,
    /// Fuzzy acceptance threshold for all queries (`MEDGRAPH_THRESHOLD`,
    /// default [`SIMILARITY_THRESHOLD`]). Must lie in [0,1].
    pub threshold: f64,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var("MEDGRAPH_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = raw
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid MEDGRAPH_ADDR {raw:?}: {e}"))?;

        let threshold = match std::env::var("MEDGRAPH_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => SIMILARITY_THRESHOLD,
        };

        Ok(Self { addr, threshold })
    }
}

fn parse_threshold(raw: &str) -> anyhow::Result<f64> {
    let threshold: f64 = raw
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid MEDGRAPH_THRESHOLD {raw:?}: {e}"))?;
    anyhow::ensure!(
        (0.0..=1.0).contains(&threshold),
        "MEDGRAPH_THRESHOLD must be in [0,1], got {threshold}"
    );
    Ok(threshold)
}
