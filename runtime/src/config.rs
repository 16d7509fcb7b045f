//! Environment configuration for the runtime
//!
//! Variables:
//! - `HINTA_ADDR` — listen address (default `0.0.0.0:50051`)
//! - `HINTA_LOG_LEVEL` — tracing filter (default `info`)
//! - `HINTA_LOG_FORMAT` — `pretty` or `json` (default `pretty`)

use std::net::SocketAddr;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, for local development
    Pretty,
    /// Structured JSON lines, for log shipping
    Json,
}

/// Runtime configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Server listen address
    pub addr: SocketAddr,
    /// Tracing filter directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration, applying defaults for unset variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = match std::env::var("HINTA_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("HINTA_ADDR '{raw}' is not a socket address: {e}"))?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 50051)),
        };

        let log_level = std::env::var("HINTA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match std::env::var("HINTA_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            addr,
            log_level,
            log_format,
        })
    }
}
