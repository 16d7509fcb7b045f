//! HINTA Runtime — injectable plugin entrypoint
//!
//! Provides [`run()`] for zero-boilerplate plugin startup, and
//! [`RuntimeBuilder`] for plugins that need control over the address, the
//! browser protocol, or health checking.
//!
//! # Quick start
//!
//! ```ignore
//! use hinta_runtime::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let info = PluginInfo::new("my-costs", "0.1.0", "1.0.0");
//!     hinta_runtime::run(MyCostSource::new(), info).await
//! }
//! ```

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

pub mod prelude;

mod config;

pub use config::{Config, LogFormat};

use hinta_core::{CostSource, PluginInfo};
use hinta_sdk::{HealthChecker, PluginServer, ServeConfig, WebConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Run a cost source plugin with default settings.
///
/// Loads configuration from environment variables, initialises tracing
/// and metrics, then serves the plugin with signal-driven graceful
/// shutdown.
pub async fn run(plugin: impl CostSource, info: PluginInfo) -> anyhow::Result<()> {
    RuntimeBuilder::new().serve(plugin, info).await
}

/// Power-user builder for controlling runtime behaviour.
///
/// # Example
///
/// ```ignore
/// RuntimeBuilder::new()
///     .addr("0.0.0.0:50052".parse()?)
///     .web(WebConfig::enabled_for_origins(&["https://console.example.com"]))
///     .serve(MyCostSource::new(), info)
///     .await
/// ```
pub struct RuntimeBuilder {
    addr: Option<SocketAddr>,
    web: Option<WebConfig>,
    health_checker: Option<Arc<dyn HealthChecker>>,
    metrics_enabled: bool,
}

impl RuntimeBuilder {
    /// Create a new builder with defaults from environment variables.
    pub fn new() -> Self {
        Self {
            addr: None,
            web: None,
            health_checker: None,
            metrics_enabled: true,
        }
    }

    /// Override the listen address.
    ///
    /// Default: loaded from `HINTA_ADDR`, or `0.0.0.0:50051`.
    pub fn addr(mut self, addr: SocketAddr) -> Self {
        self.addr = Some(addr);
        self
    }

    /// Enable the browser protocol with the given configuration.
    pub fn web(mut self, web: WebConfig) -> Self {
        self.web = Some(web);
        self
    }

    /// Back `/healthz` with a plugin-supplied checker.
    pub fn health_checker(mut self, checker: Arc<dyn HealthChecker>) -> Self {
        self.health_checker = Some(checker);
        self
    }

    /// Do not mount the `/metrics` endpoint.
    pub fn disable_metrics(mut self) -> Self {
        self.metrics_enabled = false;
        self
    }

    /// Serve the plugin to completion.
    ///
    /// This is the terminal method — it blocks until SIGINT/SIGTERM.
    pub async fn serve(
        self,
        plugin: impl CostSource,
        info: PluginInfo,
    ) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        init_tracing(&config);

        let addr = self.addr.unwrap_or(config.addr);
        info!(
            %addr,
            plugin = %info.name,
            version = %info.version,
            "Starting HINTA cost source plugin"
        );

        let serve_config = ServeConfig {
            addr,
            web: self.web.unwrap_or_default(),
            health_checker: self.health_checker,
            expose_metrics: self.metrics_enabled,
        };

        let shutdown = CancellationToken::new();
        let trigger = shutdown.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            trigger.cancel();
        });

        PluginServer::new(plugin, info).serve(serve_config, shutdown).await?;

        info!("HINTA shutdown complete");
        Ok(())
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialise the tracing subscriber based on config.
fn init_tracing(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    // try_init: the runtime may be embedded in a host that already set a
    // global subscriber.
    match config.log_format {
        LogFormat::Json => {
            let _ = registry
                .with(tracing_subscriber::fmt::layer().json())
                .try_init();
        }
        LogFormat::Pretty => {
            let _ = registry.with(tracing_subscriber::fmt::layer()).try_init();
        }
    }
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = ?e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = ?e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
