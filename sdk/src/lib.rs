//! HINTA SDK - serve and consume cost source plugins
//!
//! The SDK sits between a plugin author's business logic and the wire:
//!
//! ```text
//! CostSource impl ──► PluginServer ──► gRPC │ gRPC-Web │ JSON   (one listener)
//!                                        ▲
//!                        CostClient ─────┘  (protocol-selectable)
//! ```
//!
//! - [`PluginServer`] serves one [`hinta_core::CostSource`] implementation
//!   over three wire protocols on a single listener, with capability
//!   negotiation, trace/metrics instrumentation, CORS, health, and
//!   Prometheus endpoints.
//! - [`CostClient`] is the typed client: one method per RPC, a uniform
//!   error shape, and deterministic timeout precedence.
//! - [`ActualCostIterator`] walks the paginated actual-cost RPC safely,
//!   with a hard bound on misbehaving upstreams.

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]

mod client;
mod error;
mod grpcweb;
/// Health endpoint types
pub mod health;
/// Server instrumentation chain
pub mod interceptor;
mod iterator;
/// JSON protocol codec helpers
pub mod json;
/// Prometheus metrics
pub mod metrics;
mod server;
mod service;
mod web;

// Proto service plumbing generated from hinta/v1/costsource.proto
pub mod proto {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    include!("proto/hinta.v1.rs");
}

pub use client::{ClientConfig, CostClient, HttpTransport, Protocol, DEFAULT_TIMEOUT};
pub use error::{ClientError, ServerError};
pub use health::{HealthChecker, HealthStatus};
pub use iterator::{
    ActualCostIterator, PageFetcher, PageFuture, DEFAULT_PAGE_SIZE, MAX_CONSECUTIVE_EMPTY_PAGES,
};
pub use metrics::Metrics;
pub use server::{PluginServer, ServeConfig};
pub use web::{CorsSetting, WebConfig, DEFAULT_CORS_MAX_AGE};

// Re-export the core surface so plugin binaries depend on one crate.
pub use hinta_core::{
    effective_capabilities, infer_capabilities, legacy_capability_map, BudgetSource, Capability,
    CostSource, DryRunSource, PluginError, PluginInfo, PluginInfoError, RecommendationDismissal,
    RecommendationSource,
};
