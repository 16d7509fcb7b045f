//! Convenience re-exports for plugin authors.
//!
//! ```rust
//! use hinta_runtime::prelude::*;
//! ```

// Plugin interface
pub use hinta_core::{
    BudgetSource, CostSource, DryRunSource, PluginError, RecommendationDismissal,
    RecommendationSource,
};

// Identity and capabilities
pub use hinta_core::{Capability, PluginInfo};

// Wire types
pub use hinta_core::proto;

// Server surface
pub use hinta_sdk::{CorsSetting, PluginServer, ServeConfig, ServerError, WebConfig};

// Health
pub use hinta_sdk::{HealthChecker, HealthStatus};

// Client surface
pub use hinta_sdk::{
    ActualCostIterator, ClientConfig, ClientError, CostClient, HttpTransport, Protocol,
};

// Async trait for implementing the plugin interfaces
pub use async_trait::async_trait;

// Cancellation
pub use tokio_util::sync::CancellationToken;

// Runtime
pub use crate::RuntimeBuilder;
