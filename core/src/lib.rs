//! hinta-core - Core types for HINTA cost source plugins
//!
//! This crate provides the foundational types shared between the HINTA
//! SDK and plugin implementations:
//!
//! - [`CostSource`] trait family - the plugin interface (base + optional
//!   capability traits)
//! - [`Capability`] and the capability registry - how a plugin's optional
//!   surface is advertised
//! - [`PluginInfo`] - plugin identity, validated at startup
//! - [`PluginError`] - error type for plugin operations
//! - `proto` - the prost-generated wire types (gRPC boundaries and the
//!   JSON protocol variant share these)
//!
//! # Why this crate exists
//!
//! Plugin implementations need the trait and message types, while the SDK
//! needs the same types plus the full transport stack. Keeping the shared
//! surface here means a plugin crate never pulls tonic, axum, or
//! prometheus just to define its business logic.

#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::panic)]
#![warn(missing_docs)]

/// Capability registry: inference, overrides, legacy string keys
pub mod capability;
mod error;
mod info;
mod source;
/// Request validation shared by client and server
pub mod validate;

// Proto types generated from hinta/v1/types.proto
#[allow(missing_docs)]
pub mod proto {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::derive_partial_eq_without_eq)]

    include!("proto/hinta.v1.rs");
}

pub use capability::{
    effective_capabilities, infer_capabilities, legacy_capability_map, legacy_key,
    BASE_CAPABILITIES, MAX_DECLARED_CAPABILITIES, OPTIONAL_CAPABILITY_COUNT,
};
pub use error::PluginError;
pub use info::PluginInfoError;
pub use proto::{Capability, PluginInfo};
pub use source::{
    BudgetSource, CostSource, DryRunSource, RecommendationDismissal, RecommendationSource,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_error_display() {
        let err = PluginError::InvalidRequest("resource is required".to_string());
        assert_eq!(err.to_string(), "invalid request: resource is required");

        let err = PluginError::NotReady;
        assert_eq!(err.to_string(), "plugin not ready");

        let err = PluginError::Unsupported("budgets".to_string());
        assert_eq!(err.to_string(), "capability not supported: budgets");
    }

    #[test]
    fn test_plugin_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PluginError>();
    }

    #[test]
    fn test_capability_round_trip_through_i32() {
        for cap in [
            Capability::ProjectedCost,
            Capability::ActualCost,
            Capability::PricingSpec,
            Capability::EstimateCost,
            Capability::Recommendations,
            Capability::Budgets,
            Capability::DismissRecommendation,
            Capability::DryRun,
        ] {
            assert_eq!(Capability::try_from(cap as i32), Ok(cap));
        }
        assert!(Capability::try_from(99).is_err());
    }

    #[test]
    fn test_capability_str_names() {
        assert_eq!(
            Capability::DryRun.as_str_name(),
            "CAPABILITY_DRY_RUN"
        );
        assert_eq!(
            Capability::from_str_name("CAPABILITY_BUDGETS"),
            Some(Capability::Budgets)
        );
        assert_eq!(Capability::from_str_name("bogus"), None);
    }

    #[test]
    fn test_proto_default_is_empty() {
        let info = PluginInfo::default();
        assert!(info.name.is_empty());
        assert!(info.providers.is_empty());
        assert!(info.metadata.is_empty());
        assert!(info.capabilities.is_empty());
    }
}
