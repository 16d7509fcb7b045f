//! Capability registry
//!
//! Derives the advertised capability set of a plugin. The four base
//! capabilities are a structural fact of the [`CostSource`] trait and are
//! always present; optional capabilities are included exactly when the
//! plugin's accessor returns an implementation. A `PluginInfo` carrying an
//! explicit capability list overrides inference entirely.

use crate::proto::{Capability, PluginInfo};
use crate::source::CostSource;
use std::collections::HashMap;

/// Base capabilities, always advertised, in wire order.
pub const BASE_CAPABILITIES: [Capability; 4] = [
    Capability::ProjectedCost,
    Capability::ActualCost,
    Capability::PricingSpec,
    Capability::EstimateCost,
];

/// Number of optional capabilities a plugin can additionally expose.
pub const OPTIONAL_CAPABILITY_COUNT: usize = 4;

/// Upper bound on an explicit `PluginInfo` capability list.
///
/// Guards the plugin-info RPC response against unbounded caller input.
pub const MAX_DECLARED_CAPABILITIES: usize = 16;

/// Infer the capability set of a plugin implementation.
///
/// Returns the base capabilities plus every optional capability whose
/// accessor returns `Some`, in a stable order. A `None` plugin yields an
/// empty set rather than failing, so partially-constructed callers get a
/// harmless default.
pub fn infer_capabilities(plugin: Option<&dyn CostSource>) -> Vec<Capability> {
    let Some(plugin) = plugin else {
        return Vec::new();
    };

    let mut caps = Vec::with_capacity(BASE_CAPABILITIES.len() + OPTIONAL_CAPABILITY_COUNT);
    caps.extend_from_slice(&BASE_CAPABILITIES);

    if plugin.recommendations().is_some() {
        caps.push(Capability::Recommendations);
    }
    if plugin.budgets().is_some() {
        caps.push(Capability::Budgets);
    }
    if plugin.dismissal().is_some() {
        caps.push(Capability::DismissRecommendation);
    }
    if plugin.dry_run().is_some() {
        caps.push(Capability::DryRun);
    }

    caps
}

/// Effective capability set for a plugin: the explicit `PluginInfo` list
/// when one is supplied, otherwise the inferred set.
///
/// The explicit list is assumed validated (see [`PluginInfo::validate`]);
/// unrecognized values are dropped rather than surfaced.
pub fn effective_capabilities(
    info: &PluginInfo,
    plugin: Option<&dyn CostSource>,
) -> Vec<Capability> {
    if info.capabilities.is_empty() {
        return infer_capabilities(plugin);
    }
    info.capabilities()
        .filter(|c| *c != Capability::Unspecified)
        .collect()
}

/// Legacy string key for a capability, used by deployments still consuming
/// string-keyed plugin metadata. `Unspecified` has no key.
pub fn legacy_key(capability: Capability) -> Option<&'static str> {
    match capability {
        Capability::Unspecified => None,
        Capability::ProjectedCost => Some("projectedCost"),
        Capability::ActualCost => Some("actualCost"),
        Capability::PricingSpec => Some("pricingSpec"),
        Capability::EstimateCost => Some("estimateCost"),
        Capability::Recommendations => Some("recommendations"),
        Capability::Budgets => Some("budgets"),
        Capability::DismissRecommendation => Some("dismissRecommendation"),
        Capability::DryRun => Some("dryRun"),
    }
}

/// Translate a capability set into the legacy string-keyed map.
///
/// Unspecified values are silently skipped; they must never leak into
/// consumer-visible metadata.
pub fn legacy_capability_map(capabilities: &[Capability]) -> HashMap<String, bool> {
    capabilities
        .iter()
        .filter_map(|c| legacy_key(*c))
        .map(|key| (key.to_string(), true))
        .collect()
}
