//! Plugin info construction and validation
//!
//! `PluginInfo` is built once at plugin startup and validated before the
//! server starts. Validation failures identify the offending field so a
//! misconfigured plugin fails loudly with an actionable message.

use crate::capability::MAX_DECLARED_CAPABILITIES;
use crate::proto::{Capability, PluginInfo};
use thiserror::Error;

/// Validation failure for a [`PluginInfo`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PluginInfoError {
    #[error("plugin name is required")]
    MissingName,

    #[error("plugin version is required")]
    MissingVersion,

    #[error("spec version is required")]
    MissingSpecVersion,

    #[error("spec version '{0}' is not a valid semantic version")]
    InvalidSpecVersion(String),

    #[error("declared capability list has {0} entries, maximum is {MAX_DECLARED_CAPABILITIES}")]
    TooManyCapabilities(usize),

    #[error("declared capability value {0} is not recognized")]
    UnknownCapability(i32),

    #[error("declared capability list contains the unspecified value")]
    UnspecifiedCapability,
}

impl PluginInfo {
    /// Create a plugin info with the required identity fields.
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        spec_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            spec_version: spec_version.into(),
            ..Default::default()
        }
    }

    /// Set the provider list. The slice is copied; later caller mutations
    /// never reach the server's view.
    pub fn with_providers(mut self, providers: &[&str]) -> Self {
        self.providers = providers.iter().map(|p| (*p).to_string()).collect();
        self
    }

    /// Add a free-form metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set an explicit capability list, overriding inference. The slice is
    /// copied.
    pub fn with_capabilities(mut self, capabilities: &[Capability]) -> Self {
        self.capabilities = capabilities.iter().map(|c| *c as i32).collect();
        self
    }

    /// Validate identity fields and any explicit capability list.
    ///
    /// Called by the server before it starts listening; construction-time
    /// errors are fatal to startup, never deferred to request time.
    pub fn validate(&self) -> Result<(), PluginInfoError> {
        if self.name.is_empty() {
            return Err(PluginInfoError::MissingName);
        }
        if self.version.is_empty() {
            return Err(PluginInfoError::MissingVersion);
        }
        if self.spec_version.is_empty() {
            return Err(PluginInfoError::MissingSpecVersion);
        }
        if semver::Version::parse(&self.spec_version).is_err() {
            return Err(PluginInfoError::InvalidSpecVersion(
                self.spec_version.clone(),
            ));
        }

        if self.capabilities.len() > MAX_DECLARED_CAPABILITIES {
            return Err(PluginInfoError::TooManyCapabilities(
                self.capabilities.len(),
            ));
        }
        for raw in &self.capabilities {
            match Capability::try_from(*raw) {
                Ok(Capability::Unspecified) => {
                    return Err(PluginInfoError::UnspecifiedCapability);
                }
                Ok(_) => {}
                Err(_) => return Err(PluginInfoError::UnknownCapability(*raw)),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_info() -> PluginInfo {
        PluginInfo::new("aws-costs", "0.4.1", "1.2.0")
            .with_providers(&["aws"])
            .with_metadata("team", "billing")
    }

    #[test]
    fn test_valid_info_passes() {
        assert_eq!(valid_info().validate(), Ok(()));
    }

    #[test]
    fn test_missing_name() {
        let mut info = valid_info();
        info.name = String::new();
        assert_eq!(info.validate(), Err(PluginInfoError::MissingName));
    }

    #[test]
    fn test_missing_version() {
        let mut info = valid_info();
        info.version = String::new();
        assert_eq!(info.validate(), Err(PluginInfoError::MissingVersion));
    }

    #[test]
    fn test_missing_spec_version() {
        let mut info = valid_info();
        info.spec_version = String::new();
        assert_eq!(info.validate(), Err(PluginInfoError::MissingSpecVersion));
    }

    #[test]
    fn test_invalid_spec_version() {
        let mut info = valid_info();
        info.spec_version = "not-a-version".to_string();
        assert_eq!(
            info.validate(),
            Err(PluginInfoError::InvalidSpecVersion("not-a-version".into()))
        );
    }

    #[test]
    fn test_explicit_capabilities_accepted() {
        let info = valid_info().with_capabilities(&[
            Capability::ProjectedCost,
            Capability::ActualCost,
            Capability::DryRun,
        ]);
        assert_eq!(info.validate(), Ok(()));
    }

    #[test]
    fn test_capability_list_bound() {
        let mut info = valid_info();
        info.capabilities = vec![Capability::ProjectedCost as i32; MAX_DECLARED_CAPABILITIES + 1];
        assert_eq!(
            info.validate(),
            Err(PluginInfoError::TooManyCapabilities(
                MAX_DECLARED_CAPABILITIES + 1
            ))
        );
    }

    #[test]
    fn test_unknown_capability_value_rejected() {
        let mut info = valid_info();
        info.capabilities = vec![999];
        assert_eq!(info.validate(), Err(PluginInfoError::UnknownCapability(999)));
    }

    #[test]
    fn test_unspecified_capability_rejected() {
        let mut info = valid_info();
        info.capabilities = vec![Capability::Unspecified as i32];
        assert_eq!(info.validate(), Err(PluginInfoError::UnspecifiedCapability));
    }

    #[test]
    fn test_with_providers_copies() {
        let providers = ["aws", "gcp"];
        let info = valid_info().with_providers(&providers);
        assert_eq!(info.providers, vec!["aws".to_string(), "gcp".to_string()]);
    }

    #[test]
    fn test_info_round_trips_through_json() {
        // Manifest loaders hand the SDK a deserialized PluginInfo; make
        // sure the serde view matches the builder view.
        let info = valid_info();
        let json = serde_json::to_string(&info).unwrap();
        let back: PluginInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
