//! Request validation
//!
//! Shared by the typed client (fail fast, before any network call) and the
//! server (reject before plugin logic runs). Both sides therefore agree on
//! what a well-formed request is.

use crate::error::PluginError;
use crate::proto::{
    ActualCostRequest, Capability, DismissRecommendationRequest, EstimateCostRequest,
    ProjectedCostRequest, ResourceDescriptor, SupportsRequest, TimeWindow,
};

fn require_resource(resource: Option<&ResourceDescriptor>) -> Result<(), PluginError> {
    let Some(resource) = resource else {
        return Err(PluginError::InvalidRequest(
            "resource descriptor is required".to_string(),
        ));
    };
    if resource.resource_type.is_empty() {
        return Err(PluginError::InvalidRequest(
            "resource type is required".to_string(),
        ));
    }
    Ok(())
}

fn require_window(window: Option<&TimeWindow>) -> Result<(), PluginError> {
    let Some(window) = window else {
        return Err(PluginError::InvalidRequest(
            "time window is required".to_string(),
        ));
    };
    if window.end_unix_ns <= window.start_unix_ns {
        return Err(PluginError::InvalidRequest(format!(
            "time window end ({}) must be after start ({})",
            window.end_unix_ns, window.start_unix_ns
        )));
    }
    Ok(())
}

impl ProjectedCostRequest {
    /// A projected-cost request needs a typed resource descriptor.
    pub fn validate(&self) -> Result<(), PluginError> {
        require_resource(self.resource.as_ref())
    }
}

impl ActualCostRequest {
    /// An actual-cost request needs a well-ordered time window; the
    /// resource filter is optional.
    pub fn validate(&self) -> Result<(), PluginError> {
        require_window(self.window.as_ref())?;
        // Resource filter is optional, but when present it must identify
        // a resource type.
        if let Some(resource) = &self.resource {
            if resource.resource_type.is_empty() {
                return Err(PluginError::InvalidRequest(
                    "resource filter must carry a resource type".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl EstimateCostRequest {
    /// An estimate request needs a typed resource descriptor.
    pub fn validate(&self) -> Result<(), PluginError> {
        require_resource(self.resource.as_ref())
    }
}

impl SupportsRequest {
    /// The queried capability must be a recognized, non-zero value.
    pub fn validate(&self) -> Result<(), PluginError> {
        match Capability::try_from(self.capability) {
            Ok(Capability::Unspecified) => Err(PluginError::InvalidRequest(
                "capability must be specified".to_string(),
            )),
            Ok(_) => Ok(()),
            Err(_) => Err(PluginError::InvalidRequest(format!(
                "unknown capability value {}",
                self.capability
            ))),
        }
    }
}

impl DismissRecommendationRequest {
    /// Dismissal needs the id of the recommendation to dismiss.
    pub fn validate(&self) -> Result<(), PluginError> {
        if self.recommendation_id.is_empty() {
            return Err(PluginError::InvalidRequest(
                "recommendation id is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resource(resource_type: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            resource_type: resource_type.to_string(),
            provider: "aws".to_string(),
            ..Default::default()
        }
    }

    fn window(start: i64, end: i64) -> TimeWindow {
        TimeWindow {
            start_unix_ns: start,
            end_unix_ns: end,
        }
    }

    #[test]
    fn test_projected_cost_requires_resource() {
        let req = ProjectedCostRequest::default();
        assert!(matches!(
            req.validate(),
            Err(PluginError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_projected_cost_requires_resource_type() {
        let req = ProjectedCostRequest {
            resource: Some(resource("")),
            ..Default::default()
        };
        let err = req.validate().unwrap_err();
        assert!(err.to_string().contains("resource type"));
    }

    #[test]
    fn test_projected_cost_valid() {
        let req = ProjectedCostRequest {
            resource: Some(resource("ec2-instance")),
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_actual_cost_requires_window() {
        let req = ActualCostRequest::default();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_actual_cost_rejects_inverted_window() {
        let req = ActualCostRequest {
            window: Some(window(100, 100)),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_actual_cost_optional_filter_needs_type() {
        let req = ActualCostRequest {
            window: Some(window(0, 100)),
            resource: Some(resource("")),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_actual_cost_valid_without_filter() {
        let req = ActualCostRequest {
            window: Some(window(0, 100)),
            page_size: 50,
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_supports_rejects_unspecified() {
        let req = SupportsRequest {
            capability: Capability::Unspecified as i32,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_supports_rejects_unknown_value() {
        let req = SupportsRequest { capability: 42 };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_dismiss_requires_id() {
        let req = DismissRecommendationRequest::default();
        assert!(req.validate().is_err());
    }
}
