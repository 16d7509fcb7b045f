//! Cost source plugin traits
//!
//! [`CostSource`] is the interface every plugin implements. The four
//! required methods map to the four base capabilities. Optional
//! capabilities are separate traits, exposed through accessor methods
//! with `None` defaults: a plugin opts in by returning `Some(self)` (or
//! a delegate), and the SDK derives the advertised capability set from
//! exactly those accessors. No reflection, no registration step.
//!
//! # Example
//!
//! ```
//! use hinta_core::proto::*;
//! use hinta_core::{CostSource, DryRunSource, PluginError};
//! use async_trait::async_trait;
//!
//! struct StaticSource;
//!
//! #[async_trait]
//! impl CostSource for StaticSource {
//!     async fn get_projected_cost(
//!         &self,
//!         _req: ProjectedCostRequest,
//!     ) -> Result<ProjectedCostResponse, PluginError> {
//!         Ok(ProjectedCostResponse::default())
//!     }
//!
//!     async fn get_actual_cost(
//!         &self,
//!         _req: ActualCostRequest,
//!     ) -> Result<ActualCostResponse, PluginError> {
//!         Ok(ActualCostResponse::default())
//!     }
//!
//!     async fn get_pricing_spec(
//!         &self,
//!         _req: PricingSpecRequest,
//!     ) -> Result<PricingSpecResponse, PluginError> {
//!         Ok(PricingSpecResponse::default())
//!     }
//!
//!     async fn estimate_cost(
//!         &self,
//!         _req: EstimateCostRequest,
//!     ) -> Result<EstimateCostResponse, PluginError> {
//!         Ok(EstimateCostResponse::default())
//!     }
//!
//!     // Opt in to the dry-run capability.
//!     fn dry_run(&self) -> Option<&dyn DryRunSource> {
//!         None // or Some(self) once DryRunSource is implemented
//!     }
//! }
//! ```

use crate::error::PluginError;
use crate::proto::{
    ActualCostRequest, ActualCostResponse, BudgetsRequest, BudgetsResponse,
    DismissRecommendationRequest, DismissRecommendationResponse, DryRunRequest, DryRunResponse,
    EstimateCostRequest, EstimateCostResponse, PricingSpecRequest, PricingSpecResponse,
    ProjectedCostRequest, ProjectedCostResponse, RecommendationsRequest, RecommendationsResponse,
};
use async_trait::async_trait;

/// Core cost source interface
///
/// The four required methods correspond to the base capabilities and are
/// always advertised. Implementations must be `Send + Sync`: the server
/// invokes them concurrently, one task per request.
#[async_trait]
pub trait CostSource: Send + Sync + 'static {
    /// Forward-looking cost for a resource descriptor
    async fn get_projected_cost(
        &self,
        request: ProjectedCostRequest,
    ) -> Result<ProjectedCostResponse, PluginError>;

    /// Historical cost records, paginated
    ///
    /// Implementations interpret `page_token` as their own opaque cursor
    /// and must return an empty `next_page_token` on the final page.
    async fn get_actual_cost(
        &self,
        request: ActualCostRequest,
    ) -> Result<ActualCostResponse, PluginError>;

    /// Provider pricing catalog entries
    async fn get_pricing_spec(
        &self,
        request: PricingSpecRequest,
    ) -> Result<PricingSpecResponse, PluginError>;

    /// Cost estimate for a hypothetical resource
    async fn estimate_cost(
        &self,
        request: EstimateCostRequest,
    ) -> Result<EstimateCostResponse, PluginError>;

    /// Recommendations capability, if implemented
    fn recommendations(&self) -> Option<&dyn RecommendationSource> {
        None
    }

    /// Recommendation-dismissal capability, if implemented
    ///
    /// Separate from [`CostSource::recommendations`] so a read-only
    /// recommendations plugin is representable.
    fn dismissal(&self) -> Option<&dyn RecommendationDismissal> {
        None
    }

    /// Budgets capability, if implemented
    fn budgets(&self) -> Option<&dyn BudgetSource> {
        None
    }

    /// Dry-run capability, if implemented
    fn dry_run(&self) -> Option<&dyn DryRunSource> {
        None
    }
}

/// Optional capability: cost-saving recommendations
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Cost-saving recommendations, optionally scoped to a resource
    async fn get_recommendations(
        &self,
        request: RecommendationsRequest,
    ) -> Result<RecommendationsResponse, PluginError>;
}

/// Optional capability: dismiss a previously returned recommendation
#[async_trait]
pub trait RecommendationDismissal: Send + Sync {
    /// Dismiss one recommendation by id
    async fn dismiss_recommendation(
        &self,
        request: DismissRecommendationRequest,
    ) -> Result<DismissRecommendationResponse, PluginError>;
}

/// Optional capability: budget listing
#[async_trait]
pub trait BudgetSource: Send + Sync {
    /// All budgets known to the plugin
    async fn get_budgets(&self, request: BudgetsRequest) -> Result<BudgetsResponse, PluginError>;
}

/// Optional capability: report which output fields would be populated
#[async_trait]
pub trait DryRunSource: Send + Sync {
    /// Report the output fields a real run would populate
    async fn dry_run(&self, request: DryRunRequest) -> Result<DryRunResponse, PluginError>;
}
