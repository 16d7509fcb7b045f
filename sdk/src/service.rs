//! RPC service implementation
//!
//! Binds one plugin implementation to the generated `CostSource` service
//! trait. Every unary call runs under the instrumentation chain; requests
//! are validated before any plugin logic; optional capabilities the plugin
//! lacks answer `Unimplemented`.

use crate::interceptor::InterceptorChain;
use crate::proto::cost_source_server::CostSource as CostSourceRpc;
use hinta_core::proto::*;
use hinta_core::{legacy_capability_map, CostSource, PluginError};
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// Map a plugin error onto the RPC status surface.
pub(crate) fn status_from_plugin(err: PluginError) -> Status {
    match err {
        PluginError::Init(msg) => Status::failed_precondition(msg),
        PluginError::InvalidRequest(msg) => Status::invalid_argument(msg),
        PluginError::NotFound(msg) => Status::not_found(msg),
        PluginError::Unsupported(msg) => Status::unimplemented(msg),
        PluginError::NotReady => Status::unavailable("plugin not ready"),
        PluginError::Internal(msg) => Status::internal(msg),
    }
}

/// The bound service: plugin + identity + effective capabilities.
pub(crate) struct CostSourceService {
    plugin: Arc<dyn CostSource>,
    info: PluginInfo,
    capabilities: Vec<Capability>,
    chain: InterceptorChain,
}

impl CostSourceService {
    pub(crate) fn new(
        plugin: Arc<dyn CostSource>,
        info: PluginInfo,
        capabilities: Vec<Capability>,
    ) -> Self {
        let chain = InterceptorChain::new(info.name.clone());
        Self {
            plugin,
            info,
            capabilities,
            chain,
        }
    }

    pub(crate) fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }
}

#[tonic::async_trait]
impl CostSourceRpc for CostSourceService {
    async fn name(
        &self,
        request: Request<NameRequest>,
    ) -> Result<Response<NameResponse>, Status> {
        let (metadata, _, _) = request.into_parts();
        self.chain
            .unary("Name", &metadata, |_| async move {
                Ok(Response::new(NameResponse {
                    name: self.info.name.clone(),
                }))
            })
            .await
    }

    async fn get_plugin_info(
        &self,
        request: Request<GetPluginInfoRequest>,
    ) -> Result<Response<GetPluginInfoResponse>, Status> {
        let (metadata, _, _) = request.into_parts();
        self.chain
            .unary("GetPluginInfo", &metadata, |_| async move {
                Ok(Response::new(GetPluginInfoResponse {
                    info: Some(self.info.clone()),
                    capabilities: self.capabilities.iter().map(|c| *c as i32).collect(),
                    legacy_capabilities: legacy_capability_map(&self.capabilities),
                }))
            })
            .await
    }

    async fn get_projected_cost(
        &self,
        request: Request<ProjectedCostRequest>,
    ) -> Result<Response<ProjectedCostResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("GetProjectedCost", &metadata, |_| async move {
                req.validate().map_err(status_from_plugin)?;
                let response = self
                    .plugin
                    .get_projected_cost(req)
                    .await
                    .map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn get_actual_cost(
        &self,
        request: Request<ActualCostRequest>,
    ) -> Result<Response<ActualCostResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("GetActualCost", &metadata, |_| async move {
                req.validate().map_err(status_from_plugin)?;
                let response = self
                    .plugin
                    .get_actual_cost(req)
                    .await
                    .map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn get_pricing_spec(
        &self,
        request: Request<PricingSpecRequest>,
    ) -> Result<Response<PricingSpecResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("GetPricingSpec", &metadata, |_| async move {
                let response = self
                    .plugin
                    .get_pricing_spec(req)
                    .await
                    .map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn estimate_cost(
        &self,
        request: Request<EstimateCostRequest>,
    ) -> Result<Response<EstimateCostResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("EstimateCost", &metadata, |_| async move {
                req.validate().map_err(status_from_plugin)?;
                let response = self
                    .plugin
                    .estimate_cost(req)
                    .await
                    .map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn supports(
        &self,
        request: Request<SupportsRequest>,
    ) -> Result<Response<SupportsResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("Supports", &metadata, |_| async move {
                req.validate().map_err(status_from_plugin)?;
                let capability = req.capability();
                Ok(Response::new(SupportsResponse {
                    supported: self.capabilities.contains(&capability),
                }))
            })
            .await
    }

    async fn get_recommendations(
        &self,
        request: Request<RecommendationsRequest>,
    ) -> Result<Response<RecommendationsResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("GetRecommendations", &metadata, |_| async move {
                let Some(source) = self.plugin.recommendations() else {
                    return Err(Status::unimplemented(
                        "plugin does not implement the recommendations capability",
                    ));
                };
                let response = source
                    .get_recommendations(req)
                    .await
                    .map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn dismiss_recommendation(
        &self,
        request: Request<DismissRecommendationRequest>,
    ) -> Result<Response<DismissRecommendationResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("DismissRecommendation", &metadata, |_| async move {
                let Some(source) = self.plugin.dismissal() else {
                    return Err(Status::unimplemented(
                        "plugin does not implement the dismiss-recommendation capability",
                    ));
                };
                req.validate().map_err(status_from_plugin)?;
                let response = source
                    .dismiss_recommendation(req)
                    .await
                    .map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn get_budgets(
        &self,
        request: Request<BudgetsRequest>,
    ) -> Result<Response<BudgetsResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("GetBudgets", &metadata, |_| async move {
                let Some(source) = self.plugin.budgets() else {
                    return Err(Status::unimplemented(
                        "plugin does not implement the budgets capability",
                    ));
                };
                let response = source.get_budgets(req).await.map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }

    async fn dry_run(
        &self,
        request: Request<DryRunRequest>,
    ) -> Result<Response<DryRunResponse>, Status> {
        let (metadata, _, req) = request.into_parts();
        self.chain
            .unary("DryRun", &metadata, |_| async move {
                let Some(source) = self.plugin.dry_run() else {
                    return Err(Status::unimplemented(
                        "plugin does not implement the dry-run capability",
                    ));
                };
                let response = source.dry_run(req).await.map_err(status_from_plugin)?;
                Ok(Response::new(response))
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use hinta_core::infer_capabilities;

    struct BasePlugin;

    #[async_trait]
    impl CostSource for BasePlugin {
        async fn get_projected_cost(
            &self,
            _req: ProjectedCostRequest,
        ) -> Result<ProjectedCostResponse, PluginError> {
            Ok(ProjectedCostResponse {
                records: vec![CostRecord {
                    resource_id: "i-123".to_string(),
                    amount: 1.25,
                    currency: "USD".to_string(),
                    ..Default::default()
                }],
                currency: "USD".to_string(),
            })
        }
        async fn get_actual_cost(
            &self,
            _req: ActualCostRequest,
        ) -> Result<ActualCostResponse, PluginError> {
            Ok(ActualCostResponse::default())
        }
        async fn get_pricing_spec(
            &self,
            _req: PricingSpecRequest,
        ) -> Result<PricingSpecResponse, PluginError> {
            Ok(PricingSpecResponse::default())
        }
        async fn estimate_cost(
            &self,
            _req: EstimateCostRequest,
        ) -> Result<EstimateCostResponse, PluginError> {
            Err(PluginError::Internal("estimator offline".to_string()))
        }
    }

    fn make_service() -> CostSourceService {
        let plugin: Arc<dyn CostSource> = Arc::new(BasePlugin);
        let info = PluginInfo::new("test-plugin", "0.1.0", "1.0.0");
        let capabilities = infer_capabilities(Some(plugin.as_ref()));
        CostSourceService::new(plugin, info, capabilities)
    }

    fn projected_request() -> Request<ProjectedCostRequest> {
        Request::new(ProjectedCostRequest {
            resource: Some(ResourceDescriptor {
                resource_type: "vm".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_name_returns_info_name() {
        let service = make_service();
        let response = service.name(Request::new(NameRequest {})).await.unwrap();
        assert_eq!(response.into_inner().name, "test-plugin");
    }

    #[tokio::test]
    async fn test_plugin_info_carries_capabilities_and_legacy_map() {
        let service = make_service();
        let response = service
            .get_plugin_info(Request::new(GetPluginInfoRequest {}))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(response.capabilities.len(), 4);
        assert_eq!(response.legacy_capabilities.len(), 4);
        assert_eq!(response.legacy_capabilities.get("projectedCost"), Some(&true));
        assert!(!response
            .legacy_capabilities
            .contains_key("CAPABILITY_UNSPECIFIED"));
        assert_eq!(response.info.unwrap().name, "test-plugin");
    }

    #[tokio::test]
    async fn test_validation_runs_before_plugin() {
        let service = make_service();
        let status = service
            .get_projected_cost(Request::new(ProjectedCostRequest::default()))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_projected_cost_delegates_to_plugin() {
        let service = make_service();
        let response = service
            .get_projected_cost(projected_request())
            .await
            .unwrap()
            .into_inner();
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].resource_id, "i-123");
    }

    #[tokio::test]
    async fn test_plugin_error_maps_to_status() {
        let service = make_service();
        let status = service
            .estimate_cost(Request::new(EstimateCostRequest {
                resource: Some(ResourceDescriptor {
                    resource_type: "vm".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Internal);
        assert_eq!(status.message(), "estimator offline");
    }

    #[tokio::test]
    async fn test_missing_capability_is_unimplemented() {
        let service = make_service();
        let status = service
            .get_budgets(Request::new(BudgetsRequest {}))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::Unimplemented);
    }

    #[tokio::test]
    async fn test_supports_base_and_optional() {
        let service = make_service();

        let yes = service
            .supports(Request::new(SupportsRequest {
                capability: Capability::ActualCost as i32,
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(yes.supported);

        let no = service
            .supports(Request::new(SupportsRequest {
                capability: Capability::DryRun as i32,
            }))
            .await
            .unwrap()
            .into_inner();
        assert!(!no.supported);
    }

    #[tokio::test]
    async fn test_supports_rejects_unspecified() {
        let service = make_service();
        let status = service
            .supports(Request::new(SupportsRequest {
                capability: Capability::Unspecified as i32,
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
    }

    #[test]
    fn test_status_mapping_table() {
        assert_eq!(
            status_from_plugin(PluginError::NotReady).code(),
            tonic::Code::Unavailable
        );
        assert_eq!(
            status_from_plugin(PluginError::NotFound("x".into())).code(),
            tonic::Code::NotFound
        );
        assert_eq!(
            status_from_plugin(PluginError::Unsupported("x".into())).code(),
            tonic::Code::Unimplemented
        );
        assert_eq!(
            status_from_plugin(PluginError::Init("x".into())).code(),
            tonic::Code::FailedPrecondition
        );
    }
}
