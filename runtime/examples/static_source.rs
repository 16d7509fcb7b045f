//! Minimal cost source plugin served with runtime defaults.
//!
//! Run with `cargo run --example static_source`, then query it:
//!
//! ```text
//! curl -s localhost:50051/hinta.v1.CostSource/GetPricingSpec \
//!     -H 'content-type: application/json' -d '{"provider":""}'
//! ```

use hinta_core::proto::*;
use hinta_runtime::prelude::*;

/// Serves a fixed pricing table. Real plugins would query a billing API.
struct StaticSource;

#[async_trait]
impl CostSource for StaticSource {
    async fn get_projected_cost(
        &self,
        req: ProjectedCostRequest,
    ) -> Result<ProjectedCostResponse, PluginError> {
        let resource = req.resource.unwrap_or_default();
        Ok(ProjectedCostResponse {
            records: vec![CostRecord {
                resource_id: resource.resource_type,
                amount: 0.34 * 24.0 * 30.0,
                currency: "USD".to_string(),
                billing_mode: "on-demand".to_string(),
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
        Ok(PricingSpecResponse {
            specs: vec![PricingSpec {
                sku: "std-4x16".to_string(),
                description: "4 vCPU / 16 GiB".to_string(),
                list_price: 0.34,
                currency: "USD".to_string(),
                unit: "hour".to_string(),
            }],
        })
    }

    async fn estimate_cost(
        &self,
        _req: EstimateCostRequest,
    ) -> Result<EstimateCostResponse, PluginError> {
        Err(PluginError::Unsupported("estimates need a window".to_string()))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let info = PluginInfo::new("static-source", "0.1.0", "1.0.0")
        .with_providers(&["demo"])
        .with_metadata("tier", "example");

    hinta_runtime::run(StaticSource, info).await
}
