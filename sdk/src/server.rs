//! Protocol server
//!
//! Binds one plugin implementation to a single TCP listener and serves it
//! under three wire protocols at once. Protocol selection is per-request:
//! the multiplexer inspects each request's `content-type` and dispatches
//! to the native gRPC service, the gRPC-Web translation, or the JSON
//! codec. Health and metrics endpoints share the same listener.
//!
//! Shutdown is graceful: cancelling the token stops the listener from
//! accepting, lets in-flight calls finish, then returns.

use crate::error::ServerError;
use crate::health::{self, HealthChecker};
use crate::interceptor::code_label;
use crate::json;
use crate::metrics::Metrics;
use crate::proto::cost_source_server::{CostSource as _, CostSourceServer, SERVICE_NAME};
use crate::service::CostSourceService;
use crate::web::WebConfig;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use hinta_core::{effective_capabilities, CostSource, PluginInfo};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tonic::metadata::MetadataMap;
use tonic::Status;
use tonic_web::GrpcWebLayer;
use tower::util::BoxCloneSyncService;
use tower::{ServiceBuilder, ServiceExt};
use tracing::info;

/// Largest JSON request body accepted: 4 MB, matching the gRPC default.
const MAX_JSON_BODY: usize = 4 * 1024 * 1024;

type RpcService =
    BoxCloneSyncService<axum::http::Request<Body>, axum::http::Response<Body>, Infallible>;

/// Server configuration.
#[derive(Clone)]
pub struct ServeConfig {
    /// Listen address
    pub addr: SocketAddr,
    /// Browser protocol and CORS policy
    pub web: WebConfig,
    /// Optional health checker backing `/healthz`
    pub health_checker: Option<Arc<dyn HealthChecker>>,
    /// Mount `GET /metrics` on the listener
    pub expose_metrics: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 50051)),
            web: WebConfig::default(),
            health_checker: None,
            expose_metrics: true,
        }
    }
}

/// One plugin implementation bound to one listener.
pub struct PluginServer {
    plugin: Arc<dyn CostSource>,
    info: PluginInfo,
}

impl PluginServer {
    /// Bind a plugin implementation to its identity.
    pub fn new(plugin: impl CostSource, info: PluginInfo) -> Self {
        Self {
            plugin: Arc::new(plugin),
            info,
        }
    }

    /// As [`new`](Self::new), for plugins already behind an `Arc`.
    pub fn from_arc(plugin: Arc<dyn CostSource>, info: PluginInfo) -> Self {
        Self { plugin, info }
    }

    /// Serve until the token is cancelled or the transport fails.
    pub async fn serve(
        self,
        config: ServeConfig,
        shutdown: CancellationToken,
    ) -> Result<(), ServerError> {
        // Fail configuration before touching the network.
        self.info.validate()?;
        config.web.validate()?;

        let listener = tokio::net::TcpListener::bind(config.addr).await?;
        self.serve_with_listener(listener, config, shutdown).await
    }

    /// Serve on a pre-bound listener. Used by tests and callers that need
    /// the bound address before startup.
    pub async fn serve_with_listener(
        self,
        listener: tokio::net::TcpListener,
        config: ServeConfig,
        shutdown: CancellationToken,
    ) -> Result<(), ServerError> {
        self.info.validate()?;
        config.web.validate()?;

        let capabilities = effective_capabilities(&self.info, Some(self.plugin.as_ref()));
        Metrics::init()?;

        let service = Arc::new(CostSourceService::new(
            Arc::clone(&self.plugin),
            self.info.clone(),
            capabilities,
        ));

        let tonic_service = CostSourceServer::from_arc(Arc::clone(&service));

        let grpc: RpcService = BoxCloneSyncService::new(
            ServiceBuilder::new()
                .map_request(|req: axum::http::Request<Body>| req.map(tonic::body::boxed))
                .map_response(|res: axum::http::Response<tonic::body::BoxBody>| {
                    res.map(Body::new)
                })
                .service(tonic_service.clone()),
        );

        let grpc_web: Option<RpcService> = config.web.enabled.then(|| {
            BoxCloneSyncService::new(
                ServiceBuilder::new()
                    .map_request(|req: axum::http::Request<Body>| req.map(tonic::body::boxed))
                    .map_response(|res: axum::http::Response<tonic::body::BoxBody>| {
                        res.map(Body::new)
                    })
                    .layer(GrpcWebLayer::new())
                    .service(tonic_service),
            )
        });

        let state = AppState {
            service: Arc::clone(&service),
            grpc,
            grpc_web,
            health_checker: config.health_checker.clone(),
        };

        let rpc_path = format!("/{SERVICE_NAME}/*method");
        let mut router = Router::new().route(&rpc_path, post(rpc_mux));
        if config.web.expose_health {
            router = router.route("/healthz", get(healthz_handler));
        }
        if config.expose_metrics {
            router = router.route("/metrics", get(metrics_handler));
        }
        let mut router = router.with_state(state);
        if config.web.enabled {
            router = router.layer(config.web.cors_layer());
        }

        let addr = listener.local_addr()?;
        info!(
            %addr,
            plugin = %self.info.name,
            capabilities = service.capabilities().len(),
            web = config.web.enabled,
            "cost source server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        info!(plugin = %self.info.name, "cost source server stopped");
        Ok(())
    }
}

#[derive(Clone)]
struct AppState {
    service: Arc<CostSourceService>,
    grpc: RpcService,
    grpc_web: Option<RpcService>,
    health_checker: Option<Arc<dyn HealthChecker>>,
}

/// Per-request protocol detection on the shared RPC path.
async fn rpc_mux(State(state): State<AppState>, req: axum::extract::Request) -> Response {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.starts_with("application/grpc-web") {
        match state.grpc_web.clone() {
            Some(service) => call_rpc(service, req).await,
            None => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "browser protocol is not enabled",
            )
                .into_response(),
        }
    } else if content_type.starts_with("application/grpc") {
        call_rpc(state.grpc.clone(), req).await
    } else if content_type.starts_with("application/json") || content_type.is_empty() {
        json_dispatch(state, req).await
    } else {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("unsupported content-type '{content_type}'"),
        )
            .into_response()
    }
}

async fn call_rpc(service: RpcService, req: axum::extract::Request) -> Response {
    match service.oneshot(req).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    }
}

/// JSON codec: decode with serde, run the same instrumented service
/// methods the binary protocols use, encode the result or a
/// `{code, message}` error body.
async fn json_dispatch(state: AppState, req: axum::extract::Request) -> Response {
    let method = req
        .uri()
        .path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    let (parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, MAX_JSON_BODY).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return json_error(Status::invalid_argument(format!(
                "unreadable request body: {e}"
            )))
        }
    };
    // Empty-body requests mean the empty message.
    let bytes = if bytes.is_empty() {
        Bytes::from_static(b"{}")
    } else {
        bytes
    };
    let metadata = MetadataMap::from_headers(parts.headers);
    let svc = state.service.as_ref();

    match method.as_str() {
        "Name" => handle_json(bytes, metadata, |r| svc.name(r)).await,
        "GetPluginInfo" => handle_json(bytes, metadata, |r| svc.get_plugin_info(r)).await,
        "GetProjectedCost" => handle_json(bytes, metadata, |r| svc.get_projected_cost(r)).await,
        "GetActualCost" => handle_json(bytes, metadata, |r| svc.get_actual_cost(r)).await,
        "GetPricingSpec" => handle_json(bytes, metadata, |r| svc.get_pricing_spec(r)).await,
        "EstimateCost" => handle_json(bytes, metadata, |r| svc.estimate_cost(r)).await,
        "Supports" => handle_json(bytes, metadata, |r| svc.supports(r)).await,
        "GetRecommendations" => {
            handle_json(bytes, metadata, |r| svc.get_recommendations(r)).await
        }
        "DismissRecommendation" => {
            handle_json(bytes, metadata, |r| svc.dismiss_recommendation(r)).await
        }
        "GetBudgets" => handle_json(bytes, metadata, |r| svc.get_budgets(r)).await,
        "DryRun" => handle_json(bytes, metadata, |r| svc.dry_run(r)).await,
        _ => json_error(Status::unimplemented(format!("unknown method '{method}'"))),
    }
}

async fn handle_json<Req, Resp, F, Fut>(bytes: Bytes, metadata: MetadataMap, call: F) -> Response
where
    Req: DeserializeOwned,
    Resp: Serialize,
    F: FnOnce(tonic::Request<Req>) -> Fut,
    Fut: Future<Output = Result<tonic::Response<Resp>, Status>>,
{
    let message: Req = match serde_json::from_slice(&bytes) {
        Ok(message) => message,
        Err(e) => {
            return json_error(Status::invalid_argument(format!(
                "malformed JSON request: {e}"
            )))
        }
    };

    let mut request = tonic::Request::new(message);
    *request.metadata_mut() = metadata;

    match call(request).await {
        Ok(response) => (StatusCode::OK, Json(response.into_inner())).into_response(),
        Err(status) => json_error(status),
    }
}

fn json_error(status: Status) -> Response {
    let http_code = StatusCode::from_u16(json::http_status(status.code()))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = json::ErrorBody {
        code: json::code_name(status.code()).to_string(),
        message: status.message().to_string(),
    };
    tracing::debug!(
        status = code_label(status.code()),
        http = http_code.as_u16(),
        "json protocol error response"
    );
    (http_code, Json(body)).into_response()
}

/// Handler for /healthz (GET and HEAD)
async fn healthz_handler(State(state): State<AppState>) -> Response {
    health::respond(state.health_checker.clone()).await
}

/// Handler for /metrics
async fn metrics_handler() -> impl IntoResponse {
    let body = crate::metrics::gather();
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
}
