//! Typed multi-protocol RPC client
//!
//! One method per plugin RPC, served over the caller's choice of wire
//! protocol: native gRPC, the browser-compatible gRPC-Web variant, or the
//! HTTP/JSON variant. Construction is infallible by design — a malformed
//! base URL or unreachable server surfaces on the first call, as a
//! [`ClientError`], never at construction.
//!
//! # Timeout precedence
//!
//! Highest first: a per-call deadline set with
//! [`with_deadline`](CostClient::with_deadline); a custom transport's
//! declared timeout; [`ClientConfig::timeout`]; [`DEFAULT_TIMEOUT`].
//!
//! # Example
//!
//! ```ignore
//! let client = CostClient::grpc("http://localhost:50051");
//! let info = client.get_plugin_info().await?;
//! println!("plugin: {}", info.info.unwrap().name);
//!
//! let mut costs = client.actual_costs(ActualCostRequest {
//!     window: Some(TimeWindow { start_unix_ns: 0, end_unix_ns: now }),
//!     ..Default::default()
//! });
//! while costs.advance().await {
//!     println!("{:?}", costs.current());
//! }
//! ```

use crate::error::ClientError;
use crate::grpcweb;
use crate::iterator::{ActualCostIterator, PageFetcher};
use crate::json;
use crate::proto::cost_source_client::CostSourceClient as GrpcClient;
use crate::proto::cost_source_server::SERVICE_NAME;
use hinta_core::proto::*;
use parking_lot::Mutex;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tonic::transport::{Channel, Endpoint};

/// Timeout applied when nothing else declares one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Wire protocol selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Protocol {
    /// Native binary gRPC over HTTP/2
    #[default]
    Grpc,
    /// Browser-compatible gRPC-Web over HTTP/1.1
    GrpcWeb,
    /// HTTP/JSON variant
    Json,
}

impl Protocol {
    /// Parse a selector string. Unrecognized values resolve to the
    /// default protocol rather than failing, so client construction stays
    /// infallible; the fallback is logged for observability.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "grpc" => Protocol::Grpc,
            "grpc-web" | "grpcweb" => Protocol::GrpcWeb,
            "json" | "http" | "http-json" => Protocol::Json,
            other => {
                tracing::debug!(selector = other, "unrecognized protocol, using default");
                Protocol::default()
            }
        }
    }
}

impl FromStr for Protocol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Protocol::parse(s))
    }
}

/// Caller-supplied HTTP transport for the HTTP-based protocols.
///
/// `timeout` is declared alongside the client because a built
/// `reqwest::Client` does not expose its configured timeout; declaring it
/// here lets the precedence rules see it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// The HTTP client used for JSON and gRPC-Web calls
    pub client: reqwest::Client,
    /// The timeout this transport was built with, if any
    pub timeout: Option<Duration>,
}

/// Client configuration.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Server base URL, e.g. `http://localhost:50051`
    pub base_url: String,
    /// Wire protocol to speak
    pub protocol: Protocol,
    /// Custom HTTP transport for the HTTP-based protocols
    pub transport: Option<HttpTransport>,
    /// Per-call timeout when neither a deadline nor a transport timeout
    /// applies
    pub timeout: Option<Duration>,
}

/// Typed cost source client.
///
/// Cheap to clone; clones share the underlying connections.
#[derive(Clone)]
pub struct CostClient {
    config: ClientConfig,
    /// Per-call deadline, the context-deadline analogue. Wins over every
    /// configured timeout.
    deadline: Option<Instant>,
    http: reqwest::Client,
    transport_timeout: Option<Duration>,
    /// Lazily created channel for the native protocol.
    channel: Arc<Mutex<Option<Channel>>>,
}

impl CostClient {
    /// Native gRPC client.
    pub fn grpc(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            protocol: Protocol::Grpc,
            ..Default::default()
        })
    }

    /// Browser-variant (gRPC-Web) client.
    pub fn grpc_web(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            protocol: Protocol::GrpcWeb,
            ..Default::default()
        })
    }

    /// HTTP/JSON-variant client.
    pub fn json(base_url: impl Into<String>) -> Self {
        Self::with_config(ClientConfig {
            base_url: base_url.into(),
            protocol: Protocol::Json,
            ..Default::default()
        })
    }

    /// Client from a full configuration. Never fails; configuration
    /// problems surface on the first call.
    pub fn with_config(config: ClientConfig) -> Self {
        let http = config
            .transport
            .as_ref()
            .map(|t| t.client.clone())
            .unwrap_or_default();
        let transport_timeout = config.transport.as_ref().and_then(|t| t.timeout);
        Self {
            config,
            deadline: None,
            http,
            transport_timeout,
            channel: Arc::new(Mutex::new(None)),
        }
    }

    /// A clone of this client whose calls must complete by `deadline`.
    /// The deadline outranks transport and config timeouts.
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let mut client = self.clone();
        client.deadline = Some(deadline);
        client
    }

    /// The protocol this client speaks.
    pub fn protocol(&self) -> Protocol {
        self.config.protocol
    }

    /// Resolve the effective timeout for one call.
    ///
    /// Precedence, highest first: per-call deadline, custom transport
    /// timeout, config timeout, [`DEFAULT_TIMEOUT`]. An already-expired
    /// deadline fails immediately without a network round trip.
    fn effective_timeout(&self) -> Result<Duration, ClientError> {
        if let Some(deadline) = self.deadline {
            let now = Instant::now();
            if deadline <= now {
                return Err(ClientError::DeadlineExceeded(Duration::ZERO));
            }
            return Ok(deadline - now);
        }
        if let Some(timeout) = self.transport_timeout {
            return Ok(timeout);
        }
        if let Some(timeout) = self.config.timeout {
            return Ok(timeout);
        }
        Ok(DEFAULT_TIMEOUT)
    }

    /// Get or create the native-protocol channel.
    ///
    /// The channel connects lazily, so an unreachable server is a call
    /// failure, not a construction failure.
    fn channel(&self) -> Result<Channel, ClientError> {
        {
            let guard = self.channel.lock();
            if let Some(channel) = guard.as_ref() {
                return Ok(channel.clone());
            }
        }

        let endpoint = Endpoint::from_shared(self.config.base_url.clone())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", self.config.base_url)))?;
        let channel = endpoint.connect_lazy();

        *self.channel.lock() = Some(channel.clone());
        Ok(channel)
    }

    async fn grpc_unary<T>(
        &self,
        timeout: Duration,
        call: impl Future<Output = Result<tonic::Response<T>, tonic::Status>>,
    ) -> Result<T, ClientError> {
        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(response)) => Ok(response.into_inner()),
            Ok(Err(status)) => Err(ClientError::from_status(status)),
            Err(_) => Err(ClientError::DeadlineExceeded(timeout)),
        }
    }

    fn rpc_url(&self, method: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_url.trim_end_matches('/'),
            SERVICE_NAME,
            method
        )
    }

    async fn json_call<Req, Resp>(
        &self,
        method: &str,
        request: &Req,
        timeout: Duration,
    ) -> Result<Resp, ClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.rpc_url(method))
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout))?;

        if status.is_success() {
            serde_json::from_slice(&body)
                .map_err(|e| ClientError::Protocol(format!("malformed JSON response: {e}")))
        } else {
            Err(json::error_from_body(status.as_u16(), &body))
        }
    }

    async fn web_call<Req, Resp>(
        &self,
        method: &str,
        request: &Req,
        timeout: Duration,
    ) -> Result<Resp, ClientError>
    where
        Req: prost::Message,
        Resp: prost::Message + Default,
    {
        let response = self
            .http
            .post(self.rpc_url(method))
            .timeout(timeout)
            .header(CONTENT_TYPE, grpcweb::CONTENT_TYPE_GRPC_WEB)
            .header(ACCEPT, grpcweb::CONTENT_TYPE_GRPC_WEB)
            .header("x-grpc-web", "1")
            .body(grpcweb::encode_unary(request))
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout))?;

        let http_status = response.status();

        // Trailers-only responses put the status in HTTP headers.
        if let Some((code, message)) = grpcweb::status_from_headers(response.headers()) {
            if code != tonic::Code::Ok {
                return Err(ClientError::Rpc { code, message });
            }
        } else if !http_status.is_success() {
            return Err(ClientError::Transport(format!(
                "http status {http_status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_reqwest(e, timeout))?;
        grpcweb::decode_unary(&body)
    }

    /// Plugin display name.
    pub async fn name(&self) -> Result<String, ClientError> {
        let request = NameRequest {};
        let timeout = self.effective_timeout()?;
        let response: NameResponse = match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).name(request).await
                })
                .await?
            }
            Protocol::Json => self.json_call("Name", &request, timeout).await?,
            Protocol::GrpcWeb => self.web_call("Name", &request, timeout).await?,
        };
        Ok(response.name)
    }

    /// Identity, providers, and the effective capability set.
    pub async fn get_plugin_info(&self) -> Result<GetPluginInfoResponse, ClientError> {
        let request = GetPluginInfoRequest {};
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).get_plugin_info(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("GetPluginInfo", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("GetPluginInfo", &request, timeout).await,
        }
    }

    /// Forward-looking cost for a resource descriptor.
    pub async fn get_projected_cost(
        &self,
        request: ProjectedCostRequest,
    ) -> Result<ProjectedCostResponse, ClientError> {
        request.validate().map_err(ClientError::from_validation)?;
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).get_projected_cost(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("GetProjectedCost", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("GetProjectedCost", &request, timeout).await,
        }
    }

    /// One page of historical cost records. Most callers want
    /// [`actual_costs`](Self::actual_costs) instead.
    pub async fn get_actual_cost(
        &self,
        request: ActualCostRequest,
    ) -> Result<ActualCostResponse, ClientError> {
        request.validate().map_err(ClientError::from_validation)?;
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).get_actual_cost(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("GetActualCost", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("GetActualCost", &request, timeout).await,
        }
    }

    /// Iterator over all actual-cost records matching `request`.
    ///
    /// Pages are fetched lazily as the iterator advances; the request's
    /// `page_token` is managed by the iterator.
    pub fn actual_costs(&self, request: ActualCostRequest) -> ActualCostIterator {
        let page_size = request.page_size;
        let client = self.clone();
        let fetch: PageFetcher = Box::new(move |token, size| {
            let client = client.clone();
            let mut request = request.clone();
            Box::pin(async move {
                request.page_token = token;
                request.page_size = size;
                client.get_actual_cost(request).await.map(Some)
            })
        });
        ActualCostIterator::new(fetch, page_size)
    }

    /// Provider pricing catalog entries.
    pub async fn get_pricing_spec(
        &self,
        request: PricingSpecRequest,
    ) -> Result<PricingSpecResponse, ClientError> {
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).get_pricing_spec(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("GetPricingSpec", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("GetPricingSpec", &request, timeout).await,
        }
    }

    /// Cost estimate for a hypothetical resource.
    pub async fn estimate_cost(
        &self,
        request: EstimateCostRequest,
    ) -> Result<EstimateCostResponse, ClientError> {
        request.validate().map_err(ClientError::from_validation)?;
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).estimate_cost(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("EstimateCost", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("EstimateCost", &request, timeout).await,
        }
    }

    /// Whether the plugin exposes `capability`.
    pub async fn supports(&self, capability: Capability) -> Result<bool, ClientError> {
        let request = SupportsRequest {
            capability: capability as i32,
        };
        request.validate().map_err(ClientError::from_validation)?;
        let timeout = self.effective_timeout()?;
        let response: SupportsResponse = match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).supports(request).await
                })
                .await?
            }
            Protocol::Json => self.json_call("Supports", &request, timeout).await?,
            Protocol::GrpcWeb => self.web_call("Supports", &request, timeout).await?,
        };
        Ok(response.supported)
    }

    /// Cost-saving recommendations (optional capability).
    pub async fn get_recommendations(
        &self,
        request: RecommendationsRequest,
    ) -> Result<RecommendationsResponse, ClientError> {
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).get_recommendations(request).await
                })
                .await
            }
            Protocol::Json => {
                self.json_call("GetRecommendations", &request, timeout)
                    .await
            }
            Protocol::GrpcWeb => self.web_call("GetRecommendations", &request, timeout).await,
        }
    }

    /// Dismiss a recommendation (optional capability).
    pub async fn dismiss_recommendation(
        &self,
        request: DismissRecommendationRequest,
    ) -> Result<DismissRecommendationResponse, ClientError> {
        request.validate().map_err(ClientError::from_validation)?;
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel)
                        .dismiss_recommendation(request)
                        .await
                })
                .await
            }
            Protocol::Json => {
                self.json_call("DismissRecommendation", &request, timeout)
                    .await
            }
            Protocol::GrpcWeb => {
                self.web_call("DismissRecommendation", &request, timeout)
                    .await
            }
        }
    }

    /// Budget listing (optional capability).
    pub async fn get_budgets(
        &self,
        request: BudgetsRequest,
    ) -> Result<BudgetsResponse, ClientError> {
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).get_budgets(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("GetBudgets", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("GetBudgets", &request, timeout).await,
        }
    }

    /// Dry-run field report (optional capability).
    pub async fn dry_run(&self, request: DryRunRequest) -> Result<DryRunResponse, ClientError> {
        let timeout = self.effective_timeout()?;
        match self.config.protocol {
            Protocol::Grpc => {
                let channel = self.channel()?;
                self.grpc_unary(timeout, async move {
                    GrpcClient::new(channel).dry_run(request).await
                })
                .await
            }
            Protocol::Json => self.json_call("DryRun", &request, timeout).await,
            Protocol::GrpcWeb => self.web_call("DryRun", &request, timeout).await,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_parse_known() {
        assert_eq!(Protocol::parse("grpc"), Protocol::Grpc);
        assert_eq!(Protocol::parse("grpc-web"), Protocol::GrpcWeb);
        assert_eq!(Protocol::parse("grpcweb"), Protocol::GrpcWeb);
        assert_eq!(Protocol::parse("json"), Protocol::Json);
        assert_eq!(Protocol::parse("HTTP-JSON"), Protocol::Json);
    }

    #[test]
    fn test_protocol_parse_unknown_falls_back() {
        assert_eq!(Protocol::parse("thrift"), Protocol::Grpc);
        assert_eq!(Protocol::parse(""), Protocol::Grpc);
        let parsed: Protocol = "carrier-pigeon".parse().unwrap();
        assert_eq!(parsed, Protocol::Grpc);
    }

    #[test]
    fn test_construction_is_infallible_for_garbage_url() {
        // The bad URL must not surface until a call is made.
        let client = CostClient::grpc("not a url at all");
        assert_eq!(client.protocol(), Protocol::Grpc);
        assert!(matches!(
            client.channel(),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_timeout_precedence_default() {
        let client = CostClient::grpc("http://localhost:1");
        assert_eq!(client.effective_timeout().unwrap(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_timeout_precedence_config_over_default() {
        let client = CostClient::with_config(ClientConfig {
            base_url: "http://localhost:1".to_string(),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        });
        assert_eq!(
            client.effective_timeout().unwrap(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_timeout_precedence_transport_over_config() {
        let client = CostClient::with_config(ClientConfig {
            base_url: "http://localhost:1".to_string(),
            protocol: Protocol::Json,
            transport: Some(HttpTransport {
                client: reqwest::Client::new(),
                timeout: Some(Duration::from_secs(3)),
            }),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        });
        assert_eq!(
            client.effective_timeout().unwrap(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn test_timeout_precedence_deadline_wins_over_all() {
        let client = CostClient::with_config(ClientConfig {
            base_url: "http://localhost:1".to_string(),
            transport: Some(HttpTransport {
                client: reqwest::Client::new(),
                timeout: Some(Duration::from_secs(3)),
            }),
            timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        });

        let bounded = client.with_deadline(Instant::now() + Duration::from_secs(1));
        let effective = bounded.effective_timeout().unwrap();
        assert!(effective <= Duration::from_secs(1));
        assert!(effective > Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_expired_deadline_fails_without_network() {
        let client = CostClient::grpc("http://localhost:1");
        let expired = client.with_deadline(Instant::now() - Duration::from_secs(1));

        let err = expired.name().await.unwrap_err();
        assert!(matches!(err, ClientError::DeadlineExceeded(_)));
    }

    #[tokio::test]
    async fn test_validation_fails_before_network() {
        // Port 1 is never listening; a validation failure must not even
        // attempt the connection.
        let client = CostClient::grpc("http://127.0.0.1:1");
        let err = client
            .get_projected_cost(ProjectedCostRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_supports_rejects_unspecified_locally() {
        let client = CostClient::json("http://127.0.0.1:1");
        let err = client.supports(Capability::Unspecified).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[test]
    fn test_rpc_url_shape() {
        let client = CostClient::json("http://localhost:8080/");
        assert_eq!(
            client.rpc_url("GetActualCost"),
            "http://localhost:8080/hinta.v1.CostSource/GetActualCost"
        );
    }

    #[test]
    fn test_clone_shares_channel_cache() {
        let client = CostClient::grpc("http://localhost:50051");
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.channel, &clone.channel));
    }
}
