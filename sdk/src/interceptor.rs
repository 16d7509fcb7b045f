//! Server instrumentation chain
//!
//! Two interceptors wrap every unary call, outermost first:
//!
//! 1. Trace: read the trace identifier from inbound metadata, minting a
//!    fresh one when absent or malformed, and bind it to the call's
//!    tracing span. Tracing problems never fail a call.
//! 2. Metrics: count the request by final status and observe full handler
//!    latency, measured from strictly before the inner handler to
//!    strictly after it returns.

use crate::metrics::Metrics;
use std::future::Future;
use std::time::Instant;
use tonic::metadata::MetadataMap;
use tonic::{Code, Response, Status};
use tracing::Instrument;
use ulid::Ulid;

/// Metadata key carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "x-hinta-trace-id";

/// Extract the inbound trace id, or mint a new one.
///
/// Absent and malformed identifiers are treated identically so a
/// misbehaving caller cannot poison downstream correlation.
pub fn trace_id_from_metadata(metadata: &MetadataMap) -> Ulid {
    metadata
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Ulid::from_string(value).ok())
        .unwrap_or_else(Ulid::new)
}

/// The ordered interceptor chain for one plugin server.
#[derive(Debug, Clone)]
pub(crate) struct InterceptorChain {
    plugin: String,
}

impl InterceptorChain {
    pub(crate) fn new(plugin: impl Into<String>) -> Self {
        Self {
            plugin: plugin.into(),
        }
    }

    /// Run a unary handler under the chain.
    ///
    /// The handler receives the request-scoped trace id; everything it
    /// logs inside runs under a span carrying `method`, `plugin`, and
    /// `trace_id`.
    pub(crate) async fn unary<T, F, Fut>(
        &self,
        method: &'static str,
        metadata: &MetadataMap,
        handler: F,
    ) -> Result<Response<T>, Status>
    where
        F: FnOnce(Ulid) -> Fut,
        Fut: Future<Output = Result<Response<T>, Status>>,
    {
        let trace_id = trace_id_from_metadata(metadata);
        let span = tracing::info_span!(
            "rpc",
            method,
            plugin = %self.plugin,
            trace_id = %trace_id,
        );

        async {
            let start = Instant::now();
            let result = handler(trace_id).await;
            let code = match &result {
                Ok(_) => Code::Ok,
                Err(status) => status.code(),
            };

            if let Some(metrics) = Metrics::get() {
                metrics.record_request(method, code_label(code), &self.plugin);
                metrics.observe_duration(method, &self.plugin, start.elapsed().as_secs_f64());
            }

            if code != Code::Ok {
                tracing::warn!(status = code_label(code), "request failed");
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Stable label for a status code, matching tonic's debug names.
pub(crate) fn code_label(code: Code) -> &'static str {
    match code {
        Code::Ok => "OK",
        Code::Cancelled => "Cancelled",
        Code::Unknown => "Unknown",
        Code::InvalidArgument => "InvalidArgument",
        Code::DeadlineExceeded => "DeadlineExceeded",
        Code::NotFound => "NotFound",
        Code::AlreadyExists => "AlreadyExists",
        Code::PermissionDenied => "PermissionDenied",
        Code::ResourceExhausted => "ResourceExhausted",
        Code::FailedPrecondition => "FailedPrecondition",
        Code::Aborted => "Aborted",
        Code::OutOfRange => "OutOfRange",
        Code::Unimplemented => "Unimplemented",
        Code::Internal => "Internal",
        Code::Unavailable => "Unavailable",
        Code::DataLoss => "DataLoss",
        Code::Unauthenticated => "Unauthenticated",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_trace_id_generates_one() {
        let metadata = MetadataMap::new();
        let id = trace_id_from_metadata(&metadata);
        assert!(!id.to_string().is_empty());
    }

    #[test]
    fn test_malformed_trace_id_generates_fresh() {
        let mut metadata = MetadataMap::new();
        metadata.insert(TRACE_ID_HEADER, "not-a-ulid".parse().unwrap());
        let id = trace_id_from_metadata(&metadata);
        // A fresh valid ULID, not the malformed input
        assert_ne!(id.to_string(), "not-a-ulid");
    }

    #[test]
    fn test_valid_trace_id_propagates() {
        let original = Ulid::new();
        let mut metadata = MetadataMap::new();
        metadata.insert(TRACE_ID_HEADER, original.to_string().parse().unwrap());
        let id = trace_id_from_metadata(&metadata);
        assert_eq!(id, original);
    }

    #[tokio::test]
    async fn test_chain_passes_through_result() {
        let chain = InterceptorChain::new("test-plugin");
        let metadata = MetadataMap::new();

        let ok = chain
            .unary("Name", &metadata, |_| async { Ok(Response::new(42u32)) })
            .await;
        assert_eq!(ok.unwrap().into_inner(), 42);

        let err = chain
            .unary("Name", &metadata, |_| async {
                Err::<Response<u32>, _>(Status::internal("boom"))
            })
            .await;
        assert_eq!(err.unwrap_err().code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_chain_records_metrics_after_handler() {
        let _ = Metrics::init();
        let chain = InterceptorChain::new("metrics-plugin");
        let metadata = MetadataMap::new();

        let before = Metrics::get().map(|m| {
            m.requests_total
                .with_label_values(&["Supports", "OK", "metrics-plugin"])
                .get()
        });

        let _ = chain
            .unary("Supports", &metadata, |_| async { Ok(Response::new(())) })
            .await;

        if let (Some(before), Some(metrics)) = (before, Metrics::get()) {
            let after = metrics
                .requests_total
                .with_label_values(&["Supports", "OK", "metrics-plugin"])
                .get();
            assert!(after > before, "counter should advance after the call");
        }
    }

    #[test]
    fn test_code_labels() {
        assert_eq!(code_label(Code::Ok), "OK");
        assert_eq!(code_label(Code::InvalidArgument), "InvalidArgument");
        assert_eq!(code_label(Code::Unimplemented), "Unimplemented");
    }
}
