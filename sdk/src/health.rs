//! Health endpoint
//!
//! `GET`/`HEAD /healthz` answers `200 "ok"` in plaintext when no checker
//! is configured. With a checker, it answers a JSON report and `503` on
//! failure. A panicking checker is isolated in its own task and reported
//! as a failure; it never takes the server down.

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Plugin-supplied health probe
#[async_trait]
pub trait HealthChecker: Send + Sync + 'static {
    /// Perform one health check. Called on every `/healthz` request.
    async fn check(&self) -> HealthStatus;
}

/// Result of one health check
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Overall verdict; drives the HTTP status code
    pub healthy: bool,
    /// Optional operator-facing explanation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional per-component detail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
    /// Unix timestamp (seconds) of this check
    pub last_checked: i64,
}

impl HealthStatus {
    /// A passing status stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            message: None,
            details: None,
            last_checked: chrono::Utc::now().timestamp(),
        }
    }

    /// A failing status with an explanation, stamped with the current time.
    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: Some(message.into()),
            details: None,
            last_checked: chrono::Utc::now().timestamp(),
        }
    }

    /// Attach per-component detail.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Serve one `/healthz` request.
pub(crate) async fn respond(checker: Option<Arc<dyn HealthChecker>>) -> Response {
    let Some(checker) = checker else {
        return (StatusCode::OK, "ok").into_response();
    };

    // Run the checker in its own task so a panic is contained and can be
    // reported instead of unwinding through the connection handler.
    let status = match tokio::spawn(async move { checker.check().await }).await {
        Ok(status) => status,
        Err(join_err) => {
            let reason = if join_err.is_panic() {
                let payload = join_err.into_panic();
                if let Some(s) = payload.downcast_ref::<&str>() {
                    (*s).to_string()
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                }
            } else {
                "health check task cancelled".to_string()
            };
            tracing::error!(reason = %reason, "health check panicked");
            HealthStatus::unhealthy(format!("health check panicked: {reason}"))
        }
    };

    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status)).into_response()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Always(bool);

    #[async_trait]
    impl HealthChecker for Always {
        async fn check(&self) -> HealthStatus {
            if self.0 {
                HealthStatus::healthy()
            } else {
                HealthStatus::unhealthy("backing store unreachable")
            }
        }
    }

    struct Panicking;

    #[async_trait]
    impl HealthChecker for Panicking {
        async fn check(&self) -> HealthStatus {
            panic!("checker exploded");
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_no_checker_plain_ok() {
        let response = respond(None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn test_healthy_checker_json() {
        let response = respond(Some(Arc::new(Always(true)))).await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["healthy"], true);
        assert!(json["last_checked"].is_number());
        // message is omitted when None
        assert!(json.get("message").is_none());
    }

    #[tokio::test]
    async fn test_unhealthy_checker_503() {
        let response = respond(Some(Arc::new(Always(false)))).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["healthy"], false);
        assert_eq!(json["message"], "backing store unreachable");
    }

    #[tokio::test]
    async fn test_panicking_checker_reported_not_fatal() {
        let response = respond(Some(Arc::new(Panicking))).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let json = body_json(response).await;
        assert_eq!(json["healthy"], false);
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("checker exploded"), "got: {message}");
    }

    #[test]
    fn test_with_detail() {
        let status = HealthStatus::healthy()
            .with_detail("datastore", "ok")
            .with_detail("billing-api", "degraded");
        let details = status.details.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details.get("billing-api"), Some(&"degraded".to_string()));
    }
}
