//! Browser protocol configuration and CORS policy
//!
//! `WebConfig` governs the browser-compatible protocol variant and the
//! CORS policy applied to the shared listener. The allow-list is explicit:
//! an empty list denies all cross-origin callers, and a matching origin is
//! echoed back verbatim — the literal `*` header value is never sent, so
//! credentialed responses can't be combined with a wildcard grant.

use crate::error::ServerError;
use crate::interceptor::TRACE_ID_HEADER;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Max-age applied when [`CorsSetting::Unset`]: 24 hours.
pub const DEFAULT_CORS_MAX_AGE: Duration = Duration::from_secs(86_400);

/// Headers allowed when [`CorsSetting::Unset`].
const DEFAULT_CORS_HEADERS: [&str; 5] = [
    "content-type",
    "x-grpc-web",
    "x-user-agent",
    "grpc-timeout",
    TRACE_ID_HEADER,
];

/// Three-state configuration field.
///
/// Distinguishes "not configured, apply the default" from "explicitly
/// disabled" — a plain `Option` cannot express both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsSetting<T> {
    /// Not configured; the documented default applies
    #[default]
    Unset,
    /// Explicitly disabled; the corresponding header is omitted
    Disabled,
    /// Explicit value
    Custom(T),
}

/// Browser protocol configuration
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Serve the browser-compatible protocol variant
    pub enabled: bool,
    /// Origins allowed to make cross-origin calls. Empty denies all.
    /// A literal `"*"` entry echoes any requesting origin (still never
    /// the `*` header value) and is rejected when combined with
    /// credentials.
    pub allowed_origins: Vec<String>,
    /// Allow credentialed cross-origin requests
    pub allow_credentials: bool,
    /// Request headers allowed in CORS preflight
    pub allowed_headers: CorsSetting<Vec<String>>,
    /// `Access-Control-Max-Age` for preflight caching
    pub max_age: CorsSetting<Duration>,
    /// Mount `GET /healthz` on the listener
    pub expose_health: bool,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            allowed_origins: Vec::new(),
            allow_credentials: false,
            allowed_headers: CorsSetting::Unset,
            max_age: CorsSetting::Unset,
            expose_health: true,
        }
    }
}

impl WebConfig {
    /// Browser protocol enabled for the given origins.
    pub fn enabled_for_origins(origins: &[&str]) -> Self {
        Self {
            enabled: true,
            allowed_origins: origins.iter().map(|o| (*o).to_string()).collect(),
            ..Default::default()
        }
    }

    fn has_wildcard_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    /// Reject contradictory settings before the server starts.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.allow_credentials && self.has_wildcard_origin() {
            return Err(ServerError::Config(
                "web: allow_credentials cannot be combined with a wildcard origin".to_string(),
            ));
        }
        for origin in &self.allowed_origins {
            if origin != "*" && origin.parse::<HeaderValue>().is_err() {
                return Err(ServerError::Config(format!(
                    "web: allowed origin '{origin}' is not a valid header value"
                )));
            }
        }
        Ok(())
    }

    /// Build the CORS layer for the shared listener.
    pub(crate) fn cors_layer(&self) -> CorsLayer {
        let mut layer =
            CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

        if self.has_wildcard_origin() {
            // Echo the requesting origin; never the literal `*`.
            layer = layer.allow_origin(AllowOrigin::mirror_request());
        } else {
            let origins: Vec<HeaderValue> = self
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            layer = layer.allow_origin(origins);
        }

        match &self.allowed_headers {
            CorsSetting::Unset => {
                let headers: Vec<HeaderName> = DEFAULT_CORS_HEADERS
                    .into_iter()
                    .map(HeaderName::from_static)
                    .collect();
                layer = layer.allow_headers(headers);
            }
            CorsSetting::Disabled => {}
            CorsSetting::Custom(list) => {
                let headers: Vec<HeaderName> =
                    list.iter().filter_map(|h| h.parse().ok()).collect();
                layer = layer.allow_headers(headers);
            }
        }

        match self.max_age {
            CorsSetting::Unset => layer = layer.max_age(DEFAULT_CORS_MAX_AGE),
            CorsSetting::Disabled => {}
            CorsSetting::Custom(age) => layer = layer.max_age(age),
        }

        if self.allow_credentials {
            layer = layer.allow_credentials(true);
        }

        layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_denies_everything() {
        let config = WebConfig::default();
        assert!(!config.enabled);
        assert!(config.allowed_origins.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_credentials_with_wildcard_rejected() {
        let config = WebConfig {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allow_credentials: true,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_credentials_with_explicit_origin_ok() {
        let config = WebConfig {
            enabled: true,
            allowed_origins: vec!["https://app.example.com".to_string()],
            allow_credentials: true,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let config = WebConfig {
            enabled: true,
            allowed_origins: vec!["https://app.example.com\n".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_enabled_for_origins_copies() {
        let config = WebConfig::enabled_for_origins(&["https://a.example", "https://b.example"]);
        assert!(config.enabled);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(config.expose_health);
    }

    #[test]
    fn test_cors_setting_default_is_unset() {
        let setting: CorsSetting<Vec<String>> = CorsSetting::default();
        assert_eq!(setting, CorsSetting::Unset);
    }

    #[test]
    fn test_cors_layer_builds_for_all_setting_states() {
        // Exercises every CorsSetting arm; assertions on actual header
        // behavior live in the integration tests.
        for headers in [
            CorsSetting::Unset,
            CorsSetting::Disabled,
            CorsSetting::Custom(vec!["content-type".to_string()]),
        ] {
            let config = WebConfig {
                enabled: true,
                allowed_origins: vec!["https://app.example.com".to_string()],
                allowed_headers: headers,
                max_age: CorsSetting::Custom(Duration::from_secs(600)),
                ..Default::default()
            };
            let _ = config.cors_layer();
        }

        let disabled_age = WebConfig {
            enabled: true,
            max_age: CorsSetting::Disabled,
            ..Default::default()
        };
        let _ = disabled_age.cors_layer();
    }
}
