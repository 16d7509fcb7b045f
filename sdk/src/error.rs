//! Error types for the HINTA SDK

use hinta_core::{PluginError, PluginInfoError};
use std::time::Duration;
use thiserror::Error;

/// Errors fatal to server startup or operation
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Plugin info failed validation
    #[error("invalid plugin info: {0}")]
    PluginInfo(#[from] PluginInfoError),

    /// IO error (bind, accept)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metrics error
    #[error("metrics error: {0}")]
    Metrics(String),
}

/// Uniform error type of the typed RPC client
///
/// Every client method returns this, regardless of the wire protocol in
/// use. Transport failures never leak their raw representation; protocol
/// violations are distinct from transport errors so callers can tell
/// "server misbehaved" from "network failed".
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request failed local validation; no network call was made
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The configured base URL could not be parsed
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// The effective timeout elapsed before the call completed
    #[error("deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    /// The call's cancellation token fired
    #[error("call cancelled")]
    Cancelled,

    /// Network-level failure (connect, TLS, reset)
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-OK RPC status
    #[error("rpc error: {code:?}: {message}")]
    Rpc {
        /// Status code reported by the server
        code: tonic::Code,
        /// Human-readable status message
        message: String,
    },

    /// The server violated the wire protocol (malformed frame, missing
    /// response message)
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The paginated iterator hit its consecutive-empty-page bound
    #[error("pagination safety limit reached after {0} consecutive empty pages")]
    PaginationSafety(u32),
}

impl ClientError {
    /// Wrap a local validation failure.
    pub(crate) fn from_validation(err: PluginError) -> Self {
        match err {
            PluginError::InvalidRequest(msg) => ClientError::InvalidRequest(msg),
            other => ClientError::InvalidRequest(other.to_string()),
        }
    }

    /// Translate an RPC status into the client error shape.
    pub(crate) fn from_status(status: tonic::Status) -> Self {
        ClientError::Rpc {
            code: status.code(),
            message: status.message().to_string(),
        }
    }

    /// Translate a reqwest failure; timeouts map onto the deadline
    /// variant so all protocols report them identically.
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            ClientError::DeadlineExceeded(timeout)
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display() {
        let err = ServerError::Config("web: credentials with wildcard origin".to_string());
        assert_eq!(
            err.to_string(),
            "configuration error: web: credentials with wildcard origin"
        );
    }

    #[test]
    fn test_plugin_info_error_converts() {
        let err: ServerError = PluginInfoError::MissingName.into();
        assert!(matches!(err, ServerError::PluginInfo(_)));
    }

    #[test]
    fn test_client_error_from_status() {
        let status = tonic::Status::unimplemented("no budgets capability");
        let err = ClientError::from_status(status);
        match err {
            ClientError::Rpc { code, message } => {
                assert_eq!(code, tonic::Code::Unimplemented);
                assert_eq!(message, "no budgets capability");
            }
            other => panic!("expected Rpc error, got {other:?}"),
        }
    }

    #[test]
    fn test_client_error_from_validation_keeps_message() {
        let err = ClientError::from_validation(PluginError::InvalidRequest(
            "resource descriptor is required".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "invalid request: resource descriptor is required"
        );
    }

    #[test]
    fn test_client_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientError>();
    }
}
