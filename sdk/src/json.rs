//! JSON protocol variant codec
//!
//! The HTTP/JSON-friendly protocol POSTs serde-encoded request messages to
//! the same `/hinta.v1.CostSource/{Method}` paths the binary protocols
//! use. Failures carry a `{code, message}` body with the RPC code rendered
//! in snake_case and an HTTP status mapped from it.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use tonic::Code;

/// Wire shape of a JSON protocol error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// RPC status code in snake_case (`"invalid_argument"`, …)
    pub code: String,
    /// Human-readable status message
    pub message: String,
}

/// Snake_case wire name for a status code.
pub fn code_name(code: Code) -> &'static str {
    match code {
        Code::Ok => "ok",
        Code::Cancelled => "canceled",
        Code::Unknown => "unknown",
        Code::InvalidArgument => "invalid_argument",
        Code::DeadlineExceeded => "deadline_exceeded",
        Code::NotFound => "not_found",
        Code::AlreadyExists => "already_exists",
        Code::PermissionDenied => "permission_denied",
        Code::ResourceExhausted => "resource_exhausted",
        Code::FailedPrecondition => "failed_precondition",
        Code::Aborted => "aborted",
        Code::OutOfRange => "out_of_range",
        Code::Unimplemented => "unimplemented",
        Code::Internal => "internal",
        Code::Unavailable => "unavailable",
        Code::DataLoss => "data_loss",
        Code::Unauthenticated => "unauthenticated",
    }
}

/// Inverse of [`code_name`]; unknown names map to `Unknown`.
pub fn code_from_name(name: &str) -> Code {
    match name {
        "ok" => Code::Ok,
        "canceled" => Code::Cancelled,
        "invalid_argument" => Code::InvalidArgument,
        "deadline_exceeded" => Code::DeadlineExceeded,
        "not_found" => Code::NotFound,
        "already_exists" => Code::AlreadyExists,
        "permission_denied" => Code::PermissionDenied,
        "resource_exhausted" => Code::ResourceExhausted,
        "failed_precondition" => Code::FailedPrecondition,
        "aborted" => Code::Aborted,
        "out_of_range" => Code::OutOfRange,
        "unimplemented" => Code::Unimplemented,
        "internal" => Code::Internal,
        "unavailable" => Code::Unavailable,
        "data_loss" => Code::DataLoss,
        "unauthenticated" => Code::Unauthenticated,
        _ => Code::Unknown,
    }
}

/// HTTP status the JSON protocol serves for a status code.
pub fn http_status(code: Code) -> u16 {
    match code {
        Code::Ok => 200,
        Code::InvalidArgument | Code::OutOfRange | Code::FailedPrecondition => 400,
        Code::Unauthenticated => 401,
        Code::PermissionDenied => 403,
        Code::NotFound => 404,
        Code::AlreadyExists | Code::Aborted => 409,
        Code::ResourceExhausted => 429,
        Code::Cancelled => 499,
        Code::Unimplemented => 501,
        Code::Unavailable => 503,
        Code::DeadlineExceeded => 504,
        Code::Unknown | Code::Internal | Code::DataLoss => 500,
    }
}

/// Parse a non-2xx JSON protocol response body into a client error.
///
/// A body that is not the documented error shape is a protocol violation,
/// not a transport failure.
pub(crate) fn error_from_body(http_code: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => ClientError::Rpc {
            code: code_from_name(&err.code),
            message: err.message,
        },
        Err(_) => ClientError::Protocol(format!(
            "http status {http_code} with undecodable error body"
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_code_name_round_trip() {
        for code in [
            Code::InvalidArgument,
            Code::NotFound,
            Code::Unimplemented,
            Code::Internal,
            Code::Unavailable,
            Code::DeadlineExceeded,
        ] {
            assert_eq!(code_from_name(code_name(code)), code);
        }
    }

    #[test]
    fn test_unknown_code_name() {
        assert_eq!(code_from_name("bogus"), Code::Unknown);
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(http_status(Code::InvalidArgument), 400);
        assert_eq!(http_status(Code::NotFound), 404);
        assert_eq!(http_status(Code::Unimplemented), 501);
        assert_eq!(http_status(Code::Unavailable), 503);
        assert_eq!(http_status(Code::DeadlineExceeded), 504);
    }

    #[test]
    fn test_error_from_body_parses_shape() {
        let body = serde_json::to_vec(&ErrorBody {
            code: "not_found".to_string(),
            message: "no such sku".to_string(),
        })
        .unwrap();

        match error_from_body(404, &body) {
            ClientError::Rpc { code, message } => {
                assert_eq!(code, Code::NotFound);
                assert_eq!(message, "no such sku");
            }
            other => panic!("expected Rpc, got {other:?}"),
        }
    }

    #[test]
    fn test_error_from_body_garbage_is_protocol_violation() {
        match error_from_body(500, b"<html>oops</html>") {
            ClientError::Protocol(msg) => assert!(msg.contains("500")),
            other => panic!("expected Protocol, got {other:?}"),
        }
    }
}
