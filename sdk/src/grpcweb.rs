//! gRPC-Web unary framing
//!
//! The browser-compatible protocol carries length-prefixed frames over
//! plain HTTP/1.1: a 1-byte flag (0x00 = message, 0x80 = trailers), a
//! 4-byte big-endian length, then the payload. A unary response is one
//! message frame followed by one trailer frame; error responses may carry
//! the status in HTTP headers with no body frames at all (trailers-only).

use crate::error::ClientError;
use tonic::Code;

/// Content type of the browser protocol's proto flavor.
pub(crate) const CONTENT_TYPE_GRPC_WEB: &str = "application/grpc-web+proto";

const FRAME_HEADER_LEN: usize = 5;
const TRAILER_FLAG: u8 = 0x80;

/// Encode one request message as a gRPC-Web body.
pub(crate) fn encode_unary<M: prost::Message>(message: &M) -> Vec<u8> {
    let payload = message.encode_to_vec();
    let mut body = Vec::with_capacity(FRAME_HEADER_LEN + payload.len());
    body.push(0);
    body.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    body.extend_from_slice(&payload);
    body
}

/// Decode a unary gRPC-Web response body.
///
/// Walks every frame: message frames decode the response, the trailer
/// frame carries the final status. A non-OK status wins over any message;
/// a body with neither is a protocol violation.
pub(crate) fn decode_unary<M: prost::Message + Default>(body: &[u8]) -> Result<M, ClientError> {
    let mut message: Option<M> = None;
    let mut status: Option<(Code, String)> = None;

    let mut rest = body;
    while !rest.is_empty() {
        if rest.len() < FRAME_HEADER_LEN {
            return Err(ClientError::Protocol(
                "truncated gRPC-Web frame header".to_string(),
            ));
        }
        let flag = rest[0];
        let len = u32::from_be_bytes([rest[1], rest[2], rest[3], rest[4]]) as usize;
        let frame_end = FRAME_HEADER_LEN + len;
        if rest.len() < frame_end {
            return Err(ClientError::Protocol(format!(
                "truncated gRPC-Web frame: declared {len} bytes, {} remain",
                rest.len() - FRAME_HEADER_LEN
            )));
        }
        let frame = &rest[FRAME_HEADER_LEN..frame_end];

        if flag & TRAILER_FLAG != 0 {
            status = Some(parse_trailers(frame));
        } else {
            message = Some(M::decode(frame).map_err(|e| {
                ClientError::Protocol(format!("undecodable response message: {e}"))
            })?);
        }

        rest = &rest[frame_end..];
    }

    if let Some((code, grpc_message)) = status {
        if code != Code::Ok {
            return Err(ClientError::Rpc {
                code,
                message: grpc_message,
            });
        }
    }

    message.ok_or_else(|| {
        ClientError::Protocol("response carried no message frame".to_string())
    })
}

/// Parse a trailer frame: CRLF-separated `key: value` lines.
fn parse_trailers(frame: &[u8]) -> (Code, String) {
    let text = String::from_utf8_lossy(frame);
    let mut code = Code::Ok;
    let mut message = String::new();

    for line in text.split("\r\n") {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim().to_ascii_lowercase().as_str() {
            "grpc-status" => {
                code = value
                    .parse::<i32>()
                    .map(Code::from_i32)
                    .unwrap_or(Code::Unknown);
            }
            "grpc-message" => {
                message = value.to_string();
            }
            _ => {}
        }
    }

    (code, message)
}

/// Status reported in HTTP headers (the trailers-only response shape).
pub(crate) fn status_from_headers(headers: &reqwest::header::HeaderMap) -> Option<(Code, String)> {
    let code = headers
        .get("grpc-status")?
        .to_str()
        .ok()?
        .parse::<i32>()
        .ok()
        .map(Code::from_i32)?;
    let message = headers
        .get("grpc-message")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Some((code, message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use hinta_core::proto::NameResponse;

    fn trailer_frame(status: i32, message: &str) -> Vec<u8> {
        let text = if message.is_empty() {
            format!("grpc-status: {status}\r\n")
        } else {
            format!("grpc-status: {status}\r\ngrpc-message: {message}\r\n")
        };
        let mut frame = vec![TRAILER_FLAG];
        frame.extend_from_slice(&(text.len() as u32).to_be_bytes());
        frame.extend_from_slice(text.as_bytes());
        frame
    }

    #[test]
    fn test_unary_round_trip() {
        let response = NameResponse {
            name: "test-plugin".to_string(),
        };

        let mut body = encode_unary(&response);
        body.extend_from_slice(&trailer_frame(0, ""));

        let decoded: NameResponse = decode_unary(&body).unwrap();
        assert_eq!(decoded.name, "test-plugin");
    }

    #[test]
    fn test_error_trailer_wins() {
        let response = NameResponse::default();
        let mut body = encode_unary(&response);
        body.extend_from_slice(&trailer_frame(12, "method not implemented"));

        match decode_unary::<NameResponse>(&body) {
            Err(ClientError::Rpc { code, message }) => {
                assert_eq!(code, Code::Unimplemented);
                assert_eq!(message, "method not implemented");
            }
            other => panic!("expected Rpc error, got {other:?}"),
        }
    }

    #[test]
    fn test_trailers_only_body_without_message_is_violation() {
        let body = trailer_frame(0, "");
        match decode_unary::<NameResponse>(&body) {
            Err(ClientError::Protocol(msg)) => {
                assert!(msg.contains("no message frame"));
            }
            other => panic!("expected Protocol, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_frame_is_violation() {
        let response = NameResponse {
            name: "x".to_string(),
        };
        let mut body = encode_unary(&response);
        body.truncate(body.len() - 1);

        assert!(matches!(
            decode_unary::<NameResponse>(&body),
            Err(ClientError::Protocol(_))
        ));
    }

    #[test]
    fn test_status_from_headers() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("grpc-status", "14".parse().unwrap());
        headers.insert("grpc-message", "shutting down".parse().unwrap());

        let (code, message) = status_from_headers(&headers).unwrap();
        assert_eq!(code, Code::Unavailable);
        assert_eq!(message, "shutting down");
    }

    #[test]
    fn test_status_from_headers_absent() {
        let headers = reqwest::header::HeaderMap::new();
        assert!(status_from_headers(&headers).is_none());
    }
}
