// File: src/upstream.rs
// Purpose: Settled failures of calls to the upstream account API

use axum::http::StatusCode;
use serde::Deserialize;

/// Error code vocabulary of the upstream API's `error.code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiCode {
    /// The referenced resource does not exist
    Missing,
    MissingField,
    Invalid,
    AlreadyExists,
    /// Anything newer than this client knows about
    #[serde(other)]
    Unrecognized,
}

/// Field-level detail of an upstream 422
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiFieldError {
    pub field: String,
    pub code: ApiCode,
}

/// Upstream error body: `{ message, error?: { field, code } }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Only shown when nothing better is known; may be absent
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub error: Option<ApiFieldError>,
}

/// A failed upstream call, tagged by where it failed.
///
/// Produced by the HTTP client glue; the normalizer only matches on it.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The API answered with a non-success status
    #[error("upstream API responded with {status}")]
    Api {
        status: StatusCode,
        body: Option<ApiErrorBody>,
    },

    /// The request never got a response
    #[error("upstream API unreachable: {0}")]
    Network(String),

    #[error("unexpected upstream failure: {0}")]
    Unknown(String),
}

impl UpstreamError {
    /// Build from a settled non-success response.
    ///
    /// A body that is empty or not the API's JSON error shape is kept as
    /// `None`; a status outside the valid range becomes `Unknown`.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let Ok(status) = StatusCode::from_u16(status) else {
            return Self::Unknown(format!("invalid status code {status}"));
        };

        let body = if body.is_empty() {
            None
        } else {
            serde_json::from_slice::<ApiErrorBody>(body).ok()
        };

        Self::Api { status, body }
    }

    pub fn api(status: StatusCode, body: Option<ApiErrorBody>) -> Self {
        Self::Api { status, body }
    }

    /// HTTP status, when the API answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Network(_) | Self::Unknown(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_field_error() {
        let body = br#"{"message":"x","error":{"field":"email","code":"already_exists"}}"#;
        let err = UpstreamError::from_response(422, body);

        match err {
            UpstreamError::Api { status, body: Some(body) } => {
                assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
                assert_eq!(body.message, "x");
                assert_eq!(
                    body.error,
                    Some(ApiFieldError {
                        field: "email".to_string(),
                        code: ApiCode::AlreadyExists,
                    })
                );
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_api_code_is_kept_as_unrecognized() {
        let body = br#"{"message":"too many","error":{"field":"email","code":"rate_limited"}}"#;
        let err = UpstreamError::from_response(422, body);

        let UpstreamError::Api { body: Some(body), .. } = err else {
            panic!("expected api error");
        };
        assert_eq!(body.error.map(|e| e.code), Some(ApiCode::Unrecognized));
    }

    #[test]
    fn test_from_response_without_message() {
        let err = UpstreamError::from_response(422, br#"{"error":{"field":"email","code":"invalid"}}"#);

        let UpstreamError::Api { body: Some(body), .. } = err else {
            panic!("expected a decoded body");
        };
        assert_eq!(body.message, "");
        assert_eq!(body.error.map(|e| e.code), Some(ApiCode::Invalid));
    }

    #[test]
    fn test_from_response_without_body() {
        let err = UpstreamError::from_response(404, b"");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert!(matches!(err, UpstreamError::Api { body: None, .. }));
    }

    #[test]
    fn test_from_response_with_html_body() {
        let err = UpstreamError::from_response(500, b"<html>Bad Gateway</html>");
        assert!(matches!(err, UpstreamError::Api { body: None, .. }));
    }

    #[test]
    fn test_from_response_invalid_status() {
        let err = UpstreamError::from_response(42, b"");
        assert!(matches!(err, UpstreamError::Unknown(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display() {
        let err = UpstreamError::api(StatusCode::FORBIDDEN, None);
        assert_eq!(err.to_string(), "upstream API responded with 403 Forbidden");
        assert_eq!(
            UpstreamError::Network("connection refused".to_string()).to_string(),
            "upstream API unreachable: connection refused"
        );
    }
}
