use thiserror::Error;

/// Semantic classification of an HTTP failure status.
///
/// Mirrors the status codes the Shardbound API is known to emit, including
/// the Cloudflare intermediary codes (the service sits behind Cloudflare, so
/// 52x responses indicate a proxy-level failure rather than the origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 404
    NotFound,
    /// 405
    MethodNotAllowed,
    /// 415
    UnsupportedMediaType,
    /// 429
    RateLimitExceeded,
    /// 500
    InternalServerError,
    /// 503
    ServiceUnavailable,
    /// 520 - Cloudflare: unspecified origin error
    CloudflareGeneric,
    /// 521 - Cloudflare: origin refused the connection
    CloudflareConnectionRefused,
    /// 522 - Cloudflare: origin connection timed out
    CloudflareTimeout,
    /// 525 - Cloudflare: SSL handshake with the origin failed
    CloudflareSslHandshakeFailed,
    /// Any status code not in the table. The numeric code is preserved on
    /// the carrying [`RequestError::Api`] value.
    Unknown,
}

impl ErrorKind {
    /// Maps an HTTP status code to its semantic kind.
    ///
    /// Total over all of `u16`: codes outside the table map to
    /// [`ErrorKind::Unknown`].
    #[must_use]
    pub const fn classify(code: u16) -> Self {
        match code {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            415 => Self::UnsupportedMediaType,
            429 => Self::RateLimitExceeded,
            500 => Self::InternalServerError,
            503 => Self::ServiceUnavailable,
            520 => Self::CloudflareGeneric,
            521 => Self::CloudflareConnectionRefused,
            522 => Self::CloudflareTimeout,
            525 => Self::CloudflareSslHandshakeFailed,
            _ => Self::Unknown,
        }
    }
}

/// Errors produced while executing a request against the Shardbound API.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server answered with a non-200 status.
    #[error("{code}/{kind:?} error during request to {}", uri.as_deref().unwrap_or("<unknown>"))]
    Api {
        /// Raw HTTP status code.
        code: u16,
        /// Classified kind derived from the status code.
        kind: ErrorKind,
        /// Target URI of the failing request, when known.
        uri: Option<String>,
    },

    /// Transport-layer fault: connection refused, timeout, TLS failure, etc.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The connection was closed before or while the request ran.
    #[error("connection closed")]
    ConnectionClosed,

    /// The response body could not be decoded (gzip or JSON).
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid construction input, e.g. a token that is not a legal header
    /// value.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RequestError {
    /// Builds a classified error for a failing HTTP status.
    #[must_use]
    pub fn api(code: u16, uri: Option<&str>) -> Self {
        Self::Api {
            code,
            kind: ErrorKind::classify(code),
            uri: uri.map(str::to_owned),
        }
    }

    /// Whether the retry policy may act on this error.
    ///
    /// Classified HTTP failures and transport faults are eligible; closed
    /// connections, decode failures and configuration errors are not.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Transport(_))
    }

    /// The classified kind, for [`RequestError::Api`] values.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Maps a JSON deserialization failure to a [`RequestError::Decode`] carrying
/// an excerpt of the offending body.
pub(crate) fn map_deser(err: &serde_json::Error, body: &[u8]) -> RequestError {
    let excerpt = String::from_utf8_lossy(&body[..body.len().min(256)]);
    RequestError::Decode(format!("{err}: {excerpt}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_table() {
        assert_eq!(ErrorKind::classify(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::classify(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::classify(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::classify(405), ErrorKind::MethodNotAllowed);
        assert_eq!(ErrorKind::classify(415), ErrorKind::UnsupportedMediaType);
        assert_eq!(ErrorKind::classify(429), ErrorKind::RateLimitExceeded);
        assert_eq!(ErrorKind::classify(500), ErrorKind::InternalServerError);
        assert_eq!(ErrorKind::classify(503), ErrorKind::ServiceUnavailable);
        assert_eq!(ErrorKind::classify(520), ErrorKind::CloudflareGeneric);
        assert_eq!(
            ErrorKind::classify(521),
            ErrorKind::CloudflareConnectionRefused
        );
        assert_eq!(ErrorKind::classify(522), ErrorKind::CloudflareTimeout);
        assert_eq!(
            ErrorKind::classify(525),
            ErrorKind::CloudflareSslHandshakeFailed
        );
    }

    #[test]
    fn classify_unknown_preserves_code() {
        let err = RequestError::api(418, Some("https://example.invalid/teapot"));
        match err {
            RequestError::Api { code, kind, .. } => {
                assert_eq!(code, 418);
                assert_eq!(kind, ErrorKind::Unknown);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn api_error_message_includes_uri() {
        let err = RequestError::api(404, Some("https://host/api/v1/user/show/x"));
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("NotFound"));
        assert!(msg.contains("user/show/x"));
    }

    #[test]
    fn retryable_matrix() {
        assert!(RequestError::api(429, None).is_retryable());
        assert!(RequestError::api(503, None).is_retryable());
        assert!(RequestError::api(400, None).is_retryable());
        assert!(!RequestError::ConnectionClosed.is_retryable());
        assert!(!RequestError::Decode("bad".into()).is_retryable());
        assert!(!RequestError::Config("bad".into()).is_retryable());
    }
}
