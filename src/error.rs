use std::fmt;
use thiserror::Error;

/// Non-2xx response other than 403 and 429, carrying the raw body verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status code: {}, error: {}", self.status_code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// RDW client error types
#[derive(Error, Debug)]
pub enum RdwError {
    #[error("app token is missing")]
    TokenMissing,

    #[error("app token is invalid")]
    TokenInvalid,

    #[error("API limit exceeded")]
    RateLimitExceeded,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("error executing request: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parsing failed: {0}")]
    Url(#[from] url::ParseError),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("{context}: {source}")]
    Request {
        context: String,
        #[source]
        source: Box<RdwError>,
    },
}

/// Result type for RDW operations
pub type RdwResult<T> = Result<T, RdwError>;

/// Kind of an [`RdwError`], stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TokenMissing,
    TokenInvalid,
    RateLimitExceeded,
    Api,
    /// Connection, DNS, timeout or cancellation failure.
    Transport,
    /// Body could not be encoded or the response could not be decoded.
    Decode,
    /// The request could not be constructed.
    InvalidRequest,
}

impl RdwError {
    /// Create an API error from a status code and message
    pub fn api_error(status_code: u16, message: impl Into<String>) -> Self {
        Self::Api(ApiError {
            status_code,
            message: message.into(),
        })
    }

    /// Wrap an error with operation context, keeping its kind
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::Request {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The kind of the innermost error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TokenMissing => ErrorKind::TokenMissing,
            Self::TokenInvalid => ErrorKind::TokenInvalid,
            Self::RateLimitExceeded => ErrorKind::RateLimitExceeded,
            Self::Api(_) => ErrorKind::Api,
            Self::Http(e) if e.is_builder() => ErrorKind::InvalidRequest,
            Self::Http(_) => ErrorKind::Transport,
            Self::Json(_) => ErrorKind::Decode,
            Self::Url(_) | Self::InvalidHeader(_) => ErrorKind::InvalidRequest,
            Self::Request { source, .. } => source.kind(),
        }
    }

    /// The API error payload, looking through context wraps
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            Self::Request { source, .. } => source.api(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message_embeds_status_and_body() {
        let err = RdwError::api_error(500, "Internal server error");
        assert_eq!(err.to_string(), "status code: 500, error: Internal server error");
        assert_eq!(err.kind(), ErrorKind::Api);
    }

    #[test]
    fn unit_kinds_render_fixed_messages() {
        assert_eq!(RdwError::TokenMissing.to_string(), "app token is missing");
        assert_eq!(RdwError::TokenInvalid.to_string(), "app token is invalid");
        assert_eq!(RdwError::RateLimitExceeded.to_string(), "API limit exceeded");
    }

    #[test]
    fn context_wrap_keeps_kind() {
        let err = RdwError::RateLimitExceeded.with_context("error while requesting things");
        assert_eq!(err.kind(), ErrorKind::RateLimitExceeded);
        assert_eq!(err.to_string(), "error while requesting things: API limit exceeded");

        let err = RdwError::api_error(502, "bad gateway").with_context("outer");
        assert_eq!(
            err.api(),
            Some(&ApiError {
                status_code: 502,
                message: "bad gateway".to_string()
            })
        );
    }

    #[test]
    fn api_errors_compare_by_payload() {
        let a = ApiError { status_code: 500, message: "x".into() };
        let b = ApiError { status_code: 500, message: "x".into() };
        let c = ApiError { status_code: 500, message: "y".into() };
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
