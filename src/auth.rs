use crate::error::{RdwError, RdwResult};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Header carrying the Socrata application token
pub const APP_TOKEN_HEADER: HeaderName = HeaderName::from_static("x-app-token");

/// Authentication trait for the RDW open data API
#[async_trait::async_trait]
pub trait Authentication: Send + Sync {
    /// Apply authentication to the request headers
    async fn apply_auth(&self, headers: &mut HeaderMap) -> RdwResult<()>;
}

/// Socrata application token authentication.
///
/// An empty token is accepted at construction and rejected with
/// [`RdwError::TokenMissing`] when the first request is built.
#[derive(Debug, Clone)]
pub struct AppToken {
    token: String,
}

impl AppToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }
}

#[async_trait::async_trait]
impl Authentication for AppToken {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> RdwResult<()> {
        if self.token.is_empty() {
            return Err(RdwError::TokenMissing);
        }

        let value = HeaderValue::from_str(&self.token)
            .map_err(|e| RdwError::InvalidHeader(format!("app token: {}", e)))?;
        headers.insert(APP_TOKEN_HEADER, value);

        Ok(())
    }
}
