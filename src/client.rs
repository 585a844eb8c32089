use crate::{
    auth::{AppToken, Authentication},
    error::{RdwError, RdwResult},
    apis::{RegisteredVehiclesApi, Resource, ResourceApi},
};
use bytes::Bytes;
use log::debug;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT},
    Client, Method, Request, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use url::Url;

/// Base URL of the RDW open data portal
pub const DEFAULT_BASE_URL: &str = "https://opendata.rdw.nl/";

/// Environment variable read by [`RdwClient::from_env`]
pub const APP_TOKEN_ENV: &str = "RDW_APP_TOKEN";

const LIBRARY_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Main RDW open data client
#[derive(Clone)]
pub struct RdwClient {
    client: Client,
    base_url: Url,
    auth: Arc<dyn Authentication>,
}

impl RdwClient {
    /// Create a new client with the default transport.
    ///
    /// An empty token is not rejected here; every request built through the
    /// client fails with [`RdwError::TokenMissing`] instead.
    pub fn new(app_token: impl Into<String>) -> RdwResult<Self> {
        let client = Client::builder().user_agent(LIBRARY_USER_AGENT).build()?;

        Self::with_client(client, app_token)
    }

    /// Create a new client with a custom reqwest client
    pub fn with_client(client: Client, app_token: impl Into<String>) -> RdwResult<Self> {
        Self::with_base_url(client, DEFAULT_BASE_URL, app_token)
    }

    /// Create a new client against another host, e.g. a mock server
    pub fn with_base_url(
        client: Client,
        base_url: impl AsRef<str>,
        app_token: impl Into<String>,
    ) -> RdwResult<Self> {
        Self::with_auth(client, base_url, AppToken::new(app_token))
    }

    /// Create a new client with custom authentication
    pub fn with_auth(
        client: Client,
        base_url: impl AsRef<str>,
        auth: impl Authentication + 'static,
    ) -> RdwResult<Self> {
        let base_url = Url::parse(base_url.as_ref())?;

        Ok(Self {
            client,
            base_url,
            auth: Arc::new(auth),
        })
    }

    /// Create a new client with the token taken from `RDW_APP_TOKEN`.
    /// An unset variable yields an empty token.
    pub fn from_env() -> RdwResult<Self> {
        let token = std::env::var(APP_TOKEN_ENV).unwrap_or_default();
        Self::new(token)
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Get the registered vehicles API
    pub fn registered_vehicles(&self) -> RegisteredVehiclesApi<'_> {
        RegisteredVehiclesApi::new(self)
    }

    /// Get the API of any listable resource
    pub fn resource<R: Resource>(&self) -> ResourceApi<'_, R> {
        ResourceApi::new(self)
    }

    /// Build a request to the given path with query options, JSON body and
    /// authentication.
    ///
    /// `path` is resolved against the base URL, so an absolute path replaces
    /// the base path. Options fields that serialize to nothing are left out
    /// of the query string; no options means no query string.
    ///
    /// The returned future completes without suspending unless the
    /// configured [`Authentication`] itself awaits.
    pub async fn build_request<B, O>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: Option<&O>,
    ) -> RdwResult<Request>
    where
        B: Serialize + ?Sized,
        O: Serialize + ?Sized,
    {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(LIBRARY_USER_AGENT));

        let url = self.base_url.join(path)?;
        let mut request = self.client.request(method, url).headers(headers);

        if let Some(options) = options {
            request = request.query(options);
        }

        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        Ok(request.build()?)
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T>(&self, request: Request) -> RdwResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request and discard its body
    pub async fn execute_empty(&self, request: Request) -> RdwResult<()> {
        self.send(request).await.map(|_| ())
    }

    /// Send the request, classify the status and read the body of a success
    async fn send(&self, request: Request) -> RdwResult<Bytes> {
        debug!("HTTP {} {}", request.method(), request.url());
        let response = self.client.execute(request).await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            Err(Self::handle_error_response(status, response).await)
        }
    }

    /// Map a non-2xx response onto the error taxonomy
    async fn handle_error_response(status: StatusCode, response: Response) -> RdwError {
        match status {
            StatusCode::FORBIDDEN => RdwError::TokenInvalid,
            StatusCode::TOO_MANY_REQUESTS => RdwError::RateLimitExceeded,
            _ => match response.text().await {
                Ok(message) => RdwError::api_error(status.as_u16(), message),
                Err(e) => RdwError::Http(e),
            },
        }
    }
}
