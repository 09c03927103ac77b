//! Request adapters: the chokepoint between request descriptions and the
//! network.
//!
//! # Design
//! `RequestAdapter` is the only seam through which the typed client reaches
//! the network. `HttpRequestAdapter` implements it over reqwest: it asks its
//! authentication provider to decorate the request, resolves the path
//! against the configured base address, performs the round-trip and
//! deserializes the body. No retries and no timeout are configured; every
//! failure propagates to the caller as an `ApiError`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::AuthenticationProvider;
use crate::error::ApiError;
use crate::request::RequestInformation;

/// Executes a request description and deserializes the response into `T`.
///
/// On success the caller always receives a fully populated value; partial
/// results never surface.
#[async_trait]
pub trait RequestAdapter: Send + Sync {
    async fn send<T>(&self, request: RequestInformation) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send;
}

/// `RequestAdapter` backed by a reqwest client.
///
/// Constructed once with an authentication provider and a base address;
/// carries no per-call state, so a single adapter serves concurrent requests.
pub struct HttpRequestAdapter {
    http: reqwest::Client,
    auth: Box<dyn AuthenticationProvider>,
    base_url: String,
}

impl std::fmt::Debug for HttpRequestAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRequestAdapter")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HttpRequestAdapter {
    /// Fails with `ApiError::InvalidBaseUrl` when `base_url` is empty or not
    /// an absolute, well-formed URL. A trailing slash is stripped so path
    /// resolution never produces double slashes.
    pub fn new<P>(auth: P, base_url: &str) -> Result<Self, ApiError>
    where
        P: AuthenticationProvider + 'static,
    {
        if base_url.trim().is_empty() {
            return Err(ApiError::InvalidBaseUrl("base address is empty".to_string()));
        }
        reqwest::Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        Ok(Self {
            http: reqwest::Client::new(),
            auth: Box::new(auth),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a request path into an absolute call target. Absolute paths
    /// pass through untouched; relative paths join the base address with
    /// exactly one slash.
    fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RequestAdapter for HttpRequestAdapter {
    async fn send<T>(&self, mut request: RequestInformation) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        self.auth.authenticate(&mut request);
        let url = self.resolve(&request.path);
        debug!(%url, method = ?request.method, "executing request");

        let mut builder = self.http.request(request.method.as_reqwest(), &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // Status is interpreted before the body, so an error page never
        // surfaces as a deserialization failure.
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }
}
