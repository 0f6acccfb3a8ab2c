//! HTTP transports.
//!
//! Client-side (hydrate): `gloo-net` over the browser fetch API, with a
//! `gloo-timers` race for the request timeout.
//! Server-side (SSR): `reqwest` with a cookie store and client timeout.
//! Neither feature: a transport that fails every call, so library code and
//! tests build without a network stack.

use std::sync::Arc;

use async_trait::async_trait;

use super::http::{ApiRequest, ApiResponse};
use crate::config::ClientConfig;
use crate::error::ApiError;

/// Sends a fully prepared request to an absolute URL.
///
/// Implementations report "no response" as [`ApiError::Transport`] or
/// [`ApiError::Timeout`]; any response, whatever its status, is `Ok`.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Transport for the current build target.
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be constructed.
pub fn default_transport(config: &ClientConfig) -> Result<Arc<dyn Transport>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        Ok(Arc::new(GlooTransport::new(config)))
    }
    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    {
        Ok(Arc::new(ReqwestTransport::new(config)?))
    }
    #[cfg(not(any(feature = "hydrate", feature = "ssr")))]
    {
        let _ = config;
        Ok(Arc::new(UnavailableTransport))
    }
}

/// Fails every request; used when the build has no HTTP stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableTransport;

#[async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, url: &str, _request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        Err(ApiError::Transport(format!("no HTTP transport available for {url}")))
    }
}

#[cfg(feature = "hydrate")]
pub struct GlooTransport {
    timeout_ms: u32,
    with_credentials: bool,
}

#[cfg(feature = "hydrate")]
impl GlooTransport {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            timeout_ms: u32::try_from(config.timeout_ms).unwrap_or(u32::MAX),
            with_credentials: config.with_credentials,
        }
    }
}

#[cfg(feature = "hydrate")]
#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        use super::http::Method;

        let mut builder = match request.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        };
        if self.with_credentials {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let send = Box::pin(prepared.send());
        let timeout = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Transport(e.to_string()))?,
            Either::Right(((), _)) => return Err(ApiError::Timeout { ms: u64::from(self.timeout_ms) }),
        };

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(feature = "ssr")]
pub struct ReqwestTransport {
    http: reqwest::Client,
    timeout_ms: u64,
}

#[cfg(feature = "ssr")]
impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the `reqwest` client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .cookie_store(config.with_credentials)
            .build()
            .map_err(|e| ApiError::Transport(format!("HTTP client build failed: {e}")))?;
        Ok(Self { http, timeout_ms: config.timeout_ms })
    }
}

#[cfg(feature = "ssr")]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        use super::http::Method;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.http.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout { ms: self.timeout_ms }
            } else {
                ApiError::Transport(e.to_string())
            }
        })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
