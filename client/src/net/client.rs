//! API client with request/response interceptors.
//!
//! ARCHITECTURE
//! ============
//! Every resource hook goes through [`ApiClient::send`]:
//!
//! 1. request interceptors run in registration order (bearer token),
//! 2. the transport sends the request to `config.api_url + path`,
//! 3. if a response arrived, response interceptors run (session expiry),
//! 4. the status is mapped onto `Ok` / [`ApiError`].
//!
//! Transport failures return at step 2 and never reach the response
//! interceptors, so a network error can not tear down the session.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::http::{ApiRequest, ApiResponse, Method};
use super::transport::Transport;
use crate::config::ClientConfig;
use crate::error::{ApiError, extract_server_message};
use crate::session::CredentialStore;
use crate::state::query_cache::QueryCache;
use crate::state::toasts::{Notifier, Toast};
use crate::util::redirect::{NavMode, Redirector};

pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Hook run on every outgoing request before it is sent.
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: &mut ApiRequest);
}

/// Hook run on every received response, success or failure.
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, request: &ApiRequest, response: &ApiResponse);
}

/// Attaches `Authorization: Bearer <token>` when a session exists.
///
/// The token is read at send time, never captured earlier.
pub struct BearerAuth {
    session: CredentialStore,
}

impl BearerAuth {
    #[must_use]
    pub fn new(session: CredentialStore) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, request: &mut ApiRequest) {
        if let Some(token) = self.session.token() {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
    }
}

/// Treats any 401 as an expired session: notify, clear, send to login.
///
/// Cached reads are dropped with the session; a soft navigation keeps the
/// page alive, so nothing else would reset them before the next login.
pub struct SessionExpiry {
    session: CredentialStore,
    cache: QueryCache,
    redirect: Redirector,
    notifier: Arc<dyn Notifier>,
    login_path: String,
    mode: NavMode,
}

impl SessionExpiry {
    #[must_use]
    pub fn new(
        session: CredentialStore,
        cache: QueryCache,
        redirect: Redirector,
        notifier: Arc<dyn Notifier>,
        login_path: impl Into<String>,
        mode: NavMode,
    ) -> Self {
        Self { session, cache, redirect, notifier, login_path: login_path.into(), mode }
    }
}

impl ResponseInterceptor for SessionExpiry {
    fn on_response(&self, request: &ApiRequest, response: &ApiResponse) {
        if response.status != 401 {
            return;
        }
        leptos::logging::warn!(
            "{} {} returned 401; clearing session",
            request.method.as_str(),
            request.path
        );
        self.notifier.notify(Toast::error(SESSION_EXPIRED_MESSAGE));
        self.session.clear_user();
        self.cache.clear();
        self.redirect.navigate(&self.login_path, self.mode);
    }
}

/// Shared HTTP client. Clones share transport and interceptors.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.config.api_url)
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client without interceptors.
    pub fn new(config: Arc<ClientConfig>, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport, request_interceptors: Vec::new(), response_interceptors: Vec::new() }
    }

    #[must_use]
    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    #[must_use]
    pub fn with_response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Install bearer-token attachment and 401 session expiry.
    #[must_use]
    pub fn with_session_handling(
        self,
        session: &CredentialStore,
        cache: &QueryCache,
        redirect: &Redirector,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let login_path = self.config.login_path.clone();
        let mode = self.config.expiry_navigation;
        self.with_request_interceptor(BearerAuth::new(session.clone()))
            .with_response_interceptor(SessionExpiry::new(
                session.clone(),
                cache.clone(),
                redirect.clone(),
                notifier,
                login_path,
                mode,
            ))
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request through the interceptor chain.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] / [`ApiError::Timeout`] when no response arrived
    /// - [`ApiError::Unauthorized`] on 401, after the session was torn down
    /// - [`ApiError::Status`] on any other non-2xx status
    pub async fn send(&self, mut request: ApiRequest) -> Result<ApiResponse, ApiError> {
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut request);
        }

        let url = self.config.endpoint(&request.path);
        let response = self.transport.send(&url, &request).await?;

        for interceptor in &self.response_interceptors {
            interceptor.on_response(&request, &response);
        }

        if response.is_success() {
            Ok(response)
        } else if response.status == 401 {
            Err(ApiError::Unauthorized)
        } else {
            Err(ApiError::Status { status: response.status, message: extract_server_message(&response.body) })
        }
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Decode`] for unexpected bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Get, path)).await?.json()
    }

    /// `POST` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::Post, path, body).await
    }

    /// `PUT` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::Put, path, body).await
    }

    /// `PATCH` a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(Method::Patch, path, body).await
    }

    /// `DELETE` a resource and decode the confirmation body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(ApiRequest::new(Method::Delete, path)).await?.json()
    }

    async fn send_with_body<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.send(ApiRequest::new(method, path).with_body(body))
            .await?
            .json()
    }
}
