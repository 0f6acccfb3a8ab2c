//! Resource hooks: per-entity reads and mutations with standard side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never call the HTTP client directly. They call the functions in
//! these modules, which share one [`AppContext`] built at bootstrap and
//! provided through Leptos context. Tests build their own context with fake
//! transport, storage, notifier and navigation.

pub mod auth;
pub mod invites;
pub mod mutation;
pub mod payments;
pub mod properties;
pub mod query;
pub mod subscriptions;
pub mod tenants;
pub mod users;

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::client::ApiClient;
use crate::net::transport::Transport;
use crate::session::CredentialStore;
use crate::session::storage::SessionStorage;
use crate::state::query_cache::QueryCache;
use crate::state::toasts::Notifier;
use crate::util::redirect::Redirector;

/// Process-wide services shared by views and hooks.
#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub session: CredentialStore,
    pub redirect: Redirector,
    pub cache: QueryCache,
    pub notifier: Arc<dyn Notifier>,
}

impl AppContext {
    /// Wire the pipeline: restore the session, then build a client whose
    /// interceptors share that session, cache, redirector and notifier.
    pub fn new(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        storage: Arc<dyn SessionStorage>,
        redirect: Redirector,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let session = CredentialStore::restore(storage, &config.storage_key);
        let cache = QueryCache::new();
        let api = ApiClient::new(Arc::new(config), transport).with_session_handling(
            &session,
            &cache,
            &redirect,
            notifier.clone(),
        );
        Self { api, session, redirect, cache, notifier }
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        self.api.config()
    }
}

/// Fetch the app context provided by the root component.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
