//! Passive reads backed by the query cache.
//!
//! Reads never notify or navigate; they only expose loading, error and data
//! states. A detail read whose id is absent or blank stays `Idle` and sends
//! nothing.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use super::AppContext;
use crate::error::ApiError;
use crate::state::query_cache::QueryKey;

/// Observable state of one read.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryState<T> {
    /// Not attempted (missing key or not started).
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> QueryState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for QueryState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// Where a read is cached and fetched from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryTarget {
    pub key: QueryKey,
    pub path: String,
}

/// Serve a fresh cached value, else fetch and cache.
///
/// # Errors
///
/// Returns the client error when the fetch fails or the body does not
/// decode as `T`.
pub async fn fetch_query<T>(ctx: &AppContext, target: &QueryTarget) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if let Some(cached) = ctx.cache.get(&target.key) {
        match serde_json::from_value(cached) {
            Ok(value) => return Ok(value),
            Err(e) => leptos::logging::warn!("cached {} no longer decodes: {e}", target.key),
        }
    }
    let raw: serde_json::Value = ctx.api.get_json(&target.path).await?;
    let value = serde_json::from_value(raw.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
    ctx.cache.put(target.key.clone(), raw);
    Ok(value)
}

/// Read a collection scoped by an optional owner id (subscription or
/// tenant). Absent or blank scopes yield `Idle` without touching the network.
pub async fn read_list<T>(
    ctx: &AppContext,
    scope: Option<&str>,
    target: impl FnOnce(&str) -> QueryTarget,
) -> QueryState<T>
where
    T: DeserializeOwned,
{
    read_keyed(ctx, scope, target).await
}

/// Read one record. Absent or blank ids yield `Idle` without touching the
/// network.
pub async fn read_detail<T>(
    ctx: &AppContext,
    id: Option<&str>,
    target: impl FnOnce(&str) -> QueryTarget,
) -> QueryState<T>
where
    T: DeserializeOwned,
{
    read_keyed(ctx, id, target).await
}

async fn read_keyed<T>(ctx: &AppContext, id: Option<&str>, target: impl FnOnce(&str) -> QueryTarget) -> QueryState<T>
where
    T: DeserializeOwned,
{
    match present(id) {
        Some(id) => fetch_query(ctx, &target(id)).await.into(),
        None => QueryState::Idle,
    }
}

fn present(id: Option<&str>) -> Option<&str> {
    id.map(str::trim).filter(|id| !id.is_empty())
}

/// Revision counter bumped whenever the query cache changes.
#[derive(Clone, Copy)]
pub struct CacheRevision(pub RwSignal<u64>);

impl CacheRevision {
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Bump the revision so mounted queries re-run.
    pub fn bump(self) {
        let _ = self.0.try_update(|r| *r += 1);
    }
}

impl Default for CacheRevision {
    fn default() -> Self {
        Self::new()
    }
}

/// Reactive read for views.
///
/// Re-runs whenever `target` changes or the cache is invalidated. While a
/// refetch is in flight the previous data stays visible.
pub fn use_query<T, F>(target: F) -> RwSignal<QueryState<T>>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
    F: Fn() -> Option<QueryTarget> + 'static,
{
    let ctx = super::use_app_context();
    let revision = expect_context::<CacheRevision>();
    let state = RwSignal::new(QueryState::<T>::Idle);

    Effect::new(move || {
        revision.0.track();
        let Some(target) = target() else {
            state.set(QueryState::Idle);
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            if state.with_untracked(|s| s.data().is_none()) {
                state.set(QueryState::Loading);
            }
            let ctx = ctx.clone();
            leptos::task::spawn_local(async move {
                let next: QueryState<T> = fetch_query(&ctx, &target).await.into();
                let _ = state.try_set(next);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ctx, target);
        }
    });

    state
}
