//! Keyed cache of read results with prefix invalidation.
//!
//! DESIGN
//! ======
//! Keys are ordered segment lists (`["tenant", "<id>"]`). Invalidating a key
//! marks it and every key it prefixes as stale, so `["tenants"]` covers all
//! per-subscription tenant lists. Stale entries are refetched on next read.
//! A single change listener (last write wins) lets the view layer bump a
//! revision signal and re-run visible queries.

#[cfg(test)]
#[path = "query_cache_test.rs"]
mod query_cache_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Hierarchical cache key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Whether `self` is a prefix of (or equal to) `other`.
    #[must_use]
    pub fn covers(&self, other: &QueryKey) -> bool {
        other.0.len() >= self.0.len() && other.0.iter().zip(&self.0).all(|(a, b)| a == b)
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

#[derive(Debug)]
struct Entry {
    value: serde_json::Value,
    stale: bool,
}

type ChangeListener = Arc<dyn Fn() + Send + Sync>;

/// Shared query cache. Clones observe the same entries.
#[derive(Clone, Default)]
pub struct QueryCache {
    entries: Arc<Mutex<HashMap<QueryKey, Entry>>>,
    listener: Arc<RwLock<Option<ChangeListener>>>,
}

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.entries.lock().unwrap_or_else(PoisonError::into_inner).len();
        f.debug_struct("QueryCache").field("entries", &len).finish_non_exhaustive()
    }
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh value for `key`, if cached and not invalidated.
    #[must_use]
    pub fn get(&self, key: &QueryKey) -> Option<serde_json::Value> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).filter(|e| !e.stale).map(|e| e.value.clone())
    }

    pub fn put(&self, key: QueryKey, value: serde_json::Value) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Entry { value, stale: false });
    }

    #[must_use]
    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .is_some_and(|e| e.stale)
    }

    /// Mark every entry under `prefix` stale and notify the listener.
    pub fn invalidate(&self, prefix: &QueryKey) {
        let marked = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            let mut marked = 0_usize;
            for (key, entry) in entries.iter_mut() {
                if prefix.covers(key) {
                    entry.stale = true;
                    marked += 1;
                }
            }
            marked
        };
        leptos::logging::log!("invalidated {marked} cached queries under {prefix}");
        self.emit_change();
    }

    /// Drop every entry and notify the listener.
    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
        self.emit_change();
    }

    /// Install the change listener. Last write wins.
    pub fn set_change_listener(&self, listener: impl Fn() + Send + Sync + 'static) {
        *self.listener.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(listener));
    }

    fn emit_change(&self) {
        let listener = self.listener.read().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(listener) = listener {
            listener();
        }
    }
}
