//! Credential store: who is logged in, and with which token.
//!
//! DESIGN
//! ======
//! `set_user` and `clear_user` are the only mutators and each one is
//! mirrored to durable storage under a fixed key before returning. Reads
//! are synchronous snapshots so the request interceptor always sees the
//! token current at send time.

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;

use std::sync::{Arc, PoisonError, RwLock};

use super::storage::{SessionStorage, save_json};
use super::types::{Session, StoredSession, UserProfile};

/// Shared handle to the current session. Clones observe the same state.
#[derive(Clone)]
pub struct CredentialStore {
    session: Arc<RwLock<Option<Session>>>,
    storage: Arc<dyn SessionStorage>,
    key: Arc<str>,
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore")
            .field("key", &self.key)
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl CredentialStore {
    /// Open the store, restoring any session persisted under `key`.
    pub fn restore(storage: Arc<dyn SessionStorage>, key: &str) -> Self {
        let session = match storage.load(key) {
            None => None,
            Some(raw) => match serde_json::from_str::<StoredSession>(&raw) {
                Ok(stored) => stored.into_session(),
                Err(e) => {
                    leptos::logging::warn!("dropping unreadable session entry {key}: {e}");
                    storage.remove(key);
                    None
                }
            },
        };
        Self { session: Arc::new(RwLock::new(session)), storage, key: Arc::from(key) }
    }

    /// Replace the whole session record.
    pub fn set_user(&self, session: Session) {
        let mut current = self.session.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(session);
        self.persist(current.as_ref());
    }

    /// Reset token and user to absent.
    pub fn clear_user(&self) {
        let mut current = self.session.write().unwrap_or_else(PoisonError::into_inner);
        *current = None;
        self.persist(None);
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn user(&self) -> Option<UserProfile> {
        self.read().as_ref().map(|s| s.user.clone())
    }

    #[must_use]
    pub fn session(&self) -> Option<Session> {
        self.read().clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, session: Option<&Session>) {
        save_json(self.storage.as_ref(), &self.key, &StoredSession::from_session(session));
    }
}
