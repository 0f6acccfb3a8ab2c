//! Navigation indirection for code outside the view tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP layer must send users to the login page on session expiry, but
//! the router only exists inside the component tree. The app binds the
//! router's navigate function here at bootstrap; interceptors call through
//! this handle without depending on `leptos_router`.
//!
//! Two modes exist. `Soft` goes through the bound router delegate and is
//! the authoritative path. `Hard` performs a full page load via
//! `window.location` and is used only when explicitly requested or when no
//! router delegate has been bound yet.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod tests;

use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock};

/// A navigate-to-path function.
pub type NavigateFn = Arc<dyn Fn(&str) + Send + Sync>;

/// How a navigation request reaches its target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavMode {
    /// In-app router navigation.
    #[default]
    Soft,
    /// Full browser page load.
    Hard,
}

impl FromStr for NavMode {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "soft" => Ok(Self::Soft),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

struct Delegates {
    soft: Option<NavigateFn>,
    hard: NavigateFn,
}

/// Process-wide navigation handle. Clones share the same delegates.
#[derive(Clone)]
pub struct Redirector {
    inner: Arc<RwLock<Delegates>>,
}

impl Default for Redirector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Redirector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redirector").field("bound", &self.is_bound()).finish()
    }
}

impl Redirector {
    /// Unbound redirector whose hard mode uses `window.location`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hard_navigator(full_page_navigate)
    }

    /// Unbound redirector with a custom hard-navigation delegate.
    #[must_use]
    pub fn with_hard_navigator(hard: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self { inner: Arc::new(RwLock::new(Delegates { soft: None, hard: Arc::new(hard) })) }
    }

    /// Install the router delegate. Last write wins.
    pub fn set_redirect_function(&self, navigate: impl Fn(&str) + Send + Sync + 'static) {
        let mut delegates = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        delegates.soft = Some(Arc::new(navigate));
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .soft
            .is_some()
    }

    /// Navigate through the router delegate.
    ///
    /// Before a delegate is bound this only logs a warning.
    pub fn redirect(&self, path: &str) {
        match self.soft() {
            Some(navigate) => navigate(path),
            None => leptos::logging::warn!("redirect to {path} dropped: no redirect function bound"),
        }
    }

    /// Navigate with an explicit mode.
    ///
    /// `Soft` falls back to a full page load only while no router delegate
    /// is bound.
    pub fn navigate(&self, path: &str, mode: NavMode) {
        match (mode, self.soft()) {
            (NavMode::Soft, Some(navigate)) => navigate(path),
            (NavMode::Soft, None) | (NavMode::Hard, _) => self.hard()(path),
        }
    }

    // Delegates are cloned out so a delegate may rebind without deadlocking.
    fn soft(&self) -> Option<NavigateFn> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .soft
            .clone()
    }

    fn hard(&self) -> NavigateFn {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .hard
            .clone()
    }
}

fn full_page_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::warn!("full page navigation to {path} unavailable outside the browser");
    }
}
