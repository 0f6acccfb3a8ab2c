//! Mutations with the standard outcome side effects.
//!
//! DESIGN
//! ======
//! Every entity mutation follows the same contract, so entity modules only
//! describe it with a [`MutationSpec`] and hand the HTTP future to
//! [`run_mutation`]:
//!
//! - success: invalidate the listed query keys, optionally navigate to a
//!   follow-up view, then show the fixed success toast
//! - failure: show one error toast (server message, else the error's own
//!   message, else the fixed fallback) and return the error; 401 shows
//!   nothing here because the session-expiry interceptor already did

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use std::future::Future;

use super::AppContext;
use crate::error::ApiError;
use crate::state::query_cache::QueryKey;
use crate::state::toasts::{Notifier, Toast};

/// Parameters of one mutation's side effects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationSpec {
    pub invalidates: Vec<QueryKey>,
    pub success_message: String,
    pub error_fallback: String,
    pub redirect_to: Option<String>,
}

impl MutationSpec {
    pub fn new(success_message: impl Into<String>, error_fallback: impl Into<String>) -> Self {
        Self {
            invalidates: Vec::new(),
            success_message: success_message.into(),
            error_fallback: error_fallback.into(),
            redirect_to: None,
        }
    }

    #[must_use]
    pub fn invalidating(mut self, key: QueryKey) -> Self {
        self.invalidates.push(key);
        self
    }

    #[must_use]
    pub fn then_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = Some(path.into());
        self
    }
}

/// Await `operation` and apply the side effects in `spec` to its outcome.
///
/// # Errors
///
/// Returns the operation's error unchanged after reporting it.
pub async fn run_mutation<T, F>(ctx: &AppContext, spec: &MutationSpec, operation: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    match operation.await {
        Ok(value) => {
            for key in &spec.invalidates {
                ctx.cache.invalidate(key);
            }
            if let Some(path) = &spec.redirect_to {
                ctx.redirect.redirect(path);
            }
            ctx.notifier.notify(Toast::success(spec.success_message.clone()));
            Ok(value)
        }
        Err(err) => {
            report_failure(ctx.notifier.as_ref(), &err, &spec.error_fallback);
            Err(err)
        }
    }
}

/// Show the error toast for a failed operation, unless it was a 401.
pub fn report_failure(notifier: &dyn Notifier, err: &ApiError, fallback: &str) {
    match err.user_message(fallback) {
        Some(message) => {
            leptos::logging::warn!("operation failed: {err}");
            notifier.notify(Toast::error(message));
        }
        None => leptos::logging::log!("suppressing error toast for handled 401"),
    }
}
