//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::hooks::AppContext;
use crate::session::Session;

/// Whether a protected view at `current_path` should bounce to `login_path`.
pub fn should_redirect_unauth(session: Option<&Session>, current_path: &str, login_path: &str) -> bool {
    session.is_none() && current_path.trim_end_matches('/') != login_path.trim_end_matches('/')
}

/// Redirect to the login path once mounted if no session is present.
pub fn install_unauth_redirect(ctx: &AppContext, current_path: Signal<String>) {
    let ctx = ctx.clone();
    Effect::new(move || {
        let path = current_path.get();
        let session = ctx.session.session();
        let login_path = &ctx.config().login_path;
        if should_redirect_unauth(session.as_ref(), &path, login_path) {
            ctx.redirect.redirect(login_path);
        }
    });
}
