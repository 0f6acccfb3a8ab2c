//! Login, signup, invite acceptance and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only operations that create a session. Each response is
//! validated into a [`Session`] before it is stored; a malformed body fails
//! the operation and leaves the credential store untouched.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::AppContext;
use super::mutation::{MutationSpec, run_mutation};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{AcceptInviteInput, LoginInput, SignupInput};
use crate::session::Session;
use crate::state::toasts::Toast;

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const LOGIN_FALLBACK: &str = "An error occured trying to log in";
pub const SIGNUP_SUCCESS: &str = "Account created successfully";
pub const SIGNUP_FALLBACK: &str = "An error occured trying to create account";
pub const INVITE_ACCEPT_SUCCESS: &str = "Invite accepted";
pub const INVITE_ACCEPT_FALLBACK: &str = "An error occured trying to accept invite";
pub const LOGOUT_MESSAGE: &str = "Logged out";

/// `POST /v1/auth/login`, store the session, go to the dashboard.
///
/// # Errors
///
/// Returns the client error, or [`ApiError::InvalidSession`] for a
/// malformed response.
pub async fn login(ctx: &AppContext, input: &LoginInput) -> Result<Session, ApiError> {
    let spec = MutationSpec::new(LOGIN_SUCCESS, LOGIN_FALLBACK).then_redirect(ctx.config().home_path.clone());
    run_mutation(ctx, &spec, establish(ctx, api::LOGIN.to_owned(), input)).await
}

/// `POST /v1/auth/signup`, store the session, go to the dashboard.
///
/// # Errors
///
/// Same as [`login`].
pub async fn signup(ctx: &AppContext, input: &SignupInput) -> Result<Session, ApiError> {
    let spec = MutationSpec::new(SIGNUP_SUCCESS, SIGNUP_FALLBACK).then_redirect(ctx.config().home_path.clone());
    run_mutation(ctx, &spec, establish(ctx, api::SIGNUP.to_owned(), input)).await
}

/// `POST /v1/invite/accept/:token`, store the session, go to the dashboard.
///
/// # Errors
///
/// Same as [`login`].
pub async fn accept_invite(ctx: &AppContext, token: &str, input: &AcceptInviteInput) -> Result<Session, ApiError> {
    let spec = MutationSpec::new(INVITE_ACCEPT_SUCCESS, INVITE_ACCEPT_FALLBACK)
        .then_redirect(ctx.config().home_path.clone());
    run_mutation(ctx, &spec, establish(ctx, api::accept_invite(token), input)).await
}

/// Drop the session and every cached read, then return to the login page.
pub fn logout(ctx: &AppContext) {
    ctx.session.clear_user();
    ctx.cache.clear();
    ctx.redirect.redirect(&ctx.config().login_path);
    ctx.notifier.notify(Toast::success(LOGOUT_MESSAGE));
}

async fn establish<B>(ctx: &AppContext, path: String, body: &B) -> Result<Session, ApiError>
where
    B: serde::Serialize + ?Sized,
{
    let raw: serde_json::Value = ctx.api.post_json(&path, body).await?;
    let session = Session::from_response(raw)?;
    // Reads cached under the previous identity must not leak into this one.
    ctx.cache.clear();
    ctx.session.set_user(session.clone());
    leptos::logging::log!("session established for user {}", session.user.id);
    Ok(session)
}
