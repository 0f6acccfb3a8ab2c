//! Subscription members and the current user's profile.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::AppContext;
use super::mutation::{MutationSpec, run_mutation};
use super::query::{QueryState, QueryTarget, read_list};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Ack, ProfileInput, User};
use crate::state::query_cache::QueryKey;

pub fn users_key() -> QueryKey {
    QueryKey::new(["users"])
}

pub fn list_query(subscription_id: &str) -> QueryTarget {
    QueryTarget { key: QueryKey::new(["users", subscription_id]), path: api::users_for(subscription_id) }
}

pub async fn list(ctx: &AppContext, subscription_id: Option<&str>) -> QueryState<Vec<User>> {
    read_list(ctx, subscription_id, list_query).await
}

/// Update the logged-in user's profile.
///
/// The stored session is not rewritten; it picks up the new profile on the
/// next login.
///
/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn update_profile(ctx: &AppContext, input: &ProfileInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Profile updated successfully", "An error occured trying to update profile")
        .invalidating(users_key());
    run_mutation(ctx, &spec, ctx.api.put_json(api::USER_UPDATE, input)).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn delete(ctx: &AppContext, user_id: &str) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("User deleted successfully", "An error occured trying to delete user")
        .invalidating(users_key());
    run_mutation(ctx, &spec, ctx.api.delete_json(&api::user_delete(user_id))).await
}
