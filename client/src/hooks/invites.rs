//! Subscription invitations.

#[cfg(test)]
#[path = "invites_test.rs"]
mod invites_test;

use super::AppContext;
use super::mutation::{MutationSpec, run_mutation};
use super::query::{QueryState, QueryTarget, read_list};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Ack, Invite, InviteInput};
use crate::state::query_cache::QueryKey;

pub fn invites_key() -> QueryKey {
    QueryKey::new(["invites"])
}

pub fn list_query(subscription_id: &str) -> QueryTarget {
    QueryTarget {
        key: QueryKey::new(["invites", subscription_id]),
        path: api::invites_for(subscription_id),
    }
}

pub async fn list(ctx: &AppContext, subscription_id: Option<&str>) -> QueryState<Vec<Invite>> {
    read_list(ctx, subscription_id, list_query).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn send(ctx: &AppContext, input: &InviteInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Invite sent successfully", "An error occured trying to send invite")
        .invalidating(invites_key());
    run_mutation(ctx, &spec, ctx.api.post_json(api::INVITE_SEND, input)).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn revoke(ctx: &AppContext, invite_id: &str) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Invite revoked", "An error occured trying to revoke invite")
        .invalidating(invites_key());
    run_mutation(ctx, &spec, ctx.api.delete_json(&api::invite_delete(invite_id))).await
}
