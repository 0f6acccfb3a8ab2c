//! The current user's subscription.

#[cfg(test)]
#[path = "subscriptions_test.rs"]
mod subscriptions_test;

use super::AppContext;
use super::query::{QueryState, QueryTarget, fetch_query};
use crate::net::api;
use crate::net::types::Subscription;
use crate::state::query_cache::QueryKey;

pub fn current_query() -> QueryTarget {
    QueryTarget { key: QueryKey::new(["subscription"]), path: api::SUBSCRIPTION_VIEW.to_owned() }
}

/// Subscription of the logged-in user. `Idle` while logged out.
pub async fn current(ctx: &AppContext) -> QueryState<Subscription> {
    if !ctx.session.is_authenticated() {
        return QueryState::Idle;
    }
    fetch_query(ctx, &current_query()).await.into()
}
