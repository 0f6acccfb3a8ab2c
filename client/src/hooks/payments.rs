//! Rent payment reads and recording.

#[cfg(test)]
#[path = "payments_test.rs"]
mod payments_test;

use super::AppContext;
use super::mutation::{MutationSpec, run_mutation};
use super::query::{QueryState, QueryTarget, read_list};
use super::tenants::tenant_key;
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Ack, Payment, PaymentInput};
use crate::state::query_cache::QueryKey;

pub fn payments_key() -> QueryKey {
    QueryKey::new(["payments"])
}

pub fn list_query(tenant_id: &str) -> QueryTarget {
    QueryTarget { key: QueryKey::new(["payments", tenant_id]), path: api::payments_for(tenant_id) }
}

/// Payments made by one tenant.
pub async fn list(ctx: &AppContext, tenant_id: Option<&str>) -> QueryState<Vec<Payment>> {
    read_list(ctx, tenant_id, list_query).await
}

/// Record a payment. The paying tenant's detail is refreshed as well since
/// it carries the balance.
///
/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn record(ctx: &AppContext, input: &PaymentInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Payment recorded successfully", "An error occured trying to record payment")
        .invalidating(payments_key())
        .invalidating(tenant_key(&input.tenant_id));
    run_mutation(ctx, &spec, ctx.api.post_json(api::PAYMENT_ADD, input)).await
}
