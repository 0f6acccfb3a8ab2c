//! Tenant reads and mutations.

#[cfg(test)]
#[path = "tenants_test.rs"]
mod tenants_test;

use super::AppContext;
use super::mutation::{MutationSpec, run_mutation};
use super::query::{QueryState, QueryTarget, read_detail, read_list};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Ack, Tenant, TenantInput};
use crate::state::query_cache::QueryKey;

pub fn tenants_key() -> QueryKey {
    QueryKey::new(["tenants"])
}

pub fn tenant_key(tenant_id: &str) -> QueryKey {
    QueryKey::new(["tenant", tenant_id])
}

pub fn list_query(subscription_id: &str) -> QueryTarget {
    QueryTarget {
        key: QueryKey::new(["tenants", subscription_id]),
        path: api::tenants_for(subscription_id),
    }
}

pub fn detail_query(tenant_id: &str) -> QueryTarget {
    QueryTarget { key: tenant_key(tenant_id), path: api::tenant(tenant_id) }
}

/// Tenants of a subscription. `Idle` until the subscription id is known.
pub async fn list(ctx: &AppContext, subscription_id: Option<&str>) -> QueryState<Vec<Tenant>> {
    read_list(ctx, subscription_id, list_query).await
}

pub async fn detail(ctx: &AppContext, tenant_id: Option<&str>) -> QueryState<Tenant> {
    read_detail(ctx, tenant_id, detail_query).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn add(ctx: &AppContext, input: &TenantInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Tenant added successfully", "An error occured trying to create tenant")
        .invalidating(tenants_key());
    run_mutation(ctx, &spec, ctx.api.post_json(api::TENANT_ADD, input)).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn edit(ctx: &AppContext, tenant_id: &str, input: &TenantInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Tenant updated successfully", "An error occured trying to update tenant")
        .invalidating(tenants_key())
        .invalidating(tenant_key(tenant_id));
    run_mutation(ctx, &spec, ctx.api.put_json(&api::tenant_edit(tenant_id), input)).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn delete(ctx: &AppContext, tenant_id: &str) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Tenant deleted successfully", "An error occured trying to delete tenant")
        .invalidating(tenants_key());
    run_mutation(ctx, &spec, ctx.api.delete_json(&api::tenant_delete(tenant_id))).await
}
