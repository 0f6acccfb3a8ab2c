//! Property reads and mutations.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use super::AppContext;
use super::mutation::{MutationSpec, run_mutation};
use super::query::{QueryState, QueryTarget, read_detail, read_list};
use crate::error::ApiError;
use crate::net::api;
use crate::net::types::{Ack, Property, PropertyInput};
use crate::state::query_cache::QueryKey;

pub fn properties_key() -> QueryKey {
    QueryKey::new(["properties"])
}

pub fn property_key(property_id: &str) -> QueryKey {
    QueryKey::new(["property", property_id])
}

pub fn list_query(subscription_id: &str) -> QueryTarget {
    QueryTarget {
        key: QueryKey::new(["properties", subscription_id]),
        path: api::properties_for(subscription_id),
    }
}

pub fn detail_query(property_id: &str) -> QueryTarget {
    QueryTarget { key: property_key(property_id), path: api::property(property_id) }
}

pub async fn list(ctx: &AppContext, subscription_id: Option<&str>) -> QueryState<Vec<Property>> {
    read_list(ctx, subscription_id, list_query).await
}

pub async fn detail(ctx: &AppContext, property_id: Option<&str>) -> QueryState<Property> {
    read_detail(ctx, property_id, detail_query).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn add(ctx: &AppContext, input: &PropertyInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Property added successfully", "An error occured trying to create property")
        .invalidating(properties_key());
    run_mutation(ctx, &spec, ctx.api.post_json(api::PROPERTY_ADD, input)).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn edit(ctx: &AppContext, property_id: &str, input: &PropertyInput) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Property updated successfully", "An error occured trying to update property")
        .invalidating(properties_key())
        .invalidating(property_key(property_id));
    run_mutation(ctx, &spec, ctx.api.put_json(&api::property_edit(property_id), input)).await
}

/// # Errors
///
/// Returns the client error after the error toast was shown.
pub async fn delete(ctx: &AppContext, property_id: &str) -> Result<Ack, ApiError> {
    let spec = MutationSpec::new("Property deleted successfully", "An error occured trying to delete property")
        .invalidating(properties_key());
    run_mutation(ctx, &spec, ctx.api.delete_json(&api::property_delete(property_id))).await
}
