//! REST endpoint paths of the remote rental API.
//!
//! These are the collaborator contract consumed by the resource hooks; they
//! are relative to the configured API base address. Ids and tokens are
//! percent-encoded so each stays a single path segment.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::borrow::Cow;

pub const LOGIN: &str = "/v1/auth/login";
pub const SIGNUP: &str = "/v1/auth/signup";
pub const PROPERTY_ADD: &str = "/v1/property/add";
pub const TENANT_ADD: &str = "/v1/tenant/add";
pub const PAYMENT_ADD: &str = "/v1/payment/add";
pub const USER_UPDATE: &str = "/v1/user/update";
pub const INVITE_SEND: &str = "/v1/invite/send";
pub const SUBSCRIPTION_VIEW: &str = "/v1/subscription/view";

pub fn accept_invite(token: &str) -> String {
    format!("/v1/invite/accept/{}", segment(token))
}

pub fn properties_for(subscription_id: &str) -> String {
    format!("/v1/property/viewAll/{}", segment(subscription_id))
}

pub fn property(property_id: &str) -> String {
    format!("/v1/property/view/{}", segment(property_id))
}

pub fn property_edit(property_id: &str) -> String {
    format!("/v1/property/edit/{}", segment(property_id))
}

pub fn property_delete(property_id: &str) -> String {
    format!("/v1/property/delete/{}", segment(property_id))
}

pub fn tenants_for(subscription_id: &str) -> String {
    format!("/v1/tenant/viewAll/{}", segment(subscription_id))
}

pub fn tenant(tenant_id: &str) -> String {
    format!("/v1/tenant/view/{}", segment(tenant_id))
}

pub fn tenant_edit(tenant_id: &str) -> String {
    format!("/v1/tenant/edit/{}", segment(tenant_id))
}

pub fn tenant_delete(tenant_id: &str) -> String {
    format!("/v1/tenant/delete/{}", segment(tenant_id))
}

pub fn payments_for(tenant_id: &str) -> String {
    format!("/v1/payment/viewAll/{}", segment(tenant_id))
}

pub fn users_for(subscription_id: &str) -> String {
    format!("/v1/user/viewAll/{}", segment(subscription_id))
}

pub fn user_delete(user_id: &str) -> String {
    format!("/v1/user/delete/{}", segment(user_id))
}

pub fn invites_for(subscription_id: &str) -> String {
    format!("/v1/invite/viewAll/{}", segment(subscription_id))
}

pub fn invite_delete(invite_id: &str) -> String {
    format!("/v1/invite/delete/{}", segment(invite_id))
}

fn segment(raw: &str) -> Cow<'_, str> {
    urlencoding::encode(raw)
}
