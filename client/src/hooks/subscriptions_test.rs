use serde_json::json;

use super::*;
use crate::error::ApiError;
use crate::hooks::test_helpers::Harness;

#[tokio::test]
async fn logged_out_is_idle_and_sends_nothing() {
    let h = Harness::new();

    let state = current(&h.ctx).await;

    assert_eq!(state, QueryState::Idle);
    assert_eq!(h.transport.sent_count(), 0);
}

#[tokio::test]
async fn caches_under_subscription_key() {
    let h = Harness::new().logged_in("T1");
    h.transport.respond(
        200,
        json!({ "id": 7, "plan": "basic", "status": "active", "currentPeriodEnd": "2026-11-01" }),
    );

    let first = current(&h.ctx).await;
    let second = current(&h.ctx).await;

    let subscription = first.data().unwrap();
    assert_eq!(subscription.id, "7");
    assert_eq!(subscription.current_period_end.as_deref(), Some("2026-11-01"));
    assert_eq!(first, second);
    assert_eq!(h.transport.sent_count(), 1);
    assert_eq!(h.transport.last_url(), "http://localhost:8000/v1/subscription/view");
    assert!(h.ctx.cache.get(&QueryKey::new(["subscription"])).is_some());
}

#[tokio::test]
async fn failure_is_reported_and_not_cached() {
    let h = Harness::new().logged_in("T1");
    h.transport.respond(403, json!({ "message": "Subscription inactive" }));

    let state = current(&h.ctx).await;

    assert_eq!(
        state.error(),
        Some(&ApiError::Status { status: 403, message: Some("Subscription inactive".to_owned()) })
    );
    assert_eq!(h.ctx.cache.get(&current_query().key), None);
}
