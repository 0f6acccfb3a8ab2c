use serde_json::json;

use super::*;
use crate::hooks::test_helpers::{Harness, RecordingNotifier};
use crate::net::client::SESSION_EXPIRED_MESSAGE;
use crate::state::toasts::ToastKind;

fn spec() -> MutationSpec {
    MutationSpec::new("Saved", "An error occured trying to save")
        .invalidating(QueryKey::new(["things"]))
        .then_redirect("/things")
}

#[tokio::test]
async fn success_invalidates_redirects_and_notifies() {
    let h = Harness::new();
    let key = QueryKey::new(["things", "s1"]);
    h.ctx.cache.put(key.clone(), json!([]));

    let value = run_mutation(&h.ctx, &spec(), async { Ok::<_, ApiError>(7) }).await.unwrap();

    assert_eq!(value, 7);
    assert!(h.ctx.cache.is_stale(&key));
    assert_eq!(h.soft(), vec!["/things".to_owned()]);
    assert_eq!(h.notifier.messages(ToastKind::Success), vec!["Saved".to_owned()]);
}

#[tokio::test]
async fn success_without_redirect_stays_put() {
    let h = Harness::new();
    let spec = MutationSpec::new("Saved", "fallback");

    run_mutation(&h.ctx, &spec, async { Ok::<_, ApiError>(()) }).await.unwrap();

    assert!(h.soft().is_empty());
    assert_eq!(h.notifier.count(), 1);
}

#[tokio::test]
async fn failure_reports_server_message_and_skips_effects() {
    let h = Harness::new();
    let key = QueryKey::new(["things", "s1"]);
    h.ctx.cache.put(key.clone(), json!([]));
    let err = ApiError::Status { status: 400, message: Some("Name is required".to_owned()) };

    let result: Result<(), _> = run_mutation(&h.ctx, &spec(), async { Err(err.clone()) }).await;

    assert_eq!(result, Err(err));
    assert!(!h.ctx.cache.is_stale(&key));
    assert!(h.soft().is_empty());
    assert_eq!(h.notifier.messages(ToastKind::Error), vec!["Name is required".to_owned()]);
    assert!(h.notifier.messages(ToastKind::Success).is_empty());
}

#[tokio::test]
async fn failure_without_any_message_uses_fallback() {
    let h = Harness::new();
    let result: Result<(), _> =
        run_mutation(&h.ctx, &spec(), async { Err(ApiError::Decode("eof".to_owned())) }).await;

    assert!(result.is_err());
    assert_eq!(
        h.notifier.messages(ToastKind::Error),
        vec!["An error occured trying to save".to_owned()]
    );
}

#[tokio::test]
async fn unauthorized_response_notifies_only_once() {
    let h = Harness::new().logged_in("T1");
    h.transport.respond(401, json!({ "message": "jwt expired" }));
    let api = h.ctx.api.clone();

    let result = run_mutation(&h.ctx, &spec(), async move {
        api.post_json::<_, serde_json::Value>("/v1/things/add", &json!({})).await
    })
    .await;

    assert_eq!(result, Err(ApiError::Unauthorized));
    assert_eq!(h.notifier.messages(ToastKind::Error), vec![SESSION_EXPIRED_MESSAGE.to_owned()]);
    assert_eq!(h.notifier.count(), 1);
    assert_eq!(h.soft(), vec!["/auth/login".to_owned()]);
}

#[test]
fn report_failure_suppresses_unauthorized() {
    let notifier = RecordingNotifier::default();
    report_failure(&notifier, &ApiError::Unauthorized, "fallback");
    assert_eq!(notifier.count(), 0);
    report_failure(&notifier, &ApiError::Transport("Network Error".to_owned()), "fallback");
    assert_eq!(notifier.messages(ToastKind::Error), vec!["Network Error".to_owned()]);
}
