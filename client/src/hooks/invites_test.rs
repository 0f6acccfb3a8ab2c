use serde_json::json;

use super::*;
use crate::hooks::test_helpers::Harness;
use crate::net::http::Method;
use crate::state::toasts::ToastKind;

#[tokio::test]
async fn send_invalidates_invites() {
    let h = Harness::new().logged_in("T1");
    h.ctx.cache.put(list_query("s1").key, json!([]));
    h.transport.respond(201, json!({ "id": "i1" }));
    let input = InviteInput { email: "new@example.com".to_owned(), role: Some("manager".to_owned()) };

    send(&h.ctx, &input).await.unwrap();

    assert_eq!(h.transport.last_request().path, "/v1/invite/send");
    assert!(h.ctx.cache.is_stale(&list_query("s1").key));
    assert_eq!(h.notifier.messages(ToastKind::Success), vec!["Invite sent successfully".to_owned()]);
}

#[tokio::test]
async fn revoke_uses_delete() {
    let h = Harness::new().logged_in("T1");
    h.transport.respond(204, json!(null));

    revoke(&h.ctx, "i1").await.unwrap();

    let sent = h.transport.last_request();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.path, "/v1/invite/delete/i1");
    assert_eq!(h.notifier.messages(ToastKind::Success), vec!["Invite revoked".to_owned()]);
}

#[tokio::test]
async fn send_failure_reports_error_field() {
    let h = Harness::new().logged_in("T1");
    h.transport.respond(422, json!({ "error": "Invite already pending" }));
    let input = InviteInput { email: "dup@example.com".to_owned(), role: None };

    send(&h.ctx, &input).await.unwrap_err();

    assert_eq!(h.notifier.messages(ToastKind::Error), vec!["Invite already pending".to_owned()]);
}
