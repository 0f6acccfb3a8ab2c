use super::*;
use crate::error::ApiError;

#[test]
fn list_status_describes_each_state() {
    assert_eq!(list_status::<u8>(&QueryState::Idle), None);
    assert_eq!(list_status::<u8>(&QueryState::Loading), Some("Loading...".to_owned()));
    assert_eq!(list_status::<u8>(&QueryState::Ready(vec![])), Some("Nothing here yet.".to_owned()));
    assert_eq!(list_status(&QueryState::Ready(vec![1])), None);
}

#[test]
fn list_status_prefers_server_message() {
    let failed = QueryState::<Vec<u8>>::Failed(ApiError::Status {
        status: 403,
        message: Some("Subscription inactive".to_owned()),
    });
    assert_eq!(list_status(&failed), Some("Subscription inactive".to_owned()));
}

#[test]
fn list_status_is_silent_for_unauthorized() {
    let failed = QueryState::<Vec<u8>>::Failed(ApiError::Unauthorized);
    assert_eq!(list_status(&failed), None);
}

#[test]
fn tenant_input_requires_names_and_subscription() {
    assert_eq!(tenant_input(" ", "Doe", Some("s1".to_owned())), None);
    assert_eq!(tenant_input("Jane", "Doe", None), None);

    let input = tenant_input(" Jane ", "Doe", Some("s1".to_owned())).unwrap();
    assert_eq!(input.first_name, "Jane");
    assert_eq!(input.subscription_id.as_deref(), Some("s1"));
    assert_eq!(input.email, None);
}
