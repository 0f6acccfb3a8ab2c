use serde_json::json;

use super::*;
use crate::session::storage::MemoryStorage;

const KEY: &str = "rentdesk.session";

fn open(storage: &MemoryStorage) -> CredentialStore {
    CredentialStore::restore(Arc::new(storage.clone()), KEY)
}

fn abc_session() -> Session {
    Session::new("abc", UserProfile::with_id("1"))
}

#[test]
fn new_store_is_empty() {
    let store = open(&MemoryStorage::new());
    assert!(!store.is_authenticated());
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);
}

#[test]
fn set_user_exposes_token_and_user() {
    let store = open(&MemoryStorage::new());
    store.set_user(abc_session());
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("abc"));
    assert_eq!(store.user(), Some(UserProfile::with_id("1")));
}

#[test]
fn set_user_survives_reload() {
    let storage = MemoryStorage::new();
    open(&storage).set_user(abc_session());

    let reloaded = open(&storage);
    assert_eq!(reloaded.token().as_deref(), Some("abc"));
    assert_eq!(
        serde_json::to_value(reloaded.user().unwrap()).unwrap(),
        json!({ "id": "1" })
    );
}

#[test]
fn set_user_writes_token_user_shape() {
    let storage = MemoryStorage::new();
    open(&storage).set_user(abc_session());
    let raw: serde_json::Value = serde_json::from_str(&storage.load(KEY).unwrap()).unwrap();
    assert_eq!(raw, json!({ "token": "abc", "user": { "id": "1" } }));
}

#[test]
fn set_user_replaces_previous_session() {
    let store = open(&MemoryStorage::new());
    store.set_user(abc_session());
    store.set_user(Session::new("def", UserProfile::with_id("2")));
    assert_eq!(store.token().as_deref(), Some("def"));
    assert_eq!(store.user().map(|u| u.id), Some("2".to_owned()));
}

#[test]
fn clear_user_empties_store_and_storage() {
    let storage = MemoryStorage::new();
    let store = open(&storage);
    store.set_user(abc_session());
    store.clear_user();
    assert_eq!(store.token(), None);
    assert_eq!(store.user(), None);

    let raw: serde_json::Value = serde_json::from_str(&storage.load(KEY).unwrap()).unwrap();
    assert_eq!(raw, json!({ "token": null, "user": null }));
    assert!(!open(&storage).is_authenticated());
}

#[test]
fn clear_user_on_empty_store_is_harmless() {
    let store = open(&MemoryStorage::new());
    store.clear_user();
    store.clear_user();
    assert!(store.session().is_none());
}

#[test]
fn clones_share_state() {
    let store = open(&MemoryStorage::new());
    let handle = store.clone();
    store.set_user(abc_session());
    assert_eq!(handle.token().as_deref(), Some("abc"));
    handle.clear_user();
    assert!(!store.is_authenticated());
}

#[test]
fn restore_discards_corrupt_entry() {
    let storage = MemoryStorage::new();
    storage.save(KEY, "{not json");
    let store = open(&storage);
    assert!(!store.is_authenticated());
    assert_eq!(storage.load(KEY), None);
}

#[test]
fn restore_ignores_half_session() {
    let storage = MemoryStorage::new();
    storage.save(KEY, r#"{"token":"abc","user":null}"#);
    assert!(!open(&storage).is_authenticated());
}
