use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::*;

#[test]
fn covers_matches_prefixes_only() {
    let tenants = QueryKey::new(["tenants"]);
    assert!(tenants.covers(&QueryKey::new(["tenants"])));
    assert!(tenants.covers(&QueryKey::new(["tenants", "sub-1"])));
    assert!(!tenants.covers(&QueryKey::new(["tenant", "t1"])));
    assert!(!QueryKey::new(["tenants", "sub-1"]).covers(&tenants));
}

#[test]
fn display_joins_segments() {
    assert_eq!(QueryKey::new(["tenant", "t1"]).to_string(), "tenant/t1");
}

#[test]
fn get_returns_fresh_values() {
    let cache = QueryCache::new();
    let key = QueryKey::new(["tenants", "s1"]);
    assert_eq!(cache.get(&key), None);
    cache.put(key.clone(), json!([1, 2]));
    assert_eq!(cache.get(&key), Some(json!([1, 2])));
}

#[test]
fn invalidate_marks_prefixed_entries_stale() {
    let cache = QueryCache::new();
    let list = QueryKey::new(["tenants", "s1"]);
    let detail = QueryKey::new(["tenant", "t1"]);
    cache.put(list.clone(), json!([]));
    cache.put(detail.clone(), json!({}));

    cache.invalidate(&QueryKey::new(["tenants"]));

    assert!(cache.is_stale(&list));
    assert_eq!(cache.get(&list), None);
    assert!(!cache.is_stale(&detail));
    assert_eq!(cache.get(&detail), Some(json!({})));
}

#[test]
fn put_after_invalidate_is_fresh_again() {
    let cache = QueryCache::new();
    let key = QueryKey::new(["properties", "s1"]);
    cache.put(key.clone(), json!([]));
    cache.invalidate(&key);
    cache.put(key.clone(), json!([{ "id": "p1" }]));
    assert!(!cache.is_stale(&key));
}

#[test]
fn listener_fires_on_invalidate_and_clear() {
    let cache = QueryCache::new();
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    cache.set_change_listener(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    cache.invalidate(&QueryKey::new(["tenants"]));
    cache.clear();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn clear_drops_everything() {
    let cache = QueryCache::new();
    let key = QueryKey::new(["users", "s1"]);
    cache.put(key.clone(), json!([]));
    cache.clear();
    assert_eq!(cache.get(&key), None);
    assert!(!cache.is_stale(&key));
}
