use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_empty() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.timeout_ms, DEFAULT_API_TIMEOUT_MS);
    assert_eq!(cfg.login_path, "/auth/login");
    assert_eq!(cfg.storage_key, SESSION_STORAGE_KEY);
    assert_eq!(cfg.expiry_navigation, NavMode::Soft);
    assert!(cfg.with_credentials);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("RENTDESK_API_URL", "https://api.example.test/"),
        ("RENTDESK_API_TIMEOUT_MS", "2500"),
        ("RENTDESK_LOGIN_PATH", "/signin"),
        ("RENTDESK_HOME_PATH", "/home"),
        ("RENTDESK_EXPIRY_NAVIGATION", "hard"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.timeout(), Duration::from_millis(2500));
    assert_eq!(cfg.login_path, "/signin");
    assert_eq!(cfg.home_path, "/home");
    assert_eq!(cfg.expiry_navigation, NavMode::Hard);
}

#[test]
fn from_lookup_rejects_unparseable_timeout() {
    let err = ClientConfig::from_lookup(lookup_from(&[("RENTDESK_API_TIMEOUT_MS", "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue { key: "RENTDESK_API_TIMEOUT_MS", value: "soon".to_owned() }
    );
}

#[test]
fn from_lookup_blank_timeout_uses_default() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("RENTDESK_API_TIMEOUT_MS", "  ")])).unwrap();
    assert_eq!(cfg.timeout_ms, DEFAULT_API_TIMEOUT_MS);
}

#[test]
fn from_lookup_rejects_unknown_navigation_mode() {
    let err = ClientConfig::from_lookup(lookup_from(&[("RENTDESK_EXPIRY_NAVIGATION", "both")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue { key: "RENTDESK_EXPIRY_NAVIGATION", value: "both".to_owned() }
    );
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.endpoint("/v1/auth/login"), "http://localhost:8000/v1/auth/login");
    assert_eq!(cfg.endpoint("v1/auth/login"), "http://localhost:8000/v1/auth/login");
}
