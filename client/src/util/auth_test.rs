use super::*;
use crate::session::UserProfile;

#[test]
fn should_redirect_unauth_when_session_missing() {
    assert!(should_redirect_unauth(None, "/dashboard", "/auth/login"));
}

#[test]
fn should_not_redirect_on_the_login_page_itself() {
    assert!(!should_redirect_unauth(None, "/auth/login", "/auth/login"));
    assert!(!should_redirect_unauth(None, "/auth/login/", "/auth/login"));
}

#[test]
fn should_not_redirect_when_session_exists() {
    let session = Session::new("T1", UserProfile::with_id("u1"));
    assert!(!should_redirect_unauth(Some(&session), "/dashboard", "/auth/login"));
}
