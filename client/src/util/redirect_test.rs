use std::sync::Mutex;

use super::*;

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) + Send + Sync + 'static) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    (calls, move |path: &str| sink.lock().unwrap().push(path.to_owned()))
}

#[test]
fn redirect_before_binding_is_a_noop() {
    let (hard_calls, hard) = recorder();
    let redirector = Redirector::with_hard_navigator(hard);
    assert!(!redirector.is_bound());
    redirector.redirect("/auth/login");
    assert!(hard_calls.lock().unwrap().is_empty());
}

#[test]
fn redirect_after_binding_calls_delegate_once() {
    let redirector = Redirector::with_hard_navigator(|_| {});
    let (calls, navigate) = recorder();
    redirector.set_redirect_function(navigate);
    redirector.redirect("/dashboard");
    assert_eq!(*calls.lock().unwrap(), vec!["/dashboard".to_owned()]);
}

#[test]
fn rebinding_replaces_delegate() {
    let redirector = Redirector::with_hard_navigator(|_| {});
    let (first_calls, first) = recorder();
    let (second_calls, second) = recorder();
    redirector.set_redirect_function(first);
    redirector.set_redirect_function(second);
    redirector.redirect("/tenants");
    assert!(first_calls.lock().unwrap().is_empty());
    assert_eq!(*second_calls.lock().unwrap(), vec!["/tenants".to_owned()]);
}

#[test]
fn clones_share_delegates() {
    let redirector = Redirector::with_hard_navigator(|_| {});
    let handle = redirector.clone();
    let (calls, navigate) = recorder();
    redirector.set_redirect_function(navigate);
    assert!(handle.is_bound());
    handle.redirect("/properties");
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn soft_navigation_falls_back_to_hard_when_unbound() {
    let (hard_calls, hard) = recorder();
    let redirector = Redirector::with_hard_navigator(hard);
    redirector.navigate("/auth/login", NavMode::Soft);
    assert_eq!(*hard_calls.lock().unwrap(), vec!["/auth/login".to_owned()]);
}

#[test]
fn soft_navigation_uses_delegate_when_bound() {
    let (hard_calls, hard) = recorder();
    let redirector = Redirector::with_hard_navigator(hard);
    let (soft_calls, soft) = recorder();
    redirector.set_redirect_function(soft);
    redirector.navigate("/auth/login", NavMode::Soft);
    assert_eq!(soft_calls.lock().unwrap().len(), 1);
    assert!(hard_calls.lock().unwrap().is_empty());
}

#[test]
fn hard_navigation_skips_delegate() {
    let (hard_calls, hard) = recorder();
    let redirector = Redirector::with_hard_navigator(hard);
    let (soft_calls, soft) = recorder();
    redirector.set_redirect_function(soft);
    redirector.navigate("/auth/login", NavMode::Hard);
    assert!(soft_calls.lock().unwrap().is_empty());
    assert_eq!(*hard_calls.lock().unwrap(), vec!["/auth/login".to_owned()]);
}

#[test]
fn nav_mode_parses_case_insensitively() {
    assert_eq!("soft".parse::<NavMode>(), Ok(NavMode::Soft));
    assert_eq!(" HARD ".parse::<NavMode>(), Ok(NavMode::Hard));
    assert_eq!("both".parse::<NavMode>(), Err(()));
}
