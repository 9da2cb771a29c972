use super::*;

#[test]
fn should_redirect_unauth_when_logged_out() {
    assert!(should_redirect_unauth(&AuthState::unauthenticated()));
}

#[test]
fn should_not_redirect_before_startup_check() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_authenticated() {
    assert!(!should_redirect_unauth(&AuthState::authenticated(Some("kim".to_owned()))));
    assert!(!should_redirect_unauth(&AuthState::authenticated(None)));
}
