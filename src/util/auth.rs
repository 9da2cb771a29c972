//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::session::{AuthState, AuthStatus};

/// Redirect only once startup has resolved the session to logged out.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.status == AuthStatus::Unauthenticated
}

/// Redirect to `login_path` whenever the session is known to be logged out.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, login_path: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(&login_path, NavigateOptions::default());
        }
    });
}
