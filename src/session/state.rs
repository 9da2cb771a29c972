//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Session`] is provided once through Leptos context. Route guards read its
//! [`AuthState`] signal to decide between rendering and redirecting; the
//! request pipeline calls [`Session::teardown`] when the backend answers 401.
//!
//! Only login, logout and teardown mutate the credential. Everything else
//! reads.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::logging::warn;
use leptos::prelude::*;

use super::claims;
use super::store::SessionStore;
use crate::config::ClientConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Startup has not inspected the store yet.
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub display_name: Option<String>,
}

impl AuthState {
    pub fn authenticated(display_name: Option<String>) -> Self {
        Self { status: AuthStatus::Authenticated, display_name }
    }

    pub fn unauthenticated() -> Self {
        Self { status: AuthStatus::Unauthenticated, display_name: None }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }
}

/// Browser side effects of a forced logout.
pub trait SessionEffects: Send + Sync {
    /// Tell the user their session ended.
    fn notify_expired(&self);

    /// Hard-navigate to `login_path`, dropping in-flight page state.
    fn redirect_to_login(&self, login_path: &str);
}

/// `window.alert` plus a full `location` change.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEffects;

pub const SESSION_EXPIRED_NOTICE: &str = "Your session has expired. Please sign in again.";

impl SessionEffects for BrowserEffects {
    fn notify_expired(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(SESSION_EXPIRED_NOTICE);
            }
        }
    }

    fn redirect_to_login(&self, login_path: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let location = window.location();
                if location.pathname().is_ok_and(|p| p == login_path) {
                    return;
                }
                let _ = location.set_href(login_path);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = login_path;
        }
    }
}

struct SessionInner {
    store: SessionStore,
    effects: Arc<dyn SessionEffects>,
    state: ArcRwSignal<AuthState>,
    torn_down: AtomicBool,
    login_path: String,
    display_name_claim: String,
}

/// Context object tying the credential store to the reactive auth state.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

impl Session {
    pub fn new(store: SessionStore, effects: Arc<dyn SessionEffects>, config: &ClientConfig) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                store,
                effects,
                state: ArcRwSignal::new(AuthState::default()),
                torn_down: AtomicBool::new(false),
                login_path: config.login_path.clone(),
                display_name_claim: config.display_name_claim.clone(),
            }),
        }
    }

    /// Session over `localStorage` with browser alert/redirect effects.
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(SessionStore::browser(config.storage_key.clone()), Arc::new(BrowserEffects), config)
    }

    /// Resolve `Unknown` from whatever the store holds. Call once at startup.
    pub fn start(&self) {
        self.inner.state.set(self.resolve());
    }

    /// Reactive auth state for views.
    pub fn state(&self) -> ArcRwSignal<AuthState> {
        self.inner.state.clone()
    }

    pub fn snapshot(&self) -> AuthState {
        self.inner.state.get_untracked()
    }

    pub fn credential(&self) -> Option<String> {
        self.inner.store.get()
    }

    pub fn login_path(&self) -> &str {
        &self.inner.login_path
    }

    /// Persist a freshly issued credential and mark the session live.
    ///
    /// The resulting state reflects what the store actually holds, so an
    /// empty credential or a rejected write leaves the session logged out.
    pub fn establish(&self, credential: &str) {
        self.inner.store.clear();
        self.inner.store.set(credential);
        self.inner.torn_down.store(false, Ordering::SeqCst);
        let next = self.resolve();
        if !next.is_authenticated() {
            warn!("login credential was not persisted; staying logged out");
        }
        self.inner.state.set(next);
    }

    /// Explicit user logout. Views handle navigation.
    pub fn logout(&self) {
        self.inner.store.clear();
        self.inner.state.set(AuthState::unauthenticated());
    }

    /// Forced logout after an authorization failure.
    ///
    /// Clears the store, notifies, and redirects to the login page. Only the
    /// first call after a login runs the notice and redirect; later calls just
    /// re-clear the store. Returns whether this call ran the effects.
    pub fn teardown(&self) -> bool {
        self.inner.store.clear();
        if self.inner.torn_down.swap(true, Ordering::SeqCst) {
            return false;
        }
        warn!("authorization rejected; tearing down session");
        self.inner.state.set(AuthState::unauthenticated());
        self.inner.effects.notify_expired();
        self.inner.effects.redirect_to_login(&self.inner.login_path);
        true
    }

    fn resolve(&self) -> AuthState {
        match self.inner.store.get() {
            Some(credential) => AuthState::authenticated(self.project(&credential)),
            None => AuthState::unauthenticated(),
        }
    }

    fn project(&self, credential: &str) -> Option<String> {
        claims::project(credential, &self.inner.display_name_claim)
    }
}
