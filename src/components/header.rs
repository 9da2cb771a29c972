//! Top navigation bar with credit balance and unread-notification badge.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every page. Balance and badge only load while authenticated;
//! the badge refreshes on a fixed interval by bumping the notifications cache
//! key.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::session::AuthState;
use crate::state::cache::{CacheKey, CacheState};
use crate::util::format::format_price;

#[component]
pub fn Header() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<CacheState>>();
    let navigate = use_navigate();

    let credit_api = api.clone();
    let credit = LocalResource::new(move || {
        let api = credit_api.clone();
        let enabled = auth.get().is_authenticated();
        cache.with(|c| c.version(CacheKey::Credit));
        async move {
            if enabled { api.credit().await.ok().map(|c| c.credit) } else { None }
        }
    });

    let notifications_api = api.clone();
    let unread = LocalResource::new(move || {
        let api = notifications_api.clone();
        let enabled = auth.get().is_authenticated();
        cache.with(|c| c.version(CacheKey::Notifications));
        async move {
            if enabled {
                api.unread_notifications().await.map(|n| n.notifications.len()).unwrap_or(0)
            } else {
                0
            }
        }
    });

    #[cfg(feature = "csr")]
    {
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        let poll_secs = api.config().notification_poll_secs;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(poll_secs)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if auth.get_untracked().is_authenticated() {
                    cache.update(|c| c.invalidate(CacheKey::Notifications));
                }
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let signed_out = RwSignal::new(false);
    Effect::new(move || {
        if signed_out.get() {
            signed_out.set(false);
            navigate("/", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        api.logout();
        signed_out.set(true);
    };

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"UP-PICK"</a>
            <nav class="app-header__nav">
                <a href="/products">"Auctions"</a>
                <Show when=move || auth.get().is_authenticated()>
                    <a href="/products/register">"Sell an item"</a>
                </Show>
            </nav>
            <div class="app-header__account">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="button button--text" href="/login">"Sign in"</a>
                            <a class="button button--outlined" href="/signup">"Sign up"</a>
                        }
                    }
                >
                    <span class="app-header__greeting">
                        {move || auth.get().display_name.map(|name| format!("Hi, {name}"))}
                    </span>
                    <span class="app-header__credit">
                        {move || format_price(credit.get().flatten().unwrap_or(0))}
                    </span>
                    <a class="app-header__bell" href="/notifications">
                        "Notifications"
                        <span class="badge">{move || unread.get().unwrap_or(0)}</span>
                    </a>
                    <a href="/my-page">"My page"</a>
                    <button class="button button--text" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </header>
    }
}
