//! Unread notifications. Members only.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::net::retry::{QUERY_RETRIES, with_retry};
use crate::session::{AuthState, Session};
use crate::state::cache::{CacheKey, CacheState};
use crate::util::auth::install_unauth_redirect;
use crate::util::format::display_time;

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<CacheState>>();

    install_unauth_redirect(auth, session.login_path().to_owned(), use_navigate());

    let notifications = LocalResource::new(move || {
        let api = api.clone();
        let enabled = auth.get().is_authenticated();
        cache.with(|c| c.version(CacheKey::Notifications));
        async move {
            if enabled {
                with_retry(QUERY_RETRIES, || api.unread_notifications())
                    .await
                    .map(|n| n.notifications)
            } else {
                Ok(Vec::new())
            }
        }
    });

    view! {
        <section class="notifications">
            <h1>"Notifications"</h1>
            {move || match notifications.get() {
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="muted">"You're all caught up."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <ul class="notifications__list">
                            {list
                                .into_iter()
                                .map(|n| {
                                    let when = display_time(n.notified_at.as_deref());
                                    view! {
                                        <li class="notification" class:notification--read=n.is_read>
                                            <span class="chip">{n.kind.label()}</span>
                                            <div class="notification__body">
                                                <strong>{n.title}</strong>
                                                <p>{n.message}</p>
                                                <time>{when}</time>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error">{e.message_or("Could not load notifications.")}</p> }.into_any()
                }
                None => view! { <p class="muted">"Loading..."</p> }.into_any(),
            }}
        </section>
    }
}
