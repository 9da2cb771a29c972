//! Landing page: search box and trending keywords.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::net::retry::{QUERY_RETRIES, with_retry};

/// Search route for a keyword; blank keywords open the unfiltered list.
pub fn search_href(keyword: &str) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        "/products".to_owned()
    } else {
        format!("/products?keyword={}", urlencoding::encode(keyword))
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());

    let keywords = LocalResource::new(move || {
        let api = api.clone();
        async move { with_retry(QUERY_RETRIES, || api.hot_keywords()).await }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        navigate(&search_href(&query.get()), NavigateOptions::default());
    };

    view! {
        <section class="home">
            <h1 class="home__title">"Find your next pick"</h1>
            <form class="home__search" on:submit=on_search>
                <input
                    class="home__search-input"
                    type="search"
                    placeholder="Search auctions"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="button" type="submit">"Search"</button>
            </form>
            <h2 class="home__subtitle">"Trending searches"</h2>
            {move || match keywords.get() {
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="muted">"Nothing trending right now."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <ol class="home__keywords">
                            {list
                                .into_iter()
                                .map(|k| {
                                    let href = search_href(&k.keyword);
                                    view! { <li><a href=href>{k.keyword}</a></li> }
                                })
                                .collect_view()}
                        </ol>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error">{e.message_or("Could not load trending searches.")}</p> }
                        .into_any()
                }
                None => view! { <p class="muted">"Loading..."</p> }.into_any(),
            }}
        </section>
    }
}
