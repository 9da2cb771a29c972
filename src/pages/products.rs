//! Auction search with keyword, category, sort, and pagination.
//!
//! The keyword is seeded from `?keyword=` so links from the home page land on
//! a filtered list. Pages are zero-based on the wire and one-based on screen.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::product_card::ProductCard;
use crate::net::Api;
use crate::net::retry::{QUERY_RETRIES, with_retry};
use crate::net::types::{SearchProductRequest, SortBy};
use crate::state::cache::{CacheKey, CacheState};

pub const PAGE_SIZE: u32 = 12;

/// Search filters as held by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub keyword: String,
    pub category_id: Option<i64>,
    pub sort_by: SortBy,
    pub page: u32,
}

/// Request body for the current filters. A blank keyword is left out.
pub fn build_search_request(filters: &SearchFilters) -> SearchProductRequest {
    let keyword = filters.keyword.trim();
    SearchProductRequest {
        keyword: (!keyword.is_empty()).then(|| keyword.to_owned()),
        category_id: filters.category_id,
        page: Some(filters.page),
        size: Some(PAGE_SIZE),
        sort_by: Some(filters.sort_by),
        end_at_from: None,
    }
}

/// Category select value: empty means all categories.
pub fn parse_category(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// One-based "Page x of y" label. An empty result still reads as page 1 of 1.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page + 1, total_pages.max(1))
}

pub fn has_next_page(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let cache = expect_context::<RwSignal<CacheState>>();
    let query = use_query_map();

    let filters = RwSignal::new(SearchFilters::default());
    let keyword_input = RwSignal::new(String::new());

    Effect::new(move || {
        let keyword = query.with(|q| q.get("keyword")).unwrap_or_default();
        keyword_input.set(keyword.clone());
        filters.update(|f| {
            f.keyword = keyword;
            f.page = 0;
        });
    });

    let categories_api = api.clone();
    let categories = LocalResource::new(move || {
        let api = categories_api.clone();
        async move { with_retry(QUERY_RETRIES, || api.categories()).await.unwrap_or_default() }
    });

    let results = LocalResource::new(move || {
        let api = api.clone();
        let request = build_search_request(&filters.get());
        cache.with(|c| c.version(CacheKey::Products));
        async move { with_retry(QUERY_RETRIES, || api.search_products(&request)).await }
    });

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let keyword = keyword_input.get();
        filters.update(|f| {
            f.keyword = keyword;
            f.page = 0;
        });
    };

    view! {
        <section class="products">
            <h1>"Auctions"</h1>
            <form class="products__filters" on:submit=on_search>
                <input
                    class="products__search"
                    type="search"
                    placeholder="Search by name"
                    prop:value=move || keyword_input.get()
                    on:input=move |ev| keyword_input.set(event_target_value(&ev))
                />
                <select on:change=move |ev| {
                    let category_id = parse_category(&event_target_value(&ev));
                    filters.update(|f| {
                        f.category_id = category_id;
                        f.page = 0;
                    });
                }>
                    <option value="">"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|c| view! { <option value=c.category_id.to_string()>{c.label()}</option> })
                            .collect_view()
                    }}
                </select>
                <select on:change=move |ev| {
                    let sort_by = SortBy::parse(&event_target_value(&ev));
                    filters.update(|f| {
                        f.sort_by = sort_by;
                        f.page = 0;
                    });
                }>
                    {SortBy::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="button" type="submit">"Search"</button>
            </form>
            {move || match results.get() {
                Some(Ok(page)) if page.is_empty() => {
                    view! { <p class="muted">"No auctions match your search."</p> }.into_any()
                }
                Some(Ok(page)) => {
                    let current = filters.with_untracked(|f| f.page);
                    let total = page.total_pages;
                    view! {
                        <div class="products__grid">
                            {page
                                .contents
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product/> })
                                .collect_view()}
                        </div>
                        <nav class="pager">
                            <button
                                class="button button--text"
                                disabled={current == 0}
                                on:click=move |_| filters.update(|f| f.page = f.page.saturating_sub(1))
                            >
                                "Previous"
                            </button>
                            <span>{page_label(current, total)}</span>
                            <button
                                class="button button--text"
                                disabled={!has_next_page(current, total)}
                                on:click=move |_| filters.update(|f| f.page += 1)
                            >
                                "Next"
                            </button>
                        </nav>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error">{e.message_or("Could not load auctions.")}</p> }.into_any()
                }
                None => view! { <p class="muted">"Loading..."</p> }.into_any(),
            }}
        </section>
    }
}
