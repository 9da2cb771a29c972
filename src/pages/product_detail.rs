//! Single auction: product info, live price, and the bid form.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::Api;
use crate::net::retry::{QUERY_RETRIES, with_retry};
use crate::net::types::Product;
use crate::session::AuthState;
use crate::state::cache::{CacheKey, CacheState, after_bid};
use crate::util::format::{display_time, format_price};

/// Route parameter as a product id.
pub fn parse_product_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse().ok()).filter(|id| *id > 0)
}

/// A bid must be a positive whole amount strictly above `floor`.
///
/// # Errors
///
/// Returns the message to show next to the form.
pub fn validate_bid(input: &str, floor: i64) -> Result<i64, String> {
    let amount = match input.trim().replace(',', "").parse::<i64>() {
        Ok(amount) if amount > 0 => amount,
        _ => return Err("Enter a valid bid amount.".to_owned()),
    };
    if amount <= floor {
        return Err(format!("Bid more than the current price ({}).", format_price(floor)));
    }
    Ok(amount)
}

/// Placeholder hint: one step above the floor.
pub fn suggested_bid(floor: i64) -> String {
    format!("{} or more", format_price(floor.saturating_add(1_000)))
}

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<CacheState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    let product_id = Memo::new(move |_| params.with(|p| parse_product_id(p.get("id").as_deref())));

    let product_api = api.clone();
    let product = LocalResource::new(move || {
        let api = product_api.clone();
        let id = product_id.get();
        if let Some(id) = id {
            cache.with(|c| c.version(CacheKey::Product(id)));
        }
        async move {
            match id {
                Some(id) => with_retry(QUERY_RETRIES, || api.product(id)).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let bid_input = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let success = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let needs_login = RwSignal::new(false);

    Effect::new(move || {
        if needs_login.get() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let submit_bid = move |target: Product| {
        if busy.get_untracked() {
            return;
        }
        if !auth.get_untracked().is_authenticated() {
            needs_login.set(true);
            return;
        }
        let amount = match validate_bid(&bid_input.get_untracked(), target.price_floor()) {
            Ok(amount) => amount,
            Err(message) => {
                error.set(message);
                success.set(String::new());
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        let product_id = target.product_id;
        let auction_id = target.auction_id();
        leptos::task::spawn_local(async move {
            match api.place_bid(auction_id, amount).await {
                Ok(()) => {
                    success.set("Your bid is in!".to_owned());
                    error.set(String::new());
                    bid_input.set(String::new());
                    cache.update(|c| c.invalidate_all(&after_bid(product_id)));
                }
                Err(e) => {
                    error.set(e.message_or("Bid failed. Try again."));
                    success.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="product-detail">
            {move || match product.get() {
                Some(Ok(Some(item))) => {
                    let floor = item.price_floor();
                    let open = item.is_open();
                    let auction = item.auction.clone();
                    let status = auction.as_ref().map_or("Open", |a| a.status.label());
                    let ends = display_time(auction.as_ref().and_then(|a| a.end_at.as_deref()));
                    let start_bid = auction.as_ref().map_or(0, |a| a.start_bid);
                    let winner = auction.and_then(|a| a.winner_nickname);
                    let category = item.category.as_ref().map(|c| c.label());
                    let image = item.image_url.clone().filter(|url| !url.is_empty());
                    let submit_bid = submit_bid.clone();
                    let target = item.clone();
                    view! {
                        <div class="product-detail__media">
                            {image.map(|src| view! { <img src=src alt=item.name.clone()/> })}
                        </div>
                        <div class="product-detail__info">
                            <span class="chip">{status}</span>
                            <h1>{item.name.clone()}</h1>
                            {category.map(|label| view! { <p class="muted">{label}</p> })}
                            <p class="product-detail__seller">
                                "Seller: " {item.seller_nickname.clone().unwrap_or_else(|| "-".to_owned())}
                            </p>
                            <dl class="product-detail__prices">
                                <dt>"Current price"</dt>
                                <dd>{format_price(floor)}</dd>
                                <dt>"Starting bid"</dt>
                                <dd>{format_price(start_bid)}</dd>
                                <dt>"Ends"</dt>
                                <dd>{ends}</dd>
                            </dl>
                            {winner.map(|name| view! { <p class="product-detail__winner">"Winner: " {name}</p> })}
                            <p class="product-detail__description">{item.description.clone()}</p>
                            <Show
                                when=move || open
                                fallback=|| view! { <p class="muted">"Bidding has closed."</p> }
                            >
                                <form
                                    class="bid-form"
                                    on:submit={
                                        let submit_bid = submit_bid.clone();
                                        let target = target.clone();
                                        move |ev: leptos::ev::SubmitEvent| {
                                            ev.prevent_default();
                                            submit_bid(target.clone());
                                        }
                                    }
                                >
                                    <input
                                        class="bid-form__input"
                                        type="number"
                                        min="0"
                                        placeholder=suggested_bid(floor)
                                        prop:value=move || bid_input.get()
                                        on:input=move |ev| bid_input.set(event_target_value(&ev))
                                    />
                                    <button class="button" type="submit" disabled=move || busy.get()>
                                        {move || if busy.get() { "Bidding..." } else { "Place bid" }}
                                    </button>
                                </form>
                            </Show>
                            <Show when=move || !error.get().is_empty()>
                                <p class="error">{move || error.get()}</p>
                            </Show>
                            <Show when=move || !success.get().is_empty()>
                                <p class="success">{move || success.get()}</p>
                            </Show>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(None)) => view! { <p class="error">"Unknown auction."</p> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="error">{e.message_or("Could not load this auction.")}</p> }.into_any()
                }
                None => view! { <p class="muted">"Loading..."</p> }.into_any(),
            }}
        </section>
    }
}
