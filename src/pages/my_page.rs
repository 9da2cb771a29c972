//! Member page: credit balance, top-up, and the four "my products" tabs.

#[cfg(test)]
#[path = "my_page_test.rs"]
mod my_page_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::product_card::ProductCard;
use crate::net::Api;
use crate::net::retry::{QUERY_RETRIES, with_retry};
use crate::net::types::MyProductsKind;
use crate::session::{AuthState, Session};
use crate::state::cache::{AFTER_CHARGE, CacheKey, CacheState};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser::alert;
use crate::util::format::format_price;

pub const MY_PRODUCTS_PAGE_SIZE: u32 = 20;

/// Charge amounts must be positive whole numbers.
///
/// # Errors
///
/// Returns the message to show in the charge dialog.
pub fn validate_charge(input: &str) -> Result<i64, &'static str> {
    match input.trim().replace(',', "").parse::<i64>() {
        Ok(amount) if amount > 0 => Ok(amount),
        _ => Err("Enter a valid amount."),
    }
}

#[component]
pub fn MyPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<CacheState>>();

    install_unauth_redirect(auth, session.login_path().to_owned(), use_navigate());

    let tab = RwSignal::new(MyProductsKind::default());
    let show_charge = RwSignal::new(false);
    let charge_input = RwSignal::new(String::new());
    let charge_error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let credit_api = api.clone();
    let credit = LocalResource::new(move || {
        let api = credit_api.clone();
        let enabled = auth.get().is_authenticated();
        cache.with(|c| c.version(CacheKey::Credit));
        async move {
            if enabled { with_retry(QUERY_RETRIES, || api.credit()).await.map(|c| Some(c.credit)) } else { Ok(None) }
        }
    });

    let products_api = api.clone();
    let products = LocalResource::new(move || {
        let api = products_api.clone();
        let kind = tab.get();
        let enabled = auth.get().is_authenticated();
        cache.with(|c| c.version(CacheKey::MyProducts));
        async move {
            if enabled {
                with_retry(QUERY_RETRIES, || api.my_products(kind, 0, MY_PRODUCTS_PAGE_SIZE))
                    .await
                    .map(|page| page.contents)
            } else {
                Ok(Vec::new())
            }
        }
    });

    let close_charge = move || {
        show_charge.set(false);
        charge_input.set(String::new());
        charge_error.set(String::new());
    };

    let on_charge = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let amount = match validate_charge(&charge_input.get()) {
            Ok(amount) => amount,
            Err(message) => {
                charge_error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.charge_credit(amount).await {
                Ok(_) => {
                    cache.update(|c| c.invalidate_all(&AFTER_CHARGE));
                    alert("Credit charged.");
                    close_charge();
                }
                Err(e) => charge_error.set(e.message_or("Charge failed. Try again.")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="my-page">
            <h1>"My page"</h1>
            <div class="my-page__credit">
                <span class="my-page__credit-label">"Credit"</span>
                <span class="my-page__credit-value">
                    {move || match credit.get() {
                        Some(Ok(Some(amount))) => format_price(amount),
                        Some(Err(e)) => e.message_or("Unavailable"),
                        _ => "-".to_owned(),
                    }}
                </span>
                <button class="button" on:click=move |_| show_charge.set(true)>"Charge"</button>
            </div>

            <Show when=move || show_charge.get()>
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=on_charge.clone()>
                        <h2>"Charge credit"</h2>
                        <input
                            type="number"
                            min="1"
                            placeholder="Amount"
                            prop:value=move || charge_input.get()
                            on:input=move |ev| charge_input.set(event_target_value(&ev))
                        />
                        <Show when=move || !charge_error.get().is_empty()>
                            <p class="error">{move || charge_error.get()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="button button--text" type="button" on:click=move |_| close_charge()>
                                "Cancel"
                            </button>
                            <button class="button" type="submit" disabled=move || busy.get()>
                                "Charge"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <nav class="tabs">
                {MyProductsKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <button
                                class="tabs__tab"
                                class:tabs__tab--active=move || tab.get() == kind
                                on:click=move |_| tab.set(kind)
                            >
                                {kind.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            {move || match products.get() {
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="muted">"Nothing here yet."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <div class="products__grid">
                            {list.into_iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! { <p class="error">{e.message_or("Could not load your items.")}</p> }.into_any()
                }
                None => view! { <p class="muted">"Loading..."</p> }.into_any(),
            }}
        </section>
    }
}
