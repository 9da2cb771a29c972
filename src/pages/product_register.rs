//! New listing form. Members only.
//!
//! The picked image is read into memory as soon as it is chosen so the submit
//! handler only deals with plain data.

#[cfg(test)]
#[path = "product_register_test.rs"]
mod product_register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::Api;
use crate::net::pipeline::FilePart;
use crate::net::retry::{QUERY_RETRIES, with_retry};
use crate::net::types::ProductRegisterRequest;
use crate::session::{AuthState, Session};
use crate::state::cache::{AFTER_REGISTER, CacheState};
use crate::util::auth::install_unauth_redirect;
use crate::util::browser::alert;
use crate::util::format::datetime_local_to_iso;

/// Multipart field carrying the product image.
pub const IMAGE_FIELD: &str = "image";

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub description: String,
    pub category_id: String,
    pub start_bid: String,
    pub end_at: String,
}

/// Check the form and pair it with the image.
///
/// `end_at_iso` is the end time already converted to ISO-8601 UTC; `None`
/// means the input was blank or unparseable.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_register(
    form: &RegisterForm,
    end_at_iso: Option<String>,
    image: Option<FilePart>,
) -> Result<(ProductRegisterRequest, FilePart), &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Enter a product name.");
    }
    let description = form.description.trim();
    if description.is_empty() {
        return Err("Enter a description.");
    }
    let Ok(category_id) = form.category_id.trim().parse::<i64>() else {
        return Err("Choose a category.");
    };
    let start_bid = match form.start_bid.trim().replace(',', "").parse::<i64>() {
        Ok(bid) if bid > 0 => bid,
        _ => return Err("Starting bid must be a positive amount."),
    };
    let Some(end_at) = end_at_iso else {
        return Err("Choose when the auction ends.");
    };
    let Some(image) = image else {
        return Err("Choose a product image.");
    };
    Ok((
        ProductRegisterRequest {
            name: name.to_owned(),
            description: description.to_owned(),
            category_id,
            start_bid,
            end_at,
        },
        image,
    ))
}

#[component]
pub fn ProductRegisterPage() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = expect_context::<Session>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let cache = expect_context::<RwSignal<CacheState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, session.login_path().to_owned(), navigate.clone());

    let form = RwSignal::new(RegisterForm::default());
    let image = RwSignal::new(None::<FilePart>);
    let preview = RwSignal::new(None::<String>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate("/my-page", NavigateOptions::default());
        }
    });

    let categories_api = api.clone();
    let categories = LocalResource::new(move || {
        let api = categories_api.clone();
        async move { with_retry(QUERY_RETRIES, || api.categories()).await.unwrap_or_default() }
    });

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let file = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            let Some(file) = file else {
                image.set(None);
                preview.set(None);
                return;
            };
            preview.set(crate::util::browser::preview_url(&file));
            leptos::task::spawn_local(async move {
                match crate::util::browser::read_file(IMAGE_FIELD, &file).await {
                    Ok(part) => image.set(Some(part)),
                    Err(e) => {
                        leptos::logging::warn!("reading image failed: {e}");
                        image.set(None);
                        error.set("Could not read the selected image.".to_owned());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let values = form.get();
        let end_at = datetime_local_to_iso(&values.end_at);
        let (request, file) = match validate_register(&values, end_at, image.get()) {
            Ok(parts) => parts,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.register_product(&request, file).await {
                Ok(()) => {
                    cache.update(|c| c.invalidate_all(&AFTER_REGISTER));
                    alert("Your item is listed!");
                    registered.set(true);
                }
                Err(e) => error.set(e.message_or("Listing failed. Try again.")),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="register">
            <h1>"Sell an item"</h1>
            <form class="register__form" on:submit=on_submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="5"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Category"
                    <select on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))>
                        <option value="">"Choose a category"</option>
                        {move || {
                            categories
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|c| view! { <option value=c.category_id.to_string()>{c.label()}</option> })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label>
                    "Starting bid"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || form.get().start_bid
                        on:input=move |ev| form.update(|f| f.start_bid = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Auction ends"
                    <input
                        type="datetime-local"
                        prop:value=move || form.get().end_at
                        on:input=move |ev| form.update(|f| f.end_at = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Image"
                    <input type="file" accept="image/*" on:change=on_image_change/>
                </label>
                {move || preview.get().map(|src| view! { <img class="register__preview" src=src alt="Preview"/> })}
                <button class="button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Listing..." } else { "List item" }}
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="error">{move || error.get()}</p>
            </Show>
        </section>
    }
}
