//! Auction listing tile used by the search grid and the member page tabs.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use leptos::prelude::*;

use crate::net::types::ProductSimpleInfo;
use crate::util::format::{display_time, format_price};

/// Detail route for a listing.
pub fn product_href(product_id: i64) -> String {
    format!("/products/{product_id}")
}

/// Bid line shown on the tile. A missing or zero bid means nobody has bid.
pub fn bid_label(current_bid: Option<i64>) -> String {
    match current_bid {
        Some(bid) if bid > 0 => format_price(bid),
        _ => "No bids yet".to_owned(),
    }
}

#[component]
pub fn ProductCard(product: ProductSimpleInfo) -> impl IntoView {
    let href = product_href(product.product_id);
    let bid = bid_label(product.current_bid);
    let ends = display_time(product.end_at.as_deref());
    let image = product.image_url.clone().filter(|url| !url.is_empty());
    let alt = product.name.clone();

    view! {
        <a class="product-card" href=href>
            <div class="product-card__image">
                {match image {
                    Some(src) => view! { <img src=src alt=alt/> }.into_any(),
                    None => view! { <span class="product-card__placeholder">"No image"</span> }.into_any(),
                }}
            </div>
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name}</h3>
                <p class="product-card__bid">{bid}</p>
                <p class="product-card__ends">"Ends " {ends}</p>
            </div>
        </a>
    }
}
