//! Reusable UI components shared across pages.

pub mod header;
pub mod product_card;
