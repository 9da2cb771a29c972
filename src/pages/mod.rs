//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (queries, mutations, cache
//! invalidation) and delegates rendering details to `components`. Input
//! validation lives in plain functions next to each page so it can be tested
//! without a browser.

pub mod home;
pub mod login;
pub mod my_page;
pub mod not_found;
pub mod notifications;
pub mod product_detail;
pub mod product_register;
pub mod products;
pub mod signup;
