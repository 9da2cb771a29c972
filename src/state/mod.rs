//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Auth state lives with the session (`crate::session`); this module holds
//! the remaining cross-page state.

pub mod cache;
