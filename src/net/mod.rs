//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pipeline` is the single wrapping layer (credential attachment, 401
//! teardown), `transport` performs the browser fetch, `api` lists the
//! endpoints, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod pipeline;
pub mod retry;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;

pub use error::ApiError;
pub use pipeline::{ApiClient, ApiRequest, ApiResponse, Transport};
pub use transport::BrowserTransport;

/// Client type the application provides through context.
pub type Api = ApiClient<BrowserTransport>;
