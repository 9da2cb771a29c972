//! Browser session: credential storage, claims projection, and auth state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` persists the bearer credential, `claims` reads display data out of
//! it, and `state` exposes the reactive authenticated flag the rest of the UI
//! gates on.

pub mod claims;
pub mod state;
pub mod store;

pub use claims::{Claims, project};
pub use state::{AuthState, AuthStatus, BrowserEffects, Session, SessionEffects};
pub use store::{CredentialStorage, LocalStorage, MemoryStorage, SessionStore, StorageError};
