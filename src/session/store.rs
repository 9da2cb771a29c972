//! Durable storage for the single bearer credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential lives in one `localStorage` slot so it survives reloads.
//! Every read happens through [`SessionStore`], which logs storage failures
//! and reports them as an absent credential.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use leptos::logging::warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Key/value backend the store persists into.
pub trait CredentialStorage: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`. Outside the browser build every call reports
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn js_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Operation(format!("{err:?}"))
}

impl CredentialStorage for LocalStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.set_item(key, value).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.remove_item(key).map_err(|e| js_error(&e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// Process-local map, used off-browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl CredentialStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|e| StorageError::Operation(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|e| StorageError::Operation(e.to_string()))?;
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|e| StorageError::Operation(e.to_string()))?;
        slots.remove(key);
        Ok(())
    }
}

/// The one credential slot. Cheap to clone; clones share the backend.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn CredentialStorage>,
    key: String,
    /// Set once an unavailable backend has been reported.
    unavailable_reported: Arc<AtomicBool>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(backend: Arc<dyn CredentialStorage>, key: impl Into<String>) -> Self {
        Self { backend, key: key.into(), unavailable_reported: Arc::new(AtomicBool::new(false)) }
    }

    /// Store backed by browser `localStorage`.
    pub fn browser(key: impl Into<String>) -> Self {
        Self::new(Arc::new(LocalStorage), key)
    }

    /// Store backed by [`MemoryStorage`].
    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStorage::default()), key)
    }

    /// Current credential. Empty values and storage failures read as absent.
    pub fn get(&self) -> Option<String> {
        match self.backend.read(&self.key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                self.report("read", &e);
                None
            }
        }
    }

    /// Replace whatever credential is stored.
    pub fn set(&self, credential: &str) {
        if let Err(e) = self.backend.write(&self.key, credential) {
            self.report("write", &e);
        }
    }

    /// Remove the credential. Clearing an empty store is a no-op.
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(&self.key) {
            self.report("clear", &e);
        }
    }

    /// Log a storage failure. An unavailable backend is reported only once
    /// per store; other failures every time. Returns whether it logged.
    fn report(&self, op: &str, err: &StorageError) -> bool {
        if *err == StorageError::Unavailable && self.unavailable_reported.swap(true, Ordering::Relaxed) {
            return false;
        }
        warn!("session store {op} failed: {err}");
        true
    }
}
