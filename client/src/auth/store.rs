//! Persistent session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build keeps exactly one key in `localStorage`. Server renders
//! and tests swap in [`MemoryStorage`] through the [`StorageBackend`] seam.
//!
//! ERROR HANDLING
//! ==============
//! Malformed stored values read as absent. Storage write failures are logged
//! and dropped; the in-memory session stays authoritative for the tab.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::credential::CredentialBlob;

/// Storage key holding the encoded credential blob.
pub const TOKEN_KEY: &str = "token";

/// Minimal string key/value storage.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`, resolved on every call. No-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; {key} not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.with_entries(|entries| entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        self.with_entries(|entries| {
            entries.insert(key.to_owned(), value.to_owned());
        });
    }

    fn remove(&self, key: &str) {
        self.with_entries(|entries| {
            entries.remove(key);
        });
    }
}

/// Reads and writes the credential blob under [`TOKEN_KEY`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: StorageBackend> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Encode and write `blob`, replacing any previous value.
    pub fn save(&self, blob: &CredentialBlob) {
        match blob.encode() {
            Ok(token) => self.storage.set(TOKEN_KEY, &token),
            Err(e) => leptos::logging::warn!("credential encode failed: {e}"),
        }
    }

    /// Read the stored blob. Absent and undecodable values both yield `None`.
    pub fn load(&self) -> Option<CredentialBlob> {
        let raw = self.storage.get(TOKEN_KEY)?;
        match CredentialBlob::decode(&raw) {
            Ok(blob) => Some(blob),
            Err(e) => {
                leptos::logging::warn!("invalid stored token: {e}");
                None
            }
        }
    }

    /// Remove the stored value unconditionally.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
    }
}
