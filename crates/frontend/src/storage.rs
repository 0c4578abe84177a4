//! `window.localStorage` backend for the token store

use cachorro_core::{StorageBackend, StorageError, StorageResult};
use web_sys::Storage;

/// Client-persisted storage backed by the browser's `localStorage`.
///
/// The storage handle is looked up on every call: it is cheap, and a browser
/// may revoke access (e.g. when the user clears site data) at any time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage() -> StorageResult<Storage> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window object".to_string()))?
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        Self::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::write(key, format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) {
        match Self::local_storage() {
            Ok(storage) => {
                if let Err(e) = storage.remove_item(key) {
                    tracing::warn!(key, error = ?e, "Failed to remove localStorage item");
                }
            }
            Err(err) => tracing::warn!(key, error = %err, "Cannot remove storage item"),
        }
    }

    fn clear(&self) {
        match Self::local_storage() {
            Ok(storage) => {
                if let Err(e) = storage.clear() {
                    tracing::warn!(error = ?e, "Failed to clear localStorage");
                }
            }
            Err(err) => tracing::warn!(error = %err, "Cannot clear storage"),
        }
    }
}
