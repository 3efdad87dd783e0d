//! Browser local storage backend for the session.

use gloo_storage::{LocalStorage, Storage};
use shared::session::{SessionStorage, StorageError};

/// Session storage over `window.localStorage`.
///
/// Values are stored as raw strings so the token is readable by anything
/// else on the page that expects it. Outside a browser every read is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn raw() -> Option<web_sys::Storage> {
        web_sys::window()?;
        Some(LocalStorage::raw())
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::raw()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::raw()
            .ok_or_else(|| StorageError::Unavailable("no browser window".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|error| StorageError::Write {
                key: key.to_string(),
                reason: format!("{error:?}"),
            })
    }

    fn remove(&mut self, key: &str) {
        if Self::raw().is_some() {
            LocalStorage::delete(key);
        }
    }
}
