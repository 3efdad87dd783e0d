use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use thiserror::Error;

/// Failure reported by a [`SessionStorage`] backend.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// String key/value store that backs the session.
///
/// Reads are infallible: a backend that cannot be read behaves as empty,
/// which restores as logged out.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Backend specific write failures.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str);
}

/// In-memory storage. Clones share the same map, so a test can keep a handle
/// and inspect what the store persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage seeded with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        storage
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
