//! Client-side key/value preference storage.
//!
//! The page persists exactly one preference (the theme), but the storage
//! seam is a trait so the browser's `localStorage`, a file in the user's
//! state directory, and an in-memory map in tests are interchangeable.

use std::collections::HashMap;

/// Errors surfaced by a [`PreferenceStore`].  Callers log these and carry on.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("preference storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to persist preference `{key}`")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

/// String key/value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store, used when nothing better is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
