use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage backend failed.
    #[error("An underlying preference storage error occurred: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Where the chosen locale tag is remembered between sessions.
///
/// Loads are forgiving: a missing, unreadable or corrupt value is simply
/// `None`, and resolution falls back to the environment language.
pub trait PreferenceStore: Send + Sync {
    /// Returns the stored tag, if the backend holds a readable one.
    fn load(&self) -> Option<String>;

    /// Persists the tag.
    fn store(&mut self, tag: &str) -> Result<(), StoreError>;
}

/// An in-memory [`PreferenceStore`] whose clones share one value.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    value: Arc<RwLock<Option<String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `tag`.
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            value: Arc::new(RwLock::new(Some(tag.into()))),
        }
    }
}

impl PreferenceStore for InMemoryStore {
    fn load(&self) -> Option<String> {
        self.value.read().expect("lock poisoned").clone()
    }

    fn store(&mut self, tag: &str) -> Result<(), StoreError> {
        *self.value.write().expect("lock poisoned") = Some(tag.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_remembers_the_last_tag() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.load(), None);

        store.store("es").unwrap();
        assert_eq!(store.load().as_deref(), Some("es"));

        store.store("en").unwrap();
        assert_eq!(store.load().as_deref(), Some("en"));
    }

    #[test]
    fn with_tag_preloads_a_value() {
        let store = InMemoryStore::with_tag("es");

        assert_eq!(store.load().as_deref(), Some("es"));
    }

    #[test]
    fn clones_share_the_same_value() {
        let store = InMemoryStore::new();
        let mut handle = store.clone();

        handle.store("es").unwrap();

        assert_eq!(store.load().as_deref(), Some("es"));
    }
}
