use crate::error::StoreError;
use crate::key::StoreKey;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::fmt::Debug;

/// Raw persistence surface behind a [`crate::Store`].
///
/// Backends move opaque strings; JSON encoding/decoding happens in the engine.
/// Implementations must tolerate repeated removes and loads of absent keys.
pub trait StoreBackend: Debug + Send + Sync {
    /// Returns the raw value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] on a hardware or permission failure.
    fn load(&self, key: &StoreKey) -> Result<Option<String>, StoreError>;

    /// Persists `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] on a hardware or permission failure.
    fn save(&self, key: &StoreKey, value: &str) -> Result<(), StoreError>;

    /// Removes the value stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    /// Returns [`StoreError::Io`] on a hardware or permission failure.
    fn remove(&self, key: &StoreKey) -> Result<(), StoreError>;
}

/// A purely in-memory backend.
///
/// Used by tests and anywhere durable state is not wanted. Behaviour is
/// identical to the file backend minus durability.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreBackend for MemoryBackend {
    fn load(&self, key: &StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().get(key.as_str()).cloned())
    }

    fn save(&self, key: &StoreKey, value: &str) -> Result<(), StoreError> {
        self.entries.write().insert(key.as_str().to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &StoreKey) -> Result<(), StoreError> {
        self.entries.write().remove(key.as_str());
        Ok(())
    }
}
