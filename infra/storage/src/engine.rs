//! Core store implementation providing typed JSON access over a raw backend.
//!
//! This module contains the primary [`Store`] handle, which serves as the entry
//! point for all persistence operations. It validates keys, (de)serializes
//! values, and enforces the platform's tolerant-read policy.

use crate::backend::{MemoryBackend, StoreBackend};
use crate::builder::StoreBuilder;
use crate::error::{StoreError, StoreErrorExt};
use crate::key::StoreKey;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

/// A thread-safe handle to the key-value store.
///
/// `Store` is the single persistence surface of the panel. Values are JSON
/// documents stored under fixed, validated keys. It supports:
/// - **Pluggable Backends**: file-backed for production, in-memory for tests.
/// - **Tolerant Reads**: an unparsable stored value reads as absent, never as
///   an error surfaced to the user.
/// - **Last Writer Wins**: reads and writes are individually consistent but
///   not transactional, matching the panel's single-threaded usage.
///
/// This handle is internally reference-counted (`Arc`) and can be cheaply
/// cloned into every feature that needs persistence.
///
/// # Example
///
/// ```rust
/// use ohub_storage::{Store, StoreError};
///
/// fn main() -> Result<(), StoreError> {
///     let store = Store::in_memory();
///
///     store.put("selectedPackage", &"growth")?;
///     let selected: Option<String> = store.get("selectedPackage")?;
///     assert_eq!(selected.as_deref(), Some("growth"));
///
///     store.remove("selectedPackage")?;
///     assert!(!store.contains("selectedPackage")?);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Store {
    backend: Arc<dyn StoreBackend>,
}

impl Store {
    #[must_use = "The store is not usable until you call .open()"]
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Creates a store over the in-memory backend.
    ///
    /// State lives only as long as the handle (and its clones). Intended for
    /// tests and ephemeral sessions.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Wraps an arbitrary backend implementation.
    pub fn with_backend(backend: impl StoreBackend + 'static) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Reads and decodes the value stored under `key`.
    ///
    /// A value that fails to decode is logged with `warn!` and reported as
    /// absent: a corrupted slot behaves like an empty one and the caller
    /// falls back to its default state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed.
    /// Returns [`StoreError::Io`] if the backend fails to read.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let key = StoreKey::try_from(key)?;
        let Some(raw) = self.backend.load(&key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(%key, error = %err, "Stored value failed to parse; treating as absent");
                Ok(None)
            },
        }
    }

    /// Encodes `value` as JSON and persists it under `key`, replacing any
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed.
    /// Returns [`StoreError::Serialize`] if the value cannot be encoded.
    /// Returns [`StoreError::Io`] if the backend fails to write.
    pub fn put<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let key = StoreKey::try_from(key)?;

        #[cfg(feature = "json-pretty")]
        let raw = serde_json::to_string_pretty(value).context("JSON encoding failed")?;
        #[cfg(not(feature = "json-pretty"))]
        let raw = serde_json::to_string(value).context("JSON encoding failed")?;

        self.backend.save(&key, &raw)
    }

    /// Removes the value stored under `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed.
    /// Returns [`StoreError::Io`] if the backend fails to delete.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let key = StoreKey::try_from(key)?;
        self.backend.remove(&key)
    }

    /// Checks whether any value (parsable or not) is stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] if the key is malformed.
    /// Returns [`StoreError::Io`] if the backend fails to read.
    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        let key = StoreKey::try_from(key)?;
        Ok(self.backend.load(&key)?.is_some())
    }
}
