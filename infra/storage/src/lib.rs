//! A sandboxed, pluggable key-value store for panel state.
//! It provides the single persistence surface of the platform: every durable
//! value (client records, package catalog, contract terms) lives under a fixed
//! key and is stored as a JSON document.
//!
//! # Core Features
//!
//! - **Pluggable Backends**: A file-backed store for production and an in-memory
//!   store for tests, behind one [`StoreBackend`] trait.
//! - **Atomic Writes**: The file backend uses an "atomic swap" pattern
//!   (unique temp write + `fsync` + `rename`) to prevent data corruption during crashes.
//! - **Tolerant Reads**: A stored value that fails to parse is logged and read
//!   as absent; callers never see a parse error.
//! - **Key Sandbox**: Keys are restricted to ASCII alphanumerics and underscores,
//!   so the file backend can never be steered outside its root directory.
//! - **Self-Healing**: The file backend cleans up orphaned temporary files on open.
//!
//! # Architectural Overview
//!
//! The crate follows a layered approach:
//! 1.  **[`Store`]**: The primary thread-safe handle and entry point.
//! 2.  **[`StoreBackend`]**: The raw string-in/string-out persistence trait.
//! 3.  **[`StoreBuilder`]**: A type-safe fluent builder for the file-backed store.
//!
//! # Examples
//!
//! ```rust
//! use ohub_storage::{Store, StoreError};
//!
//! fn main() -> Result<(), StoreError> {
//!     # let tmp = tempfile::tempdir().unwrap();
//!     # let root = tmp.path().join("data");
//!     let store = Store::builder()
//!         .root(&root)
//!         .create(true)
//!         .open()?;
//!
//!     store.put("contractTerms", &"net 30")?;
//!     let terms: Option<String> = store.get("contractTerms")?;
//!     assert_eq!(terms.as_deref(), Some("net 30"));
//!
//!     Ok(())
//! }
//! ```
//!
//! Tests substitute the in-memory backend without touching the filesystem:
//!
//! ```rust
//! # use ohub_storage::{Store, StoreError};
//! # fn main() -> Result<(), StoreError> {
//! let store = Store::in_memory();
//! store.put("selectedClientId", &"c_42")?;
//! assert!(store.contains("selectedClientId")?);
//! # Ok(())
//! # }
//! ```

mod backend;
mod builder;
mod engine;
mod error;
mod file;
mod key;
mod maintenance;

pub use backend::{MemoryBackend, StoreBackend};
pub use builder::StoreBuilder;
pub use engine::Store;
pub use error::{StoreError, StoreErrorExt};
pub use file::FileBackend;
pub use key::StoreKey;
