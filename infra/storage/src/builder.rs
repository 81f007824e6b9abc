use crate::engine::Store;
use crate::error::{StoreError, StoreErrorExt};
use crate::file::FileBackend;
use crate::maintenance;
use private::Sealed;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
struct StoreConfig {
    create: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { create: true }
    }
}

#[derive(Debug, Default)]
pub struct NoRoot;
#[derive(Debug)]
pub struct WithRoot(PathBuf);

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoRoot {}
impl Sealed for WithRoot {}

#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct StoreBuilder<S: Sealed = NoRoot> {
    state: S,
    config: StoreConfig,
}

#[allow(private_bounds)]
impl<S: Sealed> StoreBuilder<S> {
    #[must_use = "Sets whether the store root should be created if it does not exist"]
    pub const fn create(mut self, enable: bool) -> Self {
        self.config.create = enable;
        self
    }
}

impl StoreBuilder<NoRoot> {
    #[must_use = "Creates a new store builder with default configuration"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the root directory path for the file-backed store"]
    pub fn root(self, path: impl Into<PathBuf>) -> StoreBuilder<WithRoot> {
        StoreBuilder { state: WithRoot(path.into()), config: self.config }
    }
}

impl StoreBuilder<WithRoot> {
    /// Consumes the configuration and opens the file-backed store.
    ///
    /// This method performs the following boot sequence:
    /// 1. **Bootstrapping**: Creates the root directory if `create(true)` was set.
    /// 2. **Canonicalization**: Resolves the root to an absolute, physical path
    ///    on disk so value files can never land outside it.
    /// 3. **Self-Healing**: Removes orphaned temporary files left behind by
    ///    previous crashes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if:
    /// - The root directory does not exist and `create` is false.
    /// - The process lacks permissions to create or resolve the root directory.
    pub fn open(self) -> Result<Store, StoreError> {
        let root = &self.state.0;

        if self.config.create {
            fs::create_dir_all(root)
                .context(format!("Failed to bootstrap store root: {}", root.display()))?;
            info!(path = %root.display(), "Bootstrapped store root directory");
        }

        let canonical = fs::canonicalize(root)
            .context(format!("Failed to resolve store root: {}", root.display()))?;

        maintenance::purge_tmp(&canonical);

        Ok(Store::with_backend(FileBackend::new(canonical)))
    }
}
