use crate::backend::StoreBackend;
use crate::error::{StoreError, StoreErrorExt};
use crate::key::StoreKey;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

const VALUE_FILE_SUFFIX: &str = "json";

/// File-backed store backend.
///
/// Each key maps to `<root>/<key>.json`. All writes go through an
/// "atomic swap": the value is written to a unique temporary file, synced to
/// hardware, then renamed over the target. The target file is therefore never
/// observed in a partially written state, even across crashes.
#[derive(Debug)]
pub struct FileBackend {
    root: PathBuf,
    tmp_counter: AtomicU64,
}

impl FileBackend {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self { root, tmp_counter: AtomicU64::new(1) }
    }

    /// Physical path of the file holding `key`.
    #[must_use]
    pub fn resolve(&self, key: &StoreKey) -> PathBuf {
        self.root.join(format!("{key}.{VALUE_FILE_SUFFIX}"))
    }

    fn unique_tmp_path(&self, target: &Path) -> PathBuf {
        let counter = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("value");
        target.with_file_name(format!("{file_name}.ohubtmp.{counter}"))
    }
}

impl StoreBackend for FileBackend {
    fn load(&self, key: &StoreKey) -> Result<Option<String>, StoreError> {
        let resolved = self.resolve(key);
        match fs::read_to_string(&resolved) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io {
                source: err,
                context: Some(format!("Read failed: {}", resolved.display()).into()),
            }),
        }
    }

    fn save(&self, key: &StoreKey, value: &str) -> Result<(), StoreError> {
        let resolved = self.resolve(key);
        let temp = self.unique_tmp_path(&resolved);

        {
            let mut file = fs::OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(&temp)
                .context(format!("Temp creation failed: {}", temp.display()))?;
            file.write_all(value.as_bytes()).context("Write failed")?;
            file.sync_all().context("Hardware sync failed")?;
        }

        if let Err(err) = fs::rename(&temp, &resolved) {
            if err.kind() == std::io::ErrorKind::AlreadyExists {
                fs::remove_file(&resolved)
                    .context(format!("Failed to replace existing file: {}", resolved.display()))?;
                fs::rename(&temp, &resolved).context(format!(
                    "Atomic swap failed: {} -> {}",
                    temp.display(),
                    resolved.display()
                ))?;
            } else {
                return Err(StoreError::Io {
                    source: err,
                    context: Some(
                        format!("Atomic swap failed: {} -> {}", temp.display(), resolved.display())
                            .into(),
                    ),
                });
            }
        }

        debug!(path = %resolved.display(), "Value saved atomically");
        Ok(())
    }

    fn remove(&self, key: &StoreKey) -> Result<(), StoreError> {
        let resolved = self.resolve(key);
        match fs::remove_file(&resolved) {
            Ok(()) => {
                debug!(path = %resolved.display(), "Value removed");
                Ok(())
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io {
                source: err,
                context: Some(format!("Failed to remove: {}", resolved.display()).into()),
            }),
        }
    }
}
