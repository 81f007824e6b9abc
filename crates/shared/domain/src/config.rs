use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level panel configuration shared across features.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfigInner {
    pub storage: StorageConfig,
    pub localization: LocalizationConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct PanelConfig {
    #[serde(flatten, default)]
    inner: Arc<PanelConfigInner>,
}

impl Deref for PanelConfig {
    type Target = PanelConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PanelConfig {
    fn deref_mut(&mut self) -> &mut PanelConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Store root for the persisted panel state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Active UI language and layout direction source.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocalizationConfig {
    /// Two-value switch: `en` or `ar`.
    pub language: String,
}

/// Logging knobs passed through to the logger builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub path: Option<PathBuf>,
    pub level: String,
    pub json: bool,
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("data") }
    }
}

impl Default for LocalizationConfig {
    fn default() -> Self {
        Self { language: "en".to_owned() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { path: None, level: "info".to_owned(), json: false }
    }
}
