//! Facade crate for `OnboardHub` features and shared modules.
//! Re-exports domain/kernel primitives and composes feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] with a loaded [`PanelConfig`] to get a wired [`Panel`].
//! - Construct feature entry points from the panel handles as needed.

pub use ohub_domain as domain;
use ohub_domain::config::PanelConfig;
pub use ohub_events::EventHub;
pub use ohub_kernel as kernel;
pub use ohub_locale::Lang;
use ohub_storage::Store;

/// Feature registry for runtime introspection.
pub mod features {
    pub use ohub_catalog as catalog;
    pub use ohub_contract as contract;
    pub use ohub_wizard as wizard;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["wizard", "catalog", "contract"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Wired handles shared by every feature.
#[derive(Debug, Clone)]
pub struct Panel {
    pub store: Store,
    pub events: EventHub,
    pub lang: Lang,
}

impl Panel {
    /// A fresh intake wizard over the panel's store and event hub.
    #[must_use]
    pub fn wizard(&self) -> ohub_wizard::Wizard {
        ohub_wizard::Wizard::new(self.store.clone(), self.events.clone())
    }

    /// The client directory backing the dashboard.
    #[must_use]
    pub fn clients(&self) -> ohub_wizard::ClientDirectory {
        ohub_wizard::ClientDirectory::new(self.store.clone())
    }

    /// The catalog editor over the persisted package list.
    ///
    /// # Errors
    /// Returns [`ohub_catalog::CatalogError`] if the store cannot be read.
    pub fn catalog(&self) -> Result<ohub_catalog::CatalogEditor, ohub_catalog::CatalogError> {
        ohub_catalog::CatalogEditor::open(self.store.clone())
    }

    /// The contract page over the persisted plan/terms state.
    #[must_use]
    pub fn contract(&self) -> ohub_contract::ContractPage {
        ohub_contract::ContractPage::new(self.store.clone())
    }
}

/// Initialize the panel: open the store at the configured root and wire the
/// shared event hub and language switch.
///
/// # Errors
/// Returns an error if the store root cannot be created or resolved.
pub fn init(config: &PanelConfig) -> Result<Panel, Box<dyn std::error::Error>> {
    let store = Store::builder().root(&config.storage.data_dir).open()?;
    let lang = config.localization.language.parse().unwrap_or_default();
    let events = EventHub::new();

    Ok(Panel { store, events, lang })
}
