use crate::draft::{CatalogErrors, PackageDraft, validate_feature};
use crate::error::CatalogError;
use ohub_domain::constants::{KEY_PACKAGES, KEY_SELECTED_PACKAGE};
use ohub_domain::package::{Package, PackageFeature};
use ohub_kernel::safe_nanoid;
use ohub_storage::Store;
use tracing::{debug, info};

/// Editor over the persisted package catalog.
///
/// The full catalog is serialized to its store key on every mutation —
/// last writer wins, matching the panel's single-threaded usage. Loading
/// normalizes legacy bare-string features via the domain model.
#[derive(Debug)]
pub struct CatalogEditor {
    store: Store,
    packages: Vec<Package>,
    errors: CatalogErrors,
}

impl CatalogEditor {
    /// Opens the editor over the stored catalog; an absent or corrupt slot
    /// reads as an empty catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] on a backend I/O failure.
    pub fn open(store: Store) -> Result<Self, CatalogError> {
        let packages: Vec<Package> = store.get(KEY_PACKAGES)?.unwrap_or_default();
        debug!(count = packages.len(), "Catalog loaded");
        Ok(Self { store, packages, errors: CatalogErrors::default() })
    }

    #[must_use]
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Errors of the most recent rejected operation.
    #[must_use]
    pub const fn errors(&self) -> &CatalogErrors {
        &self.errors
    }

    /// Adds a package from a draft.
    ///
    /// The missing name mirrors the provided one; the price is
    /// digit-normalized and parsed. Returns false (with errors populated)
    /// when the draft is rejected.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] if persisting the catalog fails.
    pub fn add(&mut self, draft: &PackageDraft) -> Result<bool, CatalogError> {
        let errors = draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return Ok(false);
        }

        let mut package = Self::package_from(draft);
        package.id = safe_nanoid!();

        self.packages.push(package);
        self.errors.clear();
        self.persist()?;
        Ok(true)
    }

    /// Rewrites the package at `index` from a draft, keeping its id and
    /// feature tags. Unknown positions and rejected drafts return false.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] if persisting the catalog fails.
    pub fn edit(&mut self, index: usize, draft: &PackageDraft) -> Result<bool, CatalogError> {
        if index >= self.packages.len() {
            return Ok(false);
        }

        let errors = draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return Ok(false);
        }

        let updated = Self::package_from(draft);
        let slot = &mut self.packages[index];
        slot.english_name = updated.english_name;
        slot.arabic_name = updated.arabic_name;
        slot.price = updated.price;

        self.errors.clear();
        self.persist()?;
        Ok(true)
    }

    /// Deletes the package at `index` by position. The caller has already
    /// confirmed the deletion; remaining packages keep their order.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] if persisting the catalog fails.
    pub fn remove(&mut self, index: usize) -> Result<Option<Package>, CatalogError> {
        if index >= self.packages.len() {
            return Ok(None);
        }

        let removed = self.packages.remove(index);
        self.persist()?;
        info!(id = %removed.id, "Package deleted");
        Ok(Some(removed))
    }

    /// Attaches a localized feature tag to the package at `index`.
    ///
    /// The empty side mirrors the other, matching the legacy-feature
    /// normalization. Returns false on a rejected tag or unknown position.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] if persisting the catalog fails.
    pub fn add_feature(
        &mut self,
        index: usize,
        en: &str,
        ar: &str,
    ) -> Result<bool, CatalogError> {
        if index >= self.packages.len() {
            return Ok(false);
        }

        let errors = validate_feature(en, ar);
        if !errors.is_empty() {
            self.errors = errors;
            return Ok(false);
        }

        let en = en.trim();
        let ar = ar.trim();
        let feature = match (en.is_empty(), ar.is_empty()) {
            (true, _) => PackageFeature::new(ar, ar),
            (_, true) => PackageFeature::new(en, en),
            _ => PackageFeature::new(en, ar),
        };

        self.packages[index].features.push(feature);
        self.errors.clear();
        self.persist()?;
        Ok(true)
    }

    /// Removes a feature tag by position within the package at `index`.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] if persisting the catalog fails.
    pub fn remove_feature(
        &mut self,
        index: usize,
        feature_index: usize,
    ) -> Result<Option<PackageFeature>, CatalogError> {
        let Some(package) = self.packages.get_mut(index) else {
            return Ok(None);
        };
        if feature_index >= package.features.len() {
            return Ok(None);
        }

        let removed = package.features.remove(feature_index);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Marks the package at `index` as the one the contract page uses.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] if writing the selection fails.
    pub fn select(&self, index: usize) -> Result<bool, CatalogError> {
        let Some(package) = self.packages.get(index) else {
            return Ok(false);
        };
        self.store.put(KEY_SELECTED_PACKAGE, &package.id)?;
        Ok(true)
    }

    /// Resolves the selected package, if the pointer is intact.
    ///
    /// # Errors
    /// Returns [`CatalogError::Store`] on a backend I/O failure.
    pub fn selected(&self) -> Result<Option<Package>, CatalogError> {
        let Some(id) = self.store.get::<String>(KEY_SELECTED_PACKAGE)? else {
            return Ok(None);
        };
        Ok(self.packages.iter().find(|p| p.id == id).cloned())
    }

    fn package_from(draft: &PackageDraft) -> Package {
        let english = draft.english_name.trim();
        let arabic = draft.arabic_name.trim();

        // The missing name mirrors the provided one.
        let (english_name, arabic_name) = match (english.is_empty(), arabic.is_empty()) {
            (true, _) => (arabic.to_owned(), arabic.to_owned()),
            (_, true) => (english.to_owned(), english.to_owned()),
            _ => (english.to_owned(), arabic.to_owned()),
        };

        Package {
            id: String::new(),
            english_name,
            arabic_name,
            price: draft.parsed_price(),
            features: Vec::new(),
        }
    }

    fn persist(&self) -> Result<(), CatalogError> {
        self.store.put(KEY_PACKAGES, &self.packages)?;
        debug!(count = self.packages.len(), "Catalog persisted");
        Ok(())
    }
}
