//! # Package Catalog Editor
//!
//! CRUD over the bilingual package catalog: add, edit and delete packages,
//! attach and remove localized feature tags, and keep the whole list
//! persisted under its fixed store key on every mutation.
//!
//! ## Script consistency
//!
//! Name and feature fields are cross-validated: the English-labeled field
//! must contain no Arabic-range characters, the Arabic-labeled field no
//! Latin letters. A package needs at least one of its two names; the missing
//! one is defaulted to mirror the other. Prices accept Arabic-Indic digits
//! and must parse as a number.
//!
//! ## Legacy tolerance
//!
//! Catalogs written before the bilingual editor stored features as bare
//! strings; loading normalizes them into `{en, ar}` pairs (see
//! [`ohub_domain::package`]), so persist → reload → re-serialize always
//! yields the normalized form.

mod draft;
mod editor;
mod error;

pub use crate::draft::{CatalogErrors, CatalogField, PackageDraft};
pub use crate::editor::CatalogEditor;
pub use crate::error::{CatalogError, CatalogErrorExt};
