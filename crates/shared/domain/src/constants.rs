//! Fixed identifiers of the persisted panel state.
//!
//! The store keys mirror the layout an embedding shell reads directly; renaming
//! one is a data migration, not a refactor.

/// Ordered list of intake client records.
pub const KEY_CLIENTS: &str = "clients";
/// ID of the client currently selected in the dashboard.
pub const KEY_SELECTED_CLIENT_ID: &str = "selectedClientId";
/// Fallback single client record for sessions predating the client list.
pub const KEY_CLIENT_DATA: &str = "clientData";
/// Campaign plan feeding the contract placeholders.
pub const KEY_CAMPAIGN_PLAN: &str = "campaign_plan_0";
/// ID of the package picked for the contract.
pub const KEY_SELECTED_PACKAGE: &str = "selectedPackage";
/// Full package catalog.
pub const KEY_PACKAGES: &str = "packages_master";
/// Free-text contract terms.
pub const KEY_CONTRACT_TERMS: &str = "contractTerms";

/// Wizard step identifiers, in wizard order.
pub const STEP_PERSONAL: &str = "personal";
pub const STEP_BUSINESS: &str = "business";
pub const STEP_BRANCHES: &str = "branches";
pub const STEP_COMPETITORS: &str = "competitors";
pub const STEP_SEGMENTS: &str = "segments";

/// Number of screens in the intake wizard.
pub const WIZARD_STEP_COUNT: usize = 5;
