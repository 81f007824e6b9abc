//! # Client Intake Wizard
//!
//! This crate implements the structural core of the onboarding panel: the
//! field validators, the declarative validation registry, the per-step form
//! controllers, and the orchestrator that assembles step fragments into one
//! [`ohub_domain::client::ClientRecord`].
//!
//! ## Architecture
//!
//! The wizard is split along the boundaries an embedding shell drives:
//!
//! 1.  **Validation ([`validators`]):** Pure, total predicate functions. They
//!     never fail — malformed input yields `false` or a structured invalid
//!     result, never an error or a panic.
//! 2.  **Registry ([`registry`]):** The fixed field-name → rule mapping.
//!     Lookup is by exact key with no fallback; a failed rule surfaces its
//!     message key, resolved through the locale catalog at render time.
//! 3.  **Step Controllers ([`steps`]):** One controller per wizard screen.
//!     Each owns its transient input buffer until submit, validates on
//!     submit, surfaces an error map on rejection, and emits a [`Fragment`]
//!     on advance or retreat.
//! 4.  **Orchestrator ([`orchestrator`]):** Owns the ordered steps and the
//!     aggregate record, merges fragments, persists the finished record, and
//!     publishes [`WizardEvent`]s for outer collaborators.
//!
//! ## Validation asymmetry
//!
//! List steps validate their draft at accumulate time. Branch drafts block
//! on an invalid phone; competitor and segment drafts surface the error but
//! append anyway. The asymmetry is deliberate — it reproduces the observed
//! panel behavior exactly and is pinned by tests.

mod directory;
mod error;
mod events;
mod orchestrator;
pub mod registry;
mod state;
pub mod steps;
pub mod validators;

pub use crate::directory::ClientDirectory;
pub use crate::error::{WizardError, WizardErrorExt};
pub use crate::events::WizardEvent;
pub use crate::orchestrator::Wizard;
pub use crate::registry::{FieldName, FieldRule, rule_for};
pub use crate::state::{ErrorMap, Fragment, Step, Submit, localize_errors};
