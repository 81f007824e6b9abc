//! # Wizard Step Controllers
//!
//! One controller per screen, all sharing the same machine: `Editing` →
//! `Submitting` → `Rejected` (errors shown, still editing) or `Advanced`
//! (fragment emitted upward) or `Retreated` (fragment emitted, no validation).
//!
//! Editing a field optimistically clears that field's error the moment the
//! value changes, independent of re-validation. List-valued steps
//! (branches, competitors, segments) use an accumulate-then-commit pattern:
//! a transient draft is validated and appended to the committed list, then
//! the draft resets to empty.

mod branches;
mod business;
mod competitors;
mod personal;
mod segments;

pub use branches::BranchesStep;
pub use business::BusinessStep;
pub use competitors::{CompetitorsStep, SwotList};
pub use personal::PersonalStep;
pub use segments::SegmentsStep;
