//! The multi-step orchestrator.
//!
//! [`Wizard`] owns the ordered step controllers and the aggregate record.
//! User input flows through it into the active controller; every committed
//! mutation re-publishes the active fragment so outer collaborators can
//! mirror in-progress state without reaching into the controllers.

use crate::directory::ClientDirectory;
use crate::error::WizardError;
use crate::events::WizardEvent;
use crate::state::{ErrorMap, Fragment, STEP_ORDER, Step, Submit};
use crate::steps::{BranchesStep, BusinessStep, CompetitorsStep, PersonalStep, SegmentsStep, SwotList};
use ohub_domain::client::ClientRecord;
use ohub_domain::steps::StepSet;
use ohub_events::EventHub;
use ohub_storage::Store;
use tracing::{debug, info};

/// Multi-step intake wizard.
///
/// Holds the ordered list of steps, the active index, the aggregate
/// [`ClientRecord`] assembled from step fragments, and the set of completed
/// steps. Completing the final step persists the record through the
/// [`ClientDirectory`] and publishes [`WizardEvent::Completed`].
#[derive(Debug)]
pub struct Wizard {
    directory: ClientDirectory,
    hub: EventHub,
    record: ClientRecord,
    completed: StepSet,
    active: usize,
    personal: PersonalStep,
    business: BusinessStep,
    branches: BranchesStep,
    competitors: CompetitorsStep,
    segments: SegmentsStep,
}

impl Wizard {
    /// Starts a blank wizard over the given store and event hub.
    #[must_use]
    pub fn new(store: Store, hub: EventHub) -> Self {
        Self {
            directory: ClientDirectory::new(store),
            hub,
            record: ClientRecord::default(),
            completed: StepSet::empty(),
            active: 0,
            personal: PersonalStep::default(),
            business: BusinessStep::default(),
            branches: BranchesStep::default(),
            competitors: CompetitorsStep::default(),
            segments: SegmentsStep::default(),
        }
    }

    /// Resumes editing an existing record; every step buffer is hydrated
    /// from its section.
    #[must_use]
    pub fn resume(store: Store, hub: EventHub, record: ClientRecord) -> Self {
        let mut wizard = Self::new(store, hub);
        wizard.personal.hydrate(record.personal.clone());
        wizard.business.hydrate(record.business.clone());
        wizard.branches.hydrate(record.branches.clone());
        wizard.competitors.hydrate(record.competitors.clone());
        wizard.segments.hydrate(record.segments.clone());
        wizard.record = record;
        wizard
    }

    #[must_use]
    pub const fn active_step(&self) -> Step {
        STEP_ORDER[self.active]
    }

    #[must_use]
    pub const fn step_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub const fn record(&self) -> &ClientRecord {
        &self.record
    }

    #[must_use]
    pub const fn completed(&self) -> StepSet {
        self.completed
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.completed.contains(StepSet::ALL)
    }

    /// Error map of the active step.
    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        match self.active_step() {
            Step::Personal => self.personal.errors(),
            Step::Business => self.business.errors(),
            Step::Branches => self.branches.errors(),
            Step::Competitors => self.competitors.errors(),
            Step::Segments => self.segments.errors(),
        }
    }

    /// Routes a field edit to the active controller and mirrors the change.
    pub fn edit(&mut self, field: crate::registry::FieldName, value: impl Into<String>) {
        match self.active_step() {
            Step::Personal => self.personal.edit(field, value),
            Step::Business => self.business.edit(field, value),
            Step::Branches => self.branches.edit_draft(field, value),
            Step::Competitors => self.competitors.edit_draft(field, value),
            Step::Segments => self.segments.edit_draft(field, value),
        }
        self.mirror();
    }

    /// Commits the active list step's draft. Non-list steps return false.
    pub fn add_item(&mut self) -> bool {
        let added = match self.active_step() {
            Step::Branches => self.branches.add(),
            Step::Competitors => self.competitors.add(),
            Step::Segments => self.segments.add(),
            Step::Personal | Step::Business => false,
        };
        if added {
            self.mirror();
        }
        added
    }

    /// Removes the active list step's item at `index` by position.
    pub fn remove_item(&mut self, index: usize) -> bool {
        let removed = match self.active_step() {
            Step::Branches => self.branches.remove(index).is_some(),
            Step::Competitors => self.competitors.remove(index).is_some(),
            Step::Segments => self.segments.remove(index).is_some(),
            Step::Personal | Step::Business => false,
        };
        if removed {
            self.mirror();
        }
        removed
    }

    /// Adds a SWOT entry to the competitor draft (competitors step only).
    pub fn add_swot(&mut self, list: SwotList, text: impl Into<String>) -> bool {
        if self.active_step() != Step::Competitors {
            return false;
        }
        let added = self.competitors.add_swot(list, text);
        if added {
            self.mirror();
        }
        added
    }

    /// Removes a SWOT entry from the competitor draft by position.
    pub fn remove_swot(&mut self, list: SwotList, index: usize) -> bool {
        if self.active_step() != Step::Competitors {
            return false;
        }
        let removed = self.competitors.remove_swot(list, index).is_some();
        if removed {
            self.mirror();
        }
        removed
    }

    /// Submits the active step.
    ///
    /// On validation failure nothing advances and `Ok(false)` is returned;
    /// the step's error map holds the details. On success the fragment is
    /// merged into the aggregate, the step is marked complete, and the
    /// wizard either moves forward or — from the last step — persists the
    /// record and publishes [`WizardEvent::Completed`].
    ///
    /// # Errors
    /// Returns [`WizardError::Store`] if final persistence fails.
    pub fn submit_step(&mut self) -> Result<bool, WizardError> {
        let step = self.active_step();
        let outcome = match step {
            Step::Personal => self.personal.submit(),
            Step::Business => self.business.submit(),
            Step::Branches => self.branches.submit(),
            Step::Competitors => self.competitors.submit(),
            Step::Segments => self.segments.submit(),
        };

        match outcome {
            Submit::Rejected => {
                debug!(%step, "Step submit rejected by validation");
                Ok(false)
            },
            Submit::Advanced(fragment) => {
                self.merge(fragment.clone());
                self.completed |= step.flag();
                self.hub.emit(&WizardEvent::StepAdvanced { step, fragment });

                if self.active + 1 < STEP_ORDER.len() {
                    self.active += 1;
                    debug!(%step, next = %self.active_step(), "Step advanced");
                } else {
                    let record = self.finish()?;
                    self.hub.emit(&WizardEvent::Completed { record });
                }
                Ok(true)
            },
        }
    }

    /// Retreats to the previous step. No validation runs; the current
    /// buffer is merged so nothing typed is lost. Returns false on the
    /// first step.
    pub fn previous_step(&mut self) -> bool {
        if self.active == 0 {
            return false;
        }

        let step = self.active_step();
        let fragment = match step {
            Step::Personal => self.personal.retreat(),
            Step::Business => self.business.retreat(),
            Step::Branches => self.branches.retreat(),
            Step::Competitors => self.competitors.retreat(),
            Step::Segments => self.segments.retreat(),
        };

        self.merge(fragment.clone());
        self.active -= 1;
        self.hub.emit(&WizardEvent::StepRetreated { step, fragment });
        true
    }

    // Read access for the embedding shell.

    #[must_use]
    pub const fn personal(&self) -> &PersonalStep {
        &self.personal
    }

    #[must_use]
    pub const fn business(&self) -> &BusinessStep {
        &self.business
    }

    #[must_use]
    pub const fn branches(&self) -> &BranchesStep {
        &self.branches
    }

    #[must_use]
    pub const fn competitors(&self) -> &CompetitorsStep {
        &self.competitors
    }

    #[must_use]
    pub const fn segments(&self) -> &SegmentsStep {
        &self.segments
    }

    fn merge(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Personal(personal) => self.record.personal = personal,
            Fragment::Business(business) => self.record.business = business,
            Fragment::Branches(branches) => self.record.branches = branches,
            Fragment::Competitors(competitors) => self.record.competitors = competitors,
            Fragment::Segments(segments) => self.record.segments = segments,
        }
    }

    fn finish(&mut self) -> Result<ClientRecord, WizardError> {
        let record = self.directory.save(self.record.clone())?;
        self.record = record.clone();
        info!(id = %record.id, "Intake wizard completed");
        Ok(record)
    }

    fn mirror(&self) {
        let step = self.active_step();
        let fragment = match step {
            Step::Personal => self.personal.fragment(),
            Step::Business => self.business.fragment(),
            Step::Branches => self.branches.fragment(),
            Step::Competitors => self.competitors.fragment(),
            Step::Segments => self.segments.fragment(),
        };
        self.hub.emit(&WizardEvent::DraftUpdated { step, fragment });
    }
}
