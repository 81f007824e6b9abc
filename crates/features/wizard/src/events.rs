use crate::state::{Fragment, Step};
use ohub_domain::client::ClientRecord;

/// Notifications the orchestrator publishes on the event hub.
///
/// The former callback-prop contract (`onNext`/`onPrevious`/`onUpdate`)
/// expressed as explicit messages: outer collaborators subscribe to keep a
/// live mirror of in-progress state without the wizard knowing about them.
/// Delivery is fire-and-forget, at most one event per committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A committed change to the active step's buffer or list.
    DraftUpdated { step: Step, fragment: Fragment },
    /// A step validated successfully and yielded its fragment.
    StepAdvanced { step: Step, fragment: Fragment },
    /// Backward navigation; the fragment carries the unvalidated buffer.
    StepRetreated { step: Step, fragment: Fragment },
    /// The final step advanced and the aggregate record was persisted.
    Completed { record: ClientRecord },
}
