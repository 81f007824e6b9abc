//! Shared step-state machinery: fragments, submit outcomes, error maps.

use crate::registry::{FieldName, rule_for};
use fxhash::FxHashMap;
use ohub_domain::client::{Branch, BusinessInfo, Competitor, PersonalInfo, Segment};
use ohub_domain::constants::{
    STEP_BRANCHES, STEP_BUSINESS, STEP_COMPETITORS, STEP_PERSONAL, STEP_SEGMENTS,
};
use ohub_domain::steps::StepSet;
use ohub_locale::{Lang, translate};
use strum_macros::{Display, EnumIter};

/// Validation errors of one step, keyed by field name.
///
/// Values are catalog message keys; [`localize_errors`] resolves them for the
/// active language at render time.
pub type ErrorMap = FxHashMap<FieldName, &'static str>;

/// One screen of the intake wizard, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Step {
    Personal,
    Business,
    Branches,
    Competitors,
    Segments,
}

/// Wizard screen order; index == progress position.
pub const STEP_ORDER: [Step; 5] =
    [Step::Personal, Step::Business, Step::Branches, Step::Competitors, Step::Segments];

impl Step {
    /// The completion flag this step contributes to the orchestrator's
    /// [`StepSet`].
    #[must_use]
    pub const fn flag(self) -> StepSet {
        match self {
            Self::Personal => StepSet::PERSONAL,
            Self::Business => StepSet::BUSINESS,
            Self::Branches => StepSet::BRANCHES,
            Self::Competitors => StepSet::COMPETITORS,
            Self::Segments => StepSet::SEGMENTS,
        }
    }

    /// Catalog key of the step title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Personal => "step_personal",
            Self::Business => "step_business",
            Self::Branches => "step_branches",
            Self::Competitors => "step_competitors",
            Self::Segments => "step_segments",
        }
    }

    /// Stable string identifier used in persisted state.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Personal => STEP_PERSONAL,
            Self::Business => STEP_BUSINESS,
            Self::Branches => STEP_BRANCHES,
            Self::Competitors => STEP_COMPETITORS,
            Self::Segments => STEP_SEGMENTS,
        }
    }
}

/// The partial record a step emits on advance or retreat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Personal(PersonalInfo),
    Business(BusinessInfo),
    Branches(Vec<Branch>),
    Competitors(Vec<Competitor>),
    Segments(Vec<Segment>),
}

/// Outcome of a step submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submit {
    /// Validation passed; the step yields its fragment to the orchestrator.
    Advanced(Fragment),
    /// Validation failed; errors are populated and navigation is blocked.
    Rejected,
}

impl Submit {
    #[must_use]
    pub const fn advanced(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }
}

/// Applies the registry rule for `field` to `value`, recording any failure.
///
/// Empty values bypass format validation; a required empty field surfaces the
/// generic required message instead.
pub(crate) fn check_field(field: FieldName, value: &str, errors: &mut ErrorMap) {
    let rule = rule_for(field);
    let trimmed = value.trim();

    if trimmed.is_empty() {
        if rule.required {
            errors.insert(field, "required_field");
        }
        return;
    }

    if let Some(validator) = rule.validator
        && !validator(value)
    {
        errors.insert(field, rule.message_key);
    }
}

/// Resolves an error map into display strings for the active language.
#[must_use]
pub fn localize_errors(errors: &ErrorMap, lang: Lang) -> Vec<(FieldName, String)> {
    errors.iter().map(|(field, key)| (*field, translate(lang, key).to_owned())).collect()
}
