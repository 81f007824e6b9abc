use crate::registry::FieldName;
use crate::state::{ErrorMap, Fragment, Submit, check_field};
use ohub_domain::client::PersonalInfo;

/// Controller for the personal-information screen.
///
/// Owns the transient input buffer until submit. Submission validates every
/// registry-governed field of this step; on failure the error map is
/// populated and the step stays in editing, on success the step yields a
/// [`Fragment::Personal`] to the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct PersonalStep {
    form: PersonalInfo,
    errors: ErrorMap,
}

impl PersonalStep {
    /// Preloads the buffer from an existing record section.
    pub fn hydrate(&mut self, form: PersonalInfo) {
        self.form = form;
        self.errors.clear();
    }

    /// Updates one field of the buffer.
    ///
    /// The field's previous error is cleared optimistically; re-validation
    /// only happens on the next submit. Fields of other steps are ignored —
    /// lookup is by exact key.
    pub fn edit(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::FullName => self.form.full_name = value,
            FieldName::Email => self.form.email = value,
            FieldName::Phone => self.form.phone = value,
            FieldName::Position => self.form.position = value,
            _ => return,
        }
        self.errors.remove(&field);
    }

    /// Validates the buffer and either advances or rejects.
    pub fn submit(&mut self) -> Submit {
        let mut errors = ErrorMap::default();
        check_field(FieldName::FullName, &self.form.full_name, &mut errors);
        check_field(FieldName::Email, &self.form.email, &mut errors);
        check_field(FieldName::Phone, &self.form.phone, &mut errors);
        check_field(FieldName::Position, &self.form.position, &mut errors);

        if errors.is_empty() {
            self.errors.clear();
            Submit::Advanced(self.fragment())
        } else {
            self.errors = errors;
            Submit::Rejected
        }
    }

    /// Yields the current buffer for backward navigation. No validation runs.
    #[must_use]
    pub fn retreat(&self) -> Fragment {
        self.fragment()
    }

    #[must_use]
    pub fn fragment(&self) -> Fragment {
        Fragment::Personal(self.form.clone())
    }

    #[must_use]
    pub const fn form(&self) -> &PersonalInfo {
        &self.form
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_with_empty_form_advances() {
        // No field is hard-required in the current registry configuration.
        let mut step = PersonalStep::default();
        assert!(step.submit().advanced());
    }

    #[test]
    fn invalid_email_blocks_and_surfaces_error() {
        let mut step = PersonalStep::default();
        step.edit(FieldName::FullName, "Omar Khaled");
        step.edit(FieldName::Email, "omar@invalid");

        assert_eq!(step.submit(), Submit::Rejected);
        assert_eq!(step.errors().get(&FieldName::Email), Some(&"invalid_email"));
    }

    #[test]
    fn editing_clears_the_field_error_optimistically() {
        let mut step = PersonalStep::default();
        step.edit(FieldName::Email, "broken");
        let _ = step.submit();
        assert!(step.errors().contains_key(&FieldName::Email));

        // Still invalid, but the error disappears on edit.
        step.edit(FieldName::Email, "still broken");
        assert!(!step.errors().contains_key(&FieldName::Email));
    }

    #[test]
    fn successful_submit_emits_the_buffer_as_fragment() {
        let mut step = PersonalStep::default();
        step.edit(FieldName::FullName, "Sara");
        step.edit(FieldName::Email, "sara@agency.com");
        step.edit(FieldName::Phone, "01012345678");

        match step.submit() {
            Submit::Advanced(Fragment::Personal(info)) => {
                assert_eq!(info.full_name, "Sara");
                assert_eq!(info.phone, "01012345678");
            },
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn foreign_fields_are_ignored() {
        let mut step = PersonalStep::default();
        step.edit(FieldName::BusinessName, "Not mine");
        assert_eq!(step.form(), &PersonalInfo::default());
    }
}
