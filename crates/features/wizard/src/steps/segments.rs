use crate::registry::FieldName;
use crate::state::{ErrorMap, Fragment, Submit, check_field};
use ohub_domain::client::Segment;

/// Controller for the target-segments screen.
///
/// Follows the competitors step: the target-age check runs on commit and is
/// surfaced, but does not block the append.
#[derive(Debug, Clone, Default)]
pub struct SegmentsStep {
    items: Vec<Segment>,
    draft: Segment,
    errors: ErrorMap,
}

impl SegmentsStep {
    pub fn hydrate(&mut self, items: Vec<Segment>) {
        self.items = items;
        self.draft = Segment::default();
        self.errors.clear();
    }

    pub fn edit_draft(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::SegmentName => self.draft.name = value,
            FieldName::SegmentDescription => self.draft.description = value,
            FieldName::TargetAge => self.draft.target_age = value,
            FieldName::TargetGender => self.draft.target_gender = value,
            FieldName::Interests => self.draft.interests = value,
            FieldName::Income => self.draft.income = value,
            _ => return,
        }
        self.errors.remove(&field);
    }

    pub fn add(&mut self) -> bool {
        let mut errors = ErrorMap::default();
        check_field(FieldName::TargetAge, &self.draft.target_age, &mut errors);
        self.errors = errors;

        self.items.push(std::mem::take(&mut self.draft));
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Segment> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn submit(&mut self) -> Submit {
        Submit::Advanced(self.fragment())
    }

    #[must_use]
    pub fn retreat(&self) -> Fragment {
        self.fragment()
    }

    #[must_use]
    pub fn fragment(&self) -> Fragment {
        Fragment::Segments(self.items.clone())
    }

    #[must_use]
    pub fn items(&self) -> &[Segment] {
        &self.items
    }

    #[must_use]
    pub const fn draft(&self) -> &Segment {
        &self.draft
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
    fn out_of_range_age_is_surfaced_but_committed() {
        let mut step = SegmentsStep::default();
        step.edit_draft(FieldName::SegmentName, "Students");
        step.edit_draft(FieldName::TargetAge, "200");

        assert!(step.add());
        assert_eq!(step.items().len(), 1);
        assert_eq!(step.errors().get(&FieldName::TargetAge), Some(&"invalid_age"));
    }

    #[test]
    fn normalized_arabic_age_passes() {
        let mut step = SegmentsStep::default();
        step.edit_draft(FieldName::TargetAge, "٢٥");

        assert!(step.add());
        assert!(step.errors().is_empty());
        assert_eq!(step.items()[0].target_age, "٢٥");
    }

    #[test]
    fn segments_keep_insertion_order_after_removal() {
        let mut step = SegmentsStep::default();
        for name in ["Gen Z", "Parents", "Expats"] {
            step.edit_draft(FieldName::SegmentName, name);
            step.add();
        }

        step.remove(0);
        let names: Vec<&str> = step.items().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Parents", "Expats"]);
    }
}
