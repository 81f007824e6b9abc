use crate::registry::FieldName;
use crate::state::{ErrorMap, Fragment, Submit, check_field};
use ohub_domain::client::Branch;

/// Controller for the branches screen.
///
/// Accumulate-then-commit: the draft buffer is validated on
/// [`BranchesStep::add`] and, if the phone format passes, appended to the
/// committed list and reset. An invalid phone leaves the list unchanged and
/// surfaces a `branchPhone` error.
#[derive(Debug, Clone, Default)]
pub struct BranchesStep {
    items: Vec<Branch>,
    draft: Branch,
    errors: ErrorMap,
}

impl BranchesStep {
    pub fn hydrate(&mut self, items: Vec<Branch>) {
        self.items = items;
        self.draft = Branch::default();
        self.errors.clear();
    }

    pub fn edit_draft(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::BranchName => self.draft.name = value,
            FieldName::BranchAddress => self.draft.address = value,
            FieldName::BranchPhone => self.draft.phone = value,
            _ => return,
        }
        self.errors.remove(&field);
    }

    /// Commits the draft to the list.
    ///
    /// A phone failing the Egyptian-mobile check blocks the commit: the list
    /// stays unchanged, the draft is kept for correction, and the error map
    /// gains a `branchPhone` entry. Returns whether the item was appended.
    pub fn add(&mut self) -> bool {
        let mut errors = ErrorMap::default();
        check_field(FieldName::BranchPhone, &self.draft.phone, &mut errors);

        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        self.items.push(std::mem::take(&mut self.draft));
        self.errors.clear();
        true
    }

    /// Removes the item at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Branch> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// List steps advance with whatever was committed; drafts were already
    /// validated at accumulate time.
    pub fn submit(&mut self) -> Submit {
        Submit::Advanced(self.fragment())
    }

    #[must_use]
    pub fn retreat(&self) -> Fragment {
        self.fragment()
    }

    #[must_use]
    pub fn fragment(&self) -> Fragment {
        Fragment::Branches(self.items.clone())
    }

    #[must_use]
    pub fn items(&self) -> &[Branch] {
        &self.items
    }

    #[must_use]
    pub const fn draft(&self) -> &Branch {
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
    fn invalid_phone_blocks_the_append() {
        let mut step = BranchesStep::default();
        step.edit_draft(FieldName::BranchPhone, "123");

        assert!(!step.add());
        assert!(step.items().is_empty());
        assert_eq!(step.errors().get(&FieldName::BranchPhone), Some(&"phone_error"));
        // Draft is kept for correction.
        assert_eq!(step.draft().phone, "123");
    }

    #[test]
    fn valid_phone_appends_exactly_one_and_resets_the_draft() {
        let mut step = BranchesStep::default();
        step.edit_draft(FieldName::BranchName, "Downtown");
        step.edit_draft(FieldName::BranchPhone, "01012345678");

        assert!(step.add());
        assert_eq!(step.items().len(), 1);
        assert_eq!(step.items()[0].name, "Downtown");
        assert_eq!(step.draft(), &Branch::default());
        assert!(step.errors().is_empty());
    }

    #[test]
    fn branch_without_phone_is_accepted() {
        // Phone is not required; empty bypasses format validation.
        let mut step = BranchesStep::default();
        step.edit_draft(FieldName::BranchName, "Giza");

        assert!(step.add());
        assert_eq!(step.items().len(), 1);
    }

    #[test]
    fn removal_preserves_relative_order() {
        let mut step = BranchesStep::default();
        for name in ["A", "B", "C", "D"] {
            step.edit_draft(FieldName::BranchName, name);
            assert!(step.add());
        }

        let removed = step.remove(1).expect("index in range");
        assert_eq!(removed.name, "B");

        let names: Vec<&str> = step.items().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);

        assert!(step.remove(10).is_none());
    }
}
