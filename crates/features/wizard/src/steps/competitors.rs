use crate::registry::FieldName;
use crate::state::{ErrorMap, Fragment, Submit, check_field};
use ohub_domain::client::Competitor;

/// Which SWOT list of the competitor draft to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwotList {
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

/// Controller for the competitors screen.
///
/// The website format check runs on commit but does NOT block it: a
/// competitor with a malformed website is appended anyway and the error is
/// only surfaced. This asymmetry with the branches step reproduces the
/// observed panel behavior and is pinned by tests.
#[derive(Debug, Clone, Default)]
pub struct CompetitorsStep {
    items: Vec<Competitor>,
    draft: Competitor,
    errors: ErrorMap,
}

impl CompetitorsStep {
    pub fn hydrate(&mut self, items: Vec<Competitor>) {
        self.items = items;
        self.draft = Competitor::default();
        self.errors.clear();
    }

    pub fn edit_draft(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::CompetitorName => self.draft.name = value,
            FieldName::CompetitorDescription => self.draft.description = value,
            FieldName::CompetitorWebsite => self.draft.website = value,
            FieldName::SocialLinks => self.draft.social_links = value,
            _ => return,
        }
        self.errors.remove(&field);
    }

    /// Appends a non-empty entry to one of the draft's SWOT lists.
    ///
    /// Returns whether an entry was appended; blank text is ignored.
    pub fn add_swot(&mut self, list: SwotList, text: impl Into<String>) -> bool {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.swot_list_mut(list).push(trimmed.to_owned());
        true
    }

    /// Removes a SWOT entry by position, preserving the order of the rest.
    pub fn remove_swot(&mut self, list: SwotList, index: usize) -> Option<String> {
        let entries = self.swot_list_mut(list);
        (index < entries.len()).then(|| entries.remove(index))
    }

    /// Commits the draft to the list.
    ///
    /// The website validator runs and its failure is surfaced, but the
    /// append happens regardless.
    pub fn add(&mut self) -> bool {
        let mut errors = ErrorMap::default();
        check_field(FieldName::CompetitorWebsite, &self.draft.website, &mut errors);
        self.errors = errors;

        self.items.push(std::mem::take(&mut self.draft));
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<Competitor> {
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
        Fragment::Competitors(self.items.clone())
    }

    #[must_use]
    pub fn items(&self) -> &[Competitor] {
        &self.items
    }

    #[must_use]
    pub const fn draft(&self) -> &Competitor {
        &self.draft
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    fn swot_list_mut(&mut self, list: SwotList) -> &mut Vec<String> {
        match list {
            SwotList::Strengths => &mut self.draft.swot.strengths,
            SwotList::Weaknesses => &mut self.draft.swot.weaknesses,
            SwotList::Opportunities => &mut self.draft.swot.opportunities,
            SwotList::Threats => &mut self.draft.swot.threats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_website_surfaces_error_but_does_not_block() {
        // Known asymmetry with the branches step: the entry is kept.
        let mut step = CompetitorsStep::default();
        step.edit_draft(FieldName::CompetitorName, "Rival Co");
        step.edit_draft(FieldName::CompetitorWebsite, "not a url");

        assert!(step.add());
        assert_eq!(step.items().len(), 1);
        assert_eq!(step.items()[0].website, "not a url");
        assert_eq!(step.errors().get(&FieldName::CompetitorWebsite), Some(&"invalid_url"));
    }

    #[test]
    fn valid_website_appends_without_errors() {
        let mut step = CompetitorsStep::default();
        step.edit_draft(FieldName::CompetitorWebsite, "rival.com");

        assert!(step.add());
        assert!(step.errors().is_empty());
    }

    #[test]
    fn swot_entries_accumulate_in_order() {
        let mut step = CompetitorsStep::default();
        step.add_swot(SwotList::Strengths, "brand recognition");
        step.add_swot(SwotList::Strengths, "  pricing  ");
        step.add_swot(SwotList::Strengths, "   ");
        step.add_swot(SwotList::Threats, "new entrants");

        assert_eq!(step.draft().swot.strengths, vec!["brand recognition", "pricing"]);
        assert_eq!(step.draft().swot.threats, vec!["new entrants"]);

        let removed = step.remove_swot(SwotList::Strengths, 0);
        assert_eq!(removed.as_deref(), Some("brand recognition"));
        assert_eq!(step.draft().swot.strengths, vec!["pricing"]);
    }

    #[test]
    fn commit_carries_the_swot_block_and_resets_the_draft() {
        let mut step = CompetitorsStep::default();
        step.edit_draft(FieldName::CompetitorName, "Rival Co");
        step.add_swot(SwotList::Weaknesses, "slow delivery");

        assert!(step.add());
        assert_eq!(step.items()[0].swot.weaknesses, vec!["slow delivery"]);
        assert!(step.draft().swot.weaknesses.is_empty());
    }
}
