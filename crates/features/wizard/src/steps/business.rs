use crate::registry::FieldName;
use crate::state::{ErrorMap, Fragment, Submit, check_field};
use ohub_domain::client::BusinessInfo;

/// Controller for the business-information screen.
#[derive(Debug, Clone, Default)]
pub struct BusinessStep {
    form: BusinessInfo,
    errors: ErrorMap,
}

impl BusinessStep {
    pub fn hydrate(&mut self, form: BusinessInfo) {
        self.form = form;
        self.errors.clear();
    }

    pub fn edit(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::BusinessName => self.form.business_name = value,
            FieldName::Category => self.form.category = value,
            FieldName::Description => self.form.description = value,
            FieldName::MainOfficeAddress => self.form.main_office_address = value,
            FieldName::EstablishedYear => self.form.established_year = value,
            _ => return,
        }
        self.errors.remove(&field);
    }

    pub fn submit(&mut self) -> Submit {
        let mut errors = ErrorMap::default();
        check_field(FieldName::BusinessName, &self.form.business_name, &mut errors);
        check_field(FieldName::Category, &self.form.category, &mut errors);
        check_field(FieldName::Description, &self.form.description, &mut errors);
        check_field(FieldName::MainOfficeAddress, &self.form.main_office_address, &mut errors);
        check_field(FieldName::EstablishedYear, &self.form.established_year, &mut errors);

        if errors.is_empty() {
            self.errors.clear();
            Submit::Advanced(self.fragment())
        } else {
            self.errors = errors;
            Submit::Rejected
        }
    }

    #[must_use]
    pub fn retreat(&self) -> Fragment {
        self.fragment()
    }

    #[must_use]
    pub fn fragment(&self) -> Fragment {
        Fragment::Business(self.form.clone())
    }

    #[must_use]
    pub const fn form(&self) -> &BusinessInfo {
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
    fn free_text_fields_accept_anything() {
        let mut step = BusinessStep::default();
        step.edit(FieldName::BusinessName, "مخبز النيل");
        step.edit(FieldName::Category, "Food & Beverage");
        step.edit(FieldName::EstablishedYear, "2015");

        assert!(step.submit().advanced());
    }

    #[test]
    fn fragment_carries_the_buffer() {
        let mut step = BusinessStep::default();
        step.edit(FieldName::MainOfficeAddress, "12 Tahrir Sq, Cairo");

        match step.submit() {
            Submit::Advanced(Fragment::Business(info)) => {
                assert_eq!(info.main_office_address, "12 Tahrir Sq, Cairo");
            },
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
