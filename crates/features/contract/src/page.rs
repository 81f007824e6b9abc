use crate::error::ContractError;
use crate::templates::{
    TEMPLATE_AR, TEMPLATE_EN, TOKEN_CLIENT_NAME, TOKEN_DATE, TOKEN_DURATION, TOKEN_START_DATE,
};
use chrono::NaiveDate;
use ohub_domain::client::ClientRecord;
use ohub_domain::constants::{
    KEY_CAMPAIGN_PLAN, KEY_CLIENT_DATA, KEY_CONTRACT_TERMS, KEY_PACKAGES, KEY_SELECTED_PACKAGE,
};
use ohub_domain::package::Package;
use ohub_domain::plan::CampaignPlan;
use ohub_locale::Lang;
use ohub_storage::Store;
use tracing::debug;

/// Everything the templates substitute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractContext {
    pub client_name: String,
    pub start_date: String,
    pub duration: String,
    /// Formatted per locale into the `[DATE]` token.
    pub date: Option<NaiveDate>,
}

/// Renders the contract body for `lang`, substituting every token whose
/// value is present. Empty values leave their token visible so a half-filled
/// plan produces an obviously incomplete document instead of a silently
/// wrong one.
#[must_use]
pub fn render(lang: Lang, ctx: &ContractContext) -> String {
    let template = match lang {
        Lang::En => TEMPLATE_EN,
        Lang::Ar => TEMPLATE_AR,
    };

    let mut body = template.to_owned();

    if let Some(date) = ctx.date {
        let formatted = match lang {
            Lang::En => date.format("%-d %B %Y").to_string(),
            Lang::Ar => date.format("%d/%m/%Y").to_string(),
        };
        body = body.replace(TOKEN_DATE, &formatted);
    }
    if !ctx.start_date.trim().is_empty() {
        body = body.replace(TOKEN_START_DATE, ctx.start_date.trim());
    }
    if !ctx.duration.trim().is_empty() {
        body = body.replace(TOKEN_DURATION, ctx.duration.trim());
    }
    if !ctx.client_name.trim().is_empty() {
        body = body.replace(TOKEN_CLIENT_NAME, ctx.client_name.trim());
    }

    body
}

/// Contract page state over the store.
///
/// Reads the fallback client mirror and the campaign plan for placeholder
/// values, and owns the free-text terms and selected-package slots.
#[derive(Debug, Clone)]
pub struct ContractPage {
    store: Store,
}

impl ContractPage {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Assembles the substitution context from persisted state.
    ///
    /// The client name prefers the business name and falls back to the
    /// contact person. Absent slots leave their fields empty, which keeps
    /// the tokens visible in the rendered body.
    ///
    /// # Errors
    /// Returns [`ContractError::Store`] on a backend I/O failure.
    pub fn context(&self, today: NaiveDate) -> Result<ContractContext, ContractError> {
        let client: Option<ClientRecord> = self.store.get(KEY_CLIENT_DATA)?;
        let plan: Option<CampaignPlan> = self.store.get(KEY_CAMPAIGN_PLAN)?;

        let client_name = client
            .map(|c| {
                if c.business.business_name.trim().is_empty() {
                    c.personal.full_name
                } else {
                    c.business.business_name
                }
            })
            .unwrap_or_default();

        let plan = plan.unwrap_or_default();

        Ok(ContractContext {
            client_name,
            start_date: plan.start_date,
            duration: plan.duration,
            date: Some(today),
        })
    }

    /// Renders the contract for `lang` from persisted state.
    ///
    /// # Errors
    /// Returns [`ContractError::Store`] on a backend I/O failure.
    pub fn generate(&self, lang: Lang, today: NaiveDate) -> Result<String, ContractError> {
        let ctx = self.context(today)?;
        debug!(%lang, client = %ctx.client_name, "Contract generated");
        Ok(render(lang, &ctx))
    }

    /// Loads the stored free-text terms.
    ///
    /// # Errors
    /// Returns [`ContractError::Store`] on a backend I/O failure.
    pub fn terms(&self) -> Result<Option<String>, ContractError> {
        Ok(self.store.get(KEY_CONTRACT_TERMS)?)
    }

    /// Persists the free-text terms.
    ///
    /// # Errors
    /// Returns [`ContractError::Store`] on a backend I/O failure.
    pub fn save_terms(&self, terms: &str) -> Result<(), ContractError> {
        self.store.put(KEY_CONTRACT_TERMS, terms)?;
        debug!(len = terms.len(), "Contract terms saved");
        Ok(())
    }

    /// Resolves the package the contract references, if any.
    ///
    /// # Errors
    /// Returns [`ContractError::Store`] on a backend I/O failure.
    pub fn selected_package(&self) -> Result<Option<Package>, ContractError> {
        let Some(id) = self.store.get::<String>(KEY_SELECTED_PACKAGE)? else {
            return Ok(None);
        };
        let catalog: Vec<Package> = self.store.get(KEY_PACKAGES)?.unwrap_or_default();
        Ok(catalog.into_iter().find(|p| p.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn english_render_substitutes_all_tokens() {
        let ctx = ContractContext {
            client_name: "Nile Bakery".to_owned(),
            start_date: "2025-04-01".to_owned(),
            duration: "6 months".to_owned(),
            date: Some(date()),
        };

        let body = render(Lang::En, &ctx);
        assert!(body.contains("9 March 2025"));
        assert!(body.contains("starts on 2025-04-01"));
        assert!(body.contains("runs for 6 months"));
        assert!(body.contains("between the Agency and Nile Bakery"));
        assert!(!body.contains(TOKEN_CLIENT_NAME));
    }

    #[test]
    fn arabic_render_uses_the_arabic_body() {
        let ctx = ContractContext {
            client_name: "مخبز النيل".to_owned(),
            start_date: "٢٠٢٥-٠٤-٠١".to_owned(),
            duration: "٦ أشهر".to_owned(),
            date: Some(date()),
        };

        let body = render(Lang::Ar, &ctx);
        assert!(body.contains("اتفاقية تقديم خدمات"));
        assert!(body.contains("09/03/2025"));
        assert!(body.contains("مخبز النيل"));
        assert!(!body.contains(TOKEN_START_DATE));
    }

    #[test]
    fn missing_values_keep_their_tokens_visible() {
        let body = render(Lang::En, &ContractContext::default());
        assert!(body.contains(TOKEN_DATE));
        assert!(body.contains(TOKEN_START_DATE));
        assert!(body.contains(TOKEN_DURATION));
        assert!(body.contains(TOKEN_CLIENT_NAME));
    }

    #[test]
    fn context_prefers_business_name_over_contact() {
        let store = Store::in_memory();
        let mut record = ClientRecord::default();
        record.personal.full_name = "Sara Mostafa".to_owned();
        store.put(KEY_CLIENT_DATA, &record).unwrap();

        let page = ContractPage::new(store.clone());
        assert_eq!(page.context(date()).unwrap().client_name, "Sara Mostafa");

        record.business.business_name = "Nile Bakery".to_owned();
        store.put(KEY_CLIENT_DATA, &record).unwrap();
        assert_eq!(page.context(date()).unwrap().client_name, "Nile Bakery");
    }

    #[test]
    fn generate_reads_the_campaign_plan() {
        let store = Store::in_memory();
        store
            .put(KEY_CAMPAIGN_PLAN, &CampaignPlan {
                start_date: "2025-05-01".to_owned(),
                duration: "3 months".to_owned(),
            })
            .unwrap();

        let body = ContractPage::new(store).generate(Lang::En, date()).unwrap();
        assert!(body.contains("2025-05-01"));
        assert!(body.contains("3 months"));
        // No client record: the name token stays visible.
        assert!(body.contains(TOKEN_CLIENT_NAME));
    }

    #[test]
    fn terms_and_selected_package_roundtrip() {
        let store = Store::in_memory();
        let page = ContractPage::new(store.clone());

        assert!(page.terms().unwrap().is_none());
        page.save_terms("Payment due in 14 days.").unwrap();
        assert_eq!(page.terms().unwrap().as_deref(), Some("Payment due in 14 days."));

        let package = Package { id: "p_7".to_owned(), ..Package::default() };
        store.put(KEY_PACKAGES, &vec![package]).unwrap();
        store.put(KEY_SELECTED_PACKAGE, &"p_7").unwrap();
        assert_eq!(page.selected_package().unwrap().unwrap().id, "p_7");

        store.put(KEY_SELECTED_PACKAGE, &"missing").unwrap();
        assert!(page.selected_package().unwrap().is_none());
    }
}
