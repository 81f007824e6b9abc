//! Draft validation for the catalog editor.

use fxhash::FxHashMap;
use ohub_kernel::text::{contains_arabic, normalize_digits};
use strum_macros::{AsRefStr, Display};

/// Editable fields of a package draft, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum CatalogField {
    EnglishName,
    ArabicName,
    Price,
    FeatureEn,
    FeatureAr,
}

/// Validation errors of one editor operation, keyed by field.
/// Values are catalog message keys.
pub type CatalogErrors = FxHashMap<CatalogField, &'static str>;

/// Input buffer for adding or editing a package.
///
/// Values stay as typed; [`PackageDraft::validate`] polices script
/// consistency and the price format, and the editor applies the
/// mirror-the-other-name default on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDraft {
    pub english_name: String,
    pub arabic_name: String,
    /// Price as typed; Arabic-Indic digits are accepted.
    pub price: String,
}

impl PackageDraft {
    #[must_use]
    pub fn new(
        english_name: impl Into<String>,
        arabic_name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            english_name: english_name.into(),
            arabic_name: arabic_name.into(),
            price: price.into(),
        }
    }

    /// Validates the draft, returning an empty map when it is acceptable.
    #[must_use]
    pub fn validate(&self) -> CatalogErrors {
        let mut errors = CatalogErrors::default();

        let english = self.english_name.trim();
        let arabic = self.arabic_name.trim();

        if english.is_empty() && arabic.is_empty() {
            errors.insert(CatalogField::EnglishName, "package_name_required");
            errors.insert(CatalogField::ArabicName, "package_name_required");
            return errors;
        }

        if contains_arabic(english) {
            errors.insert(CatalogField::EnglishName, "english_letters_only");
        }
        if has_latin_letters(arabic) {
            errors.insert(CatalogField::ArabicName, "arabic_letters_only");
        }
        if !self.price.trim().is_empty() && self.parsed_price().is_none() {
            errors.insert(CatalogField::Price, "invalid_price");
        }

        errors
    }

    /// The price as a number, digit-normalized; `None` when absent or
    /// unparsable.
    #[must_use]
    pub fn parsed_price(&self) -> Option<f64> {
        let normalized = normalize_digits(&self.price);
        let trimmed = normalized.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|p| p.is_finite())
    }
}

/// Cross-validates one localized feature tag.
///
/// At least one side must be non-empty; each side must stay in its script.
#[must_use]
pub(crate) fn validate_feature(en: &str, ar: &str) -> CatalogErrors {
    let mut errors = CatalogErrors::default();

    if en.trim().is_empty() && ar.trim().is_empty() {
        errors.insert(CatalogField::FeatureEn, "required_field");
        return errors;
    }

    if contains_arabic(en) {
        errors.insert(CatalogField::FeatureEn, "english_letters_only");
    }
    if has_latin_letters(ar) {
        errors.insert(CatalogField::FeatureAr, "arabic_letters_only");
    }

    errors
}

fn has_latin_letters(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_names_empty_is_rejected() {
        let errors = PackageDraft::default().validate();
        assert_eq!(errors.get(&CatalogField::EnglishName), Some(&"package_name_required"));
        assert_eq!(errors.get(&CatalogField::ArabicName), Some(&"package_name_required"));
    }

    #[test]
    fn one_name_suffices() {
        assert!(PackageDraft::new("Starter", "", "").validate().is_empty());
        assert!(PackageDraft::new("", "المبتدئ", "").validate().is_empty());
    }

    #[test]
    fn scripts_may_not_cross() {
        let errors = PackageDraft::new("باقة", "", "").validate();
        assert_eq!(errors.get(&CatalogField::EnglishName), Some(&"english_letters_only"));

        let errors = PackageDraft::new("", "Basic", "").validate();
        assert_eq!(errors.get(&CatalogField::ArabicName), Some(&"arabic_letters_only"));
    }

    #[test]
    fn price_parses_with_arabic_digits() {
        let draft = PackageDraft::new("Starter", "", "١٥٠٠");
        assert!(draft.validate().is_empty());
        assert_eq!(draft.parsed_price(), Some(1500.0));

        let bad = PackageDraft::new("Starter", "", "free");
        assert_eq!(bad.validate().get(&CatalogField::Price), Some(&"invalid_price"));
        assert_eq!(bad.parsed_price(), None);

        // Empty price is simply absent.
        assert_eq!(PackageDraft::new("Starter", "", " ").parsed_price(), None);
    }

    #[test]
    fn feature_tags_follow_the_same_script_rules() {
        assert!(validate_feature("Weekly report", "تقرير أسبوعي").is_empty());
        assert!(validate_feature("Weekly report", "").is_empty());

        let errors = validate_feature("", "");
        assert_eq!(errors.get(&CatalogField::FeatureEn), Some(&"required_field"));

        let errors = validate_feature("تقرير", "report");
        assert!(errors.contains_key(&CatalogField::FeatureEn));
        assert!(errors.contains_key(&CatalogField::FeatureAr));
    }
}
