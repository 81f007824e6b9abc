//! Package catalog models.
//!
//! Catalog entries predating the bilingual feature editor stored each feature
//! as a bare string. Deserialization normalizes those by mirroring the string
//! into both language slots, so a reload-and-save round trip always yields the
//! normalized form.

use serde::{Deserialize, Serialize};

/// A sellable service package with bilingual naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Package {
    pub id: String,
    pub english_name: String,
    pub arabic_name: String,
    pub price: Option<f64>,
    pub features: Vec<PackageFeature>,
}

/// One localized feature tag of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FeatureRepr")]
pub struct PackageFeature {
    pub en: String,
    pub ar: String,
}

impl PackageFeature {
    #[must_use]
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self { en: en.into(), ar: ar.into() }
    }
}

/// Wire representation tolerating legacy bare-string features.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeatureRepr {
    Legacy(String),
    Localized {
        #[serde(default)]
        en: String,
        #[serde(default)]
        ar: String,
    },
}

impl From<FeatureRepr> for PackageFeature {
    fn from(repr: FeatureRepr) -> Self {
        match repr {
            FeatureRepr::Legacy(text) => Self { ar: text.clone(), en: text },
            FeatureRepr::Localized { en, ar } => Self { en, ar },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_string_feature_fills_both_slots() {
        let feature: PackageFeature = serde_json::from_str(r#""Monthly report""#).unwrap();
        assert_eq!(feature, PackageFeature::new("Monthly report", "Monthly report"));
    }

    #[test]
    fn localized_feature_passes_through() {
        let feature: PackageFeature =
            serde_json::from_str(r#"{"en":"Ads","ar":"إعلانات"}"#).unwrap();
        assert_eq!(feature, PackageFeature::new("Ads", "إعلانات"));
    }

    #[test]
    fn mixed_catalog_normalizes_on_load() {
        let raw = r#"[{
            "id": "p_1",
            "englishName": "Starter",
            "arabicName": "المبتدئ",
            "price": 1500.0,
            "features": ["Logo design", {"en": "Two posts", "ar": "منشوران"}]
        }]"#;

        let catalog: Vec<Package> = serde_json::from_str(raw).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].features.len(), 2);
        assert_eq!(catalog[0].features[0], PackageFeature::new("Logo design", "Logo design"));
        assert_eq!(catalog[0].features[1], PackageFeature::new("Two posts", "منشوران"));
    }
}
