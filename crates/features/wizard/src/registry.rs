//! # Field Validation Registry
//!
//! The fixed mapping from logical field name to validation rule. Lookup is by
//! exact key; there is no fallback or inheritance between keys.
//!
//! Contract for a consuming step: if a rule is `required`, the field must be
//! non-empty after trimming; if the rule carries a `validator`, it runs on any
//! non-empty value (empty values bypass format validation unless `required`
//! also demands presence). A failure surfaces the rule's `message_key`,
//! resolved through the active-language catalog at render time.
//!
//! In the current configuration no field is hard-required — the data model
//! treats every section as optional and the validators only police format.

use crate::validators::{
    AgeBounds, UrlOptions, is_valid_egyptian_mobile, is_valid_email, is_valid_url,
    validate_age_range,
};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Pure format predicate applied to a non-empty field value.
pub type Validator = fn(&str) -> bool;

/// Logical field names across all wizard screens.
///
/// Display/serialization uses the camelCase identifiers the persisted state
/// layout and the embedding shell use.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    // Personal info
    FullName,
    Email,
    Phone,
    Position,
    // Business info
    BusinessName,
    Category,
    Description,
    MainOfficeAddress,
    EstablishedYear,
    // Branch draft
    BranchName,
    BranchAddress,
    BranchPhone,
    // Competitor draft
    CompetitorName,
    CompetitorDescription,
    CompetitorWebsite,
    SocialLinks,
    // Segment draft
    SegmentName,
    SegmentDescription,
    TargetAge,
    TargetGender,
    Interests,
    Income,
}

/// One registry entry.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Must be non-empty after trimming.
    pub required: bool,
    /// Format check for non-empty values.
    pub validator: Option<Validator>,
    /// Catalog key surfaced when the rule fails.
    pub message_key: &'static str,
}

const PLAIN: FieldRule = FieldRule { required: false, validator: None, message_key: "required_field" };

const EMAIL: FieldRule =
    FieldRule { required: false, validator: Some(is_valid_email), message_key: "invalid_email" };

const MOBILE: FieldRule = FieldRule {
    required: false,
    validator: Some(is_valid_egyptian_mobile),
    message_key: "phone_error",
};

const WEBSITE: FieldRule =
    FieldRule { required: false, validator: Some(website_ok), message_key: "invalid_url" };

const AGE: FieldRule =
    FieldRule { required: false, validator: Some(age_ok), message_key: "invalid_age" };

fn website_ok(value: &str) -> bool {
    is_valid_url(value, UrlOptions { allow_protocol_less: true })
}

fn age_ok(value: &str) -> bool {
    validate_age_range(value, AgeBounds::default()).is_valid()
}

/// Returns the rule registered for `field`.
///
/// Every field carries an entry; fields without a format validator get the
/// plain rule so the required/empty contract stays uniform.
#[must_use]
pub const fn rule_for(field: FieldName) -> &'static FieldRule {
    match field {
        FieldName::Email => &EMAIL,
        FieldName::Phone | FieldName::BranchPhone => &MOBILE,
        FieldName::CompetitorWebsite => &WEBSITE,
        FieldName::TargetAge => &AGE,
        _ => &PLAIN,
    }
}
