//! # Field Validators
//!
//! Pure predicate functions for every format the intake forms accept. All of
//! them are total: any input yields `false` or a structured invalid result,
//! never a panic. Empty input is handled by the registry's required-field
//! check, not here — callers skip format validation for empty values.
//!
//! Egyptian mobile numbers are the one locale-specific format: an optional
//! `+20` or `0` country prefix, the mobile discriminator `1`, a carrier digit
//! in `{0, 1, 2, 5}`, then eight subscriber digits. Arabic-Indic digits are
//! normalized before matching so `٠١٠١٢٣٤٥٦٧٨` validates like `01012345678`.

use ohub_kernel::text::{contains_arabic, normalize_digits};
use strum_macros::{Display, IntoStaticStr};

/// Carrier digits valid after the leading `1` of an Egyptian mobile number.
const CARRIER_DIGITS: [char; 4] = ['0', '1', '2', '5'];

/// Subscriber digits following the carrier digit.
const SUBSCRIBER_DIGITS: usize = 8;

/// Longest DNS label a top-level domain may use.
const TLD_MAX: usize = 63;
const TLD_MIN: usize = 2;

/// Validates an Egyptian mobile number.
///
/// Digits are normalized first, then the number must match the optional
/// `+20`/`0` prefix, the `1` discriminator, a valid carrier digit, and
/// exactly eight further digits.
///
/// # Examples
/// ```rust
/// use ohub_wizard::validators::is_valid_egyptian_mobile;
///
/// assert!(is_valid_egyptian_mobile("01012345678"));
/// assert!(is_valid_egyptian_mobile("+201212345678"));
/// assert!(!is_valid_egyptian_mobile("0312345678"));
/// ```
#[must_use]
pub fn is_valid_egyptian_mobile(value: &str) -> bool {
    let normalized = normalize_digits(value);
    let trimmed = normalized.trim();

    let rest =
        trimmed.strip_prefix("+20").or_else(|| trimmed.strip_prefix('0')).unwrap_or(trimmed);

    let mut chars = rest.chars();
    if chars.next() != Some('1') {
        return false;
    }
    if !chars.next().is_some_and(|c| CARRIER_DIGITS.contains(&c)) {
        return false;
    }

    let mut subscriber = 0;
    for c in chars {
        if !c.is_ascii_digit() {
            return false;
        }
        subscriber += 1;
    }
    subscriber == SUBSCRIBER_DIGITS
}

/// Validates an email address of the `local@domain.tld` shape.
///
/// Arabic-range characters and embedded whitespace are rejected outright;
/// beyond that the check is deliberately shallow — exactly one `@` and at
/// least one `.` after it with non-empty parts.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if contains_arabic(value) {
        return false;
    }

    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Options for [`is_valid_url`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlOptions {
    /// Accept bare host forms like `example.com` without a scheme.
    pub allow_protocol_less: bool,
}

/// Validates a website address.
///
/// With [`UrlOptions::allow_protocol_less`] set, a bare `label(.label)+` host
/// with a 2–63 character final label passes. Otherwise — and as a fallback —
/// the value must be an absolute `http`/`https` URL whose host contains a dot
/// and a valid-looking top-level label. Non-HTTP schemes are rejected.
///
/// # Examples
/// ```rust
/// use ohub_wizard::validators::{UrlOptions, is_valid_url};
///
/// assert!(is_valid_url("example.com", UrlOptions { allow_protocol_less: true }));
/// assert!(!is_valid_url("example.com", UrlOptions::default()));
/// assert!(is_valid_url("https://example.com/pricing", UrlOptions::default()));
/// assert!(!is_valid_url("ftp://example.com", UrlOptions::default()));
/// ```
#[must_use]
pub fn is_valid_url(value: &str, options: UrlOptions) -> bool {
    if contains_arabic(value) {
        return false;
    }

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    if options.allow_protocol_less && is_bare_host(trimmed) {
        return true;
    }

    is_absolute_http_url(trimmed)
}

fn is_bare_host(host: &str) -> bool {
    let mut labels = host.split('.');
    let Some(first) = labels.next() else {
        return false;
    };
    if !is_host_label(first) {
        return false;
    }

    let mut last = None;
    for label in labels {
        if !is_host_label(label) {
            return false;
        }
        last = Some(label);
    }

    // At least two labels, and the final one looks like a TLD.
    last.is_some_and(|tld| (TLD_MIN..=TLD_MAX).contains(&tld.len()))
}

fn is_host_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= TLD_MAX
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}

fn is_absolute_http_url(value: &str) -> bool {
    let Some(rest) =
        value.strip_prefix("https://").or_else(|| value.strip_prefix("http://"))
    else {
        return false;
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host = match authority.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => authority,
    };

    host.contains('.') && is_bare_host(host)
}

/// Inclusive bounds for [`validate_age_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for AgeBounds {
    fn default() -> Self {
        Self { min: 0, max: 120 }
    }
}

/// Why an age value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AgeReason {
    Empty,
    ArabicText,
    NotInteger,
    TooYoung,
    TooOld,
}

/// Structured result of [`validate_age_range`].
///
/// `parsed` is populated whenever the value was numeric, even when it falls
/// outside the bounds, so the caller can report what was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeValidation {
    pub parsed: Option<i64>,
    pub reason: Option<AgeReason>,
}

impl AgeValidation {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.reason.is_none()
    }

    const fn valid(parsed: i64) -> Self {
        Self { parsed: Some(parsed), reason: None }
    }

    const fn invalid(parsed: Option<i64>, reason: AgeReason) -> Self {
        Self { parsed, reason: Some(reason) }
    }
}

/// Validates a target age value against inclusive bounds.
///
/// Digits are normalized first; remaining Arabic text, non-integer input and
/// out-of-range values each map to their own [`AgeReason`].
///
/// # Examples
/// ```rust
/// use ohub_wizard::validators::{AgeBounds, AgeReason, validate_age_range};
///
/// let ok = validate_age_range("25", AgeBounds::default());
/// assert!(ok.is_valid());
/// assert_eq!(ok.parsed, Some(25));
///
/// let old = validate_age_range("200", AgeBounds::default());
/// assert_eq!(old.reason, Some(AgeReason::TooOld));
/// assert_eq!(old.parsed, Some(200));
/// ```
#[must_use]
pub fn validate_age_range(value: &str, bounds: AgeBounds) -> AgeValidation {
    let normalized = normalize_digits(value);
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        return AgeValidation::invalid(None, AgeReason::Empty);
    }
    if contains_arabic(trimmed) {
        return AgeValidation::invalid(None, AgeReason::ArabicText);
    }

    let Ok(parsed) = trimmed.parse::<i64>() else {
        return AgeValidation::invalid(None, AgeReason::NotInteger);
    };

    if parsed < bounds.min {
        return AgeValidation::invalid(Some(parsed), AgeReason::TooYoung);
    }
    if parsed > bounds.max {
        return AgeValidation::invalid(Some(parsed), AgeReason::TooOld);
    }

    AgeValidation::valid(parsed)
}
