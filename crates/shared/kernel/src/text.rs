//! Bilingual text helpers
//!
//! Fast, allocation-shy primitives the validators and renderers share:
//! - Normalize Arabic-Indic digits to ASCII digits
//! - Detect strong right-to-left script for per-snippet direction
//! - Detect Arabic-range characters for script-consistency checks

use std::borrow::Cow;

/// Arabic-Indic digit block (٠–٩).
const ARABIC_INDIC_ZERO: u32 = 0x0660;
const ARABIC_INDIC_NINE: u32 = 0x0669;

/// Strong RTL ranges: Hebrew + Arabic blocks and the Arabic presentation forms.
const RTL_RANGES: &[(u32, u32)] = &[(0x0591, 0x07FF), (0xFB1D, 0xFDFD), (0xFE70, 0xFEFC)];

/// Arabic script ranges used by the "no Arabic characters here" validators.
const ARABIC_RANGES: &[(u32, u32)] = &[(0x0600, 0x06FF), (0xFB50, 0xFDFF), (0xFE70, 0xFEFF)];

/// Text direction of a single display snippet.
///
/// This drives per-snippet alignment (a placeholder, a package name), not the
/// whole document direction, which follows the active UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Dir {
    #[default]
    Ltr,
    Rtl,
}

impl Dir {
    /// The literal attribute value: `"ltr"` or `"rtl"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// Replaces each Arabic-Indic digit (٠–٩) with its ASCII equivalent,
/// leaving every other character untouched.
///
/// Borrows the input when no replacement is needed. Side-effect-free and
/// idempotent.
///
/// # Examples
/// ```rust
/// use ohub_kernel::text::normalize_digits;
///
/// assert_eq!(normalize_digits("٠١٢٣٤٥٦٧٨٩"), "0123456789");
/// assert_eq!(normalize_digits("tel: ٠١٠-١٢٣"), "tel: 010-123");
/// assert_eq!(normalize_digits("plain"), "plain");
/// ```
#[must_use]
pub fn normalize_digits(value: &str) -> Cow<'_, str> {
    if !value.chars().any(is_arabic_indic_digit) {
        return Cow::Borrowed(value);
    }

    Cow::Owned(
        value
            .chars()
            .map(|c| {
                if is_arabic_indic_digit(c) {
                    // Both blocks are contiguous, so the offset maps directly.
                    char::from(b'0' + u8::try_from(c as u32 - ARABIC_INDIC_ZERO).unwrap_or(0))
                } else {
                    c
                }
            })
            .collect(),
    )
}

/// Returns true iff the text contains at least one strong-RTL character.
///
/// Empty input is LTR by definition.
#[must_use]
pub fn is_rtl(text: &str) -> bool {
    text.chars().any(|c| in_ranges(c, RTL_RANGES))
}

/// Picks the text direction for one display snippet based on [`is_rtl`].
#[must_use]
pub fn dir_for(text: &str) -> Dir {
    if is_rtl(text) { Dir::Rtl } else { Dir::Ltr }
}

/// Returns true iff the text contains any Arabic-range character.
///
/// Used by validators that reject Arabic script in Latin-only fields
/// (email, URL, the English-labeled catalog fields).
#[must_use]
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| in_ranges(c, ARABIC_RANGES))
}

#[inline]
fn is_arabic_indic_digit(c: char) -> bool {
    (ARABIC_INDIC_ZERO..=ARABIC_INDIC_NINE).contains(&(c as u32))
}

#[inline]
fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let code = c as u32;
    ranges.iter().any(|&(start, end)| (start..=end).contains(&code))
}
