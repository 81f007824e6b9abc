use ohub_kernel::text::Dir;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The active UI language.
///
/// A two-value switch: the panel ships English and Arabic only. The language
/// choice drives both the catalog lookup and the whole-document layout
/// direction; individual snippets still pick their own direction via
/// [`ohub_kernel::text::dir_for`].
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Lang {
    #[default]
    En,
    Ar,
}

impl Lang {
    /// Document-level layout direction for this language.
    #[must_use]
    pub const fn dir(self) -> Dir {
        match self {
            Self::En => Dir::Ltr,
            Self::Ar => Dir::Rtl,
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// The other language; backs the language toggle in the shell header.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parses_both_language_codes() {
        assert_eq!(Lang::from_str("en").unwrap(), Lang::En);
        assert_eq!(Lang::from_str("AR").unwrap(), Lang::Ar);
        assert!(Lang::from_str("fr").is_err());
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Lang::En.dir().as_str(), "ltr");
        assert_eq!(Lang::Ar.dir().as_str(), "rtl");
        assert!(Lang::Ar.is_rtl());
    }

    #[test]
    fn toggle_flips_between_the_two() {
        assert_eq!(Lang::En.toggle(), Lang::Ar);
        assert_eq!(Lang::Ar.toggle().toggle(), Lang::Ar);
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Lang::Ar).unwrap(), r#""ar""#);
        assert_eq!(serde_json::from_str::<Lang>(r#""en""#).unwrap(), Lang::En);
    }
}
