use crate::error::StoreError;
use std::fmt;

/// A validated store key.
///
/// Keys name the fixed slots of the panel's persisted state (`clients`,
/// `packages_master`, ...). They double as file names in the file backend,
/// so the character set is restricted to ASCII alphanumerics and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoreKey(String);

impl StoreKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StoreKey {
    type Error = StoreError;

    fn try_from(value: &str) -> Result<Self, StoreError> {
        if value.is_empty() {
            return Err(StoreError::InvalidKey {
                message: "EMPTY".into(),
                context: Some("Store key cannot be empty".into()),
            });
        }

        if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(StoreError::InvalidKey {
                message: value.to_owned().into(),
                context: Some("Store key contains illegal characters".into()),
            });
        }

        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for StoreKey {
    type Error = StoreError;

    fn try_from(value: String) -> Result<Self, StoreError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for StoreKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
