use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[ohub_derive::ohub_error]
pub enum StoreError {
    #[error("Invalid store key{}: {message}", format_context(.context))]
    InvalidKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Hardware I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Serialization failure{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
