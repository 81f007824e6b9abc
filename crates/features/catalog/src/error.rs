use std::borrow::Cow;

/// Error types specific to the catalog feature.
///
/// Draft validation failures are data (see [`crate::CatalogErrors`]); this
/// enum covers faults on the persistence path.
#[ohub_derive::ohub_error]
pub enum CatalogError {
    #[error("Store error{}: {source}", format_context(.context))]
    Store { source: ohub_storage::StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
