use std::borrow::Cow;

/// Error types specific to the wizard feature.
///
/// Step validation failures are not errors — they are data (see
/// [`crate::ErrorMap`]). This enum covers real faults on the persistence path.
#[ohub_derive::ohub_error]
pub enum WizardError {
    #[error("Store error{}: {source}", format_context(.context))]
    Store { source: ohub_storage::StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal wizard error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
