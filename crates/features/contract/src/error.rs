use std::borrow::Cow;

/// Error types specific to the contract feature.
#[ohub_derive::ohub_error]
pub enum ContractError {
    #[error("Store error{}: {source}", format_context(.context))]
    Store { source: ohub_storage::StoreError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal contract error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
