//! # Contract Generation
//!
//! Renders a service agreement from independent English and Arabic template
//! bodies, substituting the literal tokens `[DATE]`, `[START DATE]`,
//! `[DURATION]` and `[Client Name]` with the locale-formatted current date,
//! campaign-plan fields and the client name. A token whose value is missing
//! stays visible in the output rather than silently vanishing.
//!
//! Free-text contract terms and the selected package travel through the
//! store under their fixed keys.

mod error;
mod page;
mod templates;

pub use crate::error::{ContractError, ContractErrorExt};
pub use crate::page::{ContractContext, ContractPage, render};
pub use crate::templates::{TOKEN_CLIENT_NAME, TOKEN_DATE, TOKEN_DURATION, TOKEN_START_DATE};
