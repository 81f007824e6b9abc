#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate provides the attribute macro backing the platform-wide error
//! convention: enums with named `message`/`source` fields plus an optional
//! `context` slot that can be filled at the call site.
//!
//! ## Usage
//! Add the crate as a regular dependency of every crate that defines an
//! error enum:
//! ```toml
//! [dependencies]
//! ohub-derive = { path = "../infra/derive" }
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro reduces boilerplate by transforming a standard enum into a fully-featured
/// error type integrated with the `OnboardHub` infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides specialized `From<&str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`), plus a `context` field.
/// 4. Tuple or unit variants are rejected to keep error wiring explicit and reliable.
///
/// # Example
///
/// ```rust,ignore
/// use ohub_derive::ohub_error;
/// use std::borrow::Cow;
///
/// #[ohub_error]
/// pub enum StoreError {
///     #[error("Serialization failure{}: {source}", format_context(.context))]
///     Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// // Usage:
/// fn save() -> Result<(), StoreError> {
///     serde_json::to_string(&42)
///         .context("Encoding catalog")?; // Adds context to the serde_json error
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn ohub_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
