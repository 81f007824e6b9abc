//! # Localization
//!
//! Every user-facing string in the panel routes through this crate: a
//! two-value language switch ([`Lang`]) that also drives layout mirroring
//! (RTL ⇄ LTR), and a static message catalog looked up by string key.
//!
//! The catalog carries both translations for every key; a key the catalog
//! does not know is echoed back verbatim, so a missing translation degrades
//! to a visible identifier instead of a crash.
//!
//! # Example
//!
//! ```rust
//! use ohub_locale::{Lang, translate, translate_with};
//!
//! assert_eq!(translate(Lang::En, "phone_error"), "Invalid Egyptian mobile number");
//! assert_eq!(translate(Lang::Ar, "next"), "التالي");
//! assert_eq!(
//!     translate_with(Lang::En, "age_range", &[("min", "0"), ("max", "120")]),
//!     "Age must be between 0 and 120",
//! );
//! ```

mod catalog;
mod lang;

pub use catalog::{ALL_KEYS, translate, translate_with};
pub use lang::Lang;
