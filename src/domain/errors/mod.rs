//! # Translation Errors
//!
//! Typed error kinds for translation, canonicalization and normalization.
//!
//! Error codes are organized by category:
//! - 1000-1098: Schema errors (missing fields, unknown tags, wrong kinds, missing payloads)
//! - 1099: Structural validation errors
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::errors::{TranslationError, TranslationResult};
//!
//! fn require_id(id: &str) -> TranslationResult<&str> {
//!     if id.is_empty() {
//!         return Err(TranslationError::missing("id"));
//!     }
//!     Ok(id)
//! }
//!
//! assert!(require_id("").is_err());
//! ```

pub mod translation_error;

pub use translation_error::{TranslationError, TranslationResult, classify_serde_error};
