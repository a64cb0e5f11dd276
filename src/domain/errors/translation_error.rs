//! # Translation Error
//!
//! This module provides the [`TranslationError`] enum returned by every
//! fallible operation in the crate.
//!
//! # Error Code Ranges
//!
//! - **1001-1098**: Schema errors
//! - **1099**: Structural validation errors
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::errors::TranslationError;
//!
//! let error = TranslationError::missing("security_id");
//! assert_eq!(error.code(), 1001);
//! assert_eq!(error.field(), Some("security_id"));
//! ```

use thiserror::Error;

/// Typed translation failure.
///
/// Every variant names the offending field path or literal so callers can
/// pattern-match on the kind and report the location without parsing text.
///
/// # Error Codes
///
/// | Code | Kind |
/// |------|------|
/// | 1001 | Required field missing |
/// | 1002 | Unknown variant tag |
/// | 1003 | Type mismatch |
/// | 1004 | Schema mismatch |
/// | 1099 | Validation error |
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    /// A mandatory field is absent or empty.
    #[error("required field missing: {field}")]
    RequiredFieldMissing {
        /// Dotted path of the missing field.
        field: String,
    },

    /// A tagged union carries a tag (or a closed enumeration a literal) that
    /// has no mapping.
    #[error("unknown {union} tag: {tag}")]
    UnknownVariantTag {
        /// Name of the union or enumeration.
        union: String,
        /// The unrecognized literal.
        tag: String,
    },

    /// A field is present but holds the wrong primitive kind.
    #[error("type mismatch at {field}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Dotted path of the field.
        field: String,
        /// Expected kind.
        expected: String,
        /// What was actually found.
        found: String,
    },

    /// A raw payload lacks the expected nested payload key entirely.
    #[error("schema mismatch: expected payload key '{expected_key}'")]
    SchemaMismatch {
        /// The payload key that was expected.
        expected_key: String,
    },

    /// A structural precondition failed.
    #[error("validation error: {0}")]
    ValidationError(String),
}

impl TranslationError {
    /// Creates a required-field error.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.into(),
        }
    }

    /// Creates an unknown-tag error.
    #[must_use]
    pub fn unknown_tag(union: impl Into<String>, tag: impl Into<String>) -> Self {
        Self::UnknownVariantTag {
            union: union.into(),
            tag: tag.into(),
        }
    }

    /// Creates a type-mismatch error.
    #[must_use]
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Creates a schema-mismatch error.
    #[must_use]
    pub fn schema_mismatch(expected_key: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            expected_key: expected_key.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Returns the numeric error code.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocf_ledger::domain::errors::TranslationError;
    ///
    /// assert_eq!(TranslationError::unknown_tag("ConversionMechanism", "X").code(), 1002);
    /// assert_eq!(TranslationError::validation("empty").code(), 1099);
    /// ```
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::RequiredFieldMissing { .. } => 1001,
            Self::UnknownVariantTag { .. } => 1002,
            Self::TypeMismatch { .. } => 1003,
            Self::SchemaMismatch { .. } => 1004,
            Self::ValidationError(_) => 1099,
        }
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.code() {
            1099 => "validation",
            1000..=1098 => "schema",
            _ => "unknown",
        }
    }

    /// Returns the field path this error refers to, when it has one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::RequiredFieldMissing { field } | Self::TypeMismatch { field, .. } => {
                Some(field.as_str())
            }
            _ => None,
        }
    }

    /// Prefixes the field path with a parent path.
    ///
    /// Used when a nested translation fails and the caller knows where the
    /// nested value lives (e.g. `conversion_triggers[0]`).
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::RequiredFieldMissing { field } => Self::RequiredFieldMissing {
                field: join_path(parent, &field),
            },
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => Self::TypeMismatch {
                field: join_path(parent, &field),
                expected,
                found,
            },
            other => other,
        }
    }
}

fn join_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else if field.is_empty() {
        parent.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Classifies a serde parse failure into the translation taxonomy.
///
/// `context` is the record being parsed and becomes the field-path prefix.
/// Missing fields map to [`TranslationError::RequiredFieldMissing`], unknown
/// enum literals to [`TranslationError::UnknownVariantTag`], everything else
/// to [`TranslationError::TypeMismatch`]. Errors that one of this crate's own
/// parsers raised inside a serde impl keep their original kind.
///
/// # Examples
///
/// ```
/// use ocf_ledger::domain::errors::{classify_serde_error, TranslationError};
///
/// #[derive(serde::Deserialize, Debug)]
/// struct Record {
///     #[allow(dead_code)]
///     id: String,
/// }
///
/// let err = serde_json::from_value::<Record>(serde_json::json!({})).unwrap_err();
/// assert_eq!(
///     classify_serde_error("Record", &err),
///     TranslationError::missing("Record.id")
/// );
/// ```
#[must_use]
pub fn classify_serde_error(context: &str, err: &serde_json::Error) -> TranslationError {
    let message = err.to_string();

    if let Some(rest) = message.strip_prefix("missing field `")
        && let Some(name) = rest.split('`').next()
    {
        return TranslationError::missing(join_path(context, name));
    }

    if let Some(rest) = message.strip_prefix("unknown variant `")
        && let Some(tag) = rest.split('`').next()
    {
        return TranslationError::unknown_tag(context, tag);
    }

    // Errors raised by our own parsers inside a serde impl arrive as custom
    // messages; recover their kind from the display form.
    if let Some(rest) = message.strip_prefix("unknown ")
        && let Some((union, tag)) = rest.split_once(" tag: ")
    {
        return TranslationError::unknown_tag(union, tag);
    }
    if let Some(field) = message.strip_prefix("required field missing: ") {
        return TranslationError::missing(join_path(context, field));
    }

    TranslationError::type_mismatch(context, "valid record", message)
}
