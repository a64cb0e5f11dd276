//! # Canonicalizer
//!
//! Primitive normalizations shared by every translator: canonical decimal
//! text, date to ledger time and back, comment list emptiness, and small
//! combinators for optional and required fields.
//!
//! The interchange side omits empty collections while the ledger side
//! always stores a list. [`clean_comment_list`] and [`ledger_comment_list`]
//! encode that asymmetry in one place.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::application::canonical::{
//!     date_to_ledger_time, ledger_time_to_date, to_canonical_decimal,
//! };
//!
//! assert_eq!(to_canonical_decimal("1.500").unwrap(), "1.5");
//! assert_eq!(to_canonical_decimal("2e3").unwrap(), "2000");
//!
//! let time = date_to_ledger_time("2024-06-30").unwrap();
//! assert_eq!(time, "2024-06-30T00:00:00.000Z");
//! assert_eq!(ledger_time_to_date(&time).unwrap(), "2024-06-30");
//! ```

use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::value_objects::{LedgerTime, Monetary, Numeric, OcfDate, Ratio};
use serde_json::Value;

// ============================================================================
// Decimals and Dates
// ============================================================================

/// Returns the canonical text of a decimal string.
///
/// Idempotent, and never changes the numeric value.
///
/// # Errors
///
/// Returns `TypeMismatch` for non-numeric text and `ValidationError` for
/// values beyond 28 significant digits.
pub fn to_canonical_decimal(input: &str) -> TranslationResult<String> {
    Numeric::parse(input).map(|n| n.to_string())
}

/// Returns the canonical text of a JSON string or number.
///
/// # Errors
///
/// Returns `TypeMismatch` naming `field` when the value is neither.
pub fn canonical_decimal_from_json(value: &Value, field: &str) -> TranslationResult<String> {
    Numeric::from_json(value, field).map(|n| n.to_string())
}

/// Converts a strict `YYYY-MM-DD` date to a ledger timestamp.
///
/// # Errors
///
/// Returns `TypeMismatch` if the date is malformed.
pub fn date_to_ledger_time(date: &str) -> TranslationResult<String> {
    OcfDate::parse(date).map(|d| d.to_ledger_time().to_string())
}

/// Extracts the `YYYY-MM-DD` date from a ledger timestamp.
///
/// Exact left inverse of [`date_to_ledger_time`].
///
/// # Errors
///
/// Returns `TypeMismatch` if the date segment is malformed.
pub fn ledger_time_to_date(timestamp: &str) -> TranslationResult<String> {
    LedgerTime::parse(timestamp).map(|t| t.date().to_string())
}

// ============================================================================
// Comment Lists
// ============================================================================

/// Interchange comment list: `None` when absent or empty.
#[must_use]
pub fn clean_comment_list(comments: Option<Vec<String>>) -> Option<Vec<String>> {
    comments.and_then(non_empty_list)
}

/// Ledger comment list: always a list, possibly empty.
#[must_use]
pub fn ledger_comment_list(comments: Option<&Vec<String>>) -> Vec<String> {
    comments.cloned().unwrap_or_default()
}

// ============================================================================
// Optional-Field Combinators
// ============================================================================

/// Maps a present optional value through a fallible conversion.
///
/// # Errors
///
/// Propagates the conversion error.
///
/// # Examples
///
/// ```
/// use ocf_ledger::application::canonical::map_optional;
///
/// let seven = "7".to_string();
/// let some: Option<u32> = map_optional(Some(&seven), |s| Ok(s.parse().unwrap())).unwrap();
/// assert_eq!(some, Some(7));
/// let none: Option<u32> = map_optional(None::<&String>, |s| Ok(s.parse().unwrap())).unwrap();
/// assert_eq!(none, None);
/// ```
pub fn map_optional<T, U, F>(value: Option<&T>, f: F) -> TranslationResult<Option<U>>
where
    T: ?Sized,
    F: FnOnce(&T) -> TranslationResult<U>,
{
    value.map(f).transpose()
}

/// Unwraps a mandatory value.
///
/// # Errors
///
/// Returns `RequiredFieldMissing` naming `field` when absent.
pub fn require<T>(value: Option<T>, field: &str) -> TranslationResult<T> {
    value.ok_or_else(|| TranslationError::missing(field))
}

/// Checks that mandatory text is non-empty and returns an owned copy.
///
/// # Errors
///
/// Returns `RequiredFieldMissing` naming `field` when blank.
pub fn require_text(value: &str, field: &str) -> TranslationResult<String> {
    if value.trim().is_empty() {
        return Err(TranslationError::missing(field));
    }
    Ok(value.to_string())
}

/// Optional text with blank strings treated as absent.
#[must_use]
pub fn optional_text(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty()).cloned()
}

/// `None` for an empty list.
#[must_use]
pub fn non_empty_list<T>(list: Vec<T>) -> Option<Vec<T>> {
    if list.is_empty() { None } else { Some(list) }
}

/// Checks that a mandatory list has at least one element.
///
/// # Errors
///
/// Returns `ValidationError` naming `field` when empty.
pub fn require_non_empty<'a, T>(list: &'a [T], field: &str) -> TranslationResult<&'a [T]> {
    if list.is_empty() {
        return Err(TranslationError::validation(format!(
            "{field} must contain at least one element"
        )));
    }
    Ok(list)
}

// ============================================================================
// Ledger Numerics
// ============================================================================

/// Checks that a numeric fits the ledger's fixed scale.
///
/// # Errors
///
/// Returns `ValidationError` if it needs more than `max_scale` fractional
/// digits.
pub fn ledger_numeric(value: Numeric, field: &str, max_scale: u32) -> TranslationResult<Numeric> {
    value.ensure_scale(max_scale, field)
}

/// Validates a monetary value for the ledger.
///
/// # Errors
///
/// Returns the currency or scale error naming `field`.
pub fn ledger_monetary(
    value: &Monetary,
    field: &str,
    max_scale: u32,
) -> TranslationResult<Monetary> {
    value.validate(field)?;
    let amount = ledger_numeric(value.amount, &format!("{field}.amount"), max_scale)?;
    Ok(Monetary::new(amount, value.currency.clone()))
}

/// Validates a ratio for the ledger.
///
/// # Errors
///
/// Returns the ratio or scale error naming `field`.
pub fn ledger_ratio(value: &Ratio, field: &str, max_scale: u32) -> TranslationResult<Ratio> {
    value.validate(field)?;
    Ok(Ratio::new(
        ledger_numeric(value.numerator, &format!("{field}.numerator"), max_scale)?,
        ledger_numeric(value.denominator, &format!("{field}.denominator"), max_scale)?,
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod decimals {
        use super::*;

        #[test]
        fn canonical_is_idempotent() {
            for input in ["0010.2500", "-3", "1e-4", "+12.0", "0.000"] {
                let once = to_canonical_decimal(input).unwrap();
                assert_eq!(to_canonical_decimal(&once).unwrap(), once);
            }
        }

        #[test]
        fn json_numbers_canonicalize() {
            assert_eq!(
                canonical_decimal_from_json(&serde_json::json!(1.25), "rate").unwrap(),
                "1.25"
            );
            assert!(matches!(
                canonical_decimal_from_json(&serde_json::json!(true), "rate"),
                Err(TranslationError::TypeMismatch { .. })
            ));
        }

        #[test]
        fn ledger_scale_is_enforced() {
            let fine = Numeric::parse("0.0000000001").unwrap();
            assert!(ledger_numeric(fine, "rate", 10).is_ok());
            let too_fine = Numeric::parse("0.00000000001").unwrap();
            assert!(matches!(
                ledger_numeric(too_fine, "rate", 10),
                Err(TranslationError::ValidationError(_))
            ));
        }
    }

    mod dates {
        use super::*;

        #[test]
        fn ledger_time_roundtrip() {
            let time = date_to_ledger_time("2021-11-09").unwrap();
            assert_eq!(ledger_time_to_date(&time).unwrap(), "2021-11-09");
        }

        #[test]
        fn outbound_requires_strict_date() {
            assert!(date_to_ledger_time("2021-11-09T00:00:00Z").is_err());
            assert!(ledger_time_to_date("2021-11-09T13:00:00Z").is_ok());
        }
    }

    mod comments {
        use super::*;

        #[test]
        fn empty_comment_list_is_omitted() {
            assert_eq!(clean_comment_list(Some(vec![])), None);
            assert_eq!(clean_comment_list(None), None);
            assert_eq!(
                clean_comment_list(Some(vec!["note".to_string()])),
                Some(vec!["note".to_string()])
            );
        }

        #[test]
        fn ledger_always_has_a_list() {
            assert!(ledger_comment_list(None).is_empty());
        }
    }

    mod combinators {
        use super::*;

        #[test]
        fn require_names_the_field() {
            assert_eq!(
                require::<u8>(None, "issuance.quantity").unwrap_err(),
                TranslationError::missing("issuance.quantity")
            );
        }

        #[test]
        fn blank_text_is_missing() {
            assert!(require_text("  ", "reason_text").is_err());
            assert_eq!(require_text("lost", "reason_text").unwrap(), "lost");
            assert_eq!(optional_text(Some(&String::new())), None);
        }

        #[test]
        fn empty_mandatory_list_is_validation_error() {
            let empty: Vec<String> = vec![];
            assert_eq!(
                require_non_empty(&empty, "resulting_security_ids")
                    .unwrap_err()
                    .code(),
                1099
            );
        }
    }
}
