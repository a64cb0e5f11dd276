//! # Ledger Variants
//!
//! The ledger encodes tagged unions as `{tag, value}`. [`LedgerVariant`] is
//! that wire shape, kept raw so the tag can be checked against a closed set
//! before the payload is interpreted. Each union in this crate converts a
//! `&LedgerVariant` into a native enum with `TryFrom`; an unknown tag fails
//! there with `UnknownVariantTag` and never reaches a match arm.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::ledger::LedgerVariant;
//!
//! let variant = LedgerVariant::new("OcfAuthorizedSharesNumeric", serde_json::json!("1000"));
//! assert_eq!(
//!     serde_json::to_value(&variant).unwrap(),
//!     serde_json::json!({"tag": "OcfAuthorizedSharesNumeric", "value": "1000"})
//! );
//! ```

use crate::domain::errors::{TranslationError, TranslationResult, classify_serde_error};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A raw `{tag, value}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerVariant {
    /// Constructor tag.
    pub tag: String,
    /// Constructor payload; `{}` for payload-free constructors.
    #[serde(default = "empty_record")]
    pub value: Value,
}

fn empty_record() -> Value {
    Value::Object(serde_json::Map::new())
}

impl LedgerVariant {
    /// Creates a variant.
    #[must_use]
    pub fn new(tag: impl Into<String>, value: Value) -> Self {
        Self {
            tag: tag.into(),
            value,
        }
    }

    /// Creates a variant whose constructor carries no payload.
    #[must_use]
    pub fn unit(tag: impl Into<String>) -> Self {
        Self::new(tag, empty_record())
    }

    /// Creates a variant by serializing a payload record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the payload cannot be serialized.
    pub fn from_payload<T: Serialize>(tag: &str, payload: &T) -> TranslationResult<Self> {
        serde_json::to_value(payload)
            .map(|value| Self::new(tag, value))
            .map_err(|e| TranslationError::validation(format!("cannot encode {tag}: {e}")))
    }

    /// Parses the payload as `T`, using the tag as the field-path prefix
    /// in errors.
    ///
    /// # Errors
    ///
    /// Returns the classified serde error.
    pub fn payload<T: DeserializeOwned>(&self) -> TranslationResult<T> {
        T::deserialize(&self.value).map_err(|e| classify_serde_error(&self.tag, &e))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Payload {
        converts_to_quantity: String,
    }

    #[test]
    fn missing_value_defaults_to_empty_record() {
        let variant: LedgerVariant =
            serde_json::from_value(json!({"tag": "OcfVestingEventTrigger"})).unwrap();
        assert_eq!(variant, LedgerVariant::unit("OcfVestingEventTrigger"));
    }

    #[test]
    fn payload_errors_are_prefixed_with_tag() {
        let variant = LedgerVariant::new("OcfConvMechFixedAmount", json!({}));
        assert_eq!(
            variant.payload::<Payload>().unwrap_err(),
            TranslationError::missing("OcfConvMechFixedAmount.converts_to_quantity")
        );
    }
}
