//! # Numeric Value Object
//!
//! Canonical decimal numbers.
//!
//! This module provides the [`Numeric`] type, a wrapper around [`Decimal`]
//! that always renders in one canonical textual form:
//!
//! - no exponent, no leading `+`
//! - a `-` sign only for strictly negative values (`-0` renders as `0`)
//! - no trailing fractional zeros
//!
//! Ledger numerics come back padded to their fixed scale (`"100.0000000000"`),
//! so stripping trailing zeros is what keeps a ledger round trip stable.
//!
//! # Precision
//!
//! Values must be exactly representable with at most
//! [`Numeric::MAX_SIGNIFICANT_DIGITS`] significant digits. Inputs that would
//! need rounding are rejected instead of silently truncated.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::value_objects::numeric::Numeric;
//!
//! let n = Numeric::parse("1500.2500").unwrap();
//! assert_eq!(n.to_string(), "1500.25");
//!
//! let sci = Numeric::parse("1.5e3").unwrap();
//! assert_eq!(sci.to_string(), "1500");
//! ```

use crate::domain::errors::{TranslationError, TranslationResult};
use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A canonical decimal number.
///
/// # Invariants
///
/// - The inner decimal is normalized (no trailing zeros, no negative zero).
/// - Textual form never uses scientific notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Numeric(Decimal);

impl Numeric {
    /// Maximum number of significant digits accepted.
    pub const MAX_SIGNIFICANT_DIGITS: u32 = 28;

    /// Zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Parses a decimal string in plain or scientific notation.
    ///
    /// # Errors
    ///
    /// - `TypeMismatch` if the input is empty or not a number.
    /// - `ValidationError` if the value cannot be represented exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocf_ledger::domain::value_objects::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::parse("+007.10").unwrap().to_string(), "7.1");
    /// assert_eq!(Numeric::parse("-0.000").unwrap().to_string(), "0");
    /// assert!(Numeric::parse("ten").is_err());
    /// ```
    pub fn parse(input: &str) -> TranslationResult<Self> {
        let not_a_number =
            || TranslationError::type_mismatch("", "decimal string", format!("'{input}'"));

        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (unsigned, None),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.len() + fraction.len() == 0 || !is_digits(whole) || !is_digits(fraction) {
            return Err(not_a_number());
        }

        let exponent = match exponent {
            None => 0,
            Some(text) => {
                let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
                if digits.is_empty() || !is_digits(digits) {
                    return Err(not_a_number());
                }
                text.parse::<i64>().map_err(|_| unrepresentable(input))?
            }
        };

        let plain =
            expand_plain(whole, fraction, exponent).ok_or_else(|| unrepresentable(input))?;
        let decimal = Decimal::from_str_exact(&plain).map_err(|_| unrepresentable(input))?;
        let decimal = if negative { -decimal } else { decimal };

        Ok(Self::from_decimal(decimal))
    }

    /// Builds a canonical numeric from a JSON value (string or number).
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` naming `field` when the value is neither a
    /// string nor a number, plus any error from [`Numeric::parse`].
    pub fn from_json(value: &Value, field: &str) -> TranslationResult<Self> {
        match value {
            Value::String(s) => Self::parse(s).map_err(|e| e.within(field)),
            Value::Number(n) => Self::from_json_number(n).map_err(|e| e.within(field)),
            other => Err(TranslationError::type_mismatch(
                field,
                "decimal string or number",
                json_kind(other),
            )),
        }
    }

    /// Builds a canonical numeric from a JSON number.
    ///
    /// Integers are exact. Floats go through serde_json's shortest
    /// round-trip text, so the result is exactly the value that text denotes.
    ///
    /// # Errors
    ///
    /// Returns an error if the number cannot be represented exactly.
    pub fn from_json_number(number: &serde_json::Number) -> TranslationResult<Self> {
        if let Some(i) = number.as_i64() {
            return Ok(Self::from_decimal(Decimal::from(i)));
        }
        if let Some(u) = number.as_u64() {
            return Ok(Self::from_decimal(Decimal::from(u)));
        }
        Self::parse(&number.to_string())
    }

    /// Wraps a decimal, normalizing it.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        if value.is_zero() {
            return Self::ZERO;
        }
        Self(value.normalize())
    }

    /// Returns the inner decimal.
    #[inline]
    #[must_use]
    pub const fn get(self) -> Decimal {
        self.0
    }

    /// Number of fractional digits in canonical form.
    #[inline]
    #[must_use]
    pub const fn scale(self) -> u32 {
        self.0.scale()
    }

    /// Returns true for zero.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true for strictly positive values.
    #[inline]
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Returns true for strictly negative values.
    #[inline]
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Checks that the value fits a fixed ledger scale.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming `field` when the value has more
    /// fractional digits than `max_scale`.
    pub fn ensure_scale(self, max_scale: u32, field: &str) -> TranslationResult<Self> {
        if self.scale() > max_scale {
            return Err(TranslationError::validation(format!(
                "{field}: {self} has {} fractional digits, ledger scale allows {max_scale}",
                self.scale()
            )));
        }
        Ok(self)
    }
}

fn unrepresentable(input: &str) -> TranslationError {
    TranslationError::validation(format!(
        "'{input}' is not exactly representable within {} significant digits",
        Numeric::MAX_SIGNIFICANT_DIGITS
    ))
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Shifts the decimal point of `whole.fraction` by `exponent` and returns
/// the exact plain-notation digits, or `None` when the value needs more
/// precision than a decimal holds.
///
/// Leading and trailing zeros are dropped first, so padded inputs do not
/// count against the precision limit.
fn expand_plain(whole: &str, fraction: &str, exponent: i64) -> Option<String> {
    let digits = format!("{whole}{fraction}");
    let leading = digits.len() - digits.trim_start_matches('0').len();
    let significant = digits.trim_matches('0');
    if significant.is_empty() {
        return Some("0".to_owned());
    }

    let max = i64::from(Numeric::MAX_SIGNIFICANT_DIGITS);
    let len = i64::try_from(significant.len()).ok()?;
    if len > max {
        return None;
    }

    // Position of the decimal point relative to the first significant digit.
    let point = i64::try_from(whole.len())
        .ok()?
        .checked_sub(i64::try_from(leading).ok()?)?
        .checked_add(exponent)?;
    if point > max + 1 || len - point > max {
        return None;
    }

    let plain = if point <= 0 {
        let zeros = usize::try_from(-point).ok()?;
        format!("0.{}{significant}", "0".repeat(zeros))
    } else if point >= len {
        let zeros = usize::try_from(point - len).ok()?;
        format!("{significant}{}", "0".repeat(zeros))
    } else {
        let (int_part, frac_part) = significant.split_at(usize::try_from(point).ok()?);
        format!("{int_part}.{frac_part}")
    };
    Some(plain)
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Numeric {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<Numeric> for Decimal {
    fn from(value: Numeric) -> Self {
        value.0
    }
}

impl From<u64> for Numeric {
    fn from(value: u64) -> Self {
        Self::from_decimal(Decimal::from(value))
    }
}

impl Serialize for Numeric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct NumericVisitor;

        impl Visitor<'_> for NumericVisitor {
            type Value = Numeric;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Numeric::parse(v).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(Numeric::from_decimal(Decimal::from(v)))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(Numeric::from_decimal(Decimal::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                if !v.is_finite() {
                    return Err(E::custom("non-finite number"));
                }
                let number = serde_json::Number::from_f64(v)
                    .ok_or_else(|| E::custom("non-finite number"))?;
                Numeric::from_json_number(&number).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    mod parsing {
        use super::*;

        #[test]
        fn strips_trailing_zeros() {
            assert_eq!(Numeric::parse("100.0000000000").unwrap().to_string(), "100");
            assert_eq!(Numeric::parse("0.50").unwrap().to_string(), "0.5");
        }

        #[test]
        fn integers_unchanged() {
            assert_eq!(Numeric::parse("1000000").unwrap().to_string(), "1000000");
        }

        #[test]
        fn scientific_notation_expands() {
            assert_eq!(Numeric::parse("1E-4").unwrap().to_string(), "0.0001");
            assert_eq!(Numeric::parse("2.5e2").unwrap().to_string(), "250");
        }

        #[test]
        fn negative_keeps_sign() {
            assert_eq!(Numeric::parse("-12.30").unwrap().to_string(), "-12.3");
        }

        #[test]
        fn negative_zero_is_zero() {
            let n = Numeric::parse("-0.00").unwrap();
            assert_eq!(n.to_string(), "0");
            assert!(!n.is_negative());
        }

        #[test]
        fn rejects_garbage() {
            for input in ["", "abc", "1,000", "NaN", "Infinity", "0x10", "."] {
                assert!(Numeric::parse(input).is_err(), "accepted {input:?}");
            }
        }

        #[test]
        fn rejects_unrepresentable_precision() {
            let too_long = "1.0000000000000000000000000000001";
            assert!(matches!(
                Numeric::parse(too_long),
                Err(TranslationError::ValidationError(_))
            ));
        }

        #[test]
        fn scientific_notation_is_never_rounded() {
            for input in [
                "1.0000000000000000000000000000001e0",
                "12345678901234567890123456789012e-3",
                "1e-29",
                "1e40",
            ] {
                assert!(
                    matches!(Numeric::parse(input), Err(TranslationError::ValidationError(_))),
                    "accepted {input:?}"
                );
            }
        }

        #[test]
        fn scientific_notation_keeps_every_digit() {
            let n = Numeric::parse("1234567890123456789012345678e-27").unwrap();
            assert_eq!(n.to_string(), "1.234567890123456789012345678");
            assert_eq!(Numeric::parse("-2.50E+1").unwrap().to_string(), "-25");
            assert_eq!(Numeric::parse("0.000e5").unwrap().to_string(), "0");
        }

        #[test]
        fn rejects_stacked_or_misplaced_signs() {
            for input in ["+-5", "-+5", "--5", "5-", "1-2", "1e", "1e+", "1e-+2", "1.2.3"] {
                assert!(
                    matches!(Numeric::parse(input), Err(TranslationError::TypeMismatch { .. })),
                    "accepted {input:?}"
                );
            }
        }

        #[test]
        fn padded_zeros_do_not_count_against_precision() {
            let padded = format!("1.{}", "0".repeat(40));
            assert_eq!(Numeric::parse(&padded).unwrap().to_string(), "1");
        }
    }

    mod json {
        use super::*;

        #[test]
        fn from_json_number_integer() {
            let n = Numeric::from_json(&json!(250), "quantity").unwrap();
            assert_eq!(n.to_string(), "250");
        }

        #[test]
        fn from_json_number_float() {
            let n = Numeric::from_json(&json!(0.1), "rate").unwrap();
            assert_eq!(n.to_string(), "0.1");
        }

        #[test]
        fn from_json_wrong_kind() {
            let err = Numeric::from_json(&json!(true), "quantity").unwrap_err();
            assert_eq!(
                err,
                TranslationError::type_mismatch("quantity", "decimal string or number", "boolean")
            );
        }

        #[test]
        fn serde_roundtrip_is_string() {
            let n: Numeric = serde_json::from_value(json!("12.500")).unwrap();
            assert_eq!(serde_json::to_value(n).unwrap(), json!("12.5"));
            let m: Numeric = serde_json::from_value(json!(3)).unwrap();
            assert_eq!(serde_json::to_value(m).unwrap(), json!("3"));
        }
    }

    mod scale {
        use super::*;

        #[test]
        fn ensure_scale_accepts_within_limit() {
            let n = Numeric::parse("0.0000000001").unwrap();
            assert!(n.ensure_scale(10, "rate").is_ok());
        }

        #[test]
        fn ensure_scale_rejects_beyond_limit() {
            let n = Numeric::parse("0.00000000001").unwrap();
            assert!(matches!(
                n.ensure_scale(10, "rate"),
                Err(TranslationError::ValidationError(_))
            ));
        }
    }
}
