//! # Property-Based Tests for Value Objects
//!
//! Uses proptest to check the canonical textual forms.
//!
//! # Test Categories
//!
//! - **Canonical Decimals**: idempotence and value preservation
//! - **Dates**: ledger time round trip
//! - **Serialization Roundtrips**: serde preserves canonical values

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use super::numeric::Numeric;
use super::ocf_date::{LedgerTime, OcfDate};
use chrono::NaiveDate;
use rust_decimal::Decimal;

// ============================================================================
// Strategy Definitions
// ============================================================================

/// Strategy for decimals with up to 12 fractional digits.
fn any_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i64>(), 0u32..=12).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy for decimal text with optional padding the canonical form drops.
fn padded_decimal_text() -> impl Strategy<Value = String> {
    (any_decimal(), 0usize..4, any::<bool>()).prop_map(|(value, zeros, plus)| {
        let mut text = value.to_string();
        if zeros > 0 {
            if !text.contains('.') {
                text.push('.');
            }
            text.push_str(&"0".repeat(zeros));
        }
        if plus && !text.starts_with('-') {
            text.insert(0, '+');
        }
        text
    })
}

/// Strategy for dates between 1900 and 2199.
fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2200, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

// ============================================================================
// Canonical Decimal Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Canonicalizing twice equals canonicalizing once.
    #[test]
    fn canonical_decimal_idempotent(text in padded_decimal_text()) {
        let once = Numeric::parse(&text).unwrap().to_string();
        let twice = Numeric::parse(&once).unwrap().to_string();
        prop_assert_eq!(once, twice);
    }

    /// Canonicalization never changes the numeric value.
    #[test]
    fn canonical_decimal_preserves_value(value in any_decimal()) {
        let canonical = Numeric::parse(&value.to_string()).unwrap();
        prop_assert_eq!(canonical.get(), value);
    }

    /// Canonical text has no exponent, no plus sign and no trailing fractional zero.
    #[test]
    fn canonical_decimal_shape(text in padded_decimal_text()) {
        let canonical = Numeric::parse(&text).unwrap().to_string();
        prop_assert!(!canonical.contains('e') && !canonical.contains('E'));
        prop_assert!(!canonical.starts_with('+'));
        if canonical.contains('.') {
            prop_assert!(!canonical.ends_with('0'));
            prop_assert!(!canonical.ends_with('.'));
        }
        prop_assert_ne!(canonical.as_str(), "-0");
    }

    /// JSON numbers and strings with the same value agree.
    #[test]
    fn json_number_and_string_agree(value in any::<i64>()) {
        let from_number = Numeric::from_json(&serde_json::json!(value), "n").unwrap();
        let from_string = Numeric::from_json(&serde_json::json!(value.to_string()), "n").unwrap();
        prop_assert_eq!(from_number, from_string);
    }

    /// Serde keeps the canonical string.
    #[test]
    fn numeric_serde_roundtrip(value in any_decimal()) {
        let numeric = Numeric::from_decimal(value);
        let json = serde_json::to_value(numeric).unwrap();
        let back: Numeric = serde_json::from_value(json).unwrap();
        prop_assert_eq!(numeric, back);
    }
}

// ============================================================================
// Date Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Date to ledger time and back is the identity.
    #[test]
    fn ledger_time_left_inverse(date in any_date()) {
        let ocf = OcfDate::new(date);
        let text = ocf.to_string();
        let time = LedgerTime::from(ocf).to_string();
        let back = LedgerTime::parse(&time).unwrap().date().to_string();
        prop_assert_eq!(text, back);
    }

    /// Strict parsing accepts every rendered date.
    #[test]
    fn rendered_dates_parse_strictly(date in any_date()) {
        let rendered = OcfDate::new(date).to_string();
        prop_assert_eq!(OcfDate::parse(&rendered).unwrap().get(), date);
    }
}

// ============================================================================
// Edge Cases
// ============================================================================

#[test]
fn negative_zero_is_zero() {
    assert_eq!(Numeric::parse("-0.00").unwrap(), Numeric::ZERO);
}

#[test]
fn scientific_notation_expands() {
    assert_eq!(Numeric::parse("1.5E-2").unwrap().to_string(), "0.015");
}

#[test]
fn excess_precision_is_rejected() {
    let text = format!("0.{}", "1".repeat(40));
    assert!(Numeric::parse(&text).is_err());
}
