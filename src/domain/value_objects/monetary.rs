//! # Monetary Values and Ratios
//!
//! Small composite values shared by both representations. The interchange
//! and ledger shapes are identical (`{amount, currency}` and
//! `{numerator, denominator}`), only validation differs from a plain record.

use super::numeric::Numeric;
use crate::domain::errors::{TranslationError, TranslationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount of money in an ISO 4217 currency.
///
/// # Examples
///
/// ```
/// use ocf_ledger::domain::value_objects::{Monetary, Numeric};
///
/// let price = Monetary::new(Numeric::parse("1.25").unwrap(), "USD");
/// assert!(price.validate("price").is_ok());
/// assert_eq!(price.to_string(), "1.25 USD");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monetary {
    /// Canonical decimal amount.
    pub amount: Numeric,
    /// Three-letter currency code.
    pub currency: String,
}

impl Monetary {
    /// Creates a monetary value.
    #[must_use]
    pub fn new(amount: Numeric, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Checks the currency code shape.
    ///
    /// # Errors
    ///
    /// Returns `RequiredFieldMissing` for an empty currency and
    /// `ValidationError` for anything that is not three uppercase letters.
    pub fn validate(&self, field: &str) -> TranslationResult<()> {
        if self.currency.is_empty() {
            return Err(TranslationError::missing(format!("{field}.currency")));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(TranslationError::validation(format!(
                "{field}.currency must be a three-letter ISO 4217 code, got '{}'",
                self.currency
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Monetary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// A numerator/denominator pair (conversion ratios, split ratios, exit
/// multiples).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    /// Numerator.
    pub numerator: Numeric,
    /// Denominator; must be positive.
    pub denominator: Numeric,
}

impl Ratio {
    /// Creates a ratio.
    #[must_use]
    pub fn new(numerator: Numeric, denominator: Numeric) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Checks that the denominator is positive and the numerator is not
    /// negative.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming `field`.
    pub fn validate(&self, field: &str) -> TranslationResult<()> {
        if !self.denominator.is_positive() {
            return Err(TranslationError::validation(format!(
                "{field}.denominator must be positive, got {}",
                self.denominator
            )));
        }
        if self.numerator.is_negative() {
            return Err(TranslationError::validation(format!(
                "{field}.numerator must not be negative, got {}",
                self.numerator
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn n(s: &str) -> Numeric {
        Numeric::parse(s).unwrap()
    }

    #[test]
    fn monetary_rejects_lowercase_currency() {
        let m = Monetary::new(n("10"), "usd");
        assert!(matches!(
            m.validate("price"),
            Err(TranslationError::ValidationError(_))
        ));
    }

    #[test]
    fn monetary_empty_currency_is_missing() {
        let m = Monetary::new(n("10"), "");
        assert_eq!(
            m.validate("price").unwrap_err(),
            TranslationError::missing("price.currency")
        );
    }

    #[test]
    fn monetary_amount_is_canonical_on_the_wire() {
        let m: Monetary =
            serde_json::from_value(serde_json::json!({"amount": "5.00", "currency": "EUR"}))
                .unwrap();
        assert_eq!(m.amount.to_string(), "5");
    }

    #[test]
    fn ratio_rejects_zero_denominator() {
        let r = Ratio::new(n("1"), n("0"));
        assert!(r.validate("ratio").is_err());
    }

    #[test]
    fn ratio_accepts_positive_terms() {
        let r = Ratio::new(n("2"), n("1"));
        assert!(r.validate("split_ratio").is_ok());
        assert_eq!(r.to_string(), "2:1");
    }
}
