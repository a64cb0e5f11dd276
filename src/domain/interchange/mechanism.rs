//! # Conversion Mechanisms and Rights
//!
//! The interchange conversion mechanism is an internally tagged union: a
//! `type` discriminator plus the variant's own keys. Each variant carries a
//! disjoint field set; mandatory fields are non-optional here, so a payload
//! that omits one fails to parse with a `RequiredFieldMissing` once the serde
//! error is classified.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::interchange::ConversionMechanism;
//!
//! let mechanism: ConversionMechanism = serde_json::from_value(serde_json::json!({
//!     "type": "SAFE_CONVERSION",
//!     "conversion_mfn": false
//! }))
//! .unwrap();
//! assert_eq!(mechanism.type_literal(), "SAFE_CONVERSION");
//! ```

use super::common::{CapitalizationDefinitionRules, InterestRate};
use crate::domain::value_objects::{
    AccrualPeriod, CompoundingType, ConversionRightType, ConversionTiming, DayCountConvention,
    InterestPayout, Monetary, Numeric, Ratio, RoundingType, StockClassMechanismKind,
    ValuationType,
};
use serde::{Deserialize, Serialize};

/// How a convertible or warrant converts into equity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ConversionMechanism {
    /// Free-text mechanism.
    #[serde(rename = "CUSTOM_CONVERSION")]
    Custom(CustomConversion),
    /// Simple agreement for future equity.
    #[serde(rename = "SAFE_CONVERSION")]
    Safe(SafeConversion),
    /// Convertible note with accruing interest.
    #[serde(rename = "CONVERTIBLE_NOTE_CONVERSION")]
    Note(NoteConversion),
    /// Converts into a fixed number of shares.
    #[serde(rename = "FIXED_AMOUNT_CONVERSION")]
    FixedAmount(FixedAmountConversion),
    /// Converts into a percentage of capitalization.
    #[serde(rename = "PERCENT_CAPITALIZATION_CONVERSION")]
    PercentCapitalization(PercentCapitalizationConversion),
    /// Converts at a price derived from a valuation.
    #[serde(rename = "VALUATION_BASED_CONVERSION")]
    ValuationBased(ValuationBasedConversion),
    /// Converts at a price derived from a future share price.
    #[serde(rename = "SHARE_PRICE_BASED_CONVERSION")]
    SharePriceBased(SharePriceBasedConversion),
}

impl ConversionMechanism {
    /// Returns the interchange `type` literal.
    #[must_use]
    pub const fn type_literal(&self) -> &'static str {
        match self {
            Self::Custom(_) => "CUSTOM_CONVERSION",
            Self::Safe(_) => "SAFE_CONVERSION",
            Self::Note(_) => "CONVERTIBLE_NOTE_CONVERSION",
            Self::FixedAmount(_) => "FIXED_AMOUNT_CONVERSION",
            Self::PercentCapitalization(_) => "PERCENT_CAPITALIZATION_CONVERSION",
            Self::ValuationBased(_) => "VALUATION_BASED_CONVERSION",
            Self::SharePriceBased(_) => "SHARE_PRICE_BASED_CONVERSION",
        }
    }

    /// Returns true for mechanisms a warrant right may carry.
    ///
    /// SAFE and note mechanisms only make sense on convertibles.
    #[must_use]
    pub const fn allowed_on_warrant(&self) -> bool {
        !matches!(self, Self::Safe(_) | Self::Note(_))
    }

    /// Builds a custom mechanism with the given description.
    #[must_use]
    pub fn custom(description: impl Into<String>) -> Self {
        Self::Custom(CustomConversion {
            custom_conversion_description: description.into(),
        })
    }
}

/// Free-text conversion mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomConversion {
    /// Description of the mechanism; must be non-empty.
    pub custom_conversion_description: String,
}

/// SAFE conversion terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeConversion {
    /// Most-favoured-nation clause.
    pub conversion_mfn: bool,
    /// Discount as a decimal fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_discount: Option<Numeric>,
    /// Valuation cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_valuation_cap: Option<Monetary>,
    /// Pre- or post-money conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_timing: Option<ConversionTiming>,
    /// Free-text capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition: Option<String>,
    /// Structured capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition_rules: Option<CapitalizationDefinitionRules>,
    /// Exit multiple.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_multiple: Option<Ratio>,
}

/// Convertible note conversion terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteConversion {
    /// Interest rate periods; must be non-empty.
    pub interest_rates: Vec<InterestRate>,
    /// Day count convention.
    pub day_count_convention: DayCountConvention,
    /// How interest is paid out.
    pub interest_payout: InterestPayout,
    /// Accrual period.
    pub interest_accrual_period: AccrualPeriod,
    /// Simple or compounding interest.
    pub compounding_type: CompoundingType,
    /// Discount as a decimal fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_discount: Option<Numeric>,
    /// Valuation cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_valuation_cap: Option<Monetary>,
    /// Free-text capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition: Option<String>,
    /// Structured capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition_rules: Option<CapitalizationDefinitionRules>,
    /// Exit multiple.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_multiple: Option<Ratio>,
    /// Most-favoured-nation clause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_mfn: Option<bool>,
}

/// Fixed share count conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedAmountConversion {
    /// Shares received on conversion.
    pub converts_to_quantity: Numeric,
}

/// Percent of capitalization conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentCapitalizationConversion {
    /// Percentage as a decimal fraction.
    pub converts_to_percent: Numeric,
    /// Free-text capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition: Option<String>,
    /// Structured capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition_rules: Option<CapitalizationDefinitionRules>,
}

/// Valuation based conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationBasedConversion {
    /// Kind of valuation the price derives from.
    pub valuation_type: ValuationType,
    /// Valuation amount, when fixed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation_amount: Option<Monetary>,
    /// Free-text capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition: Option<String>,
    /// Structured capitalization definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization_definition_rules: Option<CapitalizationDefinitionRules>,
}

/// Share price based conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePriceBasedConversion {
    /// Description of the reference price; must be non-empty.
    pub description: String,
    /// Whether a discount applies.
    pub discount: bool,
    /// Discount as a decimal fraction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<Numeric>,
    /// Discount as a fixed amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Monetary>,
}

/// The right a trigger activates on a convertible or warrant.
///
/// The `type` discriminator is optional on input; translators fill in the
/// kind implied by the parent object on output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRight {
    /// Right kind.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub right_type: Option<ConversionRightType>,
    /// The mechanism the right converts through.
    pub conversion_mechanism: ConversionMechanism,
    /// Converts into the next financing round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converts_to_future_round: Option<bool>,
    /// Stock class the right converts into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converts_to_stock_class_id: Option<String>,
}

impl ConversionRight {
    /// Creates a right of the given kind with no conversion target.
    #[must_use]
    pub fn new(right_type: ConversionRightType, mechanism: ConversionMechanism) -> Self {
        Self {
            right_type: Some(right_type),
            conversion_mechanism: mechanism,
            converts_to_future_round: None,
            converts_to_stock_class_id: None,
        }
    }
}

/// Ratio conversion terms, used by stock class rights and ratio adjustments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatioConversion {
    /// Conversion price.
    pub conversion_price: Monetary,
    /// Conversion ratio.
    pub ratio: Ratio,
    /// Rounding applied to fractional shares.
    pub rounding_type: RoundingType,
}

/// Mechanisms a stock class conversion right may use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StockClassConversionMechanism {
    /// Converts at a fixed ratio.
    #[serde(rename = "RATIO_CONVERSION")]
    Ratio(RatioConversion),
    /// Converts into a percentage of capitalization.
    #[serde(rename = "PERCENT_CAPITALIZATION_CONVERSION")]
    PercentCapitalization(PercentCapitalizationConversion),
    /// Converts into a fixed number of shares.
    #[serde(rename = "FIXED_AMOUNT_CONVERSION")]
    FixedAmount(FixedAmountConversion),
}

impl StockClassConversionMechanism {
    /// Returns the mechanism kind.
    #[must_use]
    pub const fn kind(&self) -> StockClassMechanismKind {
        match self {
            Self::Ratio(_) => StockClassMechanismKind::Ratio,
            Self::PercentCapitalization(_) => StockClassMechanismKind::PercentCapitalization,
            Self::FixedAmount(_) => StockClassMechanismKind::FixedAmount,
        }
    }
}

/// A stock class's right to convert into another class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockClassConversionRight {
    /// Right kind; always the stock class kind on output.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub right_type: Option<ConversionRightType>,
    /// The mechanism the right converts through.
    pub conversion_mechanism: StockClassConversionMechanism,
    /// Converts into the next financing round.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converts_to_future_round: Option<bool>,
    /// Stock class the right converts into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converts_to_stock_class_id: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn note_missing_mandatory_field_fails() {
        let err = serde_json::from_value::<ConversionMechanism>(json!({
            "type": "CONVERTIBLE_NOTE_CONVERSION",
            "interest_rates": [],
            "interest_payout": "CASH",
            "interest_accrual_period": "MONTHLY",
            "compounding_type": "SIMPLE"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("day_count_convention"));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = serde_json::from_value::<ConversionMechanism>(json!({
            "type": "MAGIC_CONVERSION"
        }))
        .unwrap_err();
        assert!(err.to_string().starts_with("unknown variant `MAGIC_CONVERSION`"));
    }

    #[test]
    fn warrant_restrictions() {
        assert!(ConversionMechanism::custom("board decides").allowed_on_warrant());
        let safe = ConversionMechanism::Safe(SafeConversion {
            conversion_mfn: true,
            conversion_discount: None,
            conversion_valuation_cap: None,
            conversion_timing: None,
            capitalization_definition: None,
            capitalization_definition_rules: None,
            exit_multiple: None,
        });
        assert!(!safe.allowed_on_warrant());
    }

    #[test]
    fn right_type_is_optional_on_input() {
        let right: ConversionRight = serde_json::from_value(json!({
            "conversion_mechanism": {
                "type": "FIXED_AMOUNT_CONVERSION",
                "converts_to_quantity": "100"
            }
        }))
        .unwrap();
        assert!(right.right_type.is_none());
    }
}
