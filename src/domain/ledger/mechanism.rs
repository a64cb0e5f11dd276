//! # Ledger Conversion Mechanisms, Rights and Triggers
//!
//! Ledger-side shapes of the polymorphic conversion structures. Enumerated
//! fields hold ledger literals as strings; the variant mapper owns the
//! literal tables. Optional fields serialize as explicit `null`.

// Fields mirror the interchange records one for one.
#![allow(missing_docs)]

use super::variant::LedgerVariant;
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::value_objects::{LedgerTime, Monetary, Numeric, Ratio};
use serde::{Deserialize, Serialize};

/// Ledger tag of the custom mechanism.
pub const TAG_CUSTOM: &str = "OcfConvMechCustom";
/// Ledger tag of the SAFE mechanism.
pub const TAG_SAFE: &str = "OcfConvMechSAFE";
/// Ledger tag of the convertible note mechanism.
pub const TAG_NOTE: &str = "OcfConvMechNote";
/// Ledger tag of the fixed amount mechanism.
pub const TAG_FIXED_AMOUNT: &str = "OcfConvMechFixedAmount";
/// Ledger tag of the percent of capitalization mechanism.
pub const TAG_PERCENT_CAPITALIZATION: &str = "OcfConvMechPercentCapitalization";
/// Ledger tag of the valuation based mechanism.
pub const TAG_VALUATION_BASED: &str = "OcfConvMechValuationBased";
/// Ledger tag of the share price based mechanism.
pub const TAG_SHARE_PRICE_BASED: &str = "OcfConvMechSharePriceBased";

/// Capitalization rules as the ledger stores them: every flag optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerCapitalizationRules {
    pub include_outstanding_shares: Option<bool>,
    pub include_outstanding_options: Option<bool>,
    pub include_outstanding_unissued_options: Option<bool>,
    pub include_this_security: Option<bool>,
    pub include_other_converting_securities: Option<bool>,
    pub include_option_pool_topup_for_promised_options: Option<bool>,
    pub include_additional_option_pool_topup: Option<bool>,
    pub include_new_money: Option<bool>,
}

/// One interest rate period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerInterestRate {
    pub rate: Numeric,
    pub accrual_start_date: LedgerTime,
    pub accrual_end_date: Option<LedgerTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerCustomConversion {
    pub custom_conversion_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSafeConversion {
    pub conversion_mfn: bool,
    pub conversion_discount: Option<Numeric>,
    pub conversion_valuation_cap: Option<Monetary>,
    pub conversion_timing: Option<String>,
    pub capitalization_definition: Option<String>,
    pub capitalization_definition_rules: Option<LedgerCapitalizationRules>,
    pub exit_multiple: Option<Ratio>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerNoteConversion {
    pub interest_rates: Vec<LedgerInterestRate>,
    pub day_count_convention: String,
    pub interest_payout: String,
    pub interest_accrual_period: String,
    pub compounding_type: String,
    pub conversion_discount: Option<Numeric>,
    pub conversion_valuation_cap: Option<Monetary>,
    pub capitalization_definition: Option<String>,
    pub capitalization_definition_rules: Option<LedgerCapitalizationRules>,
    pub exit_multiple: Option<Ratio>,
    pub conversion_mfn: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFixedAmountConversion {
    pub converts_to_quantity: Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPercentCapitalizationConversion {
    pub converts_to_percent: Numeric,
    pub capitalization_definition: Option<String>,
    pub capitalization_definition_rules: Option<LedgerCapitalizationRules>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerValuationBasedConversion {
    pub valuation_type: String,
    pub valuation_amount: Option<Monetary>,
    pub capitalization_definition: Option<String>,
    pub capitalization_definition_rules: Option<LedgerCapitalizationRules>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSharePriceBasedConversion {
    pub description: String,
    pub discount: bool,
    pub discount_percentage: Option<Numeric>,
    pub discount_amount: Option<Monetary>,
}

/// Native form of the ledger's conversion mechanism union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerConversionMechanism {
    Custom(LedgerCustomConversion),
    Safe(LedgerSafeConversion),
    Note(LedgerNoteConversion),
    FixedAmount(LedgerFixedAmountConversion),
    PercentCapitalization(LedgerPercentCapitalizationConversion),
    ValuationBased(LedgerValuationBasedConversion),
    SharePriceBased(LedgerSharePriceBasedConversion),
}

impl LedgerConversionMechanism {
    /// Name of the union in error messages.
    pub const UNION: &'static str = "ConversionMechanism";

    /// Returns the ledger tag.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Custom(_) => TAG_CUSTOM,
            Self::Safe(_) => TAG_SAFE,
            Self::Note(_) => TAG_NOTE,
            Self::FixedAmount(_) => TAG_FIXED_AMOUNT,
            Self::PercentCapitalization(_) => TAG_PERCENT_CAPITALIZATION,
            Self::ValuationBased(_) => TAG_VALUATION_BASED,
            Self::SharePriceBased(_) => TAG_SHARE_PRICE_BASED,
        }
    }

    /// Encodes as a raw `{tag, value}` pair.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the payload cannot be serialized.
    pub fn to_variant(&self) -> TranslationResult<LedgerVariant> {
        let tag = self.tag();
        match self {
            Self::Custom(p) => LedgerVariant::from_payload(tag, p),
            Self::Safe(p) => LedgerVariant::from_payload(tag, p),
            Self::Note(p) => LedgerVariant::from_payload(tag, p),
            Self::FixedAmount(p) => LedgerVariant::from_payload(tag, p),
            Self::PercentCapitalization(p) => LedgerVariant::from_payload(tag, p),
            Self::ValuationBased(p) => LedgerVariant::from_payload(tag, p),
            Self::SharePriceBased(p) => LedgerVariant::from_payload(tag, p),
        }
    }
}

impl TryFrom<&LedgerVariant> for LedgerConversionMechanism {
    type Error = TranslationError;

    fn try_from(variant: &LedgerVariant) -> TranslationResult<Self> {
        match variant.tag.as_str() {
            TAG_CUSTOM => variant.payload().map(Self::Custom),
            TAG_SAFE => variant.payload().map(Self::Safe),
            TAG_NOTE => variant.payload().map(Self::Note),
            TAG_FIXED_AMOUNT => variant.payload().map(Self::FixedAmount),
            TAG_PERCENT_CAPITALIZATION => variant.payload().map(Self::PercentCapitalization),
            TAG_VALUATION_BASED => variant.payload().map(Self::ValuationBased),
            TAG_SHARE_PRICE_BASED => variant.payload().map(Self::SharePriceBased),
            other => Err(TranslationError::unknown_tag(Self::UNION, other)),
        }
    }
}

/// A conversion right as the ledger stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConversionRight {
    pub type_: String,
    pub conversion_mechanism: LedgerVariant,
    pub converts_to_future_round: Option<bool>,
    pub converts_to_stock_class_id: Option<String>,
}

/// A conversion or exercise trigger as the ledger stores it.
///
/// `trigger_id` defaults to empty for ledger data written before ids were
/// mandatory; the trigger mapper synthesizes one in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTrigger {
    #[serde(default)]
    pub trigger_id: String,
    pub type_: String,
    pub nickname: Option<String>,
    pub trigger_description: Option<String>,
    pub trigger_date: Option<LedgerTime>,
    pub trigger_condition: Option<String>,
    pub start_date: Option<LedgerTime>,
    pub end_date: Option<LedgerTime>,
    pub conversion_right: Option<LedgerConversionRight>,
}

/// Ratio conversion terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRatioConversion {
    pub conversion_price: Monetary,
    pub ratio: Ratio,
    pub rounding_type: String,
}

/// A stock class conversion right, flattened: the mechanism is a literal
/// and its fields sit beside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockClassConversionRight {
    pub type_: String,
    pub conversion_mechanism: String,
    pub converts_to_future_round: Option<bool>,
    pub converts_to_stock_class_id: Option<String>,
    pub ratio: Option<Ratio>,
    pub conversion_price: Option<Monetary>,
    pub rounding_type: Option<String>,
    pub percent_of_capitalization: Option<Numeric>,
    pub converts_to_quantity: Option<Numeric>,
}
