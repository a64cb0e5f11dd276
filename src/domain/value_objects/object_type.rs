//! # Object Types
//!
//! The interchange `object_type` discriminator and the ledger payload key
//! each type is stored under.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::domain::value_objects::ObjectType;
//!
//! let kind: ObjectType = "TX_STOCK_ISSUANCE".parse().unwrap();
//! assert_eq!(kind.payload_key(), "issuance_data");
//! assert!(kind.is_transaction());
//! ```

use crate::domain::errors::{TranslationError, TranslationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Interchange object discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectType {
    /// Issuer.
    Issuer,
    /// Stakeholder.
    Stakeholder,
    /// Stock class.
    StockClass,
    /// Stock plan.
    StockPlan,
    /// Vesting terms.
    VestingTerms,
    /// Valuation.
    Valuation,
    /// Convertible issuance.
    TxConvertibleIssuance,
    /// Convertible cancellation.
    TxConvertibleCancellation,
    /// Convertible transfer.
    TxConvertibleTransfer,
    /// Convertible acceptance.
    TxConvertibleAcceptance,
    /// Warrant issuance.
    TxWarrantIssuance,
    /// Warrant exercise.
    TxWarrantExercise,
    /// Warrant acceptance.
    TxWarrantAcceptance,
    /// Warrant transfer.
    TxWarrantTransfer,
    /// Warrant retraction.
    TxWarrantRetraction,
    /// Equity compensation issuance.
    TxEquityCompensationIssuance,
    /// Equity compensation exercise.
    TxEquityCompensationExercise,
    /// Equity compensation cancellation.
    TxEquityCompensationCancellation,
    /// Equity compensation transfer.
    TxEquityCompensationTransfer,
    /// Stock issuance.
    TxStockIssuance,
    /// Stock cancellation.
    TxStockCancellation,
    /// Stock transfer.
    TxStockTransfer,
    /// Stock acceptance.
    TxStockAcceptance,
    /// Stock repurchase.
    TxStockRepurchase,
    /// Issuer authorized shares adjustment.
    TxIssuerAuthorizedSharesAdjustment,
    /// Stock class authorized shares adjustment.
    TxStockClassAuthorizedSharesAdjustment,
    /// Stock class conversion ratio adjustment.
    TxStockClassConversionRatioAdjustment,
    /// Stock class split.
    TxStockClassSplit,
    /// Stock plan pool adjustment.
    TxStockPlanPoolAdjustment,
}

impl ObjectType {
    /// Every supported object type.
    pub const ALL: &'static [Self] = &[
        Self::Issuer,
        Self::Stakeholder,
        Self::StockClass,
        Self::StockPlan,
        Self::VestingTerms,
        Self::Valuation,
        Self::TxConvertibleIssuance,
        Self::TxConvertibleCancellation,
        Self::TxConvertibleTransfer,
        Self::TxConvertibleAcceptance,
        Self::TxWarrantIssuance,
        Self::TxWarrantExercise,
        Self::TxWarrantAcceptance,
        Self::TxWarrantTransfer,
        Self::TxWarrantRetraction,
        Self::TxEquityCompensationIssuance,
        Self::TxEquityCompensationExercise,
        Self::TxEquityCompensationCancellation,
        Self::TxEquityCompensationTransfer,
        Self::TxStockIssuance,
        Self::TxStockCancellation,
        Self::TxStockTransfer,
        Self::TxStockAcceptance,
        Self::TxStockRepurchase,
        Self::TxIssuerAuthorizedSharesAdjustment,
        Self::TxStockClassAuthorizedSharesAdjustment,
        Self::TxStockClassConversionRatioAdjustment,
        Self::TxStockClassSplit,
        Self::TxStockPlanPoolAdjustment,
    ];

    /// Returns the interchange literal.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issuer => "ISSUER",
            Self::Stakeholder => "STAKEHOLDER",
            Self::StockClass => "STOCK_CLASS",
            Self::StockPlan => "STOCK_PLAN",
            Self::VestingTerms => "VESTING_TERMS",
            Self::Valuation => "VALUATION",
            Self::TxConvertibleIssuance => "TX_CONVERTIBLE_ISSUANCE",
            Self::TxConvertibleCancellation => "TX_CONVERTIBLE_CANCELLATION",
            Self::TxConvertibleTransfer => "TX_CONVERTIBLE_TRANSFER",
            Self::TxConvertibleAcceptance => "TX_CONVERTIBLE_ACCEPTANCE",
            Self::TxWarrantIssuance => "TX_WARRANT_ISSUANCE",
            Self::TxWarrantExercise => "TX_WARRANT_EXERCISE",
            Self::TxWarrantAcceptance => "TX_WARRANT_ACCEPTANCE",
            Self::TxWarrantTransfer => "TX_WARRANT_TRANSFER",
            Self::TxWarrantRetraction => "TX_WARRANT_RETRACTION",
            Self::TxEquityCompensationIssuance => "TX_EQUITY_COMPENSATION_ISSUANCE",
            Self::TxEquityCompensationExercise => "TX_EQUITY_COMPENSATION_EXERCISE",
            Self::TxEquityCompensationCancellation => "TX_EQUITY_COMPENSATION_CANCELLATION",
            Self::TxEquityCompensationTransfer => "TX_EQUITY_COMPENSATION_TRANSFER",
            Self::TxStockIssuance => "TX_STOCK_ISSUANCE",
            Self::TxStockCancellation => "TX_STOCK_CANCELLATION",
            Self::TxStockTransfer => "TX_STOCK_TRANSFER",
            Self::TxStockAcceptance => "TX_STOCK_ACCEPTANCE",
            Self::TxStockRepurchase => "TX_STOCK_REPURCHASE",
            Self::TxIssuerAuthorizedSharesAdjustment => "TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT",
            Self::TxStockClassAuthorizedSharesAdjustment => {
                "TX_STOCK_CLASS_AUTHORIZED_SHARES_ADJUSTMENT"
            }
            Self::TxStockClassConversionRatioAdjustment => {
                "TX_STOCK_CLASS_CONVERSION_RATIO_ADJUSTMENT"
            }
            Self::TxStockClassSplit => "TX_STOCK_CLASS_SPLIT",
            Self::TxStockPlanPoolAdjustment => "TX_STOCK_PLAN_POOL_ADJUSTMENT",
        }
    }

    /// Returns the key the ledger stores this object's payload under.
    #[must_use]
    pub const fn payload_key(self) -> &'static str {
        match self {
            Self::Issuer => "issuer_data",
            Self::Stakeholder => "stakeholder_data",
            Self::StockClass => "stock_class_data",
            Self::StockPlan => "stock_plan_data",
            Self::VestingTerms => "vesting_terms_data",
            Self::Valuation => "valuation_data",
            Self::TxConvertibleIssuance
            | Self::TxWarrantIssuance
            | Self::TxEquityCompensationIssuance
            | Self::TxStockIssuance => "issuance_data",
            Self::TxConvertibleCancellation
            | Self::TxEquityCompensationCancellation
            | Self::TxStockCancellation => "cancellation_data",
            Self::TxConvertibleTransfer
            | Self::TxWarrantTransfer
            | Self::TxEquityCompensationTransfer
            | Self::TxStockTransfer => "transfer_data",
            Self::TxConvertibleAcceptance | Self::TxWarrantAcceptance | Self::TxStockAcceptance => {
                "acceptance_data"
            }
            Self::TxWarrantExercise | Self::TxEquityCompensationExercise => "exercise_data",
            Self::TxWarrantRetraction => "retraction_data",
            Self::TxStockRepurchase => "repurchase_data",
            Self::TxIssuerAuthorizedSharesAdjustment
            | Self::TxStockClassAuthorizedSharesAdjustment
            | Self::TxStockClassConversionRatioAdjustment
            | Self::TxStockPlanPoolAdjustment => "adjustment_data",
            Self::TxStockClassSplit => "split_data",
        }
    }

    /// Returns true for transaction (`TX_*`) types.
    #[must_use]
    pub const fn is_transaction(self) -> bool {
        !matches!(
            self,
            Self::Issuer
                | Self::Stakeholder
                | Self::StockClass
                | Self::StockPlan
                | Self::VestingTerms
                | Self::Valuation
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = TranslationError;

    fn from_str(s: &str) -> TranslationResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TranslationError::unknown_tag("ObjectType", s))
    }
}
