//! # Transactions
//!
//! Issuance and lifecycle transactions for stock, convertibles, warrants
//! and equity compensation.
//!
//! Several object types share one record shape (acceptances, quantity
//! transfers, quantity cancellations); the `object_type` discriminator
//! tells them apart and is checked by the translator that handles the
//! record.

use super::common::SecurityExemption;
use super::trigger::ConversionTrigger;
use crate::domain::value_objects::{
    CompensationType, ConvertibleType, Monetary, Numeric, ObjectType, OcfDate,
    TerminationWindowReason, WindowPeriodUnit,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// Issuances
// ============================================================================

/// Issuance of a convertible instrument (SAFE, note or other security).
///
/// # Examples
///
/// ```
/// use ocf_ledger::domain::interchange::ConvertibleIssuance;
///
/// let issuance: ConvertibleIssuance = serde_json::from_value(serde_json::json!({
///     "object_type": "TX_CONVERTIBLE_ISSUANCE",
///     "id": "ci-1",
///     "date": "2024-01-15",
///     "security_id": "sec-1",
///     "custom_id": "SAFE-1",
///     "stakeholder_id": "sh-1",
///     "investment_amount": {"amount": "250000", "currency": "USD"},
///     "convertible_type": "SAFE",
///     "conversion_triggers": ["AUTOMATIC_ON_CONDITION"],
///     "seniority": 1
/// }))
/// .unwrap();
/// assert_eq!(issuance.conversion_triggers.len(), 1);
/// assert!(issuance.comments.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertibleIssuance {
    /// Always `TX_CONVERTIBLE_ISSUANCE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Security identifier.
    pub security_id: String,
    /// Issuer-facing identifier, e.g. `SAFE-1`.
    pub custom_id: String,
    /// Holder.
    pub stakeholder_id: String,
    /// Amount invested.
    pub investment_amount: Monetary,
    /// Instrument kind.
    pub convertible_type: ConvertibleType,
    /// Conversion triggers; must be non-empty.
    pub conversion_triggers: Vec<ConversionTrigger>,
    /// Seniority relative to other convertibles.
    pub seniority: Numeric,
    /// Pro-rata amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pro_rata: Option<Numeric>,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Securities law exemptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_law_exemptions: Vec<SecurityExemption>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Issuance of a warrant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantIssuance {
    /// Always `TX_WARRANT_ISSUANCE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Security identifier.
    pub security_id: String,
    /// Issuer-facing identifier.
    pub custom_id: String,
    /// Holder.
    pub stakeholder_id: String,
    /// Shares the warrant covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Numeric>,
    /// Exercise price per share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_price: Option<Monetary>,
    /// Price paid for the warrant.
    pub purchase_price: Monetary,
    /// Exercise triggers; must be non-empty.
    pub exercise_triggers: Vec<ConversionTrigger>,
    /// Expiration date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warrant_expiration_date: Option<OcfDate>,
    /// Vesting schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_terms_id: Option<String>,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Securities law exemptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_law_exemptions: Vec<SecurityExemption>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Post-termination exercise window for equity compensation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationWindow {
    /// Termination reason the window applies to.
    pub reason: TerminationWindowReason,
    /// Window length.
    pub period: u32,
    /// Unit of `period`.
    pub period_type: WindowPeriodUnit,
}

/// Issuance of an option, RSU or SAR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityCompensationIssuance {
    /// Always `TX_EQUITY_COMPENSATION_ISSUANCE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Security identifier.
    pub security_id: String,
    /// Issuer-facing identifier.
    pub custom_id: String,
    /// Holder.
    pub stakeholder_id: String,
    /// Compensation kind.
    pub compensation_type: CompensationType,
    /// Shares granted.
    pub quantity: Numeric,
    /// Exercise price (options).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_price: Option<Monetary>,
    /// Base price (SARs).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_price: Option<Monetary>,
    /// Plan the grant is issued from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_plan_id: Option<String>,
    /// Class the grant converts into.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_class_id: Option<String>,
    /// Vesting schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_terms_id: Option<String>,
    /// Expiration date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<OcfDate>,
    /// Exercisable before vesting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_exercisable: Option<bool>,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Securities law exemptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_law_exemptions: Vec<SecurityExemption>,
    /// Post-termination exercise windows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub termination_exercise_windows: Vec<TerminationWindow>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Issuance of shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockIssuance {
    /// Always `TX_STOCK_ISSUANCE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Security identifier.
    pub security_id: String,
    /// Issuer-facing identifier, e.g. a certificate number.
    pub custom_id: String,
    /// Holder.
    pub stakeholder_id: String,
    /// Class issued.
    pub stock_class_id: String,
    /// Price per share.
    pub share_price: Monetary,
    /// Shares issued.
    pub quantity: Numeric,
    /// Plan the shares are issued from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_plan_id: Option<String>,
    /// Vesting schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_terms_id: Option<String>,
    /// Cost basis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_basis: Option<Monetary>,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Legends printed on the certificate.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stock_legend_ids: Vec<String>,
    /// Securities law exemptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub security_law_exemptions: Vec<SecurityExemption>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

// ============================================================================
// Lifecycle
// ============================================================================

/// Holder acceptance of a stock, convertible or warrant issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acceptance {
    /// `TX_STOCK_ACCEPTANCE`, `TX_CONVERTIBLE_ACCEPTANCE` or
    /// `TX_WARRANT_ACCEPTANCE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Accepted security.
    pub security_id: String,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Cancellation of some or all of a share-denominated security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityCancellation {
    /// `TX_STOCK_CANCELLATION` or `TX_EQUITY_COMPENSATION_CANCELLATION`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Cancelled security.
    pub security_id: String,
    /// Shares cancelled.
    pub quantity: Numeric,
    /// Security holding the remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_security_id: Option<String>,
    /// Why the security was cancelled.
    pub reason_text: String,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Cancellation of some or all of a convertible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertibleCancellation {
    /// Always `TX_CONVERTIBLE_CANCELLATION`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Cancelled security.
    pub security_id: String,
    /// Amount cancelled.
    pub amount: Monetary,
    /// Security holding the remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_security_id: Option<String>,
    /// Why the security was cancelled.
    pub reason_text: String,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Transfer of a share-denominated security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityTransfer {
    /// `TX_STOCK_TRANSFER`, `TX_WARRANT_TRANSFER` or
    /// `TX_EQUITY_COMPENSATION_TRANSFER`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Transferred security.
    pub security_id: String,
    /// Shares transferred.
    pub quantity: Numeric,
    /// Securities created by the transfer; must be non-empty.
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    /// Security holding the remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_security_id: Option<String>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Transfer of a convertible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertibleTransfer {
    /// Always `TX_CONVERTIBLE_TRANSFER`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Transferred security.
    pub security_id: String,
    /// Amount transferred.
    pub amount: Monetary,
    /// Securities created by the transfer; must be non-empty.
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    /// Security holding the remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_security_id: Option<String>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Exercise of a warrant through one of its triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantExercise {
    /// Always `TX_WARRANT_EXERCISE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Exercised warrant.
    pub security_id: String,
    /// Trigger the exercise went through.
    pub trigger_id: String,
    /// Shares exercised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Numeric>,
    /// Securities created by the exercise; must be non-empty.
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    /// Security holding the remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_security_id: Option<String>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Exercise of an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityCompensationExercise {
    /// Always `TX_EQUITY_COMPENSATION_EXERCISE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Exercised grant.
    pub security_id: String,
    /// Shares exercised.
    pub quantity: Numeric,
    /// Securities created by the exercise; must be non-empty.
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Retraction of a warrant before acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarrantRetraction {
    /// Always `TX_WARRANT_RETRACTION`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Retracted warrant.
    pub security_id: String,
    /// Why the warrant was retracted.
    pub reason_text: String,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Repurchase of shares by the issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockRepurchase {
    /// Always `TX_STOCK_REPURCHASE`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Repurchased security.
    pub security_id: String,
    /// Shares repurchased.
    pub quantity: Numeric,
    /// Price per share.
    pub price: Monetary,
    /// Security holding the remaining balance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_security_id: Option<String>,
    /// Consideration description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consideration_text: Option<String>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}
