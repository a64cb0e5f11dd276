//! # Ledger Transactions
//!
//! Ledger-side issuance and lifecycle records.

// Fields mirror the interchange records one for one.
#![allow(missing_docs)]

use super::common::SecurityExemption;
use super::mechanism::LedgerTrigger;
use crate::domain::value_objects::{LedgerTime, Monetary, Numeric};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConvertibleIssuance {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub custom_id: String,
    pub stakeholder_id: String,
    pub investment_amount: Monetary,
    pub convertible_type: String,
    #[serde(default)]
    pub conversion_triggers: Vec<LedgerTrigger>,
    pub seniority: Numeric,
    pub pro_rata: Option<Numeric>,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub security_law_exemptions: Vec<SecurityExemption>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerWarrantIssuance {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub custom_id: String,
    pub stakeholder_id: String,
    pub quantity: Option<Numeric>,
    pub exercise_price: Option<Monetary>,
    pub purchase_price: Monetary,
    #[serde(default)]
    pub exercise_triggers: Vec<LedgerTrigger>,
    pub warrant_expiration_date: Option<LedgerTime>,
    pub vesting_terms_id: Option<String>,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub security_law_exemptions: Vec<SecurityExemption>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerTerminationWindow {
    pub reason: String,
    pub period: u32,
    pub period_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEquityCompensationIssuance {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub custom_id: String,
    pub stakeholder_id: String,
    pub compensation_type: String,
    pub quantity: Numeric,
    pub exercise_price: Option<Monetary>,
    pub base_price: Option<Monetary>,
    pub stock_plan_id: Option<String>,
    pub stock_class_id: Option<String>,
    pub vesting_terms_id: Option<String>,
    pub expiration_date: Option<LedgerTime>,
    pub early_exercisable: Option<bool>,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub security_law_exemptions: Vec<SecurityExemption>,
    #[serde(default)]
    pub termination_exercise_windows: Vec<LedgerTerminationWindow>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockIssuance {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub custom_id: String,
    pub stakeholder_id: String,
    pub stock_class_id: String,
    pub share_price: Monetary,
    pub quantity: Numeric,
    pub stock_plan_id: Option<String>,
    pub vesting_terms_id: Option<String>,
    pub cost_basis: Option<Monetary>,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub stock_legend_ids: Vec<String>,
    #[serde(default)]
    pub security_law_exemptions: Vec<SecurityExemption>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAcceptance {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerQuantityCancellation {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub quantity: Numeric,
    pub balance_security_id: Option<String>,
    pub reason_text: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConvertibleCancellation {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub amount: Monetary,
    pub balance_security_id: Option<String>,
    pub reason_text: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerQuantityTransfer {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub quantity: Numeric,
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    pub balance_security_id: Option<String>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConvertibleTransfer {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub amount: Monetary,
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    pub balance_security_id: Option<String>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerWarrantExercise {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub trigger_id: String,
    pub quantity: Option<Numeric>,
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    pub balance_security_id: Option<String>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEquityCompensationExercise {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub quantity: Numeric,
    #[serde(default)]
    pub resulting_security_ids: Vec<String>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerWarrantRetraction {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub reason_text: String,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockRepurchase {
    pub id: String,
    pub date: LedgerTime,
    pub security_id: String,
    pub quantity: Numeric,
    pub price: Monetary,
    pub balance_security_id: Option<String>,
    pub consideration_text: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}
