//! # Ledger Adjustments

// Fields mirror the interchange records one for one.
#![allow(missing_docs)]

use super::mechanism::LedgerRatioConversion;
use super::variant::LedgerVariant;
use crate::domain::value_objects::{LedgerTime, Numeric, Ratio};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerIssuerAuthorizedSharesAdjustment {
    pub id: String,
    pub date: LedgerTime,
    pub issuer_id: String,
    pub new_shares_authorized: LedgerVariant,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockClassAuthorizedSharesAdjustment {
    pub id: String,
    pub date: LedgerTime,
    pub stock_class_id: String,
    pub new_shares_authorized: LedgerVariant,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockClassConversionRatioAdjustment {
    pub id: String,
    pub date: LedgerTime,
    pub stock_class_id: String,
    pub new_ratio_conversion_mechanism: LedgerRatioConversion,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockClassSplit {
    pub id: String,
    pub date: LedgerTime,
    pub stock_class_id: String,
    pub split_ratio: Ratio,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockPlanPoolAdjustment {
    pub id: String,
    pub date: LedgerTime,
    pub stock_plan_id: String,
    pub shares_reserved: Numeric,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    #[serde(default)]
    pub comments: Vec<String>,
}
