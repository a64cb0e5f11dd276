//! # Adjustments
//!
//! Changes to authorized shares, conversion ratios, splits and plan pools.

use super::common::AuthorizedShares;
use super::mechanism::RatioConversion;
use crate::domain::value_objects::{Numeric, ObjectType, OcfDate, Ratio};
use serde::{Deserialize, Serialize};

/// Change to the issuer's authorized share count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerAuthorizedSharesAdjustment {
    /// Always `TX_ISSUER_AUTHORIZED_SHARES_ADJUSTMENT`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Adjusted issuer.
    pub issuer_id: String,
    /// New authorized share count.
    pub new_shares_authorized: AuthorizedShares,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Change to a stock class's authorized share count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockClassAuthorizedSharesAdjustment {
    /// Always `TX_STOCK_CLASS_AUTHORIZED_SHARES_ADJUSTMENT`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Adjusted class.
    pub stock_class_id: String,
    /// New authorized share count.
    pub new_shares_authorized: AuthorizedShares,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Change to a stock class's conversion ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockClassConversionRatioAdjustment {
    /// Always `TX_STOCK_CLASS_CONVERSION_RATIO_ADJUSTMENT`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Adjusted class.
    pub stock_class_id: String,
    /// The new ratio mechanism.
    pub new_ratio_conversion_mechanism: RatioConversion,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Split of a stock class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockClassSplit {
    /// Always `TX_STOCK_CLASS_SPLIT`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Split class.
    pub stock_class_id: String,
    /// New shares per old share.
    pub split_ratio: Ratio,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// Change to a stock plan's reserved pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPlanPoolAdjustment {
    /// Always `TX_STOCK_PLAN_POOL_ADJUSTMENT`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Transaction date.
    pub date: OcfDate,
    /// Adjusted plan.
    pub stock_plan_id: String,
    /// New reserved share count.
    pub shares_reserved: Numeric,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}
