//! # Ledger Entities
//!
//! Ledger-side issuer, stakeholder, stock class, stock plan and valuation
//! records. Lists are always present (possibly empty); optional scalars are
//! explicit `null`.

// Fields mirror the interchange records one for one.
#![allow(missing_docs)]

use super::common::{LedgerAddress, LedgerContactInfo, LedgerEmail, LedgerName, LedgerPhone, TaxId};
use super::mechanism::LedgerStockClassConversionRight;
use super::variant::LedgerVariant;
use crate::domain::value_objects::{LedgerTime, Monetary, Numeric};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerIssuer {
    pub id: String,
    pub legal_name: String,
    pub formation_date: LedgerTime,
    pub country_of_formation: String,
    pub dba: Option<String>,
    pub country_subdivision_of_formation: Option<String>,
    #[serde(default)]
    pub tax_ids: Vec<TaxId>,
    pub email: Option<LedgerEmail>,
    pub phone: Option<LedgerPhone>,
    pub address: Option<LedgerAddress>,
    pub initial_shares_authorized: Option<LedgerVariant>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStakeholder {
    pub id: String,
    pub name: LedgerName,
    pub stakeholder_type: String,
    pub issuer_assigned_id: Option<String>,
    #[serde(default)]
    pub current_relationships: Vec<String>,
    pub primary_contact: Option<LedgerContactInfo>,
    #[serde(default)]
    pub addresses: Vec<LedgerAddress>,
    #[serde(default)]
    pub tax_ids: Vec<TaxId>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockClass {
    pub id: String,
    pub name: String,
    pub class_type: String,
    pub default_id_prefix: String,
    pub initial_shares_authorized: LedgerVariant,
    pub votes_per_share: Numeric,
    pub seniority: Numeric,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    pub par_value: Option<Monetary>,
    pub price_per_share: Option<Monetary>,
    #[serde(default)]
    pub conversion_rights: Vec<LedgerStockClassConversionRight>,
    pub liquidation_preference_multiple: Option<Numeric>,
    pub participation_cap_multiple: Option<Numeric>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStockPlan {
    pub id: String,
    pub plan_name: String,
    pub initial_shares_reserved: Numeric,
    #[serde(default)]
    pub stock_class_ids: Vec<String>,
    pub board_approval_date: Option<LedgerTime>,
    pub stockholder_approval_date: Option<LedgerTime>,
    pub default_cancellation_behavior: Option<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerValuation {
    pub id: String,
    pub stock_class_id: String,
    pub provider: Option<String>,
    pub board_approval_date: Option<LedgerTime>,
    pub price_per_share: Monetary,
    pub effective_date: LedgerTime,
    pub valuation_type: String,
    #[serde(default)]
    pub comments: Vec<String>,
}
