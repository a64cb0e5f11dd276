//! # Cap Table Entities
//!
//! Issuers, stakeholders, stock classes, stock plans and valuations.
//!
//! Legacy field names (`stock_class_id` on a plan, `current_relationship`
//! on a stakeholder, `votes` on a class) are not modeled here; they are
//! reconciled by the normalization engine before an object reaches these
//! types.

use super::common::{Address, AuthorizedShares, ContactInfo, Email, Name, Phone, TaxId};
use super::mechanism::StockClassConversionRight;
use crate::domain::value_objects::{
    Monetary, Numeric, ObjectType, OcfDate, StakeholderRelationship, StakeholderType,
    StockClassType, StockPlanCancellationBehavior, ValuationType,
};
use serde::{Deserialize, Serialize};

/// The company whose cap table this is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issuer {
    /// Always `ISSUER`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Legal name.
    pub legal_name: String,
    /// Date of formation.
    pub formation_date: OcfDate,
    /// Country of formation.
    pub country_of_formation: String,
    /// Doing-business-as name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dba: Option<String>,
    /// State or province of formation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_subdivision_of_formation: Option<String>,
    /// Tax identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_ids: Vec<TaxId>,
    /// Contact email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    /// Contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    /// Registered address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// Shares authorized at formation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_shares_authorized: Option<AuthorizedShares>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// A person or institution holding securities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stakeholder {
    /// Always `STAKEHOLDER`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Name.
    pub name: Name,
    /// Individual or institution.
    pub stakeholder_type: StakeholderType,
    /// Issuer's own identifier for the stakeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_assigned_id: Option<String>,
    /// Current relationships to the issuer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_relationships: Vec<StakeholderRelationship>,
    /// Primary contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact: Option<ContactInfo>,
    /// Addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addresses: Vec<Address>,
    /// Tax identifiers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_ids: Vec<TaxId>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// A class of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockClass {
    /// Always `STOCK_CLASS`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Common or preferred.
    pub class_type: StockClassType,
    /// Prefix for certificate ids.
    pub default_id_prefix: String,
    /// Shares authorized at creation.
    pub initial_shares_authorized: AuthorizedShares,
    /// Votes per share.
    pub votes_per_share: Numeric,
    /// Liquidation seniority; higher is more senior.
    pub seniority: Numeric,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// Par value per share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub par_value: Option<Monetary>,
    /// Original issue price per share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_share: Option<Monetary>,
    /// Rights to convert into other classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conversion_rights: Vec<StockClassConversionRight>,
    /// Liquidation preference multiple.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidation_preference_multiple: Option<Numeric>,
    /// Participation cap multiple.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participation_cap_multiple: Option<Numeric>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// An equity incentive plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockPlan {
    /// Always `STOCK_PLAN`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Plan name.
    pub plan_name: String,
    /// Shares reserved at creation.
    pub initial_shares_reserved: Numeric,
    /// Classes the plan issues from; must be non-empty.
    #[serde(default)]
    pub stock_class_ids: Vec<String>,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Stockholder approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stockholder_approval_date: Option<OcfDate>,
    /// What happens to cancelled plan securities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cancellation_behavior: Option<StockPlanCancellationBehavior>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// A share price valuation, such as a 409A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Valuation {
    /// Always `VALUATION`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Stock class the valuation prices.
    pub stock_class_id: String,
    /// Firm that performed the valuation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Board approval date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_approval_date: Option<OcfDate>,
    /// Price per share.
    pub price_per_share: Monetary,
    /// Date the valuation takes effect.
    pub effective_date: OcfDate,
    /// Kind of valuation.
    pub valuation_type: ValuationType,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}
