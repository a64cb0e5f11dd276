//! # Shared Ledger Records
//!
//! Contact records as the ledger stores them. Tax ids and securities law
//! exemptions have the same shape on both sides and are shared with the
//! interchange module.

// Fields mirror the interchange records one for one.
#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

pub use crate::domain::interchange::{SecurityExemption, TaxId};

/// Ledger tag of a numeric authorized share count.
pub const TAG_AUTHORIZED_NUMERIC: &str = "OcfAuthorizedSharesNumeric";
/// Ledger tag of a sentinel authorized share count.
pub const TAG_AUTHORIZED_ENUM: &str = "OcfAuthorizedSharesEnum";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerName {
    pub legal_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEmail {
    pub email_type: String,
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerPhone {
    pub phone_type: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAddress {
    pub address_type: String,
    pub street_suite: Option<String>,
    pub city: Option<String>,
    pub country_subdivision: Option<String>,
    pub country: String,
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerContactInfo {
    pub name: LedgerName,
    #[serde(default)]
    pub phone_numbers: Vec<LedgerPhone>,
    #[serde(default)]
    pub emails: Vec<LedgerEmail>,
}
