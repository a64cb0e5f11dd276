//! # Shared Interchange Records
//!
//! Small records reused across several object types: contact details,
//! tax identifiers, interest rates, capitalization rules, and authorized
//! share counts.

use crate::domain::value_objects::{
    AddressType, AuthorizedSharesSentinel, EmailType, Numeric, OcfDate, PhoneType,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A legal name with optional given and family parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    /// Full legal name.
    pub legal_name: String,
    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// A tax identifier and its issuing country.
///
/// The ledger stores the same two fields, so this record is shared by both
/// representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxId {
    /// The identifier.
    pub tax_id: String,
    /// Issuing country (ISO 3166-1 alpha-2).
    pub country: String,
}

/// A securities law exemption, shared by both representations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityExemption {
    /// Exemption description.
    pub description: String,
    /// Jurisdiction the exemption applies in.
    pub jurisdiction: String,
}

/// An email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email {
    /// Address kind.
    pub email_type: EmailType,
    /// The address itself.
    pub email_address: String,
}

/// A phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    /// Number kind.
    pub phone_type: PhoneType,
    /// The number itself.
    pub phone_number: String,
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address kind.
    pub address_type: AddressType,
    /// Street and suite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_suite: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, province or other subdivision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_subdivision: Option<String>,
    /// Country (ISO 3166-1 alpha-2).
    pub country: String,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// A stakeholder's primary contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Contact name.
    pub name: Name,
    /// Phone numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<Phone>,
    /// Email addresses.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<Email>,
}

/// One interest rate period on a convertible note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRate {
    /// Rate as a decimal fraction.
    pub rate: Numeric,
    /// First day interest accrues at this rate.
    pub accrual_start_date: OcfDate,
    /// Last day interest accrues at this rate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accrual_end_date: Option<OcfDate>,
}

/// Which securities count towards capitalization when a mechanism computes
/// its conversion price.
///
/// Every flag defaults to `false`; the ledger's optional booleans collapse
/// `null` to `false` on the way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapitalizationDefinitionRules {
    /// Include outstanding shares.
    pub include_outstanding_shares: bool,
    /// Include outstanding options.
    pub include_outstanding_options: bool,
    /// Include outstanding unissued options.
    pub include_outstanding_unissued_options: bool,
    /// Include the converting security itself.
    pub include_this_security: bool,
    /// Include other converting securities.
    pub include_other_converting_securities: bool,
    /// Include the option pool top-up for promised options.
    pub include_option_pool_topup_for_promised_options: bool,
    /// Include any additional option pool top-up.
    pub include_additional_option_pool_topup: bool,
    /// Include the new money raised.
    pub include_new_money: bool,
}

/// An authorized share count: a number or one of the sentinel literals.
///
/// On the wire this is a bare string (`"1000000"`, `"UNLIMITED"`); JSON
/// numbers are also accepted on input.
///
/// # Examples
///
/// ```
/// use ocf_ledger::domain::interchange::AuthorizedShares;
///
/// let count: AuthorizedShares = serde_json::from_value(serde_json::json!("1000000")).unwrap();
/// assert!(matches!(count, AuthorizedShares::Count(_)));
///
/// let unlimited: AuthorizedShares =
///     serde_json::from_value(serde_json::json!("UNLIMITED")).unwrap();
/// assert_eq!(serde_json::to_value(&unlimited).unwrap(), serde_json::json!("UNLIMITED"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizedShares {
    /// A share count.
    Count(Numeric),
    /// A sentinel such as `UNLIMITED`.
    Sentinel(AuthorizedSharesSentinel),
}

impl fmt::Display for AuthorizedShares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(count) => write!(f, "{count}"),
            Self::Sentinel(sentinel) => write!(f, "{sentinel}"),
        }
    }
}

impl Serialize for AuthorizedShares {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AuthorizedShares {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        if let Value::String(text) = &value
            && let Ok(sentinel) = text.parse::<AuthorizedSharesSentinel>()
        {
            return Ok(Self::Sentinel(sentinel));
        }
        Numeric::from_json(&value, "")
            .map(Self::Count)
            .map_err(serde::de::Error::custom)
    }
}
