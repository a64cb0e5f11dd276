//! # Ledger Vesting Terms
//!
//! Vesting conditions carry their trigger as a `{tag, value}` variant;
//! [`LedgerVestingTrigger`] is its native form.

// Fields mirror the interchange records one for one.
#![allow(missing_docs)]

use super::variant::LedgerVariant;
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::value_objects::{LedgerTime, Numeric};
use serde::{Deserialize, Serialize};

/// Ledger tag of the start-date trigger.
pub const TAG_VESTING_START: &str = "OcfVestingStartTrigger";
/// Ledger tag of the absolute-date trigger.
pub const TAG_VESTING_ABSOLUTE: &str = "OcfVestingScheduleAbsoluteTrigger";
/// Ledger tag of the relative-period trigger.
pub const TAG_VESTING_RELATIVE: &str = "OcfVestingScheduleRelativeTrigger";
/// Ledger tag of the event trigger.
pub const TAG_VESTING_EVENT: &str = "OcfVestingEventTrigger";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerVestingTerms {
    pub id: String,
    pub name: String,
    pub description: String,
    pub allocation_type: String,
    #[serde(default)]
    pub vesting_conditions: Vec<LedgerVestingCondition>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerVestingCondition {
    pub id: String,
    pub description: Option<String>,
    pub quantity: Option<Numeric>,
    pub portion: Option<LedgerVestingPortion>,
    pub trigger: LedgerVariant,
    #[serde(default)]
    pub next_condition_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerVestingPortion {
    pub numerator: Numeric,
    pub denominator: Numeric,
    pub remainder: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerVestingPeriod {
    pub length: u32,
    pub type_: String,
    pub occurrences: u32,
    pub day_of_month: Option<String>,
    pub cliff_installment: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerAbsoluteTrigger {
    pub date: LedgerTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRelativeTrigger {
    pub period: LedgerVestingPeriod,
    pub relative_to_condition_id: String,
}

/// Native form of the ledger's vesting trigger union.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerVestingTrigger {
    Start,
    Absolute(LedgerAbsoluteTrigger),
    Relative(LedgerRelativeTrigger),
    Event,
}

impl LedgerVestingTrigger {
    /// Name of the union in error messages.
    pub const UNION: &'static str = "VestingTrigger";

    /// Encodes as a raw `{tag, value}` pair.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the payload cannot be serialized.
    pub fn to_variant(&self) -> TranslationResult<LedgerVariant> {
        match self {
            Self::Start => Ok(LedgerVariant::unit(TAG_VESTING_START)),
            Self::Absolute(p) => LedgerVariant::from_payload(TAG_VESTING_ABSOLUTE, p),
            Self::Relative(p) => LedgerVariant::from_payload(TAG_VESTING_RELATIVE, p),
            Self::Event => Ok(LedgerVariant::unit(TAG_VESTING_EVENT)),
        }
    }
}

impl TryFrom<&LedgerVariant> for LedgerVestingTrigger {
    type Error = TranslationError;

    fn try_from(variant: &LedgerVariant) -> TranslationResult<Self> {
        match variant.tag.as_str() {
            TAG_VESTING_START => Ok(Self::Start),
            TAG_VESTING_ABSOLUTE => variant.payload().map(Self::Absolute),
            TAG_VESTING_RELATIVE => variant.payload().map(Self::Relative),
            TAG_VESTING_EVENT => Ok(Self::Event),
            other => Err(TranslationError::unknown_tag(Self::UNION, other)),
        }
    }
}
