//! # Vesting Terms
//!
//! Vesting schedules are a graph of conditions; each condition carries a
//! trigger (start date, absolute date, relative period or event) and the
//! ids of the conditions that follow it.

use crate::domain::value_objects::{
    AllocationType, Numeric, ObjectType, OcfDate, VestingPeriodUnit,
};
use serde::{Deserialize, Serialize};

/// A vesting schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingTerms {
    /// Always `VESTING_TERMS`.
    pub object_type: ObjectType,
    /// Identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// How fractional shares are allocated across tranches.
    pub allocation_type: AllocationType,
    /// Conditions; must be non-empty.
    pub vesting_conditions: Vec<VestingCondition>,
    /// Free-text comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
}

/// One node of the vesting graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingCondition {
    /// Identifier, unique within the schedule.
    pub id: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fixed share quantity vesting at this condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Numeric>,
    /// Fraction of the grant vesting at this condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<VestingPortion>,
    /// What fires this condition.
    pub trigger: VestingTrigger,
    /// Conditions that follow this one.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next_condition_ids: Vec<String>,
}

/// A fraction of the grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingPortion {
    /// Numerator.
    pub numerator: Numeric,
    /// Denominator.
    pub denominator: Numeric,
    /// Applies to the remainder rather than the whole grant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder: Option<bool>,
}

/// What fires a vesting condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VestingTrigger {
    /// Fires on the vesting start date.
    VestingStartDate,
    /// Fires on a fixed date.
    VestingScheduleAbsolute {
        /// The date.
        date: OcfDate,
    },
    /// Fires a period after another condition.
    VestingScheduleRelative {
        /// The period.
        period: VestingPeriod,
        /// Condition the period counts from.
        relative_to_condition_id: String,
    },
    /// Fires on an external event.
    VestingEvent,
}

/// A repeating period counted from another condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VestingPeriod {
    /// Length of one period.
    pub length: u32,
    /// Unit of `length`.
    #[serde(rename = "type")]
    pub unit: VestingPeriodUnit,
    /// How many periods.
    pub occurrences: u32,
    /// Day of month the period lands on (month periods only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<String>,
    /// Number of installments in the cliff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cliff_installment: Option<u32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unit_triggers_carry_only_the_type() {
        let trigger: VestingTrigger =
            serde_json::from_value(json!({"type": "VESTING_START_DATE"})).unwrap();
        assert_eq!(trigger, VestingTrigger::VestingStartDate);
        assert_eq!(
            serde_json::to_value(&VestingTrigger::VestingEvent).unwrap(),
            json!({"type": "VESTING_EVENT"})
        );
    }

    #[test]
    fn relative_trigger_parses_period() {
        let trigger: VestingTrigger = serde_json::from_value(json!({
            "type": "VESTING_SCHEDULE_RELATIVE",
            "period": {"length": 1, "type": "MONTHS", "occurrences": 36},
            "relative_to_condition_id": "cliff"
        }))
        .unwrap();
        let VestingTrigger::VestingScheduleRelative { period, .. } = trigger else {
            panic!("expected relative trigger");
        };
        assert_eq!(period.unit, VestingPeriodUnit::Months);
        assert_eq!(period.occurrences, 36);
    }
}
