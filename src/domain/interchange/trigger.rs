//! # Conversion and Exercise Triggers
//!
//! A trigger names when a right becomes active. On input a trigger may be a
//! bare type literal (`"AUTOMATIC_ON_CONDITION"`) or a structured record;
//! legacy aliases (`AUTOMATIC`, `OPTIONAL`) are accepted in both forms.
//! Output always uses the structured form with canonical literals.

use super::mechanism::ConversionRight;
use crate::domain::value_objects::{OcfDate, TriggerType};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One conversion or exercise trigger.
///
/// # Examples
///
/// ```
/// use ocf_ledger::domain::interchange::ConversionTrigger;
/// use ocf_ledger::domain::value_objects::TriggerType;
///
/// let bare: ConversionTrigger = serde_json::from_value(serde_json::json!("OPTIONAL")).unwrap();
/// assert_eq!(bare.trigger_type, TriggerType::ElectiveAtWill);
/// assert!(bare.conversion_right.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionTrigger {
    /// Trigger type.
    #[serde(rename = "type")]
    pub trigger_type: TriggerType,
    /// Identifier, unique within the parent object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_id: Option<String>,
    /// Short display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_description: Option<String>,
    /// Date for `AUTOMATIC_ON_DATE` triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_date: Option<OcfDate>,
    /// Condition for the `*_ON_CONDITION` triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_condition: Option<String>,
    /// Window start for `ELECTIVE_IN_RANGE` triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<OcfDate>,
    /// Window end for `ELECTIVE_IN_RANGE` triggers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<OcfDate>,
    /// The right this trigger activates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversion_right: Option<ConversionRight>,
}

impl ConversionTrigger {
    /// Creates a trigger carrying only its type.
    #[must_use]
    pub const fn of_type(trigger_type: TriggerType) -> Self {
        Self {
            trigger_type,
            trigger_id: None,
            nickname: None,
            trigger_description: None,
            trigger_date: None,
            trigger_condition: None,
            start_date: None,
            end_date: None,
            conversion_right: None,
        }
    }

    /// Attaches a right.
    #[must_use]
    pub fn with_right(mut self, right: ConversionRight) -> Self {
        self.conversion_right = Some(right);
        self
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, trigger_id: impl Into<String>) -> Self {
        self.trigger_id = Some(trigger_id.into());
        self
    }
}

#[derive(Deserialize)]
struct TriggerRecord {
    #[serde(rename = "type")]
    trigger_type: String,
    #[serde(default)]
    trigger_id: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    trigger_description: Option<String>,
    #[serde(default)]
    trigger_date: Option<OcfDate>,
    #[serde(default)]
    trigger_condition: Option<String>,
    #[serde(default)]
    start_date: Option<OcfDate>,
    #[serde(default)]
    end_date: Option<OcfDate>,
    #[serde(default)]
    conversion_right: Option<ConversionRight>,
}

impl<'de> Deserialize<'de> for ConversionTrigger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(literal) => TriggerType::parse_with_aliases(&literal)
                .map(Self::of_type)
                .map_err(D::Error::custom),
            record @ Value::Object(_) => {
                let record: TriggerRecord =
                    serde_json::from_value(record).map_err(D::Error::custom)?;
                let trigger_type = TriggerType::parse_with_aliases(&record.trigger_type)
                    .map_err(D::Error::custom)?;
                Ok(Self {
                    trigger_type,
                    trigger_id: record.trigger_id,
                    nickname: record.nickname,
                    trigger_description: record.trigger_description,
                    trigger_date: record.trigger_date,
                    trigger_condition: record.trigger_condition,
                    start_date: record.start_date,
                    end_date: record.end_date,
                    conversion_right: record.conversion_right,
                })
            }
            other => Err(D::Error::custom(format!(
                "type mismatch at trigger: expected string or object, found {other}"
            ))),
        }
    }
}
