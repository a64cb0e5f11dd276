//! # Trigger Mapper
//!
//! Maps the conversion triggers of a convertible and the exercise triggers
//! of a warrant between the interchange and ledger forms.
//!
//! Every trigger leaves with an identifier: a supplied non-empty id is kept,
//! otherwise `{parent_id}-trigger-{n}` is synthesized from the 1-based
//! position. Identifiers must be unique within the parent.
//!
//! A trigger without a conversion right is rejected in [`TriggerMode::Strict`].
//! [`TriggerMode::Lenient`] synthesizes a placeholder right instead and
//! records the trigger's index in [`TriggerMapping::placeholders`].

use crate::application::variant_mapper::{ledger_literal, parse_literal, VariantMapper};
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::interchange::{
    ConversionMechanism, ConversionRight, ConversionTrigger, SafeConversion,
};
use crate::domain::ledger::{LedgerConversionRight, LedgerTrigger};
use crate::domain::value_objects::{
    ConversionRightType, ConvertibleType, LedgerTime, OcfDate, TriggerType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Description carried by a synthesized custom mechanism.
pub const PLACEHOLDER_DESCRIPTION: &str = "Unspecified conversion mechanism";

/// How a trigger without a conversion right is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Reject the trigger.
    #[default]
    Strict,
    /// Synthesize a placeholder right and report it.
    Lenient,
}

impl fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

impl FromStr for TriggerMode {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(TranslationError::unknown_tag("TriggerMode", other)),
        }
    }
}

/// The object owning a trigger list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerParent<'a> {
    /// Parent object id, used for id synthesis.
    pub id: &'a str,
    /// Name of the trigger list field, used in error paths.
    pub list_field: &'static str,
    /// Right kind the parent's triggers activate.
    pub right_type: ConversionRightType,
    /// Instrument kind, for convertibles.
    pub convertible_type: Option<ConvertibleType>,
}

impl<'a> TriggerParent<'a> {
    /// Parent of `conversion_triggers` on a convertible issuance.
    #[must_use]
    pub const fn convertible(id: &'a str, convertible_type: ConvertibleType) -> Self {
        Self {
            id,
            list_field: "conversion_triggers",
            right_type: ConversionRightType::Convertible,
            convertible_type: Some(convertible_type),
        }
    }

    /// Parent of `exercise_triggers` on a warrant issuance.
    #[must_use]
    pub const fn warrant(id: &'a str) -> Self {
        Self {
            id,
            list_field: "exercise_triggers",
            right_type: ConversionRightType::Warrant,
            convertible_type: None,
        }
    }

    fn path(&self, index: usize, field: &str) -> String {
        format!("{}[{index}].{field}", self.list_field)
    }

    /// Mechanism used when a trigger has no right in lenient mode.
    ///
    /// SAFE convertibles get a SAFE mechanism without MFN; everything else
    /// gets a custom mechanism.
    #[must_use]
    pub fn placeholder_mechanism(&self) -> ConversionMechanism {
        match (self.right_type, self.convertible_type) {
            (ConversionRightType::Convertible, Some(ConvertibleType::Safe)) => {
                ConversionMechanism::Safe(SafeConversion {
                    conversion_mfn: false,
                    conversion_discount: None,
                    conversion_valuation_cap: None,
                    conversion_timing: None,
                    capitalization_definition: None,
                    capitalization_definition_rules: None,
                    exit_multiple: None,
                })
            }
            _ => ConversionMechanism::custom(PLACEHOLDER_DESCRIPTION),
        }
    }
}

/// Mapped triggers plus the indices that received a placeholder right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMapping<T> {
    /// Triggers in input order.
    pub triggers: Vec<T>,
    /// Indices of triggers whose right was synthesized.
    pub placeholders: Vec<usize>,
}

/// Returns the identifier a trigger leaves with.
///
/// This is the positional rule alone. When mapping a list, a synthesized id
/// that another trigger in the list already supplies is skipped in favour of
/// the next free position.
///
/// # Examples
///
/// ```
/// use ocf_ledger::application::trigger_mapper::trigger_id;
///
/// assert_eq!(trigger_id("conv-1", 0, None), "conv-1-trigger-1");
/// assert_eq!(trigger_id("conv-1", 0, Some("ipo")), "ipo");
/// assert_eq!(trigger_id("conv-1", 2, Some("  ")), "conv-1-trigger-3");
/// ```
#[must_use]
pub fn trigger_id(parent_id: &str, index: usize, supplied: Option<&str>) -> String {
    match supplied {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => format!("{parent_id}-trigger-{}", index + 1),
    }
}

/// Maps trigger lists in both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TriggerMapper {
    mode: TriggerMode,
    variants: VariantMapper,
}

impl TriggerMapper {
    /// Creates a mapper.
    #[must_use]
    pub const fn new(mode: TriggerMode, variants: VariantMapper) -> Self {
        Self { mode, variants }
    }

    /// Returns the handling of triggers without a right.
    #[must_use]
    pub const fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Maps interchange triggers to the ledger form.
    ///
    /// # Errors
    ///
    /// Returns `RequiredFieldMissing` for a missing date the trigger type
    /// needs or (strict mode) a missing right, `ValidationError` for a
    /// duplicate id, and any right error prefixed with the trigger path.
    pub fn to_ledger(
        &self,
        parent: &TriggerParent<'_>,
        triggers: &[ConversionTrigger],
    ) -> TranslationResult<TriggerMapping<LedgerTrigger>> {
        let mut ids = IdSet::reserving(triggers.iter().map(|t| t.trigger_id.as_deref()));
        let mut placeholders = Vec::new();
        let mut mapped = Vec::with_capacity(triggers.len());

        for (index, trigger) in triggers.iter().enumerate() {
            check_dates(
                parent,
                index,
                trigger.trigger_type,
                trigger.trigger_date.is_some(),
                trigger.start_date.is_some(),
                trigger.end_date.is_some(),
            )?;
            let id = ids.claim(parent, index, trigger.trigger_id.as_deref())?;

            let right = match &trigger.conversion_right {
                Some(right) => right.clone(),
                None => {
                    self.placeholder_allowed(parent, index)?;
                    placeholders.push(index);
                    ConversionRight::new(parent.right_type, parent.placeholder_mechanism())
                }
            };
            let conversion_right = self
                .variants
                .right_to_ledger(&right, parent.right_type)
                .map_err(|e| e.within(&parent.path(index, "conversion_right")))?;

            mapped.push(LedgerTrigger {
                trigger_id: id,
                type_: ledger_literal(trigger.trigger_type),
                nickname: trigger.nickname.clone(),
                trigger_description: trigger.trigger_description.clone(),
                trigger_date: trigger.trigger_date.map(LedgerTime::from),
                trigger_condition: trigger.trigger_condition.clone(),
                start_date: trigger.start_date.map(LedgerTime::from),
                end_date: trigger.end_date.map(LedgerTime::from),
                conversion_right: Some(conversion_right),
            });
        }

        Ok(TriggerMapping {
            triggers: mapped,
            placeholders,
        })
    }

    /// Maps ledger triggers to the interchange form.
    ///
    /// # Errors
    ///
    /// As [`Self::to_ledger`], plus `UnknownVariantTag` for an unknown
    /// trigger type literal.
    pub fn from_ledger(
        &self,
        parent: &TriggerParent<'_>,
        triggers: &[LedgerTrigger],
    ) -> TranslationResult<TriggerMapping<ConversionTrigger>> {
        let mut ids = IdSet::reserving(triggers.iter().map(|t| Some(t.trigger_id.as_str())));
        let mut placeholders = Vec::new();
        let mut mapped = Vec::with_capacity(triggers.len());

        for (index, trigger) in triggers.iter().enumerate() {
            let trigger_type: TriggerType =
                parse_literal(&trigger.type_, &parent.path(index, "type"))?;
            check_dates(
                parent,
                index,
                trigger_type,
                trigger.trigger_date.is_some(),
                trigger.start_date.is_some(),
                trigger.end_date.is_some(),
            )?;
            let id = ids.claim(parent, index, Some(trigger.trigger_id.as_str()))?;

            let right = match &trigger.conversion_right {
                Some(right) => self.right_from_ledger(parent, index, right)?,
                None => {
                    self.placeholder_allowed(parent, index)?;
                    placeholders.push(index);
                    ConversionRight::new(parent.right_type, parent.placeholder_mechanism())
                }
            };

            mapped.push(ConversionTrigger {
                trigger_type,
                trigger_id: Some(id),
                nickname: trigger.nickname.clone(),
                trigger_description: trigger.trigger_description.clone(),
                trigger_date: trigger.trigger_date.map(OcfDate::from),
                trigger_condition: trigger.trigger_condition.clone(),
                start_date: trigger.start_date.map(OcfDate::from),
                end_date: trigger.end_date.map(OcfDate::from),
                conversion_right: Some(right),
            });
        }

        Ok(TriggerMapping {
            triggers: mapped,
            placeholders,
        })
    }

    fn right_from_ledger(
        &self,
        parent: &TriggerParent<'_>,
        index: usize,
        right: &LedgerConversionRight,
    ) -> TranslationResult<ConversionRight> {
        self.variants
            .right_from_ledger(right, parent.right_type)
            .map_err(|e| e.within(&parent.path(index, "conversion_right")))
    }

    fn placeholder_allowed(
        &self,
        parent: &TriggerParent<'_>,
        index: usize,
    ) -> TranslationResult<()> {
        match self.mode {
            TriggerMode::Strict => {
                Err(TranslationError::missing(parent.path(index, "conversion_right")))
            }
            TriggerMode::Lenient => {
                warn!(
                    parent_id = parent.id,
                    list = parent.list_field,
                    index,
                    "synthesizing placeholder conversion right"
                );
                Ok(())
            }
        }
    }
}

fn check_dates(
    parent: &TriggerParent<'_>,
    index: usize,
    trigger_type: TriggerType,
    has_trigger_date: bool,
    has_start: bool,
    has_end: bool,
) -> TranslationResult<()> {
    match trigger_type {
        TriggerType::AutomaticOnDate if !has_trigger_date => {
            Err(TranslationError::missing(parent.path(index, "trigger_date")))
        }
        TriggerType::ElectiveInRange if !has_start => {
            Err(TranslationError::missing(parent.path(index, "start_date")))
        }
        TriggerType::ElectiveInRange if !has_end => {
            Err(TranslationError::missing(parent.path(index, "end_date")))
        }
        _ => Ok(()),
    }
}

/// Trigger ids handed out for one list.
struct IdSet {
    /// Every non-blank id the list supplies.
    supplied: HashSet<String>,
    claimed: HashSet<String>,
}

impl IdSet {
    fn reserving<'a>(ids: impl Iterator<Item = Option<&'a str>>) -> Self {
        Self {
            supplied: ids
                .flatten()
                .filter(|id| !id.trim().is_empty())
                .map(str::to_string)
                .collect(),
            claimed: HashSet::new(),
        }
    }

    fn claim(
        &mut self,
        parent: &TriggerParent<'_>,
        index: usize,
        supplied: Option<&str>,
    ) -> TranslationResult<String> {
        if let Some(id) = supplied.filter(|id| !id.trim().is_empty()) {
            if !self.claimed.insert(id.to_string()) {
                return Err(TranslationError::validation(format!(
                    "duplicate trigger id {id} in {}",
                    parent.list_field
                )));
            }
            return Ok(id.to_string());
        }

        let mut position = index;
        loop {
            let candidate = trigger_id(parent.id, position, None);
            if !self.supplied.contains(&candidate) && self.claimed.insert(candidate.clone()) {
                return Ok(candidate);
            }
            position += 1;
        }
    }
}
