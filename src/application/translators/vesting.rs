//! Vesting terms translator.

use super::{ensure_object_type, LedgerTranslator, TranslationContext};
use crate::application::canonical::{optional_text, require_non_empty, require_text};
use crate::application::variant_mapper::{ledger_literal, parse_literal, VariantMapper};
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::interchange::{VestingCondition, VestingPortion, VestingTerms};
use crate::domain::ledger::{LedgerVestingCondition, LedgerVestingPortion, LedgerVestingTerms};
use crate::domain::value_objects::{ObjectType, Ratio};
use std::collections::HashSet;

fn check_condition_ids<'a>(ids: impl Iterator<Item = &'a str>) -> TranslationResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TranslationError::validation(format!(
                "duplicate vesting condition id {id}"
            )));
        }
    }
    Ok(())
}

fn portion_to_ledger(
    variants: VariantMapper,
    portion: &VestingPortion,
    field: &str,
) -> TranslationResult<LedgerVestingPortion> {
    let ratio = variants.ratio(&Ratio::new(portion.numerator, portion.denominator), field)?;
    Ok(LedgerVestingPortion {
        numerator: ratio.numerator,
        denominator: ratio.denominator,
        remainder: portion.remainder,
    })
}

fn portion_from_ledger(
    portion: &LedgerVestingPortion,
    field: &str,
) -> TranslationResult<VestingPortion> {
    Ratio::new(portion.numerator, portion.denominator).validate(field)?;
    Ok(VestingPortion {
        numerator: portion.numerator,
        denominator: portion.denominator,
        remainder: portion.remainder,
    })
}

fn condition_to_ledger(
    variants: VariantMapper,
    condition: &VestingCondition,
) -> TranslationResult<LedgerVestingCondition> {
    Ok(LedgerVestingCondition {
        id: require_text(&condition.id, "id")?,
        description: condition.description.clone(),
        quantity: variants.numeric_opt(condition.quantity, "quantity")?,
        portion: condition
            .portion
            .as_ref()
            .map(|p| portion_to_ledger(variants, p, "portion"))
            .transpose()?,
        trigger: variants
            .vesting_trigger_to_ledger(&condition.trigger)
            .map_err(|e| e.within("trigger"))?,
        next_condition_ids: condition.next_condition_ids.clone(),
    })
}

fn condition_from_ledger(
    variants: VariantMapper,
    condition: &LedgerVestingCondition,
) -> TranslationResult<VestingCondition> {
    Ok(VestingCondition {
        id: require_text(&condition.id, "id")?,
        description: optional_text(condition.description.as_ref()),
        quantity: condition.quantity,
        portion: condition
            .portion
            .as_ref()
            .map(|p| portion_from_ledger(p, "portion"))
            .transpose()?,
        trigger: variants
            .vesting_trigger_from_ledger(&condition.trigger)
            .map_err(|e| e.within("trigger"))?,
        next_condition_ids: condition.next_condition_ids.clone(),
    })
}

impl LedgerTranslator for VestingTerms {
    type Ledger = LedgerVestingTerms;

    const OBJECT_TYPES: &'static [ObjectType] = &[ObjectType::VestingTerms];

    fn object_type(&self) -> ObjectType {
        self.object_type
    }

    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<LedgerVestingTerms> {
        ensure_object_type::<Self>(self.object_type)?;
        require_non_empty(&self.vesting_conditions, "vesting_conditions")?;
        check_condition_ids(self.vesting_conditions.iter().map(|c| c.id.as_str()))?;
        let variants = ctx.variants();
        let vesting_conditions = self
            .vesting_conditions
            .iter()
            .enumerate()
            .map(|(i, condition)| {
                condition_to_ledger(variants, condition)
                    .map_err(|e| e.within(&format!("vesting_conditions[{i}]")))
            })
            .collect::<TranslationResult<_>>()?;

        Ok(LedgerVestingTerms {
            id: require_text(&self.id, "id")?,
            name: require_text(&self.name, "name")?,
            description: self.description.clone(),
            allocation_type: ledger_literal(self.allocation_type),
            vesting_conditions,
            comments: self.comments.clone(),
        })
    }

    fn from_ledger(
        ledger: &LedgerVestingTerms,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self> {
        ensure_object_type::<Self>(object_type)?;
        require_non_empty(&ledger.vesting_conditions, "vesting_conditions")?;
        check_condition_ids(ledger.vesting_conditions.iter().map(|c| c.id.as_str()))?;
        let variants = ctx.variants();
        let vesting_conditions = ledger
            .vesting_conditions
            .iter()
            .enumerate()
            .map(|(i, condition)| {
                condition_from_ledger(variants, condition)
                    .map_err(|e| e.within(&format!("vesting_conditions[{i}]")))
            })
            .collect::<TranslationResult<_>>()?;

        Ok(Self {
            object_type,
            id: require_text(&ledger.id, "id")?,
            name: require_text(&ledger.name, "name")?,
            description: ledger.description.clone(),
            allocation_type: parse_literal(&ledger.allocation_type, "allocation_type")?,
            vesting_conditions,
            comments: ledger.comments.clone(),
        })
    }
}
