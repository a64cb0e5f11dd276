//! # Variant Mapper
//!
//! Bidirectional mapping of the tagged unions: conversion mechanisms and
//! rights, stock class conversion rights, authorized share counts and
//! vesting triggers, plus the literal helpers every translator uses for
//! closed enumerations.
//!
//! Outbound numerics are checked against the ledger's fixed scale. Inbound
//! variants reach this module already parsed into their native enums, so an
//! unknown ledger tag has failed with `UnknownVariantTag` before any field
//! is read.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::application::variant_mapper::VariantMapper;
//! use ocf_ledger::domain::interchange::ConversionMechanism;
//!
//! let mapper = VariantMapper::default();
//! let mechanism = ConversionMechanism::custom("Converts at the board's discretion");
//!
//! let variant = mapper.mechanism_to_ledger(&mechanism).unwrap();
//! assert_eq!(variant.tag, "OcfConvMechCustom");
//! assert_eq!(mapper.mechanism_from_ledger(&variant).unwrap(), mechanism);
//! ```

use crate::application::canonical::{
    ledger_monetary, ledger_numeric, ledger_ratio, map_optional, require, require_text,
};
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::interchange::{
    AuthorizedShares, CapitalizationDefinitionRules, ConversionMechanism, ConversionRight,
    CustomConversion, FixedAmountConversion, InterestRate, NoteConversion,
    PercentCapitalizationConversion, RatioConversion, SafeConversion, SharePriceBasedConversion,
    StockClassConversionMechanism, StockClassConversionRight, ValuationBasedConversion,
    VestingPeriod, VestingTrigger,
};
use crate::domain::ledger::{
    LedgerAbsoluteTrigger, LedgerCapitalizationRules, LedgerConversionMechanism,
    LedgerConversionRight, LedgerCustomConversion, LedgerFixedAmountConversion,
    LedgerInterestRate, LedgerNoteConversion, LedgerPercentCapitalizationConversion,
    LedgerRatioConversion, LedgerRelativeTrigger, LedgerSafeConversion,
    LedgerSharePriceBasedConversion, LedgerStockClassConversionRight,
    LedgerValuationBasedConversion, LedgerVariant, LedgerVestingPeriod, LedgerVestingTrigger,
    TAG_AUTHORIZED_ENUM, TAG_AUTHORIZED_NUMERIC,
};
use crate::domain::value_objects::numeric::json_kind;
use crate::domain::value_objects::{
    AuthorizedSharesSentinel, ConversionRightType, LedgerLiteral, Monetary, Numeric, Ratio,
    StockClassMechanismKind,
};
use serde_json::Value;

/// Default number of fractional digits a ledger numeric can hold.
pub const DEFAULT_LEDGER_SCALE: u32 = 10;

/// Union name used when an authorized share variant is malformed.
const AUTHORIZED_SHARES_UNION: &str = "AuthorizedShares";

// ============================================================================
// Literal Helpers
// ============================================================================

/// Ledger literal of an enumeration value.
#[must_use]
pub fn ledger_literal<T: LedgerLiteral>(value: T) -> String {
    value.ledger_literal().to_string()
}

/// Ledger literal of an optional enumeration value.
#[must_use]
pub fn ledger_literal_opt<T: LedgerLiteral>(value: Option<T>) -> Option<String> {
    value.map(ledger_literal)
}

/// Ledger literals of a list of enumeration values.
#[must_use]
pub fn ledger_literals<T: LedgerLiteral>(values: &[T]) -> Vec<String> {
    values.iter().copied().map(ledger_literal).collect()
}

/// Parses a mandatory ledger literal.
///
/// # Errors
///
/// Returns `RequiredFieldMissing` naming `field` for a blank literal and
/// `UnknownVariantTag` for one outside the table.
pub fn parse_literal<T: LedgerLiteral>(tag: &str, field: &str) -> TranslationResult<T> {
    if tag.trim().is_empty() {
        return Err(TranslationError::missing(field));
    }
    T::from_ledger_literal(tag)
}

/// Parses an optional ledger literal; blank counts as absent.
///
/// # Errors
///
/// Returns `UnknownVariantTag` for a literal outside the table.
pub fn parse_literal_opt<T: LedgerLiteral>(tag: Option<&String>) -> TranslationResult<Option<T>> {
    match tag {
        Some(tag) if !tag.trim().is_empty() => T::from_ledger_literal(tag).map(Some),
        _ => Ok(None),
    }
}

/// Parses a list of ledger literals.
///
/// # Errors
///
/// Returns `UnknownVariantTag` for the first literal outside the table.
pub fn parse_literals<T: LedgerLiteral>(tags: &[String]) -> TranslationResult<Vec<T>> {
    tags.iter().map(|tag| T::from_ledger_literal(tag)).collect()
}

// ============================================================================
// Mapper
// ============================================================================

/// Maps tagged unions between the interchange and ledger forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantMapper {
    max_scale: u32,
}

impl Default for VariantMapper {
    fn default() -> Self {
        Self::new(DEFAULT_LEDGER_SCALE)
    }
}

impl VariantMapper {
    /// Creates a mapper that rejects numerics with more than `max_scale`
    /// fractional digits on the way out.
    #[must_use]
    pub const fn new(max_scale: u32) -> Self {
        Self { max_scale }
    }

    /// Returns the outbound scale limit.
    #[must_use]
    pub const fn max_scale(&self) -> u32 {
        self.max_scale
    }

    /// Scale-checks a numeric for the ledger.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if it needs too many fractional digits.
    pub fn numeric(&self, value: Numeric, field: &str) -> TranslationResult<Numeric> {
        ledger_numeric(value, field, self.max_scale)
    }

    /// Scale-checks an optional numeric for the ledger.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if it needs too many fractional digits.
    pub fn numeric_opt(
        &self,
        value: Option<Numeric>,
        field: &str,
    ) -> TranslationResult<Option<Numeric>> {
        value.map(|v| self.numeric(v, field)).transpose()
    }

    /// Validates a monetary value for the ledger.
    ///
    /// # Errors
    ///
    /// Returns the currency or scale error naming `field`.
    pub fn monetary(&self, value: &Monetary, field: &str) -> TranslationResult<Monetary> {
        ledger_monetary(value, field, self.max_scale)
    }

    /// Validates an optional monetary value for the ledger.
    ///
    /// # Errors
    ///
    /// Returns the currency or scale error naming `field`.
    pub fn monetary_opt(
        &self,
        value: Option<&Monetary>,
        field: &str,
    ) -> TranslationResult<Option<Monetary>> {
        map_optional(value, |m| self.monetary(m, field))
    }

    /// Validates a ratio for the ledger.
    ///
    /// # Errors
    ///
    /// Returns the ratio or scale error naming `field`.
    pub fn ratio(&self, value: &Ratio, field: &str) -> TranslationResult<Ratio> {
        ledger_ratio(value, field, self.max_scale)
    }

    fn ratio_opt(&self, value: Option<&Ratio>, field: &str) -> TranslationResult<Option<Ratio>> {
        map_optional(value, |r| self.ratio(r, field))
    }

    // ------------------------------------------------------------------------
    // Conversion mechanisms
    // ------------------------------------------------------------------------

    /// Encodes a conversion mechanism as a ledger variant.
    ///
    /// # Errors
    ///
    /// Returns `RequiredFieldMissing` for an empty mandatory text or list,
    /// and `ValidationError` for numerics the ledger cannot hold.
    pub fn mechanism_to_ledger(
        &self,
        mechanism: &ConversionMechanism,
    ) -> TranslationResult<LedgerVariant> {
        let native = match mechanism {
            ConversionMechanism::Custom(m) => {
                LedgerConversionMechanism::Custom(LedgerCustomConversion {
                    custom_conversion_description: require_text(
                        &m.custom_conversion_description,
                        "custom_conversion_description",
                    )?,
                })
            }
            ConversionMechanism::Safe(m) => LedgerConversionMechanism::Safe(LedgerSafeConversion {
                conversion_mfn: m.conversion_mfn,
                conversion_discount: self
                    .numeric_opt(m.conversion_discount, "conversion_discount")?,
                conversion_valuation_cap: self
                    .monetary_opt(m.conversion_valuation_cap.as_ref(), "conversion_valuation_cap")?,
                conversion_timing: ledger_literal_opt(m.conversion_timing),
                capitalization_definition: m.capitalization_definition.clone(),
                capitalization_definition_rules: m
                    .capitalization_definition_rules
                    .as_ref()
                    .map(rules_to_ledger),
                exit_multiple: self.ratio_opt(m.exit_multiple.as_ref(), "exit_multiple")?,
            }),
            ConversionMechanism::Note(m) => {
                LedgerConversionMechanism::Note(self.note_to_ledger(m)?)
            }
            ConversionMechanism::FixedAmount(m) => {
                LedgerConversionMechanism::FixedAmount(LedgerFixedAmountConversion {
                    converts_to_quantity: self
                        .numeric(m.converts_to_quantity, "converts_to_quantity")?,
                })
            }
            ConversionMechanism::PercentCapitalization(m) => {
                LedgerConversionMechanism::PercentCapitalization(
                    LedgerPercentCapitalizationConversion {
                        converts_to_percent: self
                            .numeric(m.converts_to_percent, "converts_to_percent")?,
                        capitalization_definition: m.capitalization_definition.clone(),
                        capitalization_definition_rules: m
                            .capitalization_definition_rules
                            .as_ref()
                            .map(rules_to_ledger),
                    },
                )
            }
            ConversionMechanism::ValuationBased(m) => {
                LedgerConversionMechanism::ValuationBased(LedgerValuationBasedConversion {
                    valuation_type: ledger_literal(m.valuation_type),
                    valuation_amount: self
                        .monetary_opt(m.valuation_amount.as_ref(), "valuation_amount")?,
                    capitalization_definition: m.capitalization_definition.clone(),
                    capitalization_definition_rules: m
                        .capitalization_definition_rules
                        .as_ref()
                        .map(rules_to_ledger),
                })
            }
            ConversionMechanism::SharePriceBased(m) => {
                LedgerConversionMechanism::SharePriceBased(LedgerSharePriceBasedConversion {
                    description: require_text(&m.description, "description")?,
                    discount: m.discount,
                    discount_percentage: self
                        .numeric_opt(m.discount_percentage, "discount_percentage")?,
                    discount_amount: self
                        .monetary_opt(m.discount_amount.as_ref(), "discount_amount")?,
                })
            }
        };
        native.to_variant()
    }

    fn note_to_ledger(&self, note: &NoteConversion) -> TranslationResult<LedgerNoteConversion> {
        if note.interest_rates.is_empty() {
            return Err(TranslationError::missing("interest_rates"));
        }
        let interest_rates = note
            .interest_rates
            .iter()
            .enumerate()
            .map(|(i, rate)| {
                Ok(LedgerInterestRate {
                    rate: self.numeric(rate.rate, &format!("interest_rates[{i}].rate"))?,
                    accrual_start_date: rate.accrual_start_date.into(),
                    accrual_end_date: rate.accrual_end_date.map(Into::into),
                })
            })
            .collect::<TranslationResult<Vec<_>>>()?;

        Ok(LedgerNoteConversion {
            interest_rates,
            day_count_convention: ledger_literal(note.day_count_convention),
            interest_payout: ledger_literal(note.interest_payout),
            interest_accrual_period: ledger_literal(note.interest_accrual_period),
            compounding_type: ledger_literal(note.compounding_type),
            conversion_discount: self.numeric_opt(note.conversion_discount, "conversion_discount")?,
            conversion_valuation_cap: self
                .monetary_opt(note.conversion_valuation_cap.as_ref(), "conversion_valuation_cap")?,
            capitalization_definition: note.capitalization_definition.clone(),
            capitalization_definition_rules: note
                .capitalization_definition_rules
                .as_ref()
                .map(rules_to_ledger),
            exit_multiple: self.ratio_opt(note.exit_multiple.as_ref(), "exit_multiple")?,
            conversion_mfn: note.conversion_mfn,
        })
    }

    /// Decodes a ledger variant into a conversion mechanism.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariantTag` for an unknown mechanism tag or
    /// sub-enumeration literal, and `RequiredFieldMissing` for an empty
    /// mandatory text or list.
    pub fn mechanism_from_ledger(
        &self,
        variant: &LedgerVariant,
    ) -> TranslationResult<ConversionMechanism> {
        let native = LedgerConversionMechanism::try_from(variant)?;
        Ok(match native {
            LedgerConversionMechanism::Custom(m) => ConversionMechanism::Custom(CustomConversion {
                custom_conversion_description: require_text(
                    &m.custom_conversion_description,
                    "custom_conversion_description",
                )?,
            }),
            LedgerConversionMechanism::Safe(m) => ConversionMechanism::Safe(SafeConversion {
                conversion_mfn: m.conversion_mfn,
                conversion_discount: m.conversion_discount,
                conversion_valuation_cap: m.conversion_valuation_cap,
                conversion_timing: parse_literal_opt(m.conversion_timing.as_ref())?,
                capitalization_definition: m.capitalization_definition,
                capitalization_definition_rules: m
                    .capitalization_definition_rules
                    .as_ref()
                    .map(rules_from_ledger),
                exit_multiple: m.exit_multiple,
            }),
            LedgerConversionMechanism::Note(m) => ConversionMechanism::Note(note_from_ledger(m)?),
            LedgerConversionMechanism::FixedAmount(m) => {
                ConversionMechanism::FixedAmount(FixedAmountConversion {
                    converts_to_quantity: m.converts_to_quantity,
                })
            }
            LedgerConversionMechanism::PercentCapitalization(m) => {
                ConversionMechanism::PercentCapitalization(PercentCapitalizationConversion {
                    converts_to_percent: m.converts_to_percent,
                    capitalization_definition: m.capitalization_definition,
                    capitalization_definition_rules: m
                        .capitalization_definition_rules
                        .as_ref()
                        .map(rules_from_ledger),
                })
            }
            LedgerConversionMechanism::ValuationBased(m) => {
                ConversionMechanism::ValuationBased(ValuationBasedConversion {
                    valuation_type: parse_literal(&m.valuation_type, "valuation_type")?,
                    valuation_amount: m.valuation_amount,
                    capitalization_definition: m.capitalization_definition,
                    capitalization_definition_rules: m
                        .capitalization_definition_rules
                        .as_ref()
                        .map(rules_from_ledger),
                })
            }
            LedgerConversionMechanism::SharePriceBased(m) => {
                ConversionMechanism::SharePriceBased(SharePriceBasedConversion {
                    description: require_text(&m.description, "description")?,
                    discount: m.discount,
                    discount_percentage: m.discount_percentage,
                    discount_amount: m.discount_amount,
                })
            }
        })
    }

    // ------------------------------------------------------------------------
    // Conversion rights
    // ------------------------------------------------------------------------

    /// Encodes the right a trigger activates.
    ///
    /// `expected` is the kind implied by the parent object.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the right declares a different kind or a
    /// warrant right carries a SAFE or note mechanism, plus any mechanism
    /// error prefixed with `conversion_mechanism`.
    pub fn right_to_ledger(
        &self,
        right: &ConversionRight,
        expected: ConversionRightType,
    ) -> TranslationResult<LedgerConversionRight> {
        check_right_type(right.right_type, expected)?;
        check_warrant_mechanism(&right.conversion_mechanism, expected)?;
        Ok(LedgerConversionRight {
            type_: ledger_literal(expected),
            conversion_mechanism: self
                .mechanism_to_ledger(&right.conversion_mechanism)
                .map_err(|e| e.within("conversion_mechanism"))?,
            converts_to_future_round: right.converts_to_future_round,
            converts_to_stock_class_id: right.converts_to_stock_class_id.clone(),
        })
    }

    /// Decodes the right a trigger activates.
    ///
    /// An empty ledger `type_` is accepted and read as `expected`.
    ///
    /// # Errors
    ///
    /// As [`Self::right_to_ledger`], plus `UnknownVariantTag` for an unknown
    /// right literal.
    pub fn right_from_ledger(
        &self,
        right: &LedgerConversionRight,
        expected: ConversionRightType,
    ) -> TranslationResult<ConversionRight> {
        let declared = parse_literal_opt::<ConversionRightType>(Some(&right.type_))?;
        check_right_type(declared, expected)?;
        let mechanism = self
            .mechanism_from_ledger(&right.conversion_mechanism)
            .map_err(|e| e.within("conversion_mechanism"))?;
        check_warrant_mechanism(&mechanism, expected)?;
        Ok(ConversionRight {
            right_type: Some(expected),
            conversion_mechanism: mechanism,
            converts_to_future_round: right.converts_to_future_round,
            converts_to_stock_class_id: right.converts_to_stock_class_id.clone(),
        })
    }

    /// Encodes a ratio conversion.
    ///
    /// # Errors
    ///
    /// Returns the ratio, currency or scale error.
    pub fn ratio_conversion_to_ledger(
        &self,
        conversion: &RatioConversion,
    ) -> TranslationResult<LedgerRatioConversion> {
        Ok(LedgerRatioConversion {
            conversion_price: self.monetary(&conversion.conversion_price, "conversion_price")?,
            ratio: self.ratio(&conversion.ratio, "ratio")?,
            rounding_type: ledger_literal(conversion.rounding_type),
        })
    }

    /// Decodes a ratio conversion.
    ///
    /// # Errors
    ///
    /// Returns the ratio error, or `UnknownVariantTag` for the rounding type.
    pub fn ratio_conversion_from_ledger(
        &self,
        conversion: &LedgerRatioConversion,
    ) -> TranslationResult<RatioConversion> {
        conversion.ratio.validate("ratio")?;
        Ok(RatioConversion {
            conversion_price: conversion.conversion_price.clone(),
            ratio: conversion.ratio,
            rounding_type: parse_literal(&conversion.rounding_type, "rounding_type")?,
        })
    }

    /// Flattens a stock class conversion right for the ledger.
    ///
    /// Percent-of-capitalization rules have no ledger slot and are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the right declares a non stock class
    /// kind, or any mechanism error.
    pub fn stock_class_right_to_ledger(
        &self,
        right: &StockClassConversionRight,
    ) -> TranslationResult<LedgerStockClassConversionRight> {
        check_right_type(right.right_type, ConversionRightType::StockClass)?;
        let mechanism = &right.conversion_mechanism;
        let mut flat = LedgerStockClassConversionRight {
            type_: ledger_literal(ConversionRightType::StockClass),
            conversion_mechanism: ledger_literal(mechanism.kind()),
            converts_to_future_round: right.converts_to_future_round,
            converts_to_stock_class_id: right.converts_to_stock_class_id.clone(),
            ratio: None,
            conversion_price: None,
            rounding_type: None,
            percent_of_capitalization: None,
            converts_to_quantity: None,
        };
        match mechanism {
            StockClassConversionMechanism::Ratio(ratio) => {
                let ratio = self.ratio_conversion_to_ledger(ratio)?;
                flat.ratio = Some(ratio.ratio);
                flat.conversion_price = Some(ratio.conversion_price);
                flat.rounding_type = Some(ratio.rounding_type);
            }
            StockClassConversionMechanism::PercentCapitalization(percent) => {
                flat.percent_of_capitalization =
                    Some(self.numeric(percent.converts_to_percent, "converts_to_percent")?);
            }
            StockClassConversionMechanism::FixedAmount(fixed) => {
                flat.converts_to_quantity =
                    Some(self.numeric(fixed.converts_to_quantity, "converts_to_quantity")?);
            }
        }
        Ok(flat)
    }

    /// Rebuilds a stock class conversion right from its flattened form.
    ///
    /// # Errors
    ///
    /// Returns `RequiredFieldMissing` when a field the mechanism needs is
    /// null, and `UnknownVariantTag` for unknown literals.
    pub fn stock_class_right_from_ledger(
        &self,
        right: &LedgerStockClassConversionRight,
    ) -> TranslationResult<StockClassConversionRight> {
        let declared = parse_literal_opt::<ConversionRightType>(Some(&right.type_))?;
        check_right_type(declared, ConversionRightType::StockClass)?;
        let kind: StockClassMechanismKind =
            parse_literal(&right.conversion_mechanism, "conversion_mechanism")?;
        let conversion_mechanism = match kind {
            StockClassMechanismKind::Ratio => {
                let ratio = self.ratio_conversion_from_ledger(&LedgerRatioConversion {
                    conversion_price: require(right.conversion_price.clone(), "conversion_price")?,
                    ratio: require(right.ratio, "ratio")?,
                    rounding_type: require(right.rounding_type.clone(), "rounding_type")?,
                })?;
                StockClassConversionMechanism::Ratio(ratio)
            }
            StockClassMechanismKind::PercentCapitalization => {
                StockClassConversionMechanism::PercentCapitalization(
                    PercentCapitalizationConversion {
                        converts_to_percent: require(
                            right.percent_of_capitalization,
                            "percent_of_capitalization",
                        )?,
                        capitalization_definition: None,
                        capitalization_definition_rules: None,
                    },
                )
            }
            StockClassMechanismKind::FixedAmount => {
                StockClassConversionMechanism::FixedAmount(FixedAmountConversion {
                    converts_to_quantity: require(
                        right.converts_to_quantity,
                        "converts_to_quantity",
                    )?,
                })
            }
        };
        Ok(StockClassConversionRight {
            right_type: Some(ConversionRightType::StockClass),
            conversion_mechanism,
            converts_to_future_round: right.converts_to_future_round,
            converts_to_stock_class_id: right.converts_to_stock_class_id.clone(),
        })
    }

    // ------------------------------------------------------------------------
    // Authorized shares
    // ------------------------------------------------------------------------

    /// Encodes an authorized share count or sentinel.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a count the ledger cannot hold.
    pub fn authorized_shares_to_ledger(
        &self,
        shares: AuthorizedShares,
        field: &str,
    ) -> TranslationResult<LedgerVariant> {
        Ok(match shares {
            AuthorizedShares::Count(count) => LedgerVariant::new(
                TAG_AUTHORIZED_NUMERIC,
                Value::String(self.numeric(count, field)?.to_string()),
            ),
            AuthorizedShares::Sentinel(sentinel) => {
                LedgerVariant::new(TAG_AUTHORIZED_ENUM, Value::String(ledger_literal(sentinel)))
            }
        })
    }

    /// Decodes an authorized share variant.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariantTag` for an unknown tag or sentinel literal and
    /// `TypeMismatch` naming `field` for a malformed value.
    pub fn authorized_shares_from_ledger(
        &self,
        variant: &LedgerVariant,
        field: &str,
    ) -> TranslationResult<AuthorizedShares> {
        match variant.tag.as_str() {
            TAG_AUTHORIZED_NUMERIC => {
                Numeric::from_json(&variant.value, field).map(AuthorizedShares::Count)
            }
            TAG_AUTHORIZED_ENUM => match &variant.value {
                Value::String(tag) => {
                    AuthorizedSharesSentinel::from_ledger_tag(tag).map(AuthorizedShares::Sentinel)
                }
                other => Err(TranslationError::type_mismatch(
                    field,
                    "authorized shares literal",
                    json_kind(other),
                )),
            },
            other => Err(TranslationError::unknown_tag(AUTHORIZED_SHARES_UNION, other)),
        }
    }

    // ------------------------------------------------------------------------
    // Vesting triggers
    // ------------------------------------------------------------------------

    /// Encodes a vesting trigger.
    ///
    /// # Errors
    ///
    /// Returns `RequiredFieldMissing` for a relative trigger without the
    /// condition it counts from.
    pub fn vesting_trigger_to_ledger(
        &self,
        trigger: &VestingTrigger,
    ) -> TranslationResult<LedgerVariant> {
        let native = match trigger {
            VestingTrigger::VestingStartDate => LedgerVestingTrigger::Start,
            VestingTrigger::VestingScheduleAbsolute { date } => {
                LedgerVestingTrigger::Absolute(LedgerAbsoluteTrigger { date: (*date).into() })
            }
            VestingTrigger::VestingScheduleRelative {
                period,
                relative_to_condition_id,
            } => LedgerVestingTrigger::Relative(LedgerRelativeTrigger {
                period: period_to_ledger(period),
                relative_to_condition_id: require_text(
                    relative_to_condition_id,
                    "relative_to_condition_id",
                )?,
            }),
            VestingTrigger::VestingEvent => LedgerVestingTrigger::Event,
        };
        native.to_variant()
    }

    /// Decodes a vesting trigger.
    ///
    /// # Errors
    ///
    /// Returns `UnknownVariantTag` for an unknown trigger tag or period unit.
    pub fn vesting_trigger_from_ledger(
        &self,
        variant: &LedgerVariant,
    ) -> TranslationResult<VestingTrigger> {
        Ok(match LedgerVestingTrigger::try_from(variant)? {
            LedgerVestingTrigger::Start => VestingTrigger::VestingStartDate,
            LedgerVestingTrigger::Absolute(t) => {
                VestingTrigger::VestingScheduleAbsolute { date: t.date.into() }
            }
            LedgerVestingTrigger::Relative(t) => VestingTrigger::VestingScheduleRelative {
                period: period_from_ledger(&t.period)?,
                relative_to_condition_id: require_text(
                    &t.relative_to_condition_id,
                    "relative_to_condition_id",
                )?,
            },
            LedgerVestingTrigger::Event => VestingTrigger::VestingEvent,
        })
    }
}

// ============================================================================
// Free Helpers
// ============================================================================

/// Writes every capitalization flag explicitly.
#[must_use]
pub fn rules_to_ledger(rules: &CapitalizationDefinitionRules) -> LedgerCapitalizationRules {
    LedgerCapitalizationRules {
        include_outstanding_shares: Some(rules.include_outstanding_shares),
        include_outstanding_options: Some(rules.include_outstanding_options),
        include_outstanding_unissued_options: Some(rules.include_outstanding_unissued_options),
        include_this_security: Some(rules.include_this_security),
        include_other_converting_securities: Some(rules.include_other_converting_securities),
        include_option_pool_topup_for_promised_options: Some(
            rules.include_option_pool_topup_for_promised_options,
        ),
        include_additional_option_pool_topup: Some(rules.include_additional_option_pool_topup),
        include_new_money: Some(rules.include_new_money),
    }
}

/// Reads capitalization flags; a null flag reads as `false`.
#[must_use]
pub fn rules_from_ledger(rules: &LedgerCapitalizationRules) -> CapitalizationDefinitionRules {
    CapitalizationDefinitionRules {
        include_outstanding_shares: rules.include_outstanding_shares.unwrap_or(false),
        include_outstanding_options: rules.include_outstanding_options.unwrap_or(false),
        include_outstanding_unissued_options: rules
            .include_outstanding_unissued_options
            .unwrap_or(false),
        include_this_security: rules.include_this_security.unwrap_or(false),
        include_other_converting_securities: rules
            .include_other_converting_securities
            .unwrap_or(false),
        include_option_pool_topup_for_promised_options: rules
            .include_option_pool_topup_for_promised_options
            .unwrap_or(false),
        include_additional_option_pool_topup: rules
            .include_additional_option_pool_topup
            .unwrap_or(false),
        include_new_money: rules.include_new_money.unwrap_or(false),
    }
}

fn note_from_ledger(note: LedgerNoteConversion) -> TranslationResult<NoteConversion> {
    if note.interest_rates.is_empty() {
        return Err(TranslationError::missing("interest_rates"));
    }
    Ok(NoteConversion {
        interest_rates: note
            .interest_rates
            .iter()
            .map(|rate| InterestRate {
                rate: rate.rate,
                accrual_start_date: rate.accrual_start_date.into(),
                accrual_end_date: rate.accrual_end_date.map(Into::into),
            })
            .collect(),
        day_count_convention: parse_literal(&note.day_count_convention, "day_count_convention")?,
        interest_payout: parse_literal(&note.interest_payout, "interest_payout")?,
        interest_accrual_period: parse_literal(
            &note.interest_accrual_period,
            "interest_accrual_period",
        )?,
        compounding_type: parse_literal(&note.compounding_type, "compounding_type")?,
        conversion_discount: note.conversion_discount,
        conversion_valuation_cap: note.conversion_valuation_cap,
        capitalization_definition: note.capitalization_definition,
        capitalization_definition_rules: note
            .capitalization_definition_rules
            .as_ref()
            .map(rules_from_ledger),
        exit_multiple: note.exit_multiple,
        conversion_mfn: note.conversion_mfn,
    })
}

fn period_to_ledger(period: &VestingPeriod) -> LedgerVestingPeriod {
    LedgerVestingPeriod {
        length: period.length,
        type_: ledger_literal(period.unit),
        occurrences: period.occurrences,
        day_of_month: period.day_of_month.clone(),
        cliff_installment: period.cliff_installment,
    }
}

fn period_from_ledger(period: &LedgerVestingPeriod) -> TranslationResult<VestingPeriod> {
    Ok(VestingPeriod {
        length: period.length,
        unit: parse_literal(&period.type_, "period.type")?,
        occurrences: period.occurrences,
        day_of_month: period.day_of_month.clone(),
        cliff_installment: period.cliff_installment,
    })
}

fn check_right_type(
    declared: Option<ConversionRightType>,
    expected: ConversionRightType,
) -> TranslationResult<()> {
    match declared {
        Some(actual) if actual != expected => Err(TranslationError::validation(format!(
            "conversion right type {actual} does not match expected {expected}"
        ))),
        _ => Ok(()),
    }
}

fn check_warrant_mechanism(
    mechanism: &ConversionMechanism,
    expected: ConversionRightType,
) -> TranslationResult<()> {
    if expected == ConversionRightType::Warrant && !mechanism.allowed_on_warrant() {
        return Err(TranslationError::validation(format!(
            "{} is not a valid warrant conversion mechanism",
            mechanism.type_literal()
        )));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        AccrualPeriod, CompoundingType, ConversionTiming, DayCountConvention, InterestPayout,
        OcfDate, RoundingType, ValuationType, VestingPeriodUnit,
    };
    use serde_json::json;

    fn num(text: &str) -> Numeric {
        Numeric::parse(text).unwrap()
    }

    fn usd(text: &str) -> Monetary {
        Monetary::new(num(text), "USD")
    }

    fn date(text: &str) -> OcfDate {
        OcfDate::parse(text).unwrap()
    }

    fn note() -> ConversionMechanism {
        ConversionMechanism::Note(NoteConversion {
            interest_rates: vec![InterestRate {
                rate: num("0.08"),
                accrual_start_date: date("2023-01-01"),
                accrual_end_date: None,
            }],
            day_count_convention: DayCountConvention::Actual365,
            interest_payout: InterestPayout::Deferred,
            interest_accrual_period: AccrualPeriod::Monthly,
            compounding_type: CompoundingType::Simple,
            conversion_discount: Some(num("0.2")),
            conversion_valuation_cap: Some(usd("10000000")),
            capitalization_definition: None,
            capitalization_definition_rules: None,
            exit_multiple: None,
            conversion_mfn: Some(false),
        })
    }

    fn every_mechanism() -> Vec<ConversionMechanism> {
        vec![
            ConversionMechanism::custom("Board discretion"),
            ConversionMechanism::Safe(SafeConversion {
                conversion_mfn: true,
                conversion_discount: Some(num("0.15")),
                conversion_valuation_cap: Some(usd("5000000")),
                conversion_timing: Some(ConversionTiming::PostMoney),
                capitalization_definition: Some("Fully diluted".to_string()),
                capitalization_definition_rules: Some(CapitalizationDefinitionRules {
                    include_outstanding_shares: true,
                    include_new_money: true,
                    ..CapitalizationDefinitionRules::default()
                }),
                exit_multiple: Some(Ratio::new(num("2"), num("1"))),
            }),
            note(),
            ConversionMechanism::FixedAmount(FixedAmountConversion {
                converts_to_quantity: num("1000"),
            }),
            ConversionMechanism::PercentCapitalization(PercentCapitalizationConversion {
                converts_to_percent: num("0.05"),
                capitalization_definition: None,
                capitalization_definition_rules: None,
            }),
            ConversionMechanism::ValuationBased(ValuationBasedConversion {
                valuation_type: ValuationType::Valuation409A,
                valuation_amount: Some(usd("1200000.50")),
                capitalization_definition: None,
                capitalization_definition_rules: None,
            }),
            ConversionMechanism::SharePriceBased(SharePriceBasedConversion {
                description: "Next priced round".to_string(),
                discount: true,
                discount_percentage: Some(num("0.1")),
                discount_amount: None,
            }),
        ]
    }

    mod mechanisms {
        use super::*;

        #[test]
        fn every_mechanism_roundtrips() {
            let mapper = VariantMapper::default();
            for mechanism in every_mechanism() {
                let variant = mapper.mechanism_to_ledger(&mechanism).unwrap();
                assert_eq!(mapper.mechanism_from_ledger(&variant).unwrap(), mechanism);
            }
        }

        #[test]
        fn note_literals_use_ledger_tables() {
            let variant = VariantMapper::default().mechanism_to_ledger(&note()).unwrap();
            assert_eq!(variant.tag, "OcfConvMechNote");
            assert_eq!(variant.value["day_count_convention"], json!("OcfDayCountActual365"));
            assert_eq!(variant.value["interest_accrual_period"], json!("OcfAccrualMonthly"));
            assert_eq!(
                variant.value["interest_rates"][0]["accrual_start_date"],
                json!("2023-01-01T00:00:00.000Z")
            );
        }

        #[test]
        fn unknown_mechanism_tag() {
            let variant = LedgerVariant::new("OcfConvMechBarter", json!({}));
            assert_eq!(
                VariantMapper::default().mechanism_from_ledger(&variant).unwrap_err(),
                TranslationError::unknown_tag("ConversionMechanism", "OcfConvMechBarter")
            );
        }

        #[test]
        fn unknown_sub_enumeration_literal() {
            let mut variant = VariantMapper::default().mechanism_to_ledger(&note()).unwrap();
            variant.value["compounding_type"] = json!("OcfContinuous");
            assert_eq!(
                VariantMapper::default().mechanism_from_ledger(&variant).unwrap_err(),
                TranslationError::unknown_tag("CompoundingType", "OcfContinuous")
            );
        }

        #[test]
        fn note_without_interest_rates_is_missing() {
            let ConversionMechanism::Note(mut inner) = note() else {
                unreachable!()
            };
            inner.interest_rates.clear();
            let err = VariantMapper::default()
                .mechanism_to_ledger(&ConversionMechanism::Note(inner))
                .unwrap_err();
            assert_eq!(err, TranslationError::missing("interest_rates"));
        }

        #[test]
        fn blank_custom_description_is_missing() {
            let err = VariantMapper::default()
                .mechanism_to_ledger(&ConversionMechanism::custom(" "))
                .unwrap_err();
            assert_eq!(err.code(), 1001);
        }

        #[test]
        fn null_rule_flags_read_as_false() {
            let variant = LedgerVariant::new(
                "OcfConvMechPercentCapitalization",
                json!({
                    "converts_to_percent": "0.0500000000",
                    "capitalization_definition": null,
                    "capitalization_definition_rules": {"include_new_money": true}
                }),
            );
            let ConversionMechanism::PercentCapitalization(m) =
                VariantMapper::default().mechanism_from_ledger(&variant).unwrap()
            else {
                panic!("expected percent capitalization");
            };
            let rules = m.capitalization_definition_rules.unwrap();
            assert!(rules.include_new_money);
            assert!(!rules.include_outstanding_shares);
            assert_eq!(m.converts_to_percent.to_string(), "0.05");
        }

        #[test]
        fn excess_scale_is_rejected_outbound() {
            let mechanism = ConversionMechanism::FixedAmount(FixedAmountConversion {
                converts_to_quantity: num("1.00000000001"),
            });
            assert!(matches!(
                VariantMapper::default().mechanism_to_ledger(&mechanism),
                Err(TranslationError::ValidationError(_))
            ));
            assert!(VariantMapper::new(12).mechanism_to_ledger(&mechanism).is_ok());
        }
    }

    mod rights {
        use super::*;

        #[test]
        fn warrant_right_rejects_safe_both_ways() {
            let mapper = VariantMapper::default();
            let safe = every_mechanism().remove(1);
            let right = ConversionRight::new(ConversionRightType::Warrant, safe.clone());
            assert_eq!(
                mapper.right_to_ledger(&right, ConversionRightType::Warrant).unwrap_err().code(),
                1099
            );

            let ledger = LedgerConversionRight {
                type_: "OcfRightWarrant".to_string(),
                conversion_mechanism: mapper.mechanism_to_ledger(&safe).unwrap(),
                converts_to_future_round: None,
                converts_to_stock_class_id: None,
            };
            assert_eq!(
                mapper.right_from_ledger(&ledger, ConversionRightType::Warrant).unwrap_err().code(),
                1099
            );
        }

        #[test]
        fn mismatched_right_type_is_rejected() {
            let mechanism = ConversionMechanism::custom("x");
            let right = ConversionRight::new(ConversionRightType::Warrant, mechanism);
            assert!(matches!(
                VariantMapper::default().right_to_ledger(&right, ConversionRightType::Convertible),
                Err(TranslationError::ValidationError(_))
            ));
        }

        #[test]
        fn untyped_right_takes_parent_kind() {
            let mapper = VariantMapper::default();
            let mut right = ConversionRight::new(ConversionRightType::Convertible, note());
            right.right_type = None;
            right.converts_to_future_round = Some(true);

            let ledger = mapper.right_to_ledger(&right, ConversionRightType::Convertible).unwrap();
            assert_eq!(ledger.type_, "OcfRightConvertible");

            let back = mapper.right_from_ledger(&ledger, ConversionRightType::Convertible).unwrap();
            assert_eq!(back.right_type, Some(ConversionRightType::Convertible));
            assert_eq!(back.converts_to_future_round, Some(true));
        }

        #[test]
        fn mechanism_errors_carry_the_path() {
            let right = ConversionRight::new(
                ConversionRightType::Convertible,
                ConversionMechanism::custom(""),
            );
            let err = VariantMapper::default()
                .right_to_ledger(&right, ConversionRightType::Convertible)
                .unwrap_err();
            assert_eq!(err.field(), Some("conversion_mechanism.custom_conversion_description"));
        }
    }

    mod stock_class_rights {
        use super::*;

        fn ratio_right() -> StockClassConversionRight {
            StockClassConversionRight {
                right_type: None,
                conversion_mechanism: StockClassConversionMechanism::Ratio(RatioConversion {
                    conversion_price: usd("1.25"),
                    ratio: Ratio::new(num("1"), num("1")),
                    rounding_type: RoundingType::Normal,
                }),
                converts_to_future_round: None,
                converts_to_stock_class_id: Some("common".to_string()),
            }
        }

        #[test]
        fn ratio_right_flattens_and_returns() {
            let mapper = VariantMapper::default();
            let flat = mapper.stock_class_right_to_ledger(&ratio_right()).unwrap();
            assert_eq!(flat.conversion_mechanism, "OcfConversionMechanismRatioConversion");
            assert_eq!(flat.rounding_type.as_deref(), Some("OcfRoundingNormal"));
            assert!(flat.percent_of_capitalization.is_none());

            let back = mapper.stock_class_right_from_ledger(&flat).unwrap();
            assert_eq!(back.conversion_mechanism, ratio_right().conversion_mechanism);
            assert_eq!(back.right_type, Some(ConversionRightType::StockClass));
        }

        #[test]
        fn missing_flattened_field_is_required() {
            let mapper = VariantMapper::default();
            let mut flat = mapper.stock_class_right_to_ledger(&ratio_right()).unwrap();
            flat.ratio = None;
            assert_eq!(
                mapper.stock_class_right_from_ledger(&flat).unwrap_err(),
                TranslationError::missing("ratio")
            );
        }

        #[test]
        fn fixed_amount_uses_quantity_slot() {
            let right = StockClassConversionRight {
                conversion_mechanism: StockClassConversionMechanism::FixedAmount(
                    FixedAmountConversion {
                        converts_to_quantity: num("500"),
                    },
                ),
                ..ratio_right()
            };
            let flat = VariantMapper::default().stock_class_right_to_ledger(&right).unwrap();
            assert_eq!(flat.converts_to_quantity, Some(num("500")));
            assert!(flat.ratio.is_none());
        }
    }

    mod authorized_shares {
        use super::*;

        #[test]
        fn count_and_sentinel_encode() {
            let mapper = VariantMapper::default();
            let field = "initial_shares_authorized";
            let count = mapper
                .authorized_shares_to_ledger(AuthorizedShares::Count(num("10000000")), field)
                .unwrap();
            assert_eq!(
                serde_json::to_value(&count).unwrap(),
                json!({"tag": "OcfAuthorizedSharesNumeric", "value": "10000000"})
            );

            let unlimited = AuthorizedShares::Sentinel(AuthorizedSharesSentinel::Unlimited);
            let sentinel = mapper.authorized_shares_to_ledger(unlimited, field).unwrap();
            assert_eq!(sentinel.value, json!("OcfAuthorizedSharesUnlimited"));
            assert_eq!(mapper.authorized_shares_from_ledger(&sentinel, field).unwrap(), unlimited);
        }

        #[test]
        fn padded_ledger_count_is_canonical() {
            let variant = LedgerVariant::new(TAG_AUTHORIZED_NUMERIC, json!("1000.0000000000"));
            assert_eq!(
                VariantMapper::default()
                    .authorized_shares_from_ledger(&variant, "initial_shares_authorized")
                    .unwrap()
                    .to_string(),
                "1000"
            );
        }

        #[test]
        fn unknown_authorized_tag() {
            let variant = LedgerVariant::new("OcfAuthorizedSharesFormula", json!("x"));
            let decoded = VariantMapper::default()
                .authorized_shares_from_ledger(&variant, "initial_shares_authorized");
            assert!(matches!(decoded, Err(TranslationError::UnknownVariantTag { .. })));
        }
    }

    mod vesting {
        use super::*;

        #[test]
        fn relative_trigger_roundtrips() {
            let mapper = VariantMapper::default();
            let trigger = VestingTrigger::VestingScheduleRelative {
                period: VestingPeriod {
                    length: 1,
                    unit: VestingPeriodUnit::Months,
                    occurrences: 36,
                    day_of_month: Some("VESTING_START_DAY_OR_LAST_DAY_OF_MONTH".to_string()),
                    cliff_installment: Some(12),
                },
                relative_to_condition_id: "start".to_string(),
            };
            let variant = mapper.vesting_trigger_to_ledger(&trigger).unwrap();
            assert_eq!(variant.tag, "OcfVestingScheduleRelativeTrigger");
            assert_eq!(variant.value["period"]["type_"], json!("OcfVestingPeriodMonths"));
            assert_eq!(mapper.vesting_trigger_from_ledger(&variant).unwrap(), trigger);
        }

        #[test]
        fn absolute_trigger_converts_date() {
            let mapper = VariantMapper::default();
            let trigger = VestingTrigger::VestingScheduleAbsolute { date: date("2025-03-01") };
            let variant = mapper.vesting_trigger_to_ledger(&trigger).unwrap();
            assert_eq!(variant.value["date"], json!("2025-03-01T00:00:00.000Z"));
            assert_eq!(mapper.vesting_trigger_from_ledger(&variant).unwrap(), trigger);
        }
    }

    mod literals {
        use super::*;
        use crate::domain::value_objects::StakeholderRelationship;

        #[test]
        fn blank_mandatory_literal_is_missing() {
            assert_eq!(
                parse_literal::<RoundingType>("", "rounding_type").unwrap_err(),
                TranslationError::missing("rounding_type")
            );
            assert_eq!(parse_literal_opt::<RoundingType>(Some(&String::new())).unwrap(), None);
        }

        #[test]
        fn literal_lists_map_each_element() {
            let relationships =
                vec![StakeholderRelationship::Founder, StakeholderRelationship::Officer];
            let tags = ledger_literals(&relationships);
            assert_eq!(tags, vec!["OcfRelFounder", "OcfRelOfficer"]);
            assert_eq!(parse_literals::<StakeholderRelationship>(&tags).unwrap(), relationships);
        }
    }
}
