//! # Property-Based Tests for Translation Roundtrips
//!
//! Uses proptest to verify the canonicalization, variant mapping, trigger
//! and normalization properties over generated inputs.
//!
//! # Test Coverage
//!
//! - Canonical decimal idempotence and value preservation
//! - Date to ledger time roundtrip
//! - Conversion mechanism roundtrip for every variant
//! - Unknown mechanism tag rejection
//! - Trigger id synthesis determinism
//! - Deprecation precedence
//! - Comparator symmetry

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::application::canonical::{date_to_ledger_time, ledger_time_to_date, to_canonical_decimal};
use crate::application::equivalence::{CompareOptions, EquivalenceComparator};
use crate::application::normalization::NormalizationEngine;
use crate::application::trigger_mapper::{trigger_id, TriggerMapper, TriggerMode, TriggerParent};
use crate::application::variant_mapper::VariantMapper;
use crate::domain::errors::TranslationError;
use crate::domain::interchange::{
    CapitalizationDefinitionRules, ConversionMechanism, ConversionRight, ConversionTrigger,
    CustomConversion, FixedAmountConversion, InterestRate, NoteConversion,
    PercentCapitalizationConversion, SafeConversion, SharePriceBasedConversion,
    ValuationBasedConversion,
};
use crate::domain::ledger::LedgerVariant;
use crate::domain::value_objects::{
    AccrualPeriod, CompoundingType, ConversionTiming, ConvertibleType, DayCountConvention,
    InterestPayout, Monetary, Numeric, ObjectType, OcfDate, Ratio, TriggerType, ValuationType,
};

// ============================================================================
// Strategies
// ============================================================================

fn numeric() -> impl Strategy<Value = Numeric> {
    (0i64..1_000_000_000_000i64, 0u32..7u32)
        .prop_map(|(mantissa, scale)| Numeric::from(Decimal::new(mantissa, scale)))
}

fn ocf_date() -> impl Strategy<Value = OcfDate> {
    (1900i32..2100i32, 1u32..=12u32, 1u32..=28u32)
        .prop_map(|(y, m, d)| OcfDate::parse(&format!("{y:04}-{m:02}-{d:02}")).unwrap())
}

fn monetary() -> impl Strategy<Value = Monetary> {
    (numeric(), prop::sample::select(vec!["USD", "EUR", "GBP", "CAD"]))
        .prop_map(|(amount, currency)| Monetary::new(amount, currency))
}

fn ratio() -> impl Strategy<Value = Ratio> {
    (numeric(), 1i64..10_000i64).prop_map(|(numerator, denominator)| {
        Ratio::new(numerator, Numeric::from(Decimal::from(denominator)))
    })
}

fn rules() -> impl Strategy<Value = CapitalizationDefinitionRules> {
    any::<[bool; 8]>().prop_map(|flags| CapitalizationDefinitionRules {
        include_outstanding_shares: flags[0],
        include_outstanding_options: flags[1],
        include_outstanding_unissued_options: flags[2],
        include_this_security: flags[3],
        include_other_converting_securities: flags[4],
        include_option_pool_topup_for_promised_options: flags[5],
        include_additional_option_pool_topup: flags[6],
        include_new_money: flags[7],
    })
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,24}"
}

fn interest_rate() -> impl Strategy<Value = InterestRate> {
    (numeric(), ocf_date(), proptest::option::of(ocf_date())).prop_map(
        |(rate, accrual_start_date, accrual_end_date)| InterestRate {
            rate,
            accrual_start_date,
            accrual_end_date,
        },
    )
}

fn safe() -> impl Strategy<Value = ConversionMechanism> {
    (
        any::<bool>(),
        proptest::option::of(numeric()),
        proptest::option::of(monetary()),
        proptest::option::of(prop::sample::select(ConversionTiming::ALL)),
        proptest::option::of(text()),
        proptest::option::of(rules()),
        proptest::option::of(ratio()),
    )
        .prop_map(|(mfn, discount, cap, timing, definition, rules, exit)| {
            ConversionMechanism::Safe(SafeConversion {
                conversion_mfn: mfn,
                conversion_discount: discount,
                conversion_valuation_cap: cap,
                conversion_timing: timing,
                capitalization_definition: definition,
                capitalization_definition_rules: rules,
                exit_multiple: exit,
            })
        })
}

fn note() -> impl Strategy<Value = ConversionMechanism> {
    (
        prop::collection::vec(interest_rate(), 1..4),
        prop::sample::select(DayCountConvention::ALL),
        prop::sample::select(InterestPayout::ALL),
        prop::sample::select(AccrualPeriod::ALL),
        prop::sample::select(CompoundingType::ALL),
        proptest::option::of(numeric()),
        proptest::option::of(monetary()),
        proptest::option::of(rules()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(rates, day_count, payout, period, compounding, discount, cap, rules, mfn)| {
            ConversionMechanism::Note(NoteConversion {
                interest_rates: rates,
                day_count_convention: day_count,
                interest_payout: payout,
                interest_accrual_period: period,
                compounding_type: compounding,
                conversion_discount: discount,
                conversion_valuation_cap: cap,
                capitalization_definition: None,
                capitalization_definition_rules: rules,
                exit_multiple: None,
                conversion_mfn: mfn,
            })
        })
}

fn mechanism() -> impl Strategy<Value = ConversionMechanism> {
    prop_oneof![
        text().prop_map(|d| ConversionMechanism::Custom(CustomConversion {
            custom_conversion_description: d,
        })),
        safe(),
        note(),
        numeric().prop_map(|q| ConversionMechanism::FixedAmount(FixedAmountConversion {
            converts_to_quantity: q,
        })),
        (numeric(), proptest::option::of(text()), proptest::option::of(rules())).prop_map(
            |(p, d, r)| {
                ConversionMechanism::PercentCapitalization(PercentCapitalizationConversion {
                    converts_to_percent: p,
                    capitalization_definition: d,
                    capitalization_definition_rules: r,
                })
            }
        ),
        (
            prop::sample::select(ValuationType::ALL),
            proptest::option::of(monetary()),
            proptest::option::of(rules()),
        )
            .prop_map(|(t, amount, r)| {
                ConversionMechanism::ValuationBased(ValuationBasedConversion {
                    valuation_type: t,
                    valuation_amount: amount,
                    capitalization_definition: None,
                    capitalization_definition_rules: r,
                })
            }),
        (
            text(),
            any::<bool>(),
            proptest::option::of(numeric()),
            proptest::option::of(monetary()),
        )
            .prop_map(|(description, discount, pct, amount)| {
                ConversionMechanism::SharePriceBased(SharePriceBasedConversion {
                    description,
                    discount,
                    discount_percentage: pct,
                    discount_amount: amount,
                })
            }),
    ]
}

// ============================================================================
// Canonicalizer
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn canonical_decimal_idempotent(mantissa in any::<i64>(), scale in 0u32..12u32) {
        let input = Decimal::new(mantissa, scale).to_string();
        let once = to_canonical_decimal(&input).unwrap();
        let twice = to_canonical_decimal(&once).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(Numeric::parse(&once).unwrap(), Numeric::parse(&input).unwrap());
        prop_assert!(!once.contains('e') && !once.contains('E') && !once.starts_with('+'));
    }

    #[test]
    fn date_roundtrip(date in ocf_date()) {
        let text = date.to_string();
        let time = date_to_ledger_time(&text).unwrap();
        prop_assert_eq!(ledger_time_to_date(&time).unwrap(), text);
    }
}

// ============================================================================
// Variant Mapper
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn mechanism_roundtrip(mechanism in mechanism()) {
        let mapper = VariantMapper::default();
        let ledger = mapper.mechanism_to_ledger(&mechanism).unwrap();
        let back = mapper.mechanism_from_ledger(&ledger).unwrap();
        prop_assert_eq!(back, mechanism);
    }

    #[test]
    fn unknown_mechanism_tag_rejected(tag in "OcfConvMech[A-Z][a-z]{3,12}Unknown") {
        let err = VariantMapper::default()
            .mechanism_from_ledger(&LedgerVariant::new(tag.clone(), json!({})))
            .unwrap_err();
        let is_unknown_tag = matches!(err, TranslationError::UnknownVariantTag { .. });
        prop_assert!(is_unknown_tag);
    }
}

// ============================================================================
// Trigger Mapper
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn trigger_ids_deterministic(parent in "[a-z]{1,8}-[0-9]{1,4}", count in 1usize..6) {
        let triggers: Vec<ConversionTrigger> = (0..count)
            .map(|_| {
                ConversionTrigger::of_type(TriggerType::ElectiveAtWill)
                    .with_right(ConversionRight {
                        right_type: None,
                        conversion_mechanism: ConversionMechanism::custom("at will"),
                        converts_to_future_round: None,
                        converts_to_stock_class_id: None,
                    })
            })
            .collect();
        let mapper = TriggerMapper::new(TriggerMode::Strict, VariantMapper::default());
        let owner = TriggerParent::convertible(&parent, ConvertibleType::Note);

        let first = mapper.to_ledger(&owner, &triggers).unwrap().triggers;
        let second = mapper.to_ledger(&owner, &triggers).unwrap().triggers;
        prop_assert_eq!(&first, &second);
        for (i, trigger) in first.iter().enumerate() {
            prop_assert_eq!(&trigger.trigger_id, &format!("{parent}-trigger-{}", i + 1));
            prop_assert_eq!(&trigger.trigger_id, &trigger_id(&parent, i, None));
        }
    }
}

// ============================================================================
// Normalization and Equivalence
// ============================================================================

fn small_object() -> impl Strategy<Value = Value> {
    let value = prop_oneof![
        Just(Value::Null),
        "[a-z0-9]{1,4}".prop_map(Value::String),
        (0u32..1000).prop_map(|n| json!(n)),
        (0u32..1000, 1u32..4).prop_map(|(n, s)| json!(format!("{n}.{}", "0".repeat(s as usize)))),
        Just(json!([])),
    ];
    prop::collection::btree_map(
        prop::sample::select(vec![
            "id",
            "name",
            "votes",
            "votes_per_share",
            "comments",
            "created_at",
        ]),
        value,
        0..6,
    )
    .prop_map(|fields| {
        Value::Object(fields.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn deprecation_precedence(
        legacy in "[a-z]{1,6}",
        current in prop::collection::vec("[a-z]{1,6}", 1..4),
    ) {
        let result = NormalizationEngine::default().normalize(
            ObjectType::StockPlan,
            &json!({"stock_class_id": legacy, "stock_class_ids": current.clone()}),
        );
        prop_assert_eq!(&result.data, &json!({"stock_class_ids": current}));
        prop_assert!(result.normalized_fields.is_empty());
        prop_assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn comparator_symmetric(a in small_object(), b in small_object()) {
        let comparator = EquivalenceComparator::default();
        let options = CompareOptions::default();
        let forward = comparator.compare(ObjectType::StockClass, &a, &b, &options);
        let backward = comparator.compare(ObjectType::StockClass, &b, &a, &options);
        prop_assert_eq!(forward.equivalent, backward.equivalent);
        prop_assert_eq!(forward.differences, backward.differences);
    }

    #[test]
    fn comparator_reflexive(a in small_object()) {
        let result = EquivalenceComparator::default()
            .compare(ObjectType::StockClass, &a, &a, &CompareOptions::default());
        prop_assert!(result.equivalent);
    }
}
