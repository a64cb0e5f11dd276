//! # Deprecation Tests
//!
//! Deprecated-field migration, corpus reporting and equivalence through the
//! public API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use ocf_ledger::application::equivalence::{CompareOptions, EquivalenceComparator};
use ocf_ledger::application::normalization::{
    BatchItem, BatchOptions, CollectingSink, DeprecatedFieldMapping, DeprecationRegistry,
    NormalizationEngine, NormalizationOptions,
};
use ocf_ledger::application::{TranslationContext, translate_to_ledger};
use ocf_ledger::domain::value_objects::ObjectType;
use serde_json::json;
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn engine_with_sink() -> (NormalizationEngine, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    let engine = NormalizationEngine::new(
        Arc::new(DeprecationRegistry::with_defaults()),
        NormalizationOptions {
            warnings_enabled: true,
        },
        sink.clone(),
    );
    (engine, sink)
}

// ============================================================================
// Stock Plan Scenario
// ============================================================================

#[test]
fn legacy_stock_class_id_is_migrated() {
    let (engine, sink) = engine_with_sink();
    let result = engine.normalize(ObjectType::StockPlan, &json!({"stock_class_id": "sc-1"}));

    assert_eq!(result.data, json!({"stock_class_ids": ["sc-1"]}));
    assert!(result.normalized);
    assert_eq!(result.normalized_fields, vec!["stock_class_id"]);
    assert_eq!(sink.len(), 1);
    let warning = &sink.warnings()[0];
    assert_eq!(warning.field, "stock_class_id");
    assert_eq!(warning.replacement.as_deref(), Some("stock_class_ids"));
}

#[test]
fn current_field_wins_over_legacy() {
    let (engine, sink) = engine_with_sink();
    let result = engine.normalize(
        ObjectType::StockPlan,
        &json!({"stock_class_id": "sc-1", "stock_class_ids": ["sc-2"]}),
    );

    assert_eq!(result.data, json!({"stock_class_ids": ["sc-2"]}));
    assert!(result.normalized_fields.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn normalized_legacy_plan_translates() {
    let engine = NormalizationEngine::default();
    let legacy = json!({
        "object_type": "STOCK_PLAN",
        "id": "plan-legacy",
        "plan_name": "2015 Stock Plan",
        "initial_shares_reserved": 250000,
        "stock_class_id": "sc-common"
    });

    let normalized = engine.normalize(ObjectType::StockPlan, &legacy);
    let ctx = TranslationContext::default();
    let ledger = translate_to_ledger(ObjectType::StockPlan, &normalized.data, &ctx).unwrap();
    assert_eq!(ledger["stock_class_ids"], json!(["sc-common"]));
}

// ============================================================================
// Other Registrations
// ============================================================================

#[test]
fn option_grant_type_is_value_mapped() {
    let (engine, _) = engine_with_sink();
    let result = engine.normalize(
        ObjectType::TxEquityCompensationIssuance,
        &json!({"id": "eq-1", "option_grant_type": "ISO"}),
    );
    assert_eq!(result.data, json!({"id": "eq-1", "compensation_type": "OPTION_ISO"}));

    let unmapped = engine.normalize(
        ObjectType::TxEquityCompensationIssuance,
        &json!({"id": "eq-2", "option_grant_type": "RSU"}),
    );
    assert_eq!(unmapped.data["compensation_type"], "RSU");
    assert_eq!(unmapped.warnings.len(), 2);
}

#[test]
fn removed_field_is_dropped() {
    let (engine, _) = engine_with_sink();
    let result = engine.normalize(ObjectType::Issuer, &json!({"id": "i-1", "issuer_type": "CORP"}));
    assert_eq!(result.data, json!({"id": "i-1"}));
    assert_eq!(result.normalized_fields, vec!["issuer_type"]);
}

#[test]
fn object_type_key_overrides_argument() {
    let (engine, _) = engine_with_sink();
    let result = engine.normalize(
        ObjectType::Issuer,
        &json!({"object_type": "STOCK_CLASS", "id": "sc-1", "votes": "10"}),
    );
    assert_eq!(result.object_type, ObjectType::StockClass);
    assert_eq!(result.data["votes_per_share"], "10");
    assert!(result.data.get("votes").is_none());
}

#[test]
fn custom_registration_is_idempotent() {
    let registry = Arc::new(DeprecationRegistry::with_defaults());
    let mapping = DeprecatedFieldMapping::renamed("price", "price_per_share");
    assert!(registry.register(ObjectType::Valuation, mapping.clone()));
    assert!(!registry.register(ObjectType::Valuation, mapping));

    let engine = NormalizationEngine::new(
        registry,
        NormalizationOptions::default(),
        Arc::new(CollectingSink::new()),
    );
    let result = engine.normalize(
        ObjectType::Valuation,
        &json!({"price": {"amount": "1", "currency": "USD"}}),
    );
    assert_eq!(result.data, json!({"price_per_share": {"amount": "1", "currency": "USD"}}));
}

// ============================================================================
// Enforcement and Reporting
// ============================================================================

#[test]
fn assert_entry_point_lists_every_field() {
    let engine = NormalizationEngine::default();
    let err = engine
        .assert_no_deprecated_fields(
            ObjectType::TxWarrantIssuance,
            &json!({"id": "w-1", "exercise_trigger": {"type": "ELECTIVE_AT_WILL"}}),
        )
        .unwrap_err();
    assert_eq!(err.code(), 1099);
    assert!(err.to_string().contains("exercise_trigger"));

    assert!(engine
        .assert_no_deprecated_fields(ObjectType::TxWarrantIssuance, &json!({"id": "w-1"}))
        .is_ok());
}

#[test]
fn batch_report_shape() {
    let (engine, sink) = engine_with_sink();
    let items = vec![
        BatchItem::new(ObjectType::StockPlan, json!({"id": "p-1", "stock_class_id": "sc-1"})),
        BatchItem::new(ObjectType::StockPlan, json!({"id": "p-2", "stock_class_ids": ["sc-1"]})),
        BatchItem::new(ObjectType::StockClass, json!({"votes": 1})).with_id("row-9"),
    ];

    let report = engine.check_batch(
        &items,
        BatchOptions {
            include_affected_items: true,
        },
    );
    assert!(sink.is_empty());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["summary"]["totalItems"], 3);
    assert_eq!(json["summary"]["itemsWithDeprecatedFields"], 2);
    assert_eq!(json["summary"]["percentageWithDeprecatedFields"], 66.67);
    assert_eq!(
        json["byObjectType"]["STOCK_PLAN"],
        json!({"total": 2, "withDeprecatedFields": 1, "fields": {"stock_class_id": 1}})
    );
    assert_eq!(json["byField"]["votes"]["deprecationType"], "renamed");
    assert_eq!(json["byField"]["votes"]["replacementField"], "votes_per_share");
    assert_eq!(
        json["affectedItems"],
        json!([
            {"id": "p-1", "objectType": "STOCK_PLAN", "fields": ["stock_class_id"]},
            {"id": "row-9", "objectType": "STOCK_CLASS", "fields": ["votes"]}
        ])
    );
}

#[test]
fn batch_items_parse_from_corpus_json() {
    let items: Vec<BatchItem> = serde_json::from_value(json!([
        {"entityType": "STAKEHOLDER", "data": {"current_relationship": "FOUNDER"}, "id": "s-1"},
        {"entityType": "TX_CONVERTIBLE_ISSUANCE", "data": {}}
    ]))
    .unwrap();
    let report = NormalizationEngine::default().check_batch(&items, BatchOptions::default());
    assert_eq!(report.summary.total_deprecated_field_usages, 1);
    assert!(report.affected_items.is_none());
}

// ============================================================================
// Equivalence
// ============================================================================

#[test]
fn stored_and_current_forms_are_equivalent() {
    let stored = json!({
        "_id": "65f0c1",
        "object_type": "STOCK_PLAN",
        "id": "plan-1",
        "plan_name": "2024 Plan",
        "initial_shares_reserved": "1500000.00",
        "board_approval_date": "2024-01-15T00:00:00.000Z",
        "stock_class_id": "sc-common",
        "comments": []
    });
    let current = json!({
        "object_type": "STOCK_PLAN",
        "id": "plan-1",
        "plan_name": "2024 Plan",
        "initial_shares_reserved": 1500000,
        "board_approval_date": "2024-01-15",
        "stock_class_ids": ["sc-common"],
        "contract_id": "00abc"
    });

    let comparator = EquivalenceComparator::default();
    let options = CompareOptions::default();
    let forward = comparator.compare(ObjectType::StockPlan, &stored, &current, &options);
    let backward = comparator.compare(ObjectType::StockPlan, &current, &stored, &options);
    assert!(forward.equivalent, "{:?}", forward.differences);
    assert!(backward.equivalent);
    assert_eq!(forward.normalization_a.normalized_fields, vec!["stock_class_id"]);
}

#[test]
fn real_differences_are_reported() {
    let comparator = EquivalenceComparator::default();
    let result = comparator.compare(
        ObjectType::StockPlan,
        &json!({"id": "plan-1", "stock_class_ids": ["sc-1"], "plan_name": "A"}),
        &json!({"id": "plan-1", "stock_class_id": "sc-2", "plan_name": "A"}),
        &CompareOptions::default(),
    );
    assert!(!result.equivalent);
    assert_eq!(result.differences, vec!["stock_class_ids[0]"]);
}

#[test]
fn numeric_looking_identifiers_must_match_exactly() {
    let comparator = EquivalenceComparator::default();
    let result = comparator.compare(
        ObjectType::Issuer,
        &json!({"id": "100", "legal_name": "Acme", "default_id_prefix": "001"}),
        &json!({"id": "100.0", "legal_name": "Acme", "default_id_prefix": "1"}),
        &CompareOptions::default(),
    );
    assert!(!result.equivalent);
    assert_eq!(result.differences, vec!["default_id_prefix", "id"]);
}
