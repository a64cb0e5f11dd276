//! # Ledger Roundtrip Tests
//!
//! End-to-end translation through the public dispatch API: interchange JSON
//! to ledger arguments, wrapped as the ledger stores them, and back.

#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use ocf_ledger::application::trigger_mapper::TriggerMode;
use ocf_ledger::application::{TranslationContext, translate_from_ledger, translate_to_ledger};
use ocf_ledger::domain::errors::TranslationError;
use ocf_ledger::domain::value_objects::ObjectType;
use ocf_ledger::infrastructure::ledger::{PayloadShape, choice_argument, parse_ledger_payload};
use serde_json::{Value, json};

// ============================================================================
// Helpers
// ============================================================================

fn ctx() -> TranslationContext {
    TranslationContext::default()
}

/// Translates to the ledger form, wraps it as a contract payload and reads
/// it back.
fn roundtrip(object_type: ObjectType, input: &Value, ctx: &TranslationContext) -> Value {
    let ledger = translate_to_ledger(object_type, input, ctx).unwrap();
    let stored = choice_argument(object_type, ledger);
    translate_from_ledger(object_type, &stored, ctx).unwrap()
}

fn safe_issuance(triggers: Value) -> Value {
    json!({
        "object_type": "TX_CONVERTIBLE_ISSUANCE",
        "id": "conv-001",
        "date": "2024-02-01",
        "security_id": "sec-conv-001",
        "custom_id": "SAFE-001",
        "stakeholder_id": "sh-investor",
        "investment_amount": {"amount": "500000.00", "currency": "USD"},
        "convertible_type": "SAFE",
        "conversion_triggers": triggers,
        "seniority": 1
    })
}

// ============================================================================
// Convertible Issuance
// ============================================================================

#[test]
fn convertible_issuance_safe_roundtrip() {
    let input = safe_issuance(json!([{
        "type": "AUTOMATIC_ON_CONDITION",
        "conversion_right": {
            "conversion_mechanism": {"type": "SAFE_CONVERSION", "conversion_mfn": false}
        }
    }]));

    let ledger = translate_to_ledger(ObjectType::TxConvertibleIssuance, &input, &ctx()).unwrap();
    let trigger = &ledger["conversion_triggers"][0];
    assert_eq!(trigger["type_"], "OcfTriggerTypeAutomaticOnCondition");
    assert_eq!(trigger["trigger_id"], "conv-001-trigger-1");
    assert_eq!(trigger["conversion_right"]["conversion_mechanism"]["tag"], "OcfConvMechSAFE");
    let mechanism = &trigger["conversion_right"]["conversion_mechanism"];
    assert_eq!(mechanism["value"]["conversion_mfn"], false);
    assert_eq!(ledger["date"], "2024-02-01T00:00:00.000Z");
    assert_eq!(ledger["pro_rata"], Value::Null);

    let back = translate_from_ledger(
        ObjectType::TxConvertibleIssuance,
        &choice_argument(ObjectType::TxConvertibleIssuance, ledger),
        &ctx(),
    )
    .unwrap();
    let trigger = &back["conversion_triggers"][0];
    assert_eq!(back["object_type"], "TX_CONVERTIBLE_ISSUANCE");
    assert_eq!(back["date"], "2024-02-01");
    assert_eq!(back["investment_amount"]["amount"], "500000");
    assert_eq!(trigger["type"], "AUTOMATIC_ON_CONDITION");
    assert_eq!(trigger["conversion_right"]["conversion_mechanism"]["type"], "SAFE_CONVERSION");
    assert_eq!(trigger["conversion_right"]["conversion_mechanism"]["conversion_mfn"], false);
}

#[test]
fn supplied_trigger_ids_survive() {
    let input = safe_issuance(json!([{
        "type": "ELECTIVE_IN_RANGE",
        "trigger_id": "window",
        "start_date": "2024-06-01",
        "end_date": "2024-12-31",
        "conversion_right": {
            "conversion_mechanism": {
                "type": "CUSTOM_CONVERSION",
                "custom_conversion_description": "Holder election"
            }
        }
    }]));
    let back = roundtrip(ObjectType::TxConvertibleIssuance, &input, &ctx());
    let trigger = &back["conversion_triggers"][0];
    assert_eq!(trigger["trigger_id"], "window");
    assert_eq!(trigger["start_date"], "2024-06-01");
    assert_eq!(trigger["end_date"], "2024-12-31");
}

#[test]
fn trigger_without_right_follows_mode() {
    let input = safe_issuance(json!([{"type": "AUTOMATIC_ON_CONDITION"}]));

    let err = translate_to_ledger(ObjectType::TxConvertibleIssuance, &input, &ctx()).unwrap_err();
    assert_eq!(err.code(), 1001);
    assert_eq!(err.field(), Some("conversion_triggers[0].conversion_right"));

    let lenient = TranslationContext::new(TriggerMode::Lenient, 10);
    let back = roundtrip(ObjectType::TxConvertibleIssuance, &input, &lenient);
    assert_eq!(
        back["conversion_triggers"][0]["conversion_right"]["conversion_mechanism"]["type"],
        "SAFE_CONVERSION"
    );
}

// ============================================================================
// Omission of Empty Collections
// ============================================================================

#[test]
fn empty_comments_are_omitted_both_ways() {
    let input = json!({
        "object_type": "TX_STOCK_ACCEPTANCE",
        "id": "acc-1",
        "date": "2024-03-01",
        "security_id": "sec-1",
        "comments": []
    });

    let ledger = translate_to_ledger(ObjectType::TxStockAcceptance, &input, &ctx()).unwrap();
    assert_eq!(ledger["comments"], json!([]));

    let payload = json!({"acceptance_data": ledger});
    let back = translate_from_ledger(ObjectType::TxStockAcceptance, &payload, &ctx()).unwrap();
    assert!(back.get("comments").is_none());
    assert_eq!(
        back,
        json!({
            "object_type": "TX_STOCK_ACCEPTANCE",
            "id": "acc-1",
            "date": "2024-03-01",
            "security_id": "sec-1"
        })
    );
}

// ============================================================================
// Ledger Payload Shapes
// ============================================================================

#[test]
fn nested_flat_and_event_payloads_agree() {
    let input = json!({
        "object_type": "STOCK_PLAN",
        "id": "plan-1",
        "plan_name": "2024 Equity Incentive Plan",
        "initial_shares_reserved": "1500000.00",
        "stock_class_ids": ["sc-common"]
    });
    let ledger = translate_to_ledger(ObjectType::StockPlan, &input, &ctx()).unwrap();

    let nested = json!({"stock_plan_data": ledger.clone()});
    let event = json!({"createArgument": {"stock_plan_data": ledger.clone()}});

    let shape = |raw: &Value| parse_ledger_payload(ObjectType::StockPlan, raw).unwrap().shape;
    assert_eq!(shape(&nested), PayloadShape::Nested);
    assert_eq!(shape(&ledger), PayloadShape::Flat);

    let from_nested = translate_from_ledger(ObjectType::StockPlan, &nested, &ctx()).unwrap();
    let from_flat = translate_from_ledger(ObjectType::StockPlan, &ledger, &ctx()).unwrap();
    let from_event = translate_from_ledger(ObjectType::StockPlan, &event, &ctx()).unwrap();
    assert_eq!(from_nested, from_flat);
    assert_eq!(from_nested, from_event);
    assert_eq!(from_nested["initial_shares_reserved"], "1500000");
}

#[test]
fn payload_without_expected_key_is_a_schema_mismatch() {
    let payload = json!({"issuer_data": {}});
    let err = translate_from_ledger(ObjectType::Valuation, &payload, &ctx()).unwrap_err();
    assert_eq!(err, TranslationError::schema_mismatch("valuation_data"));
    assert_eq!(err.code(), 1004);
}

// ============================================================================
// Error Taxonomy
// ============================================================================

#[test]
fn unknown_mechanism_tag_is_fatal() {
    let input = safe_issuance(json!([{
        "type": "AUTOMATIC_ON_CONDITION",
        "conversion_right": {
            "conversion_mechanism": {"type": "SAFE_CONVERSION", "conversion_mfn": true}
        }
    }]));
    let kind = ObjectType::TxConvertibleIssuance;
    let mut ledger = translate_to_ledger(kind, &input, &ctx()).unwrap();
    ledger["conversion_triggers"][0]["conversion_right"]["conversion_mechanism"]["tag"] =
        json!("OcfConvMechMystery");

    let err = translate_from_ledger(kind, &ledger, &ctx()).unwrap_err();
    assert_eq!(err.code(), 1002);
    assert!(err.to_string().contains("OcfConvMechMystery"));
}

#[test]
fn wrong_primitive_kind_is_a_type_mismatch() {
    let input = json!({
        "object_type": "TX_STOCK_CANCELLATION",
        "id": "can-1",
        "date": "2024-05-01",
        "security_id": "sec-1",
        "quantity": true,
        "reason_text": "Repurchased at termination"
    });
    let err = translate_to_ledger(ObjectType::TxStockCancellation, &input, &ctx()).unwrap_err();
    assert_eq!(err.code(), 1003);
}

#[test]
fn mismatched_object_type_is_rejected() {
    let input = json!({
        "object_type": "TX_WARRANT_ACCEPTANCE",
        "id": "acc-1",
        "date": "2024-03-01",
        "security_id": "sec-1"
    });
    let err = translate_to_ledger(ObjectType::TxStockAcceptance, &input, &ctx()).unwrap_err();
    assert_eq!(err.code(), 1099);
}

#[test]
fn excess_scale_is_rejected_unless_configured() {
    let input = json!({
        "object_type": "TX_STOCK_REPURCHASE",
        "id": "rep-1",
        "date": "2024-07-01",
        "security_id": "sec-1",
        "quantity": "100",
        "price": {"amount": "0.000000000001", "currency": "USD"}
    });
    assert!(translate_to_ledger(ObjectType::TxStockRepurchase, &input, &ctx()).is_err());

    let wide = TranslationContext::new(TriggerMode::Strict, 12);
    let back = roundtrip(ObjectType::TxStockRepurchase, &input, &wide);
    assert_eq!(back["price"]["amount"], "0.000000000001");
}

#[test]
fn interchange_dates_must_be_bare() {
    let input = json!({
        "object_type": "TX_STOCK_ACCEPTANCE",
        "id": "acc-1",
        "date": "2024-01-15T10:00:00Z",
        "security_id": "sec-1"
    });
    assert!(translate_to_ledger(ObjectType::TxStockAcceptance, &input, &ctx()).is_err());
}

// ============================================================================
// Adjustments
// ============================================================================

#[test]
fn authorized_shares_sentinel_roundtrip() {
    let input = json!({
        "object_type": "TX_STOCK_CLASS_AUTHORIZED_SHARES_ADJUSTMENT",
        "id": "adj-1",
        "date": "2024-08-15",
        "stock_class_id": "sc-common",
        "new_shares_authorized": "UNLIMITED",
        "board_approval_date": "2024-08-01"
    });
    let kind = ObjectType::TxStockClassAuthorizedSharesAdjustment;
    let ledger = translate_to_ledger(kind, &input, &ctx()).unwrap();
    assert_eq!(ledger["new_shares_authorized"]["value"], "OcfAuthorizedSharesUnlimited");
    assert_eq!(ledger["stockholder_approval_date"], Value::Null);

    let back = roundtrip(kind, &input, &ctx());
    assert_eq!(back, input);
}
