//! Translation by object type over untyped JSON.

use super::{LedgerTranslator, TranslationContext};
use crate::domain::errors::{classify_serde_error, TranslationError, TranslationResult};
use crate::domain::interchange::{
    Acceptance, ConvertibleCancellation, ConvertibleIssuance, ConvertibleTransfer,
    EquityCompensationExercise, EquityCompensationIssuance, Issuer,
    IssuerAuthorizedSharesAdjustment, QuantityCancellation, QuantityTransfer, Stakeholder,
    StockClass, StockClassAuthorizedSharesAdjustment, StockClassConversionRatioAdjustment,
    StockClassSplit, StockIssuance, StockPlan, StockPlanPoolAdjustment, StockRepurchase,
    Valuation, VestingTerms, WarrantExercise, WarrantIssuance, WarrantRetraction,
};
use crate::domain::value_objects::numeric::json_kind;
use crate::domain::value_objects::ObjectType;
use crate::infrastructure::ledger::parse_ledger_payload;
use serde_json::Value;
use tracing::debug;

/// Expands `$call::<T>(args)` with `T` the record type for `$kind`.
macro_rules! by_object_type {
    ($kind:expr, $call:ident ( $($arg:expr),* )) => {
        match $kind {
            ObjectType::Issuer => $call::<Issuer>($($arg),*),
            ObjectType::Stakeholder => $call::<Stakeholder>($($arg),*),
            ObjectType::StockClass => $call::<StockClass>($($arg),*),
            ObjectType::StockPlan => $call::<StockPlan>($($arg),*),
            ObjectType::VestingTerms => $call::<VestingTerms>($($arg),*),
            ObjectType::Valuation => $call::<Valuation>($($arg),*),
            ObjectType::TxConvertibleIssuance => $call::<ConvertibleIssuance>($($arg),*),
            ObjectType::TxConvertibleCancellation => $call::<ConvertibleCancellation>($($arg),*),
            ObjectType::TxConvertibleTransfer => $call::<ConvertibleTransfer>($($arg),*),
            ObjectType::TxWarrantIssuance => $call::<WarrantIssuance>($($arg),*),
            ObjectType::TxWarrantExercise => $call::<WarrantExercise>($($arg),*),
            ObjectType::TxWarrantRetraction => $call::<WarrantRetraction>($($arg),*),
            ObjectType::TxEquityCompensationIssuance => {
                $call::<EquityCompensationIssuance>($($arg),*)
            }
            ObjectType::TxEquityCompensationExercise => {
                $call::<EquityCompensationExercise>($($arg),*)
            }
            ObjectType::TxStockIssuance => $call::<StockIssuance>($($arg),*),
            ObjectType::TxStockRepurchase => $call::<StockRepurchase>($($arg),*),
            ObjectType::TxStockAcceptance
            | ObjectType::TxConvertibleAcceptance
            | ObjectType::TxWarrantAcceptance => $call::<Acceptance>($($arg),*),
            ObjectType::TxStockCancellation
            | ObjectType::TxEquityCompensationCancellation => {
                $call::<QuantityCancellation>($($arg),*)
            }
            ObjectType::TxStockTransfer
            | ObjectType::TxWarrantTransfer
            | ObjectType::TxEquityCompensationTransfer => $call::<QuantityTransfer>($($arg),*),
            ObjectType::TxIssuerAuthorizedSharesAdjustment => {
                $call::<IssuerAuthorizedSharesAdjustment>($($arg),*)
            }
            ObjectType::TxStockClassAuthorizedSharesAdjustment => {
                $call::<StockClassAuthorizedSharesAdjustment>($($arg),*)
            }
            ObjectType::TxStockClassConversionRatioAdjustment => {
                $call::<StockClassConversionRatioAdjustment>($($arg),*)
            }
            ObjectType::TxStockClassSplit => $call::<StockClassSplit>($($arg),*),
            ObjectType::TxStockPlanPoolAdjustment => $call::<StockPlanPoolAdjustment>($($arg),*),
        }
    };
}

/// Translates an interchange object to its ledger record.
///
/// A missing `object_type` key is filled from `object_type`; a present one
/// must agree with it.
///
/// # Errors
///
/// - `TypeMismatch` if `interchange` is not an object
/// - `ValidationError` if its `object_type` names another type
/// - any error raised by the record's translator
pub fn translate_to_ledger(
    object_type: ObjectType,
    interchange: &Value,
    ctx: &TranslationContext,
) -> TranslationResult<Value> {
    debug!(object_type = %object_type, direction = "to_ledger", "Translating object");
    by_object_type!(object_type, to_ledger_as(object_type, interchange, ctx))
}

/// Translates a raw ledger payload to the interchange object.
///
/// The payload goes through the ledger boundary parse step first, so both
/// nested and legacy flat shapes are accepted.
///
/// # Errors
///
/// - `SchemaMismatch` if no record is found for `object_type`
/// - any error raised by the record's translator
pub fn translate_from_ledger(
    object_type: ObjectType,
    raw: &Value,
    ctx: &TranslationContext,
) -> TranslationResult<Value> {
    debug!(object_type = %object_type, direction = "from_ledger", "Translating object");
    let payload = parse_ledger_payload(object_type, raw)?;
    by_object_type!(object_type, from_ledger_as(object_type, payload.into_value(), ctx))
}

fn to_ledger_as<T: LedgerTranslator>(
    object_type: ObjectType,
    interchange: &Value,
    ctx: &TranslationContext,
) -> TranslationResult<Value> {
    let Value::Object(fields) = interchange else {
        return Err(TranslationError::type_mismatch("object", "object", json_kind(interchange)));
    };
    let mut fields = fields.clone();
    fields
        .entry("object_type")
        .or_insert_with(|| Value::String(object_type.as_str().to_string()));

    let record: T = serde_json::from_value(Value::Object(fields))
        .map_err(|e| classify_serde_error("", &e))?;
    if record.object_type() != object_type {
        return Err(TranslationError::validation(format!(
            "object_type {} does not match requested {object_type}",
            record.object_type()
        )));
    }
    to_json(&record.to_ledger(ctx)?)
}

fn from_ledger_as<T: LedgerTranslator>(
    object_type: ObjectType,
    ledger: Value,
    ctx: &TranslationContext,
) -> TranslationResult<Value> {
    let record: T::Ledger =
        serde_json::from_value(ledger).map_err(|e| classify_serde_error("", &e))?;
    to_json(&T::from_ledger(&record, object_type, ctx)?)
}

fn to_json<S: serde::Serialize>(value: &S) -> TranslationResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        TranslationError::validation(format!("record is not representable as JSON: {e}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stock_issuance() -> Value {
        json!({
            "id": "si-1",
            "date": "2024-03-01",
            "security_id": "sec-1",
            "custom_id": "CS-1",
            "stakeholder_id": "sh-1",
            "stock_class_id": "sc-common",
            "share_price": {"amount": "0.0001", "currency": "USD"},
            "quantity": "1000000",
            "comments": []
        })
    }

    mod outbound {
        use super::*;

        #[test]
        fn fills_missing_object_type() {
            let ctx = TranslationContext::default();
            let ledger =
                translate_to_ledger(ObjectType::TxStockIssuance, &stock_issuance(), &ctx).unwrap();
            assert_eq!(ledger["date"], "2024-03-01T00:00:00.000Z");
            assert_eq!(ledger["stock_plan_id"], Value::Null);
            assert_eq!(ledger["comments"], json!([]));
            assert!(ledger.get("object_type").is_none());
        }

        #[test]
        fn conflicting_object_type_is_rejected() {
            let mut input = stock_issuance();
            input["object_type"] = json!("TX_STOCK_TRANSFER");
            let ctx = TranslationContext::default();
            let err = translate_to_ledger(ObjectType::TxStockIssuance, &input, &ctx).unwrap_err();
            assert_eq!(err.code(), 1099);
        }

        #[test]
        fn missing_field_is_named() {
            let mut input = stock_issuance();
            input.as_object_mut().unwrap().remove("quantity");
            let ctx = TranslationContext::default();
            assert_eq!(
                translate_to_ledger(ObjectType::TxStockIssuance, &input, &ctx).unwrap_err(),
                TranslationError::missing("quantity")
            );
        }

        #[test]
        fn non_object_input_is_type_mismatch() {
            let ctx = TranslationContext::default();
            let err = translate_to_ledger(ObjectType::Issuer, &json!("issuer"), &ctx).unwrap_err();
            assert_eq!(err.code(), 1003);
        }
    }

    mod inbound {
        use super::*;

        #[test]
        fn nested_and_flat_payloads_agree() {
            let ctx = TranslationContext::default();
            let ledger =
                translate_to_ledger(ObjectType::TxStockIssuance, &stock_issuance(), &ctx).unwrap();

            let nested = translate_from_ledger(
                ObjectType::TxStockIssuance,
                &json!({"issuance_data": ledger.clone()}),
                &ctx,
            )
            .unwrap();
            let flat = translate_from_ledger(ObjectType::TxStockIssuance, &ledger, &ctx).unwrap();

            assert_eq!(nested, flat);
            assert_eq!(nested["object_type"], "TX_STOCK_ISSUANCE");
            assert_eq!(nested["date"], "2024-03-01");
            assert!(nested.get("comments").is_none());
            assert!(nested.get("stock_plan_id").is_none());
        }

        #[test]
        fn shared_shape_reports_requested_type() {
            let ctx = TranslationContext::default();
            let raw = json!({"acceptance_data": {
                "id": "acc-1",
                "date": "2024-04-01T00:00:00.000Z",
                "security_id": "sec-c-1",
                "comments": []
            }});
            let ir =
                translate_from_ledger(ObjectType::TxConvertibleAcceptance, &raw, &ctx).unwrap();
            assert_eq!(ir["object_type"], "TX_CONVERTIBLE_ACCEPTANCE");
        }

        #[test]
        fn every_object_type_dispatches() {
            let ctx = TranslationContext::default();
            for &kind in ObjectType::ALL {
                let err = translate_from_ledger(kind, &json!({}), &ctx).unwrap_err();
                assert_eq!(err, TranslationError::schema_mismatch(kind.payload_key()));
            }
        }
    }
}
