//! # Ledger Payload Boundary
//!
//! Explicit parse step for raw contract arguments read back from the
//! ledger, and the envelope for arguments sent to it.
//!
//! A stored contract keeps its record under a payload key
//! (`issuance_data`, `stock_class_data`, ...). Older contracts stored the
//! record flat at the top level. [`parse_ledger_payload`] accepts both,
//! preferring the nested shape, and fails with `SchemaMismatch` when
//! neither is recognisable.

use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::value_objects::numeric::json_kind;
use crate::domain::value_objects::ObjectType;
use serde_json::{Map, Value};

/// Keys a contract event may wrap its argument in.
const EVENT_ARGUMENT_KEYS: [&str; 2] = ["create_argument", "createArgument"];

/// Key a legacy flat payload must carry.
const FLAT_PAYLOAD_MARKER: &str = "id";

/// Where the record was found in the raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Under the object type's payload key.
    Nested,
    /// At the top level.
    Flat,
}

/// A raw ledger payload whose shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPayload {
    /// Object type the payload was parsed for.
    pub object_type: ObjectType,
    /// Shape the record was found in.
    pub shape: PayloadShape,
    /// The ledger record.
    pub data: Map<String, Value>,
}

impl ValidatedPayload {
    /// The record as a JSON value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.data)
    }
}

/// Parses a raw ledger payload for `object_type`.
///
/// A contract event wrapper (`create_argument` / `createArgument`) is
/// unwrapped first. The nested record under the payload key wins when
/// present; otherwise a flat record is accepted if it carries an `id`.
///
/// # Errors
///
/// - `TypeMismatch` if the payload or nested record is not an object
/// - `SchemaMismatch` naming the payload key if no record is found
///
/// # Examples
///
/// ```
/// use ocf_ledger::domain::value_objects::ObjectType;
/// use ocf_ledger::infrastructure::ledger::{parse_ledger_payload, PayloadShape};
/// use serde_json::json;
///
/// let raw = json!({"issuance_data": {"id": "si-1"}, "context": {"issuer": "party::1"}});
/// let payload = parse_ledger_payload(ObjectType::TxStockIssuance, &raw).unwrap();
/// assert_eq!(payload.shape, PayloadShape::Nested);
/// assert_eq!(payload.data["id"], "si-1");
/// ```
pub fn parse_ledger_payload(
    object_type: ObjectType,
    raw: &Value,
) -> TranslationResult<ValidatedPayload> {
    let key = object_type.payload_key();
    let top = as_object(unwrap_event(raw), "payload")?;

    if let Some(nested) = top.get(key) {
        return Ok(ValidatedPayload {
            object_type,
            shape: PayloadShape::Nested,
            data: as_object(nested, key)?.clone(),
        });
    }

    if top.contains_key(FLAT_PAYLOAD_MARKER) {
        return Ok(ValidatedPayload {
            object_type,
            shape: PayloadShape::Flat,
            data: top.clone(),
        });
    }

    Err(TranslationError::schema_mismatch(key))
}

/// Wraps an outbound ledger record under its payload key.
#[must_use]
pub fn choice_argument(object_type: ObjectType, ledger_value: Value) -> Value {
    let mut argument = Map::with_capacity(1);
    argument.insert(object_type.payload_key().to_string(), ledger_value);
    Value::Object(argument)
}

fn unwrap_event(raw: &Value) -> &Value {
    EVENT_ARGUMENT_KEYS
        .iter()
        .find_map(|key| raw.get(key))
        .unwrap_or(raw)
}

fn as_object<'a>(value: &'a Value, field: &str) -> TranslationResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| TranslationError::type_mismatch(field, "object", json_kind(value)))
}
