//! # Equivalence Comparator
//!
//! Decides whether two interchange objects describe the same entity once
//! schema drift is reconciled, e.g. a ledger-stored object against its
//! database copy.
//!
//! Both sides are normalized independently, then reduced to a comparison
//! form:
//!
//! - ignored and deprecated keys are removed at every depth
//! - `null` and empty lists count as absent
//! - JSON numbers, and plain decimal strings under numeric keys, take their
//!   canonical text
//! - `YYYY-MM-DDT...` timestamps are cut to their date
//!
//! The verdict and the list of differing paths do not depend on argument
//! order.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::application::equivalence::{CompareOptions, EquivalenceComparator};
//! use ocf_ledger::domain::value_objects::ObjectType;
//! use serde_json::json;
//!
//! let comparator = EquivalenceComparator::default();
//! let stored = json!({
//!     "id": "p-1",
//!     "stock_class_id": "sc-1",
//!     "initial_shares_reserved": "1000.00"
//! });
//! let current = json!({
//!     "id": "p-1",
//!     "stock_class_ids": ["sc-1"],
//!     "initial_shares_reserved": 1000
//! });
//!
//! let options = CompareOptions::default();
//! let result = comparator.compare(ObjectType::StockPlan, &stored, &current, &options);
//! assert!(result.equivalent);
//! ```

use crate::application::canonical::{
    canonical_decimal_from_json, ledger_time_to_date, to_canonical_decimal,
};
use crate::application::normalization::{NormalizationEngine, NormalizationResult};
use crate::domain::value_objects::ObjectType;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Keys that never take part in a comparison by default.
pub const DEFAULT_IGNORED_FIELDS: [&str; 6] = [
    "_id",
    "__v",
    "created_at",
    "updated_at",
    "contract_id",
    "ledger_offset",
];

/// Keys whose string values hold decimal quantities.
const NUMERIC_KEYS: [&str; 9] = [
    "amount",
    "quantity",
    "numerator",
    "denominator",
    "seniority",
    "rate",
    "pro_rata",
    "votes",
    "votes_per_share",
];

/// Key endings that mark decimal quantities, e.g. `initial_shares_reserved`.
const NUMERIC_KEY_SUFFIXES: [&str; 7] = [
    "shares_reserved",
    "shares_authorized",
    "_quantity",
    "_percent",
    "_percentage",
    "_multiple",
    "_discount",
];

/// What a comparison leaves out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareOptions {
    /// Keys removed at every depth.
    pub ignored_fields: BTreeSet<String>,
    /// Also remove every field the registry lists as deprecated for the
    /// object type.
    pub ignore_deprecated_fields: bool,
    /// Further deprecated keys to remove.
    pub extra_deprecated_fields: BTreeSet<String>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            ignored_fields: DEFAULT_IGNORED_FIELDS.iter().map(|s| (*s).to_string()).collect(),
            ignore_deprecated_fields: true,
            extra_deprecated_fields: BTreeSet::new(),
        }
    }
}

impl CompareOptions {
    /// Adds ignored keys.
    #[must_use]
    pub fn ignoring<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_fields.extend(fields.into_iter().map(Into::into));
        self
    }
}

/// Outcome of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquivalenceResult {
    /// Whether the comparison forms agree.
    pub equivalent: bool,
    /// Normalization of the first object.
    pub normalization_a: NormalizationResult,
    /// Normalization of the second object.
    pub normalization_b: NormalizationResult,
    /// Dotted paths where the forms disagree, sorted.
    pub differences: Vec<String>,
}

/// Compares interchange objects after normalization.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceComparator {
    engine: NormalizationEngine,
}

impl EquivalenceComparator {
    /// Creates a comparator over `engine`.
    #[must_use]
    pub fn new(engine: NormalizationEngine) -> Self {
        Self { engine }
    }

    /// Compares `a` and `b` as `object_type`.
    #[must_use]
    pub fn compare(
        &self,
        object_type: ObjectType,
        a: &Value,
        b: &Value,
        options: &CompareOptions,
    ) -> EquivalenceResult {
        let normalization_a = self.engine.normalize(object_type, a);
        let normalization_b = self.engine.normalize(object_type, b);

        let mut dropped = options.ignored_fields.clone();
        dropped.extend(options.extra_deprecated_fields.iter().cloned());
        if options.ignore_deprecated_fields {
            let registry = self.engine.registry();
            dropped.extend(registry.deprecated_fields(normalization_a.object_type));
            dropped.extend(registry.deprecated_fields(normalization_b.object_type));
        }

        let form_a = comparison_form(&normalization_a.data, &dropped, false);
        let form_b = comparison_form(&normalization_b.data, &dropped, false);

        let mut differences = Vec::new();
        diff("", form_a.as_ref(), form_b.as_ref(), &mut differences);
        differences.sort();
        differences.dedup();

        EquivalenceResult {
            equivalent: differences.is_empty(),
            normalization_a,
            normalization_b,
            differences,
        }
    }
}

/// Reduces a value to the form compared; `None` means absent.
///
/// `numeric` is set when the value sits under a numeric key; only then are
/// decimal strings canonicalized, so `"001"` and `"1"` stay distinct ids.
fn comparison_form(value: &Value, dropped: &BTreeSet<String>, numeric: bool) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Bool(_) => Some(value.clone()),
        Value::Number(_) => Some(
            canonical_decimal_from_json(value, "")
                .map(Value::String)
                .unwrap_or_else(|_| value.clone()),
        ),
        Value::String(text) => Some(Value::String(canonical_text(text, numeric))),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => Some(Value::Array(
            items
                .iter()
                .map(|item| comparison_form(item, dropped, numeric).unwrap_or(Value::Null))
                .collect(),
        )),
        Value::Object(fields) => {
            let kept: Map<String, Value> = fields
                .iter()
                .filter(|(key, _)| !dropped.contains(key.as_str()))
                .filter_map(|(key, v)| {
                    comparison_form(v, dropped, is_numeric_key(key)).map(|v| (key.clone(), v))
                })
                .collect();
            Some(Value::Object(kept))
        }
    }
}

fn is_numeric_key(key: &str) -> bool {
    NUMERIC_KEYS.contains(&key) || NUMERIC_KEY_SUFFIXES.iter().any(|suffix| key.ends_with(suffix))
}

fn canonical_text(text: &str, numeric: bool) -> String {
    if looks_like_timestamp(text)
        && let Ok(date) = ledger_time_to_date(text)
    {
        return date;
    }
    if numeric
        && is_plain_decimal(text)
        && let Ok(canonical) = to_canonical_decimal(text)
    {
        return canonical;
    }
    text.to_string()
}

fn looks_like_timestamp(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() > 10
        && bytes.get(10) == Some(&b'T')
        && bytes.get(4) == Some(&b'-')
        && bytes.get(7) == Some(&b'-')
}

/// Optional `-`, digits, optional `.` and digits.
fn is_plain_decimal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && fraction.is_none_or(digits)
}

fn diff(path: &str, a: Option<&Value>, b: Option<&Value>, out: &mut Vec<String>) {
    match (a, b) {
        (Some(Value::Object(left)), Some(Value::Object(right))) => {
            let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
            for key in keys {
                diff(&join(path, key), left.get(key), right.get(key), out);
            }
        }
        (Some(Value::Array(left)), Some(Value::Array(right))) if left.len() == right.len() => {
            for (i, (l, r)) in left.iter().zip(right).enumerate() {
                diff(&format!("{path}[{i}]"), Some(l), Some(r), out);
            }
        }
        (left, right) if left == right => {}
        _ => out.push(if path.is_empty() { "$".to_string() } else { path.to_string() }),
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
