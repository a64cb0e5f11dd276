//! # Normalization Engine
//!
//! Applies the registry's deprecated-field migrations to interchange
//! objects held as JSON.
//!
//! Each mapping is evaluated independently against the input:
//!
//! | deprecated | current | output | used deprecated | warning |
//! |------------|---------|--------|-----------------|---------|
//! | absent | any | unchanged | no | no |
//! | present | absent | migrated | yes | yes |
//! | present | present | current kept, deprecated dropped | no | yes |
//!
//! `null` counts as absent on both sides, and so does an empty list on the
//! current side. The input is never mutated; every call builds a fresh
//! result.

use super::registry::{DeprecatedFieldMapping, DeprecationRegistry, DeprecationType};
use super::report::{BatchItem, BatchOptions, DeprecationReport, ReportBuilder};
use super::warnings::{DeprecationWarning, TracingSink, WarningSink};
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::value_objects::ObjectType;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// Forward warnings to the sink. Results list warnings either way.
    pub warnings_enabled: bool,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            warnings_enabled: !cfg!(test),
        }
    }
}

/// Outcome of evaluating one mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldNormalization {
    /// Value for the replacement field; `None` leaves it untouched.
    pub value: Option<Value>,
    /// Whether the value came from the deprecated field.
    pub used_deprecated_field: bool,
    /// Warnings raised for this field.
    pub warnings: Vec<String>,
}

/// A normalized object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    /// Object type the mappings were taken from.
    pub object_type: ObjectType,
    /// Normalized object.
    pub data: Value,
    /// Whether `data` differs from the input.
    pub normalized: bool,
    /// Deprecated fields whose values were migrated.
    pub normalized_fields: Vec<String>,
    /// Warnings raised, in mapping order.
    pub warnings: Vec<String>,
}

/// Deprecated fields found on an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationCheck {
    /// Object type the mappings were taken from.
    pub object_type: ObjectType,
    /// Deprecated fields present, in mapping order.
    pub deprecated_fields: Vec<String>,
}

impl DeprecationCheck {
    /// Whether any deprecated field is present.
    #[must_use]
    pub fn has_deprecated_fields(&self) -> bool {
        !self.deprecated_fields.is_empty()
    }
}

/// Applies deprecated-field migrations.
#[derive(Debug, Clone)]
pub struct NormalizationEngine {
    registry: Arc<DeprecationRegistry>,
    options: NormalizationOptions,
    sink: Arc<dyn WarningSink>,
}

impl Default for NormalizationEngine {
    fn default() -> Self {
        Self::new(
            Arc::new(DeprecationRegistry::with_defaults()),
            NormalizationOptions::default(),
            Arc::new(TracingSink),
        )
    }
}

impl NormalizationEngine {
    /// Creates an engine.
    #[must_use]
    pub fn new(
        registry: Arc<DeprecationRegistry>,
        options: NormalizationOptions,
        sink: Arc<dyn WarningSink>,
    ) -> Self {
        Self {
            registry,
            options,
            sink,
        }
    }

    /// The registry mappings are read from.
    #[must_use]
    pub fn registry(&self) -> &Arc<DeprecationRegistry> {
        &self.registry
    }

    /// Engine settings.
    #[must_use]
    pub const fn options(&self) -> NormalizationOptions {
        self.options
    }

    /// Normalizes `data`.
    ///
    /// An `object_type` key on `data` naming a known type selects the
    /// mappings; `object_type` is the fallback. Non-object input is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocf_ledger::application::normalization::NormalizationEngine;
    /// use ocf_ledger::domain::value_objects::ObjectType;
    /// use serde_json::json;
    ///
    /// let engine = NormalizationEngine::default();
    /// let result = engine.normalize(ObjectType::StockPlan, &json!({"stock_class_id": "sc-1"}));
    /// assert_eq!(result.data, json!({"stock_class_ids": ["sc-1"]}));
    /// assert_eq!(result.normalized_fields, vec!["stock_class_id"]);
    /// ```
    #[must_use]
    pub fn normalize(&self, object_type: ObjectType, data: &Value) -> NormalizationResult {
        let kind = effective_type(object_type, data);
        let Value::Object(input) = data else {
            return NormalizationResult {
                object_type: kind,
                data: data.clone(),
                normalized: false,
                normalized_fields: Vec::new(),
                warnings: Vec::new(),
            };
        };

        let mut output = input.clone();
        let mut normalized_fields = Vec::new();
        let mut warnings = Vec::new();

        for mapping in self.registry.mappings_for(kind) {
            let field = Self::normalize_field(&mapping, input);
            output.remove(&mapping.deprecated_field);
            if let (Some(replacement), Some(value)) = (mapping.replacement(), field.value) {
                output.insert(replacement.to_string(), value);
            }
            if field.used_deprecated_field {
                normalized_fields.push(mapping.deprecated_field.clone());
            }
            for message in field.warnings {
                self.emit(kind, &mapping, &message);
                warnings.push(message);
            }
        }

        let normalized = &output != input;
        NormalizationResult {
            object_type: kind,
            data: Value::Object(output),
            normalized,
            normalized_fields,
            warnings,
        }
    }

    /// Evaluates one mapping against an object.
    #[must_use]
    pub fn normalize_field(
        mapping: &DeprecatedFieldMapping,
        data: &Map<String, Value>,
    ) -> FieldNormalization {
        let deprecated = data.get(&mapping.deprecated_field).filter(|v| !v.is_null());
        let current = mapping
            .replacement()
            .and_then(|field| data.get(field))
            .filter(|v| is_present(v));

        match (deprecated, current) {
            (None, current) => FieldNormalization {
                value: current.cloned(),
                used_deprecated_field: false,
                warnings: Vec::new(),
            },
            (Some(_), Some(current)) => FieldNormalization {
                value: Some(current.clone()),
                used_deprecated_field: false,
                warnings: vec![format!(
                    "Deprecated field '{}' ignored because '{}' is present",
                    mapping.deprecated_field,
                    mapping.replacement().unwrap_or_default()
                )],
            },
            (Some(legacy), None) => migrate(mapping, legacy),
        }
    }

    /// Lists the deprecated fields present on `data`.
    #[must_use]
    pub fn check(&self, object_type: ObjectType, data: &Value) -> DeprecationCheck {
        let kind = effective_type(object_type, data);
        DeprecationCheck {
            object_type: kind,
            deprecated_fields: self
                .used_mappings(kind, data)
                .into_iter()
                .map(|m| m.deprecated_field)
                .collect(),
        }
    }

    /// Reports deprecated-field usage across `items`.
    ///
    /// Reporting raises no warnings.
    #[must_use]
    pub fn check_batch(&self, items: &[BatchItem], options: BatchOptions) -> DeprecationReport {
        let mut builder = ReportBuilder::new(options);
        for item in items {
            let kind = effective_type(item.entity_type, &item.data);
            let id = item.id.clone().or_else(|| {
                item.data
                    .get("id")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            });
            builder.record(kind, id, &self.used_mappings(kind, &item.data));
        }
        let report = builder.finish();
        debug!(
            total = report.summary.total_items,
            affected = report.summary.items_with_deprecated_fields,
            "Deprecation batch checked"
        );
        report
    }

    /// Fails if `data` carries any deprecated field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` listing every deprecated field present.
    pub fn assert_no_deprecated_fields(
        &self,
        object_type: ObjectType,
        data: &Value,
    ) -> TranslationResult<()> {
        let check = self.check(object_type, data);
        if check.has_deprecated_fields() {
            return Err(TranslationError::validation(format!(
                "{} uses deprecated fields: {}",
                check.object_type,
                check.deprecated_fields.join(", ")
            )));
        }
        Ok(())
    }

    fn used_mappings(&self, kind: ObjectType, data: &Value) -> Vec<DeprecatedFieldMapping> {
        let Value::Object(fields) = data else {
            return Vec::new();
        };
        self.registry
            .mappings_for(kind)
            .into_iter()
            .filter(|m| fields.get(&m.deprecated_field).is_some_and(|v| !v.is_null()))
            .collect()
    }

    fn emit(&self, object_type: ObjectType, mapping: &DeprecatedFieldMapping, message: &str) {
        if !self.options.warnings_enabled {
            return;
        }
        self.sink.emit(&DeprecationWarning {
            object_type,
            field: mapping.deprecated_field.clone(),
            replacement: mapping.replacement_field.clone(),
            message: message.to_string(),
        });
    }
}

/// Object type named by the data's own `object_type` key, else `fallback`.
fn effective_type(fallback: ObjectType, data: &Value) -> ObjectType {
    data.get("object_type")
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        _ => true,
    }
}

fn migrate(mapping: &DeprecatedFieldMapping, legacy: &Value) -> FieldNormalization {
    let field = &mapping.deprecated_field;
    let replacement = mapping.replacement().unwrap_or_default();
    let mut warnings = Vec::with_capacity(2);

    let value = match mapping.deprecation_type {
        DeprecationType::SingularToArray => {
            warnings.push(format!(
                "Deprecated field '{field}' converted to array field '{replacement}'"
            ));
            Some(match legacy {
                Value::Array(_) => legacy.clone(),
                other => Value::Array(vec![other.clone()]),
            })
        }
        DeprecationType::Renamed => {
            warnings.push(format!("Deprecated field '{field}' renamed to '{replacement}'"));
            Some(legacy.clone())
        }
        DeprecationType::ValueMapped => {
            warnings.push(format!("Deprecated field '{field}' mapped to '{replacement}'"));
            let mapped = legacy
                .as_str()
                .and_then(|literal| mapping.value_map.as_ref()?.get(literal));
            Some(match mapped {
                Some(target) => Value::String(target.clone()),
                None => {
                    warnings.push(format!(
                        "Value {legacy} of deprecated field '{field}' has no mapping; \
                         copied unchanged to '{replacement}'"
                    ));
                    legacy.clone()
                }
            })
        }
        DeprecationType::Removed => {
            warnings.push(format!("Deprecated field '{field}' has been removed and was dropped"));
            None
        }
    };

    FieldNormalization {
        value,
        used_deprecated_field: true,
        warnings,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::normalization::warnings::CollectingSink;
    use serde_json::json;

    fn engine_with(sink: Arc<CollectingSink>) -> NormalizationEngine {
        NormalizationEngine::new(
            Arc::new(DeprecationRegistry::with_defaults()),
            NormalizationOptions {
                warnings_enabled: true,
            },
            sink,
        )
    }

    mod state_machine {
        use super::*;

        #[test]
        fn deprecated_only_migrates_and_warns() {
            let sink = Arc::new(CollectingSink::new());
            let result = engine_with(Arc::clone(&sink))
                .normalize(ObjectType::StockPlan, &json!({"id": "p-1", "stock_class_id": "sc-1"}));
            assert_eq!(result.data, json!({"id": "p-1", "stock_class_ids": ["sc-1"]}));
            assert!(result.normalized);
            assert_eq!(result.warnings.len(), 1);
            assert_eq!(sink.len(), 1);
        }

        #[test]
        fn current_wins_when_both_present() {
            let result = NormalizationEngine::default().normalize(
                ObjectType::StockPlan,
                &json!({"stock_class_id": "sc-1", "stock_class_ids": ["sc-2"]}),
            );
            assert_eq!(result.data, json!({"stock_class_ids": ["sc-2"]}));
            assert!(result.normalized_fields.is_empty());
            assert_eq!(result.warnings.len(), 1);
        }

        #[test]
        fn current_only_passes_through() {
            let input = json!({"stock_class_ids": ["sc-2"]});
            let result = NormalizationEngine::default().normalize(ObjectType::StockPlan, &input);
            assert_eq!(result.data, input);
            assert!(!result.normalized);
            assert!(result.warnings.is_empty());
        }

        #[test]
        fn empty_current_list_counts_as_absent() {
            let result = NormalizationEngine::default().normalize(
                ObjectType::StockPlan,
                &json!({"stock_class_id": "sc-1", "stock_class_ids": []}),
            );
            assert_eq!(result.data, json!({"stock_class_ids": ["sc-1"]}));
        }

        #[test]
        fn null_deprecated_value_is_dropped_silently() {
            let result = NormalizationEngine::default()
                .normalize(ObjectType::StockClass, &json!({"votes": null, "votes_per_share": "1"}));
            assert_eq!(result.data, json!({"votes_per_share": "1"}));
            assert!(result.warnings.is_empty());
        }
    }

    mod migrations {
        use super::*;

        #[test]
        fn value_map_translates_known_literal() {
            let result = NormalizationEngine::default().normalize(
                ObjectType::TxEquityCompensationIssuance,
                &json!({"option_grant_type": "ISO"}),
            );
            assert_eq!(result.data, json!({"compensation_type": "OPTION_ISO"}));
        }

        #[test]
        fn value_map_copies_unknown_literal_with_extra_warning() {
            let result = NormalizationEngine::default().normalize(
                ObjectType::TxEquityCompensationIssuance,
                &json!({"option_grant_type": "RSU"}),
            );
            assert_eq!(result.data, json!({"compensation_type": "RSU"}));
            assert_eq!(result.warnings.len(), 2);
            assert!(result.warnings[1].contains("\"RSU\""));
        }

        #[test]
        fn removed_field_is_dropped() {
            let result = NormalizationEngine::default()
                .normalize(ObjectType::Issuer, &json!({"id": "i-1", "issuer_type": "CORP"}));
            assert_eq!(result.data, json!({"id": "i-1"}));
            assert_eq!(result.normalized_fields, vec!["issuer_type"]);
        }

        #[test]
        fn singular_array_value_is_not_double_wrapped() {
            let result = NormalizationEngine::default().normalize(
                ObjectType::Stakeholder,
                &json!({"current_relationship": ["EMPLOYEE"]}),
            );
            assert_eq!(result.data, json!({"current_relationships": ["EMPLOYEE"]}));
        }
    }

    #[test]
    fn embedded_object_type_takes_precedence() {
        let result = NormalizationEngine::default().normalize(
            ObjectType::Issuer,
            &json!({"object_type": "STOCK_CLASS", "votes": "10"}),
        );
        assert_eq!(result.object_type, ObjectType::StockClass);
        assert_eq!(result.data, json!({"object_type": "STOCK_CLASS", "votes_per_share": "10"}));
    }

    #[test]
    fn disabled_warnings_still_reported() {
        let sink = Arc::new(CollectingSink::new());
        let engine = NormalizationEngine::new(
            Arc::new(DeprecationRegistry::with_defaults()),
            NormalizationOptions {
                warnings_enabled: false,
            },
            sink.clone(),
        );
        let result = engine.normalize(ObjectType::StockClass, &json!({"votes": "1"}));
        assert_eq!(result.warnings.len(), 1);
        assert!(sink.is_empty());
    }

    #[test]
    fn strict_assertion_lists_every_field() {
        let engine = NormalizationEngine::default();
        assert!(engine
            .assert_no_deprecated_fields(ObjectType::Issuer, &json!({"id": "i-1"}))
            .is_ok());

        let registry = engine.registry();
        registry.register(ObjectType::Issuer, DeprecatedFieldMapping::removed("legacy_code"));
        let err = engine
            .assert_no_deprecated_fields(
                ObjectType::Issuer,
                &json!({"issuer_type": "CORP", "legacy_code": "X"}),
            )
            .unwrap_err();
        assert_eq!(
            err,
            TranslationError::validation("ISSUER uses deprecated fields: issuer_type, legacy_code")
        );
    }

    #[test]
    fn batch_report_counts_by_type_and_field() {
        let items = vec![
            BatchItem::new(ObjectType::StockPlan, json!({"id": "p-1", "stock_class_id": "sc-1"})),
            BatchItem::new(
                ObjectType::StockPlan,
                json!({"id": "p-2", "stock_class_ids": ["sc-1"]}),
            ),
            BatchItem::new(ObjectType::StockClass, json!({"votes": "1"})).with_id("sc-9"),
        ];
        let report = NormalizationEngine::default().check_batch(
            &items,
            BatchOptions {
                include_affected_items: true,
            },
        );
        assert_eq!(report.summary.total_items, 3);
        assert_eq!(report.summary.items_with_deprecated_fields, 2);
        assert_eq!(report.summary.percentage_with_deprecated_fields, 66.67);
        assert_eq!(report.by_object_type["STOCK_PLAN"].total, 2);
        assert_eq!(report.by_field["votes"].replacement_field.as_deref(), Some("votes_per_share"));

        let affected = report.affected_items.unwrap();
        assert_eq!(affected[0].id.as_deref(), Some("p-1"));
        assert_eq!(affected[1].id.as_deref(), Some("sc-9"));
    }
}
