//! # Deprecation Report
//!
//! Aggregate statistics over a corpus of interchange objects. The JSON
//! shape (camelCase keys, sorted maps) is consumed by external dashboards
//! and must stay stable.

use super::registry::{DeprecatedFieldMapping, DeprecationType};
use crate::domain::value_objects::ObjectType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One object submitted to a batch check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    /// Object type to check the data as.
    pub entity_type: ObjectType,
    /// The interchange object.
    pub data: Value,
    /// Caller's identifier for the object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl BatchItem {
    /// Creates an item without an identifier.
    #[must_use]
    pub fn new(entity_type: ObjectType, data: Value) -> Self {
        Self {
            entity_type,
            data,
            id: None,
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Options for a batch check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// List every affected item in the report.
    pub include_affected_items: bool,
}

/// Corpus-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Items checked.
    pub total_items: usize,
    /// Items with at least one deprecated field.
    pub items_with_deprecated_fields: usize,
    /// Share of affected items, in percent, two decimals.
    pub percentage_with_deprecated_fields: f64,
    /// Deprecated fields found across all items.
    pub total_deprecated_field_usages: usize,
}

/// Totals for one object type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectTypeStats {
    /// Items of this type.
    pub total: usize,
    /// Items of this type with deprecated fields.
    pub with_deprecated_fields: usize,
    /// Usage count per deprecated field.
    pub fields: BTreeMap<String, usize>,
}

/// Totals for one deprecated field.
///
/// A field name can be registered with different migrations on different
/// object types. The replacement and kind then describe the mapping of the
/// first entry in `object_types`, so the report does not depend on corpus
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStats {
    /// Items using the field.
    pub count: usize,
    /// Replacement field.
    pub replacement_field: Option<String>,
    /// Migration kind.
    pub deprecation_type: DeprecationType,
    /// Object types the field was seen on, sorted.
    pub object_types: Vec<String>,
}

/// An item that uses deprecated fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffectedItem {
    /// Caller's identifier, or the object's own `id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Object type the item was checked as.
    pub object_type: String,
    /// Deprecated fields present on the item.
    pub fields: Vec<String>,
}

/// Result of a batch check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationReport {
    /// Corpus-wide totals.
    pub summary: ReportSummary,
    /// Totals per object type.
    pub by_object_type: BTreeMap<String, ObjectTypeStats>,
    /// Totals per deprecated field.
    pub by_field: BTreeMap<String, FieldStats>,
    /// Affected items, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_items: Option<Vec<AffectedItem>>,
}

/// Accumulates per-item findings into a [`DeprecationReport`].
#[derive(Debug, Default)]
pub(crate) struct ReportBuilder {
    report: DeprecationReport,
    affected: Vec<AffectedItem>,
    include_affected_items: bool,
}

impl ReportBuilder {
    pub(crate) fn new(options: BatchOptions) -> Self {
        Self {
            include_affected_items: options.include_affected_items,
            ..Self::default()
        }
    }

    /// Records one item and the mappings whose deprecated field it uses.
    pub(crate) fn record(
        &mut self,
        object_type: ObjectType,
        id: Option<String>,
        used: &[DeprecatedFieldMapping],
    ) {
        let type_key = object_type.as_str().to_string();
        self.report.summary.total_items += 1;
        let stats = self.report.by_object_type.entry(type_key.clone()).or_default();
        stats.total += 1;

        if used.is_empty() {
            return;
        }

        stats.with_deprecated_fields += 1;
        self.report.summary.items_with_deprecated_fields += 1;
        self.report.summary.total_deprecated_field_usages += used.len();

        for mapping in used {
            *stats.fields.entry(mapping.deprecated_field.clone()).or_default() += 1;

            let field = self
                .report
                .by_field
                .entry(mapping.deprecated_field.clone())
                .or_insert_with(|| FieldStats {
                    count: 0,
                    replacement_field: mapping.replacement_field.clone(),
                    deprecation_type: mapping.deprecation_type,
                    object_types: Vec::new(),
                });
            field.count += 1;
            if let Err(position) = field.object_types.binary_search(&type_key) {
                field.object_types.insert(position, type_key.clone());
                if position == 0 {
                    field.replacement_field.clone_from(&mapping.replacement_field);
                    field.deprecation_type = mapping.deprecation_type;
                }
            }
        }

        if self.include_affected_items {
            self.affected.push(AffectedItem {
                id,
                object_type: type_key,
                fields: used.iter().map(|m| m.deprecated_field.clone()).collect(),
            });
        }
    }

    pub(crate) fn finish(mut self) -> DeprecationReport {
        let summary = &mut self.report.summary;
        summary.percentage_with_deprecated_fields =
            percentage(summary.items_with_deprecated_fields, summary.total_items);
        if self.include_affected_items {
            self.report.affected_items = Some(self.affected);
        }
        self.report
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 * 100.0 / total as f64;
    (raw * 100.0).round() / 100.0
}
