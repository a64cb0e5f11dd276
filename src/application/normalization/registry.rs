//! # Deprecation Registry
//!
//! Declarative table of deprecated interchange fields per object type.
//!
//! The table is filled once at start-up ([`DeprecationRegistry::with_defaults`]
//! plus any [`register`](DeprecationRegistry::register) calls) and then only
//! read. Registration is idempotent on `(object_type, deprecated_field)`.
//!
//! # Thread Safety
//!
//! The registry is `Send + Sync` and is meant to be shared behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::application::normalization::{DeprecatedFieldMapping, DeprecationRegistry};
//! use ocf_ledger::domain::value_objects::ObjectType;
//!
//! let registry = DeprecationRegistry::with_defaults();
//! assert!(registry.is_deprecated(ObjectType::StockPlan, "stock_class_id"));
//!
//! let added = registry.register(
//!     ObjectType::StockPlan,
//!     DeprecatedFieldMapping::singular_to_array("stock_class_id", "stock_class_ids"),
//! );
//! assert!(!added);
//! ```

use crate::domain::value_objects::ObjectType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{PoisonError, RwLock};

/// How a deprecated field migrates to its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeprecationType {
    /// A scalar becomes the single element of a list field.
    SingularToArray,
    /// The value moves to a new key unchanged.
    Renamed,
    /// The value moves to a new key through a literal table.
    ValueMapped,
    /// The field is dropped.
    Removed,
}

impl DeprecationType {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SingularToArray => "singular_to_array",
            Self::Renamed => "renamed",
            Self::ValueMapped => "value_mapped",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for DeprecationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One deprecated field and its migration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecatedFieldMapping {
    /// Legacy key.
    pub deprecated_field: String,
    /// Current key; `None` for removed fields.
    #[serde(default)]
    pub replacement_field: Option<String>,
    /// Migration kind.
    pub deprecation_type: DeprecationType,
    /// Literal table for value-mapped fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_map: Option<BTreeMap<String, String>>,
}

impl DeprecatedFieldMapping {
    /// A scalar field replaced by a list field.
    #[must_use]
    pub fn singular_to_array(
        deprecated: impl Into<String>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            deprecated_field: deprecated.into(),
            replacement_field: Some(replacement.into()),
            deprecation_type: DeprecationType::SingularToArray,
            value_map: None,
        }
    }

    /// A renamed field.
    #[must_use]
    pub fn renamed(deprecated: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            deprecated_field: deprecated.into(),
            replacement_field: Some(replacement.into()),
            deprecation_type: DeprecationType::Renamed,
            value_map: None,
        }
    }

    /// A renamed field whose literals are translated.
    #[must_use]
    pub fn value_mapped<'a>(
        deprecated: impl Into<String>,
        replacement: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            deprecated_field: deprecated.into(),
            replacement_field: Some(replacement.into()),
            deprecation_type: DeprecationType::ValueMapped,
            value_map: Some(
                pairs
                    .into_iter()
                    .map(|(from, to)| (from.to_string(), to.to_string()))
                    .collect(),
            ),
        }
    }

    /// A field that is dropped without replacement.
    #[must_use]
    pub fn removed(deprecated: impl Into<String>) -> Self {
        Self {
            deprecated_field: deprecated.into(),
            replacement_field: None,
            deprecation_type: DeprecationType::Removed,
            value_map: None,
        }
    }

    /// Replacement key, or `None` for removed fields.
    #[must_use]
    pub fn replacement(&self) -> Option<&str> {
        self.replacement_field.as_deref()
    }
}

/// Deprecated-field mappings by object type.
#[derive(Debug, Default)]
pub struct DeprecationRegistry {
    mappings: RwLock<BTreeMap<ObjectType, Vec<DeprecatedFieldMapping>>>,
}

impl DeprecationRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in migrations.
    #[must_use]
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        for (object_type, mapping) in default_mappings() {
            registry.register(object_type, mapping);
        }
        registry
    }

    /// Adds a mapping. Returns `false` if `object_type` already has one
    /// for the same deprecated field.
    pub fn register(&self, object_type: ObjectType, mapping: DeprecatedFieldMapping) -> bool {
        let mut table = self.mappings.write().unwrap_or_else(PoisonError::into_inner);
        let entries = table.entry(object_type).or_default();
        if entries
            .iter()
            .any(|existing| existing.deprecated_field == mapping.deprecated_field)
        {
            return false;
        }
        entries.push(mapping);
        true
    }

    /// Mappings for `object_type`, in registration order.
    #[must_use]
    pub fn mappings_for(&self, object_type: ObjectType) -> Vec<DeprecatedFieldMapping> {
        self.mappings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&object_type)
            .cloned()
            .unwrap_or_default()
    }

    /// The mapping for one deprecated field.
    #[must_use]
    pub fn mapping(
        &self,
        object_type: ObjectType,
        deprecated_field: &str,
    ) -> Option<DeprecatedFieldMapping> {
        self.mappings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&object_type)
            .and_then(|entries| entries.iter().find(|m| m.deprecated_field == deprecated_field))
            .cloned()
    }

    /// Whether `field` is deprecated on `object_type`.
    #[must_use]
    pub fn is_deprecated(&self, object_type: ObjectType, field: &str) -> bool {
        self.mapping(object_type, field).is_some()
    }

    /// Deprecated field names for `object_type`.
    #[must_use]
    pub fn deprecated_fields(&self, object_type: ObjectType) -> Vec<String> {
        self.mappings_for(object_type)
            .into_iter()
            .map(|m| m.deprecated_field)
            .collect()
    }

    /// Object types with at least one mapping.
    #[must_use]
    pub fn object_types(&self) -> Vec<ObjectType> {
        self.mappings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }
}

fn default_mappings() -> Vec<(ObjectType, DeprecatedFieldMapping)> {
    vec![
        (
            ObjectType::StockPlan,
            DeprecatedFieldMapping::singular_to_array("stock_class_id", "stock_class_ids"),
        ),
        (
            ObjectType::Stakeholder,
            DeprecatedFieldMapping::singular_to_array(
                "current_relationship",
                "current_relationships",
            ),
        ),
        (
            ObjectType::TxEquityCompensationIssuance,
            DeprecatedFieldMapping::value_mapped(
                "option_grant_type",
                "compensation_type",
                [("NSO", "OPTION_NSO"), ("ISO", "OPTION_ISO"), ("INTL", "OPTION")],
            ),
        ),
        (
            ObjectType::StockClass,
            DeprecatedFieldMapping::renamed("votes", "votes_per_share"),
        ),
        (
            ObjectType::TxWarrantIssuance,
            DeprecatedFieldMapping::singular_to_array("exercise_trigger", "exercise_triggers"),
        ),
        (
            ObjectType::TxConvertibleIssuance,
            DeprecatedFieldMapping::singular_to_array("conversion_trigger", "conversion_triggers"),
        ),
        (ObjectType::Issuer, DeprecatedFieldMapping::removed("issuer_type")),
    ]
}
