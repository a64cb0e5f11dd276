//! # Deprecation Warning Sinks
//!
//! The engine never prints. Every deprecation warning is handed to a
//! [`WarningSink`] chosen by the caller, and is also returned in the
//! normalization result.

use crate::domain::value_objects::ObjectType;
use serde::Serialize;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// A structured deprecation warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationWarning {
    /// Object type the field belongs to.
    pub object_type: ObjectType,
    /// Deprecated field.
    pub field: String,
    /// Replacement field, if any.
    pub replacement: Option<String>,
    /// Human-readable message.
    pub message: String,
}

impl fmt::Display for DeprecationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Receives deprecation warnings.
///
/// Implementations must not block; emission is fire-and-forget and cannot
/// affect the normalization result.
pub trait WarningSink: Send + Sync + fmt::Debug {
    /// Handles one warning.
    fn emit(&self, warning: &DeprecationWarning);
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn emit(&self, warning: &DeprecationWarning) {
        warn!(
            object_type = %warning.object_type,
            field = %warning.field,
            replacement = warning.replacement.as_deref().unwrap_or("none"),
            "{}",
            warning.message
        );
    }
}

/// Discards warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl WarningSink for NoopSink {
    fn emit(&self, _warning: &DeprecationWarning) {}
}

/// Keeps warnings in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    warnings: Mutex<Vec<DeprecationWarning>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the warnings collected so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<DeprecationWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the collected warnings.
    pub fn take(&self) -> Vec<DeprecationWarning> {
        std::mem::take(&mut *self.warnings.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of collected warnings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WarningSink for CollectingSink {
    fn emit(&self, warning: &DeprecationWarning) {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(warning.clone());
    }
}
