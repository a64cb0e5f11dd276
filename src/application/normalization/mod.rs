//! # Deprecated-Field Normalization
//!
//! Reconciles legacy interchange fields with their current replacements.
//!
//! - [`DeprecationRegistry`]: which fields are deprecated, per object type
//! - [`NormalizationEngine`]: applies the migrations, checks objects and
//!   builds corpus reports
//! - [`WarningSink`]: where deprecation warnings go
//!
//! Deprecated-field usage is a warning. Callers that need enforcement use
//! [`NormalizationEngine::assert_no_deprecated_fields`].

pub mod engine;
pub mod registry;
pub mod report;
pub mod warnings;

pub use engine::{
    DeprecationCheck, FieldNormalization, NormalizationEngine, NormalizationOptions,
    NormalizationResult,
};
pub use registry::{DeprecatedFieldMapping, DeprecationRegistry, DeprecationType};
pub use report::{
    AffectedItem, BatchItem, BatchOptions, DeprecationReport, FieldStats, ObjectTypeStats,
    ReportSummary,
};
pub use warnings::{CollectingSink, DeprecationWarning, NoopSink, TracingSink, WarningSink};
