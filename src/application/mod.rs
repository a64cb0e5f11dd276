//! # Application Layer
//!
//! Translation between the interchange and ledger schemas, plus the
//! deprecated-field tooling built on top of it.
//!
//! ## Translation
//!
//! - [`canonical`]: Canonical decimal and date forms
//! - [`variant_mapper`]: Tagged unions and enumeration literals
//! - [`trigger_mapper`]: Conversion trigger lists
//! - [`translators`]: One translator per object type, plus dispatch
//!
//! ## Schema Drift
//!
//! - [`normalization`]: Deprecated-field registry, engine and reports
//! - [`equivalence`]: Semantic comparison of interchange objects

pub mod canonical;
pub mod equivalence;
pub mod normalization;
pub mod translators;
pub mod trigger_mapper;
pub mod variant_mapper;

#[cfg(test)]
mod proptest_roundtrip;

pub use equivalence::{CompareOptions, EquivalenceComparator, EquivalenceResult};
pub use normalization::{
    BatchItem, BatchOptions, DeprecationRegistry, DeprecationReport, NormalizationEngine,
    NormalizationOptions, NormalizationResult,
};
pub use translators::{
    LedgerTranslator, TranslationContext, translate_from_ledger, translate_to_ledger,
};
pub use trigger_mapper::{TriggerMapper, TriggerMode};
pub use variant_mapper::VariantMapper;
