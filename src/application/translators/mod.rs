//! # Object Translators
//!
//! One [`LedgerTranslator`] implementation per interchange record type.
//! `to_ledger` validates mandatory fields, scale-checks numerics, converts
//! dates to ledger time and maps nested unions; `from_ledger` is the
//! inverse and reconstructs the `object_type` discriminator.
//!
//! Translators are pure: no I/O, no shared state. Configuration arrives in
//! a [`TranslationContext`] passed to every call.
//!
//! [`translate_to_ledger`] and [`translate_from_ledger`] dispatch on an
//! [`ObjectType`] for callers holding untyped JSON.
//!
//! # Examples
//!
//! ```
//! use ocf_ledger::application::translators::{LedgerTranslator, TranslationContext};
//! use ocf_ledger::domain::interchange::Acceptance;
//! use ocf_ledger::domain::value_objects::ObjectType;
//!
//! let acceptance: Acceptance = serde_json::from_value(serde_json::json!({
//!     "object_type": "TX_STOCK_ACCEPTANCE",
//!     "id": "acc-1",
//!     "date": "2024-03-01",
//!     "security_id": "sec-1"
//! }))
//! .unwrap();
//!
//! let ctx = TranslationContext::default();
//! let ledger = acceptance.to_ledger(&ctx).unwrap();
//! assert_eq!(ledger.date.to_string(), "2024-03-01T00:00:00.000Z");
//!
//! let back = Acceptance::from_ledger(&ledger, ObjectType::TxStockAcceptance, &ctx).unwrap();
//! assert_eq!(back, acceptance);
//! ```

mod adjustments;
mod dispatch;
mod entities;
mod issuances;
mod lifecycle;
mod vesting;

pub use dispatch::{translate_from_ledger, translate_to_ledger};

use crate::application::trigger_mapper::{TriggerMapper, TriggerMode};
use crate::application::variant_mapper::{VariantMapper, DEFAULT_LEDGER_SCALE};
use crate::domain::errors::{TranslationError, TranslationResult};
use crate::domain::value_objects::{LedgerTime, ObjectType, OcfDate};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Settings threaded through every translation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationContext {
    /// Handling of triggers without a conversion right.
    pub trigger_mode: TriggerMode,
    /// Fractional digits a ledger numeric can hold.
    pub max_ledger_scale: u32,
}

impl Default for TranslationContext {
    fn default() -> Self {
        Self {
            trigger_mode: TriggerMode::Strict,
            max_ledger_scale: DEFAULT_LEDGER_SCALE,
        }
    }
}

impl TranslationContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(trigger_mode: TriggerMode, max_ledger_scale: u32) -> Self {
        Self {
            trigger_mode,
            max_ledger_scale,
        }
    }

    /// Variant mapper configured for this context.
    #[must_use]
    pub const fn variants(&self) -> VariantMapper {
        VariantMapper::new(self.max_ledger_scale)
    }

    /// Trigger mapper configured for this context.
    #[must_use]
    pub const fn triggers(&self) -> TriggerMapper {
        TriggerMapper::new(self.trigger_mode, self.variants())
    }
}

/// A record with a ledger counterpart.
pub trait LedgerTranslator: Sized + Serialize + DeserializeOwned {
    /// The ledger record.
    type Ledger: Serialize + DeserializeOwned;

    /// Object types this record shape carries.
    const OBJECT_TYPES: &'static [ObjectType];

    /// The record's `object_type` discriminator.
    fn object_type(&self) -> ObjectType;

    /// Translates to the ledger record.
    ///
    /// # Errors
    ///
    /// Returns a [`TranslationError`] naming the first offending field.
    fn to_ledger(&self, ctx: &TranslationContext) -> TranslationResult<Self::Ledger>;

    /// Translates from the ledger record, stamping `object_type`.
    ///
    /// # Errors
    ///
    /// Returns a [`TranslationError`] naming the first offending field.
    fn from_ledger(
        ledger: &Self::Ledger,
        object_type: ObjectType,
        ctx: &TranslationContext,
    ) -> TranslationResult<Self>;
}

/// Checks that `T` handles `object_type`.
///
/// # Errors
///
/// Returns `ValidationError` otherwise.
pub fn ensure_object_type<T: LedgerTranslator>(object_type: ObjectType) -> TranslationResult<()> {
    if T::OBJECT_TYPES.contains(&object_type) {
        Ok(())
    } else {
        Err(TranslationError::validation(format!(
            "object_type {object_type} is not handled by this translator (expected one of {})",
            T::OBJECT_TYPES
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}

fn ledger_time(date: OcfDate) -> LedgerTime {
    LedgerTime::from(date)
}

fn ledger_time_opt(date: Option<OcfDate>) -> Option<LedgerTime> {
    date.map(LedgerTime::from)
}

fn ocf_date_opt(time: Option<LedgerTime>) -> Option<OcfDate> {
    time.map(OcfDate::from)
}
