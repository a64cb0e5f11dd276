//! # Ledger Representation
//!
//! Typed ledger contract-argument records. Compared with the interchange
//! records:
//!
//! - dates are [`LedgerTime`](crate::domain::value_objects::LedgerTime)
//!   timestamps,
//! - enumerated fields hold ledger literals (`"OcfConvertibleSafe"`),
//! - absent optional fields are explicit `null`,
//! - lists are always present, possibly empty,
//! - tagged unions are raw [`LedgerVariant`] `{tag, value}` pairs, parsed
//!   into native enums by the variant mapper,
//! - a field named `type` is spelled `type_`.
//!
//! Records carry no `object_type`; the ledger identifies the object by the
//! template and payload key it is stored under.

pub mod adjustments;
pub mod common;
pub mod entities;
pub mod mechanism;
pub mod transactions;
pub mod variant;
pub mod vesting;

pub use adjustments::{
    LedgerIssuerAuthorizedSharesAdjustment, LedgerStockClassAuthorizedSharesAdjustment,
    LedgerStockClassConversionRatioAdjustment, LedgerStockClassSplit,
    LedgerStockPlanPoolAdjustment,
};
pub use common::{
    LedgerAddress, LedgerContactInfo, LedgerEmail, LedgerName, LedgerPhone, TAG_AUTHORIZED_ENUM,
    TAG_AUTHORIZED_NUMERIC,
};
pub use entities::{
    LedgerIssuer, LedgerStakeholder, LedgerStockClass, LedgerStockPlan, LedgerValuation,
};
pub use mechanism::{
    LedgerCapitalizationRules, LedgerConversionMechanism, LedgerConversionRight,
    LedgerCustomConversion, LedgerFixedAmountConversion, LedgerInterestRate,
    LedgerNoteConversion, LedgerPercentCapitalizationConversion, LedgerRatioConversion,
    LedgerSafeConversion, LedgerSharePriceBasedConversion, LedgerStockClassConversionRight,
    LedgerTrigger, LedgerValuationBasedConversion,
};
pub use transactions::{
    LedgerAcceptance, LedgerConvertibleCancellation, LedgerConvertibleIssuance,
    LedgerConvertibleTransfer, LedgerEquityCompensationExercise,
    LedgerEquityCompensationIssuance, LedgerQuantityCancellation, LedgerQuantityTransfer,
    LedgerStockIssuance, LedgerStockRepurchase, LedgerTerminationWindow, LedgerWarrantExercise,
    LedgerWarrantIssuance, LedgerWarrantRetraction,
};
pub use variant::LedgerVariant;
pub use vesting::{
    LedgerAbsoluteTrigger, LedgerRelativeTrigger, LedgerVestingCondition, LedgerVestingPeriod,
    LedgerVestingPortion, LedgerVestingTerms, LedgerVestingTrigger,
};
