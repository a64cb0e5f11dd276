//! # Interchange Representation
//!
//! Typed interchange (OCF) records. Field names match the interchange
//! schema; optional fields are omitted when absent and empty collections
//! are not serialized.
//!
//! Every record carries its `object_type` discriminator. Records are plain
//! data: validation beyond what serde enforces happens in the translators.
//!
//! ## Entities
//!
//! - [`Issuer`], [`Stakeholder`], [`StockClass`], [`StockPlan`],
//!   [`VestingTerms`], [`Valuation`]
//!
//! ## Transactions
//!
//! - Issuances: [`ConvertibleIssuance`], [`WarrantIssuance`],
//!   [`EquityCompensationIssuance`], [`StockIssuance`]
//! - Lifecycle: [`Acceptance`], [`QuantityCancellation`],
//!   [`ConvertibleCancellation`], [`QuantityTransfer`],
//!   [`ConvertibleTransfer`], [`WarrantExercise`],
//!   [`EquityCompensationExercise`], [`WarrantRetraction`],
//!   [`StockRepurchase`]
//! - Adjustments: see [`adjustments`]
//!
//! ## Polymorphic Sub-structures
//!
//! - [`ConversionMechanism`], [`ConversionRight`], [`ConversionTrigger`]
//! - [`StockClassConversionRight`], [`VestingTrigger`], [`AuthorizedShares`]

pub mod adjustments;
pub mod common;
pub mod entities;
pub mod mechanism;
pub mod transactions;
pub mod trigger;
pub mod vesting;

pub use adjustments::{
    IssuerAuthorizedSharesAdjustment, StockClassAuthorizedSharesAdjustment,
    StockClassConversionRatioAdjustment, StockClassSplit, StockPlanPoolAdjustment,
};
pub use common::{
    Address, AuthorizedShares, CapitalizationDefinitionRules, ContactInfo, Email, InterestRate,
    Name, Phone, SecurityExemption, TaxId,
};
pub use entities::{Issuer, Stakeholder, StockClass, StockPlan, Valuation};
pub use mechanism::{
    ConversionMechanism, ConversionRight, CustomConversion, FixedAmountConversion,
    NoteConversion, PercentCapitalizationConversion, RatioConversion, SafeConversion,
    SharePriceBasedConversion, StockClassConversionMechanism, StockClassConversionRight,
    ValuationBasedConversion,
};
pub use transactions::{
    Acceptance, ConvertibleCancellation, ConvertibleIssuance, ConvertibleTransfer,
    EquityCompensationExercise, EquityCompensationIssuance, QuantityCancellation,
    QuantityTransfer, StockIssuance, StockRepurchase, TerminationWindow, WarrantExercise,
    WarrantIssuance, WarrantRetraction,
};
pub use trigger::ConversionTrigger;
pub use vesting::{VestingCondition, VestingPeriod, VestingPortion, VestingTerms, VestingTrigger};
