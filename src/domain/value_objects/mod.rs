//! # Value Objects
//!
//! Immutable types with validation and canonical textual forms.
//!
//! ## Numeric Types
//!
//! - [`Numeric`]: Canonical decimal string
//! - [`Monetary`]: Amount plus currency code
//! - [`Ratio`]: Numerator/denominator pair
//!
//! ## Dates
//!
//! - [`OcfDate`]: `YYYY-MM-DD` calendar date
//! - [`LedgerTime`]: The same day as a midnight-UTC ledger timestamp
//!
//! ## Discriminators
//!
//! - [`ObjectType`]: Interchange `object_type` and its ledger payload key
//! - [`enums`]: Closed enumerations with interchange and ledger literals

pub mod enums;
pub mod monetary;
pub mod numeric;
pub mod object_type;
pub mod ocf_date;

#[cfg(test)]
mod tests;

pub use enums::{
    AccrualPeriod, AddressType, AllocationType, AuthorizedSharesSentinel, CompensationType,
    CompoundingType, ConversionRightType, ConversionTiming, ConvertibleType, DayCountConvention,
    EmailType, InterestPayout, LedgerLiteral, PhoneType, RoundingType, StakeholderRelationship,
    StakeholderType, StockClassMechanismKind, StockClassType, StockPlanCancellationBehavior,
    TerminationWindowReason, TriggerType, ValuationType, VestingPeriodUnit, WindowPeriodUnit,
};
pub use monetary::{Monetary, Ratio};
pub use numeric::Numeric;
pub use object_type::ObjectType;
pub use ocf_date::{LedgerTime, OcfDate};
