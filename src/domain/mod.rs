//! # Domain Layer
//!
//! The two schemas this crate translates between, and the values they share.
//!
//! This layer contains:
//! - **Interchange**: Open Cap Table Format records (`object_type`-discriminated)
//! - **Ledger**: Contract-argument records as the ledger stores them
//! - **Value Objects**: Canonical numerics, dates, and closed enumerations
//! - **Errors**: The translation error taxonomy

pub mod errors;
pub mod interchange;
pub mod ledger;
pub mod value_objects;
