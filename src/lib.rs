//! # OCF Ledger
//!
//! Bidirectional translation between Open Cap Table Format (OCF) interchange
//! objects and the argument records of a ledger's cap-table contracts, plus
//! tooling for the schema drift between the two.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Domain Layer** (`domain`): Interchange and ledger records, value objects,
//!   and the error taxonomy
//! - **Application Layer** (`application`): Translators, union and trigger
//!   mapping, normalization, and equivalence
//! - **Infrastructure Layer** (`infrastructure`): Ledger payload decoding
//! - **Configuration** (`config`): TOML and environment configuration
//!
//! ## Example
//!
//! ```rust
//! use ocf_ledger::application::{TranslationContext, translate_from_ledger, translate_to_ledger};
//! use ocf_ledger::domain::value_objects::ObjectType;
//! use serde_json::json;
//!
//! let ctx = TranslationContext::default();
//! let issuance = json!({
//!     "id": "iss-1",
//!     "date": "2024-01-15",
//!     "security_id": "sec-1",
//!     "custom_id": "CS-1",
//!     "stakeholder_id": "sh-1",
//!     "stock_class_id": "sc-1",
//!     "share_price": {"amount": "0.10", "currency": "USD"},
//!     "quantity": "1000",
//!     "security_law_exemptions": [],
//! });
//!
//! let ledger = translate_to_ledger(ObjectType::TxStockIssuance, &issuance, &ctx).unwrap();
//! assert_eq!(ledger["date"], "2024-01-15T00:00:00.000Z");
//!
//! let payload = json!({"issuance_data": ledger});
//! let back = translate_from_ledger(ObjectType::TxStockIssuance, &payload, &ctx).unwrap();
//! assert_eq!(back["object_type"], "TX_STOCK_ISSUANCE");
//! assert_eq!(back["share_price"]["amount"], "0.1");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
