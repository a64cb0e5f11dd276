//! # Ledger Boundary
//!
//! Shape checks for inbound contract payloads and the outbound choice
//! argument envelope. Submission and event retrieval live with the
//! transport collaborator, outside this crate.

pub mod payload;

pub use payload::{choice_argument, parse_ledger_payload, PayloadShape, ValidatedPayload};
