//! # Infrastructure Layer
//!
//! Adapters for the systems around the translator.
//!
//! ## Ledger
//!
//! Decoding of stored contract payloads and encoding of choice arguments,
//! see [`ledger`].

pub mod ledger;
