#![no_std]

//! Data model, error taxonomy and plumbing shared by the film ledger
//! contracts. Every record here is keyed by a project id handed out by the
//! project registry.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod registry;
pub mod types;

pub use constants::BPS_DENOMINATOR;
