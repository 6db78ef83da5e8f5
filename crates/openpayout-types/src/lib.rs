//! # openpayout-types
//!
//! Shared types, errors, and configuration for the **OpenPayout** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`], [`SettlementId`]
//! - **Input model**: [`RankedEntry`], [`SettlementInput`]
//! - **Output model**: [`SettlementPayout`], [`SettlementResult`]
//! - **Configuration**: [`SplitTable`]
//! - **Errors**: [`PayoutError`] with `PO_ERR_` prefix codes
//! - **Constants**: payout scale, built-in strategy keys, default tables

pub mod config;
pub mod constants;
pub mod entry;
pub mod error;
pub mod ids;
pub mod payout;

// Re-export all primary types at crate root for ergonomic imports:
//   use openpayout_types::{RankedEntry, SettlementInput, SettlementResult, ...};

pub use config::*;
pub use entry::*;
pub use error::*;
pub use ids::*;
pub use payout::*;

// Constants are accessed via `openpayout_types::constants::FOO`
// (not re-exported to avoid name collisions).
