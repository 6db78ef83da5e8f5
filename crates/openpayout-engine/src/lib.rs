//! # openpayout-engine
//!
//! The settlement engine: converts a ranked list of contest participants and
//! a prize pool into a final, conserved set of payouts.
//!
//! ## Architecture
//!
//! The engine is a pure computational library. A host hands it a
//! [`SettlementInput`](openpayout_types::SettlementInput) plus a strategy
//! key; the [`SettlementStrategyRegistry`] resolves the key; the strategy's
//! `settle` call returns a
//! [`SettlementResult`](openpayout_types::SettlementResult). No component
//! retains state across calls, there is no I/O, and nothing blocks.
//!
//! ## Built-in strategies
//!
//! - [`WinnerTakeAll`] (`winner_take_all`): the whole pool to the minimum
//!   rank, split evenly across ties.
//! - [`TopNSplit`] (`top_n_split`): a percentage table over the top N
//!   leaderboard positions, with tie groups pooling their consumed
//!   positions' percentages and missing positions renormalized away.
//!
//! ## Concurrency
//!
//! Strategies are stateless (`Send + Sync`) and may be called from any
//! number of threads concurrently. The registry is the only stateful
//! object: sharing one across threads while calling `register` requires
//! external synchronization by the caller.

pub mod allocation;
pub mod conservation;
pub mod registry;
pub mod strategy;
pub mod top_n_split;
pub mod winner_take_all;

pub use allocation::allocate;
pub use registry::SettlementStrategyRegistry;
pub use strategy::SettlementStrategy;
pub use top_n_split::TopNSplit;
pub use winner_take_all::WinnerTakeAll;
