//! The settlement strategy capability interface.

use openpayout_types::{SettlementInput, SettlementResult};

/// A settlement allocation policy, identified by a stable string key.
///
/// `settle` is a pure function: same input → same output, no mutation of
/// the input, no side effects. Implementations hold no per-call mutable
/// state, so one instance serves any number of concurrent callers.
///
/// Degenerate inputs (empty entries, zero pool) are valid and produce the
/// output the strategy documents for them, never an error.
pub trait SettlementStrategy: Send + Sync {
    /// Stable key this strategy is registered and resolved under.
    fn key(&self) -> &str;

    /// Compute the payout distribution for one settlement request.
    fn settle(&self, input: &SettlementInput) -> SettlementResult;
}
