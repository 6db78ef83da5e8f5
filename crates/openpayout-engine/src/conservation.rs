//! Payout conservation invariant checker.
//!
//! Invariant enforced over every non-empty result:
//! ```text
//! Σ payout.amount == input.prize_pool   (exactly, no tolerance)
//! ```
//! plus structural integrity: recipients are unique, appear among the
//! ranked entries, and never carry a negative amount.
//!
//! Strategies already guarantee all of this by construction; the checker is
//! the safety net hosts (and the integration tests) run after settlement.
//! If it ever fails, something has gone catastrophically wrong.

use std::collections::HashSet;

use openpayout_types::{
    ParticipantId, PayoutError, Result, SettlementInput, SettlementResult,
};
use rust_decimal::Decimal;

/// Verify the conservation and integrity invariants of a settlement result
/// against the input that produced it.
///
/// An empty result is always valid: strategies settle empty for inputs
/// where nothing is distributable (no entries, no weighted positions).
///
/// # Errors
/// - [`PayoutError::DuplicateRecipient`] if a participant is paid twice
/// - [`PayoutError::UnknownRecipient`] if a recipient is not a ranked entry
/// - [`PayoutError::NegativePayout`] if any amount is below zero
/// - [`PayoutError::ConservationViolation`] if the total differs from the pool
pub fn verify(input: &SettlementInput, result: &SettlementResult) -> Result<()> {
    let participants: HashSet<&ParticipantId> =
        input.entries.iter().map(|e| &e.user_id).collect();

    let mut seen: HashSet<&ParticipantId> = HashSet::new();
    for payout in &result.payouts {
        if !seen.insert(&payout.user_id) {
            return Err(PayoutError::DuplicateRecipient(payout.user_id.clone()));
        }
        if !participants.contains(&payout.user_id) {
            return Err(PayoutError::UnknownRecipient(payout.user_id.clone()));
        }
        if payout.amount < Decimal::ZERO {
            return Err(PayoutError::NegativePayout {
                user_id: payout.user_id.clone(),
                amount: payout.amount,
            });
        }
    }

    if result.is_empty() {
        return Ok(());
    }

    let paid = result.total_paid();
    if paid != input.prize_pool {
        return Err(PayoutError::ConservationViolation {
            reason: format!(
                "paid {paid} != prize pool {} across {} payouts (strategy {})",
                input.prize_pool,
                result.payouts.len(),
                result.strategy_key,
            ),
        });
    }
    Ok(())
}
