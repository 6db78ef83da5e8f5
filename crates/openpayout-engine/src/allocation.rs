//! Exact proportional allocation of a decimal pool.
//!
//! The remainder rule (deliberate, see workspace DESIGN notes):
//! 1. Each raw share `pool * w_i / Σw` is floored to [`PAYOUT_SCALE`].
//! 2. The leftover is handed out one minor unit at a time to recipients in
//!    the order the caller supplied them (callers pass recipients in
//!    ascending `(rank, user_id)` order), skipping zero-weight recipients.
//! 3. Any residue finer than the minor unit (pool given at a finer scale)
//!    goes to the first recipient.
//!
//! The shares therefore sum to `pool` exactly whenever any weight is
//! positive: conservation holds with zero tolerance.
//!
//! [`PAYOUT_SCALE`]: openpayout_types::constants::PAYOUT_SCALE

use openpayout_types::constants::PAYOUT_SCALE;
use rust_decimal::{Decimal, RoundingStrategy};

/// Split `pool` across recipients proportionally to `weights`.
///
/// Returns one share per weight, in the same order. With an empty weight
/// slice, a zero pool, or all-zero weights, every share is zero.
#[must_use]
pub fn allocate(pool: Decimal, weights: &[Decimal]) -> Vec<Decimal> {
    if weights.is_empty() {
        return Vec::new();
    }
    let total: Decimal = weights.iter().copied().sum();
    if total.is_zero() || pool.is_zero() {
        return vec![Decimal::ZERO; weights.len()];
    }

    let mut shares: Vec<Decimal> = weights
        .iter()
        .map(|w| (pool * *w / total).round_dp_with_strategy(PAYOUT_SCALE, RoundingStrategy::ToZero))
        .collect();

    let paid: Decimal = shares.iter().copied().sum();
    let mut residue = pool - paid;
    let unit = Decimal::new(1, PAYOUT_SCALE);

    let eligible: Vec<usize> = (0..weights.len())
        .filter(|&i| !weights[i].is_zero())
        .collect();
    let mut cursor = 0;
    while residue >= unit {
        let i = eligible[cursor % eligible.len()];
        shares[i] += unit;
        residue -= unit;
        cursor += 1;
    }
    if !residue.is_zero() {
        shares[eligible[0]] += residue;
    }

    shares
}
