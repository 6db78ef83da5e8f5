//! Winner-take-all settlement: the whole pool to the minimum rank.

use openpayout_types::{
    RankedEntry, SettlementId, SettlementInput, SettlementPayout, SettlementResult, constants,
};
use rust_decimal::Decimal;

use crate::allocation::allocate;
use crate::strategy::SettlementStrategy;

/// Pays the entire prize pool to the entries holding the minimum rank
/// present, split evenly across ties. Everyone else gets no payout record.
///
/// A zero pool still issues zero-amount records for the winners; an empty
/// input issues nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinnerTakeAll;

impl WinnerTakeAll {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SettlementStrategy for WinnerTakeAll {
    fn key(&self) -> &str {
        constants::WINNER_TAKE_ALL_KEY
    }

    fn settle(&self, input: &SettlementInput) -> SettlementResult {
        let settlement_id = SettlementId::deterministic(self.key(), input);

        let Some(min_rank) = input.min_rank() else {
            return SettlementResult::empty(settlement_id, self.key());
        };
        let mut winners: Vec<&RankedEntry> = input
            .entries
            .iter()
            .filter(|e| e.rank == min_rank)
            .collect();
        winners.sort_by(|a, b| a.user_id.cmp(&b.user_id));

        let weights = vec![Decimal::ONE; winners.len()];
        let shares = allocate(input.prize_pool, &weights);
        let payouts: Vec<SettlementPayout> = winners
            .iter()
            .zip(shares)
            .map(|(entry, amount)| SettlementPayout {
                user_id: entry.user_id.clone(),
                rank: min_rank,
                amount,
            })
            .collect();

        tracing::debug!(
            strategy = self.key(),
            winners = payouts.len(),
            pool = %input.prize_pool,
            "settled winner-take-all"
        );

        SettlementResult {
            settlement_id,
            strategy_key: self.key().to_string(),
            payouts,
        }
    }
}

#[cfg(test)]
mod tests {
    use openpayout_types::RankedEntry;

    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn entry(user: &str, rank: u32) -> RankedEntry {
        RankedEntry::new(user, rank, Decimal::ZERO)
    }

    #[test]
    fn single_winner_gets_full_pool() {
        let input = SettlementInput::new(
            vec![entry("alice", 1), entry("bob", 2)],
            dec("1000"),
        );
        let result = WinnerTakeAll.settle(&input);

        assert_eq!(result.payouts.len(), 1);
        assert_eq!(result.payouts[0].user_id.as_str(), "alice");
        assert_eq!(result.payouts[0].rank, 1);
        assert_eq!(result.payouts[0].amount, dec("1000.00"));
    }

    #[test]
    fn tie_at_first_splits_evenly() {
        let input = SettlementInput::new(
            vec![entry("alice", 1), entry("bob", 1), entry("cara", 2)],
            dec("300"),
        );
        let result = WinnerTakeAll.settle(&input);

        assert_eq!(result.payouts.len(), 2);
        assert_eq!(result.payouts[0].amount, dec("150.00"));
        assert_eq!(result.payouts[1].amount, dec("150.00"));
        assert_eq!(result.total_paid(), dec("300"));
    }

    #[test]
    fn three_way_tie_with_odd_cent() {
        // 100 across three winners: lowest user id takes the spare cent.
        let input = SettlementInput::new(
            vec![entry("cara", 1), entry("alice", 1), entry("bob", 1)],
            dec("100"),
        );
        let result = WinnerTakeAll.settle(&input);

        assert_eq!(result.payouts[0].user_id.as_str(), "alice");
        assert_eq!(result.payouts[0].amount, dec("33.34"));
        assert_eq!(result.payouts[1].amount, dec("33.33"));
        assert_eq!(result.payouts[2].amount, dec("33.33"));
        assert_eq!(result.total_paid(), dec("100"));
    }

    #[test]
    fn minimum_rank_wins_even_if_not_one() {
        // Rank values need not start at 1; the minimum present wins.
        let input = SettlementInput::new(vec![entry("bob", 7), entry("amy", 3)], dec("50"));
        let result = WinnerTakeAll.settle(&input);

        assert_eq!(result.payouts.len(), 1);
        assert_eq!(result.payouts[0].user_id.as_str(), "amy");
        assert_eq!(result.payouts[0].rank, 3);
    }

    #[test]
    fn losers_get_no_record_not_a_zero() {
        let input = SettlementInput::new(
            vec![entry("alice", 1), entry("bob", 2)],
            dec("1000"),
        );
        let result = WinnerTakeAll.settle(&input);
        assert!(result.payouts.iter().all(|p| p.user_id.as_str() != "bob"));
    }

    #[test]
    fn zero_pool_still_lists_winners() {
        let input = SettlementInput::new(vec![entry("alice", 1), entry("bob", 1)], Decimal::ZERO);
        let result = WinnerTakeAll.settle(&input);

        assert_eq!(result.payouts.len(), 2);
        assert!(result.payouts.iter().all(|p| p.amount.is_zero()));
    }

    #[test]
    fn empty_input_is_empty_result() {
        let input = SettlementInput::new(Vec::new(), dec("1000"));
        let result = WinnerTakeAll.settle(&input);
        assert!(result.is_empty());
    }

    #[test]
    fn settle_does_not_mutate_input() {
        let input = SettlementInput::new(
            vec![entry("bob", 2), entry("alice", 1)],
            dec("1000"),
        );
        let snapshot = input.clone();
        let _ = WinnerTakeAll.settle(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn settle_is_deterministic() {
        let input = SettlementInput::new(
            vec![entry("alice", 1), entry("bob", 1)],
            dec("333.33"),
        );
        let a = WinnerTakeAll.settle(&input);
        let b = WinnerTakeAll.settle(&input);
        assert_eq!(a, b);
        assert_eq!(a.settlement_id, b.settlement_id);
    }
}
