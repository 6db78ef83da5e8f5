//! Top-N percentage-split settlement.
//!
//! Distinct ranks map to consecutive table positions in ascending order.
//! A rank tied by k entries consumes k consecutive positions; the
//! percentages of those positions are summed and split evenly among the k
//! entries. When fewer positions are covered than the table holds, the
//! consumed percentage mass is renormalized so the full pool is still paid:
//!
//! ```text
//! entry share = (entry's percentage mass / total consumed mass) * pool
//! ```

use openpayout_types::{
    RankedEntry, SettlementId, SettlementInput, SettlementPayout, SettlementResult, SplitTable,
    constants,
};
use rust_decimal::Decimal;

use crate::allocation::allocate;
use crate::strategy::SettlementStrategy;

/// Percentage-table split over the top N leaderboard positions.
///
/// Constructed from a [`SplitTable`]; an empty percentage vector means an
/// equal split across the `top_n` positions. A `top_n` of zero settles to
/// an empty result, never an error.
#[derive(Debug, Clone)]
pub struct TopNSplit {
    table: SplitTable,
}

impl TopNSplit {
    #[must_use]
    pub fn new(top_n: u32, percentages: Vec<Decimal>) -> Self {
        Self {
            table: SplitTable::new(top_n, percentages),
        }
    }

    #[must_use]
    pub fn with_table(table: SplitTable) -> Self {
        Self { table }
    }

    /// The default 3-position 50/30/20 configuration.
    #[must_use]
    pub fn podium() -> Self {
        Self::with_table(SplitTable::podium())
    }

    #[must_use]
    pub fn table(&self) -> &SplitTable {
        &self.table
    }
}

/// One paid tie group: its rank, its members (sorted by user id), and the
/// summed percentage mass of the table positions it consumed.
struct PaidGroup<'a> {
    rank: u32,
    members: Vec<&'a RankedEntry>,
    mass: Decimal,
}

impl SettlementStrategy for TopNSplit {
    fn key(&self) -> &str {
        constants::TOP_N_SPLIT_KEY
    }

    fn settle(&self, input: &SettlementInput) -> SettlementResult {
        let settlement_id = SettlementId::deterministic(self.key(), input);
        let top_n = self.table.top_n as usize;
        if top_n == 0 || input.is_empty() {
            return SettlementResult::empty(settlement_id, self.key());
        }

        // Walk distinct ranks ascending, consuming table positions. A tie
        // group straddling the top-N boundary keeps only its in-table mass.
        let mut groups: Vec<PaidGroup<'_>> = Vec::new();
        let mut next_position = 0usize;
        for (rank, members) in input.rank_groups() {
            if next_position >= top_n {
                break;
            }
            let consumed = next_position..(next_position + members.len());
            let mass: Decimal = consumed.clone().map(|p| self.table.mass_at(p)).sum();
            next_position = consumed.end;
            groups.push(PaidGroup {
                rank,
                members,
                mass,
            });
        }

        let total_mass: Decimal = groups.iter().map(|g| g.mass).sum();
        if total_mass.is_zero() {
            // Nothing carries weight (e.g. a short explicit table where only
            // zero-mass positions are covered): nobody is paid.
            return SettlementResult::empty(settlement_id, self.key());
        }

        // Flatten to per-recipient weights in (rank, user_id) order; each
        // tied member carries an equal slice of its group's mass.
        let mut recipients: Vec<(&RankedEntry, u32)> = Vec::new();
        let mut weights: Vec<Decimal> = Vec::new();
        for group in &groups {
            let member_weight = group.mass / Decimal::from(group.members.len() as u64);
            for &member in &group.members {
                recipients.push((member, group.rank));
                weights.push(member_weight);
            }
        }

        let shares = allocate(input.prize_pool, &weights);
        let payouts: Vec<SettlementPayout> = recipients
            .iter()
            .zip(shares)
            .map(|(&(entry, rank), amount)| SettlementPayout {
                user_id: entry.user_id.clone(),
                rank,
                amount,
            })
            .collect();

        tracing::debug!(
            strategy = self.key(),
            paid = payouts.len(),
            groups = groups.len(),
            pool = %input.prize_pool,
            "settled top-n split"
        );

        SettlementResult {
            settlement_id,
            strategy_key: self.key().to_string(),
            payouts,
        }
    }
}
