//! Settlement input model: ranked entries and the prize pool.
//!
//! Entries arrive already ranked by the host's leaderboard layer. The engine
//! never sorts by score and never depends on the order of the input vector:
//! grouping is by rank value only.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// One participant's position on the leaderboard.
///
/// `rank` is 1-based; tied participants share the same rank value.
/// `score` is informational only and never participates in settlement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedEntry {
    pub user_id: ParticipantId,
    pub rank: u32,
    pub score: Decimal,
}

impl RankedEntry {
    #[must_use]
    pub fn new(user_id: impl Into<ParticipantId>, rank: u32, score: Decimal) -> Self {
        Self {
            user_id: user_id.into(),
            rank,
            score,
        }
    }
}

/// A full settlement request: the ranked entries plus the pool to distribute.
///
/// A zero pool is a valid degenerate input (payouts are issued with zero
/// amounts). A non-negative pool is a caller responsibility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementInput {
    pub entries: Vec<RankedEntry>,
    pub prize_pool: Decimal,
}

impl SettlementInput {
    #[must_use]
    pub fn new(entries: Vec<RankedEntry>, prize_pool: Decimal) -> Self {
        Self {
            entries,
            prize_pool,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries grouped by rank, distinct ranks ascending, group members
    /// sorted by `user_id`.
    ///
    /// This is the canonical view every strategy works from: it is
    /// independent of the order entries arrived in, and the member ordering
    /// is the deterministic recipient order for remainder assignment.
    #[must_use]
    pub fn rank_groups(&self) -> Vec<(u32, Vec<&RankedEntry>)> {
        let mut by_rank: BTreeMap<u32, Vec<&RankedEntry>> = BTreeMap::new();
        for entry in &self.entries {
            by_rank.entry(entry.rank).or_default().push(entry);
        }
        by_rank
            .into_iter()
            .map(|(rank, mut members)| {
                members.sort_by(|a, b| a.user_id.cmp(&b.user_id));
                (rank, members)
            })
            .collect()
    }

    /// The minimum rank present, if any.
    #[must_use]
    pub fn min_rank(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.rank).min()
    }
}
