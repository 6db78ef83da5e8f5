//! Settlement output model: individual payouts and the aggregate result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ParticipantId, SettlementId};

/// One participant's computed payout.
///
/// Only participants who receive money (or a deliberate zero under a zero
/// pool) get a payout record; absence of a record means "not paid".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementPayout {
    pub user_id: ParticipantId,
    pub rank: u32,
    pub amount: Decimal,
}

/// Aggregate output of one settlement computation.
///
/// Payouts are sorted by `(rank, user_id)` and recipients are unique.
/// Whenever any payout is issued, `total_paid()` equals the input's prize
/// pool exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettlementResult {
    /// Deterministic id for this computation (same input, same strategy →
    /// same id).
    pub settlement_id: SettlementId,
    /// Key of the strategy that produced this result.
    pub strategy_key: String,
    pub payouts: Vec<SettlementPayout>,
}

impl SettlementResult {
    /// An empty result (no payouts issued).
    #[must_use]
    pub fn empty(settlement_id: SettlementId, strategy_key: impl Into<String>) -> Self {
        Self {
            settlement_id,
            strategy_key: strategy_key.into(),
            payouts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payouts.is_empty()
    }

    /// Sum of all payout amounts.
    #[must_use]
    pub fn total_paid(&self) -> Decimal {
        self.payouts.iter().map(|p| p.amount).sum()
    }

    /// Hex-encoded SHA-256 over the canonical payout list.
    ///
    /// Hosts can persist this alongside the result as an audit trail entry;
    /// two decimal-identical results produce the same digest.
    #[must_use]
    pub fn digest(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openpayout:result:v1:");
        hasher.update(self.strategy_key.as_bytes());
        for payout in &self.payouts {
            hasher.update(b"|");
            hasher.update(payout.user_id.as_str().as_bytes());
            hasher.update(b":");
            hasher.update(payout.rank.to_le_bytes());
            hasher.update(b":");
            hasher.update(payout.amount.normalize().to_string().as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
