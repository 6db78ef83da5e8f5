//! Identifiers used throughout OpenPayout.
//!
//! `ParticipantId` is opaque: the engine never interprets it beyond equality
//! and ordering (ordering is the deterministic tie-break for remainder
//! assignment). `SettlementId` uses UUIDv7, with a SHA-256-derived
//! deterministic form for settlement results.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{RankedEntry, SettlementInput};

// ---------------------------------------------------------------------------
// ParticipantId
// ---------------------------------------------------------------------------

/// Opaque identifier for a contest participant.
///
/// Carried verbatim from the host's leaderboard decoding; the engine only
/// compares and orders it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// SettlementId
// ---------------------------------------------------------------------------

/// Unique identifier for one settlement computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct SettlementId(pub Uuid);

impl SettlementId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Deterministic `SettlementId` from a strategy key and its input.
    ///
    /// Settling the same input with the same strategy yields the **exact
    /// same** id every time, so repeated settlement runs are
    /// decimal-identical end to end. Entries are hashed in `(rank, user)`
    /// order; the informational `score` field does not participate.
    #[must_use]
    pub fn deterministic(strategy_key: &str, input: &SettlementInput) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openpayout:settlement_id:v1:");
        hasher.update(strategy_key.as_bytes());
        hasher.update(b"|");
        hasher.update(input.prize_pool.normalize().to_string().as_bytes());

        let mut entries: Vec<&RankedEntry> = input.entries.iter().collect();
        entries.sort_by(|a, b| (a.rank, &a.user_id).cmp(&(b.rank, &b.user_id)));
        for entry in entries {
            hasher.update(b"|");
            hasher.update(entry.user_id.as_str().as_bytes());
            hasher.update(b":");
            hasher.update(entry.rank.to_le_bytes());
        }

        let hash = hasher.finalize();
        let bytes: [u8; 16] = hash[..16].try_into().expect("SHA-256 produces 32 bytes");
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for SettlementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SettlementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "settlement:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
