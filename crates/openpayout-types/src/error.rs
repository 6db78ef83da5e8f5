//! Error types for the OpenPayout settlement engine.
//!
//! All errors use the `PO_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Configuration errors
//! - 2xx: Registry errors
//! - 3xx: Conservation / result-integrity errors
//!
//! Note that the degenerate settlement inputs (empty entries, zero pool,
//! `top_n` of zero, fewer entries than `top_n`) are *not* errors: strategies
//! define an explicit output for each of them.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::ParticipantId;

/// Central error enum for all OpenPayout operations.
#[derive(Debug, Error)]
pub enum PayoutError {
    // =================================================================
    // Configuration Errors (1xx)
    // =================================================================
    /// A percentage split table failed strict validation.
    #[error("PO_ERR_100: Invalid split table: {reason}")]
    InvalidSplitTable { reason: String },

    // =================================================================
    // Registry Errors (2xx)
    // =================================================================
    /// No strategy is registered under the requested key. Registry lookup
    /// itself returns an `Option`; this error is only produced by the
    /// `settle` convenience path for callers that want a hard failure.
    #[error("PO_ERR_200: No settlement strategy registered for key '{0}'")]
    StrategyNotFound(String),

    // =================================================================
    // Conservation / Result-Integrity Errors (3xx)
    // =================================================================
    /// Total paid does not equal the prize pool — critical safety alert.
    #[error("PO_ERR_300: Payout conservation violated: {reason}")]
    ConservationViolation { reason: String },

    /// The same participant appears more than once in a result.
    #[error("PO_ERR_301: Duplicate payout recipient: {0}")]
    DuplicateRecipient(ParticipantId),

    /// A payout carries a negative amount.
    #[error("PO_ERR_302: Negative payout of {amount} to {user_id}")]
    NegativePayout {
        user_id: ParticipantId,
        amount: Decimal,
    },

    /// A payout recipient does not appear among the ranked entries.
    #[error("PO_ERR_303: Payout recipient {0} is not a ranked entry")]
    UnknownRecipient(ParticipantId),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = PayoutError::StrategyNotFound("bonus_round".to_string());
        let msg = format!("{err}");
        assert!(msg.starts_with("PO_ERR_200"), "Got: {msg}");
        assert!(msg.contains("bonus_round"));
    }

    #[test]
    fn all_errors_have_po_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(PayoutError::InvalidSplitTable {
                reason: "test".into(),
            }),
            Box::new(PayoutError::StrategyNotFound("x".into())),
            Box::new(PayoutError::ConservationViolation {
                reason: "test".into(),
            }),
            Box::new(PayoutError::DuplicateRecipient(ParticipantId::from("u1"))),
            Box::new(PayoutError::NegativePayout {
                user_id: ParticipantId::from("u1"),
                amount: Decimal::new(-1, 2),
            }),
            Box::new(PayoutError::UnknownRecipient(ParticipantId::from("u9"))),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("PO_ERR_"),
                "Error missing PO_ERR_ prefix: {msg}"
            );
        }
    }

    #[test]
    fn negative_payout_display() {
        let err = PayoutError::NegativePayout {
            user_id: ParticipantId::from("u1"),
            amount: Decimal::new(-250, 2),
        };
        let msg = format!("{err}");
        assert!(msg.contains("PO_ERR_302"));
        assert!(msg.contains("-2.50"));
        assert!(msg.contains("u1"));
    }
}
