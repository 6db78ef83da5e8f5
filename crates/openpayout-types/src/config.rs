//! Strategy configuration for percentage-split settlement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PayoutError, Result, constants};

/// Percentage table for a top-N split: how many leaderboard positions are
/// paid, and what share of the pool each position carries.
///
/// An empty `percentages` vector means "equal split": each of the `top_n`
/// positions carries `100 / top_n` percent. Tables longer than `top_n` are
/// truncated; shorter tables leave the trailing positions at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SplitTable {
    /// Number of paid table positions. Zero means nobody is paid.
    pub top_n: u32,
    /// Percentage per position, first position first. Values are percent
    /// points (50 means 50%).
    pub percentages: Vec<Decimal>,
}

impl SplitTable {
    #[must_use]
    pub fn new(top_n: u32, percentages: Vec<Decimal>) -> Self {
        Self { top_n, percentages }
    }

    /// Equal split across `top_n` positions.
    #[must_use]
    pub fn equal_split(top_n: u32) -> Self {
        Self {
            top_n,
            percentages: Vec::new(),
        }
    }

    /// The default 3-position podium table: 50 / 30 / 20.
    #[must_use]
    pub fn podium() -> Self {
        Self {
            top_n: constants::DEFAULT_PODIUM_SPLIT.len() as u32,
            percentages: constants::DEFAULT_PODIUM_SPLIT
                .iter()
                .map(|&p| Decimal::from(p))
                .collect(),
        }
    }

    /// Percentage mass carried by a zero-based table position.
    ///
    /// Positions at or past `top_n` carry zero. With an empty table every
    /// in-range position carries the equal share `100 / top_n`. Negative
    /// table entries are floored to zero, so a malformed table can never
    /// drive a payout amount below zero.
    #[must_use]
    pub fn mass_at(&self, position: usize) -> Decimal {
        if position >= self.top_n as usize {
            return Decimal::ZERO;
        }
        if self.percentages.is_empty() {
            return Decimal::ONE_HUNDRED / Decimal::from(self.top_n);
        }
        self.percentages
            .get(position)
            .copied()
            .unwrap_or(Decimal::ZERO)
            .max(Decimal::ZERO)
    }

    /// Strict validation for host-decoded tables: explicit percentages must
    /// match `top_n` in length, be non-negative, and sum to 100.
    ///
    /// The split strategy itself tolerates malformed tables (§ mass rules
    /// above); this is for hosts that want to reject bad configuration at
    /// the boundary instead.
    pub fn validate(&self) -> Result<()> {
        if self.percentages.is_empty() {
            return Ok(());
        }
        if self.percentages.len() != self.top_n as usize {
            return Err(PayoutError::InvalidSplitTable {
                reason: format!(
                    "table has {} percentages for top_n={}",
                    self.percentages.len(),
                    self.top_n
                ),
            });
        }
        if let Some(neg) = self.percentages.iter().find(|p| p.is_sign_negative()) {
            return Err(PayoutError::InvalidSplitTable {
                reason: format!("negative percentage: {neg}"),
            });
        }
        let total: Decimal = self.percentages.iter().copied().sum();
        if total != Decimal::ONE_HUNDRED {
            return Err(PayoutError::InvalidSplitTable {
                reason: format!("percentages sum to {total}, expected 100"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn podium_table_is_valid() {
        let table = SplitTable::podium();
        assert_eq!(table.top_n, 3);
        table.validate().unwrap();
        assert_eq!(table.mass_at(0), Decimal::new(50, 0));
        assert_eq!(table.mass_at(1), Decimal::new(30, 0));
        assert_eq!(table.mass_at(2), Decimal::new(20, 0));
        assert_eq!(table.mass_at(3), Decimal::ZERO);
    }

    #[test]
    fn equal_split_mass() {
        let table = SplitTable::equal_split(4);
        table.validate().unwrap();
        assert_eq!(table.mass_at(0), Decimal::new(25, 0));
        assert_eq!(table.mass_at(3), Decimal::new(25, 0));
        assert_eq!(table.mass_at(4), Decimal::ZERO);
    }

    #[test]
    fn short_table_trailing_positions_are_zero() {
        let table = SplitTable::new(3, vec![Decimal::new(60, 0), Decimal::new(40, 0)]);
        assert_eq!(table.mass_at(2), Decimal::ZERO);
    }

    #[test]
    fn long_table_truncated_at_top_n() {
        let table = SplitTable::new(
            1,
            vec![Decimal::new(50, 0), Decimal::new(30, 0), Decimal::new(20, 0)],
        );
        assert_eq!(table.mass_at(0), Decimal::new(50, 0));
        assert_eq!(table.mass_at(1), Decimal::ZERO);
    }

    #[test]
    fn mass_at_floors_negative_percentages() {
        let table = SplitTable::new(2, vec![Decimal::new(150, 0), Decimal::new(-50, 0)]);
        assert_eq!(table.mass_at(0), Decimal::new(150, 0));
        assert_eq!(table.mass_at(1), Decimal::ZERO);
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let table = SplitTable::new(3, vec![Decimal::new(100, 0)]);
        let err = table.validate().unwrap_err();
        assert!(matches!(err, PayoutError::InvalidSplitTable { .. }));
    }

    #[test]
    fn validate_rejects_bad_sum() {
        let table = SplitTable::new(2, vec![Decimal::new(60, 0), Decimal::new(50, 0)]);
        let err = table.validate().unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("110"), "Got: {msg}");
    }

    #[test]
    fn validate_rejects_negative_percentage() {
        let table = SplitTable::new(2, vec![Decimal::new(150, 0), Decimal::new(-50, 0)]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let table = SplitTable::podium();
        let json = serde_json::to_string(&table).unwrap();
        let back: SplitTable = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
