//! Key → strategy lookup table.
//!
//! Registries are plain per-instance values, never global: registering a
//! strategy in one registry leaves every other registry untouched. An
//! unknown key is an absence, not an error — deciding what to do about it
//! belongs to the caller.

use std::collections::HashMap;
use std::sync::Arc;

use openpayout_types::{PayoutError, Result, SettlementInput, SettlementResult};

use crate::strategy::SettlementStrategy;
use crate::top_n_split::TopNSplit;
use crate::winner_take_all::WinnerTakeAll;

/// Maps stable string keys to settlement strategy instances.
///
/// Construction pre-registers the built-ins: `winner_take_all` and
/// `top_n_split` (with the default podium table). Custom strategies can be
/// registered at runtime; registering under an existing key replaces it in
/// this instance only.
///
/// The registry provides no interior locking. Sharing one across threads
/// while calling [`register`](Self::register) must be synchronized by the
/// caller; read-only sharing needs no coordination.
pub struct SettlementStrategyRegistry {
    strategies: HashMap<String, Arc<dyn SettlementStrategy>>,
}

impl SettlementStrategyRegistry {
    /// A registry with the built-in strategies pre-registered.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            strategies: HashMap::new(),
        };
        registry.register(Arc::new(WinnerTakeAll::new()));
        registry.register(Arc::new(TopNSplit::podium()));
        registry
    }

    /// Add or replace the mapping for `strategy.key()` in this instance.
    pub fn register(&mut self, strategy: Arc<dyn SettlementStrategy>) {
        self.strategies.insert(strategy.key().to_string(), strategy);
    }

    /// Resolve a key. Never fails: an unknown key is `None`.
    #[must_use]
    pub fn strategy(&self, key: &str) -> Option<Arc<dyn SettlementStrategy>> {
        self.strategies.get(key).cloned()
    }

    /// Currently registered keys, sorted.
    #[must_use]
    pub fn available_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.strategies.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Resolve and settle in one step.
    ///
    /// # Errors
    /// [`PayoutError::StrategyNotFound`] if the key is not registered.
    pub fn settle(&self, key: &str, input: &SettlementInput) -> Result<SettlementResult> {
        let strategy = self
            .strategy(key)
            .ok_or_else(|| PayoutError::StrategyNotFound(key.to_string()))?;
        let result = strategy.settle(input);
        tracing::info!(
            strategy = key,
            entries = input.entries.len(),
            payouts = result.payouts.len(),
            pool = %input.prize_pool,
            settlement_id = %result.settlement_id,
            "settlement computed"
        );
        Ok(result)
    }
}

impl Default for SettlementStrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
