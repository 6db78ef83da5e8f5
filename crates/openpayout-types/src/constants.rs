//! System-wide constants for the OpenPayout settlement engine.

/// Decimal scale of payout amounts: two places, the currency minor unit.
///
/// Shares are floored to this scale before remainder distribution, so
/// conservation of the prize pool is exact rather than "within tolerance".
pub const PAYOUT_SCALE: u32 = 2;

/// Strategy key for [winner-take-all] settlement.
///
/// [winner-take-all]: https://en.wikipedia.org/wiki/Winner-take-all_market
pub const WINNER_TAKE_ALL_KEY: &str = "winner_take_all";

/// Strategy key for top-N percentage-split settlement.
pub const TOP_N_SPLIT_KEY: &str = "top_n_split";

/// Default percentage table for the pre-registered `top_n_split` strategy:
/// three positions at 50 / 30 / 20 percent.
pub const DEFAULT_PODIUM_SPLIT: [u32; 3] = [50, 30, 20];

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenPayout";
