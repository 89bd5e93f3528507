//! Ledger and chain constants

/// Base units per coin
pub const UNITS_PER_COIN: i64 = 100_000_000;

/// Coinbase reward paid by an assembled block: 25 coins
pub const COINBASE_REWARD: i64 = 25 * UNITS_PER_COIN;

/// Maximum depth below the best height at which a branch may still be extended
pub const CUT_OFF_AGE: u64 = 10;

/// Height of a chain's root (genesis) node
pub const GENESIS_HEIGHT: u64 = 1;

/// Hash used in place of a missing parent when computing block identity
pub const NULL_HASH: [u8; 32] = [0u8; 32];
