//! Wallet balance models.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of all wallet balances, keyed by asset symbol
/// (e.g., "THB", "IOST"). Fetched fresh on every use; never cached.
pub type WalletBalances = HashMap<String, Balance>;

/// Balance of a single asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Balance {
    /// Amount free to trade.
    pub available: Decimal,
    /// Amount locked in open orders.
    pub reserved: Decimal,
}
