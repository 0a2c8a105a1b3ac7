//! Placed-order models.
//!
//! The exchange reports placed orders with terse three-letter field
//! names; the struct keeps descriptive Rust names and maps them via
//! serde renames.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A successfully placed order as reported by the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Order {
    pub id: i64,
    pub hash: String,
    /// Order type (always "limit" for orders placed by this crate).
    #[serde(rename = "typ")]
    pub order_type: String,
    /// Amount spent (quote currency for bids, base currency for asks).
    #[serde(rename = "amt")]
    pub spending_amount: Decimal,
    /// Limit rate the order was placed at.
    #[serde(rename = "rat")]
    pub rate: Decimal,
    pub fee: Decimal,
    /// Fee credit applied against the fee.
    #[serde(rename = "cre")]
    pub fee_credit_used: Decimal,
    /// Amount to receive once the order fills.
    #[serde(rename = "rec")]
    pub amount_to_receive: Decimal,
    /// Placement time, Unix seconds.
    #[serde(rename = "ts")]
    pub timestamp: i64,
}
