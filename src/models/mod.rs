//! Shared models for the webhook and exchange wire formats.
//!
//! Contains the inbound trading-signal payload and the enums describing
//! order side and amount interpretation. Unrecognized wire values fail
//! deserialization outright, so invalid signals are rejected before any
//! sizing or dispatch work happens.

pub mod balance;
pub mod order;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order side (buy or sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
}

impl Action {
    /// Returns the wire-format name carried by the webhook payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "buy",
            Action::Sell => "sell",
        }
    }
}

/// Strategy for turning the caller-supplied `amount` into a trade quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountMode {
    /// The literal requested size.
    Limit,
    /// The full available balance of the relevant currency.
    AllAvailable,
    /// A percentage of the available balance of the relevant currency.
    Percent,
}

impl AmountMode {
    /// Returns the wire-format name carried by the webhook payload.
    pub fn as_str(&self) -> &'static str {
        match self {
            AmountMode::Limit => "limit",
            AmountMode::AllAvailable => "all_available",
            AmountMode::Percent => "percent",
        }
    }
}

/// Inbound trading-signal webhook payload.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookParams {
    pub symbol: String,
    pub amount: Decimal,
    pub price: Decimal,
    pub action: Action,
    pub amount_type: AmountMode,
}
