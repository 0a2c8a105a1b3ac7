//! TradingView-to-Bitkub webhook execution bridge.
//!
//! Receives trading-signal webhooks (symbol, action, price, amount mode),
//! resolves them into concretely sized limit orders, and submits those
//! orders to the Bitkub REST API over signed calls. Outcomes are relayed
//! to a LINE Notify channel as a side effect.

pub mod catalog;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod notify;
pub mod server;
pub mod sizing;
pub mod wallet;

pub use error::{Result, TaladError};
