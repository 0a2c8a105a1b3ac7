//! Order dispatch: building exchange order parameters and submitting them.
//!
//! Buys go to the bid-placement endpoint and sells to the ask-placement
//! endpoint; the exchange has no single endpoint with a side flag. Only
//! limit orders are placed.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::client::{ApiError, BitkubClient};
use crate::models::Action;
use crate::models::order::Order;
use crate::sizing::round_quantity;

/// Prefix every tradable symbol carries on this exchange.
pub const QUOTE_PREFIX: &str = "THB_";

const PLACE_BID_PATH: &str = "market/place-bid/test";
const PLACE_ASK_PATH: &str = "market/place-ask/test";

/// Terminal failure outcomes of an order submission.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The exchange answered and rejected the order.
    #[error("order rejected by exchange: {0}")]
    Rejected(ApiError),

    /// Transport failure, undecodable body, or an envelope carrying
    /// neither error nor result. Distinct from a rejection: the order's
    /// fate is unknown.
    #[error("no response from Bitkub")]
    NoResponse,
}

/// Prepends the quote-currency prefix unless the symbol already has it.
pub fn normalize_symbol(symbol: &str) -> String {
    if symbol.starts_with(QUOTE_PREFIX) {
        symbol.to_string()
    } else {
        format!("{QUOTE_PREFIX}{symbol}")
    }
}

/// Submits a limit order and returns the exchange's view of it.
///
/// The quantity is rounded to 2 decimal places before submission.
///
/// # Errors
///
/// [`DispatchError::Rejected`] when the exchange reports an error code,
/// [`DispatchError::NoResponse`] when the call produced no decodable
/// envelope or an empty one. Neither is retried here.
pub async fn submit(
    client: &BitkubClient,
    symbol: &str,
    price: Decimal,
    quantity: Decimal,
    action: Action,
) -> Result<Order, DispatchError> {
    let quantity = round_quantity(quantity);
    let path = match action {
        Action::Buy => PLACE_BID_PATH,
        Action::Sell => PLACE_ASK_PATH,
    };
    let params = order_params(symbol, price, quantity);

    info!(side = action.as_str(), %symbol, %price, %quantity, "submitting order");

    let response = match client.call::<Order>(path, params).await {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "order submission got no usable response");
            return Err(DispatchError::NoResponse);
        }
    };

    if let Some(error) = response.error {
        return Err(DispatchError::Rejected(error));
    }
    response.result.ok_or(DispatchError::NoResponse)
}

/// Builds the parameter map for a limit-order placement.
fn order_params(symbol: &str, price: Decimal, quantity: Decimal) -> Map<String, Value> {
    let mut params = Map::new();
    params.insert("amt".to_string(), decimal_param(quantity));
    params.insert("sym".to_string(), Value::String(normalize_symbol(symbol)));
    params.insert("rat".to_string(), decimal_param(price));
    params.insert("typ".to_string(), Value::String("limit".to_string()));
    params
}

/// Encodes a decimal as the JSON number the exchange expects.
///
/// Goes through `f64`, so precision is capped at what `f64` represents.
/// Quantities are rounded to 2 decimal places before reaching here; a
/// value with no finite `f64` form falls back to its string form.
fn decimal_param(value: Decimal) -> Value {
    value
        .to_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(value.to_string()))
}
