//! Deserialization tests for the webhook and exchange wire formats.

use rust_decimal_macros::dec;

use talad::models::balance::WalletBalances;
use talad::models::order::Order;
use talad::models::{Action, AmountMode, WebhookParams};

const BALANCES_JSON: &str = include_str!("fixtures/balances.json");
const ORDER_JSON: &str = include_str!("fixtures/order.json");
const WEBHOOK_JSON: &str = include_str!("fixtures/webhook.json");

#[test]
fn test_wallet_balances_deserialize() {
    let balances: WalletBalances =
        serde_json::from_str(BALANCES_JSON).expect("Failed to deserialize balances");

    assert_eq!(balances.len(), 3);
    assert_eq!(balances["THB"].available, dec!(188379.27));
    assert_eq!(balances["THB"].reserved, dec!(0));
    assert_eq!(balances["BTC"].available, dec!(8.90397323));
    assert_eq!(balances["BTC"].reserved, dec!(0.5));
    assert_eq!(balances["IOST"].available, dec!(37.5));
}

#[test]
fn test_order_deserializes_wire_names() {
    let order: Order = serde_json::from_str(ORDER_JSON).expect("Failed to deserialize order");

    assert_eq!(order.id, 1);
    assert_eq!(order.hash, "fwQ6dnQWQPs4cbatF5Am2xCDP1J");
    assert_eq!(order.order_type, "limit");
    assert_eq!(order.spending_amount, dec!(1000));
    assert_eq!(order.rate, dec!(15000));
    assert_eq!(order.fee, dec!(2.5));
    assert_eq!(order.fee_credit_used, dec!(2.5));
    assert_eq!(order.amount_to_receive, dec!(0.06666666));
    assert_eq!(order.timestamp, 1_533_834_844);
}

#[test]
fn test_order_round_trip_preserves_every_field() {
    let order: Order = serde_json::from_str(ORDER_JSON).expect("Failed to deserialize order");

    let encoded = serde_json::to_string(&order).expect("Failed to serialize order");
    let decoded: Order = serde_json::from_str(&encoded).expect("Failed to re-deserialize order");

    assert_eq!(decoded, order);
}

#[test]
fn test_webhook_params_deserialize() {
    let params: WebhookParams =
        serde_json::from_str(WEBHOOK_JSON).expect("Failed to deserialize webhook payload");

    assert_eq!(params.symbol, "IOST");
    assert_eq!(params.action, Action::Buy);
    assert_eq!(params.price, dec!(1));
    assert_eq!(params.amount, dec!(10));
    assert_eq!(params.amount_type, AmountMode::Percent);
}

#[test]
fn test_webhook_rejects_unknown_action() {
    let json = WEBHOOK_JSON.replace("\"buy\"", "\"short\"");
    assert!(serde_json::from_str::<WebhookParams>(&json).is_err());
}

#[test]
fn test_webhook_rejects_unknown_amount_type() {
    let json = WEBHOOK_JSON.replace("\"percent\"", "\"fraction\"");
    assert!(serde_json::from_str::<WebhookParams>(&json).is_err());
}
