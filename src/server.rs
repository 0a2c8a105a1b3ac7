//! Webhook HTTP server.
//!
//! Exposes the TradingView webhook route and a liveness ping. Each
//! webhook invocation runs as one independent unit of work: validate →
//! fetch balances → size → dispatch, with the outcome mirrored to the
//! notification channel. There is no per-account serialization; two
//! concurrent "sell all available" signals can both observe the same
//! pre-trade balance. Callers that need that guarantee must queue
//! signals upstream.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{info, warn};

use crate::client::BitkubClient;
use crate::dispatch::{self, DispatchError};
use crate::models::WebhookParams;
use crate::notify::Notifier;
use crate::{sizing, wallet};

/// Shared handler state; cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    client: Arc<BitkubClient>,
    notifier: Arc<Notifier>,
}

impl AppState {
    pub fn new(client: Arc<BitkubClient>, notifier: Arc<Notifier>) -> Self {
        Self { client, notifier }
    }
}

/// Creates the axum router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/tradingview-webhook", post(tradingview_webhook))
        .with_state(state)
}

/// Liveness probe.
async fn ping() -> Json<serde_json::Value> {
    Json(json!({ "message": "pong" }))
}

/// Handles an inbound trading signal.
///
/// Unrecognized `action`/`amount_type` values never reach this handler:
/// they fail `WebhookParams` deserialization and axum rejects the
/// request with a client error. Negative amounts are rejected here,
/// before sizing.
async fn tradingview_webhook(
    State(state): State<AppState>,
    Json(params): Json<WebhookParams>,
) -> Response {
    if params.amount < Decimal::ZERO {
        warn!(amount = %params.amount, "rejecting negative amount");
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "invalid webhook params" })),
        )
            .into_response();
    }

    let balances = wallet::fetch_balances(&state.client).await;
    let quantity = sizing::resolve_quantity(
        params.action,
        params.amount_type,
        params.amount,
        &balances,
        &params.symbol,
    );

    let command = format!(
        "sending command {} {} price: {} amount: {} amount type: {}",
        params.action.as_str(),
        params.symbol,
        params.price,
        quantity,
        params.amount_type.as_str(),
    );
    info!("{command}");
    state.notifier.send(&command, "1", "1").await;

    match dispatch::submit(
        &state.client,
        &params.symbol,
        params.price,
        quantity,
        params.action,
    )
    .await
    {
        Ok(order) => {
            if let Ok(body) = serde_json::to_string(&order) {
                state.notifier.send(&body, "1", "1").await;
            }
            (StatusCode::OK, Json(json!({ "data": order }))).into_response()
        }
        // An exchange rejection is an expected operational outcome, not
        // a server fault: report it in a 200 payload.
        Err(DispatchError::Rejected(error)) => {
            let description = format!("request failed with {error}");
            warn!("{description}");
            state.notifier.send(&description, "1", "1").await;
            (StatusCode::OK, Json(json!({ "error": description }))).into_response()
        }
        Err(DispatchError::NoResponse) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "data": { "error": "no response from Bitkub" } })),
        )
            .into_response(),
    }
}

/// Binds the listener and serves webhooks until the process exits.
///
/// # Errors
///
/// Returns [`TaladError::Io`](crate::TaladError::Io) if the address
/// cannot be bound or the server loop fails.
pub async fn run_server(state: AppState, listen_addr: &str) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!(addr = listen_addr, "listening for webhooks");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
