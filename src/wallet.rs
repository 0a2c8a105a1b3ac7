//! Wallet balance reader.

use serde_json::Map;
use tracing::{debug, warn};

use crate::client::BitkubClient;
use crate::models::balance::WalletBalances;

/// Endpoint returning available and reserved balances per asset.
const BALANCES_PATH: &str = "market/balances";

/// Fetches a fresh balance snapshot.
///
/// Any failure — transport, undecodable body, or an exchange-reported
/// error — is logged and yields an empty map rather than an error:
/// sizing treats a missing asset as zero available, so a degraded
/// balance read must never take the whole request down.
pub async fn fetch_balances(client: &BitkubClient) -> WalletBalances {
    let response = match client
        .call::<WalletBalances>(BALANCES_PATH, Map::new())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            warn!(error = %e, "balance fetch got no usable response");
            return WalletBalances::new();
        }
    };

    if let Some(error) = &response.error {
        warn!(code = error.code, description = %error.description, "balance fetch rejected by exchange");
    }

    let balances = response.result.unwrap_or_default();
    debug!(assets = balances.len(), "fetched wallet balances");
    balances
}
