use std::sync::Arc;

use talad::TaladError;
use talad::client::BitkubClient;
use talad::config::fetch_config;
use talad::notify::Notifier;
use talad::server::{AppState, run_server};

#[tokio::main]
async fn main() -> Result<(), TaladError> {
    // Initialize tracing subscriber for logging output.
    tracing_subscriber::fmt::init();

    let config = fetch_config()?;

    let client = BitkubClient::new(
        config.bitkub.api_url,
        config.bitkub.api_key,
        config.bitkub.api_secret,
    )?;
    let notifier = Notifier::new(config.line.notify_url, config.line.token)?;

    let state = AppState::new(Arc::new(client), Arc::new(notifier));
    run_server(state, &config.listen_addr).await
}
