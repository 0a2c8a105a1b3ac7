//! Application configuration loaded from environment variables.
//!
//! Secrets **must** be provided via environment variables:
//! - `BITKUB_API_KEY` — API key sent in the `x-btk-apikey` header
//! - `BITKUB_API_SECRET` — HMAC secret used to sign request bodies
//! - `LINE_NOTIFY_TOKEN` — bearer token for the LINE Notify channel
//!
//! Optional overrides: `BITKUB_API_URL`, `LINE_NOTIFY_URL`, `LISTEN_ADDR`.

use crate::client::DEFAULT_API_URL;
use crate::notify::DEFAULT_NOTIFY_URL;

/// Default address the webhook server binds to.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub bitkub: BitkubConfig,
    pub line: LineConfig,
    pub listen_addr: String,
}

/// Bitkub-specific configuration values.
#[derive(Debug)]
pub struct BitkubConfig {
    pub api_url: String,
    pub api_key: String,
    pub api_secret: String,
}

/// LINE Notify configuration values.
#[derive(Debug)]
pub struct LineConfig {
    pub notify_url: String,
    pub token: String,
}

/// Loads the application configuration from environment variables.
///
/// The API and notification URLs default to the production endpoints
/// and can be overridden with `BITKUB_API_URL` and `LINE_NOTIFY_URL`.
/// All three secrets are mandatory: a missing secret is a startup-time
/// failure, never a per-request one.
///
/// # Errors
///
/// Returns [`TaladError::Config`](crate::TaladError::Config) if any of
/// the required variables is unset or empty.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url =
        non_empty_var("BITKUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let notify_url =
        non_empty_var("LINE_NOTIFY_URL").unwrap_or_else(|| DEFAULT_NOTIFY_URL.to_string());
    let listen_addr =
        non_empty_var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

    Ok(AppConfig {
        bitkub: BitkubConfig {
            api_url,
            api_key: required_var("BITKUB_API_KEY")?,
            api_secret: required_var("BITKUB_API_SECRET")?,
        },
        line: LineConfig {
            notify_url,
            token: required_var("LINE_NOTIFY_TOKEN")?,
        },
        listen_addr,
    })
}

/// Returns the value of a mandatory environment variable.
fn required_var(name: &str) -> crate::Result<String> {
    non_empty_var(name)
        .ok_or_else(|| crate::TaladError::Config(format!("{name} is not set")))
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
