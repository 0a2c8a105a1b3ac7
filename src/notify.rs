//! LINE Notify side channel.
//!
//! Outcomes are relayed to a LINE group as a fire-and-forget POST.
//! Notification failures are logged and swallowed; they never propagate
//! to the webhook caller.

use reqwest::header;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::Result;

/// Default LINE Notify endpoint.
pub const DEFAULT_NOTIFY_URL: &str = "https://notify-api.line.me/api/notify";

/// Client for the LINE Notify API.
pub struct Notifier {
    http: reqwest::Client,
    url: String,
    token: Zeroizing<String>,
}

impl Notifier {
    /// Creates a notifier with the bearer token injected at construction.
    ///
    /// # Errors
    ///
    /// Returns [`TaladError::Http`](crate::TaladError::Http) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            url: url.into(),
            token: Zeroizing::new(token.into()),
        })
    }

    /// Sends a notification message with the given sticker.
    ///
    /// Fire-and-forget: failures are logged, never returned.
    pub async fn send(&self, message: &str, sticker_id: &str, sticker_package_id: &str) {
        let form = [
            ("message", message),
            ("stickerId", sticker_id),
            ("stickerPackageId", sticker_package_id),
        ];

        let result = self
            .http
            .post(&self.url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.token.as_str()),
            )
            .form(&form)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                debug!("notification delivered");
            }
            Ok(response) => {
                warn!(status = %response.status(), "notification rejected");
            }
            Err(e) => {
                warn!(error = %e, "notification request failed");
            }
        }
    }
}
