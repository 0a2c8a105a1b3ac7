//! Signed Bitkub REST API client.
//!
//! Every private endpoint takes a JSON object of parameters plus two
//! injected fields: `ts` (Unix seconds at call time) and `sig`, a hex
//! HMAC-SHA256 over the JSON-serialized parameter set *including* `ts`
//! but *before* `sig` is added. Any parameter added after signing would
//! invalidate the signature, so [`BitkubClient::call`] owns both
//! injections and rejects parameter maps that already carry either key.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::catalog;
use crate::{Result, TaladError};

/// Default production API base.
pub const DEFAULT_API_URL: &str = "https://api.bitkub.com/api/";

/// Header carrying the API key on every authenticated request.
const HEADER_API_KEY: &str = "x-btk-apikey";

/// Parameter names injected by the signing pipeline.
const RESERVED_KEYS: [&str; 2] = ["ts", "sig"];

/// An error reported by the exchange inside a response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: u32,
    pub description: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.code, self.description)
    }
}

impl From<catalog::ErrorCode> for ApiError {
    fn from(code: catalog::ErrorCode) -> Self {
        Self {
            code: code.code(),
            description: code.description().to_string(),
        }
    }
}

/// Generic success/error envelope returned by every exchange endpoint.
///
/// Exactly one interpretation applies: `error` is set (request failed)
/// or `result` carries the typed payload. Both absent is the "no
/// response" condition the caller must treat as its own outcome.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub error: Option<ApiError>,
    pub result: Option<T>,
}

/// Authenticated Bitkub REST client.
///
/// The API key and HMAC secret are injected at construction so the
/// pipeline is testable without environment mutation. The client holds
/// no per-call state; concurrent calls are safe.
pub struct BitkubClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: Zeroizing<String>,
}

impl BitkubClient {
    /// Creates a client against `base_url` (must end with a slash).
    ///
    /// # Errors
    ///
    /// Returns [`TaladError::Http`] if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            api_secret: Zeroizing::new(api_secret.into()),
        })
    }

    /// Sends a signed POST to a private endpoint and decodes the envelope.
    ///
    /// Performs exactly one outbound request with no retries. An `Err`
    /// return is the "no response" condition: transport failure or a
    /// body that is not a valid envelope. An exchange-reported failure
    /// comes back as `Ok` with `error` set.
    ///
    /// # Errors
    ///
    /// - [`TaladError::InvalidRequest`] if `path` is empty or `params`
    ///   already contains `ts` or `sig`.
    /// - [`TaladError::Http`] if the round trip fails.
    /// - [`TaladError::Json`] / [`TaladError::MalformedResponse`] if the
    ///   body cannot be decoded as an envelope.
    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        mut params: Map<String, Value>,
    ) -> Result<ApiResponse<T>> {
        if path.is_empty() {
            return Err(TaladError::InvalidRequest("empty API path".to_string()));
        }
        for key in RESERVED_KEYS {
            if params.contains_key(key) {
                return Err(TaladError::InvalidRequest(format!(
                    "parameter `{key}` is injected by the signing pipeline"
                )));
            }
        }

        let ts = unix_now();
        params.insert("ts".to_string(), Value::from(ts));
        let payload = serde_json::to_vec(&params)?;
        let signature = sign(&self.api_secret, &payload)?;
        params.insert("sig".to_string(), Value::String(signature));

        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .header(HEADER_API_KEY, &self.api_key)
            .json(&params)
            .send()
            .await?;

        let body = response.bytes().await?;
        decode_envelope(&body)
    }
}

/// Returns the current Unix time in seconds.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Computes the request signature: `hex(HMAC-SHA256(secret, payload))`.
fn sign(secret: &str, payload: &[u8]) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| TaladError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Decodes a raw response body into a typed envelope.
///
/// The body is parsed as a generic JSON object first; the integer
/// `error` code is resolved through the static catalog, a
/// server-supplied `message` string overrides the canned description,
/// and `result` (when present) is re-decoded into `T`.
fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<ApiResponse<T>> {
    let raw: Value = serde_json::from_slice(body)?;

    let code = raw
        .get("error")
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            TaladError::MalformedResponse("missing integer `error` code".to_string())
        })?;
    let code = u32::try_from(code).map_err(|_| {
        TaladError::MalformedResponse(format!("error code {code} out of range"))
    })?;

    let error = catalog::lookup(code).map(|resolved| {
        let mut error = ApiError::from(resolved);
        if let Some(message) = raw.get("message").and_then(Value::as_str) {
            // Server-supplied detail takes precedence over the catalog.
            error.description = message.to_string();
        }
        error
    });

    let result = match raw.get("result") {
        Some(value) if !value.is_null() => Some(serde_json::from_value(value.clone())?),
        _ => None,
    };

    Ok(ApiResponse { error, result })
}
