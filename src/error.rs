//! Crate-level error types.
//!
//! [`TaladError`] unifies every error source (configuration, HTTP, JSON)
//! behind a single enum so callers can match on the variant they care
//! about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TaladError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TaladError {
    /// A required environment variable is missing or a component could
    /// not be constructed from the configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// An HTTP round trip to the exchange or notification service failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A network listener operation failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller supplied parameters the signed-call pipeline cannot
    /// accept (reserved keys, empty path).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The exchange returned a body that does not follow the documented
    /// envelope shape.
    #[error("malformed exchange response: {0}")]
    MalformedResponse(String),
}
