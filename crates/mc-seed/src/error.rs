//! Error types for the seeder.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for seeding operations.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The HTTP client could not be constructed, so no request can be made.
    #[error(
        "HTTP client unavailable: {0}\n\
         A possible cause is a build without a reqwest TLS backend; \
         if so, rebuild with the default features enabled."
    )]
    HttpUnavailable(String),

    /// Configuration error (missing credential, bad URL, bad header value).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server answered with a status other than 200 or 201.
    #[error("ERROR {}: {body}", .status.as_u16())]
    Api { status: StatusCode, body: String },

    /// Transport-level failure (DNS, connection refused, timeout).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for seeding operations.
pub type Result<T> = std::result::Result<T, SeedError>;
