use thiserror::Error;

/// Top-level error type for the `co2-cloudflare` crate.
///
/// Covers every failure mode of the single analytics query:
/// credential wiring, transport, HTTP status, GraphQL-level errors,
/// and body deserialization. `co2-core` downgrades all of these into
/// a warning plus an omitted analytics section.
#[derive(Debug, Error)]
pub enum Error {
    /// The API token could not be installed as a request header.
    #[error("Authentication setup failed: {message}")]
    Authentication { message: String },

    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-success HTTP status from the analytics endpoint.
    #[error("Analytics API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The GraphQL envelope carried a non-empty `errors` array.
    /// `payload` is the serialized error list for diagnostics.
    #[error("Analytics query rejected: {payload}")]
    Api { payload: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error points at a bad or rejected token.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::Status { status: 401 | 403, .. }
        )
    }
}
