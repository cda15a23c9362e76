// Shared transport configuration for building reqwest::Client instances.
//
// Kept separate from the client so tests can shorten timeouts without
// touching auth wiring.

use std::time::Duration;

/// Transport configuration for the analytics HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Request timeout. `None` leaves the transport's own default in
    /// place -- the action configures no timeout of its own.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("co2-action/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` with additional default headers.
    ///
    /// Used by [`CloudflareClient`](crate::CloudflareClient) to inject
    /// the `Authorization: Bearer` header on every request.
    pub fn build_client_with_headers(
        &self,
        headers: reqwest::header::HeaderMap,
    ) -> Result<reqwest::Client, crate::error::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .default_headers(headers);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
