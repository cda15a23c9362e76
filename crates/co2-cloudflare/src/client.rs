// Hand-crafted async HTTP client for the Cloudflare GraphQL analytics API.
//
// Endpoint: https://api.cloudflare.com/client/v4/graphql
// Auth: Authorization: Bearer <token>

use reqwest::header::{self, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::analytics::{
    self, DAILY_TRAFFIC_QUERY, GraphQlRequest, GraphQlResponse, TrafficGroup, Variables,
};
use crate::transport::TransportConfig;

/// The fixed production GraphQL analytics endpoint.
pub const GRAPHQL_ENDPOINT: &str = "https://api.cloudflare.com/client/v4/graphql";

/// Async client for the Cloudflare zone-analytics GraphQL API.
///
/// Holds a bearer-authenticated `reqwest::Client`; one instance issues
/// one query per action run.
pub struct CloudflareClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl CloudflareClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from an API token against the production endpoint.
    ///
    /// Injects `Authorization: Bearer <token>` as a sensitive default
    /// header on every request.
    pub fn from_token(
        api_token: &secrecy::SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        Self::from_token_with_endpoint(api_token, GRAPHQL_ENDPOINT, transport)
    }

    /// Build from an API token against an explicit endpoint (tests).
    pub fn from_token_with_endpoint(
        api_token: &secrecy::SecretString,
        endpoint: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_token.expose_secret()))
            .map_err(|e| Error::Authentication {
                message: format!("invalid API token header value: {e}"),
            })?;
        bearer.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, bearer);

        let http = transport.build_client_with_headers(headers)?;
        let endpoint = Url::parse(endpoint)?;

        Ok(Self { http, endpoint })
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Fetch daily request/byte aggregates for `zone_tag` over the
    /// inclusive `[since, until]` window.
    ///
    /// Returns the zone's daily groups in upstream order (ascending by
    /// date), at most 100 rows. A token without access to the zone
    /// yields an empty list, not an error.
    pub async fn daily_traffic(
        &self,
        zone_tag: &str,
        since: chrono::NaiveDate,
        until: chrono::NaiveDate,
    ) -> Result<Vec<TrafficGroup>, Error> {
        let body = GraphQlRequest {
            query: DAILY_TRAFFIC_QUERY,
            variables: Variables {
                zone_tag,
                since,
                until,
            },
        };

        debug!("POST {} zone={zone_tag} window={since}..{until}", self.endpoint);
        let resp = self.http.post(self.endpoint.clone()).json(&body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp.text().await?;
        let envelope: GraphQlResponse = serde_json::from_str(&raw).map_err(|e| {
            let preview = &raw[..raw.len().min(200)];
            Error::Deserialization {
                message: format!("{e} (body preview: {preview:?})"),
                body: raw.clone(),
            }
        })?;

        if let Some(errors) = envelope.errors.filter(|errors| !errors.is_empty()) {
            let payload = serde_json::to_string(&errors)
                .unwrap_or_else(|_| format!("{} unserializable error(s)", errors.len()));
            return Err(Error::Api { payload });
        }

        Ok(analytics::extract_groups(envelope.data))
    }
}
