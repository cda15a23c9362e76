//! Optional Cloudflare analytics with strict soft-degradation.
//!
//! Every exit path except success returns `None`: disabled config,
//! missing credentials, client construction failure, and any transport
//! or API error. The run never aborts because analytics are missing --
//! the report simply omits its analytics section.

use chrono::{Days, NaiveDate};
use co2_cloudflare::{CloudflareClient, TrafficGroup, TransportConfig};
use tracing::{debug, warn};

use crate::config::CloudflareSettings;
use crate::traffic::TrafficSummary;

/// Length of the default trailing analytics window.
const DEFAULT_WINDOW_DAYS: u64 = 30;

/// Injected analytics capability, so tests can substitute a
/// deterministic fake for the HTTP client.
#[allow(async_fn_in_trait)]
pub trait TrafficSource {
    async fn daily_traffic(
        &self,
        zone_tag: &str,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TrafficGroup>, co2_cloudflare::Error>;
}

impl TrafficSource for CloudflareClient {
    async fn daily_traffic(
        &self,
        zone_tag: &str,
        since: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<TrafficGroup>, co2_cloudflare::Error> {
        CloudflareClient::daily_traffic(self, zone_tag, since, until).await
    }
}

/// Resolve the analytics window: absent bounds default to a trailing
/// 30-day window ending `today` (the UTC date of invocation).
pub fn resolve_window(
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    let since = since.unwrap_or_else(|| {
        today
            .checked_sub_days(Days::new(DEFAULT_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MIN)
    });
    let until = until.unwrap_or(today);
    (since, until)
}

/// Fetch zone analytics, degrading every failure to `None`.
///
/// Single pass, no retries. `today` anchors the default window.
pub async fn fetch_analytics(
    settings: &CloudflareSettings,
    today: NaiveDate,
) -> Option<TrafficSummary> {
    if !settings.enabled {
        debug!("Cloudflare analytics disabled");
        return None;
    }

    let Some(api_token) = settings.api_token.as_ref() else {
        warn!("Cloudflare analytics enabled but no API token provided; skipping");
        return None;
    };
    let Some(zone_id) = settings.zone_id.as_deref() else {
        warn!("Cloudflare analytics enabled but no zone id provided; skipping");
        return None;
    };

    let client = match CloudflareClient::from_token(api_token, &TransportConfig::default()) {
        Ok(client) => client,
        Err(error) => {
            warn!("Could not build Cloudflare client: {error}");
            return None;
        }
    };

    fetch_with_source(&client, zone_id, settings.since, settings.until, today).await
}

/// The request-and-normalize half of [`fetch_analytics`], generic over
/// the source so tests can drive it with a fake.
pub async fn fetch_with_source<S: TrafficSource>(
    source: &S,
    zone_id: &str,
    since: Option<NaiveDate>,
    until: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<TrafficSummary> {
    let (since, until) = resolve_window(since, until, today);

    match source.daily_traffic(zone_id, since, until).await {
        Ok(groups) => {
            debug!("fetched {} daily group(s) for zone {zone_id}", groups.len());
            Some(TrafficSummary::from_groups(
                zone_id.to_owned(),
                since,
                until,
                groups,
            ))
        }
        Err(error) => {
            warn!("Cloudflare analytics fetch failed: {error}");
            None
        }
    }
}
