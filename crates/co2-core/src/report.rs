//! Report composition.
//!
//! The report is a TOML document with a fixed comment header. It is
//! produced once and written once; nothing in this system reads it
//! back, so the serde `Deserialize` derives exist for tests only.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::emissions::EmissionsModel;
use crate::traffic::TrafficSummary;

/// Report schema version.
pub const REPORT_VERSION: &str = "0.3";

const REPORT_HEADER: &str = "# Generated by CO2.js GitHub Action";

/// The complete report document.
///
/// Field order matters: TOML requires root scalars before tables, and
/// the `[cloudflare]` scalars before its `[[cloudflare.daily]]` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub version: String,
    pub last_updated: String,
    pub build: BuildSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudflare: Option<CloudflareSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSection {
    pub date: String,
    pub total_bytes: u64,
    pub green_hosting: bool,
    pub estimated_co2_grams: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudflareSection {
    pub zone_id: String,
    pub since: NaiveDate,
    pub until: NaiveDate,
    pub requests: u64,
    pub bytes: u64,
    pub estimated_co2_grams: f64,
    pub daily: Vec<DailyEmissions>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEmissions {
    pub date: NaiveDate,
    pub requests: u64,
    pub bytes: u64,
    pub estimated_co2_grams: f64,
}

impl Report {
    /// Compose a report from pre-validated inputs.
    ///
    /// Deterministic except for `generated_at`, which the caller
    /// captures once (tests pass a fixed instant). The model is
    /// invoked per analytics day and once for the analytics byte
    /// total; the aggregate build estimate arrives pre-computed.
    pub fn compose(
        total_bytes: u64,
        green_hosting: bool,
        estimated_grams: f64,
        analytics: Option<&TrafficSummary>,
        model: &dyn EmissionsModel,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let stamp = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true);

        let cloudflare = analytics.map(|summary| CloudflareSection {
            zone_id: summary.zone_id.clone(),
            since: summary.since,
            until: summary.until,
            requests: summary.totals.requests,
            bytes: summary.totals.bytes,
            estimated_co2_grams: model.estimate(summary.totals.bytes, green_hosting),
            daily: summary
                .daily
                .iter()
                .map(|day| DailyEmissions {
                    date: day.date,
                    requests: day.requests,
                    bytes: day.bytes,
                    estimated_co2_grams: model.estimate(day.bytes, green_hosting),
                })
                .collect(),
        });

        Self {
            version: REPORT_VERSION.to_owned(),
            last_updated: stamp.clone(),
            build: BuildSection {
                date: stamp,
                total_bytes,
                green_hosting,
                estimated_co2_grams: estimated_grams,
            },
            cloudflare,
        }
    }

    /// Render the document: fixed header line, then the TOML body.
    pub fn render(&self) -> String {
        let body = toml::to_string_pretty(self).expect("report serialization should not fail");
        format!("{REPORT_HEADER}\n{body}")
    }
}
