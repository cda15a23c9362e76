// Wire shapes for the daily-traffic GraphQL query.
//
// Every level of the response is optional: Cloudflare returns `null`
// for zones the token cannot see, and partial objects under load.
// Extraction therefore defaults absent values instead of failing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily request/byte aggregates for one zone, capped at 100 rows
/// (~100 days) and ordered chronologically ascending by the API.
pub(crate) const DAILY_TRAFFIC_QUERY: &str = r"
query DailyTraffic($zoneTag: String!, $since: Date!, $until: Date!) {
  viewer {
    zones(filter: { zoneTag: $zoneTag }) {
      httpRequests1dGroups(
        limit: 100
        orderBy: [date_ASC]
        filter: { date_geq: $since, date_leq: $until }
      ) {
        dimensions { date }
        sum { requests bytes }
      }
    }
  }
}";

// ── Request ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Variables<'a> {
    pub zone_tag: &'a str,
    pub since: NaiveDate,
    pub until: NaiveDate,
}

// ── Response envelope ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single entry of the GraphQL `errors` array. Only `message` is
/// modeled; everything else is carried opaquely for diagnostics.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ResponseData {
    #[serde(default)]
    viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    #[serde(default)]
    zones: Option<Vec<Zone>>,
}

#[derive(Debug, Deserialize)]
struct Zone {
    #[serde(rename = "httpRequests1dGroups", default)]
    groups: Option<Vec<Group>>,
}

#[derive(Debug, Deserialize)]
struct Group {
    #[serde(default)]
    dimensions: Option<Dimensions>,
    #[serde(default)]
    sum: Option<GroupSum>,
}

#[derive(Debug, Deserialize)]
struct Dimensions {
    #[serde(default)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct GroupSum {
    #[serde(default)]
    requests: Option<u64>,
    #[serde(default)]
    bytes: Option<u64>,
}

// ── Normalized output ───────────────────────────────────────────────

/// One daily aggregation group, with upstream nulls already defaulted.
///
/// `date` stays optional: a dateless group is excluded from per-day
/// breakdowns by consumers, but its sums still count toward totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficGroup {
    pub date: Option<NaiveDate>,
    pub requests: u64,
    pub bytes: u64,
}

/// Extract the first zone's daily groups from a response body.
///
/// Absent `data`, `viewer`, `zones`, or group arrays all yield an
/// empty list; missing numeric sub-fields become 0.
pub(crate) fn extract_groups(data: Option<ResponseData>) -> Vec<TrafficGroup> {
    let groups = data
        .and_then(|d| d.viewer)
        .and_then(|v| v.zones)
        .and_then(|zones| zones.into_iter().next())
        .and_then(|zone| zone.groups)
        .unwrap_or_default();

    groups
        .into_iter()
        .map(|group| {
            let sum = group.sum.unwrap_or(GroupSum {
                requests: None,
                bytes: None,
            });
            TrafficGroup {
                date: group.dimensions.and_then(|d| d.date),
                requests: sum.requests.unwrap_or(0),
                bytes: sum.bytes.unwrap_or(0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Vec<TrafficGroup> {
        let envelope: GraphQlResponse =
            serde_json::from_str(body).expect("test body should parse");
        extract_groups(envelope.data)
    }

    #[test]
    fn null_data_yields_empty() {
        assert!(parse(r#"{"data": null}"#).is_empty());
        assert!(parse(r#"{"data": {"viewer": null}}"#).is_empty());
        assert!(parse(r#"{"data": {"viewer": {"zones": null}}}"#).is_empty());
        assert!(parse(r#"{"data": {"viewer": {"zones": []}}}"#).is_empty());
    }

    #[test]
    fn missing_sum_fields_default_to_zero() {
        let groups = parse(
            r#"{"data": {"viewer": {"zones": [{"httpRequests1dGroups": [
                {"dimensions": {"date": "2024-01-01"}, "sum": {"requests": 7}},
                {"dimensions": {"date": "2024-01-02"}}
            ]}]}}}"#,
        );
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].requests, 7);
        assert_eq!(groups[0].bytes, 0);
        assert_eq!(groups[1].requests, 0);
        assert_eq!(groups[1].bytes, 0);
    }

    #[test]
    fn dateless_group_keeps_sums() {
        let groups = parse(
            r#"{"data": {"viewer": {"zones": [{"httpRequests1dGroups": [
                {"sum": {"requests": 3, "bytes": 42}}
            ]}]}}}"#,
        );
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].date, None);
        assert_eq!(groups[0].bytes, 42);
    }
}
