//! Canonical traffic types folded from the Cloudflare API shapes.

use chrono::NaiveDate;
use co2_cloudflare::TrafficGroup;
use serde::{Deserialize, Serialize};

/// Normalized zone analytics for one `[since, until]` window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficSummary {
    pub zone_id: String,
    pub since: NaiveDate,
    pub until: NaiveDate,
    pub totals: TrafficTotals,
    /// Per-day breakdown in upstream order (ascending by date),
    /// bounded by the query's 100-row limit.
    pub daily: Vec<DailyTraffic>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficTotals {
    pub requests: u64,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTraffic {
    pub date: NaiveDate,
    pub requests: u64,
    pub bytes: u64,
}

impl TrafficSummary {
    /// Fold the upstream daily groups into a summary.
    ///
    /// Totals accumulate every group's `sum` values as reported -- they
    /// are never recomputed from finer-grained data, so an upstream
    /// divergence between totals and rows passes through unchanged.
    /// Groups without a date fold into the totals but are excluded
    /// from the per-day breakdown.
    pub fn from_groups(
        zone_id: String,
        since: NaiveDate,
        until: NaiveDate,
        groups: Vec<TrafficGroup>,
    ) -> Self {
        let mut totals = TrafficTotals::default();
        let mut daily = Vec::with_capacity(groups.len());

        for group in groups {
            totals.requests += group.requests;
            totals.bytes += group.bytes;
            if let Some(date) = group.date {
                daily.push(DailyTraffic {
                    date,
                    requests: group.requests,
                    bytes: group.bytes,
                });
            }
        }

        Self {
            zone_id,
            since,
            until,
            totals,
            daily,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn group(date: Option<&str>, requests: u64, bytes: u64) -> TrafficGroup {
        TrafficGroup {
            date: date.map(day),
            requests,
            bytes,
        }
    }

    #[test]
    fn totals_and_daily_from_dated_groups() {
        let summary = TrafficSummary::from_groups(
            "zone123".into(),
            day("2024-01-01"),
            day("2024-01-02"),
            vec![
                group(Some("2024-01-01"), 10, 1000),
                group(Some("2024-01-02"), 5, 500),
            ],
        );

        assert_eq!(summary.totals, TrafficTotals { requests: 15, bytes: 1500 });
        assert_eq!(summary.daily.len(), 2);
        assert_eq!(summary.daily[0].date, day("2024-01-01"));
        assert_eq!(summary.daily[1].bytes, 500);
    }

    #[test]
    fn dateless_groups_fold_into_totals_only() {
        let summary = TrafficSummary::from_groups(
            "zone123".into(),
            day("2024-01-01"),
            day("2024-01-03"),
            vec![
                group(Some("2024-01-01"), 1, 100),
                group(None, 9, 900),
            ],
        );

        assert_eq!(summary.totals, TrafficTotals { requests: 10, bytes: 1000 });
        assert_eq!(summary.daily.len(), 1);
    }

    #[test]
    fn upstream_order_is_preserved() {
        // The API contract says ascending, but whatever arrives is kept.
        let summary = TrafficSummary::from_groups(
            "zone123".into(),
            day("2024-01-01"),
            day("2024-01-02"),
            vec![
                group(Some("2024-01-02"), 2, 20),
                group(Some("2024-01-01"), 1, 10),
            ],
        );

        assert_eq!(summary.daily[0].date, day("2024-01-02"));
        assert_eq!(summary.daily[1].date, day("2024-01-01"));
    }

    #[test]
    fn empty_groups_yield_zero_totals() {
        let summary = TrafficSummary::from_groups(
            "zone123".into(),
            day("2024-01-01"),
            day("2024-01-31"),
            vec![],
        );
        assert_eq!(summary.totals, TrafficTotals::default());
        assert!(summary.daily.is_empty());
    }
}
