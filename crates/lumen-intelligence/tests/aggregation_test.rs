// ABOUTME: Integration tests for the aggregation primitives
// ABOUTME: Timezone bucketing, moving averages, cohort splits, and restricted means
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use chrono::{DateTime, Utc};
use lumen_intelligence::aggregation::{
    cohort_split, date_key, hour_in_timezone, mean_over_days, moving_average, offset_day_key,
};
use std::collections::BTreeMap;

fn utc(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

#[test]
fn test_hour_in_timezone_converts_across_date_line() {
    // 23:30 UTC on June 1 is 19:30 the same evening in New York (EDT)
    let ts = utc("2025-06-01T23:30:00Z");
    assert_eq!(hour_in_timezone(ts, "America/New_York"), 19);
}

#[test]
fn test_date_key_buckets_by_user_timezone() {
    // Late UTC evening is still June 1 in New York but already June 2 in Tokyo
    let ts = utc("2025-06-01T23:30:00Z");
    assert_eq!(date_key(ts, "America/New_York"), "2025-06-01");
    assert_eq!(date_key(ts, "Asia/Tokyo"), "2025-06-02");
}

#[test]
fn test_date_key_falls_back_to_utc_on_bad_identifier() {
    let ts = utc("2025-06-01T23:30:00Z");
    assert_eq!(date_key(ts, "Not/AZone"), "2025-06-01");
}

#[test]
fn test_offset_day_key_crosses_month_boundary() {
    assert_eq!(offset_day_key("2025-06-30", 1).unwrap(), "2025-07-01");
    assert_eq!(offset_day_key("2025-06-01", -1).unwrap(), "2025-05-31");
    assert!(offset_day_key("not-a-date", 1).is_none());
}

#[test]
fn test_moving_average_partial_then_full_windows() {
    let series: BTreeMap<String, f64> = [
        ("2025-06-01", 2.0),
        ("2025-06-02", 4.0),
        ("2025-06-03", 6.0),
        ("2025-06-04", 8.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect();

    let smoothed = moving_average(&series, 3);
    // Partial windows at the start of history
    assert_eq!(smoothed["2025-06-01"], 2.0);
    assert_eq!(smoothed["2025-06-02"], 3.0);
    // Full trailing windows once enough history exists
    assert_eq!(smoothed["2025-06-03"], 4.0);
    assert_eq!(smoothed["2025-06-04"], 6.0);
}

#[test]
fn test_moving_average_window_one_is_identity() {
    let series: BTreeMap<String, f64> = [("2025-06-01".to_owned(), 5.5)].into_iter().collect();
    assert_eq!(moving_average(&series, 1), series);
}

#[test]
fn test_cohort_split_leaves_middle_days_out() {
    // Mean is 100; gates at 120 and 80
    let series: BTreeMap<String, f64> = [
        ("2025-06-01", 150.0),
        ("2025-06-02", 100.0),
        ("2025-06-03", 50.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect();

    let (high, low) = cohort_split(&series, 1.2, 0.8);
    assert_eq!(high, vec!["2025-06-01".to_owned()]);
    assert_eq!(low, vec!["2025-06-03".to_owned()]);
}

#[test]
fn test_mean_over_days_counts_only_covered_days() {
    let series: BTreeMap<String, f64> = [("2025-06-01".to_owned(), 6.0)].into_iter().collect();
    let days = vec!["2025-06-01".to_owned(), "2025-06-02".to_owned()];

    let (n, avg) = mean_over_days(&days, &series);
    assert_eq!(n, 1);
    assert_eq!(avg, Some(6.0));

    let (n, avg) = mean_over_days(&["2025-07-01".to_owned()], &series);
    assert_eq!(n, 0);
    assert_eq!(avg, None);
}
