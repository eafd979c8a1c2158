// ABOUTME: Pure aggregation primitives shared by every domain analyzer
// ABOUTME: Date bucketing, timezone-aware hours, moving averages, and cohort splits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Aggregation Primitives
//!
//! Timezone-aware bucketing and small statistics helpers. Day keys are
//! `YYYY-MM-DD` strings computed in the *user's* resolved timezone, never UTC
//! or device-local time, so "a day" lines up with the user's lived day. The
//! string format sorts lexicographically in chronological order, which the
//! moving-average and trend helpers rely on.

use chrono::{DateTime, Local, NaiveDate, Timelike, Utc};
use chrono_tz::Tz;
use std::collections::BTreeMap;

/// Format used for all per-day bucket keys
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Resolve an IANA timezone identifier
#[must_use]
pub fn resolve_timezone(tz_name: &str) -> Option<Tz> {
    tz_name.parse::<Tz>().ok()
}

/// Canonical per-day bucket key for a timestamp, computed in the user's
/// timezone. Falls back to UTC when the identifier does not resolve.
#[must_use]
pub fn date_key(ts: DateTime<Utc>, tz_name: &str) -> String {
    resolve_timezone(tz_name).map_or_else(
        || ts.format(DAY_KEY_FORMAT).to_string(),
        |tz| ts.with_timezone(&tz).format(DAY_KEY_FORMAT).to_string(),
    )
}

/// Timezone-correct hour of day (0-23). Falls back to the device-local hour
/// when the identifier does not resolve; never errors.
#[must_use]
pub fn hour_in_timezone(ts: DateTime<Utc>, tz_name: &str) -> u32 {
    resolve_timezone(tz_name).map_or_else(
        || ts.with_timezone(&Local).hour(),
        |tz| ts.with_timezone(&tz).hour(),
    )
}

/// Shift a day key by a number of days. Returns `None` for unparseable keys.
#[must_use]
pub fn offset_day_key(key: &str, days: i64) -> Option<String> {
    let date = NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()?;
    let shifted = date.checked_add_signed(chrono::Duration::days(days))?;
    Some(shifted.format(DAY_KEY_FORMAT).to_string())
}

/// Day key for a plain date (already local to the user)
#[must_use]
pub fn naive_date_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Group records into per-day buckets keyed by `date_key`
pub fn group_by_day<'a, T, F>(
    items: &'a [T],
    timestamp: F,
    tz_name: &str,
) -> BTreeMap<String, Vec<&'a T>>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut grouped: BTreeMap<String, Vec<&T>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(date_key(timestamp(item), tz_name))
            .or_default()
            .push(item);
    }
    grouped
}

/// Per-day sums of a scalar extracted from each record
pub fn daily_sums<T, F, V>(
    items: &[T],
    timestamp: F,
    value: V,
    tz_name: &str,
) -> BTreeMap<String, f64>
where
    F: Fn(&T) -> DateTime<Utc>,
    V: Fn(&T) -> Option<f64>,
{
    let mut sums: BTreeMap<String, f64> = BTreeMap::new();
    for item in items {
        if let Some(v) = value(item).filter(|v| v.is_finite()) {
            *sums.entry(date_key(timestamp(item), tz_name)).or_insert(0.0) += v;
        }
    }
    sums
}

/// Per-day means of a scalar extracted from each record
pub fn daily_means<T, F, V>(
    items: &[T],
    timestamp: F,
    value: V,
    tz_name: &str,
) -> BTreeMap<String, f64>
where
    F: Fn(&T) -> DateTime<Utc>,
    V: Fn(&T) -> Option<f64>,
{
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for item in items {
        if let Some(v) = value(item).filter(|v| v.is_finite()) {
            let slot = sums.entry(date_key(timestamp(item), tz_name)).or_insert((0.0, 0));
            slot.0 += v;
            slot.1 += 1;
        }
    }
    sums.into_iter()
        .map(|(day, (sum, count))| (day, sum / count as f64))
        .collect()
}

/// Per-day record counts
pub fn daily_counts<T, F>(items: &[T], timestamp: F, tz_name: &str) -> BTreeMap<String, f64>
where
    F: Fn(&T) -> DateTime<Utc>,
{
    let mut counts: BTreeMap<String, f64> = BTreeMap::new();
    for item in items {
        *counts.entry(date_key(timestamp(item), tz_name)).or_insert(0.0) += 1.0;
    }
    counts
}

/// Trailing moving average over a chronologically keyed series.
///
/// For the i-th date the result is the mean of the `min(i+1, window)` most
/// recent values up to and including that date - a partial window at the
/// start of history, never a look-ahead.
#[must_use]
pub fn moving_average(series: &BTreeMap<String, f64>, window: usize) -> BTreeMap<String, f64> {
    if window == 0 {
        return BTreeMap::new();
    }
    let ordered: Vec<(&String, f64)> = series.iter().map(|(k, v)| (k, *v)).collect();
    let mut averaged = BTreeMap::new();
    for (i, (day, _)) in ordered.iter().enumerate() {
        let start = i.saturating_sub(window - 1);
        let slice: Vec<f64> = ordered[start..=i].iter().map(|(_, v)| *v).collect();
        if let Some(avg) = mean(&slice) {
            averaged.insert((*day).clone(), avg);
        }
    }
    averaged
}

/// Partition day keys into high- and low-exposure cohorts by comparing each
/// day's value against multiples of the series mean. Days between the two
/// gates belong to neither cohort.
#[must_use]
pub fn cohort_split(
    values_by_day: &BTreeMap<String, f64>,
    high_multiplier: f64,
    low_multiplier: f64,
) -> (Vec<String>, Vec<String>) {
    let values: Vec<f64> = values_by_day.values().copied().collect();
    let Some(reference) = mean(&values) else {
        return (Vec::new(), Vec::new());
    };

    let mut high = Vec::new();
    let mut low = Vec::new();
    for (day, value) in values_by_day {
        if *value >= reference * high_multiplier {
            high.push(day.clone());
        } else if *value <= reference * low_multiplier {
            low.push(day.clone());
        }
    }
    (high, low)
}

/// Arithmetic mean; `None` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation; `None` for an empty slice
#[must_use]
pub fn std_deviation(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Mean of a day-keyed series restricted to the given day keys, with the
/// number of days that actually carried a value.
#[must_use]
pub fn mean_over_days(days: &[String], series: &BTreeMap<String, f64>) -> (usize, Option<f64>) {
    let values: Vec<f64> = days.iter().filter_map(|d| series.get(d)).copied().collect();
    (values.len(), mean(&values))
}
