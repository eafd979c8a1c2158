// ABOUTME: Integration tests for analysis-context assembly
// ABOUTME: Record sanitation, auto-generated event filtering, and timezone degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::{Duration, Utc};
use common::{at_hour, sleep_sample, FakeRepository};
use lumen_core::models::{CalendarEvent, MetricSample, MetricType};
use lumen_intelligence::{ContextBuilder, InsightEngineConfig};
use uuid::Uuid;

fn config() -> InsightEngineConfig {
    InsightEngineConfig::default()
}

#[tokio::test]
async fn test_out_of_window_and_non_finite_samples_are_dropped() {
    let stale = MetricSample::new(
        MetricType::Sleep,
        7.0,
        "hours",
        Utc::now() - Duration::days(45),
        "test",
    )
    .unwrap();
    // Bypasses the validated constructor the way a corrupt store row would
    let corrupt = MetricSample {
        value: f64::NAN,
        ..sleep_sample(2, 7.0)
    };
    let repo = FakeRepository {
        metrics: vec![stale, corrupt, sleep_sample(1, 7.5)],
        ..FakeRepository::default()
    };

    let cfg = config();
    let ctx = ContextBuilder::new(&cfg)
        .build(&repo, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(ctx.metrics.len(), 1);
    assert!((ctx.metrics[0].value - 7.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_auto_generated_calendar_events_are_filtered() {
    let keep = CalendarEvent {
        title: "Standup".to_owned(),
        start_time: at_hour(1, 9),
        end_time: at_hour(1, 10),
        is_all_day: false,
    };
    let drop = CalendarEvent {
        title: "Focus block [auto]".to_owned(),
        start_time: at_hour(1, 13),
        end_time: at_hour(1, 15),
        is_all_day: false,
    };
    let repo = FakeRepository {
        calendar_events: vec![keep, drop],
        ..FakeRepository::default()
    };

    let cfg = config();
    let ctx = ContextBuilder::new(&cfg)
        .build(&repo, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(ctx.calendar_events.len(), 1);
    assert_eq!(ctx.calendar_events[0].title, "Standup");
}

#[tokio::test]
async fn test_unresolvable_profile_degrades_to_utc() {
    let repo = FakeRepository {
        failing_timezone: true,
        ..FakeRepository::default()
    };

    let cfg = config();
    let ctx = ContextBuilder::new(&cfg)
        .build(&repo, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(ctx.timezone, "UTC");
}

#[tokio::test]
async fn test_resolved_timezone_is_carried_verbatim() {
    let repo = FakeRepository {
        timezone: Some("America/New_York".to_owned()),
        ..FakeRepository::default()
    };

    let cfg = config();
    let ctx = ContextBuilder::new(&cfg)
        .build(&repo, Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(ctx.timezone, "America/New_York");
}
