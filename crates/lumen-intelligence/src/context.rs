// ABOUTME: Analysis context assembly from the seven telemetry domains
// ABOUTME: Batched concurrent reads, record sanitation, and shared per-day series helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Analysis Context
//!
//! One immutable bundle of a user's records for the trailing window, built
//! once per engine invocation and shared read-only across every analyzer.
//! The seven repository reads are independent and issued concurrently; all
//! must complete before construction proceeds, and any single failure is
//! fatal to the invocation (`EngineError::DataFetch`).

use crate::aggregation::{daily_counts, daily_means};
use crate::config::InsightEngineConfig;
use crate::ports::HealthDataRepository;
use chrono::{DateTime, Duration, Utc};
use lumen_core::errors::{EngineError, EngineResult};
use lumen_core::models::{
    CalendarEvent, CycleEntry, CyclePhase, FoodEntry, LogType, ManualLogEntry, MedicationLogEntry,
    MetricSample, MetricType, WeatherRecord,
};
use std::collections::BTreeMap;
use tracing::{debug, warn};
use uuid::Uuid;

/// Immutable bundle of one user's records across all domains for the
/// analysis window, plus the resolved timezone. Never mutated after
/// construction; analyzers read it by shared reference.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    /// Device metric samples inside the window
    pub metrics: Vec<MetricSample>,
    /// Manual log entries inside the window
    pub manual_logs: Vec<ManualLogEntry>,
    /// Food diary entries inside the window
    pub food_entries: Vec<FoodEntry>,
    /// Calendar events from window start onward, auto-generated events removed
    pub calendar_events: Vec<CalendarEvent>,
    /// Daily weather records inside the window
    pub weather: Vec<WeatherRecord>,
    /// Medication check-ins inside the window
    pub medication_logs: Vec<MedicationLogEntry>,
    /// Cycle entries, most recent first
    pub cycle_entries: Vec<CycleEntry>,
    /// Resolved IANA timezone identifier
    pub timezone: String,
    /// Start of the trailing window
    pub window_start: DateTime<Utc>,
    /// Moment the context was assembled
    pub generated_at: DateTime<Utc>,
}

impl AnalysisContext {
    /// Metric samples of one type, in recorded order
    #[must_use]
    pub fn samples_of(&self, metric_type: MetricType) -> Vec<&MetricSample> {
        self.metrics
            .iter()
            .filter(|s| s.metric_type == metric_type)
            .collect()
    }

    /// Manual log entries of one type, in logged order
    #[must_use]
    pub fn logs_of(&self, log_type: LogType) -> Vec<&ManualLogEntry> {
        self.manual_logs
            .iter()
            .filter(|l| l.log_type == log_type)
            .collect()
    }

    /// Total record count across every domain, used for fallback selection
    #[must_use]
    pub fn total_record_count(&self) -> usize {
        self.metrics.len()
            + self.manual_logs.len()
            + self.food_entries.len()
            + self.calendar_events.len()
            + self.weather.len()
            + self.medication_logs.len()
            + self.cycle_entries.len()
    }

    /// The user's most recently logged cycle phase, if any
    #[must_use]
    pub fn current_phase(&self) -> Option<CyclePhase> {
        self.cycle_entries.first().map(|e| e.phase)
    }

    /// Nightly sleep duration (hours) keyed by wake-day. Multiple samples on
    /// one day (naps, split nights) are averaged.
    #[must_use]
    pub fn sleep_by_night(&self) -> BTreeMap<String, f64> {
        self.metric_daily_means(MetricType::Sleep)
    }

    /// Per-day mean of one metric type
    #[must_use]
    pub fn metric_daily_means(&self, metric_type: MetricType) -> BTreeMap<String, f64> {
        let samples: Vec<&MetricSample> = self.samples_of(metric_type);
        daily_means(
            &samples,
            |s| s.recorded_at,
            |s| Some(s.value),
            &self.timezone,
        )
    }

    /// Symptom log count per day
    #[must_use]
    pub fn symptom_counts_by_day(&self) -> BTreeMap<String, f64> {
        let symptoms: Vec<&ManualLogEntry> = self.logs_of(LogType::Symptom);
        daily_counts(&symptoms, |l| l.logged_at, &self.timezone)
    }
}

/// Builds an [`AnalysisContext`] from the injected repository
pub struct ContextBuilder<'a> {
    config: &'a InsightEngineConfig,
}

impl<'a> ContextBuilder<'a> {
    /// Create a builder bound to an engine configuration
    #[must_use]
    pub const fn new(config: &'a InsightEngineConfig) -> Self {
        Self { config }
    }

    /// Fetch all seven domains concurrently and assemble the context.
    ///
    /// # Errors
    /// Returns `EngineError::DataFetch` when any domain read fails; the
    /// orchestrator never invents insights from a partially built context.
    pub async fn build<R: HealthDataRepository>(
        &self,
        repo: &R,
        user_id: Uuid,
    ) -> EngineResult<AnalysisContext> {
        let generated_at = Utc::now();
        let window_start = generated_at - Duration::days(self.config.window_days);
        let since_date = window_start.date_naive();

        debug!(%user_id, window_days = self.config.window_days, "building analysis context");

        let (metrics, manual_logs, food_entries, calendar_events, weather, medication_logs, cycle_entries) =
            futures::try_join!(
                wrap_domain("metrics", repo.fetch_metrics(user_id, window_start)),
                wrap_domain("manual_logs", repo.fetch_manual_logs(user_id, window_start)),
                wrap_domain("food_entries", repo.fetch_food_entries(user_id, window_start)),
                wrap_domain("calendar_events", repo.fetch_calendar_events(user_id, window_start)),
                wrap_domain("weather", repo.fetch_weather(user_id, since_date)),
                wrap_domain("medication_logs", repo.fetch_medication_logs(user_id, window_start)),
                wrap_domain("cycle_entries", repo.fetch_cycle_entries(user_id)),
            )?;

        let timezone = match repo.resolve_user_timezone(user_id).await {
            Ok(tz) => tz,
            Err(e) => {
                // Aggregation primitives degrade on their own; an unreadable
                // profile must not abort an otherwise valid invocation.
                warn!(%user_id, error = %e, "timezone resolution failed, defaulting to UTC");
                "UTC".to_owned()
            }
        };

        Ok(Self::assemble(
            metrics,
            manual_logs,
            food_entries,
            calendar_events,
            weather,
            medication_logs,
            cycle_entries,
            timezone,
            window_start,
            generated_at,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn assemble(
        metrics: Vec<MetricSample>,
        manual_logs: Vec<ManualLogEntry>,
        food_entries: Vec<FoodEntry>,
        calendar_events: Vec<CalendarEvent>,
        weather: Vec<WeatherRecord>,
        medication_logs: Vec<MedicationLogEntry>,
        cycle_entries: Vec<CycleEntry>,
        timezone: String,
        window_start: DateTime<Utc>,
        generated_at: DateTime<Utc>,
    ) -> AnalysisContext {
        let before = metrics.len();
        let metrics: Vec<MetricSample> = metrics
            .into_iter()
            .filter(|s| s.value.is_finite() && s.recorded_at >= window_start)
            .collect();
        if metrics.len() < before {
            debug!(dropped = before - metrics.len(), "dropped out-of-window or non-finite metric samples");
        }

        // Machine-created calendar noise never reaches an analyzer
        let calendar_events: Vec<CalendarEvent> = calendar_events
            .into_iter()
            .filter(|e| !e.is_auto_generated())
            .collect();

        AnalysisContext {
            metrics,
            manual_logs,
            food_entries,
            calendar_events,
            weather,
            medication_logs,
            cycle_entries,
            timezone,
            window_start,
            generated_at,
        }
    }
}

/// Map a domain read failure into the fatal `DataFetch` variant
async fn wrap_domain<T>(
    domain: &str,
    fut: impl std::future::Future<Output = EngineResult<T>>,
) -> EngineResult<T> {
    fut.await
        .map_err(|e| EngineError::data_fetch(domain, e.to_string()))
}
