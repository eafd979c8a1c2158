// ABOUTME: Injected interfaces the engine reads from and callers write through
// ABOUTME: HealthDataRepository read port and InsightSink write port definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Ports
//!
//! The engine consumes a read-only repository abstraction, not any particular
//! wire protocol or database. Implementations are injected, which keeps the
//! engine testable against in-memory fakes. The seven fetch calls have no
//! interdependency and the context builder issues them concurrently; each must
//! either return its full window or fail the whole invocation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use lumen_core::errors::EngineResult;
use lumen_core::models::{
    AnalyzedInsight, CalendarEvent, CycleEntry, FoodEntry, ManualLogEntry, MedicationLogEntry,
    MetricSample, WeatherRecord,
};
use uuid::Uuid;

/// Read-only access to a user's health telemetry across all domains
#[async_trait]
pub trait HealthDataRepository: Send + Sync {
    /// Device metric samples recorded at or after `since`
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_metrics(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> EngineResult<Vec<MetricSample>>;

    /// Manual log entries recorded at or after `since`
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_manual_logs(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> EngineResult<Vec<ManualLogEntry>>;

    /// Food diary entries logged at or after `since`
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_food_entries(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> EngineResult<Vec<FoodEntry>>;

    /// Calendar events starting at or after `since`, including events
    /// scheduled in the future (forward-looking rules depend on them)
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_calendar_events(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> EngineResult<Vec<CalendarEvent>>;

    /// Daily weather records for the user's location from `since_date` onward
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_weather(
        &self,
        user_id: Uuid,
        since_date: NaiveDate,
    ) -> EngineResult<Vec<WeatherRecord>>;

    /// Medication check-ins recorded at or after `since`
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_medication_logs(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> EngineResult<Vec<MedicationLogEntry>>;

    /// Cycle tracking entries, most recent first; only the head is used for
    /// the phase rule table
    ///
    /// # Errors
    /// Returns an error when the underlying store is unavailable.
    async fn fetch_cycle_entries(&self, user_id: Uuid) -> EngineResult<Vec<CycleEntry>>;

    /// The user's IANA timezone identifier (e.g. "America/New_York")
    ///
    /// # Errors
    /// Returns an error when the profile store is unavailable.
    async fn resolve_user_timezone(&self, user_id: Uuid) -> EngineResult<String>;
}

/// Write-only sink the orchestrator's output is handed to by the caller.
/// The engine itself never invokes this; a persistence failure downstream
/// does not invalidate the returned insight list.
#[async_trait]
pub trait InsightSink: Send + Sync {
    /// Persist a generated insight batch
    ///
    /// # Errors
    /// Returns `EngineError::Persistence` when the write fails.
    async fn save_insights(&self, user_id: Uuid, insights: &[AnalyzedInsight]) -> EngineResult<()>;
}
