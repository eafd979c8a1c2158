// ABOUTME: Shared test fixtures: in-memory repository fake and record builders
// ABOUTME: Used by engine, analyzer, and cycle-rule integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use lumen_core::errors::{EngineError, EngineResult};
use lumen_core::models::{
    CalendarEvent, CycleEntry, CyclePhase, FoodEntry, LogType, ManualLogEntry, MedicationLogEntry,
    MetricSample, MetricType, WeatherRecord,
};
use lumen_intelligence::context::AnalysisContext;
use lumen_intelligence::ports::HealthDataRepository;
use uuid::Uuid;

/// In-memory repository fake. Fields are public so tests seed exactly the
/// records a scenario needs; `failing_domain` forces one fetch to error.
#[derive(Default)]
pub struct FakeRepository {
    pub metrics: Vec<MetricSample>,
    pub manual_logs: Vec<ManualLogEntry>,
    pub food_entries: Vec<FoodEntry>,
    pub calendar_events: Vec<CalendarEvent>,
    pub weather: Vec<WeatherRecord>,
    pub medication_logs: Vec<MedicationLogEntry>,
    pub cycle_entries: Vec<CycleEntry>,
    pub timezone: Option<String>,
    pub failing_domain: Option<&'static str>,
    pub failing_timezone: bool,
}

impl FakeRepository {
    fn check(&self, domain: &'static str) -> EngineResult<()> {
        if self.failing_domain == Some(domain) {
            return Err(EngineError::data_fetch(domain, "store unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthDataRepository for FakeRepository {
    async fn fetch_metrics(
        &self,
        _user_id: Uuid,
        _since: DateTime<Utc>,
    ) -> EngineResult<Vec<MetricSample>> {
        self.check("metrics")?;
        Ok(self.metrics.clone())
    }

    async fn fetch_manual_logs(
        &self,
        _user_id: Uuid,
        _since: DateTime<Utc>,
    ) -> EngineResult<Vec<ManualLogEntry>> {
        self.check("manual_logs")?;
        Ok(self.manual_logs.clone())
    }

    async fn fetch_food_entries(
        &self,
        _user_id: Uuid,
        _since: DateTime<Utc>,
    ) -> EngineResult<Vec<FoodEntry>> {
        self.check("food_entries")?;
        Ok(self.food_entries.clone())
    }

    async fn fetch_calendar_events(
        &self,
        _user_id: Uuid,
        _since: DateTime<Utc>,
    ) -> EngineResult<Vec<CalendarEvent>> {
        self.check("calendar_events")?;
        Ok(self.calendar_events.clone())
    }

    async fn fetch_weather(
        &self,
        _user_id: Uuid,
        _since_date: NaiveDate,
    ) -> EngineResult<Vec<WeatherRecord>> {
        self.check("weather")?;
        Ok(self.weather.clone())
    }

    async fn fetch_medication_logs(
        &self,
        _user_id: Uuid,
        _since: DateTime<Utc>,
    ) -> EngineResult<Vec<MedicationLogEntry>> {
        self.check("medication_logs")?;
        Ok(self.medication_logs.clone())
    }

    async fn fetch_cycle_entries(&self, _user_id: Uuid) -> EngineResult<Vec<CycleEntry>> {
        self.check("cycle_entries")?;
        Ok(self.cycle_entries.clone())
    }

    async fn resolve_user_timezone(&self, _user_id: Uuid) -> EngineResult<String> {
        if self.failing_timezone {
            return Err(EngineError::invalid_input("profile unavailable"));
        }
        match &self.timezone {
            Some(tz) => Ok(tz.clone()),
            None => Ok("UTC".to_owned()),
        }
    }
}

/// UTC timestamp `days_back` days before today at the given hour
pub fn at_hour(days_back: i64, hour: u32) -> DateTime<Utc> {
    day(days_back).and_hms_opt(hour, 0, 0).unwrap().and_utc()
}

/// Plain date `days_back` days before today
pub fn day(days_back: i64) -> NaiveDate {
    Utc::now().date_naive() - Duration::days(days_back)
}

pub fn sleep_sample(days_back: i64, hours: f64) -> MetricSample {
    MetricSample::new(MetricType::Sleep, hours, "hours", at_hour(days_back, 9), "test").unwrap()
}

pub fn metric(metric_type: MetricType, days_back: i64, value: f64) -> MetricSample {
    MetricSample::new(metric_type, value, "", at_hour(days_back, 12), "test").unwrap()
}

pub fn log(log_type: LogType, days_back: i64, hour: u32, value: &str) -> ManualLogEntry {
    ManualLogEntry::new(log_type, value, at_hour(days_back, hour))
}

pub fn food(days_back: i64, hour: u32) -> FoodEntry {
    FoodEntry {
        calories: 500.0,
        protein_g: 20.0,
        carbs_g: 60.0,
        fat_g: 15.0,
        sodium_mg: None,
        sugar_g: None,
        fiber_g: None,
        contains_dairy: false,
        contains_gluten: false,
        logged_at: at_hour(days_back, hour),
    }
}

pub fn event(days_back: i64, hour: u32) -> CalendarEvent {
    CalendarEvent {
        title: "Meeting".to_owned(),
        start_time: at_hour(days_back, hour),
        end_time: at_hour(days_back, hour + 1),
        is_all_day: false,
    }
}

pub fn cycle_entry(days_back: i64, phase: CyclePhase) -> CycleEntry {
    CycleEntry {
        date: day(days_back),
        phase,
        flow: None,
    }
}

/// An empty context over the standard 30-day window in UTC
pub fn empty_context() -> AnalysisContext {
    let generated_at = Utc::now();
    AnalysisContext {
        metrics: Vec::new(),
        manual_logs: Vec::new(),
        food_entries: Vec::new(),
        calendar_events: Vec::new(),
        weather: Vec::new(),
        medication_logs: Vec::new(),
        cycle_entries: Vec::new(),
        timezone: "UTC".to_owned(),
        window_start: generated_at - Duration::days(30),
        generated_at,
    }
}
