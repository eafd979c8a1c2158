// ABOUTME: Core data models for the Lumen health insight platform
// ABOUTME: Re-exports MetricSample, ManualLogEntry, FoodEntry and other domain records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Data Models
//!
//! Immutable value records for the seven telemetry domains the engine reads.
//! Every loosely-typed source record is modeled as an explicit tagged type
//! (one variant per `metric_type`/`log_type`) so invalid field combinations
//! are unrepresentable.

mod calendar;
mod cycle;
mod food;
mod insight;
mod logs;
mod medication;
mod metrics;
mod weather;

pub use calendar::CalendarEvent;
pub use cycle::{CycleEntry, CyclePhase, FlowIntensity};
pub use food::FoodEntry;
pub use insight::{AnalyzedInsight, InsightType};
pub use logs::{LogType, ManualLogEntry};
pub use medication::MedicationLogEntry;
pub use metrics::{MetricSample, MetricType};
pub use weather::WeatherRecord;
