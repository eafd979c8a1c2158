// ABOUTME: Device-sourced metric sample model with typed metric variants
// ABOUTME: MetricSample and MetricType definitions with finiteness validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use crate::errors::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of device-sourced health metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    /// Nightly sleep duration (hours)
    Sleep,
    /// Daily step count
    Steps,
    /// Heart rate reading (bpm)
    HeartRate,
    /// Resting heart rate (bpm)
    RestingHeartRate,
    /// Heart rate variability, RMSSD (ms)
    Hrv,
    /// Body weight (kg)
    Weight,
    /// Total calories burned
    CaloriesBurned,
    /// Calories consumed
    CaloriesConsumed,
    /// Active calories burned
    ActiveCalories,
}

impl MetricType {
    /// Signal tag used in `related_signals` for this metric
    #[must_use]
    pub const fn signal(self) -> &'static str {
        match self {
            Self::Sleep => "sleep",
            Self::Steps => "steps",
            Self::HeartRate => "heart_rate",
            Self::RestingHeartRate => "resting_heart_rate",
            Self::Hrv => "hrv",
            Self::Weight => "weight",
            Self::CaloriesBurned => "calories_burned",
            Self::CaloriesConsumed => "calories_consumed",
            Self::ActiveCalories => "active_calories",
        }
    }
}

/// A single metric reading from a connected device or integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSample {
    /// Kind of metric recorded
    pub metric_type: MetricType,
    /// Measured value; always finite (enforced at construction)
    pub value: f64,
    /// Unit string as reported by the source ("hours", "bpm", "kg", ...)
    pub unit: String,
    /// Moment the reading was taken
    pub recorded_at: DateTime<Utc>,
    /// Originating provider or device identifier
    pub source: String,
    /// Provider-specific extras
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl MetricSample {
    /// Create a validated metric sample
    ///
    /// # Errors
    /// Returns `EngineError::InvalidInput` when `value` is NaN or infinite.
    pub fn new(
        metric_type: MetricType,
        value: f64,
        unit: impl Into<String>,
        recorded_at: DateTime<Utc>,
        source: impl Into<String>,
    ) -> EngineResult<Self> {
        if !value.is_finite() {
            return Err(EngineError::invalid_input(format!(
                "metric value must be finite, got {value}"
            )));
        }
        Ok(Self {
            metric_type,
            value,
            unit: unit.into(),
            recorded_at,
            source: source.into(),
            metadata: None,
        })
    }
}
