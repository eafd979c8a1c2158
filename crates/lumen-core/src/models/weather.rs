// ABOUTME: Daily weather observation model for environmental correlation
// ABOUTME: WeatherRecord definition used by the symptom analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of weather observations for the user's location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation date (local to the user)
    pub date: NaiveDate,
    /// Daily high temperature (Celsius)
    pub temperature_high: f64,
    /// Total precipitation (millimeters)
    pub precipitation_mm: f64,
    /// Average relative humidity (percent)
    pub humidity_avg: f64,
    /// Mean barometric pressure (hectopascals)
    pub pressure_hpa: f64,
}
