// ABOUTME: User-entered manual log model with typed log variants
// ABOUTME: ManualLogEntry and LogType definitions for symptom, caffeine, exercise and stool logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of manually logged entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogType {
    /// Free-text symptom log ("headache", "bloating", ...)
    Symptom,
    /// Caffeine intake event
    Caffeine,
    /// Exercise session
    Exercise,
    /// Supplement intake
    Supplement,
    /// Bristol stool scale observation (value 1-7)
    BristolStool,
    /// User-defined custom log
    Custom,
}

impl LogType {
    /// Signal tag used in `related_signals` for this log type
    #[must_use]
    pub const fn signal(self) -> &'static str {
        match self {
            Self::Symptom => "symptoms",
            Self::Caffeine => "caffeine",
            Self::Exercise => "exercise",
            Self::Supplement => "supplements",
            Self::BristolStool => "digestion",
            Self::Custom => "custom",
        }
    }
}

/// A single manually entered log record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualLogEntry {
    /// Kind of log entry
    pub log_type: LogType,
    /// Logged value - free text for symptoms, "1".."7" for Bristol scale
    pub value: String,
    /// Optional severity or intensity on a 0-10 scale
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
    /// Moment the entry was logged
    pub logged_at: DateTime<Utc>,
    /// User- or app-supplied extras
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ManualLogEntry {
    /// Create a log entry without severity or metadata
    #[must_use]
    pub fn new(log_type: LogType, value: impl Into<String>, logged_at: DateTime<Utc>) -> Self {
        Self {
            log_type,
            value: value.into(),
            severity: None,
            logged_at,
            metadata: None,
        }
    }

    /// Numeric reading of the value field, for scale-valued logs
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}
