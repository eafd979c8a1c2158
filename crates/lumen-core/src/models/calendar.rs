// ABOUTME: Calendar event model with auto-generated event detection
// ABOUTME: CalendarEvent definition used by calendar-load and symptom analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Markers that identify machine-created calendar noise. Events carrying one
/// of these in their title are filtered out before any analyzer sees them.
const AUTO_GENERATED_MARKERS: [&str; 3] = ["auto-generated", "[auto]", "(synced)"];

/// A calendar event from the user's connected calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event title
    pub title: String,
    /// Event start
    pub start_time: DateTime<Utc>,
    /// Event end
    pub end_time: DateTime<Utc>,
    /// All-day events carry no meaningful start hour
    pub is_all_day: bool,
}

impl CalendarEvent {
    /// Whether this event was machine-created rather than user-scheduled
    #[must_use]
    pub fn is_auto_generated(&self) -> bool {
        let title = self.title.to_lowercase();
        AUTO_GENERATED_MARKERS
            .iter()
            .any(|marker| title.contains(marker))
    }
}
