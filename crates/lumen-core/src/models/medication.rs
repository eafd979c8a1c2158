// ABOUTME: Medication adherence log model
// ABOUTME: MedicationLogEntry definition used by the adherence analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One medication check-in: taken or skipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationLogEntry {
    /// Whether the medication was taken
    pub took_medication: bool,
    /// Moment the check-in was logged
    pub logged_at: DateTime<Utc>,
}
