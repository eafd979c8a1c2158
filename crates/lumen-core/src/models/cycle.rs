// ABOUTME: Menstrual cycle tracking models with phase and flow variants
// ABOUTME: CycleEntry, CyclePhase, and FlowIntensity definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Menstrual cycle phase
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CyclePhase {
    /// Menstruation (bleeding) phase
    Menstruation,
    /// Follicular phase
    Follicular,
    /// Ovulation window
    Ovulation,
    /// Luteal phase
    Luteal,
}

impl CyclePhase {
    /// Human-readable phase name for insight text
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Menstruation => "menstruation",
            Self::Follicular => "follicular phase",
            Self::Ovulation => "ovulation",
            Self::Luteal => "luteal phase",
        }
    }
}

/// Logged menstrual flow intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlowIntensity {
    /// Light flow
    Light,
    /// Normal flow
    Normal,
    /// Heavy flow
    Heavy,
}

/// One logged day of cycle tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleEntry {
    /// Tracked date (local to the user)
    pub date: NaiveDate,
    /// Cycle phase on that date
    pub phase: CyclePhase,
    /// Flow intensity, when logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowIntensity>,
}
