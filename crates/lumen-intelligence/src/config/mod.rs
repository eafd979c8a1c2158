// ABOUTME: Engine-level configuration with environment overrides and a global singleton
// ABOUTME: Window length, ranking limits, dedup prefix, and fallback thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Engine Configuration
//!
//! Orchestrator-level knobs only. Per-rule thresholds and confidence weights
//! are deliberately *not* configurable - the original system fixes them per
//! rule with no unifying policy, so they live as constants in
//! [`crate::analysis_constants`] instead of being normalized here.

use lumen_core::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<InsightEngineConfig> = OnceLock::new();

/// Orchestrator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightEngineConfig {
    /// Trailing history window read per invocation (days)
    pub window_days: i64,
    /// Maximum insights returned after ranking
    pub max_insights: usize,
    /// Normalized-title prefix length used as the dedup key
    pub dedup_prefix_len: usize,
    /// Nested trailing window for moving averages (days)
    pub moving_average_window: usize,
}

impl Default for InsightEngineConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            max_insights: 20,
            dedup_prefix_len: 40,
            moving_average_window: 7,
        }
    }
}

impl InsightEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration with environment variable overrides
    ///
    /// # Errors
    /// Returns an error when an override is present but unparseable, or when
    /// the resulting configuration fails validation.
    pub fn load() -> EngineResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("LUMEN_WINDOW_DAYS") {
            config.window_days = raw.parse().map_err(|_| {
                EngineError::invalid_input(format!("LUMEN_WINDOW_DAYS must be an integer, got '{raw}'"))
            })?;
        }
        if let Ok(raw) = env::var("LUMEN_MAX_INSIGHTS") {
            config.max_insights = raw.parse().map_err(|_| {
                EngineError::invalid_input(format!("LUMEN_MAX_INSIGHTS must be an integer, got '{raw}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    ///
    /// # Errors
    /// Returns an error for non-positive windows or a zero insight limit.
    pub fn validate(&self) -> EngineResult<()> {
        if self.window_days <= 0 {
            return Err(EngineError::invalid_input("window_days must be positive"));
        }
        if self.max_insights == 0 {
            return Err(EngineError::invalid_input("max_insights must be at least 1"));
        }
        if self.moving_average_window == 0 {
            return Err(EngineError::invalid_input(
                "moving_average_window must be at least 1",
            ));
        }
        Ok(())
    }
}
