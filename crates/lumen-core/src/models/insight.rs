// ABOUTME: Generated insight model with type tag, confidence weight, and signal hints
// ABOUTME: AnalyzedInsight and InsightType definitions shared by analyzers and orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Category of a generated insight
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Statistically-suggestive relationship between two signals
    Correlation,
    /// Forward-looking observation about the coming day or week
    Prediction,
    /// Actionable suggestion, including praise and caution
    Recommendation,
}

/// A single generated observation with a heuristic confidence weight.
///
/// Created by an analyzer (or the fallback generator), passed through
/// dedup/rank unmodified, and handed to the caller. Confidence is a fixed
/// per-rule constant in `[0, 1]`, not a statistical estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedInsight {
    /// Unique identifier assigned at creation
    pub id: Uuid,
    /// Category of insight
    pub insight_type: InsightType,
    /// Short human-readable headline; also the deduplication key source
    pub title: String,
    /// Longer explanation including the computed delta where applicable
    pub description: String,
    /// Fixed heuristic weight in `[0, 1]`
    pub confidence: f64,
    /// Signal tags hinting at which domains produced this insight
    pub related_signals: BTreeSet<String>,
}

impl AnalyzedInsight {
    /// Create an insight with the given signal tags
    #[must_use]
    pub fn new(
        insight_type: InsightType,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
        signals: &[&str],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            insight_type,
            title: title.into(),
            description: description.into(),
            confidence: confidence.clamp(0.0, 1.0),
            related_signals: signals.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Shorthand for a correlation insight
    #[must_use]
    pub fn correlation(
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
        signals: &[&str],
    ) -> Self {
        Self::new(InsightType::Correlation, title, description, confidence, signals)
    }

    /// Shorthand for a prediction insight
    #[must_use]
    pub fn prediction(
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
        signals: &[&str],
    ) -> Self {
        Self::new(InsightType::Prediction, title, description, confidence, signals)
    }

    /// Shorthand for a recommendation insight
    #[must_use]
    pub fn recommendation(
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: f64,
        signals: &[&str],
    ) -> Self {
        Self::new(InsightType::Recommendation, title, description, confidence, signals)
    }
}
