// ABOUTME: Weight analyzer over daily weigh-in means
// ABOUTME: Smoothed trend drift and sparse-data recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::DomainAnalyzer;
use crate::aggregation::moving_average;
use crate::analysis_constants::weight::{
    MIN_TREND_DAYS, SPARSE_CONFIDENCE, SPARSE_WEIGH_INS, TREND_CONFIDENCE, TREND_DRIFT_KG,
};
use crate::config::InsightEngineConfig;
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, MetricType};
use std::collections::BTreeMap;

/// Weight trend and logging-cadence rules
pub struct WeightAnalyzer;

impl DomainAnalyzer for WeightAnalyzer {
    fn name(&self) -> &'static str {
        "weight"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let weight = ctx.metric_daily_means(MetricType::Weight);
        if weight.is_empty() {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::trend(&weight));
        insights.extend(Self::sparse(&weight));
        Ok(insights)
    }
}

impl WeightAnalyzer {
    /// Drift across the smoothed series from first to last weigh-in day.
    /// Smoothing keeps a single salty dinner from reading as a trend.
    fn trend(weight: &BTreeMap<String, f64>) -> Option<AnalyzedInsight> {
        if weight.len() < MIN_TREND_DAYS {
            return None;
        }
        let window = InsightEngineConfig::global().moving_average_window;
        let smoothed = moving_average(weight, window);
        let first = smoothed.values().next().copied()?;
        let last = smoothed.values().last().copied()?;
        let drift = last - first;
        if drift.abs() < TREND_DRIFT_KG {
            return None;
        }

        let direction = if drift > 0.0 { "up" } else { "down" };
        Some(AnalyzedInsight::recommendation(
            format!("Your weight is trending {direction}"),
            format!(
                "Smoothed over {window}-day windows, your weight moved \
                 {:.1} kg {direction} this month ({first:.1} to {last:.1} kg). \
                 If that is not intentional, now is the easiest time to adjust.",
                drift.abs()
            ),
            TREND_CONFIDENCE,
            &["weight"],
        ))
    }

    /// Too few weigh-ins to say anything about direction
    fn sparse(weight: &BTreeMap<String, f64>) -> Option<AnalyzedInsight> {
        if weight.len() > SPARSE_WEIGH_INS {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "Weigh in a little more often",
            format!(
                "Only {} weigh-in days this month - too few to read a trend. \
                 Two or three mornings a week is enough for a reliable signal.",
                weight.len()
            ),
            SPARSE_CONFIDENCE,
            &["weight"],
        ))
    }
}
