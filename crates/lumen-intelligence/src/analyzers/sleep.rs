// ABOUTME: Sleep analyzer covering nightly averages, schedule variability, and weekly drift
// ABOUTME: Aggregate-level rules over the nightly sleep series, no cohort comparison
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::DomainAnalyzer;
use crate::aggregation::{mean, std_deviation};
use crate::analysis_constants::sleep::{
    MIN_NIGHTS, MIN_NIGHTS_PER_WEEK, SHORT_AVERAGE_CONFIDENCE, SHORT_AVERAGE_HOURS,
    VARIABILITY_CONFIDENCE, VARIABILITY_STDDEV_HOURS, WEEKLY_DROP_CONFIDENCE, WEEKLY_DROP_HOURS,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::AnalyzedInsight;

/// Aggregate-level sleep rules over the trailing window
pub struct SleepAnalyzer;

impl DomainAnalyzer for SleepAnalyzer {
    fn name(&self) -> &'static str {
        "sleep"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let mut insights = Vec::new();
        let nights = ctx.sleep_by_night();
        if nights.len() < MIN_NIGHTS {
            return Ok(insights);
        }

        let durations: Vec<f64> = nights.values().copied().collect();

        if let Some(avg) = mean(&durations) {
            if avg < SHORT_AVERAGE_HOURS {
                insights.push(AnalyzedInsight::recommendation(
                    "Your average sleep is running short",
                    format!(
                        "You averaged {avg:.1} hours of sleep per night over the last month, \
                         below the {SHORT_AVERAGE_HOURS:.0}-hour mark most adults need. \
                         Shifting bedtime earlier by even 30 minutes can close the gap."
                    ),
                    SHORT_AVERAGE_CONFIDENCE,
                    &["sleep"],
                ));
            }
        }

        if let Some(stddev) = std_deviation(&durations) {
            if stddev > VARIABILITY_STDDEV_HOURS {
                insights.push(AnalyzedInsight::recommendation(
                    "Your sleep schedule is inconsistent",
                    format!(
                        "Night-to-night sleep varied by {stddev:.1} hours on average. \
                         A steadier bedtime and wake time tends to improve sleep quality \
                         more than total duration alone."
                    ),
                    VARIABILITY_CONFIDENCE,
                    &["sleep"],
                ));
            }
        }

        insights.extend(Self::weekly_drift(&nights));

        Ok(insights)
    }
}

impl SleepAnalyzer {
    /// Week-over-week duration comparison: most recent seven night-keys
    /// against the seven before them.
    fn weekly_drift(
        nights: &std::collections::BTreeMap<String, f64>,
    ) -> Option<AnalyzedInsight> {
        let ordered: Vec<f64> = nights.values().copied().collect();
        if ordered.len() < MIN_NIGHTS_PER_WEEK * 2 {
            return None;
        }
        let split = ordered.len().saturating_sub(7);
        let (earlier, recent) = ordered.split_at(split);
        let earlier: Vec<f64> = earlier.iter().rev().take(7).copied().collect();
        if recent.len() < MIN_NIGHTS_PER_WEEK || earlier.len() < MIN_NIGHTS_PER_WEEK {
            return None;
        }

        let recent_avg = mean(recent)?;
        let earlier_avg = mean(&earlier)?;
        let drop = earlier_avg - recent_avg;
        if drop < WEEKLY_DROP_HOURS {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "Your sleep dropped this week",
            format!(
                "You slept {drop:.1} hours less per night this week ({recent_avg:.1}h) \
                 than the week before ({earlier_avg:.1}h). Worth protecting your \
                 bedtime over the next few days."
            ),
            WEEKLY_DROP_CONFIDENCE,
            &["sleep"],
        ))
    }
}
