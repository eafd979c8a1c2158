// ABOUTME: Activity analyzer over daily step counts
// ABOUTME: Step/sleep cohort rule, week-over-week drop, and low-volume check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::{cohort_split, daily_sums, mean};
use crate::analysis_constants::activity::{
    LOW_VOLUME_CONFIDENCE, LOW_VOLUME_STEPS, MIN_COHORT, MIN_DAYS_PER_WEEK, MIN_STEP_DAYS,
    SLEEP_CONFIDENCE, SLEEP_DELTA_HOURS, WEEKLY_DROP_CONFIDENCE, WEEKLY_DROP_FRACTION,
};
use crate::analysis_constants::cohort_multipliers::{HIGH_STANDARD, LOW_STANDARD};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, MetricType};
use std::collections::BTreeMap;

/// Daily step volume rules
pub struct ActivityAnalyzer;

impl DomainAnalyzer for ActivityAnalyzer {
    fn name(&self) -> &'static str {
        "activity"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let samples = ctx.samples_of(MetricType::Steps);
        let steps = daily_sums(&samples, |s| s.recorded_at, |s| Some(s.value), &ctx.timezone);
        if steps.len() < MIN_STEP_DAYS {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::steps_vs_sleep(ctx, &steps));
        insights.extend(Self::weekly_drop(&steps));
        insights.extend(Self::low_volume(&steps));
        Ok(insights)
    }
}

impl ActivityAnalyzer {
    /// High-step days against low-step days, compared on same-night sleep
    fn steps_vs_sleep(
        ctx: &AnalysisContext,
        steps: &BTreeMap<String, f64>,
    ) -> Option<AnalyzedInsight> {
        let (high_days, low_days) = cohort_split(steps, HIGH_STANDARD, LOW_STANDARD);
        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&high_days, &low_days, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_COHORT) || cmp.delta() < SLEEP_DELTA_HOURS {
            return None;
        }
        if cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Active days lead to longer sleep",
            format!(
                "You slept {delta:.1} hours more after your most active days \
                 ({:.1}h vs {:.1}h). Movement during the day appears to pay \
                 off at night.",
                cmp.first_mean, cmp.second_mean
            ),
            SLEEP_CONFIDENCE,
            &["steps", "sleep"],
        ))
    }

    /// Week-over-week step volume drop
    fn weekly_drop(steps: &BTreeMap<String, f64>) -> Option<AnalyzedInsight> {
        let ordered: Vec<f64> = steps.values().copied().collect();
        if ordered.len() < MIN_DAYS_PER_WEEK * 2 {
            return None;
        }
        let split = ordered.len().saturating_sub(7);
        let (earlier, recent) = ordered.split_at(split);
        let earlier: Vec<f64> = earlier.iter().rev().take(7).copied().collect();
        if recent.len() < MIN_DAYS_PER_WEEK || earlier.len() < MIN_DAYS_PER_WEEK {
            return None;
        }

        let recent_avg = mean(recent)?;
        let earlier_avg = mean(&earlier)?;
        if earlier_avg <= 0.0 {
            return None;
        }
        let drop = (earlier_avg - recent_avg) / earlier_avg;
        if drop < WEEKLY_DROP_FRACTION {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "Your step count fell this week",
            format!(
                "Daily steps dropped {:.0}% week over week ({recent_avg:.0} vs \
                 {earlier_avg:.0}). A couple of short walks would close most of \
                 that gap.",
                drop * 100.0
            ),
            WEEKLY_DROP_CONFIDENCE,
            &["steps"],
        ))
    }

    /// Sustained low daily volume
    fn low_volume(steps: &BTreeMap<String, f64>) -> Option<AnalyzedInsight> {
        let values: Vec<f64> = steps.values().copied().collect();
        let avg = mean(&values)?;
        if avg >= LOW_VOLUME_STEPS {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "Daily movement is on the low side",
            format!(
                "You averaged {avg:.0} steps per day this month. Building toward \
                 {LOW_VOLUME_STEPS:.0} is a reasonable next target."
            ),
            LOW_VOLUME_CONFIDENCE,
            &["steps"],
        ))
    }
}
