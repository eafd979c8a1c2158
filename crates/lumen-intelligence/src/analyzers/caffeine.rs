// ABOUTME: Caffeine analyzer pairing intake timing and volume with sleep and resting heart rate
// ABOUTME: Timing-cutoff and relative-magnitude cohort rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::{cohort_split, daily_counts, date_key, hour_in_timezone};
use crate::analysis_constants::caffeine::{
    LATE_CUTOFF_HOUR, LATE_SLEEP_CONFIDENCE, MIN_TIMING_COHORT, MIN_VOLUME_COHORT,
    RESTING_HR_CONFIDENCE, RESTING_HR_DELTA_BPM, SLEEP_DELTA_HOURS,
};
use crate::analysis_constants::cohort_multipliers::{HIGH_STRICT, LOW_STRICT};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, LogType, ManualLogEntry, MetricType};
use std::collections::BTreeSet;

/// Caffeine timing and volume correlations
pub struct CaffeineAnalyzer;

impl DomainAnalyzer for CaffeineAnalyzer {
    fn name(&self) -> &'static str {
        "caffeine"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let logs = ctx.logs_of(LogType::Caffeine);
        if logs.is_empty() {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::late_caffeine_vs_sleep(ctx, &logs));
        insights.extend(Self::volume_vs_resting_hr(ctx, &logs));
        Ok(insights)
    }
}

impl CaffeineAnalyzer {
    /// Timing cutoff: days with any caffeine at or after 14:00 local against
    /// caffeine days with none, compared on the following night's sleep.
    fn late_caffeine_vs_sleep(
        ctx: &AnalysisContext,
        logs: &[&ManualLogEntry],
    ) -> Option<AnalyzedInsight> {
        let mut late_days = BTreeSet::new();
        let mut all_days = BTreeSet::new();
        for log in logs {
            let day = date_key(log.logged_at, &ctx.timezone);
            if hour_in_timezone(log.logged_at, &ctx.timezone) >= LATE_CUTOFF_HOUR {
                late_days.insert(day.clone());
            }
            all_days.insert(day);
        }
        let early_days: Vec<String> = all_days.difference(&late_days).cloned().collect();
        let late_days: Vec<String> = late_days.into_iter().collect();

        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&late_days, &early_days, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_TIMING_COHORT) || cmp.delta() < SLEEP_DELTA_HOURS {
            return None;
        }
        // Only surface the harmful direction; shorter sleep after early
        // caffeine is not a caffeine story.
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Afternoon caffeine is linked to shorter sleep",
            format!(
                "On days you had caffeine after {LATE_CUTOFF_HOUR}:00 you slept \
                 {delta:.1} hours less that night ({:.1}h vs {:.1}h). Cutting off \
                 caffeine earlier in the day may help.",
                cmp.first_mean, cmp.second_mean
            ),
            LATE_SLEEP_CONFIDENCE,
            &["caffeine", "sleep"],
        ))
    }

    /// Relative magnitude: heavy caffeine days against light ones, compared
    /// on same-day resting heart rate.
    fn volume_vs_resting_hr(
        ctx: &AnalysisContext,
        logs: &[&ManualLogEntry],
    ) -> Option<AnalyzedInsight> {
        let counts = daily_counts(logs, |l| l.logged_at, &ctx.timezone);
        let (high_days, low_days) = cohort_split(&counts, HIGH_STRICT, LOW_STRICT);

        let resting_hr = ctx.metric_daily_means(MetricType::RestingHeartRate);
        let cmp = compare_day_cohorts(&high_days, &low_days, &resting_hr, 0)?;
        if !cmp.meets_minimum(MIN_VOLUME_COHORT) || cmp.delta() < RESTING_HR_DELTA_BPM {
            return None;
        }
        if cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Heavy caffeine days raise your resting heart rate",
            format!(
                "Your resting heart rate averaged {delta:.0} bpm higher on your \
                 heaviest caffeine days ({:.0} vs {:.0} bpm).",
                cmp.first_mean, cmp.second_mean
            ),
            RESTING_HR_CONFIDENCE,
            &["caffeine", "resting_heart_rate"],
        ))
    }
}
