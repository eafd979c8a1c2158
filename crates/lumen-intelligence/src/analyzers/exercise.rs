// ABOUTME: Exercise analyzer covering streaks, long gaps, and evening workout timing
// ABOUTME: Adherence/streak rules plus a timing-cutoff cohort rule against sleep
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::{date_key, hour_in_timezone};
use crate::analysis_constants::exercise::{
    EVENING_CUTOFF_HOUR, EVENING_SLEEP_CONFIDENCE, EVENING_SLEEP_DELTA_HOURS, GAP_CONFIDENCE,
    GAP_DAYS, MIN_TIMING_COHORT, STREAK_CONFIDENCE, STREAK_DAYS,
};
use crate::context::AnalysisContext;
use chrono::NaiveDate;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, LogType, ManualLogEntry};
use std::collections::BTreeSet;

/// Exercise habit and timing rules
pub struct ExerciseAnalyzer;

impl DomainAnalyzer for ExerciseAnalyzer {
    fn name(&self) -> &'static str {
        "exercise"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let logs = ctx.logs_of(LogType::Exercise);
        if logs.is_empty() {
            return Ok(Vec::new());
        }

        let days: BTreeSet<String> = logs
            .iter()
            .map(|l| date_key(l.logged_at, &ctx.timezone))
            .collect();

        let mut insights = Vec::new();
        insights.extend(Self::streak(&days));
        insights.extend(Self::long_gap(ctx, &days));
        insights.extend(Self::evening_vs_sleep(ctx, &logs, &days));
        Ok(insights)
    }
}

impl ExerciseAnalyzer {
    /// Consecutive exercise days ending at the latest logged day
    fn streak(days: &BTreeSet<String>) -> Option<AnalyzedInsight> {
        let mut dates: Vec<NaiveDate> = days
            .iter()
            .filter_map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .collect();
        dates.sort_unstable();

        let mut streak = 1;
        for pair in dates.windows(2).rev() {
            if pair[1] - pair[0] == chrono::Duration::days(1) {
                streak += 1;
            } else {
                break;
            }
        }
        if streak < STREAK_DAYS {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "You're on an exercise streak",
            format!(
                "{streak} days of exercise in a row. Consistency like this is \
                 what moves fitness - keep the next session easy if you feel \
                 fatigue building."
            ),
            STREAK_CONFIDENCE,
            &["exercise"],
        ))
    }

    /// A week or more since the last logged session
    fn long_gap(ctx: &AnalysisContext, days: &BTreeSet<String>) -> Option<AnalyzedInsight> {
        let last = days
            .iter()
            .last()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())?;
        let today = ctx.generated_at.date_naive();
        let gap = (today - last).num_days();
        if gap < GAP_DAYS {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "It's been a while since your last workout",
            format!(
                "{gap} days since your last logged session. A short, easy \
                 workout is the simplest way back in."
            ),
            GAP_CONFIDENCE,
            &["exercise"],
        ))
    }

    /// Evening-workout days against daytime-workout days, compared on
    /// same-night sleep.
    fn evening_vs_sleep(
        ctx: &AnalysisContext,
        logs: &[&ManualLogEntry],
        all_days: &BTreeSet<String>,
    ) -> Option<AnalyzedInsight> {
        let evening_days: BTreeSet<String> = logs
            .iter()
            .filter(|l| hour_in_timezone(l.logged_at, &ctx.timezone) >= EVENING_CUTOFF_HOUR)
            .map(|l| date_key(l.logged_at, &ctx.timezone))
            .collect();
        let daytime_days: Vec<String> = all_days.difference(&evening_days).cloned().collect();
        let evening_days: Vec<String> = evening_days.into_iter().collect();

        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&evening_days, &daytime_days, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_TIMING_COHORT) || cmp.delta() < EVENING_SLEEP_DELTA_HOURS {
            return None;
        }
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Evening workouts are linked to shorter sleep",
            format!(
                "After workouts at or past {EVENING_CUTOFF_HOUR}:00 you slept \
                 {delta:.1} hours less ({:.1}h vs {:.1}h). Moving harder sessions \
                 earlier could help you wind down.",
                cmp.first_mean, cmp.second_mean
            ),
            EVENING_SLEEP_CONFIDENCE,
            &["exercise", "sleep"],
        ))
    }
}
