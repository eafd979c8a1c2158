// ABOUTME: Nutrition analyzer pairing sodium, sugar, and meal timing with weight and sleep
// ABOUTME: Relative-magnitude and timing-cutoff cohort rules over the food diary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::{cohort_split, daily_sums, date_key, hour_in_timezone};
use crate::analysis_constants::cohort_multipliers::{HIGH_STRICT, LOW_STRICT};
use crate::analysis_constants::nutrition::{
    LATE_MEAL_CONFIDENCE, LATE_MEAL_CUTOFF_HOUR, LATE_MEAL_SLEEP_DELTA_HOURS, MIN_LATE_MEAL_COHORT,
    MIN_SODIUM_COHORT, MIN_SUGAR_COHORT, SODIUM_WEIGHT_CONFIDENCE, SODIUM_WEIGHT_DELTA_KG,
    SUGAR_SLEEP_CONFIDENCE, SUGAR_SLEEP_DELTA_HOURS,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, MetricType};
use std::collections::BTreeSet;

/// Food-diary correlations against downstream weight and sleep
pub struct NutritionAnalyzer;

impl DomainAnalyzer for NutritionAnalyzer {
    fn name(&self) -> &'static str {
        "nutrition"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        if ctx.food_entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::sodium_vs_weight(ctx));
        insights.extend(Self::sugar_vs_sleep(ctx));
        insights.extend(Self::late_meals_vs_sleep(ctx));
        Ok(insights)
    }
}

impl NutritionAnalyzer {
    /// High-sodium days against low-sodium days, compared on next-day weight.
    fn sodium_vs_weight(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let sodium = daily_sums(
            &ctx.food_entries,
            |f| f.logged_at,
            |f| f.sodium_mg,
            &ctx.timezone,
        );
        let (high_days, low_days) = cohort_split(&sodium, HIGH_STRICT, LOW_STRICT);

        let weight = ctx.metric_daily_means(MetricType::Weight);
        let cmp = compare_day_cohorts(&high_days, &low_days, &weight, 1)?;
        if !cmp.meets_minimum(MIN_SODIUM_COHORT) || cmp.delta() < SODIUM_WEIGHT_DELTA_KG {
            return None;
        }
        if cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Salty days show up on the scale the next morning",
            format!(
                "The morning after high-sodium days you weighed {delta:.1} kg more \
                 on average. That is mostly water retention, not fat, but it can \
                 mask real trends."
            ),
            SODIUM_WEIGHT_CONFIDENCE,
            &["nutrition", "weight"],
        ))
    }

    /// High-sugar days against low-sugar days, compared on same-night sleep.
    fn sugar_vs_sleep(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let sugar = daily_sums(
            &ctx.food_entries,
            |f| f.logged_at,
            |f| f.sugar_g,
            &ctx.timezone,
        );
        let (high_days, low_days) = cohort_split(&sugar, HIGH_STRICT, LOW_STRICT);

        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&high_days, &low_days, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_SUGAR_COHORT) || cmp.delta() < SUGAR_SLEEP_DELTA_HOURS {
            return None;
        }
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "High-sugar days precede shorter sleep",
            format!(
                "You slept {delta:.1} hours less after your highest-sugar days \
                 ({:.1}h vs {:.1}h).",
                cmp.first_mean, cmp.second_mean
            ),
            SUGAR_SLEEP_CONFIDENCE,
            &["nutrition", "sleep"],
        ))
    }

    /// Days with a meal at or after 21:00 local against food days without,
    /// compared on same-night sleep.
    fn late_meals_vs_sleep(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let mut late_days = BTreeSet::new();
        let mut all_days = BTreeSet::new();
        for entry in &ctx.food_entries {
            let day = date_key(entry.logged_at, &ctx.timezone);
            if hour_in_timezone(entry.logged_at, &ctx.timezone) >= LATE_MEAL_CUTOFF_HOUR {
                late_days.insert(day.clone());
            }
            all_days.insert(day);
        }
        let regular_days: Vec<String> = all_days.difference(&late_days).cloned().collect();
        let late_days: Vec<String> = late_days.into_iter().collect();

        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&late_days, &regular_days, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_LATE_MEAL_COHORT) || cmp.delta() < LATE_MEAL_SLEEP_DELTA_HOURS {
            return None;
        }
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Late dinners are costing you sleep",
            format!(
                "On nights you ate after {LATE_MEAL_CUTOFF_HOUR}:00 you slept \
                 {delta:.1} hours less ({:.1}h vs {:.1}h). An earlier last meal \
                 may make falling asleep easier.",
                cmp.first_mean, cmp.second_mean
            ),
            LATE_MEAL_CONFIDENCE,
            &["nutrition", "sleep"],
        ))
    }
}
