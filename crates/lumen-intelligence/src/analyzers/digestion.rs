// ABOUTME: Digestion analyzer over Bristol stool scale logs
// ABOUTME: Dairy, gluten, and fiber cohort rules against next-day stool consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::{cohort_split, daily_means, daily_sums, date_key};
use crate::analysis_constants::cohort_multipliers::{HIGH_STANDARD, LOW_STANDARD};
use crate::analysis_constants::digestion::{
    DAIRY_CONFIDENCE, FIBER_BRISTOL_DELTA, FIBER_CONFIDENCE, GLUTEN_CONFIDENCE, MIN_BRISTOL_LOGS,
    MIN_FIBER_COHORT, MIN_TAG_COHORT, TAG_BRISTOL_DELTA,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, FoodEntry, LogType};
use std::collections::{BTreeMap, BTreeSet};

/// Food-tag and fiber correlations against the Bristol stool scale
pub struct DigestionAnalyzer;

impl DomainAnalyzer for DigestionAnalyzer {
    fn name(&self) -> &'static str {
        "digestion"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let logs = ctx.logs_of(LogType::BristolStool);
        if logs.len() < MIN_BRISTOL_LOGS {
            return Ok(Vec::new());
        }
        let bristol = daily_means(
            &logs,
            |l| l.logged_at,
            |l| l.numeric_value(),
            &ctx.timezone,
        );

        let mut insights = Vec::new();
        insights.extend(Self::tag_rule(
            ctx,
            &bristol,
            |f| f.contains_dairy,
            "dairy",
            DAIRY_CONFIDENCE,
        ));
        insights.extend(Self::tag_rule(
            ctx,
            &bristol,
            |f| f.contains_gluten,
            "gluten",
            GLUTEN_CONFIDENCE,
        ));
        insights.extend(Self::fiber_rule(ctx, &bristol));
        Ok(insights)
    }
}

impl DigestionAnalyzer {
    /// Days with a tagged food against food days without, compared on
    /// next-day stool consistency.
    fn tag_rule<P>(
        ctx: &AnalysisContext,
        bristol: &BTreeMap<String, f64>,
        tagged: P,
        tag: &str,
        confidence: f64,
    ) -> Option<AnalyzedInsight>
    where
        P: Fn(&FoodEntry) -> bool,
    {
        let mut tag_days = BTreeSet::new();
        let mut all_days = BTreeSet::new();
        for entry in &ctx.food_entries {
            let day = date_key(entry.logged_at, &ctx.timezone);
            if tagged(entry) {
                tag_days.insert(day.clone());
            }
            all_days.insert(day);
        }
        let clean_days: Vec<String> = all_days.difference(&tag_days).cloned().collect();
        let tag_days: Vec<String> = tag_days.into_iter().collect();

        let cmp = compare_day_cohorts(&tag_days, &clean_days, bristol, 1)?;
        if !cmp.meets_minimum(MIN_TAG_COHORT) || cmp.delta() < TAG_BRISTOL_DELTA {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            format!("Digestion shifts the day after {tag}"),
            format!(
                "On days after eating {tag}, your Bristol scale readings moved \
                 {delta:.1} points ({:.1} vs {:.1}). A short elimination trial \
                 would confirm whether {tag} is the driver.",
                cmp.first_mean, cmp.second_mean
            ),
            confidence,
            &["nutrition", "digestion"],
        ))
    }

    /// High-fiber days against low-fiber days, compared on next-day stool
    /// consistency.
    fn fiber_rule(
        ctx: &AnalysisContext,
        bristol: &BTreeMap<String, f64>,
    ) -> Option<AnalyzedInsight> {
        let fiber = daily_sums(
            &ctx.food_entries,
            |f| f.logged_at,
            |f| f.fiber_g,
            &ctx.timezone,
        );
        let (high_days, low_days) = cohort_split(&fiber, HIGH_STANDARD, LOW_STANDARD);

        let cmp = compare_day_cohorts(&high_days, &low_days, bristol, 1)?;
        if !cmp.meets_minimum(MIN_FIBER_COHORT) || cmp.delta() < FIBER_BRISTOL_DELTA {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Fiber intake tracks with your digestion",
            format!(
                "Bristol scale readings differed by {delta:.1} points the day \
                 after high-fiber days compared with low-fiber days ({:.1} vs \
                 {:.1}). Fiber looks like a lever you can actually pull.",
                cmp.first_mean, cmp.second_mean
            ),
            FIBER_CONFIDENCE,
            &["nutrition", "digestion"],
        ))
    }
}
