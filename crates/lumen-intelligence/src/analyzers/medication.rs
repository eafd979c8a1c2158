// ABOUTME: Medication adherence analyzer over daily check-ins
// ABOUTME: Adherence-ratio praise/caution plus a missed-dose symptom cohort rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_count_cohorts, DomainAnalyzer};
use crate::aggregation::date_key;
use crate::analysis_constants::medication::{
    CAUTION_CONFIDENCE, CAUTION_RATIO, MIN_LOGGED_DAYS, MIN_SYMPTOM_COHORT, PRAISE_CONFIDENCE,
    PRAISE_RATIO, SYMPTOM_CONFIDENCE, SYMPTOM_DELTA,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::AnalyzedInsight;
use std::collections::BTreeMap;

/// Adherence-ratio and missed-dose rules over medication check-ins
pub struct MedicationAnalyzer;

impl DomainAnalyzer for MedicationAnalyzer {
    fn name(&self) -> &'static str {
        "medication"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        // A day counts as taken when every check-in that day was positive;
        // one missed dose among several logs marks the day missed.
        let mut taken_by_day: BTreeMap<String, bool> = BTreeMap::new();
        for log in &ctx.medication_logs {
            let day = date_key(log.logged_at, &ctx.timezone);
            taken_by_day
                .entry(day)
                .and_modify(|taken| *taken &= log.took_medication)
                .or_insert(log.took_medication);
        }
        if taken_by_day.len() < MIN_LOGGED_DAYS {
            return Ok(Vec::new());
        }

        let taken_days: Vec<String> = taken_by_day
            .iter()
            .filter(|(_, taken)| **taken)
            .map(|(day, _)| day.clone())
            .collect();
        let missed_days: Vec<String> = taken_by_day
            .iter()
            .filter(|(_, taken)| !**taken)
            .map(|(day, _)| day.clone())
            .collect();
        let ratio = taken_days.len() as f64 / taken_by_day.len() as f64;

        let mut insights = Vec::new();
        insights.extend(Self::adherence(ratio, taken_by_day.len()));
        insights.extend(Self::missed_vs_symptoms(ctx, &missed_days, &taken_days));
        Ok(insights)
    }
}

impl MedicationAnalyzer {
    /// Praise strong adherence; flag weak adherence
    fn adherence(ratio: f64, logged_days: usize) -> Option<AnalyzedInsight> {
        if ratio >= PRAISE_RATIO {
            return Some(AnalyzedInsight::recommendation(
                "Your medication routine is solid",
                format!(
                    "You took your medication on {:.0}% of the {logged_days} days \
                     you checked in. That consistency is doing real work.",
                    ratio * 100.0
                ),
                PRAISE_CONFIDENCE,
                &["medication"],
            ));
        }
        if ratio < CAUTION_RATIO {
            return Some(AnalyzedInsight::recommendation(
                "Medication doses are slipping",
                format!(
                    "Doses were taken on only {:.0}% of the {logged_days} days \
                     you checked in. Pairing the dose with an existing habit, \
                     like morning coffee, usually closes the gap.",
                    ratio * 100.0
                ),
                CAUTION_CONFIDENCE,
                &["medication"],
            ));
        }
        None
    }

    /// Symptom counts on missed days against taken days
    fn missed_vs_symptoms(
        ctx: &AnalysisContext,
        missed_days: &[String],
        taken_days: &[String],
    ) -> Option<AnalyzedInsight> {
        if missed_days.len() < MIN_SYMPTOM_COHORT || taken_days.len() < MIN_SYMPTOM_COHORT {
            return None;
        }

        let symptoms = ctx.symptom_counts_by_day();
        let cmp = compare_count_cohorts(missed_days, taken_days, &symptoms)?;
        if cmp.delta() < SYMPTOM_DELTA || cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Missed doses line up with more symptoms",
            format!(
                "On days you missed your medication you logged {delta:.1} more \
                 symptoms on average ({:.1} vs {:.1}). The medication appears to \
                 be earning its place.",
                cmp.first_mean, cmp.second_mean
            ),
            SYMPTOM_CONFIDENCE,
            &["medication", "symptom"],
        ))
    }
}
