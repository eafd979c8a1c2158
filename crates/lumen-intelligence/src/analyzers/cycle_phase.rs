// ABOUTME: Cycle-phase analyzer comparing logged phases across the window
// ABOUTME: Luteal/follicular sleep cohorts and a menstruation symptom cohort rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_count_cohorts, compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::naive_date_key;
use crate::analysis_constants::cycle::{
    MENSTRUATION_SYMPTOM_CONFIDENCE, MENSTRUATION_SYMPTOM_DELTA, MIN_MENSTRUATION_DAYS,
    MIN_OTHER_PHASE_DAYS, MIN_PHASE_COHORT, PHASE_SLEEP_CONFIDENCE, PHASE_SLEEP_DELTA_HOURS,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, CyclePhase};

/// Cross-phase comparisons over logged cycle entries
pub struct CyclePhaseAnalyzer;

impl DomainAnalyzer for CyclePhaseAnalyzer {
    fn name(&self) -> &'static str {
        "cycle_phase"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        if ctx.cycle_entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::luteal_vs_follicular_sleep(ctx));
        insights.extend(Self::menstruation_symptoms(ctx));
        Ok(insights)
    }
}

impl CyclePhaseAnalyzer {
    /// Day keys for every logged day in one phase
    fn phase_days(ctx: &AnalysisContext, phase: CyclePhase) -> Vec<String> {
        ctx.cycle_entries
            .iter()
            .filter(|e| e.phase == phase)
            .map(|e| naive_date_key(e.date))
            .collect()
    }

    /// Luteal nights against follicular nights
    fn luteal_vs_follicular_sleep(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let luteal = Self::phase_days(ctx, CyclePhase::Luteal);
        let follicular = Self::phase_days(ctx, CyclePhase::Follicular);

        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&luteal, &follicular, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_PHASE_COHORT) || cmp.delta() < PHASE_SLEEP_DELTA_HOURS {
            return None;
        }
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "You sleep less in your luteal phase",
            format!(
                "Across this window you averaged {delta:.1} hours less sleep on \
                 luteal nights than follicular ones ({:.1}h vs {:.1}h). Planning \
                 earlier nights in the week before your period may offset it.",
                cmp.first_mean, cmp.second_mean
            ),
            PHASE_SLEEP_CONFIDENCE,
            &["cycle", "sleep"],
        ))
    }

    /// Symptom counts on menstruation days against other logged cycle days
    fn menstruation_symptoms(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let menstruation = Self::phase_days(ctx, CyclePhase::Menstruation);
        if menstruation.len() < MIN_MENSTRUATION_DAYS {
            return None;
        }
        let other: Vec<String> = ctx
            .cycle_entries
            .iter()
            .filter(|e| e.phase != CyclePhase::Menstruation)
            .map(|e| naive_date_key(e.date))
            .collect();
        if other.len() < MIN_OTHER_PHASE_DAYS {
            return None;
        }

        let symptoms = ctx.symptom_counts_by_day();
        let cmp = compare_count_cohorts(&menstruation, &other, &symptoms)?;
        if cmp.delta() < MENSTRUATION_SYMPTOM_DELTA || cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Symptoms cluster around menstruation",
            format!(
                "You logged {delta:.1} more symptoms per day during menstruation \
                 than in the rest of your cycle ({:.1} vs {:.1}). Knowing the \
                 pattern makes those days easier to plan around.",
                cmp.first_mean, cmp.second_mean
            ),
            MENSTRUATION_SYMPTOM_CONFIDENCE,
            &["cycle", "symptom"],
        ))
    }
}
