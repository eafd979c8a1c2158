// ABOUTME: Symptom analyzer over manual symptom logs
// ABOUTME: Recurring-symptom detection plus calendar-load and barometric-pressure cohort rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_count_cohorts, DomainAnalyzer};
use crate::aggregation::{daily_counts, mean, naive_date_key};
use crate::analysis_constants::symptom::{
    BUSY_CONFIDENCE, BUSY_DAY_EVENTS, BUSY_SYMPTOM_DELTA, LOW_PRESSURE_DROP_HPA, MIN_BUSY_DAYS,
    MIN_LIGHTER_DAYS, MIN_PRESSURE_COHORT, PRESSURE_CONFIDENCE, PRESSURE_SYMPTOM_DELTA,
    RECURRING_CONFIDENCE, RECURRING_COUNT,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, LogType};
use std::collections::BTreeMap;

/// Symptom recurrence and environmental/load correlations
pub struct SymptomAnalyzer;

impl DomainAnalyzer for SymptomAnalyzer {
    fn name(&self) -> &'static str {
        "symptom"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        if ctx.logs_of(LogType::Symptom).is_empty() {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::recurring(ctx));
        insights.extend(Self::busy_days(ctx));
        insights.extend(Self::low_pressure(ctx));
        Ok(insights)
    }
}

impl SymptomAnalyzer {
    /// The same symptom logged often enough to be worth tracking deliberately
    fn recurring(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for log in ctx.logs_of(LogType::Symptom) {
            let name = log.value.trim().to_lowercase();
            if !name.is_empty() {
                *counts.entry(name).or_insert(0) += 1;
            }
        }

        let (name, count) = counts
            .into_iter()
            .filter(|(_, c)| *c >= RECURRING_COUNT)
            .max_by_key(|(_, c)| *c)?;

        Some(AnalyzedInsight::recommendation(
            format!("\"{name}\" keeps coming back"),
            format!(
                "You logged \"{name}\" {count} times this month. A pattern this \
                 regular is worth tracking against sleep, food, and stress - or \
                 mentioning to a clinician."
            ),
            RECURRING_CONFIDENCE,
            &["symptom"],
        ))
    }

    /// Symptom counts on heavily scheduled days against lighter days
    fn busy_days(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let event_counts = daily_counts(
            &ctx.calendar_events,
            |e| e.start_time,
            &ctx.timezone,
        );
        let mut busy = Vec::new();
        let mut lighter = Vec::new();
        for (day, count) in &event_counts {
            if *count >= BUSY_DAY_EVENTS as f64 {
                busy.push(day.clone());
            } else {
                lighter.push(day.clone());
            }
        }
        if busy.len() < MIN_BUSY_DAYS || lighter.len() < MIN_LIGHTER_DAYS {
            return None;
        }

        let symptoms = ctx.symptom_counts_by_day();
        let cmp = compare_count_cohorts(&busy, &lighter, &symptoms)?;
        if cmp.delta() < BUSY_SYMPTOM_DELTA || cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Packed days bring more symptoms",
            format!(
                "On days with {BUSY_DAY_EVENTS} or more calendar events you \
                 logged {delta:.1} more symptoms on average ({:.1} vs {:.1}). \
                 Schedule load may be a trigger worth managing.",
                cmp.first_mean, cmp.second_mean
            ),
            BUSY_CONFIDENCE,
            &["symptom", "calendar"],
        ))
    }

    /// Symptom counts on low-barometric-pressure days against the rest
    fn low_pressure(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        if ctx.weather.is_empty() {
            return None;
        }
        let pressures: Vec<f64> = ctx.weather.iter().map(|w| w.pressure_hpa).collect();
        let baseline = mean(&pressures)?;

        let mut low = Vec::new();
        let mut rest = Vec::new();
        for record in &ctx.weather {
            let day = naive_date_key(record.date);
            if record.pressure_hpa <= baseline - LOW_PRESSURE_DROP_HPA {
                low.push(day);
            } else {
                rest.push(day);
            }
        }
        if low.len() < MIN_PRESSURE_COHORT || rest.len() < MIN_PRESSURE_COHORT {
            return None;
        }

        let symptoms = ctx.symptom_counts_by_day();
        let cmp = compare_count_cohorts(&low, &rest, &symptoms)?;
        if cmp.delta() < PRESSURE_SYMPTOM_DELTA || cmp.first_mean <= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Low-pressure weather tracks with your symptoms",
            format!(
                "On days the barometric pressure sat {LOW_PRESSURE_DROP_HPA:.0} hPa \
                 or more below the monthly average you logged {delta:.1} more \
                 symptoms ({:.1} vs {:.1}).",
                cmp.first_mean, cmp.second_mean
            ),
            PRESSURE_CONFIDENCE,
            &["symptom", "weather"],
        ))
    }
}
