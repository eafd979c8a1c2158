// ABOUTME: Domain analyzer trait, registry, and shared cohort-comparison helpers
// ABOUTME: Twelve independent analyzers that each map an AnalysisContext to candidate insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Domain Analyzers
//!
//! Each analyzer is a pure function over the shared [`AnalysisContext`]: no
//! state between invocations, no dependency on any other analyzer's output.
//! The recurring shape is a cohort split - partition days by a threshold rule
//! on one signal, compare the mean of a second signal between cohorts, and
//! emit a candidate insight only when both cohorts meet their minimum sample
//! count and the mean difference clears the rule's effect threshold.
//!
//! Day-level pairing convention: "same-night" downstream sleep for an
//! exposure on day `D` is the sleep sample keyed `D+1` (sleep is keyed by
//! wake-day), expressed as a `+1` day shift on the exposure cohort.

mod activity;
mod caffeine;
mod calendar_load;
mod cycle_phase;
mod digestion;
mod exercise;
mod heart;
mod medication;
mod nutrition;
mod sleep;
mod symptom;
mod weight;

pub use activity::ActivityAnalyzer;
pub use caffeine::CaffeineAnalyzer;
pub use calendar_load::CalendarLoadAnalyzer;
pub use cycle_phase::CyclePhaseAnalyzer;
pub use digestion::DigestionAnalyzer;
pub use exercise::ExerciseAnalyzer;
pub use heart::HeartAnalyzer;
pub use medication::MedicationAnalyzer;
pub use nutrition::NutritionAnalyzer;
pub use sleep::SleepAnalyzer;
pub use symptom::SymptomAnalyzer;
pub use weight::WeightAnalyzer;

use crate::aggregation::{mean_over_days, offset_day_key};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::AnalyzedInsight;
use std::collections::BTreeMap;

/// A single domain analyzer: context in, candidate insights out
pub trait DomainAnalyzer: Send + Sync {
    /// Stable analyzer name used in diagnostics
    fn name(&self) -> &'static str;

    /// Evaluate this domain against the shared context.
    ///
    /// # Errors
    /// An error is treated by the orchestrator as a zero-insight
    /// contribution; it never aborts the other analyzers.
    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>>;
}

/// The full analyzer set in fixed execution order. Order matters: dedup keeps
/// the first occurrence of a colliding title, so earlier analyzers win.
#[must_use]
pub fn registry() -> Vec<Box<dyn DomainAnalyzer>> {
    vec![
        Box::new(SleepAnalyzer),
        Box::new(CaffeineAnalyzer),
        Box::new(NutritionAnalyzer),
        Box::new(ExerciseAnalyzer),
        Box::new(ActivityAnalyzer),
        Box::new(HeartAnalyzer),
        Box::new(SymptomAnalyzer),
        Box::new(DigestionAnalyzer),
        Box::new(WeightAnalyzer),
        Box::new(CalendarLoadAnalyzer),
        Box::new(MedicationAnalyzer),
        Box::new(CyclePhaseAnalyzer),
    ]
}

/// Result of a two-cohort mean comparison over a downstream series
#[derive(Debug, Clone, Copy)]
pub(crate) struct CohortComparison {
    /// Mean of the downstream series over the first (exposure) cohort
    pub first_mean: f64,
    /// Mean over the second (reference) cohort
    pub second_mean: f64,
    /// Days from the first cohort that carried a downstream value
    pub first_n: usize,
    /// Days from the second cohort that carried a downstream value
    pub second_n: usize,
}

impl CohortComparison {
    /// Absolute difference between the cohort means
    pub(crate) fn delta(&self) -> f64 {
        (self.first_mean - self.second_mean).abs()
    }

    /// Whether both cohorts carry at least `min` downstream samples
    pub(crate) fn meets_minimum(&self, min: usize) -> bool {
        self.first_n >= min && self.second_n >= min
    }
}

/// Compare a downstream day-keyed series between two day cohorts, shifting
/// each cohort day by `day_shift` before lookup (`+1` pairs an exposure day
/// with the following night's sleep). Returns `None` when either cohort has
/// no downstream coverage at all.
pub(crate) fn compare_day_cohorts(
    first: &[String],
    second: &[String],
    downstream: &BTreeMap<String, f64>,
    day_shift: i64,
) -> Option<CohortComparison> {
    let first_days = shift_days(first, day_shift);
    let second_days = shift_days(second, day_shift);
    let (first_n, first_mean) = mean_over_days(&first_days, downstream);
    let (second_n, second_mean) = mean_over_days(&second_days, downstream);
    Some(CohortComparison {
        first_mean: first_mean?,
        second_mean: second_mean?,
        first_n,
        second_n,
    })
}

/// Compare a per-day count series between two day cohorts. Days absent from
/// the series are genuine zero counts (nothing was logged that day), unlike
/// [`compare_day_cohorts`] where absence means no measurement.
pub(crate) fn compare_count_cohorts(
    first: &[String],
    second: &[String],
    counts: &BTreeMap<String, f64>,
) -> Option<CohortComparison> {
    if first.is_empty() || second.is_empty() {
        return None;
    }
    let mean_with_zeros = |days: &[String]| {
        days.iter()
            .map(|d| counts.get(d).copied().unwrap_or(0.0))
            .sum::<f64>()
            / days.len() as f64
    };
    Some(CohortComparison {
        first_mean: mean_with_zeros(first),
        second_mean: mean_with_zeros(second),
        first_n: first.len(),
        second_n: second.len(),
    })
}

/// Shift every day key in a cohort, dropping unparseable keys
pub(crate) fn shift_days(days: &[String], shift: i64) -> Vec<String> {
    if shift == 0 {
        return days.to_vec();
    }
    days.iter()
        .filter_map(|d| offset_day_key(d, shift))
        .collect()
}
