// ABOUTME: Fixed rule table keyed by the user's current menstrual-cycle phase
// ABOUTME: Per-phase conditional checks over aggregated metrics, emitted as recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Cycle-Phase Rule Table
//!
//! Unlike the cohort analyzers, these rules do not compare populations of
//! days; each is a fixed conditional check against an aggregate (average
//! sleep, caffeine cadence, calorie balance, resting HR) evaluated for the
//! user's *current* phase only. No logged phase means no contribution.
//! Severity is assigned per advisory and mapped to a fixed confidence.

use crate::aggregation::{daily_counts, daily_sums, mean};
use crate::analysis_constants::cycle_rules::{
    HIGH_INTENSITY_SEVERITY, INFO_CONFIDENCE, LOW_CONFIDENCE, LUTEAL_CAFFEINE_PER_DAY,
    LUTEAL_SLEEP_HOURS, LUTEAL_SURPLUS_KCAL, MENSTRUATION_SLEEP_HOURS, MODERATE_CONFIDENCE,
    OVULATION_RECENT_DAYS, OVULATION_RESTING_HR_BPM, POSITIVE_CONFIDENCE,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, CyclePhase, LogType, MetricType};

/// Advisory weight class; each maps to a fixed confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisorySeverity {
    /// Praise for a pattern worth keeping
    Positive,
    /// Neutral context the user should know
    Info,
    /// A mild nudge
    Low,
    /// A pattern that deserves attention now
    Moderate,
}

impl AdvisorySeverity {
    /// Fixed confidence weight for this severity class
    #[must_use]
    pub const fn confidence(self) -> f64 {
        match self {
            Self::Positive => POSITIVE_CONFIDENCE,
            Self::Info => INFO_CONFIDENCE,
            Self::Low => LOW_CONFIDENCE,
            Self::Moderate => MODERATE_CONFIDENCE,
        }
    }
}

/// Evaluate the rule table for the user's current phase.
///
/// # Errors
/// Infallible today; the `Result` keeps the call site symmetric with the
/// analyzer registry so the orchestrator isolates it the same way.
pub fn evaluate(ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
    let Some(phase) = ctx.current_phase() else {
        return Ok(Vec::new());
    };

    let advisories = match phase {
        CyclePhase::Menstruation => menstruation_rules(ctx),
        CyclePhase::Follicular => follicular_rules(),
        CyclePhase::Ovulation => ovulation_rules(ctx),
        CyclePhase::Luteal => luteal_rules(ctx),
    };

    Ok(advisories
        .into_iter()
        .map(|(severity, title, description)| {
            AnalyzedInsight::recommendation(title, description, severity.confidence(), &["cycle"])
        })
        .collect())
}

type Advisory = (AdvisorySeverity, String, String);

fn menstruation_rules(ctx: &AnalysisContext) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    if let Some(avg_sleep) = average_sleep(ctx) {
        if avg_sleep < MENSTRUATION_SLEEP_HOURS {
            advisories.push((
                AdvisorySeverity::Moderate,
                "Rest matters more right now".to_owned(),
                format!(
                    "You're averaging {avg_sleep:.1} hours of sleep during \
                     menstruation. Energy demands run higher in this phase; \
                     aiming past {MENSTRUATION_SLEEP_HOURS:.1} hours will help."
                ),
            ));
        } else {
            advisories.push((
                AdvisorySeverity::Positive,
                "You're resting well through your period".to_owned(),
                format!(
                    "Averaging {avg_sleep:.1} hours of sleep during menstruation \
                     is exactly the recovery this phase asks for."
                ),
            ));
        }
    }

    let intense_sessions = ctx
        .logs_of(LogType::Exercise)
        .iter()
        .filter(|l| l.severity.is_some_and(|s| s >= HIGH_INTENSITY_SEVERITY))
        .count();
    if intense_sessions > 0 {
        advisories.push((
            AdvisorySeverity::Info,
            "High-intensity training during menstruation".to_owned(),
            format!(
                "{intense_sessions} hard sessions logged this window. Many \
                 people tolerate intensity fine in this phase, but if workouts \
                 feel unusually costly, scaling back for a few days is normal."
            ),
        ));
    }

    advisories
}

fn follicular_rules() -> Vec<Advisory> {
    vec![(
        AdvisorySeverity::Info,
        "Good window for harder training".to_owned(),
        "Energy and recovery capacity typically peak in the follicular phase. \
         If you've been saving a tougher workout, this week is the time."
            .to_owned(),
    )]
}

fn ovulation_rules(ctx: &AnalysisContext) -> Vec<Advisory> {
    let resting = ctx.metric_daily_means(MetricType::RestingHeartRate);
    let ordered: Vec<f64> = resting.values().copied().collect();
    let Some(window_avg) = mean(&ordered) else {
        return Vec::new();
    };
    let recent: Vec<f64> = ordered
        .iter()
        .rev()
        .take(OVULATION_RECENT_DAYS)
        .copied()
        .collect();
    let Some(recent_avg) = mean(&recent) else {
        return Vec::new();
    };

    if recent_avg - window_avg < OVULATION_RESTING_HR_BPM {
        return Vec::new();
    }
    vec![(
        AdvisorySeverity::Info,
        "A small resting-HR rise around ovulation is expected".to_owned(),
        format!(
            "Resting heart rate is running {:.0} bpm above your monthly \
             baseline. A rise of a few bpm around ovulation is a normal \
             hormonal effect, not a recovery problem on its own.",
            recent_avg - window_avg
        ),
    )]
}

fn luteal_rules(ctx: &AnalysisContext) -> Vec<Advisory> {
    let mut advisories = Vec::new();

    let caffeine_logs = ctx.logs_of(LogType::Caffeine);
    let counts = daily_counts(&caffeine_logs, |l| l.logged_at, &ctx.timezone);
    let per_day: Vec<f64> = counts.values().copied().collect();
    if let Some(avg) = mean(&per_day) {
        if avg >= LUTEAL_CAFFEINE_PER_DAY {
            advisories.push((
                AdvisorySeverity::Low,
                "Caffeine can hit harder in the luteal phase".to_owned(),
                format!(
                    "You're averaging {avg:.1} caffeine logs a day. Sensitivity \
                     often rises in the luteal phase; trimming the later doses \
                     may protect your sleep."
                ),
            ));
        }
    }

    if let Some(surplus) = average_calorie_surplus(ctx) {
        if surplus > LUTEAL_SURPLUS_KCAL {
            advisories.push((
                AdvisorySeverity::Info,
                "Appetite runs higher before your period".to_owned(),
                format!(
                    "You're eating about {surplus:.0} kcal a day above what \
                     you're burning. A modest rise in appetite is typical for \
                     the luteal phase and usually self-corrects."
                ),
            ));
        }
    }

    if let Some(avg_sleep) = average_sleep(ctx) {
        if avg_sleep < LUTEAL_SLEEP_HOURS {
            advisories.push((
                AdvisorySeverity::Moderate,
                "Protect your sleep this week".to_owned(),
                format!(
                    "You're averaging {avg_sleep:.1} hours of sleep in a phase \
                     where sleep quality already tends to dip. An earlier \
                     wind-down is the highest-leverage change available."
                ),
            ));
        }
    }

    advisories
}

fn average_sleep(ctx: &AnalysisContext) -> Option<f64> {
    let sleep = ctx.sleep_by_night();
    let values: Vec<f64> = sleep.values().copied().collect();
    mean(&values)
}

/// Mean daily calories consumed minus calories burned, over days carrying both
fn average_calorie_surplus(ctx: &AnalysisContext) -> Option<f64> {
    let consumed = daily_sums(
        &ctx.food_entries,
        |f| f.logged_at,
        |f| Some(f.calories),
        &ctx.timezone,
    );
    let burned_samples = ctx.samples_of(MetricType::CaloriesBurned);
    let burned = daily_sums(
        &burned_samples,
        |s| s.recorded_at,
        |s| Some(s.value),
        &ctx.timezone,
    );

    let surpluses: Vec<f64> = consumed
        .iter()
        .filter_map(|(day, eaten)| burned.get(day).map(|b| eaten - b))
        .collect();
    mean(&surpluses)
}
