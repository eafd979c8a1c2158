// ABOUTME: Calendar-load analyzer over the user's schedule
// ABOUTME: Busy-day sleep cohorts plus forward-looking early-event and busy-week predictions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::{daily_counts, date_key, hour_in_timezone};
use crate::analysis_constants::calendar::{
    BUSY_DAY_EVENTS, BUSY_SLEEP_CONFIDENCE, BUSY_SLEEP_DELTA_HOURS, BUSY_WEEK_CONFIDENCE,
    BUSY_WEEK_EVENTS, EARLY_EVENT_CONFIDENCE, EARLY_EVENT_HOUR, MIN_LOAD_COHORT,
};
use crate::context::AnalysisContext;
use chrono::Duration;
use lumen_core::errors::EngineResult;
use lumen_core::models::AnalyzedInsight;

/// Schedule-density correlations and forward-looking schedule predictions
pub struct CalendarLoadAnalyzer;

impl DomainAnalyzer for CalendarLoadAnalyzer {
    fn name(&self) -> &'static str {
        "calendar_load"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        if ctx.calendar_events.is_empty() {
            return Ok(Vec::new());
        }

        let mut insights = Vec::new();
        insights.extend(Self::busy_days_vs_sleep(ctx));
        insights.extend(Self::early_event_tomorrow(ctx));
        insights.extend(Self::busy_week_ahead(ctx));
        Ok(insights)
    }
}

impl CalendarLoadAnalyzer {
    /// Heavily scheduled days against lighter ones, compared on same-night sleep
    fn busy_days_vs_sleep(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let event_counts = daily_counts(&ctx.calendar_events, |e| e.start_time, &ctx.timezone);
        let mut busy = Vec::new();
        let mut lighter = Vec::new();
        for (day, count) in &event_counts {
            if *count >= BUSY_DAY_EVENTS as f64 {
                busy.push(day.clone());
            } else {
                lighter.push(day.clone());
            }
        }

        let sleep = ctx.sleep_by_night();
        let cmp = compare_day_cohorts(&busy, &lighter, &sleep, 1)?;
        if !cmp.meets_minimum(MIN_LOAD_COHORT) || cmp.delta() < BUSY_SLEEP_DELTA_HOURS {
            return None;
        }
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Busy days cut into your sleep",
            format!(
                "After days with {BUSY_DAY_EVENTS} or more events you slept \
                 {delta:.1} hours less ({:.1}h vs {:.1}h). Guarding your wind-down \
                 time on packed days may help.",
                cmp.first_mean, cmp.second_mean
            ),
            BUSY_SLEEP_CONFIDENCE,
            &["calendar", "sleep"],
        ))
    }

    /// A confirmed early start tomorrow. The trigger is an explicit event, not
    /// an inferred pattern, so this carries the engine's highest fixed weight.
    fn early_event_tomorrow(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let tomorrow = date_key(ctx.generated_at + Duration::days(1), &ctx.timezone);
        let earliest = ctx
            .calendar_events
            .iter()
            .filter(|e| !e.is_all_day && date_key(e.start_time, &ctx.timezone) == tomorrow)
            .map(|e| hour_in_timezone(e.start_time, &ctx.timezone))
            .filter(|hour| *hour < EARLY_EVENT_HOUR)
            .min()?;

        Some(AnalyzedInsight::prediction(
            "Early start tomorrow",
            format!(
                "Your first event tomorrow starts in the {earliest}:00 hour. \
                 An earlier bedtime tonight will cover the lost morning."
            ),
            EARLY_EVENT_CONFIDENCE,
            &["calendar", "sleep"],
        ))
    }

    /// Heavy total load across the coming seven days
    fn busy_week_ahead(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let week_end = ctx.generated_at + Duration::days(7);
        let upcoming = ctx
            .calendar_events
            .iter()
            .filter(|e| e.start_time > ctx.generated_at && e.start_time <= week_end)
            .count();
        if upcoming < BUSY_WEEK_EVENTS {
            return None;
        }

        Some(AnalyzedInsight::prediction(
            "A heavy week is coming",
            format!(
                "{upcoming} events over the next seven days. Blocking recovery \
                 time now is easier than finding it later."
            ),
            BUSY_WEEK_CONFIDENCE,
            &["calendar"],
        ))
    }
}
