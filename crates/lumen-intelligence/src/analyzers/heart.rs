// ABOUTME: Heart analyzer over HRV and resting heart rate series
// ABOUTME: HRV weekly trend, resting-HR elevation, and short-sleep/HRV cohort rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use super::{compare_day_cohorts, DomainAnalyzer};
use crate::aggregation::mean;
use crate::analysis_constants::heart::{
    HRV_DECLINE_CONFIDENCE, HRV_DECLINE_FRACTION, MIN_HRV_DAYS, MIN_RESTING_HR_DAYS,
    MIN_SLEEP_COHORT, RESTING_HR_CONFIDENCE, RESTING_HR_ELEVATION_BPM, RESTING_HR_RECENT_DAYS,
    SHORT_NIGHT_HOURS, SLEEP_HRV_CONFIDENCE, SLEEP_HRV_DELTA_MS,
};
use crate::context::AnalysisContext;
use lumen_core::errors::EngineResult;
use lumen_core::models::{AnalyzedInsight, MetricType};

/// Recovery signals from HRV and resting heart rate
pub struct HeartAnalyzer;

impl DomainAnalyzer for HeartAnalyzer {
    fn name(&self) -> &'static str {
        "heart"
    }

    fn analyze(&self, ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        let mut insights = Vec::new();
        insights.extend(Self::hrv_decline(ctx));
        insights.extend(Self::resting_hr_elevated(ctx));
        insights.extend(Self::short_sleep_vs_hrv(ctx));
        Ok(insights)
    }
}

impl HeartAnalyzer {
    /// Week-over-week HRV decline beyond the fraction threshold
    fn hrv_decline(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let hrv = ctx.metric_daily_means(MetricType::Hrv);
        if hrv.len() < MIN_HRV_DAYS {
            return None;
        }

        let ordered: Vec<f64> = hrv.values().copied().collect();
        let split = ordered.len().saturating_sub(7);
        let (earlier, recent) = ordered.split_at(split);
        let recent_avg = mean(recent)?;
        let earlier_avg = mean(earlier)?;
        if earlier_avg <= 0.0 {
            return None;
        }
        let decline = (earlier_avg - recent_avg) / earlier_avg;
        if decline < HRV_DECLINE_FRACTION {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "Your HRV is trending down",
            format!(
                "Heart rate variability fell {:.0}% this week ({recent_avg:.0} vs \
                 {earlier_avg:.0} ms). Lower HRV often tracks accumulated stress \
                 or training load - an easier few days may help.",
                decline * 100.0
            ),
            HRV_DECLINE_CONFIDENCE,
            &["hrv"],
        ))
    }

    /// Resting heart rate in the last few days elevated above the window mean
    fn resting_hr_elevated(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let resting = ctx.metric_daily_means(MetricType::RestingHeartRate);
        if resting.len() < MIN_RESTING_HR_DAYS {
            return None;
        }

        let ordered: Vec<f64> = resting.values().copied().collect();
        let window_avg = mean(&ordered)?;
        let recent: Vec<f64> = ordered
            .iter()
            .rev()
            .take(RESTING_HR_RECENT_DAYS)
            .copied()
            .collect();
        let recent_avg = mean(&recent)?;
        let elevation = recent_avg - window_avg;
        if elevation < RESTING_HR_ELEVATION_BPM {
            return None;
        }

        Some(AnalyzedInsight::recommendation(
            "Your resting heart rate is running high",
            format!(
                "Resting heart rate averaged {recent_avg:.0} bpm over the last \
                 {RESTING_HR_RECENT_DAYS} days, {elevation:.0} bpm above your \
                 monthly baseline. Elevated resting HR can signal incomplete \
                 recovery, stress, or oncoming illness."
            ),
            RESTING_HR_CONFIDENCE,
            &["resting_heart_rate"],
        ))
    }

    /// Short nights against normal nights, compared on same-wake-day HRV
    fn short_sleep_vs_hrv(ctx: &AnalysisContext) -> Option<AnalyzedInsight> {
        let sleep = ctx.sleep_by_night();
        let mut short_nights = Vec::new();
        let mut normal_nights = Vec::new();
        for (day, hours) in &sleep {
            if *hours < SHORT_NIGHT_HOURS {
                short_nights.push(day.clone());
            } else {
                normal_nights.push(day.clone());
            }
        }

        let hrv = ctx.metric_daily_means(MetricType::Hrv);
        let cmp = compare_day_cohorts(&short_nights, &normal_nights, &hrv, 0)?;
        if !cmp.meets_minimum(MIN_SLEEP_COHORT) || cmp.delta() < SLEEP_HRV_DELTA_MS {
            return None;
        }
        if cmp.first_mean >= cmp.second_mean {
            return None;
        }

        let delta = cmp.delta();
        Some(AnalyzedInsight::correlation(
            "Short nights suppress your HRV",
            format!(
                "Your HRV averaged {delta:.0} ms lower on mornings after less \
                 than {SHORT_NIGHT_HOURS:.1} hours of sleep ({:.0} vs {:.0} ms).",
                cmp.first_mean, cmp.second_mean
            ),
            SLEEP_HRV_CONFIDENCE,
            &["sleep", "hrv"],
        ))
    }
}
