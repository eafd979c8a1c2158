// ABOUTME: Per-rule thresholds, minimum cohort sizes, and confidence weights
// ABOUTME: Fixed heuristic constants grouped by analyzer domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! Per-rule analysis constants
//!
//! Every cohort rule carries three kinds of constants: a split threshold
//! (clock-hour cutoff, magnitude multiplier, or tag), a minimum cohort size,
//! and a fixed confidence weight in `[0, 1]`. Confidence values are
//! hand-assigned heuristic weights, not statistical estimates; rules backed
//! by explicit evidence (a confirmed calendar event for tomorrow) sit at the
//! top of the 0.69-0.95 range. Minimum cohort sizes intentionally differ
//! between rules - noisier domains demand more samples before a comparison
//! is worth surfacing.

/// Magnitude multipliers for relative cohort splits
pub mod cohort_multipliers {
    /// Standard high-exposure gate: day total at or above 1.2x the mean
    pub const HIGH_STANDARD: f64 = 1.2;
    /// Stricter high-exposure gate for noisy totals (sodium, sugar, caffeine)
    pub const HIGH_STRICT: f64 = 1.3;
    /// Standard low-exposure gate: day total at or below 0.8x the mean
    pub const LOW_STANDARD: f64 = 0.8;
    /// Looser low-exposure gate paired with `HIGH_STRICT`
    pub const LOW_STRICT: f64 = 0.7;
}

/// Sleep analyzer rules
pub mod sleep {
    /// Nights required before any sleep aggregate is reported
    pub const MIN_NIGHTS: usize = 3;
    /// Nights per week-half required for the week-over-week comparison
    pub const MIN_NIGHTS_PER_WEEK: usize = 4;
    /// Average nightly duration below this is flagged (hours)
    pub const SHORT_AVERAGE_HOURS: f64 = 7.0;
    /// Nightly standard deviation above this flags an inconsistent schedule (hours)
    pub const VARIABILITY_STDDEV_HOURS: f64 = 1.5;
    /// Week-over-week average drop that triggers a recommendation (hours)
    pub const WEEKLY_DROP_HOURS: f64 = 0.75;

    /// Confidence for the short-average rule
    pub const SHORT_AVERAGE_CONFIDENCE: f64 = 0.75;
    /// Confidence for the variability rule
    pub const VARIABILITY_CONFIDENCE: f64 = 0.72;
    /// Confidence for the week-over-week drop rule
    pub const WEEKLY_DROP_CONFIDENCE: f64 = 0.71;
}

/// Caffeine analyzer rules
pub mod caffeine {
    /// Clock-hour cutoff: logs at or after this local hour count as "late"
    pub const LATE_CUTOFF_HOUR: u32 = 14;
    /// Minimum days per timing cohort
    pub const MIN_TIMING_COHORT: usize = 2;
    /// Sleep delta between late and early cohorts that triggers the rule (hours)
    pub const SLEEP_DELTA_HOURS: f64 = 0.5;
    /// Minimum days per volume cohort for the resting-HR comparison
    pub const MIN_VOLUME_COHORT: usize = 3;
    /// Resting-HR delta between high and low caffeine days (bpm)
    pub const RESTING_HR_DELTA_BPM: f64 = 3.0;

    /// Confidence for the afternoon-caffeine/sleep correlation
    pub const LATE_SLEEP_CONFIDENCE: f64 = 0.80;
    /// Confidence for the caffeine-volume/resting-HR correlation
    pub const RESTING_HR_CONFIDENCE: f64 = 0.70;
}

/// Nutrition analyzer rules
pub mod nutrition {
    /// Minimum days per sodium cohort
    pub const MIN_SODIUM_COHORT: usize = 2;
    /// Next-day weight delta between sodium cohorts (kg)
    pub const SODIUM_WEIGHT_DELTA_KG: f64 = 0.3;
    /// Minimum days per sugar cohort
    pub const MIN_SUGAR_COHORT: usize = 2;
    /// Same-night sleep delta between sugar cohorts (hours)
    pub const SUGAR_SLEEP_DELTA_HOURS: f64 = 0.5;
    /// Meals at or after this local hour count as "late" (clock hour)
    pub const LATE_MEAL_CUTOFF_HOUR: u32 = 21;
    /// Minimum days per late-meal cohort
    pub const MIN_LATE_MEAL_COHORT: usize = 2;
    /// Same-night sleep delta between late-meal cohorts (hours)
    pub const LATE_MEAL_SLEEP_DELTA_HOURS: f64 = 0.5;

    /// Confidence for the sodium/weight correlation
    pub const SODIUM_WEIGHT_CONFIDENCE: f64 = 0.70;
    /// Confidence for the sugar/sleep correlation
    pub const SUGAR_SLEEP_CONFIDENCE: f64 = 0.69;
    /// Confidence for the late-meal/sleep correlation
    pub const LATE_MEAL_CONFIDENCE: f64 = 0.74;
}

/// Exercise analyzer rules
pub mod exercise {
    /// Consecutive days that qualify as a streak
    pub const STREAK_DAYS: usize = 3;
    /// Days without exercise that trigger a caution
    pub const GAP_DAYS: i64 = 7;
    /// Workouts at or after this local hour count as "evening" (clock hour)
    pub const EVENING_CUTOFF_HOUR: u32 = 19;
    /// Minimum days per timing cohort
    pub const MIN_TIMING_COHORT: usize = 2;
    /// Same-night sleep delta between evening and daytime cohorts (hours)
    pub const EVENING_SLEEP_DELTA_HOURS: f64 = 0.5;

    /// Confidence for the streak praise
    pub const STREAK_CONFIDENCE: f64 = 0.85;
    /// Confidence for the long-gap caution
    pub const GAP_CONFIDENCE: f64 = 0.70;
    /// Confidence for the evening-workout/sleep correlation
    pub const EVENING_SLEEP_CONFIDENCE: f64 = 0.78;
}

/// Activity (steps) analyzer rules
pub mod activity {
    /// Days of step data required before any rule fires
    pub const MIN_STEP_DAYS: usize = 5;
    /// Minimum days per step cohort
    pub const MIN_COHORT: usize = 2;
    /// Same-night sleep delta between high- and low-step days (hours)
    pub const SLEEP_DELTA_HOURS: f64 = 0.4;
    /// Days per week-half required for the week-over-week comparison
    pub const MIN_DAYS_PER_WEEK: usize = 4;
    /// Week-over-week fractional step drop that triggers a recommendation
    pub const WEEKLY_DROP_FRACTION: f64 = 0.2;
    /// Daily average below this triggers a volume recommendation (steps)
    pub const LOW_VOLUME_STEPS: f64 = 5000.0;

    /// Confidence for the step/sleep correlation
    pub const SLEEP_CONFIDENCE: f64 = 0.73;
    /// Confidence for the weekly-drop recommendation
    pub const WEEKLY_DROP_CONFIDENCE: f64 = 0.71;
    /// Confidence for the low-volume recommendation
    pub const LOW_VOLUME_CONFIDENCE: f64 = 0.70;
}

/// Heart (HRV and resting heart rate) analyzer rules
pub mod heart {
    /// Days of HRV data required for the trend rule
    pub const MIN_HRV_DAYS: usize = 8;
    /// Fractional HRV decline week-over-week that triggers a recommendation
    pub const HRV_DECLINE_FRACTION: f64 = 0.10;
    /// Days of resting-HR data required for the elevation rule
    pub const MIN_RESTING_HR_DAYS: usize = 10;
    /// Recent-days window compared against the full-window mean
    pub const RESTING_HR_RECENT_DAYS: usize = 3;
    /// Elevation above the window mean that triggers a recommendation (bpm)
    pub const RESTING_HR_ELEVATION_BPM: f64 = 4.0;
    /// Nights under this duration count as "short" for the HRV comparison (hours)
    pub const SHORT_NIGHT_HOURS: f64 = 6.5;
    /// Minimum nights per sleep cohort
    pub const MIN_SLEEP_COHORT: usize = 2;
    /// Next-day HRV delta between short and normal nights (ms)
    pub const SLEEP_HRV_DELTA_MS: f64 = 5.0;

    /// Confidence for the HRV decline recommendation
    pub const HRV_DECLINE_CONFIDENCE: f64 = 0.77;
    /// Confidence for the resting-HR elevation recommendation
    pub const RESTING_HR_CONFIDENCE: f64 = 0.80;
    /// Confidence for the short-sleep/HRV correlation
    pub const SLEEP_HRV_CONFIDENCE: f64 = 0.75;
}

/// Symptom analyzer rules
pub mod symptom {
    /// Occurrences of one symptom that qualify as "recurring"
    pub const RECURRING_COUNT: usize = 4;
    /// Calendar events on a day for it to count as "busy"
    pub const BUSY_DAY_EVENTS: usize = 4;
    /// Minimum busy days for the calendar comparison
    pub const MIN_BUSY_DAYS: usize = 3;
    /// Minimum lighter days on the reference side of that comparison
    pub const MIN_LIGHTER_DAYS: usize = 2;
    /// Symptom-count delta between busy and lighter days
    pub const BUSY_SYMPTOM_DELTA: f64 = 1.0;
    /// Pressure below the window mean by this much marks a low-pressure day (hPa)
    pub const LOW_PRESSURE_DROP_HPA: f64 = 5.0;
    /// Minimum days per pressure cohort
    pub const MIN_PRESSURE_COHORT: usize = 2;
    /// Symptom-count delta between low-pressure and other days
    pub const PRESSURE_SYMPTOM_DELTA: f64 = 1.0;

    /// Confidence for the recurring-symptom recommendation
    pub const RECURRING_CONFIDENCE: f64 = 0.70;
    /// Confidence for the busy-day/symptom correlation
    pub const BUSY_CONFIDENCE: f64 = 0.73;
    /// Confidence for the weather/symptom correlation
    pub const PRESSURE_CONFIDENCE: f64 = 0.69;
}

/// Digestion (Bristol stool scale) analyzer rules
pub mod digestion {
    /// Bristol logs required before any digestion rule fires
    pub const MIN_BRISTOL_LOGS: usize = 5;
    /// Minimum days per tag cohort (dairy, gluten)
    pub const MIN_TAG_COHORT: usize = 2;
    /// Bristol-scale delta between tag and non-tag days (points)
    pub const TAG_BRISTOL_DELTA: f64 = 1.0;
    /// Minimum days per fiber cohort
    pub const MIN_FIBER_COHORT: usize = 2;
    /// Bristol-scale delta between fiber cohorts (points)
    pub const FIBER_BRISTOL_DELTA: f64 = 1.0;

    /// Confidence for the dairy/digestion correlation
    pub const DAIRY_CONFIDENCE: f64 = 0.82;
    /// Confidence for the gluten/digestion correlation
    pub const GLUTEN_CONFIDENCE: f64 = 0.78;
    /// Confidence for the fiber/digestion correlation
    pub const FIBER_CONFIDENCE: f64 = 0.72;
}

/// Weight analyzer rules
pub mod weight {
    /// Weigh-in days required for the trend rule
    pub const MIN_TREND_DAYS: usize = 5;
    /// Moving-average drift across the window that triggers the trend rule (kg)
    pub const TREND_DRIFT_KG: f64 = 1.0;
    /// At or below this many weigh-ins, suggest weighing in more often
    pub const SPARSE_WEIGH_INS: usize = 2;

    /// Confidence for the trend recommendation
    pub const TREND_CONFIDENCE: f64 = 0.76;
    /// Confidence for the sparse-data recommendation
    pub const SPARSE_CONFIDENCE: f64 = 0.70;
}

/// Calendar-load analyzer rules
pub mod calendar {
    /// Events on a day for it to count as "busy"
    pub const BUSY_DAY_EVENTS: usize = 4;
    /// Minimum days per load cohort
    pub const MIN_LOAD_COHORT: usize = 2;
    /// Same-night sleep delta between busy and lighter days (hours)
    pub const BUSY_SLEEP_DELTA_HOURS: f64 = 0.5;
    /// Events starting before this local hour tomorrow trigger the bedtime rule
    pub const EARLY_EVENT_HOUR: u32 = 8;
    /// Events across the coming seven days that mark a busy week
    pub const BUSY_WEEK_EVENTS: usize = 15;

    /// Confidence for the busy-day/sleep correlation
    pub const BUSY_SLEEP_CONFIDENCE: f64 = 0.74;
    /// Confidence for the early-event bedtime prediction. Highest fixed weight
    /// in the engine: the triggering event is explicit and confirmed for
    /// tomorrow rather than inferred from history.
    pub const EARLY_EVENT_CONFIDENCE: f64 = 0.95;
    /// Confidence for the busy-week prediction
    pub const BUSY_WEEK_CONFIDENCE: f64 = 0.88;
}

/// Medication adherence analyzer rules
pub mod medication {
    /// Logged days required before adherence rules fire
    pub const MIN_LOGGED_DAYS: usize = 5;
    /// Taken/total ratio at or above this earns praise
    pub const PRAISE_RATIO: f64 = 0.9;
    /// Taken/total ratio below this triggers a caution
    pub const CAUTION_RATIO: f64 = 0.6;
    /// Minimum days per missed/taken cohort for the symptom comparison
    pub const MIN_SYMPTOM_COHORT: usize = 2;
    /// Symptom-count delta between missed and taken days
    pub const SYMPTOM_DELTA: f64 = 1.0;

    /// Confidence for the adherence praise
    pub const PRAISE_CONFIDENCE: f64 = 0.85;
    /// Confidence for the adherence caution
    pub const CAUTION_CONFIDENCE: f64 = 0.80;
    /// Confidence for the missed-dose/symptom correlation
    pub const SYMPTOM_CONFIDENCE: f64 = 0.75;
}

/// Cycle-phase analyzer rules (cohort comparisons across logged phases)
pub mod cycle {
    /// Minimum logged days per phase cohort for the sleep comparison
    pub const MIN_PHASE_COHORT: usize = 3;
    /// Sleep delta between luteal and follicular days (hours)
    pub const PHASE_SLEEP_DELTA_HOURS: f64 = 0.5;
    /// Minimum menstruation days for the symptom comparison
    pub const MIN_MENSTRUATION_DAYS: usize = 2;
    /// Minimum non-menstruation days on the reference side of that comparison
    pub const MIN_OTHER_PHASE_DAYS: usize = 2;
    /// Symptom-count delta between menstruation and other days
    pub const MENSTRUATION_SYMPTOM_DELTA: f64 = 1.0;

    /// Confidence for the phase/sleep correlation
    pub const PHASE_SLEEP_CONFIDENCE: f64 = 0.72;
    /// Confidence for the menstruation/symptom correlation
    pub const MENSTRUATION_SYMPTOM_CONFIDENCE: f64 = 0.71;
}

/// Cycle-phase rule table thresholds and severity confidences
pub mod cycle_rules {
    /// Average nightly sleep below this during menstruation prompts a rest advisory (hours)
    pub const MENSTRUATION_SLEEP_HOURS: f64 = 7.5;
    /// Exercise severity (0-10) at or above this counts as high intensity
    pub const HIGH_INTENSITY_SEVERITY: u8 = 8;
    /// Average daily caffeine logs at or above this in the luteal phase prompts an advisory
    pub const LUTEAL_CAFFEINE_PER_DAY: f64 = 3.0;
    /// Mean daily calorie surplus above this in the luteal phase prompts an advisory (kcal)
    pub const LUTEAL_SURPLUS_KCAL: f64 = 300.0;
    /// Average nightly sleep below this in the luteal phase prompts an advisory (hours)
    pub const LUTEAL_SLEEP_HOURS: f64 = 7.0;
    /// Resting-HR elevation around ovulation worth mentioning (bpm)
    pub const OVULATION_RESTING_HR_BPM: f64 = 3.0;
    /// Recent-days window for the ovulation resting-HR check
    pub const OVULATION_RECENT_DAYS: usize = 3;

    /// Confidence assigned to `positive` advisories
    pub const POSITIVE_CONFIDENCE: f64 = 0.80;
    /// Confidence assigned to `info` advisories
    pub const INFO_CONFIDENCE: f64 = 0.72;
    /// Confidence assigned to `low` advisories
    pub const LOW_CONFIDENCE: f64 = 0.70;
    /// Confidence assigned to `moderate` advisories
    pub const MODERATE_CONFIDENCE: f64 = 0.78;
}

/// Fallback (starter) insight weights
pub mod fallback {
    /// Total records across all domains below which "start logging" fires
    pub const EMPTY_THRESHOLD: usize = 1;
    /// Total records below which "keep logging" fires
    pub const SPARSE_THRESHOLD: usize = 10;
    /// Confidence for the "start logging" starter insight
    pub const START_LOGGING_CONFIDENCE: f64 = 0.95;
    /// Confidence for the "keep logging" starter insight
    pub const KEEP_LOGGING_CONFIDENCE: f64 = 0.90;
}
