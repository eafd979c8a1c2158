// ABOUTME: Orchestrator that runs every analyzer and shapes the final insight list
// ABOUTME: Error isolation, fallback generation, dedup, ranking, and truncation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Insight Engine
//!
//! One invocation: build the context (fatal on failure), fan the analyzers
//! out across a rayon pool, fold their candidates back in registry order,
//! evaluate the cycle rule table, then dedup, rank, and truncate. A failing
//! analyzer contributes nothing and is logged at `warn!`; it never takes the
//! other eleven down with it. The pipeline is deterministic for a fixed
//! context: fixed registry order, first-seen dedup, stable sort.

use crate::analysis_constants::fallback::{
    EMPTY_THRESHOLD, KEEP_LOGGING_CONFIDENCE, SPARSE_THRESHOLD, START_LOGGING_CONFIDENCE,
};
use crate::analyzers::{registry, DomainAnalyzer};
use crate::config::InsightEngineConfig;
use crate::context::{AnalysisContext, ContextBuilder};
use crate::cycle_rules;
use crate::ports::HealthDataRepository;
use lumen_core::errors::EngineResult;
use lumen_core::models::AnalyzedInsight;
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Correlation insight orchestrator over an injected repository
pub struct InsightEngine<R> {
    repo: R,
    config: InsightEngineConfig,
    analyzers: Vec<Box<dyn DomainAnalyzer>>,
}

impl<R: HealthDataRepository> InsightEngine<R> {
    /// Create an engine with the full analyzer registry and global config
    #[must_use]
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            config: InsightEngineConfig::global().clone(),
            analyzers: registry(),
        }
    }

    /// Create an engine with an explicit analyzer set, used to exercise
    /// isolation behavior without a misbehaving real analyzer
    #[must_use]
    pub fn with_analyzers(repo: R, analyzers: Vec<Box<dyn DomainAnalyzer>>) -> Self {
        Self {
            repo,
            config: InsightEngineConfig::global().clone(),
            analyzers,
        }
    }

    /// Generate the ranked insight list for one user.
    ///
    /// # Errors
    /// Returns `EngineError::DataFetch` when any domain read fails during
    /// context construction. Analyzer failures are not errors at this level.
    pub async fn generate_insights(&self, user_id: Uuid) -> EngineResult<Vec<AnalyzedInsight>> {
        let ctx = ContextBuilder::new(&self.config)
            .build(&self.repo, user_id)
            .await?;

        let mut insights = self.evaluate(&ctx);

        if insights.is_empty() {
            if let Some(starter) = fallback_insight(ctx.total_record_count()) {
                insights.push(starter);
            }
        }

        let insights = self.dedup_and_rank(insights);
        info!(%user_id, count = insights.len(), "insight generation complete");
        Ok(insights)
    }

    /// Run every analyzer plus the cycle rule table, collecting output in
    /// registry order regardless of which thread finished first.
    fn evaluate(&self, ctx: &AnalysisContext) -> Vec<AnalyzedInsight> {
        let per_analyzer: Vec<Vec<AnalyzedInsight>> = self
            .analyzers
            .par_iter()
            .map(|analyzer| match analyzer.analyze(ctx) {
                Ok(found) => {
                    debug!(analyzer = analyzer.name(), count = found.len(), "analyzer finished");
                    found
                }
                Err(e) => {
                    warn!(analyzer = analyzer.name(), error = %e, "analyzer failed, skipping");
                    Vec::new()
                }
            })
            .collect();

        let mut insights: Vec<AnalyzedInsight> = per_analyzer.into_iter().flatten().collect();

        match cycle_rules::evaluate(ctx) {
            Ok(advisories) => insights.extend(advisories),
            Err(e) => warn!(error = %e, "cycle rule table failed, skipping"),
        }

        insights
    }

    /// First-seen dedup by normalized title, stable sort by confidence
    /// descending, truncate to the configured maximum.
    fn dedup_and_rank(&self, insights: Vec<AnalyzedInsight>) -> Vec<AnalyzedInsight> {
        let mut seen = HashSet::new();
        let mut unique: Vec<AnalyzedInsight> = insights
            .into_iter()
            .filter(|i| seen.insert(dedup_key(&i.title, self.config.dedup_prefix_len)))
            .collect();

        unique.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        unique.truncate(self.config.max_insights);
        unique
    }
}

/// Normalized dedup key: lowercase, letters only, fixed-length prefix.
/// "High-sugar days..." and "high sugar days..." collide deliberately.
fn dedup_key(title: &str, prefix_len: usize) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .take(prefix_len)
        .collect()
}

/// Starter insight for users with little or no history. `None` above the
/// sparse threshold: an empty result over real data is a valid outcome.
fn fallback_insight(total_records: usize) -> Option<AnalyzedInsight> {
    if total_records < EMPTY_THRESHOLD {
        return Some(AnalyzedInsight::recommendation(
            "Start logging to unlock insights",
            "There's no data in your trailing window yet. Log sleep, meals, or \
             symptoms for a few days and patterns will start to surface here.",
            START_LOGGING_CONFIDENCE,
            &["engine"],
        ));
    }
    if total_records < SPARSE_THRESHOLD {
        return Some(AnalyzedInsight::recommendation(
            "Keep logging - patterns need a bit more data",
            "You've made a start, but most correlations need a week or two of \
             consistent entries before they clear their evidence thresholds.",
            KEEP_LOGGING_CONFIDENCE,
            &["engine"],
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_key_strips_non_letters_and_case() {
        assert_eq!(dedup_key("High-sugar days!", 40), "highsugardays");
        assert_eq!(dedup_key("high sugar days", 40), "highsugardays");
    }

    #[test]
    fn test_dedup_key_respects_prefix_length() {
        let long = "a".repeat(100);
        assert_eq!(dedup_key(&long, 40).len(), 40);
    }

    #[test]
    fn test_fallback_tiers() {
        let start = fallback_insight(0).map(|i| i.confidence);
        let keep = fallback_insight(5).map(|i| i.confidence);
        assert_eq!(start, Some(0.95));
        assert_eq!(keep, Some(0.90));
        assert!(fallback_insight(10).is_none());
    }
}
