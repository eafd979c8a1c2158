// ABOUTME: Integration tests for the insight orchestrator
// ABOUTME: Fallback tiers, dedup, ranking, error isolation, and fatal data-fetch behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{log, FakeRepository};
use lumen_core::errors::{EngineError, EngineResult};
use lumen_core::models::{AnalyzedInsight, LogType};
use lumen_intelligence::analyzers::DomainAnalyzer;
use lumen_intelligence::context::AnalysisContext;
use lumen_intelligence::InsightEngine;
use uuid::Uuid;

/// Emits a fixed list of insights regardless of context
struct FixedAnalyzer {
    name: &'static str,
    insights: Vec<AnalyzedInsight>,
}

impl DomainAnalyzer for FixedAnalyzer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn analyze(&self, _ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        Ok(self.insights.clone())
    }
}

/// Always fails, standing in for an analyzer with a latent bug
struct FailingAnalyzer;

impl DomainAnalyzer for FailingAnalyzer {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn analyze(&self, _ctx: &AnalysisContext) -> EngineResult<Vec<AnalyzedInsight>> {
        Err(EngineError::invalid_input("synthetic analyzer failure"))
    }
}

fn recommendation(title: &str, confidence: f64) -> AnalyzedInsight {
    AnalyzedInsight::recommendation(title, "test body", confidence, &["test"])
}

#[tokio::test]
async fn test_empty_history_yields_start_logging_fallback() {
    let engine = InsightEngine::new(FakeRepository::default());
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    assert_eq!(insights.len(), 1);
    assert!((insights[0].confidence - 0.95).abs() < f64::EPSILON);
    assert!(insights[0].title.contains("Start logging"));
}

#[tokio::test]
async fn test_sparse_history_yields_keep_logging_fallback() {
    // Five custom logs: real records, but nothing any analyzer reads
    let repo = FakeRepository {
        manual_logs: (1..=5).map(|d| log(LogType::Custom, d, 12, "note")).collect(),
        ..FakeRepository::default()
    };
    let engine = InsightEngine::new(repo);
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    assert_eq!(insights.len(), 1);
    assert!((insights[0].confidence - 0.90).abs() < f64::EPSILON);
    assert!(insights[0].title.contains("Keep logging"));
}

#[tokio::test]
async fn test_enough_records_with_zero_hits_is_a_valid_empty_result() {
    let repo = FakeRepository {
        manual_logs: (1..=12).map(|d| log(LogType::Custom, d, 12, "note")).collect(),
        ..FakeRepository::default()
    };
    let engine = InsightEngine::new(repo);
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    assert!(insights.is_empty());
}

#[tokio::test]
async fn test_dedup_keeps_first_occurrence_across_analyzers() {
    let first = FixedAnalyzer {
        name: "first",
        insights: vec![AnalyzedInsight::recommendation(
            "Salty days show up on the scale",
            "from the first analyzer",
            0.70,
            &["test"],
        )],
    };
    // Same title after normalization: case and punctuation differ only
    let second = FixedAnalyzer {
        name: "second",
        insights: vec![AnalyzedInsight::recommendation(
            "salty days - show up, on the scale",
            "from the second analyzer",
            0.99,
            &["test"],
        )],
    };

    let engine = InsightEngine::with_analyzers(
        FakeRepository::default(),
        vec![Box::new(first), Box::new(second)],
    );
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].description, "from the first analyzer");
}

#[tokio::test]
async fn test_ranking_is_descending_and_truncated_to_twenty() {
    // Titles must stay distinct after dedup normalization, which strips
    // non-letters, so the index is encoded as letters rather than digits
    let many: Vec<AnalyzedInsight> = (0..30)
        .map(|i| {
            let tag = format!(
                "{}{}",
                char::from(b'a' + (i / 26) as u8),
                char::from(b'a' + (i % 26) as u8)
            );
            recommendation(&format!("insight number {tag}"), 0.30 + f64::from(i) * 0.01)
        })
        .collect();
    let engine = InsightEngine::with_analyzers(
        FakeRepository::default(),
        vec![Box::new(FixedAnalyzer { name: "many", insights: many })],
    );
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    assert_eq!(insights.len(), 20);
    for pair in insights.windows(2) {
        assert!(pair[0].confidence >= pair[1].confidence);
    }
    // The lowest-confidence candidates are the ones cut
    assert!((insights[0].confidence - 0.59).abs() < 1e-9);
}

#[tokio::test]
async fn test_equal_confidence_preserves_input_order() {
    let tied: Vec<AnalyzedInsight> = ["alpha", "bravo", "charlie", "delta"]
        .iter()
        .map(|title| recommendation(title, 0.75))
        .collect();
    let engine = InsightEngine::with_analyzers(
        FakeRepository::default(),
        vec![Box::new(FixedAnalyzer { name: "tied", insights: tied })],
    );
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["alpha", "bravo", "charlie", "delta"]);
}

#[tokio::test]
async fn test_failing_analyzer_does_not_take_down_the_rest() {
    let good = FixedAnalyzer {
        name: "good",
        insights: vec![recommendation("the survivor", 0.8)],
    };
    let engine = InsightEngine::with_analyzers(
        FakeRepository::default(),
        vec![Box::new(FailingAnalyzer), Box::new(good)],
    );
    let insights = engine.generate_insights(Uuid::new_v4()).await.unwrap();

    assert_eq!(insights.len(), 1);
    assert_eq!(insights[0].title, "the survivor");
}

#[tokio::test]
async fn test_domain_fetch_failure_is_fatal() {
    let repo = FakeRepository {
        failing_domain: Some("metrics"),
        ..FakeRepository::default()
    };
    let engine = InsightEngine::new(repo);
    let err = engine.generate_insights(Uuid::new_v4()).await.unwrap_err();

    match err {
        EngineError::DataFetch { domain, .. } => assert_eq!(domain, "metrics"),
        other => panic!("expected DataFetch, got {other:?}"),
    }
}
