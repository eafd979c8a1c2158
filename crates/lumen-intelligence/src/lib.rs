// ABOUTME: Correlation insight engine for the Lumen health platform
// ABOUTME: Context assembly, twelve domain analyzers, cycle rule table, and orchestrator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

#![deny(unsafe_code)]

//! # Lumen Intelligence
//!
//! Heuristic correlation engine over a user's trailing health-telemetry
//! window. One invocation builds an immutable [`context::AnalysisContext`]
//! from seven data domains, runs twelve independent analyzers plus a
//! cycle-phase rule table against it, then deduplicates, ranks, and truncates
//! the candidates into the final insight list.
//!
//! The engine is deliberately modest about its statistics: every rule is a
//! threshold heuristic with a hand-assigned confidence, not an inference
//! procedure. What it guarantees instead is determinism, minimum-sample
//! gating before any comparison is surfaced, and isolation - one analyzer
//! failing never costs the user the other eleven.
//!
//! ## Modules
//!
//! - **aggregation**: timezone-aware bucketing and statistics primitives
//! - **analysis_constants**: per-rule thresholds and confidence weights
//! - **analyzers**: the twelve [`analyzers::DomainAnalyzer`] implementations
//! - **context**: the shared per-invocation record bundle and its builder
//! - **cycle_rules**: fixed advisory table keyed by current cycle phase
//! - **engine**: the [`engine::InsightEngine`] orchestrator
//! - **ports**: injected repository and sink traits

/// Timezone-aware bucketing and statistics primitives
pub mod aggregation;

/// Per-rule thresholds, cohort minimums, and confidence weights
pub mod analysis_constants;

/// The twelve independent domain analyzers
pub mod analyzers;

/// Orchestrator-level configuration
pub mod config;

/// Per-invocation analysis context and its builder
pub mod context;

/// Cycle-phase advisory rule table
pub mod cycle_rules;

/// Insight generation orchestrator
pub mod engine;

/// Injected repository and sink abstractions
pub mod ports;

pub use analyzers::DomainAnalyzer;
pub use config::InsightEngineConfig;
pub use context::{AnalysisContext, ContextBuilder};
pub use engine::InsightEngine;
pub use ports::{HealthDataRepository, InsightSink};
