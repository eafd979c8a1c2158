// ABOUTME: Core types and errors for the Lumen health insight platform
// ABOUTME: Foundation crate with domain models, error taxonomy, and insight types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

#![deny(unsafe_code)]

//! # Lumen Core
//!
//! Foundation crate providing shared types for the Lumen correlation insight
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `EngineError` taxonomy and `EngineResult` alias
//! - **models**: immutable domain records (metrics, logs, food, calendar,
//!   weather, medication, cycle) and the generated `AnalyzedInsight` type

/// Error taxonomy for the insight engine
pub mod errors;

/// Domain records and insight types
pub mod models;

pub use errors::{EngineError, EngineResult};
