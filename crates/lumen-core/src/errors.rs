// ABOUTME: Unified error taxonomy for the Lumen insight engine
// ABOUTME: Fatal fetch errors, input validation errors, and sink-side persistence errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

//! # Error Handling
//!
//! Errors follow the engine's propagation policy: isolate at the smallest unit
//! that can fail independently, escalate only when the shared input cannot be
//! built. A failed batched read is fatal to the whole call (`DataFetch`); a
//! single analyzer returning an error is logged by the orchestrator and treated
//! as a zero-insight contribution, so analyzer errors never surface here as a
//! dedicated variant. `Persistence` exists for external sink implementations
//! only - the engine itself never raises it.

use thiserror::Error;

/// Result alias used throughout the engine crates
pub type EngineResult<T> = Result<T, EngineError>;

/// Unified error type for the insight engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The batched read of one or more data domains failed outright.
    /// Fatal to the invocation - the caller receives no insights.
    #[error("failed to fetch {domain} data: {message}")]
    DataFetch {
        /// Data domain that failed (e.g. "metrics", "calendar")
        domain: String,
        /// Underlying failure description
        message: String,
    },

    /// A record failed validation at construction time
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The user's timezone identifier could not be resolved.
    /// Aggregation primitives degrade on their own; this variant is for
    /// callers that require strict resolution.
    #[error("timezone resolution failed for '{0}'")]
    Timezone(String),

    /// Writing insights to the external sink failed. Raised only by sink
    /// implementations; the engine's returned list remains valid.
    #[error("insight persistence failed: {0}")]
    Persistence(String),
}

impl EngineError {
    /// Create a `DataFetch` error for a named domain
    pub fn data_fetch(domain: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataFetch {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Create an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
