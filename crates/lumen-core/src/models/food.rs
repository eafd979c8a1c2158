// ABOUTME: Food diary entry model with macro totals and ingredient tags
// ABOUTME: FoodEntry definition used by nutrition and digestion analyzers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Lumen Health Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logged meal or snack with nutrient totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Total calories for this entry
    pub calories: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
    /// Sodium (milligrams), when the source provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium_mg: Option<f64>,
    /// Sugar (grams), when the source provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar_g: Option<f64>,
    /// Fiber (grams), when the source provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_g: Option<f64>,
    /// Entry contains dairy ingredients
    pub contains_dairy: bool,
    /// Entry contains gluten ingredients
    pub contains_gluten: bool,
    /// Moment the entry was logged
    pub logged_at: DateTime<Utc>,
}
