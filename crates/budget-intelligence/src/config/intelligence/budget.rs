// ABOUTME: Weekly budget configuration for the zigzag calorie corrector
// ABOUTME: Adjustment size that warrants a context note for the content generator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use serde::{Deserialize, Serialize};

/// Zigzag correction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Adjustments larger than this (kcal/day, absolute) produce a context note
    pub note_threshold_kcal: i64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            note_threshold_kcal: 30,
        }
    }
}
