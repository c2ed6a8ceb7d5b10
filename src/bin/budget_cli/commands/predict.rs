// ABOUTME: Weight trajectory command for budget-cli
// ABOUTME: Projects weight and body fat from a weigh-in log, with an optional goal milestone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use anyhow::{Context, Result};
use calorie_budget_engine::models::WeightLogEntry;
use calorie_budget_engine::BudgetEngine;
use std::path::Path;

use crate::helpers::io::{print_json, read_json};

/// Predict the weight trajectory from a weigh-in file
pub fn run(engine: &BudgetEngine, weights_path: &Path, target_weight_kg: Option<f64>) -> Result<()> {
    let history: Vec<WeightLogEntry> = read_json(weights_path)?;
    let prediction = engine
        .predict(&history, target_weight_kg)
        .context("Invalid weight log")?;
    print_json(&prediction)
}
