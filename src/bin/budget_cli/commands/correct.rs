// ABOUTME: Zigzag correction command for budget-cli
// ABOUTME: Reads a saved macro plan and adherence history, prints today's corrected target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use anyhow::Result;
use calorie_budget_engine::models::{DailyAdherenceRecord, MacroPlan};
use calorie_budget_engine::BudgetEngine;
use chrono::NaiveDate;
use std::path::Path;

use crate::helpers::io::{print_json, read_json};

/// Compute today's corrected calorie target
pub fn run(
    engine: &BudgetEngine,
    plan_path: &Path,
    history_path: &Path,
    today: NaiveDate,
) -> Result<()> {
    let plan: MacroPlan = read_json(plan_path)?;
    let history: Vec<DailyAdherenceRecord> = read_json(history_path)?;

    let correction = engine.correct(today, plan.calories, &history);
    print_json(&correction)
}
