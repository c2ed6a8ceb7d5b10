// ABOUTME: Weekly adherence command for budget-cli
// ABOUTME: Prints Monday-to-Sunday planned vs consumed summaries from adherence history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use anyhow::Result;
use calorie_budget_engine::models::DailyAdherenceRecord;
use calorie_budget_engine::BudgetEngine;
use chrono::NaiveDate;
use std::path::Path;

use crate::helpers::io::{print_json, read_json};

/// Summarize adherence for the ISO week containing `anchor`
pub fn run(engine: &BudgetEngine, history_path: &Path, anchor: NaiveDate) -> Result<()> {
    let history: Vec<DailyAdherenceRecord> = read_json(history_path)?;
    print_json(&engine.adherence_week(anchor, &history))
}
