// ABOUTME: Macro plan command for budget-cli
// ABOUTME: Computes a MacroPlan for one profile, or plans for a JSON array of profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use anyhow::{Context, Result};
use calorie_budget_engine::models::BiometricProfile;
use calorie_budget_engine::BudgetEngine;
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::helpers::io::{print_json, read_json};

/// Compute and print the macro plan(s) for a profile file
///
/// A profile document holds either one profile object or an array of them.
pub fn run(engine: &BudgetEngine, profile_path: &Path) -> Result<()> {
    let document: Value = read_json(profile_path)?;

    if document.is_array() {
        let profiles: Vec<BiometricProfile> =
            serde_json::from_value(document).context("Invalid profile JSON")?;
        info!(count = profiles.len(), "Planning profile batch");
        let plans = engine.plan_batch(&profiles).context("Invalid profile")?;
        print_json(&plans)
    } else {
        let profile: BiometricProfile =
            serde_json::from_value(document).context("Invalid profile JSON")?;
        let plan = engine.plan(&profile).context("Invalid profile")?;
        print_json(&plan)
    }
}
