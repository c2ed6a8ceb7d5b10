// ABOUTME: JSON file input and stdout output helpers for budget-cli
// ABOUTME: Reads typed documents, loads engine configuration, and prints pretty JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use anyhow::{Context, Result};
use calorie_budget_engine::config::EngineConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and deserialize a JSON document
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load engine configuration from a JSON file, or defaults plus `BUDGET_*` overrides
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let Some(path) = path else {
        return EngineConfig::load().context("Invalid BUDGET_* environment override");
    };

    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = EngineConfig::from_json(&raw)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    debug!(path = %path.display(), "Engine configuration loaded from file");
    Ok(config)
}

/// Print a value to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{rendered}");
    Ok(())
}
