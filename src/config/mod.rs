// ABOUTME: Configuration module re-exports from budget-intelligence crate
// ABOUTME: Engine configuration with defaults, BUDGET_* environment overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

pub use budget_intelligence::config::intelligence::*;
