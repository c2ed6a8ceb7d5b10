// ABOUTME: Intelligence module re-exports from budget-intelligence crate
// ABOUTME: Keeps algorithm import paths stable for the binary, tests, and benches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

// Re-export all public items from budget-intelligence
pub use budget_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::zigzag_corrector::ZigzagCorrection)
pub use budget_intelligence::{
    adherence_ledger, nutrition_calculator, statistical_analysis, trajectory_predictor,
    zigzag_corrector,
};
