// ABOUTME: Configuration module for budget-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

/// Engine configuration (nutrition formulas, budget correction, trajectory)
pub mod intelligence;

pub use intelligence::EngineConfig;
