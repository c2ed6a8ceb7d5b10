// ABOUTME: Re-exports command modules for budget-cli
// ABOUTME: Provides access to plan, correct, week, and predict commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

pub mod correct;
pub mod plan;
pub mod predict;
pub mod week;
