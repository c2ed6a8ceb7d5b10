// ABOUTME: Domain model re-exports from budget-core crate
// ABOUTME: Biometric profile, macro plan, weekly budget, adherence records, and weight log entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

pub use budget_core::models::*;
