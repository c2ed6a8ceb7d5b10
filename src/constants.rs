// ABOUTME: Constant re-exports from budget-core crate
// ABOUTME: Energy densities, calendar constants, input limits, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

pub use budget_core::constants::*;
