// ABOUTME: Error handling re-exports from budget-core crate
// ABOUTME: AppError, ErrorCode, and AppResult shared by the facade, binary, and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

pub use budget_core::errors::*;
