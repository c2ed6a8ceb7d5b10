// ABOUTME: Re-exports helper modules for budget-cli
// ABOUTME: Provides access to JSON file input and output utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

pub mod io;
