// ABOUTME: Common benchmark utilities and fixtures for budget engine performance testing
// ABOUTME: Provides deterministic profile, adherence, and weigh-in generators for Criterion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
