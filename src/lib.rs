// ABOUTME: Main library entry point for the adaptive caloric-budget engine
// ABOUTME: Re-exports core models and algorithms, and provides the BudgetEngine facade and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

#![deny(unsafe_code)]

//! # Calorie Budget Engine
//!
//! Deterministic numeric core of a fitness and nutrition tracker. From user
//! biometrics it estimates basal metabolic rate and derives a daily and
//! weekly calorie and macro budget; from meal completion it redistributes
//! that budget across the ISO week ("zigzag" correction); from weigh-ins it
//! projects the weight and body-fat trajectory.
//!
//! ## Architecture
//!
//! - **`budget-core`**: error types, domain models, constants
//! - **`budget-intelligence`**: the pure algorithms and their configuration
//! - **this crate**: the [`BudgetEngine`] facade, logging setup, and the `budget-cli` binary
//!
//! ## Example Usage
//!
//! ```rust
//! use calorie_budget_engine::models::{ActivityLevel, BiometricProfile, Goal, Sex};
//! use calorie_budget_engine::BudgetEngine;
//!
//! let profile = BiometricProfile {
//!     weight_kg: 80.0,
//!     height_cm: 180.0,
//!     age_years: 30,
//!     sex: Sex::Male,
//!     activity_level: ActivityLevel::Sedentary,
//!     goal: Goal::FatLoss,
//!     body_fat_pct: None,
//! };
//!
//! let plan = BudgetEngine::default().plan(&profile)?;
//! assert_eq!(plan.calories, 1953);
//! # Ok::<(), calorie_budget_engine::errors::AppError>(())
//! ```

/// Engine configuration re-exported from `budget-intelligence`
pub mod config;

/// Energy and calendar constants re-exported from `budget-core`
pub mod constants;

/// Validating facade over the budget algorithms
pub mod engine;

/// Unified error handling re-exported from `budget-core`
pub mod errors;

/// Budget algorithms re-exported from `budget-intelligence`
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Domain models re-exported from `budget-core`
pub mod models;

pub use engine::BudgetEngine;
pub use errors::{AppError, AppResult, ErrorCode};
