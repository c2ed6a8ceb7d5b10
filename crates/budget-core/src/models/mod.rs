// ABOUTME: Domain models for the caloric-budget engine
// ABOUTME: Re-exports profile, nutrition plan, adherence, and weight log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

/// Biometric profile and its enumerations
pub mod profile;

/// Macro plans, weekly budgets, and daily adherence records
pub mod nutrition;

/// Weight and body-fat check-ins
pub mod weight;

pub use nutrition::{
    DailyAdherenceRecord, MacroPercentages, MacroPlan, MacroTotals, MealEntry, WeeklyBudget,
};
pub use profile::{ActivityLevel, BiometricProfile, Goal, Sex};
pub use weight::WeightLogEntry;
