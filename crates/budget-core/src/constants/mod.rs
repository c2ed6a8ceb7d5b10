// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Energy densities, calendar constants, and service names for the budget engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Constants grouped by domain rather than collected in one flat list.

/// Atwater energy densities for macronutrients
pub mod energy {
    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
}

/// Calendar constants
pub mod time {
    /// Days in an ISO week
    pub const DAYS_PER_WEEK: i64 = 7;
    /// Seconds in a day, for fractional day offsets
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Plausibility bounds used by profile validation
pub mod limits {
    /// Upper bound for body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 400.0;
    /// Upper bound for height (cm)
    pub const MAX_HEIGHT_CM: f64 = 280.0;
    /// Upper bound for age (years)
    pub const MAX_AGE_YEARS: u32 = 120;
    /// Upper bound for body fat percentage
    pub const MAX_BODY_FAT_PERCENT: f64 = 100.0;
}

/// Service names used in structured logging
pub mod service_names {
    /// Library / CLI service name
    pub const CALORIE_BUDGET_ENGINE: &str = "calorie-budget-engine";
}
