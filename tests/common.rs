// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, reference profiles, and date helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `calorie_budget_engine`

use calorie_budget_engine::models::{
    ActivityLevel, BiometricProfile, DailyAdherenceRecord, Goal, MacroTotals, MealEntry, Sex,
};
use chrono::NaiveDate;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// 80 kg, 180 cm, 30-year-old sedentary male aiming for fat loss
pub fn reference_male() -> BiometricProfile {
    BiometricProfile {
        weight_kg: 80.0,
        height_cm: 180.0,
        age_years: 30,
        sex: Sex::Male,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::FatLoss,
        body_fat_pct: None,
    }
}

/// 62 kg, 165 cm, 28-year-old moderately active female at maintenance
pub fn reference_female() -> BiometricProfile {
    BiometricProfile {
        weight_kg: 62.0,
        height_cm: 165.0,
        age_years: 28,
        sex: Sex::Female,
        activity_level: ActivityLevel::ModeratelyActive,
        goal: Goal::Maintenance,
        body_fat_pct: None,
    }
}

/// Date in the week of Monday 2025-10-06
pub fn october(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, day).unwrap()
}

/// A record of two completed meals, each half of `kcal`
pub fn eaten_day(date: NaiveDate, kcal: f64) -> DailyAdherenceRecord {
    let half = MacroTotals::new(35.0, 55.0, 18.0, kcal / 2.0);
    DailyAdherenceRecord::new(
        date,
        vec![MealEntry::new(half, true), MealEntry::new(half, true)],
    )
}
