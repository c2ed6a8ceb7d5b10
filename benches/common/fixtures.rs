// ABOUTME: Benchmark fixtures for generating biometric profiles, meal logs, and weigh-ins
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Benchmark fixtures.
//!
//! Every generator is a pure function of its index so runs are comparable.

use calorie_budget_engine::models::{
    ActivityLevel, BiometricProfile, DailyAdherenceRecord, Goal, MacroTotals, MealEntry, Sex,
    WeightLogEntry,
};
use chrono::{Duration, NaiveDate};

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum BatchSize {
    /// Small dataset (10 items) - quick benchmarks
    Small,
    /// Medium dataset (1,000 items) - a busy day of plan requests
    Medium,
    /// Large dataset (10,000 items) - bulk recomputation
    Large,
}

impl BatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1_000,
            Self::Large => 10_000,
        }
    }
}

/// Monday the week fixtures are anchored to
#[must_use]
pub fn week_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 6).unwrap_or_default()
}

/// Generate a spread of valid profiles across sexes, activity tiers, and goals
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_profiles(size: BatchSize) -> Vec<BiometricProfile> {
    let goals = [Goal::FatLoss, Goal::Maintenance, Goal::MuscleGain];
    (0..size.count())
        .map(|index| BiometricProfile {
            weight_kg: 50.0 + (index % 70) as f64,
            height_cm: 150.0 + (index % 45) as f64,
            age_years: 18 + (index % 60) as u32,
            sex: if index % 2 == 0 { Sex::Male } else { Sex::Female },
            activity_level: ActivityLevel::ALL[index % ActivityLevel::ALL.len()],
            goal: goals[index % goals.len()],
            body_fat_pct: (index % 3 == 0).then_some(12.0 + (index % 20) as f64),
        })
        .collect()
}

/// Generate `days` adherence records starting at the fixture Monday
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_adherence(days: usize) -> Vec<DailyAdherenceRecord> {
    (0..days)
        .map(|offset| {
            let meals = (0..4)
                .map(|meal| {
                    let kcal = 450.0 + ((offset * 7 + meal * 13) % 200) as f64;
                    MealEntry::new(
                        MacroTotals::new(30.0, 50.0, 15.0, kcal),
                        (offset + meal) % 5 != 0,
                    )
                })
                .collect();
            DailyAdherenceRecord::new(week_start() + Duration::days(offset as i64), meals)
        })
        .collect()
}

/// Generate a noisy downward weight log with one weigh-in per day
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_weigh_ins(size: BatchSize) -> Vec<WeightLogEntry> {
    let start = week_start() - Duration::days(size.count() as i64);
    (0..size.count())
        .map(|day| {
            let noise = ((day * 37) % 11) as f64 / 10.0 - 0.5;
            let entry = WeightLogEntry::on_date(
                start + Duration::days(day as i64),
                (-0.07_f64).mul_add(day as f64, 95.0) + noise,
            );
            if day % 7 == 0 {
                entry.with_body_fat((-0.02_f64).mul_add(day as f64, 28.0))
            } else {
                entry
            }
        })
        .collect()
}
