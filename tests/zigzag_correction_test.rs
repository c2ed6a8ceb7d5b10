// ABOUTME: Integration tests for the adherence ledger and zigzag weekly correction
// ABOUTME: Reference Thursday example, Monday guard, on-budget identity, lenient record parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_budget_engine::config::BudgetConfig;
use calorie_budget_engine::intelligence::zigzag_corrector::{
    calculate_zigzag_correction, CorrectionStrategy,
};
use calorie_budget_engine::intelligence::AdherenceLedger;
use calorie_budget_engine::models::{DailyAdherenceRecord, MacroTotals, MealEntry};
use calorie_budget_engine::BudgetEngine;
use uuid::Uuid;

mod common;

use common::{eaten_day, october};

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_thursday_over_budget_example() {
    common::init_test_logging();
    // Monday to Wednesday at 2300 kcal against a 2000 kcal target
    let history: Vec<_> = (6..=8).map(|day| eaten_day(october(day), 2300.0)).collect();

    let correction = BudgetEngine::default().correct(october(9), 2000, &history);

    assert_eq!(correction.days_elapsed, 3);
    assert_eq!(correction.days_remaining, 4);
    assert!((correction.expected_total_kcal - 6000.0).abs() < f64::EPSILON);
    assert!((correction.actual_total_kcal - 6900.0).abs() < f64::EPSILON);
    assert!((correction.net_surplus_kcal - 900.0).abs() < f64::EPSILON);
    assert_eq!(correction.adjustment_per_day, 225);
    assert_eq!(correction.corrected_target_kcal, 1775);
    assert_eq!(correction.strategy, CorrectionStrategy::ReduceIntake);

    let note = correction.context_note.expect("225 kcal warrants a note");
    assert!(note.contains("over budget by 900 kcal"));
    assert!(note.contains("reduce"));
}

#[test]
fn test_monday_without_history_keeps_standard_target() {
    let correction = calculate_zigzag_correction(october(6), 1953, &[], &BudgetConfig::default());
    assert_eq!(correction.days_elapsed, 0);
    assert_eq!(correction.adjustment_per_day, 0);
    assert_eq!(correction.corrected_target_kcal, 1953);
    assert!(correction.context_note.is_none());
}

#[test]
fn test_on_budget_week_keeps_standard_target() {
    for today in 7..=12 {
        let history: Vec<_> = (6..today)
            .map(|day| eaten_day(october(day), 2000.0))
            .collect();
        let correction =
            calculate_zigzag_correction(october(today), 2000, &history, &BudgetConfig::default());

        assert_eq!(correction.corrected_target_kcal, 2000, "day {today}");
        assert_eq!(correction.strategy, CorrectionStrategy::OnTrack);
        assert!(correction.context_note.is_none());
    }
}

#[test]
fn test_sunday_puts_whole_imbalance_on_one_day() {
    let history: Vec<_> = (6..=11).map(|day| eaten_day(october(day), 2100.0)).collect();
    let correction =
        calculate_zigzag_correction(october(12), 2000, &history, &BudgetConfig::default());
    assert_eq!(correction.days_remaining, 1);
    assert_eq!(correction.adjustment_per_day, 600);
    assert_eq!(correction.corrected_target_kcal, 1400);
}

// ============================================================================
// ADHERENCE SEMANTICS
// ============================================================================

#[test]
fn test_unchecked_meals_count_as_not_eaten() {
    let mut record = eaten_day(october(6), 2000.0);
    record.set_completed(1, false).unwrap();
    let history = vec![record];

    let correction =
        calculate_zigzag_correction(october(7), 2000, &history, &BudgetConfig::default());
    // Only the first 1000 kcal meal counts: -1000 over 6 days
    assert_eq!(correction.adjustment_per_day, -167);
    assert_eq!(correction.corrected_target_kcal, 2167);
    assert_eq!(correction.strategy, CorrectionStrategy::IncreaseIntake);
}

#[test]
fn test_set_completed_rejects_bad_index() {
    let mut record = eaten_day(october(6), 2000.0);
    assert!(record.set_completed(5, true).is_err());
}

#[test]
fn test_lenient_record_parsing_feeds_correction() {
    let json = format!(
        r#"[
            {{"date": "2025-10-06", "meals": [
                {{"target_macros": {{"kcal": 1200, "protein_g": "40"}}, "is_completed": true}},
                {{"target_macros": {{"kcal": 900}}, "is_completed": false}},
                {{"bogus": 1, "is_completed": "yes"}}
            ]}},
            {{"date": "2025-10-07", "meals": null}},
            {{"date": "2025-10-08", "user_id": "{}", "meals": [
                {{"target_macros": {{"kcal": -50}}, "is_completed": true}},
                {{"target_macros": {{"kcal": 2000, "fat_g": null}}, "is_completed": true}}
            ]}}
        ]"#,
        Uuid::new_v4()
    );
    let history: Vec<DailyAdherenceRecord> = serde_json::from_str(&json).unwrap();

    assert_eq!(history[0].meals.len(), 2);
    assert!(history[1].meals.is_empty());
    assert!(history[2].user_id.is_some());

    let ledger = AdherenceLedger::new(&history);
    assert!((ledger.day_consumed(october(6)).protein_g - 40.0).abs() < f64::EPSILON);

    let correction =
        calculate_zigzag_correction(october(9), 2000, &history, &BudgetConfig::default());
    // 3200 eaten against 6000 expected, spread over 4 days
    assert!((correction.actual_total_kcal - 3200.0).abs() < f64::EPSILON);
    assert_eq!(correction.adjustment_per_day, -700);
    assert_eq!(correction.corrected_target_kcal, 2700);
}

// ============================================================================
// WEEKLY SUMMARIES
// ============================================================================

#[test]
fn test_adherence_week_summaries() {
    let history = vec![
        eaten_day(october(6), 2000.0),
        DailyAdherenceRecord::new(
            october(8),
            vec![
                MealEntry::new(MacroTotals::new(30.0, 40.0, 10.0, 500.0), true),
                MealEntry::new(MacroTotals::new(30.0, 40.0, 10.0, 700.0), false),
            ],
        ),
    ];

    let summaries = BudgetEngine::default().adherence_week(october(10), &history);

    assert_eq!(summaries.len(), 7);
    assert_eq!(summaries[0].date, october(6));
    assert!((summaries[0].completion_ratio - 1.0).abs() < f64::EPSILON);
    assert_eq!(summaries[1].total_meals, 0);
    assert!((summaries[2].completion_ratio - 0.5).abs() < f64::EPSILON);
    assert!((summaries[2].planned.kcal - 1200.0).abs() < f64::EPSILON);
    assert!((summaries[2].consumed.kcal - 500.0).abs() < f64::EPSILON);
}
