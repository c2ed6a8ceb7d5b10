// ABOUTME: Zigzag weekly calorie correction spreading this week's surplus or deficit over remaining days
// ABOUTME: Produces today's corrected target and an optional context note for content generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Zigzag Budget Corrector
//!
//! The week is the Monday-start ISO week. Everything eaten from Monday up to
//! (but excluding) today is compared to what the standard target allowed for
//! those days; the difference is amortized evenly over today and the days
//! left in the week.

use crate::adherence_ledger::{week_start, AdherenceLedger};
use crate::config::intelligence::BudgetConfig;
use budget_core::constants::time::DAYS_PER_WEEK;
use budget_core::models::DailyAdherenceRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of today's correction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionStrategy {
    /// No adjustment needed
    OnTrack,
    /// Surplus so far, today's target is lowered
    ReduceIntake,
    /// Deficit so far, today's target is raised
    IncreaseIntake,
}

/// Today's corrected calorie target and the numbers behind it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZigzagCorrection {
    /// Target to hand to the content generator (kcal, negative after a large surplus)
    pub corrected_target_kcal: i64,
    /// Standard target minus this value gives the corrected target
    pub adjustment_per_day: i64,
    /// Actual minus expected intake so far this week (kcal)
    pub net_surplus_kcal: f64,
    /// Standard target times elapsed days
    pub expected_total_kcal: f64,
    /// Consumed kcal from Monday up to yesterday
    pub actual_total_kcal: f64,
    /// Days since Monday (Monday = 0)
    pub days_elapsed: i64,
    /// Days left in the week including today
    pub days_remaining: i64,
    /// Direction of the adjustment
    pub strategy: CorrectionStrategy,
    /// Human-readable explanation, present only for noticeable adjustments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_note: Option<String>,
}

/// Compute today's corrected target from this week's adherence history
///
/// Records outside `[monday, today)` are ignored, so callers may pass a
/// longer history unfiltered.
#[must_use]
pub fn calculate_zigzag_correction(
    today: NaiveDate,
    standard_daily_target: u32,
    history: &[DailyAdherenceRecord],
    config: &BudgetConfig,
) -> ZigzagCorrection {
    let monday = week_start(today);
    let days_elapsed = (today - monday).num_days();
    let standard = f64::from(standard_daily_target);

    let expected_total_kcal = days_elapsed as f64 * standard;
    let actual_total_kcal = AdherenceLedger::new(history)
        .consumed_between(monday, today)
        .kcal;
    let net_surplus_kcal = actual_total_kcal - expected_total_kcal;

    let days_remaining = DAYS_PER_WEEK - days_elapsed;
    let adjustment_per_day = if days_remaining <= 0 {
        0
    } else {
        // Half-up: ties move toward positive infinity for both signs
        ((net_surplus_kcal / days_remaining as f64) + 0.5).floor() as i64
    };

    let corrected_target_kcal = i64::from(standard_daily_target) - adjustment_per_day;

    let strategy = match adjustment_per_day {
        0 => CorrectionStrategy::OnTrack,
        a if a > 0 => CorrectionStrategy::ReduceIntake,
        _ => CorrectionStrategy::IncreaseIntake,
    };

    let context_note = (adjustment_per_day.abs() > config.note_threshold_kcal)
        .then(|| context_note(net_surplus_kcal, adjustment_per_day, days_remaining));

    ZigzagCorrection {
        corrected_target_kcal,
        adjustment_per_day,
        net_surplus_kcal,
        expected_total_kcal,
        actual_total_kcal,
        days_elapsed,
        days_remaining,
        strategy,
        context_note,
    }
}

fn context_note(net_surplus_kcal: f64, adjustment_per_day: i64, days_remaining: i64) -> String {
    let magnitude = net_surplus_kcal.abs().round();
    let per_day = adjustment_per_day.abs();
    if adjustment_per_day > 0 {
        format!(
            "User is over budget by {magnitude} kcal this week. Strategy: reduce today's target \
             by {per_day} kcal and spread the rest over the remaining {days_remaining} days."
        )
    } else {
        format!(
            "User is under budget by {magnitude} kcal this week. Strategy: increase today's \
             target by {per_day} kcal and spread the rest over the remaining {days_remaining} days."
        )
    }
}
