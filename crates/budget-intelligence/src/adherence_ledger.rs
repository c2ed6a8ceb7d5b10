// ABOUTME: Read-only aggregation of daily meal completion into consumed macro totals
// ABOUTME: Per-day, per-range, and per-ISO-week reductions plus daily adherence summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Adherence Ledger
//!
//! A meal counts as eaten only when its completion flag is set. Every
//! reduction here is total over its input: missing days contribute zero and
//! non-finite or negative macro values are ignored.

use budget_core::constants::time::DAYS_PER_WEEK;
use budget_core::models::{DailyAdherenceRecord, MacroTotals};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Monday of the ISO week containing `date`
#[must_use]
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Planned vs consumed view of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAdherenceSummary {
    /// Calendar date
    pub date: NaiveDate,
    /// Sum of every prescribed meal
    pub planned: MacroTotals,
    /// Sum of completed meals only
    pub consumed: MacroTotals,
    /// Meals marked as eaten
    pub completed_meals: usize,
    /// Meals prescribed
    pub total_meals: usize,
    /// `completed_meals / total_meals`, 0 when nothing was prescribed
    pub completion_ratio: f64,
}

/// Borrowed view over a user's daily adherence records
#[derive(Debug, Clone, Copy)]
pub struct AdherenceLedger<'a> {
    records: &'a [DailyAdherenceRecord],
}

impl<'a> AdherenceLedger<'a> {
    /// Wrap a slice of records; order and duplicates are irrelevant
    #[must_use]
    pub const fn new(records: &'a [DailyAdherenceRecord]) -> Self {
        Self { records }
    }

    /// Consumed totals of a single record
    #[must_use]
    pub fn record_consumed(record: &DailyAdherenceRecord) -> MacroTotals {
        record
            .meals
            .iter()
            .filter(|meal| meal.is_completed)
            .map(|meal| meal.target_macros.sanitized())
            .sum()
    }

    fn records_on(&self, date: NaiveDate) -> impl Iterator<Item = &'a DailyAdherenceRecord> {
        self.records.iter().filter(move |record| record.date == date)
    }

    /// Totals eaten on `date`, summed across every record carrying that date
    #[must_use]
    pub fn day_consumed(&self, date: NaiveDate) -> MacroTotals {
        self.records_on(date).map(Self::record_consumed).sum()
    }

    /// Totals eaten over `[start, end)`
    #[must_use]
    pub fn consumed_between(&self, start: NaiveDate, end: NaiveDate) -> MacroTotals {
        self.records
            .iter()
            .filter(|record| record.date >= start && record.date < end)
            .map(Self::record_consumed)
            .sum()
    }

    /// Totals eaten over the Monday-start ISO week containing `anchor`
    #[must_use]
    pub fn week_consumed(&self, anchor: NaiveDate) -> MacroTotals {
        let monday = week_start(anchor);
        self.consumed_between(monday, monday + Duration::days(DAYS_PER_WEEK))
    }

    /// Planned vs consumed breakdown for `date`
    #[must_use]
    pub fn day_summary(&self, date: NaiveDate) -> DailyAdherenceSummary {
        let mut planned = MacroTotals::ZERO;
        let mut consumed = MacroTotals::ZERO;
        let mut completed_meals = 0;
        let mut total_meals = 0;

        for meal in self.records_on(date).flat_map(|record| &record.meals) {
            let macros = meal.target_macros.sanitized();
            planned += macros;
            total_meals += 1;
            if meal.is_completed {
                consumed += macros;
                completed_meals += 1;
            }
        }

        let completion_ratio = if total_meals == 0 {
            0.0
        } else {
            completed_meals as f64 / total_meals as f64
        };

        DailyAdherenceSummary {
            date,
            planned,
            consumed,
            completed_meals,
            total_meals,
            completion_ratio,
        }
    }

    /// Seven summaries, Monday through Sunday, for the week containing `anchor`
    #[must_use]
    pub fn week_summaries(&self, anchor: NaiveDate) -> Vec<DailyAdherenceSummary> {
        let monday = week_start(anchor);
        (0..DAYS_PER_WEEK)
            .map(|offset| self.day_summary(monday + Duration::days(offset)))
            .collect()
    }
}
