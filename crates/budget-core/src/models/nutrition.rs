// ABOUTME: Nutrition models for macro plans, weekly budgets, and daily meal adherence
// ABOUTME: MacroPlan, WeeklyBudget, MacroTotals, MealEntry, and DailyAdherenceRecord definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use crate::constants::time::DAYS_PER_WEEK;
use crate::errors::{AppError, AppResult};
use crate::models::profile::{ActivityLevel, Goal};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use uuid::Uuid;

/// Macronutrient and energy amounts for a meal or an aggregate of meals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Protein (grams)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub protein_g: f64,
    /// Carbohydrates (grams)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub carb_g: f64,
    /// Fat (grams)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fat_g: f64,
    /// Energy (kcal)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub kcal: f64,
}

impl MacroTotals {
    /// All-zero totals
    pub const ZERO: Self = Self {
        protein_g: 0.0,
        carb_g: 0.0,
        fat_g: 0.0,
        kcal: 0.0,
    };

    /// Create totals from explicit amounts
    #[must_use]
    pub const fn new(protein_g: f64, carb_g: f64, fat_g: f64, kcal: f64) -> Self {
        Self {
            protein_g,
            carb_g,
            fat_g,
            kcal,
        }
    }

    /// Copy with every non-finite or negative amount replaced by zero
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            protein_g: non_negative(self.protein_g),
            carb_g: non_negative(self.carb_g),
            fat_g: non_negative(self.fat_g),
            kcal: non_negative(self.kcal),
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            protein_g: self.protein_g + rhs.protein_g,
            carb_g: self.carb_g + rhs.carb_g,
            fat_g: self.fat_g + rhs.fat_g,
            kcal: self.kcal + rhs.kcal,
        }
    }
}

impl AddAssign for MacroTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for MacroTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// One prescribed meal and whether the user marked it as eaten
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealEntry {
    /// Display label owned by the content service (e.g. "Breakfast")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Prescribed macros for this meal
    #[serde(default)]
    pub target_macros: MacroTotals,
    /// Whether the user checked the meal off
    #[serde(default)]
    pub is_completed: bool,
}

impl MealEntry {
    /// Create an unlabeled meal entry
    #[must_use]
    pub const fn new(target_macros: MacroTotals, is_completed: bool) -> Self {
        Self {
            label: None,
            target_macros,
            is_completed,
        }
    }
}

/// A day's meal plan with completion flags, one per user per calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyAdherenceRecord {
    /// Calendar date of the plan
    pub date: NaiveDate,
    /// Owning user in daily plan storage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Ordered meal entries
    #[serde(default, deserialize_with = "lenient_meals")]
    pub meals: Vec<MealEntry>,
}

impl DailyAdherenceRecord {
    /// Create a record for a date
    #[must_use]
    pub const fn new(date: NaiveDate, meals: Vec<MealEntry>) -> Self {
        Self {
            date,
            user_id: None,
            meals,
        }
    }

    /// Toggle-style update of a single meal's completion flag
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `index` does not address a meal
    pub fn set_completed(&mut self, index: usize, completed: bool) -> AppResult<()> {
        let count = self.meals.len();
        let meal = self.meals.get_mut(index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Meal index {index} out of range for {} ({count} meals)",
                self.date
            ))
        })?;
        meal.is_completed = completed;
        Ok(())
    }
}

/// Macronutrient percentage breakdown of a plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroPercentages {
    /// Protein as percentage of macro calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of macro calories
    pub carbs_percent: f64,
    /// Fat as percentage of macro calories
    pub fat_percent: f64,
}

/// Daily calorie and macro targets derived from a biometric profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroPlan {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: u32,
    /// Maintenance calories, BMR x activity factor (kcal/day)
    pub maintenance: u32,
    /// Target calories (kcal/day)
    pub calories: u32,
    /// Weekly calories persisted alongside the daily target
    pub weekly_calories: u32,
    /// Daily protein (grams)
    pub protein_g: u32,
    /// Daily fat (grams)
    pub fat_g: u32,
    /// Daily carbohydrates (grams)
    pub carb_g: u32,
    /// Share of macro calories per macronutrient
    pub macro_percentages: MacroPercentages,
    /// Goal the plan was computed for
    pub goal: Goal,
    /// Activity tier the plan was computed for
    pub activity_level: ActivityLevel,
    /// Whether the fat-loss safety floor raised the target
    #[serde(default)]
    pub safety_floor_applied: bool,
    /// Audit trail of contributing formulas
    pub calculation_method: String,
}

/// Weekly calorie allowance for the zigzag budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBudget {
    /// Standard daily target (kcal)
    pub standard_daily_target: u32,
    /// Weekly limit (kcal)
    pub weekly_limit: u32,
}

impl WeeklyBudget {
    /// Derive the budget from a plan: seven standard days
    #[must_use]
    pub fn from_plan(plan: &MacroPlan) -> Self {
        Self {
            standard_daily_target: plan.calories,
            weekly_limit: plan.calories.saturating_mul(DAYS_PER_WEEK as u32),
        }
    }

    /// Replace the weekly limit with a stored override
    #[must_use]
    pub const fn with_override(mut self, weekly_limit: u32) -> Self {
        self.weekly_limit = weekly_limit;
        self
    }

    /// Allowance left this week after `consumed_kcal`; negative when over the limit
    #[must_use]
    pub fn remaining_after(&self, consumed_kcal: f64) -> f64 {
        f64::from(self.weekly_limit) - consumed_kcal
    }
}

/// Numbers, numeric strings, nulls, and garbage all become a plain f64 (garbage as 0)
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// A null or non-array meal list is empty; unparseable entries are dropped
fn lenient_meals<'de, D>(deserializer: D) -> Result<Vec<MealEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_totals_sum() {
        let total: MacroTotals = [
            MacroTotals::new(30.0, 50.0, 10.0, 410.0),
            MacroTotals::new(20.0, 40.0, 15.0, 375.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, MacroTotals::new(50.0, 90.0, 25.0, 785.0));
    }

    #[test]
    fn test_sanitized_zeroes_bad_values() {
        let bad = MacroTotals::new(f64::NAN, -10.0, f64::INFINITY, 250.0).sanitized();
        assert_eq!(bad, MacroTotals::new(0.0, 0.0, 0.0, 250.0));
    }

    #[test]
    fn test_malformed_record_deserializes_leniently() {
        let json = r#"{
            "date": "2024-05-13",
            "meals": [
                {"target_macros": {"kcal": "450", "protein_g": null}, "is_completed": true},
                {"target_macros": {"kcal": "lots"}, "is_completed": true},
                "not a meal",
                {"is_completed": false}
            ]
        }"#;
        let record: DailyAdherenceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.meals.len(), 3);
        assert!((record.meals[0].target_macros.kcal - 450.0).abs() < f64::EPSILON);
        assert!(record.meals[0].target_macros.protein_g.abs() < f64::EPSILON);
        assert!(record.meals[1].target_macros.kcal.abs() < f64::EPSILON);
        assert!(!record.meals[2].is_completed);
    }

    #[test]
    fn test_null_meal_list_is_empty() {
        let record: DailyAdherenceRecord =
            serde_json::from_str(r#"{"date": "2024-05-13", "meals": null}"#).unwrap();
        assert!(record.meals.is_empty());

        let record: DailyAdherenceRecord =
            serde_json::from_str(r#"{"date": "2024-05-13"}"#).unwrap();
        assert!(record.meals.is_empty());
    }

    #[test]
    fn test_set_completed_updates_flag() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 13).unwrap();
        let mut record = DailyAdherenceRecord::new(
            date,
            vec![MealEntry::new(MacroTotals::new(0.0, 0.0, 0.0, 500.0), false)],
        );
        record.set_completed(0, true).unwrap();
        assert!(record.meals[0].is_completed);
        assert!(record.set_completed(3, true).is_err());
    }

    #[test]
    fn test_weekly_budget_override_and_remaining() {
        let budget = WeeklyBudget {
            standard_daily_target: 2000,
            weekly_limit: 14_000,
        };
        let overridden = budget.with_override(13_000);
        assert_eq!(overridden.weekly_limit, 13_000);
        assert!((budget.remaining_after(6_500.0) - 7_500.0).abs() < f64::EPSILON);
        assert!(budget.remaining_after(15_000.0) < 0.0);
    }
}
