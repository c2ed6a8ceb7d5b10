// ABOUTME: Nutrition calculation algorithms using peer-reviewed scientific formulas
// ABOUTME: Blended BMR estimation, maintenance calories, goal adjustment, and macro allocation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Nutrition Calculator Module
//!
//! BMR is estimated as the mean of two always-available formulas (Mifflin-St
//! Jeor and the revised Harris-Benedict) plus two lean-mass formulas
//! (Katch-McArdle and Cunningham) when body fat is known. Averaging the
//! families cancels part of each formula's individual bias.
//!
//! None of these functions validate their input: a non-positive weight,
//! height, or age produces a meaningless (possibly NaN) result. Callers run
//! [`BiometricProfile::validate`] upstream.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
//! - Roza, A.M., & Shizgal, H.M. (1984). DOI: 10.1093/ajcn/40.1.168
//! - Cunningham, J.J. (1991). DOI: 10.1093/ajcn/54.6.963
//! - `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology

use crate::config::intelligence::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig,
};
use budget_core::constants::energy::{
    KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
};
use budget_core::constants::time::DAYS_PER_WEEK;
use budget_core::models::{
    ActivityLevel, BiometricProfile, Goal, MacroPercentages, MacroPlan, Sex,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMR formula that contributed to an estimate
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (1990)
    MifflinStJeor,
    /// Harris-Benedict, Roza & Shizgal revision (1984)
    HarrisBenedict,
    /// Katch-McArdle, lean-mass based
    KatchMcArdle,
    /// Cunningham (1991), lean-mass based
    Cunningham,
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MifflinStJeor => "Mifflin-St Jeor",
            Self::HarrisBenedict => "Harris-Benedict (revised)",
            Self::KatchMcArdle => "Katch-McArdle",
            Self::Cunningham => "Cunningham",
        };
        f.write_str(name)
    }
}

/// Result of the BMR/TDEE estimator, before any rounding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Mean BMR over the contributing formulas (kcal/day)
    pub bmr: f64,
    /// BMR x activity factor (kcal/day)
    pub maintenance: f64,
    /// Activity factor used
    pub activity_factor: f64,
    /// Formulas that contributed, in evaluation order
    pub formulas: Vec<BmrFormula>,
}

impl EnergyEstimate {
    /// Human-readable audit trail of the estimate
    #[must_use]
    pub fn method(&self) -> String {
        let names: Vec<String> = self.formulas.iter().map(ToString::to_string).collect();
        format!(
            "Average of {} x {} activity factor",
            names.join(" + "),
            self.activity_factor
        )
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Men: +5
/// - Women: -161
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let sex_constant = match sex {
        Sex::Male => config.msj_male_constant,
        Sex::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate BMR using the revised Harris-Benedict equation (Roza & Shizgal 1984)
///
/// - Men: 88.362 + 13.397 x weight + 4.799 x height - 5.677 x age
/// - Women: 447.593 + 9.247 x weight + 3.098 x height - 4.330 x age
#[must_use]
pub fn calculate_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let coefficients = match sex {
        Sex::Male => &config.harris_benedict_male,
        Sex::Female => &config.harris_benedict_female,
    };

    let weight_component = coefficients.weight_coef * weight_kg;
    let height_component = coefficients.height_coef * height_cm;
    let age_component = coefficients.age_coef * f64::from(age);

    coefficients.constant + weight_component + height_component + age_component
}

/// Katch-McArdle: BMR = 370 + 21.6 x LBM
#[must_use]
pub fn calculate_katch_mcardle(lean_body_mass_kg: f64, config: &BmrConfig) -> f64 {
    config
        .katch_mcardle_lbm_coef
        .mul_add(lean_body_mass_kg, config.katch_mcardle_constant)
}

/// Cunningham: BMR = 500 + 22 x LBM
#[must_use]
pub fn calculate_cunningham(lean_body_mass_kg: f64, config: &BmrConfig) -> f64 {
    config
        .cunningham_lbm_coef
        .mul_add(lean_body_mass_kg, config.cunningham_constant)
}

/// Activity multiplier for a tier
#[must_use]
pub const fn activity_factor(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::ModeratelyActive => config.moderately_active,
        ActivityLevel::VeryActive => config.very_active,
        ActivityLevel::ExtraActive => config.extra_active,
    }
}

/// Estimate BMR and maintenance calories from a profile
///
/// Runs Mifflin-St Jeor and Harris-Benedict always, and Katch-McArdle plus
/// Cunningham when a positive body fat percentage is present, then averages
/// whichever ran.
#[must_use]
pub fn estimate_energy_expenditure(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> EnergyEstimate {
    let bmr_config = &config.bmr;
    let mut estimates = vec![
        (
            BmrFormula::MifflinStJeor,
            calculate_mifflin_st_jeor(
                profile.weight_kg,
                profile.height_cm,
                profile.age_years,
                profile.sex,
                bmr_config,
            ),
        ),
        (
            BmrFormula::HarrisBenedict,
            calculate_harris_benedict(
                profile.weight_kg,
                profile.height_cm,
                profile.age_years,
                profile.sex,
                bmr_config,
            ),
        ),
    ];

    if let Some(lbm) = profile.lean_body_mass_kg() {
        estimates.push((
            BmrFormula::KatchMcArdle,
            calculate_katch_mcardle(lbm, bmr_config),
        ));
        estimates.push((BmrFormula::Cunningham, calculate_cunningham(lbm, bmr_config)));
    }

    let bmr = estimates.iter().map(|(_, value)| value).sum::<f64>() / estimates.len() as f64;
    let factor = activity_factor(profile.activity_level, &config.activity_factors);

    EnergyEstimate {
        bmr,
        maintenance: bmr * factor,
        activity_factor: factor,
        formulas: estimates.into_iter().map(|(formula, _)| formula).collect(),
    }
}

/// Goal-adjusted daily target before rounding, and whether the safety floor raised it
///
/// Fat loss subtracts the deficit from maintenance. When that lands under BMR
/// (or under the absolute minimum) the target is lifted to
/// `max(target, bmr - max_kcal_below_bmr, minimum_daily_kcal)`. The floor never
/// applies to muscle gain or maintenance.
#[must_use]
pub fn calculate_goal_target(
    goal: Goal,
    bmr: f64,
    maintenance: f64,
    config: &GoalAdjustmentConfig,
) -> (f64, bool) {
    match goal {
        Goal::FatLoss => {
            let target = maintenance - config.fat_loss_deficit_kcal;
            if target < bmr || target < config.minimum_daily_kcal {
                let floored = target
                    .max(bmr - config.max_kcal_below_bmr)
                    .max(config.minimum_daily_kcal);
                (floored, floored > target)
            } else {
                (target, false)
            }
        }
        Goal::MuscleGain => (maintenance + config.muscle_gain_surplus_kcal, false),
        Goal::Maintenance => (maintenance, false),
    }
}

/// Round half-up to a whole non-negative unit
fn round_whole(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Turn an energy estimate into a full macro plan
///
/// Protein and fat are fixed per kilogram of bodyweight; carbohydrates take
/// whatever calories remain, floored at zero.
#[must_use]
pub fn allocate_macros(
    profile: &BiometricProfile,
    estimate: &EnergyEstimate,
    config: &NutritionConfig,
) -> MacroPlan {
    let (target, safety_floor_applied) = calculate_goal_target(
        profile.goal,
        estimate.bmr,
        estimate.maintenance,
        &config.goal_adjustments,
    );
    let calories = round_whole(target);

    let protein_g = round_whole(config.macronutrients.protein_g_per_kg * profile.weight_kg);
    let fat_g = round_whole(config.macronutrients.fat_g_per_kg * profile.weight_kg);

    let protein_kcal = f64::from(protein_g) * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = f64::from(fat_g) * KCAL_PER_GRAM_FAT;
    let carb_kcal = (f64::from(calories) - protein_kcal - fat_kcal).max(0.0);
    let carb_g = round_whole(carb_kcal / KCAL_PER_GRAM_CARBS);

    let mut method = estimate.method();
    match profile.goal {
        Goal::FatLoss => method.push_str(&format!(
            " - {} kcal fat loss deficit",
            config.goal_adjustments.fat_loss_deficit_kcal
        )),
        Goal::MuscleGain => method.push_str(&format!(
            " + {} kcal muscle gain surplus",
            config.goal_adjustments.muscle_gain_surplus_kcal
        )),
        Goal::Maintenance => {}
    }
    if safety_floor_applied {
        method.push_str(" (safety floor applied)");
    }

    MacroPlan {
        bmr: round_whole(estimate.bmr),
        maintenance: round_whole(estimate.maintenance),
        calories,
        weekly_calories: calories.saturating_mul(DAYS_PER_WEEK as u32),
        protein_g,
        fat_g,
        carb_g,
        macro_percentages: macro_percentages(protein_g, carb_g, fat_g),
        goal: profile.goal,
        activity_level: profile.activity_level,
        safety_floor_applied,
        calculation_method: method,
    }
}

fn macro_percentages(protein_g: u32, carb_g: u32, fat_g: u32) -> MacroPercentages {
    let protein_kcal = f64::from(protein_g) * KCAL_PER_GRAM_PROTEIN;
    let carbs_kcal = f64::from(carb_g) * KCAL_PER_GRAM_CARBS;
    let fat_kcal = f64::from(fat_g) * KCAL_PER_GRAM_FAT;
    let total_kcal = protein_kcal + carbs_kcal + fat_kcal;

    if total_kcal <= 0.0 {
        return MacroPercentages {
            protein_percent: 0.0,
            carbs_percent: 0.0,
            fat_percent: 0.0,
        };
    }

    MacroPercentages {
        protein_percent: protein_kcal / total_kcal * 100.0,
        carbs_percent: carbs_kcal / total_kcal * 100.0,
        fat_percent: fat_kcal / total_kcal * 100.0,
    }
}

/// Calculate the complete macro plan for a profile
///
/// This is the main entry point combining estimation and allocation.
#[must_use]
pub fn calculate_macro_plan(profile: &BiometricProfile, config: &NutritionConfig) -> MacroPlan {
    let estimate = estimate_energy_expenditure(profile, config);
    allocate_macros(profile, &estimate, config)
}

/// Calculate plans for many independent profiles in parallel, preserving order
#[must_use]
pub fn compute_macro_plans_batch(
    profiles: &[BiometricProfile],
    config: &NutritionConfig,
) -> Vec<MacroPlan> {
    profiles
        .par_iter()
        .map(|profile| calculate_macro_plan(profile, config))
        .collect()
}
