// ABOUTME: Nutrition configuration for BMR estimation and macro allocation
// ABOUTME: Formula coefficients, activity multipliers, goal adjustments, and macro ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). DOI: 10.1093/ajcn/51.2.241
//! - Roza, A.M., & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   DOI: 10.1093/ajcn/40.1.168
//! - Katch, F.I., & `McArdle`, W.D. (1996). Nutrition, Weight Control, and Exercise
//! - Cunningham, J.J. (1991). Body composition as a determinant of energy expenditure.
//!   DOI: 10.1093/ajcn/54.6.963

use serde::{Deserialize, Serialize};

/// Nutrition configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionConfig {
    /// BMR formula coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for maintenance calories
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-driven calorie adjustments and safety floor
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein and fat ratios
    pub macronutrients: MacronutrientConfig,
}

/// Coefficients for the four BMR formulas
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
    /// Revised Harris-Benedict coefficients for men
    pub harris_benedict_male: HarrisBenedictCoefficients,
    /// Revised Harris-Benedict coefficients for women
    pub harris_benedict_female: HarrisBenedictCoefficients,
    /// Katch-McArdle constant (370)
    pub katch_mcardle_constant: f64,
    /// Katch-McArdle lean mass coefficient (21.6)
    pub katch_mcardle_lbm_coef: f64,
    /// Cunningham constant (500)
    pub cunningham_constant: f64,
    /// Cunningham lean mass coefficient (22.0)
    pub cunningham_lbm_coef: f64,
}

/// One sex-specific Harris-Benedict coefficient set
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HarrisBenedictCoefficients {
    /// Additive constant
    pub constant: f64,
    /// Weight coefficient (per kg)
    pub weight_coef: f64,
    /// Height coefficient (per cm)
    pub height_coef: f64,
    /// Age coefficient (per year, negative)
    pub age_coef: f64,
}

/// Activity multipliers, strictly increasing with activity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.35
    pub sedentary: f64,
    /// Moderately active: 1.55
    pub moderately_active: f64,
    /// Very active: 1.725
    pub very_active: f64,
    /// Extra active: 1.9
    pub extra_active: f64,
}

/// Goal adjustments applied to maintenance calories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalAdjustmentConfig {
    /// Fat-loss deficit (kcal/day): 500
    pub fat_loss_deficit_kcal: f64,
    /// Muscle-gain surplus (kcal/day): 250
    pub muscle_gain_surplus_kcal: f64,
    /// Fat-loss targets never go more than this far under BMR (kcal): 200
    pub max_kcal_below_bmr: f64,
    /// Absolute fat-loss minimum (kcal/day): 1200
    pub minimum_daily_kcal: f64,
}

/// Protein and fat ratios; carbohydrates take the remainder
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MacronutrientConfig {
    /// Protein (g/kg bodyweight): 2.0
    pub protein_g_per_kg: f64,
    /// Fat (g/kg bodyweight): 0.8
    pub fat_g_per_kg: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
            harris_benedict_male: HarrisBenedictCoefficients {
                constant: 88.362,
                weight_coef: 13.397,
                height_coef: 4.799,
                age_coef: -5.677,
            },
            harris_benedict_female: HarrisBenedictCoefficients {
                constant: 447.593,
                weight_coef: 9.247,
                height_coef: 3.098,
                age_coef: -4.330,
            },
            katch_mcardle_constant: 370.0,
            katch_mcardle_lbm_coef: 21.6,
            cunningham_constant: 500.0,
            cunningham_lbm_coef: 22.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.35,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            fat_loss_deficit_kcal: 500.0,
            muscle_gain_surplus_kcal: 250.0,
            max_kcal_below_bmr: 200.0,
            minimum_daily_kcal: 1200.0,
        }
    }
}

impl Default for MacronutrientConfig {
    fn default() -> Self {
        Self {
            protein_g_per_kg: 2.0,
            fat_g_per_kg: 0.8,
        }
    }
}
