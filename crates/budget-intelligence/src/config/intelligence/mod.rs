// ABOUTME: Engine configuration for BMR estimation, budget correction, and trajectory prediction
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - BMR formulas, activity multipliers, goal adjustments, macro ratios
//! - `budget` - Zigzag correction note threshold
//! - `trajectory` - Weight projection horizon, graph shape, pace thresholds
//!
//! Defaults reproduce the published formulas. `load()` layers `BUDGET_*`
//! environment overrides on top and validates the result.

pub mod budget;
pub mod error;
pub mod nutrition;
pub mod trajectory;

pub use budget::BudgetConfig;
pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, HarrisBenedictCoefficients,
    MacronutrientConfig, NutritionConfig,
};
pub use trajectory::{PaceThresholds, TrajectoryConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// BMR estimation and macro allocation
    pub nutrition: NutritionConfig,
    /// Zigzag budget correction
    pub budget: BudgetConfig,
    /// Weight trajectory prediction
    pub trajectory: TrajectoryConfig,
}

impl EngineConfig {
    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON configuration document; omitted fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or fails validation
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first inconsistent value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_finite()?;
        self.validate_nutrition()?;

        if self.budget.note_threshold_kcal < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "note_threshold_kcal must not be negative",
            ));
        }

        let trajectory = &self.trajectory;
        if trajectory.projection_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "projection_days must be positive",
            ));
        }
        if trajectory.graph_interval_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "graph_interval_days must be positive",
            ));
        }
        let pace = &trajectory.pace;
        if pace.aggressive_loss_kg_per_week >= pace.healthy_loss_kg_per_week
            || pace.healthy_loss_kg_per_week >= 0.0
            || pace.max_healthy_gain_kg_per_week <= 0.0
        {
            return Err(ConfigError::InvalidRange(
                "pace thresholds must satisfy aggressive < healthy_loss < 0 < max_healthy_gain",
            ));
        }

        Ok(())
    }

    /// Reject NaN and infinite values, which slip past every ordered comparison
    fn validate_finite(&self) -> Result<(), ConfigError> {
        let bmr = &self.nutrition.bmr;
        let hb_male = &bmr.harris_benedict_male;
        let hb_female = &bmr.harris_benedict_female;
        let factors = &self.nutrition.activity_factors;
        let goals = &self.nutrition.goal_adjustments;
        let macros = &self.nutrition.macronutrients;
        let trajectory = &self.trajectory;
        let pace = &trajectory.pace;

        let fields = [
            ("msj_weight_coef must be finite", bmr.msj_weight_coef),
            ("msj_height_coef must be finite", bmr.msj_height_coef),
            ("msj_age_coef must be finite", bmr.msj_age_coef),
            ("msj_male_constant must be finite", bmr.msj_male_constant),
            ("msj_female_constant must be finite", bmr.msj_female_constant),
            ("harris_benedict_male.constant must be finite", hb_male.constant),
            ("harris_benedict_male.weight_coef must be finite", hb_male.weight_coef),
            ("harris_benedict_male.height_coef must be finite", hb_male.height_coef),
            ("harris_benedict_male.age_coef must be finite", hb_male.age_coef),
            ("harris_benedict_female.constant must be finite", hb_female.constant),
            ("harris_benedict_female.weight_coef must be finite", hb_female.weight_coef),
            ("harris_benedict_female.height_coef must be finite", hb_female.height_coef),
            ("harris_benedict_female.age_coef must be finite", hb_female.age_coef),
            ("katch_mcardle_constant must be finite", bmr.katch_mcardle_constant),
            ("katch_mcardle_lbm_coef must be finite", bmr.katch_mcardle_lbm_coef),
            ("cunningham_constant must be finite", bmr.cunningham_constant),
            ("cunningham_lbm_coef must be finite", bmr.cunningham_lbm_coef),
            ("sedentary factor must be finite", factors.sedentary),
            ("moderately_active factor must be finite", factors.moderately_active),
            ("very_active factor must be finite", factors.very_active),
            ("extra_active factor must be finite", factors.extra_active),
            ("fat_loss_deficit_kcal must be finite", goals.fat_loss_deficit_kcal),
            ("muscle_gain_surplus_kcal must be finite", goals.muscle_gain_surplus_kcal),
            ("max_kcal_below_bmr must be finite", goals.max_kcal_below_bmr),
            ("minimum_daily_kcal must be finite", goals.minimum_daily_kcal),
            ("protein_g_per_kg must be finite", macros.protein_g_per_kg),
            ("fat_g_per_kg must be finite", macros.fat_g_per_kg),
            (
                "fallback_weekly_change_kg must be finite",
                trajectory.fallback_weekly_change_kg,
            ),
            (
                "aggressive_loss_kg_per_week must be finite",
                pace.aggressive_loss_kg_per_week,
            ),
            (
                "healthy_loss_kg_per_week must be finite",
                pace.healthy_loss_kg_per_week,
            ),
            (
                "max_healthy_gain_kg_per_week must be finite",
                pace.max_healthy_gain_kg_per_week,
            ),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(message, _)) => Err(ConfigError::ValueOutOfRange(message)),
            None => Ok(()),
        }
    }

    /// Validate nutrition configuration
    fn validate_nutrition(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.msj_weight_coef <= 0.0 || nutr.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }
        if nutr.bmr.katch_mcardle_lbm_coef <= 0.0 || nutr.bmr.cunningham_lbm_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Lean body mass coefficients must be positive",
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if factors.sedentary >= factors.moderately_active
            || factors.moderately_active >= factors.very_active
            || factors.very_active >= factors.extra_active
        {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &nutr.goal_adjustments;
        if goals.fat_loss_deficit_kcal < 0.0 || goals.muscle_gain_surplus_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Goal deficit and surplus must not be negative",
            ));
        }
        if goals.max_kcal_below_bmr < 0.0 || goals.minimum_daily_kcal < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Safety floor values must not be negative",
            ));
        }

        let macros = &nutr.macronutrients;
        if macros.protein_g_per_kg <= 0.0 || macros.protein_g_per_kg > 3.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Protein must be between 0 and 3.5 g/kg",
            ));
        }
        if macros.fat_g_per_kg <= 0.0 || macros.fat_g_per_kg > 2.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Fat must be between 0 and 2.0 g/kg",
            ));
        }

        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Activity multipliers
        let factors = &mut self.nutrition.activity_factors;
        Self::apply_env_var("BUDGET_ACTIVITY_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var(
            "BUDGET_ACTIVITY_MODERATELY_ACTIVE",
            &mut factors.moderately_active,
        )?;
        Self::apply_env_var("BUDGET_ACTIVITY_VERY_ACTIVE", &mut factors.very_active)?;
        Self::apply_env_var("BUDGET_ACTIVITY_EXTRA_ACTIVE", &mut factors.extra_active)?;

        // Goal adjustments and safety floor
        let goals = &mut self.nutrition.goal_adjustments;
        Self::apply_env_var(
            "BUDGET_FAT_LOSS_DEFICIT_KCAL",
            &mut goals.fat_loss_deficit_kcal,
        )?;
        Self::apply_env_var(
            "BUDGET_MUSCLE_GAIN_SURPLUS_KCAL",
            &mut goals.muscle_gain_surplus_kcal,
        )?;
        Self::apply_env_var("BUDGET_MAX_KCAL_BELOW_BMR", &mut goals.max_kcal_below_bmr)?;
        Self::apply_env_var("BUDGET_MINIMUM_DAILY_KCAL", &mut goals.minimum_daily_kcal)?;

        // Macro ratios
        let macros = &mut self.nutrition.macronutrients;
        Self::apply_env_var("BUDGET_PROTEIN_G_PER_KG", &mut macros.protein_g_per_kg)?;
        Self::apply_env_var("BUDGET_FAT_G_PER_KG", &mut macros.fat_g_per_kg)?;

        // Zigzag correction
        Self::apply_env_var(
            "BUDGET_NOTE_THRESHOLD_KCAL",
            &mut self.budget.note_threshold_kcal,
        )?;

        // Trajectory
        Self::apply_env_var(
            "BUDGET_PROJECTION_DAYS",
            &mut self.trajectory.projection_days,
        )?;
        Self::apply_env_var(
            "BUDGET_FALLBACK_WEEKLY_CHANGE_KG",
            &mut self.trajectory.fallback_weekly_change_kg,
        )?;

        Ok(self)
    }
}
