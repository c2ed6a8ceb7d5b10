// ABOUTME: Biometric profile snapshot consumed by the BMR estimator and macro allocator
// ABOUTME: Sex, ActivityLevel, and Goal enums plus upstream validation of profile values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use crate::constants::limits::{
    MAX_AGE_YEARS, MAX_BODY_FAT_PERCENT, MAX_HEIGHT_CM, MAX_WEIGHT_KG,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex used by the BMR formulas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Male coefficients
    #[serde(alias = "MALE")]
    Male,
    /// Female coefficients
    #[serde(alias = "FEMALE")]
    Female,
}

/// Activity tier for the maintenance multiplier, ordered from least to most active
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk job, little structured exercise
    #[serde(alias = "SEDENTARY")]
    Sedentary,
    /// Training 3-5 days/week
    #[serde(alias = "MODERATELY_ACTIVE", alias = "MODERATE")]
    ModeratelyActive,
    /// Training 6-7 days/week
    #[serde(alias = "VERY_ACTIVE", alias = "ACTIVE")]
    VeryActive,
    /// Hard training twice a day or a physical job
    #[serde(alias = "EXTRA_ACTIVE")]
    ExtraActive,
}

impl ActivityLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; 4] = [
        Self::Sedentary,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtraActive,
    ];
}

/// Body-composition goal driving the calorie adjustment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    #[serde(alias = "FAT_LOSS")]
    FatLoss,
    /// Caloric surplus
    #[serde(alias = "MUSCLE_GAIN")]
    MuscleGain,
    /// Caloric balance
    #[serde(alias = "MAINTENANCE")]
    Maintenance,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FatLoss => write!(f, "fat loss"),
            Self::MuscleGain => write!(f, "muscle gain"),
            Self::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// Immutable biometric snapshot supplied by profile storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: u32,
    /// Biological sex
    pub sex: Sex,
    /// Activity tier
    pub activity_level: ActivityLevel,
    /// Body-composition goal
    pub goal: Goal,
    /// Body fat percentage (0-100), if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
}

impl BiometricProfile {
    /// Lean body mass in kilograms, when a positive body fat percentage is known
    #[must_use]
    pub fn lean_body_mass_kg(&self) -> Option<f64> {
        self.body_fat_pct
            .filter(|pct| *pct > 0.0)
            .map(|pct| self.weight_kg * (1.0 - pct / 100.0))
    }

    /// Check the preconditions the estimator relies on.
    ///
    /// The algorithms themselves never validate; callers run this upstream.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for non-positive or non-finite measurements and
    /// `ValueOutOfRange` for implausible values.
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be positive"));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(AppError::invalid_input("Height must be positive"));
        }
        if self.age_years == 0 {
            return Err(AppError::invalid_input("Age must be positive"));
        }
        if self.weight_kg > MAX_WEIGHT_KG {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be at most {MAX_WEIGHT_KG} kg"
            )));
        }
        if self.height_cm > MAX_HEIGHT_CM {
            return Err(AppError::value_out_of_range(format!(
                "Height must be at most {MAX_HEIGHT_CM} cm"
            )));
        }
        if self.age_years > MAX_AGE_YEARS {
            return Err(AppError::value_out_of_range(format!(
                "Age must be at most {MAX_AGE_YEARS} years"
            )));
        }
        if let Some(pct) = self.body_fat_pct {
            if !(0.0..=MAX_BODY_FAT_PERCENT).contains(&pct) {
                return Err(AppError::value_out_of_range(
                    "Body fat percentage must be between 0 and 100",
                ));
            }
        }
        Ok(())
    }
}
