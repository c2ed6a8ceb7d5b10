// ABOUTME: BudgetEngine facade validating inputs and dispatching to the budget algorithms
// ABOUTME: Holds one immutable EngineConfig and emits structured tracing events per operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! # Budget Engine
//!
//! The algorithms in `budget-intelligence` trust their inputs. This facade is
//! the upstream validation point: it checks profiles and weigh-ins, then
//! delegates with its configuration. It keeps no state between calls, so
//! callers cache the returned [`MacroPlan`] themselves.

use budget_core::errors::{AppError, AppResult};
use budget_core::models::{
    BiometricProfile, DailyAdherenceRecord, MacroPlan, WeeklyBudget, WeightLogEntry,
};
use budget_intelligence::adherence_ledger::{AdherenceLedger, DailyAdherenceSummary};
use budget_intelligence::config::EngineConfig;
use budget_intelligence::nutrition_calculator::{calculate_macro_plan, compute_macro_plans_batch};
use budget_intelligence::trajectory_predictor::{predict_trajectory, WeightPrediction};
use budget_intelligence::zigzag_corrector::{calculate_zigzag_correction, ZigzagCorrection};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Stateless entry point to every engine operation
#[derive(Debug, Clone, Default)]
pub struct BudgetEngine {
    config: EngineConfig,
}

impl BudgetEngine {
    /// Create an engine with an explicit configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a profile and compute its macro plan
    ///
    /// # Errors
    ///
    /// Returns an error if the profile fails validation
    pub fn plan(&self, profile: &BiometricProfile) -> AppResult<MacroPlan> {
        profile.validate()?;
        let plan = calculate_macro_plan(profile, &self.config.nutrition);

        info!(
            goal = %plan.goal,
            bmr = plan.bmr,
            maintenance = plan.maintenance,
            calories = plan.calories,
            safety_floor_applied = plan.safety_floor_applied,
            "Macro plan calculated"
        );

        Ok(plan)
    }

    /// Validate every profile, then compute their plans in parallel
    ///
    /// # Errors
    ///
    /// Returns the first validation error, tagged with the profile's position
    pub fn plan_batch(&self, profiles: &[BiometricProfile]) -> AppResult<Vec<MacroPlan>> {
        for (index, profile) in profiles.iter().enumerate() {
            profile.validate().map_err(|e| {
                AppError::new(e.code, format!("profile {index}: {}", e.message))
            })?;
        }

        let plans = compute_macro_plans_batch(profiles, &self.config.nutrition);
        info!(count = plans.len(), "Batch macro plans calculated");
        Ok(plans)
    }

    /// Weekly budget for a plan, honouring a stored weekly limit override
    #[must_use]
    pub fn weekly_budget(&self, plan: &MacroPlan, weekly_override: Option<u32>) -> WeeklyBudget {
        let budget = WeeklyBudget::from_plan(plan);
        weekly_override.map_or(budget, |limit| budget.with_override(limit))
    }

    /// Today's corrected target from the week's adherence history
    #[must_use]
    pub fn correct(
        &self,
        today: NaiveDate,
        standard_daily_target: u32,
        history: &[DailyAdherenceRecord],
    ) -> ZigzagCorrection {
        let correction =
            calculate_zigzag_correction(today, standard_daily_target, history, &self.config.budget);

        debug!(
            %today,
            standard_daily_target,
            days_elapsed = correction.days_elapsed,
            net_surplus_kcal = correction.net_surplus_kcal,
            adjustment_per_day = correction.adjustment_per_day,
            corrected_target_kcal = correction.corrected_target_kcal,
            "Zigzag correction calculated"
        );

        correction
    }

    /// Monday-to-Sunday adherence summaries for the week containing `anchor`
    #[must_use]
    pub fn adherence_week(
        &self,
        anchor: NaiveDate,
        history: &[DailyAdherenceRecord],
    ) -> Vec<DailyAdherenceSummary> {
        AdherenceLedger::new(history).week_summaries(anchor)
    }

    /// Validate weigh-ins and project the weight trajectory
    ///
    /// # Errors
    ///
    /// Returns an error if a weigh-in or the target weight is not a positive finite number
    pub fn predict(
        &self,
        history: &[WeightLogEntry],
        target_weight_kg: Option<f64>,
    ) -> AppResult<WeightPrediction> {
        if let Some(bad) = history
            .iter()
            .find(|entry| !entry.weight_kg.is_finite() || entry.weight_kg <= 0.0)
        {
            return Err(AppError::invalid_input(format!(
                "weight_kg must be a positive number (entry at {})",
                bad.timestamp
            )));
        }
        if let Some(target) = target_weight_kg {
            if !target.is_finite() || target <= 0.0 {
                return Err(AppError::invalid_input(
                    "target_weight_kg must be a positive number",
                ));
            }
        }

        let prediction = predict_trajectory(history, target_weight_kg, &self.config.trajectory);

        info!(
            entries = history.len(),
            method = ?prediction.method,
            confidence = prediction.confidence,
            weekly_rate_kg = prediction.weekly_rate_kg,
            pace = ?prediction.pace,
            "Weight trajectory predicted"
        );

        Ok(prediction)
    }
}
