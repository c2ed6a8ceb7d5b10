// ABOUTME: Caloric-budget algorithms built on budget-core models
// ABOUTME: BMR/TDEE estimation, macro allocation, adherence ledger, zigzag correction, trajectory prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

#![deny(unsafe_code)]

//! # Budget Intelligence
//!
//! Deterministic numeric core of the caloric-budget engine. Every algorithm
//! is a pure function of its inputs and an explicitly passed configuration;
//! nothing here performs I/O or logs.
//!
//! ## Modules
//!
//! - **`nutrition_calculator`**: Blended BMR, maintenance calories, goal targets, macro plans
//! - **`adherence_ledger`**: Consumed totals from meal completion flags
//! - **`zigzag_corrector`**: Today's corrected target from this week's intake
//! - **`statistical_analysis`**: Ordinary least squares regression
//! - **`trajectory_predictor`**: Weight and body-fat projection, pace, milestones
//! - **config**: Typed, validated configuration with environment overrides

/// Typed engine configuration
pub mod config;

/// Read-only aggregation of meal completion
pub mod adherence_ledger;

/// BMR estimation and macro allocation
pub mod nutrition_calculator;

/// Least squares regression
pub mod statistical_analysis;

/// Weight trend projection
pub mod trajectory_predictor;

/// Weekly budget correction
pub mod zigzag_corrector;

pub use adherence_ledger::{week_start, AdherenceLedger, DailyAdherenceSummary};
pub use config::EngineConfig;
pub use nutrition_calculator::{
    allocate_macros, calculate_macro_plan, compute_macro_plans_batch,
    estimate_energy_expenditure, BmrFormula, EnergyEstimate,
};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use trajectory_predictor::{
    predict_trajectory, GraphPoint, Milestone, PaceAssessment, PredictionMethod, WeightPrediction,
};
pub use zigzag_corrector::{calculate_zigzag_correction, CorrectionStrategy, ZigzagCorrection};
