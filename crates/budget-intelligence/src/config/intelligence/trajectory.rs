// ABOUTME: Trajectory prediction configuration for weight and body-fat projections
// ABOUTME: Projection horizon, fallback rate, graph shape, and pace classification thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

use serde::{Deserialize, Serialize};

/// Trajectory predictor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Days past the last observation to project (28)
    pub projection_days: u32,
    /// Assumed weekly change when history is too sparse (-0.5 kg/week)
    pub fallback_weekly_change_kg: f64,
    /// Observed points kept in the graph series (5)
    pub graph_history_points: usize,
    /// Projected points appended to the graph series (4)
    pub graph_projection_points: usize,
    /// Spacing between projected graph points in days (7)
    pub graph_interval_days: u32,
    /// Pace classification thresholds
    pub pace: PaceThresholds,
}

/// Weekly-rate thresholds (kg/week) separating pace buckets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaceThresholds {
    /// Losing faster than this is too aggressive (-1.0)
    pub aggressive_loss_kg_per_week: f64,
    /// Losing at least this much is a healthy fat-loss pace (-0.3)
    pub healthy_loss_kg_per_week: f64,
    /// Gaining faster than this risks fat gain (0.5)
    pub max_healthy_gain_kg_per_week: f64,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            projection_days: 28,
            fallback_weekly_change_kg: -0.5,
            graph_history_points: 5,
            graph_projection_points: 4,
            graph_interval_days: 7,
            pace: PaceThresholds::default(),
        }
    }
}

impl Default for PaceThresholds {
    fn default() -> Self {
        Self {
            aggressive_loss_kg_per_week: -1.0,
            healthy_loss_kg_per_week: -0.3,
            max_healthy_gain_kg_per_week: 0.5,
        }
    }
}
