// ABOUTME: Weight and body-fat trajectory projection from logged weigh-ins
// ABOUTME: OLS weight trend, pace classification, goal milestone, and graph series for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Trajectory Predictor
//!
//! Weight is projected with an ordinary least squares fit over elapsed days
//! since the first weigh-in. Body fat is projected separately with a
//! two-point slope between the first and last entries that carry it, since
//! body-fat readings are sparse and noisy compared to scale weight.
//!
//! With fewer than two weigh-ins there is no trend to fit, so the prediction
//! falls back to an assumed weekly change and reports zero confidence.

use crate::config::intelligence::{PaceThresholds, TrajectoryConfig};
use crate::statistical_analysis::{RegressionResult, StatisticalAnalyzer};
use budget_core::constants::time::{DAYS_PER_WEEK, SECONDS_PER_DAY};
use budget_core::models::WeightLogEntry;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Weekly rates closer to zero than this count as maintaining (kg/week)
const MAINTAINING_TOLERANCE_KG_PER_WEEK: f64 = 1e-6;

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// How the prediction was produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMethod {
    /// Least squares trend over the logged history
    Regression,
    /// Fewer than two weigh-ins, assumed weekly change used instead
    InsufficientData,
}

/// Classification of the weekly rate of change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaceAssessment {
    /// Losing faster than the aggressive threshold
    TooAggressive,
    /// Losing within the recommended fat-loss range
    HealthyLoss,
    /// Losing, but slower than the healthy-loss threshold
    SlowLoss,
    /// No measurable trend
    Maintaining,
    /// Gaining within the lean-gain range
    HealthyGain,
    /// Gaining faster than the lean-gain threshold
    TooFastGain,
}

impl PaceAssessment {
    /// Classify a weekly rate (kg/week) against the configured thresholds
    #[must_use]
    pub fn classify(weekly_rate_kg: f64, thresholds: &PaceThresholds) -> Self {
        if weekly_rate_kg < thresholds.aggressive_loss_kg_per_week {
            Self::TooAggressive
        } else if weekly_rate_kg <= thresholds.healthy_loss_kg_per_week {
            Self::HealthyLoss
        } else if weekly_rate_kg.abs() < MAINTAINING_TOLERANCE_KG_PER_WEEK {
            Self::Maintaining
        } else if weekly_rate_kg < 0.0 {
            Self::SlowLoss
        } else if weekly_rate_kg <= thresholds.max_healthy_gain_kg_per_week {
            Self::HealthyGain
        } else {
            Self::TooFastGain
        }
    }

    /// Short coaching message for the pace
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::TooAggressive => {
                "Weight is dropping faster than 1 kg per week. Consider eating closer to your \
                 target to protect muscle mass."
            }
            Self::HealthyLoss => "You are losing weight at a healthy, sustainable pace. Keep it up.",
            Self::SlowLoss => {
                "Weight is trending down slowly. Tightening adherence to your daily target \
                 should speed things up."
            }
            Self::Maintaining => "Your weight is stable.",
            Self::HealthyGain => "You are gaining at a pace suited to building lean mass.",
            Self::TooFastGain => {
                "Weight is rising faster than 0.5 kg per week. Much of this may be fat; \
                 consider a smaller surplus."
            }
        }
    }
}

/// Projected date at which the target weight is crossed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    /// Requested target weight (kg)
    pub target_weight_kg: f64,
    /// When the fitted line reaches the target
    pub estimated_date: DateTime<Utc>,
    /// Days after the most recent weigh-in
    pub days_after_last_entry: f64,
}

/// One point of the display series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPoint {
    /// Point in time
    pub timestamp: DateTime<Utc>,
    /// Observed or projected weight (kg)
    pub weight_kg: f64,
    /// Whether the point lies on the projection rather than the log
    pub is_projection: bool,
}

/// Forward-looking weight and body-fat projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightPrediction {
    /// Most recent logged weight, 0 without history
    pub current_weight_kg: f64,
    /// Projected weight at the horizon
    pub predicted_weight_kg: f64,
    /// Projected body fat percentage, 0 when never recorded
    pub predicted_body_fat_pct: f64,
    /// Horizon the prediction refers to, absent without history
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection_date: Option<DateTime<Utc>>,
    /// `round(R^2 x 100)` in [0, 100], 0 for the fallback
    pub confidence: u8,
    /// Trend or assumed change (kg/week)
    pub weekly_rate_kg: f64,
    /// Classification of the weekly rate
    pub pace: PaceAssessment,
    /// Coaching message
    pub recommendation: String,
    /// Target weight crossing, when one was requested and lies ahead
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub milestone: Option<Milestone>,
    /// Recent observations followed by weekly projected points
    pub graph: Vec<GraphPoint>,
    /// How the prediction was produced
    pub method: PredictionMethod,
    /// Underlying fit, absent for the fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regression: Option<RegressionResult>,
}

fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    (end - start).num_milliseconds() as f64 / MILLIS_PER_DAY
}

fn offset_by_days(start: DateTime<Utc>, days: f64) -> Option<DateTime<Utc>> {
    if !days.is_finite() {
        return None;
    }
    let millis = (days * MILLIS_PER_DAY).round();
    if millis.abs() >= i64::MAX as f64 {
        return None;
    }
    start.checked_add_signed(Duration::milliseconds(millis as i64))
}

/// Project weight and body fat from a weigh-in history
///
/// `history` may be in any order. `target_weight_kg` enables the milestone
/// estimate.
#[must_use]
pub fn predict_trajectory(
    history: &[WeightLogEntry],
    target_weight_kg: Option<f64>,
    config: &TrajectoryConfig,
) -> WeightPrediction {
    let mut sorted = history.to_vec();
    sorted.sort_by_key(|entry| entry.timestamp);

    let samples = sorted
        .first()
        .map(|first| {
            sorted
                .iter()
                .map(|entry| (days_between(first.timestamp, entry.timestamp), entry.weight_kg))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    match StatisticalAnalyzer::linear_regression(&samples) {
        Ok(regression) => {
            regression_prediction(&sorted, &samples, regression, target_weight_kg, config)
        }
        Err(_) => fallback_prediction(sorted.last(), config),
    }
}

fn fallback_prediction(
    latest: Option<&WeightLogEntry>,
    config: &TrajectoryConfig,
) -> WeightPrediction {
    let weekly_rate_kg = config.fallback_weekly_change_kg;
    let weeks = f64::from(config.projection_days) / DAYS_PER_WEEK as f64;

    let (current_weight_kg, predicted_weight_kg, predicted_body_fat_pct, projection_date) =
        latest.map_or((0.0, 0.0, 0.0, None), |entry| {
            (
                entry.weight_kg,
                weekly_rate_kg.mul_add(weeks, entry.weight_kg),
                entry.recorded_body_fat().unwrap_or(0.0),
                offset_by_days(entry.timestamp, f64::from(config.projection_days)),
            )
        });

    let recommendation = if latest.is_some() {
        "Only one weigh-in logged. This projection assumes a typical weekly change; log at \
         least one more weigh-in to see your real trend."
    } else {
        "No weigh-ins logged yet. Log your weight to start tracking your trend."
    };

    WeightPrediction {
        current_weight_kg,
        predicted_weight_kg,
        predicted_body_fat_pct,
        projection_date,
        confidence: 0,
        weekly_rate_kg,
        pace: PaceAssessment::classify(weekly_rate_kg, &config.pace),
        recommendation: recommendation.to_owned(),
        milestone: None,
        graph: Vec::new(),
        method: PredictionMethod::InsufficientData,
        regression: None,
    }
}

fn regression_prediction(
    sorted: &[WeightLogEntry],
    samples: &[(f64, f64)],
    regression: RegressionResult,
    target_weight_kg: Option<f64>,
    config: &TrajectoryConfig,
) -> WeightPrediction {
    // The regression succeeded, so both slices hold at least two elements
    let (first, last) = (&sorted[0], &sorted[sorted.len() - 1]);
    let last_day = samples[samples.len() - 1].0;
    let horizon_day = last_day + f64::from(config.projection_days);

    let weekly_rate_kg = regression.slope * DAYS_PER_WEEK as f64;
    let pace = PaceAssessment::classify(weekly_rate_kg, &config.pace);
    let confidence = (regression.r_squared * 100.0).round().clamp(0.0, 100.0) as u8;

    let milestone = target_weight_kg.and_then(|target| {
        if regression.slope.abs() < f64::EPSILON {
            return None;
        }
        let day = (target - regression.intercept) / regression.slope;
        if day <= last_day {
            return None;
        }
        offset_by_days(first.timestamp, day).map(|estimated_date| Milestone {
            target_weight_kg: target,
            estimated_date,
            days_after_last_entry: day - last_day,
        })
    });

    WeightPrediction {
        current_weight_kg: last.weight_kg,
        predicted_weight_kg: regression.predict(horizon_day),
        predicted_body_fat_pct: project_body_fat(sorted, first, horizon_day),
        projection_date: offset_by_days(last.timestamp, f64::from(config.projection_days)),
        confidence,
        weekly_rate_kg,
        pace,
        recommendation: pace.recommendation().to_owned(),
        milestone,
        graph: build_graph(sorted, last, last_day, &regression, config),
        method: PredictionMethod::Regression,
        regression: Some(regression),
    }
}

/// Two-point body-fat extrapolation to `horizon_day`, clamped to [0, 100]
fn project_body_fat(sorted: &[WeightLogEntry], origin: &WeightLogEntry, horizon_day: f64) -> f64 {
    let readings: Vec<(f64, f64)> = sorted
        .iter()
        .filter_map(|entry| {
            entry
                .recorded_body_fat()
                .map(|bf| (days_between(origin.timestamp, entry.timestamp), bf))
        })
        .collect();

    match readings.as_slice() {
        [] => 0.0,
        [(_, only)] => *only,
        [(first_day, first_bf), .., (last_day, last_bf)] => {
            let span = last_day - first_day;
            let slope = if span > 0.0 {
                (last_bf - first_bf) / span
            } else {
                0.0
            };
            slope
                .mul_add(horizon_day - last_day, *last_bf)
                .clamp(0.0, 100.0)
        }
    }
}

fn build_graph(
    sorted: &[WeightLogEntry],
    last: &WeightLogEntry,
    last_day: f64,
    regression: &RegressionResult,
    config: &TrajectoryConfig,
) -> Vec<GraphPoint> {
    let skip = sorted.len().saturating_sub(config.graph_history_points);
    let observed = sorted.iter().skip(skip).map(|entry| GraphPoint {
        timestamp: entry.timestamp,
        weight_kg: entry.weight_kg,
        is_projection: false,
    });

    let interval = f64::from(config.graph_interval_days);
    let projected = (1..=config.graph_projection_points).filter_map(|step| {
        let offset = interval * step as f64;
        offset_by_days(last.timestamp, offset).map(|timestamp| GraphPoint {
            timestamp,
            weight_kg: regression.predict(last_day + offset),
            is_projection: true,
        })
    });

    observed.chain(projected).collect()
}
