// ABOUTME: budget-cli - command-line driver for the adaptive caloric-budget engine
// ABOUTME: Reads JSON files, runs plan/correct/week/predict, and prints JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors
//!
//! Usage:
//! ```bash
//! # Macro plan for a profile (or a JSON array of profiles)
//! budget-cli plan --profile profile.json > plan.json
//!
//! # Today's corrected target from this week's meal completion
//! budget-cli correct --plan plan.json --history adherence.json --today 2025-10-09
//!
//! # Planned vs consumed for each day of the week
//! budget-cli week --history adherence.json --date 2025-10-09
//!
//! # Weight trajectory with a goal milestone
//! budget-cli predict --weights weights.json --target-weight 75
//!
//! # Custom engine configuration, debug logging as JSON on stderr
//! LOG_FORMAT=json budget-cli --config engine.json --verbose plan --profile profile.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use calorie_budget_engine::logging::LoggingConfig;
use calorie_budget_engine::BudgetEngine;
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use helpers::io::load_config;

#[derive(Parser)]
#[command(
    name = "budget-cli",
    about = "Adaptive caloric-budget engine CLI",
    long_about = "Computes macro plans, zigzag weekly corrections, adherence summaries, and weight trajectory projections from JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Engine configuration JSON (defaults plus `BUDGET_*` overrides when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the macro plan for a biometric profile
    Plan {
        /// Profile JSON (single object or array)
        #[arg(long)]
        profile: PathBuf,
    },

    /// Compute today's zigzag-corrected calorie target
    Correct {
        /// Macro plan JSON as produced by `plan`
        #[arg(long)]
        plan: PathBuf,

        /// Daily adherence records JSON array
        #[arg(long)]
        history: PathBuf,

        /// Date to correct (defaults to today, UTC)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Summarize planned vs consumed intake for an ISO week
    Week {
        /// Daily adherence records JSON array
        #[arg(long)]
        history: PathBuf,

        /// Any date within the week (defaults to today, UTC)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Project the weight and body-fat trajectory
    Predict {
        /// Weight log entries JSON array
        #[arg(long)]
        weights: PathBuf,

        /// Goal weight for the milestone estimate (kg)
        #[arg(long)]
        target_weight: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    LoggingConfig::from_env().with_level(log_level).init()?;

    let engine = BudgetEngine::new(load_config(cli.config.as_deref())?);
    debug!(config = ?engine.config(), "Engine configured");

    let today = || Utc::now().date_naive();

    match cli.command {
        Command::Plan { profile } => commands::plan::run(&engine, &profile),
        Command::Correct {
            plan,
            history,
            today: date,
        } => commands::correct::run(&engine, &plan, &history, date.unwrap_or_else(today)),
        Command::Week { history, date } => {
            commands::week::run(&engine, &history, date.unwrap_or_else(today))
        }
        Command::Predict {
            weights,
            target_weight,
        } => commands::predict::run(&engine, &weights, target_weight),
    }
}
