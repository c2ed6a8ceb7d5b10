// ABOUTME: Criterion benchmarks for the budget engine algorithms
// ABOUTME: Measures macro planning, parallel batch planning, zigzag correction, and trajectory fitting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

//! Criterion benchmarks for the budget engine algorithms.
//!
//! Compares sequential and rayon-backed batch planning, and measures how
//! correction and trajectory fitting scale with history length.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use calorie_budget_engine::config::{BudgetConfig, NutritionConfig, TrajectoryConfig};
use calorie_budget_engine::intelligence::nutrition_calculator::{
    calculate_macro_plan, compute_macro_plans_batch,
};
use calorie_budget_engine::intelligence::trajectory_predictor::predict_trajectory;
use calorie_budget_engine::intelligence::zigzag_corrector::calculate_zigzag_correction;
use chrono::Duration;
use common::fixtures::{
    generate_adherence, generate_profiles, generate_weigh_ins, week_start, BatchSize,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Benchmark a single macro plan
fn bench_macro_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("macro_plan");
    let config = NutritionConfig::default();
    let profiles = generate_profiles(BatchSize::Small);

    group.bench_function("single_profile", |b| {
        b.iter(|| calculate_macro_plan(black_box(&profiles[0]), black_box(&config)));
    });

    group.finish();
}

/// Benchmark sequential against parallel planning over growing batches
fn bench_batch_planning(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_planning");
    let config = NutritionConfig::default();

    for size in [BatchSize::Small, BatchSize::Medium, BatchSize::Large] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(size.count() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", size.count()),
            &profiles,
            |b, profiles| {
                b.iter(|| {
                    profiles
                        .iter()
                        .map(|profile| calculate_macro_plan(profile, &config))
                        .collect::<Vec<_>>()
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", size.count()),
            &profiles,
            |b, profiles| {
                b.iter(|| compute_macro_plans_batch(black_box(profiles), &config));
            },
        );
    }

    group.finish();
}

/// Benchmark the zigzag correction with a full week and a long mixed history
fn bench_zigzag_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("zigzag_correction");
    let config = BudgetConfig::default();
    let sunday = week_start() + Duration::days(6);

    for days in [6, 90] {
        let history = generate_adherence(days);
        group.bench_with_input(
            BenchmarkId::new("history_days", days),
            &history,
            |b, history| {
                b.iter(|| {
                    calculate_zigzag_correction(
                        black_box(sunday),
                        black_box(1953),
                        black_box(history),
                        &config,
                    )
                });
            },
        );
    }

    group.finish();
}

/// Benchmark trajectory fitting as the weigh-in log grows
fn bench_trajectory(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory");
    let config = TrajectoryConfig::default();

    for size in [BatchSize::Small, BatchSize::Medium, BatchSize::Large] {
        let weigh_ins = generate_weigh_ins(size);
        group.throughput(Throughput::Elements(size.count() as u64));
        group.bench_with_input(
            BenchmarkId::new("predict", size.count()),
            &weigh_ins,
            |b, weigh_ins| {
                b.iter(|| predict_trajectory(black_box(weigh_ins), Some(75.0), &config));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_macro_plan,
    bench_batch_planning,
    bench_zigzag_correction,
    bench_trajectory,
);
criterion_main!(benches);
