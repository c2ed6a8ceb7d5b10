// ABOUTME: Core types and constants for the adaptive caloric-budget engine
// ABOUTME: Foundation crate with error handling, domain models, and energy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Calorie Budget Engine Contributors

#![deny(unsafe_code)]

//! # Budget Core
//!
//! Foundation crate providing shared types and constants for the caloric-budget
//! engine. It changes infrequently so the algorithm crate can build on it
//! incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Energy densities and calendar constants
//! - **models**: Biometric profile, macro plan, adherence records, and weight log entries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (profile, plan, adherence, weight log)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
