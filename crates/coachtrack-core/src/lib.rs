// ABOUTME: Core types and constants for the coachtrack progress aggregation workspace
// ABOUTME: Foundation crate with error handling, record models, calendar days, and time windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![deny(unsafe_code)]

//! # Coachtrack Core
//!
//! Foundation crate providing shared types for coachtrack. Everything here is
//! plain data plus the date handling every aggregation depends on, so it
//! changes rarely and keeps incremental builds of the algorithm crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Defaults for streak lookback, trend dead-zones, and windows
//! - **models**: Activity, assignment, completion, sample, and exercise-set records
//! - **time**: Calendar-day normalization, day boundaries, time windows, clocks

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Read-only record snapshots fetched from the data layer
pub mod models;

/// Calendar days, day boundaries, time windows, and clocks
pub mod time;

pub use errors::{AppError, AppResult, ErrorCode};
