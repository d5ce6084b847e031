// ABOUTME: Progress aggregation engine for coachtrack client dashboards
// ABOUTME: Streaks, completion rates, trends, personal records, weekly stats, and rosters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![deny(unsafe_code)]

//! # Coachtrack Intelligence
//!
//! Pure aggregation functions over record snapshots. Nothing in this crate
//! performs I/O or reads the wall clock: callers fetch the records, pick a
//! reference day, and pass both in. Recomputing on the same input always
//! gives the same output.
//!
//! ## Modules
//!
//! - **streak**: consecutive-day streaks with an explicit boundary policy
//! - **completion**: assigned-versus-completed percentages
//! - **trend**: direction of change between the two latest samples
//! - **`personal_records`**: best-lift detection over exercise sets
//! - **weekly**: Monday-to-Sunday activity and completion statistics
//! - **summary**: the per-client dashboard composition
//! - **roster**: parallel summaries across a coach's clients
//! - **config**: environment-driven policy configuration

/// Policy configuration
pub mod config;

/// Completion-rate calculation
pub mod completion;

/// Personal-record detection
pub mod personal_records;

/// Roster overview across clients
pub mod roster;

/// Streak calculation
pub mod streak;

/// Per-client progress summaries
pub mod summary;

/// Trend direction between samples
pub mod trend;

/// Weekly statistics
pub mod weekly;

pub use completion::{
    compute_completion_rate, CompletionRateCalculator, CompletionSummary, RatePolicy,
};
pub use config::{AggregationConfig, ConfigError};
pub use personal_records::{BestLift, PersonalRecord, PersonalRecordDetector};
pub use roster::{roster_overview, summarize_roster, RosterEntry, RosterOverview};
pub use streak::{compute_streak, StreakCalculator, StreakPolicy, StreakSummary};
pub use summary::{ClientRecords, MeasurementSeries, ProgressAnalyzer, ProgressSummary};
pub use trend::{compute_trend, MetricProgress, Trend, TrendComparator, TrendDirection};
pub use weekly::{WeeklyStats, WeeklyStatsAggregator};
