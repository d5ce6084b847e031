// ABOUTME: Configuration module for coachtrack-intelligence
// ABOUTME: Re-exports aggregation policy configuration and its error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

/// Aggregation policies (streak boundary, rate clamping, trend dead-zones, calendar)
pub mod aggregation;

/// Configuration validation errors
pub mod error;

pub use aggregation::{
    AggregationConfig, CalendarConfig, CompletionConfig, StreakConfig, TrendConfig,
};
pub use error::ConfigError;
