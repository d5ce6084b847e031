// ABOUTME: Application configuration assembled from environment variables
// ABOUTME: Bundles logging settings with the validated aggregation policies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::logging::LoggingConfig;
use coachtrack_core::errors::AppResult;
use coachtrack_intelligence::config::AggregationConfig;
use tracing::info;

/// Everything a coachtrack process reads from its environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Streak, completion, trend, and calendar policies
    pub aggregation: AggregationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if an aggregation variable is malformed
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            logging: LoggingConfig::from_env(),
            aggregation: AggregationConfig::from_environment()?,
        };
        Ok(config)
    }

    /// Log the effective aggregation policies
    pub fn log_summary(&self) {
        let aggregation = &self.aggregation;
        info!(
            streak.policy = ?aggregation.streak.policy,
            streak.lookback = ?aggregation.streak.lookback_records,
            completion.policy = ?aggregation.completion.policy,
            trend.threshold_override = ?aggregation.trend.threshold_override,
            calendar.utc_offset_minutes = aggregation.calendar.day_boundary.utc_offset_minutes(),
            "Aggregation configuration loaded"
        );
    }
}
