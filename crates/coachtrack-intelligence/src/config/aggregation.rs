// ABOUTME: Environment-configurable policies for streak, completion, trend, and calendar handling
// ABOUTME: Replaces per-call-site boundary rules with one validated configuration value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! Aggregation Configuration
//!
//! Every policy choice the dashboards used to make implicitly lives here:
//! whether yesterday still counts toward a streak, how many records the
//! streak looks at, whether completion rates clamp at 100%, how large a
//! change must be before a trend is reported, and where a day begins.

use super::ConfigError;
use crate::completion::RatePolicy;
use crate::streak::StreakPolicy;
use coachtrack_core::constants::streak::DASHBOARD_LOOKBACK_RECORDS;
use coachtrack_core::models::MeasurementUnit;
use coachtrack_core::time::DayBoundary;
use serde::{Deserialize, Serialize};
use std::env;

const STREAK_POLICY_VAR: &str = "COACHTRACK_STREAK_POLICY";
const STREAK_LOOKBACK_VAR: &str = "COACHTRACK_STREAK_LOOKBACK";
const COMPLETION_CLAMP_VAR: &str = "COACHTRACK_COMPLETION_CLAMP";
const TREND_THRESHOLD_VAR: &str = "COACHTRACK_TREND_THRESHOLD";
const UTC_OFFSET_VAR: &str = "COACHTRACK_UTC_OFFSET_MINUTES";

/// Streak settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakConfig {
    /// Whether the run may end yesterday
    pub policy: StreakPolicy,
    /// Only the N most recent records feed the current streak; `None` = all
    pub lookback_records: Option<usize>,
}

impl StreakConfig {
    /// Settings matching the capped dashboard widgets
    #[must_use]
    pub const fn dashboard() -> Self {
        Self {
            policy: StreakPolicy::Tolerant,
            lookback_records: Some(DASHBOARD_LOOKBACK_RECORDS),
        }
    }
}

/// Completion-rate settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Clamping behaviour above 100%
    pub policy: RatePolicy,
}

/// Trend settings
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendConfig {
    /// Dead-zone applied to every unit instead of the per-unit default
    pub threshold_override: Option<f64>,
}

impl TrendConfig {
    /// Dead-zone for `unit`
    #[must_use]
    pub fn threshold_for(&self, unit: MeasurementUnit) -> f64 {
        self.threshold_override
            .unwrap_or_else(|| unit.trend_threshold())
    }
}

/// Calendar settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Offset at which days are split
    pub day_boundary: DayBoundary,
}

/// Main aggregation configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Streak settings
    pub streak: StreakConfig,
    /// Completion settings
    pub completion: CompletionConfig,
    /// Trend settings
    pub trend: TrendConfig,
    /// Calendar settings
    pub calendar: CalendarConfig,
}

impl AggregationConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = env::var(STREAK_POLICY_VAR) {
            let normalized = val.trim().to_lowercase();
            config.streak.policy = match normalized.as_str() {
                "strict" => StreakPolicy::Strict,
                "tolerant" => StreakPolicy::Tolerant,
                _ => return Err(invalid(STREAK_POLICY_VAR, val)),
            };
        }

        if let Ok(val) = env::var(STREAK_LOOKBACK_VAR) {
            let limit: usize = val
                .trim()
                .parse()
                .map_err(|_| invalid(STREAK_LOOKBACK_VAR, val.clone()))?;
            config.streak.lookback_records = (limit > 0).then_some(limit);
        }

        if let Ok(val) = env::var(COMPLETION_CLAMP_VAR) {
            let normalized = val.trim().to_lowercase();
            config.completion.policy = match normalized.as_str() {
                "true" | "1" => RatePolicy::ClampAtHundred,
                "false" | "0" => RatePolicy::Unclamped,
                _ => return Err(invalid(COMPLETION_CLAMP_VAR, val)),
            };
        }

        if let Ok(val) = env::var(TREND_THRESHOLD_VAR) {
            let threshold: f64 = val
                .trim()
                .parse()
                .map_err(|_| invalid(TREND_THRESHOLD_VAR, val.clone()))?;
            config.trend.threshold_override = Some(threshold);
        }

        if let Ok(val) = env::var(UTC_OFFSET_VAR) {
            let minutes: i32 = val
                .trim()
                .parse()
                .map_err(|_| invalid(UTC_OFFSET_VAR, val.clone()))?;
            config.calendar.day_boundary =
                DayBoundary::from_offset_minutes(minutes).map_err(|_| {
                    ConfigError::ValueOutOfRange("utc_offset_minutes must be within +/-18h")
                })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.streak.lookback_records == Some(0) {
            return Err(ConfigError::ValidationFailed(
                "lookback_records must be > 0 when set".into(),
            ));
        }

        if let Some(threshold) = self.trend.threshold_override {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValueOutOfRange(
                    "trend threshold must be a finite, non-negative number",
                ));
            }
        }

        Ok(())
    }
}

fn invalid(variable: &'static str, value: String) -> ConfigError {
    ConfigError::InvalidValue { variable, value }
}
