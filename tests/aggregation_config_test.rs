// ABOUTME: Integration tests for environment-driven aggregation configuration
// ABOUTME: Validates defaults, overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

use coachtrack::config::AppConfig;
use coachtrack::errors::{AppError, ErrorCode};
use coachtrack::intelligence::completion::RatePolicy;
use coachtrack::intelligence::config::{AggregationConfig, ConfigError, StreakConfig};
use coachtrack::intelligence::streak::StreakPolicy;
use coachtrack::models::MeasurementUnit;
use serial_test::serial;
use std::env;

const VARS: [&str; 5] = [
    "COACHTRACK_STREAK_POLICY",
    "COACHTRACK_STREAK_LOOKBACK",
    "COACHTRACK_COMPLETION_CLAMP",
    "COACHTRACK_TREND_THRESHOLD",
    "COACHTRACK_UTC_OFFSET_MINUTES",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_default_config_validation() {
    let config = AggregationConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.streak.policy, StreakPolicy::Tolerant);
    assert_eq!(config.streak.lookback_records, None);
    assert_eq!(config.completion.policy, RatePolicy::Unclamped);
    assert_eq!(config.trend.threshold_override, None);
    assert_eq!(config.calendar.day_boundary.utc_offset_minutes(), 0);
}

#[test]
fn test_dashboard_streak_preset() {
    let preset = StreakConfig::dashboard();
    assert_eq!(preset.policy, StreakPolicy::Tolerant);
    assert_eq!(preset.lookback_records, Some(30));
}

#[test]
fn test_threshold_falls_back_to_unit_default() {
    let config = AggregationConfig::default();
    assert_eq!(config.trend.threshold_for(MeasurementUnit::Kilograms), 0.5);
    assert_eq!(config.trend.threshold_for(MeasurementUnit::Pounds), 1.0);
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = AggregationConfig::default();
    config.streak.lookback_records = Some(0);
    assert!(config.validate().is_err());

    let mut config = AggregationConfig::default();
    config.trend.threshold_override = Some(-1.0);
    assert!(config.validate().is_err());

    config.trend.threshold_override = Some(f64::NAN);
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    clear_env();
    env::set_var("COACHTRACK_STREAK_POLICY", "Strict");
    env::set_var("COACHTRACK_STREAK_LOOKBACK", "30");
    env::set_var("COACHTRACK_COMPLETION_CLAMP", "true");
    env::set_var("COACHTRACK_TREND_THRESHOLD", "0.25");
    env::set_var("COACHTRACK_UTC_OFFSET_MINUTES", "-300");

    let config = AggregationConfig::from_environment().unwrap();
    clear_env();

    assert_eq!(config.streak.policy, StreakPolicy::Strict);
    assert_eq!(config.streak.lookback_records, Some(30));
    assert_eq!(config.completion.policy, RatePolicy::ClampAtHundred);
    assert_eq!(config.trend.threshold_override, Some(0.25));
    assert_eq!(config.calendar.day_boundary.utc_offset_minutes(), -300);
}

#[test]
#[serial]
fn test_zero_lookback_means_unlimited() {
    clear_env();
    env::set_var("COACHTRACK_STREAK_LOOKBACK", "0");
    let config = AggregationConfig::from_environment().unwrap();
    clear_env();
    assert_eq!(config.streak.lookback_records, None);
}

#[test]
#[serial]
fn test_malformed_values_are_rejected() {
    let cases = [
        ("COACHTRACK_STREAK_POLICY", "lenient"),
        ("COACHTRACK_STREAK_LOOKBACK", "-3"),
        ("COACHTRACK_COMPLETION_CLAMP", "maybe"),
        ("COACHTRACK_TREND_THRESHOLD", "half"),
        ("COACHTRACK_UTC_OFFSET_MINUTES", "east"),
    ];

    for (var, value) in cases {
        clear_env();
        env::set_var(var, value);
        let result = AggregationConfig::from_environment();
        clear_env();

        match result {
            Err(ConfigError::InvalidValue { variable, value: found }) => {
                assert_eq!(variable, var);
                assert_eq!(found, value);
            }
            other => panic!("{var}={value} should be rejected, got {other:?}"),
        }
    }
}

#[test]
#[serial]
fn test_out_of_range_values_are_rejected() {
    clear_env();
    env::set_var("COACHTRACK_UTC_OFFSET_MINUTES", "1200");
    assert!(matches!(
        AggregationConfig::from_environment(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_env();
    env::set_var("COACHTRACK_TREND_THRESHOLD", "-0.5");
    assert!(matches!(
        AggregationConfig::from_environment(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_app_config_maps_errors_to_config_invalid() {
    clear_env();
    env::set_var("COACHTRACK_COMPLETION_CLAMP", "sometimes");
    let err: AppError = AppConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains("COACHTRACK_COMPLETION_CLAMP"));
}

#[test]
fn test_config_serializes() {
    let json = serde_json::to_value(AggregationConfig::default()).unwrap();
    assert_eq!(json["streak"]["policy"], "tolerant");
    assert_eq!(json["completion"]["policy"], "unclamped");
    assert_eq!(json["calendar"]["day_boundary"], 0);
}
