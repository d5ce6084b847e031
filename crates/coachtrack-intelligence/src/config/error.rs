// ABOUTME: Configuration error types for aggregation policy validation
// ABOUTME: Defines error variants for unparseable environment values and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! Configuration error types for aggregation policy validation.

use coachtrack_core::{AppError, ErrorCode};
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable present but not parseable
    #[error("Invalid value '{value}' for {variable}")]
    InvalidValue {
        /// Variable name
        variable: &'static str,
        /// Raw value found
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Cross-field validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigInvalid, error.to_string())
    }
}
