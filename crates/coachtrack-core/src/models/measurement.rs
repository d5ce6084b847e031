// ABOUTME: Dated scalar samples and the units they are measured in
// ABOUTME: Maps each unit to the dead-zone used when classifying trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::constants::trend::{
    CENTIMETERS_THRESHOLD, INCHES_THRESHOLD, KILOGRAMS_THRESHOLD, PERCENT_THRESHOLD,
    POUNDS_THRESHOLD, UNITLESS_THRESHOLD,
};
use crate::models::Dated;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One dated scalar measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
    /// Measured value
    pub value: f64,
}

impl Sample {
    /// Create a sample
    #[must_use]
    pub const fn new(recorded_at: DateTime<Utc>, value: f64) -> Self {
        Self { recorded_at, value }
    }
}

impl Dated for Sample {
    fn timestamp(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Unit a sample series is recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    /// Kilograms
    #[default]
    Kilograms,
    /// Pounds
    Pounds,
    /// Centimeters
    Centimeters,
    /// Inches
    Inches,
    /// Percentage points
    Percent,
    /// No unit; compare strictly
    Unitless,
}

impl MeasurementUnit {
    /// Changes with a magnitude at or below this value are reported as stable
    #[must_use]
    pub const fn trend_threshold(self) -> f64 {
        match self {
            Self::Kilograms => KILOGRAMS_THRESHOLD,
            Self::Pounds => POUNDS_THRESHOLD,
            Self::Centimeters => CENTIMETERS_THRESHOLD,
            Self::Inches => INCHES_THRESHOLD,
            Self::Percent => PERCENT_THRESHOLD,
            Self::Unitless => UNITLESS_THRESHOLD,
        }
    }
}

/// Tracked scalar series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Body weight
    BodyWeight,
    /// Waist circumference
    Waist,
    /// Body-fat percentage
    BodyFat,
}

impl Metric {
    /// Every tracked metric
    pub const ALL: [Self; 3] = [Self::BodyWeight, Self::Waist, Self::BodyFat];

    /// Unit the data layer stores this metric in
    #[must_use]
    pub const fn default_unit(self) -> MeasurementUnit {
        match self {
            Self::BodyWeight => MeasurementUnit::Kilograms,
            Self::Waist => MeasurementUnit::Centimeters,
            Self::BodyFat => MeasurementUnit::Percent,
        }
    }
}
