// ABOUTME: Direction and magnitude of change between the two most recent samples
// ABOUTME: Classifies deltas as up, down, or stable using a per-unit dead-zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::config::TrendConfig;
use coachtrack_core::models::{MeasurementUnit, Metric, Sample};
use serde::{Deserialize, Serialize};

/// Direction of change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Latest value is above the previous one by more than the threshold
    Up,
    /// Latest value is below the previous one by more than the threshold
    Down,
    /// Change within the dead-zone
    Stable,
}

/// Change between the two most recent samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Classified direction
    pub direction: TrendDirection,
    /// `latest - previous`
    pub delta: f64,
}

/// Classify `delta` against a symmetric dead-zone of `threshold`
#[must_use]
pub fn classify_delta(delta: f64, threshold: f64) -> TrendDirection {
    let threshold = threshold.abs();
    if delta > threshold {
        TrendDirection::Up
    } else if delta < -threshold {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

/// Most recent and second most recent finite samples
///
/// Input order does not matter. On equal timestamps the sample listed first
/// is treated as the more recent one, matching date-descending query results.
fn two_most_recent(samples: &[Sample]) -> (Option<Sample>, Option<Sample>) {
    let mut latest: Option<Sample> = None;
    let mut previous: Option<Sample> = None;

    for sample in samples.iter().filter(|s| s.value.is_finite()) {
        match latest {
            Some(current) if sample.recorded_at <= current.recorded_at => {
                let newer_than_previous = match previous {
                    Some(p) => sample.recorded_at > p.recorded_at,
                    None => true,
                };
                if newer_than_previous {
                    previous = Some(*sample);
                }
            }
            _ => {
                previous = latest;
                latest = Some(*sample);
            }
        }
    }

    (latest, previous)
}

/// Trend from the two most recent samples, or `None` with fewer than two
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use coachtrack_core::models::Sample;
/// use coachtrack_intelligence::trend::{compute_trend, TrendDirection};
///
/// let samples = [
///     Sample::new(Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap(), 80.0),
///     Sample::new(Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(), 78.5),
/// ];
/// let trend = compute_trend(&samples, 0.5).unwrap();
/// assert_eq!(trend.direction, TrendDirection::Up);
/// assert!((trend.delta - 1.5).abs() < f64::EPSILON);
/// assert!(compute_trend(&samples[..1], 0.5).is_none());
/// ```
#[must_use]
pub fn compute_trend(samples: &[Sample], threshold: f64) -> Option<Trend> {
    let (latest, previous) = match two_most_recent(samples) {
        (Some(latest), Some(previous)) => (latest, previous),
        _ => return None,
    };
    let delta = latest.value - previous.value;
    Some(Trend {
        direction: classify_delta(delta, threshold),
        delta,
    })
}

/// Latest value and trend for one tracked metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricProgress {
    /// Which metric
    pub metric: Metric,
    /// Unit values are expressed in
    pub unit: MeasurementUnit,
    /// Most recent value, if any
    pub latest: Option<f64>,
    /// Trend, if at least two samples exist
    pub trend: Option<Trend>,
}

/// Trend comparator bound to a dead-zone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendComparator {
    threshold: f64,
}

impl TrendComparator {
    /// Comparator with an explicit dead-zone
    #[must_use]
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
        }
    }

    /// Comparator using the default dead-zone for `unit`
    #[must_use]
    pub fn for_unit(unit: MeasurementUnit) -> Self {
        Self::with_threshold(unit.trend_threshold())
    }

    /// Comparator from configuration, falling back to the unit default
    #[must_use]
    pub fn from_config(config: &TrendConfig, unit: MeasurementUnit) -> Self {
        Self::with_threshold(config.threshold_for(unit))
    }

    /// Configured dead-zone
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Trend from the two most recent samples
    #[must_use]
    pub fn compare(&self, samples: &[Sample]) -> Option<Trend> {
        compute_trend(samples, self.threshold)
    }

    /// Latest value and trend for `metric`
    #[must_use]
    pub fn progress(
        &self,
        metric: Metric,
        unit: MeasurementUnit,
        samples: &[Sample],
    ) -> MetricProgress {
        let (latest, _) = two_most_recent(samples);

        MetricProgress {
            metric,
            unit,
            latest: latest.map(|s| s.value),
            trend: self.compare(samples),
        }
    }
}
