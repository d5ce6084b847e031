// ABOUTME: Per-client progress summary composed from streak, completion, trend, and record engines
// ABOUTME: Takes every figure for one reference day so the dashboard widgets agree with each other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! Client progress summaries.
//!
//! A [`ClientRecords`] snapshot is everything the data layer returned for one
//! client. [`ProgressAnalyzer::summarize`] turns it into the figures shown on
//! the client dashboard, all taken relative to the same reference day and day
//! boundary.

use crate::completion::{CompletionRateCalculator, CompletionSummary};
use crate::config::AggregationConfig;
use crate::personal_records::{PersonalRecord, PersonalRecordDetector};
use crate::streak::{StreakCalculator, StreakSummary};
use crate::trend::{MetricProgress, TrendComparator};
use crate::weekly::{WeeklyStats, WeeklyStatsAggregator};
use coachtrack_core::constants::records::RECENT_WINDOW_DAYS;
use coachtrack_core::errors::AppResult;
use coachtrack_core::models::{
    ActivityRecord, AssignmentRecord, CompletionRecord, ExerciseSet, MeasurementUnit, Metric,
    Sample,
};
use coachtrack_core::time::{CalendarDay, TimeWindow};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Samples for one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSeries {
    /// Which metric
    pub metric: Metric,
    /// Unit override; the metric's default unit otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<MeasurementUnit>,
    /// Samples in any order
    #[serde(default)]
    pub samples: Vec<Sample>,
}

impl MeasurementSeries {
    /// Series in the metric's default unit
    #[must_use]
    pub const fn new(metric: Metric, samples: Vec<Sample>) -> Self {
        Self {
            metric,
            unit: None,
            samples,
        }
    }

    /// Effective unit
    #[must_use]
    pub fn unit(&self) -> MeasurementUnit {
        self.unit.unwrap_or_else(|| self.metric.default_unit())
    }
}

/// Everything fetched for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecords {
    /// Client identifier
    pub client_id: Uuid,
    /// Records that mark a day as active
    #[serde(default)]
    pub activities: Vec<ActivityRecord>,
    /// Workouts assigned by the coach
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
    /// Workouts the client completed
    #[serde(default)]
    pub completions: Vec<CompletionRecord>,
    /// Body measurements
    #[serde(default)]
    pub measurements: Vec<MeasurementSeries>,
    /// Logged exercise sets
    #[serde(default)]
    pub exercise_sets: Vec<ExerciseSet>,
}

impl ClientRecords {
    /// Empty snapshot for `client_id`
    #[must_use]
    pub const fn new(client_id: Uuid) -> Self {
        Self {
            client_id,
            activities: Vec::new(),
            assignments: Vec::new(),
            completions: Vec::new(),
            measurements: Vec::new(),
            exercise_sets: Vec::new(),
        }
    }

    /// Series for `metric`, if the client tracks it
    #[must_use]
    pub fn series(&self, metric: Metric) -> Option<&MeasurementSeries> {
        self.measurements.iter().find(|series| series.metric == metric)
    }
}

/// Dashboard figures for one client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Client identifier
    pub client_id: Uuid,
    /// Day every figure is relative to
    pub reference_day: CalendarDay,
    /// Current and longest streaks
    pub streak: StreakSummary,
    /// Completion over the reference day's calendar month
    pub monthly_completion: CompletionSummary,
    /// The reference day's calendar week
    pub weekly: WeeklyStats,
    /// Body-weight progress
    pub weight: MetricProgress,
    /// Progress for every other tracked metric
    pub measurements: Vec<MetricProgress>,
    /// Personal records from the recent window
    pub recent_personal_records: Vec<PersonalRecord>,
}

/// Composes the individual engines under one configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressAnalyzer {
    config: AggregationConfig,
}

impl ProgressAnalyzer {
    /// Create an analyzer
    #[must_use]
    pub const fn new(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Window holding every record [`Self::summarize`] reads for `reference`,
    /// apart from activities needed for streaks
    ///
    /// # Errors
    ///
    /// Returns an error at the edges of the representable calendar
    pub fn reporting_window(&self, reference: CalendarDay) -> AppResult<TimeWindow> {
        let boundary = self.config.calendar.day_boundary;
        let month = TimeWindow::month_of(reference, boundary)?;
        let week = TimeWindow::calendar_week(reference, boundary)?;
        Ok(month.union(&week))
    }

    /// Summarize one client as of `reference`
    ///
    /// # Errors
    ///
    /// Returns an error if a window around `reference` cannot be represented
    pub fn summarize(
        &self,
        records: &ClientRecords,
        reference: CalendarDay,
    ) -> AppResult<ProgressSummary> {
        let boundary = self.config.calendar.day_boundary;
        let completion = CompletionRateCalculator::from_config(&self.config.completion);

        let streak = StreakCalculator::from_config(&self.config.streak, boundary)
            .summarize(&records.activities, reference);

        let month = TimeWindow::month_of(reference, boundary)?;
        let monthly_completion =
            completion.for_window(&month, &records.assignments, &records.completions);

        let weekly = WeeklyStatsAggregator::new(boundary, completion).aggregate(
            reference,
            &records.activities,
            &records.assignments,
            &records.completions,
        )?;

        let weight = self.metric_progress(
            Metric::BodyWeight,
            records.series(Metric::BodyWeight),
            reference,
        );
        let measurements = records
            .measurements
            .iter()
            .filter(|series| series.metric != Metric::BodyWeight)
            .map(|series| self.metric_progress(series.metric, Some(series), reference))
            .collect();

        let recent = TimeWindow::rolling_days(reference, RECENT_WINDOW_DAYS, boundary)?;
        let recent_personal_records: Vec<PersonalRecord> =
            PersonalRecordDetector::recent_records(&records.exercise_sets, recent.start())
                .into_iter()
                .filter(|record| recent.contains(record.lift.achieved_at))
                .collect();

        debug!(
            client_id = %records.client_id,
            reference = %reference,
            current_streak = streak.current,
            monthly_rate = monthly_completion.rate_percent,
            personal_records = recent_personal_records.len(),
            "Summarized client progress"
        );

        Ok(ProgressSummary {
            client_id: records.client_id,
            reference_day: reference,
            streak,
            monthly_completion,
            weekly,
            weight,
            measurements,
            recent_personal_records,
        })
    }

    fn metric_progress(
        &self,
        metric: Metric,
        series: Option<&MeasurementSeries>,
        reference: CalendarDay,
    ) -> MetricProgress {
        let boundary = self.config.calendar.day_boundary;
        let unit = series.map_or_else(|| metric.default_unit(), MeasurementSeries::unit);
        let samples: Vec<Sample> = series
            .into_iter()
            .flat_map(|series| series.samples.iter())
            .filter(|sample| boundary.day_of(sample.recorded_at) <= reference)
            .copied()
            .collect();
        TrendComparator::from_config(&self.config.trend, unit).progress(metric, unit, &samples)
    }
}
