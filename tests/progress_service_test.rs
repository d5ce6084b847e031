// ABOUTME: Integration tests for the async progress service over record sources
// ABOUTME: Covers shared fetch windows, clock injection, roster reports, and data-layer failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coachtrack::data::{InMemoryRecordSource, ProgressSnapshot, RecordSource};
use coachtrack::errors::{AppError, AppResult, ErrorCode};
use coachtrack::intelligence::config::AggregationConfig;
use coachtrack::intelligence::summary::{ClientRecords, MeasurementSeries};
use coachtrack::intelligence::trend::TrendDirection;
use coachtrack::models::{ActivityRecord, AssignmentRecord, CompletionRecord, ExerciseSet, Metric};
use coachtrack::services::ProgressService;
use coachtrack::time::{DayBoundary, FixedClock, TimeWindow};
use common::{at, day, sample_client, weights};
use std::sync::Mutex;
use uuid::Uuid;

fn snapshot_of(clients: Vec<ClientRecords>) -> ProgressSnapshot {
    ProgressSnapshot {
        exported_at: None,
        clients,
    }
}

fn fixed_clock() -> FixedClock {
    FixedClock::new(at("2025-06-11T18:00:00Z"))
}

#[tokio::test]
async fn test_client_summary_uses_clock_for_reference_day() {
    let client_id = Uuid::new_v4();
    let source = InMemoryRecordSource::new(snapshot_of(vec![sample_client(client_id)]));
    let service = ProgressService::new(source, fixed_clock(), AggregationConfig::default());

    let summary = service.client_summary(client_id, None).await.unwrap();

    assert_eq!(summary.reference_day, day("2025-06-11"));
    assert_eq!(summary.streak.current, 3);
    assert_eq!(summary.monthly_completion.rate_percent, 75);
    assert_eq!(summary.weight.latest, Some(80.5));
    assert_eq!(summary.recent_personal_records.len(), 1);
}

#[tokio::test]
async fn test_clock_respects_day_boundary() {
    let client_id = Uuid::new_v4();
    let source = InMemoryRecordSource::new(snapshot_of(vec![sample_client(client_id)]));
    let mut config = AggregationConfig::default();
    config.calendar.day_boundary = DayBoundary::from_offset_minutes(360).unwrap();
    let service = ProgressService::new(source, fixed_clock(), config);

    // 18:00 UTC is already the next day at UTC+6
    assert_eq!(service.reference_day(None), day("2025-06-12"));
    assert_eq!(service.reference_day(Some(day("2025-06-01"))), day("2025-06-01"));
}

#[tokio::test]
async fn test_explicit_reference_day_ignores_later_records() {
    let client_id = Uuid::new_v4();
    let source = InMemoryRecordSource::new(snapshot_of(vec![sample_client(client_id)]));
    let service = ProgressService::new(source, fixed_clock(), AggregationConfig::default());

    let summary = service
        .client_summary(client_id, Some(day("2025-06-09")))
        .await
        .unwrap();
    assert_eq!(summary.streak.current, 1);
    assert_eq!(summary.streak.active_days, 1);
}

#[tokio::test]
async fn test_unknown_client_is_not_found() {
    let service = ProgressService::new(
        InMemoryRecordSource::default(),
        fixed_clock(),
        AggregationConfig::default(),
    );
    let err = service.client_summary(Uuid::new_v4(), None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_recent_samples_are_newest_first_and_capped() {
    let client_id = Uuid::new_v4();
    let mut records = ClientRecords::new(client_id);
    records.measurements = vec![MeasurementSeries::new(
        Metric::BodyWeight,
        weights(&[("2025-06-01", 82.0), ("2025-06-10", 80.5), ("2025-06-05", 81.0)]),
    )];
    let source = InMemoryRecordSource::new(snapshot_of(vec![records]));

    let until = at("2025-07-01T00:00:00Z");
    let series = source
        .recent_samples(client_id, Metric::BodyWeight, until, 2)
        .await
        .unwrap();
    let values: Vec<f64> = series.samples.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![80.5, 81.0]);

    let missing = source
        .recent_samples(client_id, Metric::Waist, until, 2)
        .await
        .unwrap();
    assert!(missing.samples.is_empty());
}

#[tokio::test]
async fn test_recent_samples_skip_later_and_non_finite_values() {
    let client_id = Uuid::new_v4();
    let mut records = ClientRecords::new(client_id);
    records.measurements = vec![MeasurementSeries::new(
        Metric::BodyWeight,
        weights(&[
            ("2025-06-01", 82.0),
            ("2025-06-05", 81.0),
            ("2025-06-10", f64::NAN),
            ("2025-07-20", 90.0),
        ]),
    )];
    let source = InMemoryRecordSource::new(snapshot_of(vec![records]));

    let series = source
        .recent_samples(client_id, Metric::BodyWeight, at("2025-06-12T00:00:00Z"), 2)
        .await
        .unwrap();
    let values: Vec<f64> = series.samples.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![81.0, 82.0]);
}

#[tokio::test]
async fn test_historical_summary_ignores_later_measurements() {
    let client_id = Uuid::new_v4();
    let mut records = sample_client(client_id);
    records.measurements = vec![MeasurementSeries::new(
        Metric::BodyWeight,
        weights(&[("2025-06-01", 82.0), ("2025-06-10", 80.5), ("2025-07-20", 90.0)]),
    )];
    let mut source = InMemoryRecordSource::default();
    source.insert(records);
    let service = ProgressService::new(source, fixed_clock(), AggregationConfig::default());

    let summary = service
        .client_summary(client_id, Some(day("2025-06-11")))
        .await
        .unwrap();

    assert_eq!(summary.weight.latest, Some(80.5));
    let trend = summary.weight.trend.unwrap();
    assert_eq!(trend.direction, TrendDirection::Down);
    assert!((trend.delta + 1.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_roster_report() {
    let busy = sample_client(Uuid::new_v4());
    let mut quiet = ClientRecords::new(Uuid::new_v4());
    quiet.activities = common::workouts(quiet.client_id, &["2025-06-11"]);

    let source = InMemoryRecordSource::new(snapshot_of(vec![quiet.clone(), busy.clone()]));
    let service = ProgressService::new(source, fixed_clock(), AggregationConfig::default());

    let roster = service.roster(None).await.unwrap();
    assert_eq!(roster.reference_day, day("2025-06-11"));
    assert_eq!(roster.active_clients, 2);
    assert_eq!(roster.entries[0].client_id, busy.client_id);
    assert_eq!(roster.entries[1].client_id, quiet.client_id);
}

/// Records the windows it was asked for and fails completions on demand
struct RecordingSource {
    inner: InMemoryRecordSource,
    windows: Mutex<Vec<(&'static str, TimeWindow)>>,
    fail_completions: bool,
}

impl RecordingSource {
    fn new(records: ClientRecords, fail_completions: bool) -> Self {
        Self {
            inner: InMemoryRecordSource::new(snapshot_of(vec![records])),
            windows: Mutex::new(Vec::new()),
            fail_completions,
        }
    }

    fn record(&self, name: &'static str, window: &TimeWindow) {
        self.windows.lock().unwrap().push((name, *window));
    }

    fn window_for(&self, name: &str) -> TimeWindow {
        self.windows
            .lock()
            .unwrap()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, w)| *w)
            .unwrap()
    }
}

#[async_trait]
impl RecordSource for RecordingSource {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn clients(&self) -> AppResult<Vec<Uuid>> {
        self.inner.clients().await
    }

    async fn activities(&self, owner: Uuid, window: &TimeWindow) -> AppResult<Vec<ActivityRecord>> {
        self.record("activities", window);
        self.inner.activities(owner, window).await
    }

    async fn assignments(
        &self,
        owner: Uuid,
        window: &TimeWindow,
    ) -> AppResult<Vec<AssignmentRecord>> {
        self.record("assignments", window);
        self.inner.assignments(owner, window).await
    }

    async fn completions(
        &self,
        owner: Uuid,
        window: &TimeWindow,
    ) -> AppResult<Vec<CompletionRecord>> {
        self.record("completions", window);
        if self.fail_completions {
            return Err(AppError::external_service("records-db", "connection reset"));
        }
        self.inner.completions(owner, window).await
    }

    async fn recent_samples(
        &self,
        owner: Uuid,
        metric: Metric,
        until: DateTime<Utc>,
        limit: usize,
    ) -> AppResult<MeasurementSeries> {
        self.inner.recent_samples(owner, metric, until, limit).await
    }

    async fn exercise_sets(&self, owner: Uuid, window: &TimeWindow) -> AppResult<Vec<ExerciseSet>> {
        self.record("exercise_sets", window);
        self.inner.exercise_sets(owner, window).await
    }
}

#[tokio::test]
async fn test_assigned_and_completed_share_one_window() {
    let client_id = Uuid::new_v4();
    let service = ProgressService::new(
        RecordingSource::new(sample_client(client_id), false),
        fixed_clock(),
        AggregationConfig::default(),
    );

    service.client_summary(client_id, None).await.unwrap();

    let source = service.source();
    let assigned = source.window_for("assignments");
    assert_eq!(assigned, source.window_for("completions"));
    assert_eq!(assigned.start(), at("2025-06-01T00:00:00Z"));
    assert_eq!(assigned.end(), at("2025-07-01T00:00:00Z"));
    assert_eq!(source.window_for("activities").end(), assigned.end());
}

#[tokio::test]
async fn test_data_layer_failure_is_retryable() {
    let client_id = Uuid::new_v4();
    let service = ProgressService::new(
        RecordingSource::new(sample_client(client_id), true),
        fixed_clock(),
        AggregationConfig::default(),
    );

    let err = service.client_summary(client_id, None).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.is_retryable());
    assert!(err.to_string().contains("connection reset"));
}
