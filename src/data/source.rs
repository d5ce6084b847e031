// ABOUTME: Async RecordSource trait for fetching client records by window
// ABOUTME: Provides an in-memory implementation backed by a progress snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

//! Record sources
//!
//! The aggregation engine never fetches anything itself. A [`RecordSource`]
//! returns read-only snapshots for a client and a [`TimeWindow`]; every fetch
//! made for one report uses the same window value.

use super::snapshot::ProgressSnapshot;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use coachtrack_core::errors::{AppError, AppResult};
use coachtrack_core::models::{
    ActivityRecord, AssignmentRecord, CompletionRecord, Dated, ExerciseSet, Metric,
};
use coachtrack_core::time::TimeWindow;
use coachtrack_intelligence::summary::{ClientRecords, MeasurementSeries};
use std::cmp::Reverse;
use std::collections::HashMap;
use uuid::Uuid;

/// Read access to client records
///
/// Implementations must be `Send + Sync`; the service awaits several fetches
/// for one report.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Every client the source holds, ordered by id
    async fn clients(&self) -> AppResult<Vec<Uuid>>;

    /// Activity records inside `window`
    async fn activities(&self, owner: Uuid, window: &TimeWindow) -> AppResult<Vec<ActivityRecord>>;

    /// Workout assignments inside `window`
    async fn assignments(
        &self,
        owner: Uuid,
        window: &TimeWindow,
    ) -> AppResult<Vec<AssignmentRecord>>;

    /// Workout completions inside `window`
    async fn completions(
        &self,
        owner: Uuid,
        window: &TimeWindow,
    ) -> AppResult<Vec<CompletionRecord>>;

    /// The `limit` most recent finite samples for `metric` recorded before
    /// `until`, newest first
    async fn recent_samples(
        &self,
        owner: Uuid,
        metric: Metric,
        until: DateTime<Utc>,
        limit: usize,
    ) -> AppResult<MeasurementSeries>;

    /// Exercise sets inside `window`
    async fn exercise_sets(&self, owner: Uuid, window: &TimeWindow) -> AppResult<Vec<ExerciseSet>>;
}

/// Record source serving a snapshot held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordSource {
    clients: HashMap<Uuid, ClientRecords>,
}

impl InMemoryRecordSource {
    /// Index a snapshot by client id
    #[must_use]
    pub fn new(snapshot: ProgressSnapshot) -> Self {
        Self {
            clients: snapshot
                .clients
                .into_iter()
                .map(|records| (records.client_id, records))
                .collect(),
        }
    }

    /// Add or replace one client's records
    pub fn insert(&mut self, records: ClientRecords) {
        self.clients.insert(records.client_id, records);
    }

    fn records(&self, owner: Uuid) -> AppResult<&ClientRecords> {
        self.clients
            .get(&owner)
            .ok_or_else(|| AppError::not_found(format!("client {owner}")))
    }
}

fn within<T: Dated + Clone>(records: &[T], window: &TimeWindow) -> Vec<T> {
    window.filter(records).cloned().collect()
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    fn name(&self) -> &'static str {
        "in_memory"
    }

    async fn clients(&self) -> AppResult<Vec<Uuid>> {
        let mut ids: Vec<Uuid> = self.clients.keys().copied().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    async fn activities(&self, owner: Uuid, window: &TimeWindow) -> AppResult<Vec<ActivityRecord>> {
        Ok(within(&self.records(owner)?.activities, window))
    }

    async fn assignments(
        &self,
        owner: Uuid,
        window: &TimeWindow,
    ) -> AppResult<Vec<AssignmentRecord>> {
        Ok(within(&self.records(owner)?.assignments, window))
    }

    async fn completions(
        &self,
        owner: Uuid,
        window: &TimeWindow,
    ) -> AppResult<Vec<CompletionRecord>> {
        Ok(within(&self.records(owner)?.completions, window))
    }

    async fn recent_samples(
        &self,
        owner: Uuid,
        metric: Metric,
        until: DateTime<Utc>,
        limit: usize,
    ) -> AppResult<MeasurementSeries> {
        let Some(series) = self.records(owner)?.series(metric) else {
            return Ok(MeasurementSeries::new(metric, Vec::new()));
        };

        let mut samples: Vec<_> = series
            .samples
            .iter()
            .filter(|sample| sample.recorded_at < until && sample.value.is_finite())
            .copied()
            .collect();
        samples.sort_by_key(|sample| Reverse(sample.recorded_at));
        samples.truncate(limit);

        Ok(MeasurementSeries {
            metric,
            unit: series.unit,
            samples,
        })
    }

    async fn exercise_sets(&self, owner: Uuid, window: &TimeWindow) -> AppResult<Vec<ExerciseSet>> {
        Ok(within(&self.records(owner)?.exercise_sets, window))
    }
}
