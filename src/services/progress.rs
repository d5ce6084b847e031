// ABOUTME: Progress reporting service joining record fetches with the aggregation engine
// ABOUTME: Fetches each client through one shared window and summarizes clients or whole rosters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::data::RecordSource;
use chrono::{DateTime, Utc};
use coachtrack_core::constants::trend::SAMPLES_PER_TREND;
use coachtrack_core::errors::{AppError, AppResult};
use coachtrack_core::models::Metric;
use coachtrack_core::time::{CalendarDay, Clock, TimeWindow};
use coachtrack_intelligence::config::AggregationConfig;
use coachtrack_intelligence::roster::{roster_overview, RosterOverview};
use coachtrack_intelligence::summary::{ClientRecords, ProgressAnalyzer, ProgressSummary};
use futures_util::future::try_join_all;
use tokio::task;
use tracing::{info, instrument};
use uuid::Uuid;

/// Client and roster reports over a [`RecordSource`]
pub struct ProgressService<S, C> {
    source: S,
    clock: C,
    analyzer: ProgressAnalyzer,
}

impl<S: RecordSource, C: Clock> ProgressService<S, C> {
    /// Create a service
    #[must_use]
    pub const fn new(source: S, clock: C, config: AggregationConfig) -> Self {
        Self {
            source,
            clock,
            analyzer: ProgressAnalyzer::new(config),
        }
    }

    /// Underlying record source
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// `requested`, or today under the configured day boundary
    #[must_use]
    pub fn reference_day(&self, requested: Option<CalendarDay>) -> CalendarDay {
        requested.unwrap_or_else(|| {
            self.clock
                .today(self.analyzer.config().calendar.day_boundary)
        })
    }

    /// Fetch everything one summary needs
    ///
    /// Assignments and completions come from the union of the reference
    /// month and week so both periods count against identical rows.
    /// Activities and exercise sets need the full history up to the end of
    /// that window for longest streaks and personal-record baselines.
    /// Measurements are the latest samples recorded by the end of the
    /// reference day.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error, or `ResourceNotFound` for an unknown client
    pub async fn fetch_client(
        &self,
        client_id: Uuid,
        reference: CalendarDay,
    ) -> AppResult<ClientRecords> {
        let boundary = self.analyzer.config().calendar.day_boundary;
        let reporting = self.analyzer.reporting_window(reference)?;
        let history = TimeWindow::new(DateTime::<Utc>::MIN_UTC, reporting.end())?;
        let samples_until = TimeWindow::rolling_days(reference, 1, boundary)?.end();

        let (activities, assignments, completions, exercise_sets) = tokio::try_join!(
            self.source.activities(client_id, &history),
            self.source.assignments(client_id, &reporting),
            self.source.completions(client_id, &reporting),
            self.source.exercise_sets(client_id, &history),
        )?;

        let measurements = try_join_all(
            Metric::ALL
                .iter()
                .map(|metric| {
                    self.source
                        .recent_samples(client_id, *metric, samples_until, SAMPLES_PER_TREND)
                }),
        )
        .await?
        .into_iter()
        .filter(|series| !series.samples.is_empty())
        .collect();

        Ok(ClientRecords {
            client_id,
            activities,
            assignments,
            completions,
            measurements,
            exercise_sets,
        })
    }

    /// Progress summary for one client
    ///
    /// # Errors
    ///
    /// Returns fetch errors from the record source
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn client_summary(
        &self,
        client_id: Uuid,
        reference: Option<CalendarDay>,
    ) -> AppResult<ProgressSummary> {
        let reference = self.reference_day(reference);
        let records = self.fetch_client(client_id, reference).await?;
        let summary = self.analyzer.summarize(&records, reference)?;

        info!(
            client_id = %client_id,
            reference = %reference,
            current_streak = summary.streak.current,
            monthly_completion = summary.monthly_completion.rate_percent,
            "Client summary ready"
        );
        Ok(summary)
    }

    /// Roster overview for every client the source holds
    ///
    /// Fetches run concurrently; summaries are computed in parallel on the
    /// blocking pool.
    ///
    /// # Errors
    ///
    /// Returns the first fetch or aggregation error
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn roster(&self, reference: Option<CalendarDay>) -> AppResult<RosterOverview> {
        let reference = self.reference_day(reference);
        let client_ids = self.source.clients().await?;
        let clients = try_join_all(
            client_ids
                .iter()
                .map(|client_id| self.fetch_client(*client_id, reference)),
        )
        .await?;

        let analyzer = self.analyzer;
        task::spawn_blocking(move || roster_overview(&analyzer, &clients, reference))
            .await
            .map_err(|e| AppError::internal(format!("roster aggregation task failed: {e}")))?
    }
}
