// ABOUTME: Coach roster overview computed across many clients in parallel
// ABOUTME: Ranks clients by current streak so the most consistent appear first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use crate::summary::{ClientRecords, ProgressAnalyzer, ProgressSummary};
use crate::trend::TrendDirection;
use coachtrack_core::errors::AppResult;
use coachtrack_core::time::CalendarDay;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::info;
use uuid::Uuid;

/// One row of the roster table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Client identifier
    pub client_id: Uuid,
    /// Current streak
    pub current_streak: u32,
    /// Longest streak
    pub longest_streak: u32,
    /// Completion rate for the reference month
    pub monthly_completion_percent: u32,
    /// Body-weight direction, if two weigh-ins exist
    pub weight_trend: Option<TrendDirection>,
}

impl From<&ProgressSummary> for RosterEntry {
    fn from(summary: &ProgressSummary) -> Self {
        Self {
            client_id: summary.client_id,
            current_streak: summary.streak.current,
            longest_streak: summary.streak.longest,
            monthly_completion_percent: summary.monthly_completion.rate_percent,
            weight_trend: summary.weight.trend.map(|trend| trend.direction),
        }
    }
}

/// Coach-facing overview of every client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterOverview {
    /// Day every figure is relative to
    pub reference_day: CalendarDay,
    /// Clients with a non-zero current streak
    pub active_clients: usize,
    /// Rows, current streak descending then client id ascending
    pub entries: Vec<RosterEntry>,
}

/// Summarize every client in parallel, ordered by current streak descending
///
/// Ties are broken by client id so the order is deterministic.
///
/// # Errors
///
/// Returns the first error any client's summary produced
pub fn summarize_roster(
    analyzer: &ProgressAnalyzer,
    clients: &[ClientRecords],
    reference: CalendarDay,
) -> AppResult<Vec<ProgressSummary>> {
    let mut summaries = clients
        .par_iter()
        .map(|records| analyzer.summarize(records, reference))
        .collect::<AppResult<Vec<_>>>()?;

    summaries.sort_by_key(|summary| (Reverse(summary.streak.current), summary.client_id));
    Ok(summaries)
}

/// Roster table for `clients`
///
/// # Errors
///
/// Returns the first error any client's summary produced
pub fn roster_overview(
    analyzer: &ProgressAnalyzer,
    clients: &[ClientRecords],
    reference: CalendarDay,
) -> AppResult<RosterOverview> {
    let entries: Vec<RosterEntry> = summarize_roster(analyzer, clients, reference)?
        .iter()
        .map(RosterEntry::from)
        .collect();
    let active_clients = entries.iter().filter(|entry| entry.current_streak > 0).count();

    info!(
        reference = %reference,
        clients = entries.len(),
        active_clients,
        "Built roster overview"
    );

    Ok(RosterOverview {
        reference_day: reference,
        active_clients,
        entries,
    })
}
