// ABOUTME: JSON snapshot of client records exported from the data layer
// ABOUTME: Loads and validates snapshot files for the report CLI and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

use chrono::{DateTime, Utc};
use coachtrack_core::errors::{AppError, AppResult};
use coachtrack_intelligence::summary::ClientRecords;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

/// Records for a set of clients, as exported at one point in time
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    /// When the export was taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
    /// One entry per client
    #[serde(default)]
    pub clients: Vec<ClientRecords>,
}

impl ProgressSnapshot {
    /// Parse a snapshot from JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` for malformed JSON and `InvalidInput` when
    /// a client appears twice
    pub fn from_json(json: &str) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Read and parse a snapshot file
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, otherwise as
    /// [`Self::from_json`]
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).await.map_err(|e| {
            AppError::storage(format!("failed to read snapshot {}", path.display())).with_source(e)
        })?;
        let snapshot = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            clients = snapshot.clients.len(),
            "Loaded progress snapshot"
        );
        Ok(snapshot)
    }

    /// Write the snapshot as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be written
    pub async fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json).await?;
        Ok(())
    }

    /// Records for `client_id`
    #[must_use]
    pub fn client(&self, client_id: Uuid) -> Option<&ClientRecords> {
        self.clients
            .iter()
            .find(|records| records.client_id == client_id)
    }

    fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::with_capacity(self.clients.len());
        for records in &self.clients {
            if !seen.insert(records.client_id) {
                return Err(AppError::invalid_input(format!(
                    "client {} appears more than once in snapshot",
                    records.client_id
                )));
            }
            if records
                .exercise_sets
                .iter()
                .any(|set| set.exercise.trim().is_empty())
            {
                return Err(AppError::missing_field(format!(
                    "exercise name for a set of client {}",
                    records.client_id
                )));
            }
        }
        Ok(())
    }
}
