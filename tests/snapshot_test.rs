// ABOUTME: Integration tests for JSON progress snapshot files
// ABOUTME: Covers parsing, duplicate detection, file round trips, and storage errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coachtrack::data::ProgressSnapshot;
use coachtrack::errors::ErrorCode;
use coachtrack::intelligence::summary::ClientRecords;
use coachtrack::models::{ActivityKind, Metric};
use common::{at, sample_client, set};
use uuid::Uuid;

const SNAPSHOT_JSON: &str = r#"{
  "exported_at": "2025-06-11T20:00:00Z",
  "clients": [
    {
      "client_id": "6f1c2b0e-3a4d-4e5f-8a9b-0c1d2e3f4a5b",
      "activities": [
        {
          "id": "0b6e7f8a-1c2d-4e3f-9a0b-1c2d3e4f5a6b",
          "owner_id": "6f1c2b0e-3a4d-4e5f-8a9b-0c1d2e3f4a5b",
          "kind": "workout_session",
          "occurred_at": "2025-06-10T07:15:00Z"
        }
      ],
      "measurements": [
        {
          "metric": "body_weight",
          "unit": "pounds",
          "samples": [
            { "recorded_at": "2025-06-01T07:00:00Z", "value": 181.0 },
            { "recorded_at": "2025-06-10T07:00:00Z", "value": 179.4 }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn test_parse_snapshot_with_defaults() {
    let snapshot = ProgressSnapshot::from_json(SNAPSHOT_JSON).unwrap();
    assert_eq!(snapshot.exported_at, Some(at("2025-06-11T20:00:00Z")));
    assert_eq!(snapshot.clients.len(), 1);

    let id = Uuid::parse_str("6f1c2b0e-3a4d-4e5f-8a9b-0c1d2e3f4a5b").unwrap();
    let client = snapshot.client(id).unwrap();
    assert_eq!(client.activities[0].kind, ActivityKind::WorkoutSession);
    assert!(client.assignments.is_empty());
    assert!(client.exercise_sets.is_empty());
    let weight = client.series(Metric::BodyWeight).unwrap();
    assert_eq!(weight.samples.len(), 2);
    assert!(snapshot.client(Uuid::new_v4()).is_none());
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = ProgressSnapshot::from_json("{ \"clients\": [ {").unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[test]
fn test_bad_timestamp_is_rejected() {
    let json = SNAPSHOT_JSON.replace("2025-06-10T07:15:00Z", "yesterday");
    assert!(ProgressSnapshot::from_json(&json).is_err());
}

#[test]
fn test_duplicate_clients_are_rejected() {
    let id = Uuid::new_v4();
    let snapshot = ProgressSnapshot {
        exported_at: None,
        clients: vec![ClientRecords::new(id), ClientRecords::new(id)],
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let err = ProgressSnapshot::from_json(&json).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_blank_exercise_name_is_rejected() {
    let mut records = ClientRecords::new(Uuid::new_v4());
    records.exercise_sets = vec![set("  ", 60.0, 5, "2025-06-10")];
    let snapshot = ProgressSnapshot {
        exported_at: None,
        clients: vec![records],
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    let err = ProgressSnapshot::from_json(&json).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_save_and_load_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("snapshot.json");

    let snapshot = ProgressSnapshot {
        exported_at: Some(at("2025-06-11T20:00:00Z")),
        clients: vec![sample_client(Uuid::new_v4())],
    };
    snapshot.save(&path).await.unwrap();

    let loaded = ProgressSnapshot::load(&path).await.unwrap();
    assert_eq!(loaded, snapshot);
}

#[tokio::test]
async fn test_missing_file_is_storage_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = ProgressSnapshot::load(temp_dir.path().join("absent.json"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.is_retryable());
    assert!(err.message.contains("absent.json"));
}
