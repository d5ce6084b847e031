// ABOUTME: Data-access seam between the aggregation engine and record storage
// ABOUTME: Declares the async RecordSource trait and the JSON snapshot implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

/// JSON snapshot files
pub mod snapshot;

/// Async record source trait and in-memory implementation
pub mod source;

pub use snapshot::ProgressSnapshot;
pub use source::{InMemoryRecordSource, RecordSource};
