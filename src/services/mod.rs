// ABOUTME: Service layer joining the record-source seam with the aggregation engine
// ABOUTME: Exposes client and roster progress reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

/// Client and roster progress reports
pub mod progress;

pub use progress::ProgressService;
