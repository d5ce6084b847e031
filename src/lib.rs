// ABOUTME: Coachtrack progress reporting library
// ABOUTME: Wires logging, configuration, record sources, and reporting services around the aggregation engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors

#![deny(unsafe_code)]

//! # Coachtrack
//!
//! Streak, completion-rate, trend, and personal-record reporting for coaching
//! dashboards. The figures themselves come from `coachtrack-intelligence`;
//! this crate supplies the process around them.
//!
//! ## Architecture
//!
//! - **Data**: the async [`data::RecordSource`] seam and a JSON snapshot source
//! - **Services**: [`services::ProgressService`] fetches a client's records
//!   through one shared window and hands them to the aggregation engine
//! - **Config**: environment-driven [`config::AppConfig`]
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use coachtrack::config::AppConfig;
//! use coachtrack::data::{InMemoryRecordSource, ProgressSnapshot};
//! use coachtrack::services::ProgressService;
//! use coachtrack::time::SystemClock;
//! use coachtrack::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = AppConfig::from_env()?;
//!     let snapshot = ProgressSnapshot::load("snapshot.json").await?;
//!     let service = ProgressService::new(
//!         InMemoryRecordSource::new(snapshot),
//!         SystemClock,
//!         config.aggregation,
//!     );
//!     let roster = service.roster(None).await?;
//!     println!("{} clients", roster.entries.len());
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Record sources and snapshot files
pub mod data;

/// Structured logging setup
pub mod logging;

/// Reporting services
pub mod services;

pub use coachtrack_core::{constants, errors, models, time};
pub use coachtrack_intelligence as intelligence;
