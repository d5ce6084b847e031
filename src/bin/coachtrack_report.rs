// ABOUTME: Coachtrack report CLI printing client and roster progress summaries as JSON
// ABOUTME: Reads a snapshot file, applies environment configuration, and writes reports to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coachtrack Contributors
//!
//! Usage:
//! ```bash
//! # Summary for one client as of today
//! coachtrack-report client --snapshot export.json --client 6f1c...
//!
//! # Roster overview as of a given day, pretty-printed
//! coachtrack-report roster --snapshot export.json --date 2025-06-15 --pretty
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use coachtrack::config::AppConfig;
use coachtrack::data::{InMemoryRecordSource, ProgressSnapshot};
use coachtrack::services::ProgressService;
use coachtrack::time::{CalendarDay, SystemClock};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "coachtrack-report",
    about = "Coachtrack progress reports",
    long_about = "Compute streaks, completion rates, trends, and personal records from a record snapshot."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Progress summary for one client
    Client {
        /// Snapshot file to read
        #[arg(long)]
        snapshot: PathBuf,

        /// Client id
        #[arg(long)]
        client: Uuid,

        /// Reference day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<CalendarDay>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Overview of every client in the snapshot
    Roster {
        /// Snapshot file to read
        #[arg(long)]
        snapshot: PathBuf,

        /// Reference day (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<CalendarDay>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn write_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

async fn service_for(
    snapshot: &Path,
    config: &AppConfig,
) -> Result<ProgressService<InMemoryRecordSource, SystemClock>> {
    let snapshot = ProgressSnapshot::load(snapshot).await?;
    Ok(ProgressService::new(
        InMemoryRecordSource::new(snapshot),
        SystemClock,
        config.aggregation,
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;
    let logging = if cli.verbose {
        config.logging.clone().verbose()
    } else {
        config.logging.clone()
    };
    logging.init()?;
    config.log_summary();

    match cli.command {
        Command::Client {
            snapshot,
            client,
            date,
            pretty,
        } => {
            let service = service_for(&snapshot, &config).await?;
            let summary = service.client_summary(client, date).await?;
            write_json(&summary, pretty)?;
        }
        Command::Roster {
            snapshot,
            date,
            pretty,
        } => {
            let service = service_for(&snapshot, &config).await?;
            let roster = service.roster(date).await?;
            info!(clients = roster.entries.len(), "Roster report written");
            write_json(&roster, pretty)?;
        }
    }

    Ok(())
}
